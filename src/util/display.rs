/// Smallest magnitude printed in plain decimal form.
const PLAIN_MIN: f64 = 1e-3;
/// Magnitude from which numbers are printed in exponent form.
const PLAIN_MAX: f64 = 1e7;

/// Renders a scalar the way `out` prints it.
///
/// Magnitudes in `[1e-3, 1e7)` (and zero) use the shortest decimal form that
/// reads back to the same `f64`; anything larger or smaller uses exponent
/// notation.
///
/// # Example
/// ```
/// use seqlang::util::display::format_number;
///
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(-9.5), "-9.5");
/// assert_eq!(format_number(199_990_000.0), "1.9999e8");
/// assert_eq!(format_number(0.0001), "1e-4");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

/// Renders a sequence as `[v0, v1, ..., vn]`, each element formatted with
/// [`format_number`].
///
/// # Example
/// ```
/// use seqlang::util::display::format_sequence;
///
/// assert_eq!(format_sequence(&[1.0, 4.0, 9.0]), "[1, 4, 9]");
/// assert_eq!(format_sequence(&[]), "[]");
/// ```
#[must_use]
pub fn format_sequence(values: &[f64]) -> String {
    let items = values.iter()
                      .map(|value| format_number(*value))
                      .collect::<Vec<_>>()
                      .join(", ");
    format!("[{items}]")
}

/// Renders a value so that it can be spliced back into program text.
///
/// Plain decimal notation always tokenizes as a single number (preceded by a
/// unary minus for negative values), which exponent notation would not.
///
/// # Example
/// ```
/// use seqlang::util::display::format_for_source;
///
/// assert_eq!(format_for_source(199_990_000.0), "199990000");
/// assert_eq!(format_for_source(-0.5), "-0.5");
/// ```
#[must_use]
pub fn format_for_source(value: f64) -> String {
    format!("{value}")
}

use crate::error::EvalError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `i64` if the value is finite, exactly
/// representable and not fractional.
///
/// ## Errors
/// Returns [`EvalError::RangeNotIntegral`] for non-finite, fractional or
/// out-of-range values.
///
/// ## Example
/// ```
/// use seqlang::{error::EvalError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(21.0), Ok(21));
/// assert_eq!(f64_to_i64_checked(-3.0), Ok(-3));
/// assert_eq!(f64_to_i64_checked(1.2), Err(EvalError::RangeNotIntegral));
/// assert_eq!(f64_to_i64_checked(1e20), Err(EvalError::RangeNotIntegral));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> Result<i64, EvalError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(EvalError::RangeNotIntegral);
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(EvalError::RangeNotIntegral);
    }
    Ok(value as i64)
}

/// Converts an `i64` to `f64`.
///
/// Callers only pass values produced by [`f64_to_i64_checked`], which are
/// bounded by [`MAX_SAFE_I64_INT`], so the conversion is lossless.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Number of elements in the inclusive range `from..=to`.
///
/// Returns `0` when `from > to`.
///
/// ## Example
/// ```
/// use seqlang::util::num::inclusive_len;
///
/// assert_eq!(inclusive_len(21, 42), 22);
/// assert_eq!(inclusive_len(5, 5), 1);
/// assert_eq!(inclusive_len(3, 1), 0);
/// ```
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub const fn inclusive_len(from: i64, to: i64) -> u64 {
    if from > to {
        return 0;
    }
    (to - from) as u64 + 1
}

use crate::{
    error::EvalError,
    interpreter::{
        calculator::{Term, calc, resolve_terms},
        validator::{is_number, is_sign},
    },
    util::num::{f64_to_i64_checked, i64_to_f64, inclusive_len},
};

/// Single character symbols that always form a token of their own.
pub const SYMBOLS: &[char] = &['=', '{', '}', ',', '+', '-', '*', '/', '^', '(', ')'];

/// The lambda arrow, padded as one symbol.
pub const ARROW: &str = "->";

/// Upper bound on the number of elements a range literal may produce.
pub const MAX_SEQUENCE_LEN: u64 = 1 << 26;

/// Surrounds every symbol with single spaces.
///
/// Splitting the result on whitespace yields one word per symbol, name or
/// number. `->` is kept together as a single symbol.
///
/// # Example
/// ```
/// use seqlang::interpreter::formatter::pad_symbols;
///
/// assert_eq!(pad_symbols("a=b+1"), "a = b + 1");
/// assert_eq!(pad_symbols("i->i^2").split_whitespace().collect::<Vec<_>>(),
///            ["i", "->", "i", "^", "2"]);
/// ```
#[must_use]
pub fn pad_symbols(line: &str) -> String {
    let mut padded = String::with_capacity(line.len() * 2);
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' && chars.peek() == Some(&'>') {
            chars.next();
            padded.push(' ');
            padded.push_str(ARROW);
            padded.push(' ');
        } else if SYMBOLS.contains(&c) {
            padded.push(' ');
            padded.push(c);
            padded.push(' ');
        } else {
            padded.push(c);
        }
    }

    padded
}

/// Splits a line into words after padding its symbols.
///
/// # Example
/// ```
/// use seqlang::interpreter::formatter::tokenize;
///
/// assert_eq!(tokenize("var seq = {1,5}"),
///            ["var", "seq", "=", "{", "1", ",", "5", "}"]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    pad_symbols(line).split_whitespace().map(str::to_owned).collect()
}

/// Parses a range literal `{a, b}` into `[a, a + 1, ..., b]`.
///
/// Both bounds are arithmetic expressions evaluated with `lookup` supplying
/// variable values; each must evaluate to an integer and `a <= b`.
///
/// # Errors
/// - [`EvalError::RangeNotWrapped`] if the text is not wrapped in braces.
/// - [`EvalError::RangeItemCount`] unless there are exactly two bounds.
/// - The calculator error of a bound that cannot be evaluated.
/// - [`EvalError::RangeNotIntegral`] if a bound does not evaluate to an
///   integer.
/// - [`EvalError::RangeDescending`] if `a > b`.
/// - [`EvalError::RangeTooLarge`] if the range exceeds [`MAX_SEQUENCE_LEN`].
///
/// # Example
/// ```
/// use seqlang::{error::EvalError, interpreter::formatter::parse_range};
///
/// let n = |name: &str| (name == "n").then_some(3.0);
///
/// assert_eq!(parse_range("{1, n}", n), Ok(vec![1.0, 2.0, 3.0]));
/// assert_eq!(parse_range("{1 + 2, 4}", n), Ok(vec![3.0, 4.0]));
/// assert!(matches!(parse_range("{21, 1}", n), Err(EvalError::RangeDescending { .. })));
/// assert_eq!(parse_range("{1.2, 21}", n), Err(EvalError::RangeNotIntegral));
/// ```
pub fn parse_range<F>(text: &str, lookup: F) -> Result<Vec<f64>, EvalError>
    where F: Fn(&str) -> Option<f64>
{
    let body = text.trim()
                   .strip_prefix('{')
                   .and_then(|rest| rest.strip_suffix('}'))
                   .ok_or(EvalError::RangeNotWrapped)?;

    let items = body.split(',').collect::<Vec<_>>();
    let &[from, to] = items.as_slice() else {
        return Err(EvalError::RangeItemCount { found: items.len() });
    };

    let bound = |item: &str| calc(item, &lookup).and_then(f64_to_i64_checked);
    let from = bound(from)?;
    let to = bound(to)?;

    if from > to {
        return Err(EvalError::RangeDescending { from, to });
    }

    let len = inclusive_len(from, to);
    if len > MAX_SEQUENCE_LEN {
        return Err(EvalError::RangeTooLarge { len });
    }

    Ok((from..=to).map(i64_to_f64).collect())
}

/// Validates a free-standing arithmetic expression.
///
/// The text is tokenized and every known variable is replaced by its value.
/// If any word is neither a sign, a number nor a substituted value, the text is
/// not a plain expression.
///
/// # Errors
/// Returns [`EvalError::UnknownSymbol`] for the first word that cannot be part
/// of an arithmetic expression.
///
/// # Example
/// ```
/// use seqlang::interpreter::formatter::parse_free_expression;
///
/// let foo = |name: &str| (name == "foo").then_some(100.0);
///
/// assert!(parse_free_expression("foo + 1", foo).is_ok());
/// assert!(parse_free_expression("{foo, 200}", foo).is_err());
/// assert!(parse_free_expression("bar", foo).is_err());
/// ```
pub fn parse_free_expression<F>(text: &str, lookup: F) -> Result<Vec<Term>, EvalError>
    where F: Fn(&str) -> Option<f64>
{
    let tokens = tokenize(text);

    if let Some(token) = tokens.iter().find(|token| {
                                          let token = token.as_str();
                                          lookup(token).is_none() && !is_sign(token) && !is_number(token)
                                      })
    {
        return Err(EvalError::UnknownSymbol { token: token.clone() });
    }

    resolve_terms(&tokens, lookup)
}

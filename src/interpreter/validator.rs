use crate::{
    error::EvalError,
    interpreter::{
        calculator::calc_tokens,
        lexer::{Token, classify},
    },
};

/// Symbols that may appear in an arithmetic expression.
pub const SIGNS: &[&str] = &["+", "-", "*", "/", "^", "(", ")"];

/// Returns `true` if the word is a numeric literal.
///
/// # Example
/// ```
/// use seqlang::interpreter::validator::is_number;
///
/// assert!(is_number("42"));
/// assert!(is_number("11.5"));
/// assert!(!is_number("-1"));
/// assert!(!is_number("NaN"));
/// ```
#[must_use]
pub fn is_number(token: &str) -> bool {
    matches!(classify(token), Some(Token::Number(_)))
}

/// Returns `true` if the word is an arithmetic operator or a parenthesis.
#[must_use]
pub fn is_sign(token: &str) -> bool {
    SIGNS.contains(&token)
}

/// Returns `true` if the word can name a variable, a sequence or a lambda
/// parameter: letters only and not a reserved keyword.
///
/// # Example
/// ```
/// use seqlang::interpreter::validator::is_valid_name;
///
/// assert!(is_valid_name("count"));
/// assert!(!is_valid_name("map"));
/// assert!(!is_valid_name("var"));
/// assert!(!is_valid_name("x2"));
/// ```
#[must_use]
pub fn is_valid_name(token: &str) -> bool {
    matches!(classify(token), Some(Token::Identifier(_)))
}

/// Checks that a tokenized lambda body is a well-formed expression over its
/// parameters.
///
/// Every token must be a sign, a number or one of the declared parameters, and
/// a dry run with every parameter bound to `1` must evaluate.
///
/// # Errors
/// Returns [`EvalError::InvalidLambda`] describing the first problem found.
///
/// # Example
/// ```
/// use seqlang::interpreter::validator::check_lambda_body;
///
/// let params = vec!["i".to_string()];
/// assert!(check_lambda_body(&["i", "^", "2"], &params).is_ok());
/// assert!(check_lambda_body(&["i", "+", "k"], &params).is_err());
/// assert!(check_lambda_body(&["i", "+"], &params).is_err());
/// ```
pub fn check_lambda_body<S>(tokens: &[S], parameters: &[String]) -> Result<(), EvalError>
    where S: AsRef<str>
{
    let is_parameter = |token: &str| parameters.iter().any(|p| p == token);

    if let Some(token) = tokens.iter()
                               .map(AsRef::<str>::as_ref)
                               .find(|&t| !is_sign(t) && !is_number(t) && !is_parameter(t))
    {
        return Err(EvalError::InvalidLambda { details: format!("undefined symbol '{token}'.") });
    }

    calc_tokens(tokens, |name| is_parameter(name).then_some(1.0))
        .map(|_| ())
        .map_err(|e| EvalError::InvalidLambda { details: e.to_string() })
}

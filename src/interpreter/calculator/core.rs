use crate::{
    error::EvalError,
    interpreter::{
        calculator::{
            rpn::{evaluate_postfix, to_postfix},
            term::{Operator, Term},
        },
        formatter::tokenize,
        lexer::{Token, classify},
    },
};

/// Result type used by the calculator, the formatter and the function
/// executors.
pub type EvalResult<T> = Result<T, EvalError>;

/// A lookup that knows no names.
///
/// # Example
/// ```
/// use seqlang::interpreter::calculator::{calc, no_variables};
///
/// assert_eq!(calc("2 ^ 10", no_variables), Ok(1024.0));
/// ```
#[must_use]
pub const fn no_variables(_: &str) -> Option<f64> {
    None
}

/// Resolves whitespace separated words into terms.
///
/// Each word is first offered to `lookup`, so a name bound to a value becomes
/// that number. Otherwise it must be a numeric literal, a bracket or an
/// operator.
///
/// # Errors
/// Returns [`EvalError::UnknownSymbol`] for the first word that is none of
/// those.
pub fn resolve_terms<S, F>(tokens: &[S], lookup: F) -> EvalResult<Vec<Term>>
    where S: AsRef<str>,
          F: Fn(&str) -> Option<f64>
{
    tokens.iter()
          .map(AsRef::<str>::as_ref)
          .map(|token| {
              if let Some(value) = lookup(token) {
                  return Ok(Term::Number(value));
              }
              match classify(token) {
                  Some(Token::Number(value)) => Ok(Term::Number(value)),
                  Some(Token::LParen) => Ok(Term::OpenBracket),
                  Some(Token::RParen) => Ok(Term::CloseBracket),
                  _ => Operator::from_symbol(token).map(Term::Operator)
                                                   .ok_or_else(|| EvalError::UnknownSymbol {
                                                       token: token.to_string(),
                                                   }),
              }
          })
          .collect()
}

/// Evaluates an infix term sequence.
///
/// # Errors
/// Propagates the errors of [`to_postfix`] and [`evaluate_postfix`].
pub fn evaluate(terms: &[Term]) -> EvalResult<f64> {
    let postfix = to_postfix(terms)?;
    evaluate_postfix(&postfix)
}

/// Evaluates already tokenized expression words.
///
/// # Parameters
/// - `tokens`: Words of the expression, one symbol, number or name each.
/// - `lookup`: Supplies the value of a name, or `None` if it is unknown.
///
/// # Example
/// ```
/// use seqlang::interpreter::calculator::calc_tokens;
///
/// let x = |name: &str| (name == "x").then_some(4.0);
/// assert_eq!(calc_tokens(&["x", "*", "(", "x", "-", "1", ")"], x), Ok(12.0));
/// ```
pub fn calc_tokens<S, F>(tokens: &[S], lookup: F) -> EvalResult<f64>
    where S: AsRef<str>,
          F: Fn(&str) -> Option<f64>
{
    let terms = resolve_terms(tokens, lookup)?;
    evaluate(&terms)
}

/// Evaluates an arithmetic expression.
///
/// The text is tokenized, names are substituted through `lookup`, and the
/// result is computed with operator priorities and parentheses respected.
///
/// # Errors
/// Fails if the text contains an unknown word, has unbalanced parentheses,
/// lacks an operand, or evaluates to a non-finite number.
///
/// # Example
/// ```
/// use seqlang::{
///     error::EvalError,
///     interpreter::calculator::{calc, no_variables},
/// };
///
/// assert_eq!(calc("(-42) + 21 + 11.5", no_variables), Ok(-9.5));
/// assert_eq!(calc("2 ^ 2 ^ 3", no_variables), Ok(256.0));
/// assert_eq!(calc("1 / 0", no_variables),
///            Err(EvalError::NonFinite { value: f64::INFINITY }));
/// ```
pub fn calc<F>(expression: &str, lookup: F) -> EvalResult<f64>
    where F: Fn(&str) -> Option<f64>
{
    calc_tokens(&tokenize(expression), lookup)
}

use std::collections::HashSet;

use crate::{
    error::EvalError,
    interpreter::{
        calculator::{EvalResult, calc_tokens},
        formatter::{ARROW, tokenize},
        validator::{check_lambda_body, is_valid_name},
    },
};

/// An inline function `p1 p2 ... -> body`.
///
/// The body is an arithmetic expression over the parameters only. It is
/// validated once when the lambda is parsed, so applying it can only fail on
/// arithmetic, such as a division by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    parameters: Vec<String>,
    body:       Vec<String>,
}

impl Lambda {
    /// Parses and validates a lambda.
    ///
    /// # Parameters
    /// - `text`: The lambda source, e.g. `"i -> i ^ 2"`.
    /// - `function`: Name of the function the lambda is passed to, used in
    ///   error messages.
    /// - `arity`: Number of parameters the function requires.
    ///
    /// # Errors
    /// - [`EvalError::MissingArrow`] unless the text has exactly one `->`.
    /// - [`EvalError::LambdaArity`] if the parameter count differs from
    ///   `arity`.
    /// - [`EvalError::InvalidParameterName`] or
    ///   [`EvalError::DuplicateParameter`] for bad parameter lists.
    /// - [`EvalError::InvalidLambda`] if the body is not an expression over the
    ///   parameters.
    ///
    /// # Example
    /// ```
    /// use seqlang::{error::EvalError, interpreter::function::lambda::Lambda};
    ///
    /// let square = Lambda::parse("i -> i ^ 2", "map", 1).unwrap();
    /// assert_eq!(square.apply(&[7.0]), Ok(49.0));
    ///
    /// assert!(matches!(Lambda::parse("i -> i", "reduce", 2),
    ///                  Err(EvalError::LambdaArity { expected: 2, found: 1, .. })));
    /// ```
    pub fn parse(text: &str, function: &'static str, arity: usize) -> EvalResult<Self> {
        let tokens = tokenize(text);

        let mut arrows = tokens.iter()
                               .enumerate()
                               .filter(|(_, word)| *word == ARROW)
                               .map(|(index, _)| index);
        let (Some(arrow), None) = (arrows.next(), arrows.next()) else {
            return Err(EvalError::MissingArrow);
        };

        let (parameters, body) = (&tokens[..arrow], &tokens[arrow + 1..]);

        if parameters.len() != arity {
            return Err(EvalError::LambdaArity { function,
                                                expected: arity,
                                                found: parameters.len() });
        }

        let mut seen = HashSet::new();
        for name in parameters {
            if !is_valid_name(name) {
                return Err(EvalError::InvalidParameterName { name: name.clone() });
            }
            if !seen.insert(name.as_str()) {
                return Err(EvalError::DuplicateParameter { name: name.clone() });
            }
        }

        check_lambda_body(body, parameters)?;

        Ok(Self { parameters: parameters.to_vec(),
                  body:       body.to_vec(), })
    }

    /// The declared parameter names, in order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The body words.
    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Evaluates the body with the parameters bound positionally to `arguments`.
    ///
    /// # Errors
    /// Returns the calculator error if the body cannot be evaluated for these
    /// arguments.
    pub fn apply(&self, arguments: &[f64]) -> EvalResult<f64> {
        calc_tokens(&self.body, |name| {
            self.parameters
                .iter()
                .position(|parameter| parameter == name)
                .and_then(|index| arguments.get(index).copied())
        })
    }
}

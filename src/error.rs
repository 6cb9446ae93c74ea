/// Evaluation errors.
///
/// Defines the failures raised by the calculator, the formatter, the lambda
/// parser and the `map`/`reduce` executors. These carry no source location;
/// the interpreter attaches the line when it reports them.
pub mod eval_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the line state machine
/// consumes tokens: unexpected tokens, invalid names, missing `=`, trailing
/// tokens and incomplete statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised when a statement is evaluated, such as an
/// expression that cannot be computed or an `out` argument that is neither an
/// expression nor a sequence.
pub mod runtime_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that stops the interpretation of a line.
///
/// `Cancelled` is not a user-facing error: it signals that a stop was
/// requested while the line was being computed, and it never reaches the
/// error stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The line is syntactically invalid.
    Parse(ParseError),
    /// The line is well formed but could not be evaluated.
    Runtime(RuntimeError),
    /// Interpretation was stopped from another thread.
    Cancelled,
}

impl Error {
    /// Attaches a line number to an evaluation failure.
    ///
    /// [`EvalError::Cancelled`] is turned into [`Error::Cancelled`] so that the
    /// caller can tell a stop request apart from a real failure.
    ///
    /// # Example
    /// ```
    /// use seqlang::error::{Error, EvalError};
    ///
    /// let error = Error::eval(EvalError::UnbalancedParentheses, 3);
    /// assert_eq!(error.to_string(),
    ///            "Error on line 3: Unbalanced parentheses in expression.");
    ///
    /// assert_eq!(Error::eval(EvalError::Cancelled, 3), Error::Cancelled);
    /// ```
    #[must_use]
    pub fn eval(source: EvalError, line: usize) -> Self {
        match source {
            EvalError::Cancelled => Self::Cancelled,
            source => Self::Runtime(RuntimeError::Evaluation { source, line }),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Cancelled => write!(f, "Interpretation was cancelled."),
        }
    }
}

impl std::error::Error for Error {}

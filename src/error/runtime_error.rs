use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while a parsed statement is evaluated.
pub enum RuntimeError {
    /// An expression, range or function call could not be evaluated.
    Evaluation {
        /// What went wrong.
        source: EvalError,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The argument of `out` is neither an expression, a range, a `map` call
    /// nor a sequence.
    InvalidOutExpression {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evaluation { source, line } => write!(f, "Error on line {line}: {source}"),
            Self::InvalidOutExpression { line } => {
                write!(f, "Error on line {line}: Invalid expression in out.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation { source, .. } => Some(source),
            Self::InvalidOutExpression { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while the line parser consumes tokens.
pub enum ParseError {
    /// Found a token the current parser state cannot accept.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `var` was not followed by a valid name.
    InvalidVariableName {
        /// The rejected name.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The variable name was not followed by `=`.
    ExpectedAssign {
        /// The token found instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An arithmetic expression contains something other than a sign, a number
    /// or a known variable.
    InvalidSymbolInExpression {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A sequence name was used as an arithmetic operand.
    SequenceInExpression {
        /// The sequence name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a statement was already complete.
    UnexpectedTrailingTokens {
        /// The extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The line ended before the statement was complete.
    IncompleteStatement {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The line ended inside the argument list of a function call.
    UnclosedFunctionCall {
        /// The function name.
        function: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::InvalidVariableName { token, line } => write!(f,
                                                                "Error on line {line}: Valid name for variable expected, found '{token}'."),
            Self::ExpectedAssign { token, line } => write!(f,
                                                           "Error on line {line}: Sequence or number should be assigned to variable, found '{token}'."),
            Self::InvalidSymbolInExpression { token, line } => {
                write!(f, "Error on line {line}: Invalid symbol in expression: {token}.")
            },
            Self::SequenceInExpression { name, line } => write!(f,
                                                                "Error on line {line}: Sequence '{name}' cannot be used in an arithmetic expression."),
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after statement. Check your input: {token}"),
            Self::IncompleteStatement { line } => {
                write!(f, "Error on line {line}: Unexpected end of line.")
            },
            Self::UnclosedFunctionCall { function, line } => write!(f,
                                                                    "Error on line {line}: Expected closing parenthesis ')' for `{function}()` but none found."),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating expressions, ranges,
/// lambdas and function calls.
pub enum EvalError {
    /// A token is neither a number, an operator, a bracket nor a known name.
    UnknownSymbol {
        /// The offending token.
        token: String,
    },
    /// An opening or closing parenthesis has no partner.
    UnbalancedParentheses,
    /// An operator was reached with fewer than two operands on the stack.
    MissingOperand {
        /// The operator that could not be applied.
        operator: char,
    },
    /// The expression did not reduce to exactly one value.
    InvalidExpression,
    /// The expression evaluated to `NaN` or an infinity.
    NonFinite {
        /// The value that was produced.
        value: f64,
    },
    /// A range literal is not wrapped in `{` and `}`.
    RangeNotWrapped,
    /// A range literal does not have exactly two bounds.
    RangeItemCount {
        /// Number of comma separated items found.
        found: usize,
    },
    /// A range bound is not an integer.
    RangeNotIntegral,
    /// The lower bound of a range is greater than the upper bound.
    RangeDescending {
        /// The lower bound as written.
        from: i64,
        /// The upper bound as written.
        to:   i64,
    },
    /// A range would hold more elements than the interpreter allows.
    RangeTooLarge {
        /// Number of elements the range would contain.
        len: u64,
    },
    /// A name was used as a sequence but no such sequence exists.
    UnknownSequence {
        /// The name that was looked up.
        name: String,
    },
    /// A function argument could not be read as a sequence.
    NotASequence {
        /// The argument text.
        argument: String,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCount {
        /// The function name.
        function: &'static str,
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// The argument list is not wrapped in parentheses.
    MalformedCall {
        /// The function name.
        function: &'static str,
    },
    /// A lambda has no `->` or more than one.
    MissingArrow,
    /// A lambda declares the wrong number of parameters.
    LambdaArity {
        /// The function the lambda was passed to.
        function: &'static str,
        /// Number of parameters the function requires.
        expected: usize,
        /// Number of parameters declared.
        found:    usize,
    },
    /// A lambda parameter is not a valid name.
    InvalidParameterName {
        /// The rejected name.
        name: String,
    },
    /// The same parameter name is declared twice.
    DuplicateParameter {
        /// The repeated name.
        name: String,
    },
    /// A lambda body is not a valid expression over its parameters.
    InvalidLambda {
        /// Details describing why the body was rejected.
        details: String,
    },
    /// The parentheses of a function call never balance.
    UnclosedCall {
        /// The function name.
        function: &'static str,
    },
    /// Text follows the closing parenthesis of a function call.
    TrailingInput {
        /// The unexpected text.
        input: String,
    },
    /// A fold was requested over a sequence with no elements.
    EmptySequence,
    /// A stop was requested while the computation was running.
    Cancelled,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { token } => write!(f, "Undefined symbol: {token}."),
            Self::UnbalancedParentheses => write!(f, "Unbalanced parentheses in expression."),
            Self::MissingOperand { operator } => {
                write!(f, "Cannot evaluate: operator '{operator}' is missing an operand.")
            },
            Self::InvalidExpression => write!(f, "Cannot evaluate expression."),
            Self::NonFinite { value } => {
                write!(f, "Expression result {value} is not a finite number.")
            },
            Self::RangeNotWrapped => write!(f, "Sequence must be wrapped in {{}}."),
            Self::RangeItemCount { found } => write!(f,
                                                      "Sequence must contain 2 items separated by comma, found {found}."),
            Self::RangeNotIntegral => write!(f, "Sequence must contain only integers."),
            Self::RangeDescending { from, to } => {
                write!(f, "Wrong sequence items order: {from} is greater than {to}.")
            },
            Self::RangeTooLarge { len } => {
                write!(f, "Sequence of {len} elements is too large.")
            },
            Self::UnknownSequence { name } => write!(f, "Unknown sequence '{name}'."),
            Self::NotASequence { argument } => {
                write!(f, "Cannot read '{argument}' as a sequence.")
            },
            Self::ArgumentCount { function,
                                  expected,
                                  found, } => write!(f,
                                                     "`{function}()` requires {expected} arguments, found {found}."),
            Self::MalformedCall { function } => {
                write!(f, "Arguments of `{function}()` must be wrapped in parentheses.")
            },
            Self::MissingArrow => {
                write!(f, "Lambda should have only variable names and an expression.")
            },
            Self::LambdaArity { function,
                                expected,
                                found, } => write!(f,
                                                   "In `{function}()` lambda should have {expected} variable(s), found {found}."),
            Self::InvalidParameterName { name } => write!(f, "Invalid variable name '{name}'."),
            Self::DuplicateParameter { name } => {
                write!(f, "Lambda variable '{name}' is declared twice.")
            },
            Self::InvalidLambda { details } => {
                write!(f, "Cannot read lambda expression: {details}")
            },
            Self::UnclosedCall { function } => {
                write!(f, "Parentheses of `{function}()` are not balanced.")
            },
            Self::TrailingInput { input } => {
                write!(f, "Unexpected input after function call: {input}.")
            },
            Self::EmptySequence => write!(f, "Cannot reduce an empty sequence."),
            Self::Cancelled => write!(f, "Computation was cancelled."),
        }
    }
}

impl std::error::Error for EvalError {}

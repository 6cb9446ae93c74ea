/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}

impl Operator {
    /// Parses an operator symbol.
    ///
    /// # Example
    /// ```
    /// use seqlang::interpreter::calculator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("^"), Some(Operator::Power));
    /// assert_eq!(Operator::from_symbol("("), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }

    /// Binding strength: `+ -` bind loosest, `^` tightest.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 0,
            Self::Multiply | Self::Divide => 1,
            Self::Power => 2,
        }
    }

    /// Only `^` groups from the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Power)
    }

    /// `+` and `-` may also be written as unary signs.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// Applies the operator to `a op b` with IEEE 754 semantics.
    ///
    /// Division by zero and out-of-domain powers yield infinities or `NaN`;
    /// rejecting them is left to the caller.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Power => a.powf(b),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One resolved word of an arithmetic expression.
///
/// Variables and lambda parameters are substituted before terms are built, so
/// an expression only ever holds numbers, operators and brackets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term {
    /// A numeric operand.
    Number(f64),
    /// A binary operator (or a sign, until unary detection folds it away).
    Operator(Operator),
    /// `(`
    OpenBracket,
    /// `)`
    CloseBracket,
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenBracket => write!(f, "("),
            Self::CloseBracket => write!(f, ")"),
        }
    }
}

use logos::Logos;

/// Represents a lexical token in a program line.
///
/// A token is a minimal but meaningful unit of text. The line parser works on
/// whitespace separated words (see
/// [`tokenize`](crate::interpreter::formatter::tokenize)); this enum is used to
/// decide what a single word is, and to classify whole lines for highlighting.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `5.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `var`
    #[token("var")]
    Var,
    /// `print`
    #[token("print")]
    Print,
    /// `out`
    #[token("out")]
    Out,
    /// `map`
    #[token("map")]
    Map,
    /// `reduce`
    #[token("reduce")]
    Reduce,
    /// Identifier tokens; variable, sequence and lambda parameter names.
    /// Names contain letters only.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `->`
    #[token("->")]
    Arrow,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Assign,
}

impl Token {
    /// Returns `true` for the statement keywords `var`, `print` and `out`.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Self::Var | Self::Print | Self::Out)
    }

    /// Returns `true` for the built-in functions `map` and `reduce`.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Map | Self::Reduce)
    }
}

/// Classifies a single word.
///
/// Returns the token only if the whole word lexes as exactly one token, so
/// `"12"` is a number while `"12a"` or `"1.2.3"` are not recognized at all.
///
/// # Example
/// ```
/// use seqlang::interpreter::lexer::{Token, classify};
///
/// assert_eq!(classify("1.5"), Some(Token::Number(1.5)));
/// assert_eq!(classify("map"), Some(Token::Map));
/// assert_eq!(classify("squares"), Some(Token::Identifier("squares".into())));
/// assert_eq!(classify("x1"), None);
/// assert_eq!(classify(""), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Token> {
    let mut lexer = Token::lexer(word);
    let token = lexer.next()?.ok()?;
    if lexer.span() != (0..word.len()) || lexer.next().is_some() {
        return None;
    }
    Some(token)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

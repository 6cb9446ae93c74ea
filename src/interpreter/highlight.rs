use std::ops::Range;

use logos::Logos;

use crate::interpreter::lexer::Token;

/// Highlighting class of a piece of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `var`, `print` or `out`.
    Keyword,
    /// `map` or `reduce`.
    Function,
    /// A numeric literal.
    Number,
    /// A variable, sequence or parameter name.
    Identifier,
    /// Operators, brackets, braces, commas, `=` and `->`.
    Symbol,
    /// Text the lexer does not recognize.
    Unknown,
}

impl From<&Token> for TokenKind {
    fn from(token: &Token) -> Self {
        match token {
            t if t.is_keyword() => Self::Keyword,
            t if t.is_function() => Self::Function,
            Token::Number(_) => Self::Number,
            Token::Identifier(_) => Self::Identifier,
            _ => Self::Symbol,
        }
    }
}

/// A classified byte range of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// What the text is.
    pub kind: TokenKind,
    /// Byte range within the line.
    pub span: Range<usize>,
}

/// Classifies every token of a line for syntax highlighting.
///
/// Whitespace is skipped; unrecognized characters are reported as
/// [`TokenKind::Unknown`] so an editor can mark them.
///
/// # Example
/// ```
/// use seqlang::interpreter::highlight::{TokenKind, highlight};
///
/// let kinds = highlight("out map(s, i -> i ^ 2)").into_iter()
///                                                .map(|h| h.kind)
///                                                .collect::<Vec<_>>();
///
/// assert_eq!(kinds[..3], [TokenKind::Keyword, TokenKind::Function, TokenKind::Symbol]);
/// assert_eq!(highlight("var x = 1")[3].span, 8..9);
/// assert_eq!(highlight("out #")[1].kind, TokenKind::Unknown);
/// ```
#[must_use]
pub fn highlight(line: &str) -> Vec<Highlight> {
    let mut lexer = Token::lexer(line);
    let mut highlights = Vec::new();

    while let Some(token) = lexer.next() {
        let kind = token.as_ref().map_or(TokenKind::Unknown, TokenKind::from);
        highlights.push(Highlight { kind,
                                    span: lexer.span() });
    }

    highlights
}

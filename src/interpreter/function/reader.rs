use std::marker::PhantomData;

use crate::interpreter::{
    calculator::EvalResult,
    function::executor::core::{Executor, Scope},
};

/// Collects the text of one function call until its parentheses balance.
///
/// The reader does not parse anything: it counts `(` and `)` while text is
/// appended and reports completion once at least one bracket was opened and
/// every opened bracket was closed again. Arbitrarily nested parentheses
/// inside a lambda body, such as `i -> (-1) ^ i / (2 * i + 1)`, are therefore
/// part of the call.
///
/// The executor type `E` decides how the collected text is validated.
///
/// # Example
/// ```
/// use seqlang::interpreter::function::{
///     executor::map::MapExecutor,
///     reader::FunctionReader,
/// };
///
/// let mut reader = FunctionReader::<MapExecutor>::new();
/// for token in ["(", "{", "1", ",", "3", "}", ",", "i", "->", "(", "i", ")"] {
///     reader.read_token(token);
/// }
/// assert!(!reader.is_completed());
///
/// reader.read_token(")");
/// assert!(reader.is_completed());
/// ```
#[derive(Debug, Clone)]
pub struct FunctionReader<E> {
    text:     String,
    depth:    isize,
    opened:   bool,
    executor: PhantomData<E>,
}

impl<E> Default for FunctionReader<E> {
    fn default() -> Self {
        Self { text:     String::new(),
               depth:    0,
               opened:   false,
               executor: PhantomData, }
    }
}

impl<E> FunctionReader<E> {
    /// Creates an empty reader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one word followed by a space.
    pub fn read_token(&mut self, token: &str) {
        match token {
            "(" => self.open(),
            ")" => self.depth -= 1,
            _ => {},
        }
        self.text.push_str(token);
        self.text.push(' ');
    }

    /// Appends one character.
    pub fn read_char(&mut self, c: char) {
        match c {
            '(' => self.open(),
            ')' => self.depth -= 1,
            _ => {},
        }
        self.text.push(c);
    }

    fn open(&mut self) {
        self.depth += 1;
        self.opened = true;
    }

    /// Returns `true` once brackets were opened and are balanced again.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.opened && self.depth == 0
    }

    /// The text collected so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Discards the collected text and bracket counts.
    pub fn reset(&mut self) {
        self.text.clear();
        self.depth = 0;
        self.opened = false;
    }
}

impl<E> FunctionReader<E>
    where E: Executor
{
    /// Validates the collected call text with the bound executor.
    ///
    /// # Errors
    /// Returns the executor's validation error.
    pub fn validate(&self, scope: &Scope<'_>) -> EvalResult<E> {
        E::validate(&self.text, scope)
    }
}

use crate::{
    error::{Error, EvalError, ParseError, RuntimeError},
    interpreter::{
        calculator::{calc_tokens, evaluate},
        formatter::{parse_free_expression, parse_range},
        function::{
            executor::{
                core::{Executor, Scope, strip_call},
                map::MapExecutor,
            },
            reader::FunctionReader,
        },
        validator::{is_number, is_sign, is_valid_name},
    },
    util::display::{format_number, format_sequence},
};

/// The change a completed line makes to the interpreter.
///
/// Effects are only applied once the whole line was consumed without error, so
/// a failing line never leaves half of its work behind.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `var name = <expression>`
    StoreVariable {
        /// Variable name.
        name:  String,
        /// Evaluated value.
        value: f64,
    },
    /// `var name = <range | map | sequence>`
    StoreSequence {
        /// Sequence name.
        name:   String,
        /// Sequence elements.
        values: Vec<f64>,
    },
    /// A line of program output from `out` or `print`.
    Output(String),
}

/// The parser state for one line.
///
/// Every line starts in [`LineState::Undefined`]. Each word moves the state on
/// through [`advance`](LineState::advance), and the end of the line is handled
/// by [`complete`](LineState::complete). States own the text they buffer, so
/// nothing leaks from one line into the next.
#[derive(Debug, Default)]
pub enum LineState {
    /// Nothing read yet.
    #[default]
    Undefined,
    /// After `var`.
    ReadVariableName,
    /// After `var name`.
    ReadAssignSymbol {
        /// The declared name.
        name: String,
    },
    /// After `var name =`.
    DetermineVariableType {
        /// The declared name.
        name: String,
    },
    /// Reading an arithmetic expression for `var name = ...`.
    ReadExpression {
        /// The declared name.
        name:   String,
        /// Expression words read so far.
        tokens: Vec<String>,
    },
    /// `var name = other` where `other` is a stored sequence.
    CopySequence {
        /// The declared name.
        name:   String,
        /// The sequence being copied.
        source: String,
    },
    /// Reading a range literal up to its `}`.
    ReadSequence {
        /// The declared name, or `None` for a bare range statement.
        name: Option<String>,
        /// Literal text read so far.
        text: String,
    },
    /// Reading the argument list of `var name = map(...)`.
    ReadMap {
        /// The declared name.
        name:   String,
        /// Tracks the call's parentheses.
        reader: FunctionReader<MapExecutor>,
    },
    /// Collecting the argument of `out`.
    ReadOut {
        /// Argument text read so far.
        text: String,
    },
    /// Collecting the text of `print`.
    PrintStringConstant {
        /// Text read so far.
        text: String,
    },
    /// The statement is finished; only the end of the line may follow.
    Complete(Option<Effect>),
}

impl LineState {
    /// Consumes one word.
    ///
    /// # Parameters
    /// - `token`: The next word of the line.
    /// - `scope`: Variables, sequences and the runtime, read but never
    ///   modified.
    /// - `line`: The 1-based line number used in errors.
    ///
    /// # Returns
    /// The next state.
    ///
    /// # Errors
    /// A [`ParseError`] if the word is not allowed here, or the evaluation
    /// error of a range or `map` call that finished with this word.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use seqlang::interpreter::{
    ///     function::executor::core::Scope,
    ///     runtime::Runtime,
    ///     state::{Effect, LineState},
    /// };
    ///
    /// let runtime = Runtime::sequential();
    /// let (variables, sequences) = (HashMap::new(), HashMap::new());
    /// let scope = Scope { variables: &variables,
    ///                     sequences: &sequences,
    ///                     runtime:   &runtime, };
    ///
    /// let mut state = LineState::default();
    /// for token in ["var", "n", "=", "6", "*", "7"] {
    ///     state = state.advance(token, &scope, 1).unwrap();
    /// }
    ///
    /// assert_eq!(state.complete(&scope, 1),
    ///            Ok(Some(Effect::StoreVariable { name:  "n".into(),
    ///                                            value: 42.0, })));
    /// ```
    pub fn advance(self, token: &str, scope: &Scope<'_>, line: usize) -> Result<Self, Error> {
        match self {
            Self::Undefined => match token {
                "var" => Ok(Self::ReadVariableName),
                "print" => Ok(Self::PrintStringConstant { text: String::new() }),
                "out" => Ok(Self::ReadOut { text: String::new() }),
                "{" => Ok(Self::ReadSequence { name: None,
                                               text: token.to_string(), }),
                _ => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                       line }.into()),
            },
            Self::ReadVariableName => {
                if is_valid_name(token) {
                    Ok(Self::ReadAssignSymbol { name: token.to_string() })
                } else {
                    Err(ParseError::InvalidVariableName { token: token.to_string(),
                                                          line }.into())
                }
            },
            Self::ReadAssignSymbol { name } => {
                if token == "=" {
                    Ok(Self::DetermineVariableType { name })
                } else {
                    Err(ParseError::ExpectedAssign { token: token.to_string(),
                                                     line }.into())
                }
            },
            Self::DetermineVariableType { name } => match token {
                "{" => Ok(Self::ReadSequence { name: Some(name),
                                               text: token.to_string(), }),
                "map" => Ok(Self::ReadMap { name,
                                            reader: FunctionReader::new() }),
                _ if scope.sequence(token).is_some() => {
                    Ok(Self::CopySequence { name,
                                            source: token.to_string() })
                },
                _ => Self::ReadExpression { name,
                                            tokens: Vec::new() }.advance(token, scope, line),
            },
            Self::ReadExpression { name, mut tokens } => {
                if is_sign(token) || is_number(token) || scope.variable(token).is_some() {
                    tokens.push(token.to_string());
                    Ok(Self::ReadExpression { name, tokens })
                } else if scope.sequence(token).is_some() {
                    Err(ParseError::SequenceInExpression { name: token.to_string(),
                                                           line }.into())
                } else {
                    Err(ParseError::InvalidSymbolInExpression { token: token.to_string(),
                                                                line }.into())
                }
            },
            Self::CopySequence { source, .. } => {
                Err(ParseError::SequenceInExpression { name: source, line }.into())
            },
            Self::ReadSequence { name, mut text } => {
                text.push(' ');
                text.push_str(token);
                if token != "}" {
                    return Ok(Self::ReadSequence { name, text });
                }
                let values = parse_range(&text, |variable| scope.variable(variable))
                    .map_err(|e| Error::eval(e, line))?;
                Ok(Self::Complete(name.map(|name| Effect::StoreSequence { name, values })))
            },
            Self::ReadMap { name, mut reader } => {
                if reader.text().is_empty() && token != "(" {
                    return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                             line }.into());
                }
                reader.read_token(token);
                if !reader.is_completed() {
                    return Ok(Self::ReadMap { name, reader });
                }
                let values = compute_map(&reader, scope).map_err(|e| Error::eval(e, line))?;
                Ok(Self::Complete(Some(Effect::StoreSequence { name, values })))
            },
            Self::ReadOut { mut text } => {
                text.push_str(token);
                text.push(' ');
                Ok(Self::ReadOut { text })
            },
            Self::PrintStringConstant { mut text } => {
                text.push_str(token);
                text.push(' ');
                Ok(Self::PrintStringConstant { text })
            },
            Self::Complete(_) => {
                Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                           line }.into())
            },
        }
    }

    /// Finishes the line.
    ///
    /// # Returns
    /// The effect of the statement, or `None` for an empty line or a bare
    /// range.
    ///
    /// # Errors
    /// - [`ParseError::IncompleteStatement`] if the line stopped inside a
    ///   `var` header.
    /// - [`ParseError::UnclosedFunctionCall`] for an unfinished `map` call.
    /// - [`RuntimeError::InvalidOutExpression`] if an `out` argument matches no
    ///   form.
    /// - Evaluation errors of the buffered expression, range or call.
    pub fn complete(self, scope: &Scope<'_>, line: usize) -> Result<Option<Effect>, Error> {
        match self {
            Self::Undefined => Ok(None),
            Self::ReadVariableName
            | Self::ReadAssignSymbol { .. }
            | Self::DetermineVariableType { .. } => {
                Err(ParseError::IncompleteStatement { line }.into())
            },
            Self::ReadExpression { name, tokens } => {
                let value = calc_tokens(&tokens, |variable| scope.variable(variable))
                    .map_err(|e| Error::eval(e, line))?;
                Ok(Some(Effect::StoreVariable { name, value }))
            },
            Self::CopySequence { name, source } => {
                let values = scope.sequence(&source)
                                  .map(<[f64]>::to_vec)
                                  .ok_or_else(|| {
                                      Error::eval(EvalError::UnknownSequence { name: source }, line)
                                  })?;
                Ok(Some(Effect::StoreSequence { name, values }))
            },
            Self::ReadSequence { text, .. } => {
                parse_range(&text, |name| scope.variable(name)).map_err(|e| Error::eval(e, line))?;
                Ok(None)
            },
            Self::ReadMap { .. } => {
                Err(ParseError::UnclosedFunctionCall { function: MapExecutor::NAME,
                                                       line }.into())
            },
            Self::ReadOut { text } => resolve_out(text.trim(), scope, line).map(Some),
            Self::PrintStringConstant { text } => {
                Ok(Some(Effect::Output(text.trim().to_string())))
            },
            Self::Complete(effect) => Ok(effect),
        }
    }
}

/// Validates and runs a collected `map` call.
fn compute_map(reader: &FunctionReader<MapExecutor>,
               scope: &Scope<'_>)
               -> Result<Vec<f64>, EvalError> {
    reader.validate(scope)?.compute(scope.runtime)?.complete()
}

/// Resolves the argument of `out` to the text it prints.
///
/// The forms are tried in order: arithmetic expression, range literal, `map`
/// call, stored sequence. A range or `map` argument reports its own error.
fn resolve_out(text: &str, scope: &Scope<'_>, line: usize) -> Result<Effect, Error> {
    let lookup = |name: &str| scope.variable(name);
    let eval = |e| Error::eval(e, line);

    if text.is_empty() {
        return Err(RuntimeError::InvalidOutExpression { line }.into());
    }

    if let Ok(terms) = parse_free_expression(text, lookup) {
        let value = evaluate(&terms).map_err(eval)?;
        return Ok(Effect::Output(format_number(value)));
    }

    if text.starts_with('{') {
        let values = parse_range(text, lookup).map_err(eval)?;
        return Ok(Effect::Output(format_sequence(&values)));
    }

    if let Some(call) = strip_call(text, MapExecutor::NAME) {
        let mut reader = FunctionReader::<MapExecutor>::new();
        let end = call.char_indices()
                      .find_map(|(index, c)| {
                          reader.read_char(c);
                          reader.is_completed().then_some(index + c.len_utf8())
                      })
                      .ok_or(EvalError::UnclosedCall { function: MapExecutor::NAME })
                      .map_err(eval)?;

        let rest = call[end..].trim();
        if !rest.is_empty() {
            return Err(eval(EvalError::TrailingInput { input: rest.to_string() }));
        }

        let values = compute_map(&reader, scope).map_err(eval)?;
        return Ok(Effect::Output(format_sequence(&values)));
    }

    if let Some(values) = scope.sequence(text) {
        return Ok(Effect::Output(format_sequence(values)));
    }

    Err(RuntimeError::InvalidOutExpression { line }.into())
}

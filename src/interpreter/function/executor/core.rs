use std::collections::HashMap;

use crate::{
    error::EvalError,
    interpreter::{
        calculator::EvalResult,
        formatter::parse_range,
        function::executor::map::MapExecutor,
        runtime::{Outcome, Runtime},
        validator::is_valid_name,
    },
};

/// Read access to the interpreter state a function call may depend on.
///
/// Sequence arguments can name stored sequences, range bounds and seeds can
/// use variables, and a nested `map` argument is computed on `runtime`.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    /// Scalar variables.
    pub variables: &'a HashMap<String, f64>,
    /// Stored sequences.
    pub sequences: &'a HashMap<String, Vec<f64>>,
    /// Where nested computations run.
    pub runtime:   &'a Runtime,
}

impl Scope<'_> {
    /// Looks up a scalar variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Looks up a stored sequence.
    #[must_use]
    pub fn sequence(&self, name: &str) -> Option<&[f64]> {
        self.sequences.get(name).map(Vec::as_slice)
    }
}

/// A built-in higher-order function.
///
/// Calls are handled in two steps. [`validate`](Executor::validate) parses the
/// argument list, resolves the input sequence, and parses the lambda; it
/// returns a ready-to-run executor or the first problem found.
/// [`compute`](Executor::compute) then does the work. Keeping the two apart
/// lets a call be checked before any long computation starts.
pub trait Executor: Sized {
    /// What a completed call produces.
    type Output;

    /// The function name as written in programs.
    const NAME: &'static str;

    /// Parses and validates the text of a call.
    ///
    /// # Parameters
    /// - `call`: The argument list including its outer parentheses, e.g.
    ///   `"({1, 5}, i -> i ^ 2)"`.
    /// - `scope`: Variables, sequences and the runtime for nested calls.
    fn validate(call: &str, scope: &Scope<'_>) -> EvalResult<Self>;

    /// Runs the validated call.
    ///
    /// The stop flag of `runtime` is polled before every element; a stopped
    /// computation returns [`Outcome::Cancelled`] with a partial result.
    fn compute(self, runtime: &Runtime) -> EvalResult<Outcome<Self::Output>>;
}

/// Splits an argument list into its top-level arguments.
///
/// The list must be wrapped in parentheses. Commas nested inside `()` or `{}`
/// do not split, so ranges and nested calls stay whole.
///
/// # Errors
/// - [`EvalError::MalformedCall`] if the text is not wrapped in parentheses.
/// - [`EvalError::ArgumentCount`] if the number of arguments is not
///   `expected`.
///
/// # Example
/// ```
/// use seqlang::interpreter::function::executor::core::split_arguments;
///
/// let args = split_arguments("(map({1, 3}, i -> i), 0, a b -> a + b)", "reduce", 3).unwrap();
/// assert_eq!(args, ["map({1, 3}, i -> i)", "0", "a b -> a + b"]);
///
/// assert!(split_arguments("{1, 3}, i -> i", "map", 2).is_err());
/// ```
pub fn split_arguments<'a>(call: &'a str,
                           function: &'static str,
                           expected: usize)
                           -> EvalResult<Vec<&'a str>> {
    let inner = call.trim()
                    .strip_prefix('(')
                    .and_then(|rest| rest.strip_suffix(')'))
                    .ok_or(EvalError::MalformedCall { function })?;

    let mut arguments = Vec::with_capacity(expected);
    let mut depth = 0_isize;
    let mut start = 0;

    for (index, c) in inner.char_indices() {
        match c {
            '(' | '{' => depth += 1,
            ')' | '}' => depth -= 1,
            ',' if depth == 0 => {
                arguments.push(inner[start..index].trim());
                start = index + 1;
            },
            _ => {},
        }
    }
    arguments.push(inner[start..].trim());

    if arguments.len() != expected {
        return Err(EvalError::ArgumentCount { function,
                                              expected,
                                              found: arguments.len() });
    }

    Ok(arguments)
}

/// Resolves a sequence argument.
///
/// The argument may be the name of a stored sequence, a range literal
/// `{a, b}` whose bounds can use variables, or a nested `map(...)` call, which
/// is validated and computed immediately.
///
/// # Errors
/// - [`EvalError::UnknownSequence`] for a name with no stored sequence.
/// - Range and `map` errors for those forms.
/// - [`EvalError::Cancelled`] if a nested `map` was stopped.
/// - [`EvalError::NotASequence`] for anything else.
pub fn resolve_sequence(argument: &str, scope: &Scope<'_>) -> EvalResult<Vec<f64>> {
    let argument = argument.trim();

    if is_valid_name(argument) {
        return scope.sequence(argument)
                    .map(<[f64]>::to_vec)
                    .ok_or_else(|| EvalError::UnknownSequence { name: argument.to_string() });
    }

    if argument.starts_with('{') {
        return parse_range(argument, |name| scope.variable(name));
    }

    if let Some(call) = strip_call(argument, MapExecutor::NAME) {
        return MapExecutor::validate(call, scope)?.compute(scope.runtime)?
                                                  .complete();
    }

    Err(EvalError::NotASequence { argument: argument.to_string() })
}

/// Returns the argument list of `text` if it is a call to `function`.
///
/// # Example
/// ```
/// use seqlang::interpreter::function::executor::core::strip_call;
///
/// assert_eq!(strip_call("map ({1, 2}, i -> i)", "map"), Some("({1, 2}, i -> i)"));
/// assert_eq!(strip_call("mapped", "map"), None);
/// ```
#[must_use]
pub fn strip_call<'a>(text: &'a str, function: &str) -> Option<&'a str> {
    text.trim()
        .strip_prefix(function)
        .map(str::trim_start)
        .filter(|rest| rest.starts_with('('))
}

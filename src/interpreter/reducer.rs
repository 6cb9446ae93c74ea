use crate::{
    error::EvalError,
    interpreter::{
        calculator::EvalResult,
        formatter::pad_symbols,
        function::{
            executor::{
                core::{Executor, Scope},
                reduce::ReduceExecutor,
            },
            reader::FunctionReader,
        },
    },
    util::display::format_for_source,
};

/// Replaces every `reduce(...)` call in a line by its value.
///
/// Calls are resolved from the last occurrence backwards. The last `reduce`
/// in a line never contains another one, so nested calls are evaluated from
/// the inside out and an outer call only ever sees numbers in place of its
/// inner calls. Each call is spliced out by its exact position, so identical
/// calls elsewhere in the line are untouched until their own turn.
///
/// Lines starting with `print` are returned unchanged; their text is output
/// verbatim.
///
/// # Errors
/// - [`EvalError::UnclosedCall`] if a call's parentheses never balance.
/// - Any validation or evaluation error of a call.
/// - [`EvalError::Cancelled`] if a stop was requested during a fold.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use seqlang::interpreter::{
///     function::executor::core::Scope,
///     reducer::reduce_line,
///     runtime::Runtime,
/// };
///
/// let runtime = Runtime::sequential();
/// let (variables, sequences) = (HashMap::new(), HashMap::new());
/// let scope = Scope { variables: &variables,
///                     sequences: &sequences,
///                     runtime:   &runtime, };
///
/// assert_eq!(reduce_line("out 1 + reduce({1, 4}, 0, a b -> a + b)", &scope).unwrap(),
///            "out 1 + 10");
/// assert_eq!(reduce_line("out reduce({1, reduce({1, 2}, 0, a b -> a + b)}, 1, a b -> a * b)",
///                        &scope).unwrap(),
///            "out 6");
/// ```
pub fn reduce_line(line: &str, scope: &Scope<'_>) -> EvalResult<String> {
    let mut line = line.to_string();

    if pad_symbols(&line).split_whitespace().next() == Some("print") {
        return Ok(line);
    }

    while let Some(start) = find_last_word(&line, ReduceExecutor::NAME) {
        let call_start = start + ReduceExecutor::NAME.len();
        let unclosed = EvalError::UnclosedCall { function: ReduceExecutor::NAME };

        let mut reader = FunctionReader::<ReduceExecutor>::new();
        let call_end = line[call_start..].char_indices()
                                         .find_map(|(index, c)| {
                                             reader.read_char(c);
                                             reader.is_completed()
                                                   .then_some(call_start + index + c.len_utf8())
                                         })
                                         .ok_or(unclosed)?;

        let value = reader.validate(scope)?
                          .compute(scope.runtime)?
                          .complete()?;
        tracing::debug!(call = &line[start..call_end], value, "reduce resolved");

        line.replace_range(start..call_end, &format_for_source(value));
    }

    Ok(line)
}

/// Finds the byte offset of the last occurrence of `word` that is not part of
/// a longer name.
///
/// # Example
/// ```
/// use seqlang::interpreter::reducer::find_last_word;
///
/// assert_eq!(find_last_word("reduce(x) + reduced + reduce(y)", "reduce"), Some(22));
/// assert_eq!(find_last_word("unreduced", "reduce"), None);
/// ```
#[must_use]
pub fn find_last_word(text: &str, word: &str) -> Option<usize> {
    let is_name_char = |c: char| c.is_ascii_alphanumeric();
    let is_whole_word = |index: usize| {
        let before = text[..index].chars().next_back();
        let after = text[index + word.len()..].chars().next();
        !before.is_some_and(is_name_char) && !after.is_some_and(is_name_char)
    };

    text.rmatch_indices(word)
        .map(|(index, _)| index)
        .find(|&index| is_whole_word(index))
}

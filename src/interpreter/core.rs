use std::collections::HashMap;

use rayon::ThreadPoolBuildError;

use crate::{
    error::Error,
    interpreter::{
        formatter::tokenize,
        function::executor::core::Scope,
        reducer::reduce_line,
        runtime::{Runtime, RuntimeConfig, StopHandle},
        state::{Effect, LineState},
    },
};

/// The state a program builds up: stored values and the two output streams.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Scalar variables by name.
    pub variables: HashMap<String, f64>,
    /// Sequences by name.
    pub sequences: HashMap<String, Vec<f64>>,
    /// Program output of the current run, one entry per `out` or `print`.
    pub output:    Vec<String>,
    /// Error messages of the current run.
    pub errors:    Vec<String>,
}

impl Context {
    /// Applies the effect of a completed line.
    ///
    /// A name is bound in at most one table: storing a number drops a sequence
    /// of the same name and the other way round.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StoreVariable { name, value } => {
                self.sequences.remove(&name);
                self.variables.insert(name, value);
            },
            Effect::StoreSequence { name, values } => {
                self.variables.remove(&name);
                self.sequences.insert(name, values);
            },
            Effect::Output(text) => self.output.push(text),
        }
    }
}

/// The result of one [`Interpreter::interpret`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterpreterOutput {
    /// Program output, one line per `out` or `print`, joined with `\n`.
    pub output:    String,
    /// Error messages joined with `\n`; empty on success.
    pub errors:    String,
    /// `true` if the run was stopped. The output is then partial and should
    /// be discarded.
    pub cancelled: bool,
}

impl InterpreterOutput {
    /// Returns `true` if the run produced no errors.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs programs line by line.
///
/// An interpreter keeps its variables and sequences across
/// [`interpret`](Self::interpret) calls until [`reset`](Self::reset). The
/// worker pool used by large `map` calls is created with the interpreter and
/// shut down when it is dropped.
///
/// # Example
/// ```
/// use seqlang::interpreter::core::Interpreter;
///
/// let mut interpreter = Interpreter::new();
///
/// let result = interpreter.interpret("var squares = map({1, 5}, i -> i ^ 2)\nout squares");
/// assert_eq!(result.output, "[1, 4, 9, 16, 25]");
/// assert!(result.errors.is_empty());
///
/// let result = interpreter.interpret("out reduce(squares, 0, a b -> a + b)");
/// assert_eq!(result.output, "55");
/// ```
#[derive(Debug)]
pub struct Interpreter {
    context: Context,
    runtime: Runtime,
}

impl Interpreter {
    /// Creates an interpreter with the default [`RuntimeConfig`].
    ///
    /// Falls back to sequential execution if the worker pool cannot be built.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default()).unwrap_or_else(|error| {
            tracing::warn!(%error, "worker pool unavailable, running map sequentially");
            Self::with_runtime(Runtime::sequential())
        })
    }

    /// Creates an interpreter with an explicit configuration.
    ///
    /// # Errors
    /// Returns the pool build error if the worker threads cannot be spawned.
    pub fn with_config(config: RuntimeConfig) -> Result<Self, ThreadPoolBuildError> {
        Ok(Self::with_runtime(Runtime::new(&config)?))
    }

    /// Creates an interpreter on an existing runtime.
    #[must_use]
    pub fn with_runtime(runtime: Runtime) -> Self {
        Self { context: Context::default(),
               runtime }
    }

    /// Interprets a whole program.
    ///
    /// Each line is run through the `reduce` pre-pass, split into words and
    /// fed through a fresh [`LineState`]. The effect of a line is applied only
    /// after the line completed. The first failing line stops the run; output
    /// committed before it is kept.
    ///
    /// The output and error streams are cleared first, as is any earlier stop
    /// request.
    ///
    /// # Example
    /// ```
    /// use seqlang::interpreter::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// let result = interpreter.interpret("out 1\nout 44.0 + 56)\nout 2");
    /// assert_eq!(result.output, "1");
    /// assert_eq!(result.errors, "Error on line 2: Unbalanced parentheses in expression.");
    /// ```
    pub fn interpret(&mut self, source: &str) -> InterpreterOutput {
        self.context.output.clear();
        self.context.errors.clear();
        self.runtime.stop_handle().clear();

        let mut cancelled = false;

        for (index, text) in source.lines().enumerate() {
            let line = index + 1;

            if self.runtime.is_stopped() {
                cancelled = true;
                break;
            }

            match self.interpret_line(text, line) {
                Ok(Some(effect)) => self.context.apply(effect),
                Ok(None) => {},
                Err(Error::Cancelled) => {
                    cancelled = true;
                    break;
                },
                Err(error) => {
                    self.context.errors.push(error.to_string());
                    break;
                },
            }
        }

        if cancelled {
            tracing::info!("interpretation cancelled");
        }

        InterpreterOutput { output: self.context.output.join("\n"),
                            errors: self.context.errors.join("\n"),
                            cancelled }
    }

    fn interpret_line(&self, text: &str, line: usize) -> Result<Option<Effect>, Error> {
        tracing::debug!(line, text, "interpreting line");

        let scope = self.scope();
        let text = reduce_line(text, &scope).map_err(|e| Error::eval(e, line))?;

        let mut state = LineState::default();
        for token in tokenize(&text) {
            state = state.advance(&token, &scope, line)?;
        }
        state.complete(&scope, line)
    }

    fn scope(&self) -> Scope<'_> {
        Scope { variables: &self.context.variables,
                sequences: &self.context.sequences,
                runtime:   &self.runtime, }
    }

    /// Requests cancellation of a running [`interpret`](Self::interpret).
    ///
    /// Use [`stop_handle`](Self::stop_handle) to signal from another thread
    /// while `interpret` holds the interpreter.
    pub fn stop(&self) {
        self.runtime.stop_handle().stop();
    }

    /// A handle that stops this interpreter from any thread.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.runtime.stop_handle().clone()
    }

    /// Clears all variables, sequences, streams and any stop request.
    pub fn reset(&mut self) {
        self.context = Context::default();
        self.runtime.stop_handle().clear();
    }

    /// The value of a scalar variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.context.variables.get(name).copied()
    }

    /// The elements of a stored sequence.
    #[must_use]
    pub fn sequence(&self, name: &str) -> Option<&[f64]> {
        self.context.sequences.get(name).map(Vec::as_slice)
    }

    /// The accumulated program state.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

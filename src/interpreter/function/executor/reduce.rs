use crate::{
    error::EvalError,
    interpreter::{
        calculator::{EvalResult, calc},
        function::{
            executor::core::{Executor, Scope, resolve_sequence, split_arguments},
            lambda::Lambda,
        },
        runtime::{Outcome, Runtime},
    },
};

/// `reduce(sequence, seed, a b -> expr)`: a left fold combined with a seed.
///
/// For `[v0, v1, ..., vn]` the result is `f(seed, f(...f(f(v0, v1), v2)...,
/// vn))`. The fold always runs on the calling thread so that the grouping of
/// floating point operations never depends on batching.
#[derive(Debug, Clone, PartialEq)]
pub struct ReduceExecutor {
    sequence: Vec<f64>,
    seed:     f64,
    lambda:   Lambda,
}

impl ReduceExecutor {
    /// The evaluated seed.
    #[must_use]
    pub const fn seed(&self) -> f64 {
        self.seed
    }
}

impl Executor for ReduceExecutor {
    type Output = f64;

    const NAME: &'static str = "reduce";

    fn validate(call: &str, scope: &Scope<'_>) -> EvalResult<Self> {
        let arguments = split_arguments(call, Self::NAME, 3)?;
        let lambda = Lambda::parse(arguments[2], Self::NAME, 2)?;
        let sequence = resolve_sequence(arguments[0], scope)?;
        let seed = calc(arguments[1], |name| scope.variable(name))?;

        Ok(Self { sequence,
                  seed,
                  lambda })
    }

    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use seqlang::interpreter::{
    ///     function::executor::{
    ///         core::{Executor, Scope},
    ///         reduce::ReduceExecutor,
    ///     },
    ///     runtime::{Outcome, Runtime},
    /// };
    ///
    /// let runtime = Runtime::sequential();
    /// let (variables, sequences) = (HashMap::new(), HashMap::new());
    /// let scope = Scope { variables: &variables,
    ///                     sequences: &sequences,
    ///                     runtime:   &runtime, };
    ///
    /// let sum = ReduceExecutor::validate("({1, 5}, 0, a b -> a + b)", &scope).unwrap();
    /// assert_eq!(sum.compute(&runtime), Ok(Outcome::Complete(15.0)));
    /// ```
    fn compute(self, runtime: &Runtime) -> EvalResult<Outcome<f64>> {
        let Some((&first, rest)) = self.sequence.split_first() else {
            return Err(EvalError::EmptySequence);
        };

        let mut accumulator = first;
        for &next in rest {
            if runtime.is_stopped() {
                return Ok(Outcome::Cancelled(accumulator));
            }
            accumulator = self.lambda.apply(&[accumulator, next])?;
        }

        self.lambda
            .apply(&[self.seed, accumulator])
            .map(Outcome::Complete)
    }
}

use crate::interpreter::{
    calculator::EvalResult,
    function::{
        executor::core::{Executor, Scope, resolve_sequence, split_arguments},
        lambda::Lambda,
    },
    runtime::{Outcome, Runtime},
};

/// `map(sequence, i -> expr)`: a new sequence with the lambda applied to
/// every element.
#[derive(Debug, Clone, PartialEq)]
pub struct MapExecutor {
    sequence: Vec<f64>,
    lambda:   Lambda,
}

impl MapExecutor {
    /// The resolved input sequence.
    #[must_use]
    pub fn sequence(&self) -> &[f64] {
        &self.sequence
    }

    /// The validated lambda.
    #[must_use]
    pub const fn lambda(&self) -> &Lambda {
        &self.lambda
    }
}

impl Executor for MapExecutor {
    type Output = Vec<f64>;

    const NAME: &'static str = "map";

    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use seqlang::interpreter::{
    ///     function::executor::{
    ///         core::{Executor, Scope},
    ///         map::MapExecutor,
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
    /// let map = MapExecutor::validate("({1, 5}, i -> i ^ 2)", &scope).unwrap();
    /// assert_eq!(map.compute(&runtime),
    ///            Ok(Outcome::Complete(vec![1.0, 4.0, 9.0, 16.0, 25.0])));
    /// ```
    fn validate(call: &str, scope: &Scope<'_>) -> EvalResult<Self> {
        let arguments = split_arguments(call, Self::NAME, 2)?;
        let lambda = Lambda::parse(arguments[1], Self::NAME, 1)?;
        let sequence = resolve_sequence(arguments[0], scope)?;

        Ok(Self { sequence, lambda })
    }

    fn compute(self, runtime: &Runtime) -> EvalResult<Outcome<Vec<f64>>> {
        let Self { mut sequence, lambda } = self;

        let outcome = runtime.map_values(&mut sequence, |value| lambda.apply(&[value]));

        Ok(outcome.map(|()| sequence))
    }
}

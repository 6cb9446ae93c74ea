/// Bracket depth tracking for function calls.
///
/// Accumulates the argument text of a `map(...)` or `reduce(...)` call until
/// its parentheses balance, then hands it to the bound executor.
pub mod reader;
/// Inline lambdas.
///
/// Parses `i -> expr` and `a b -> expr`, validates the body against the
/// declared parameters and applies it to arguments.
pub mod lambda;
/// The built-in higher-order functions.
///
/// Declares the shared executor contract and the `map` and `reduce`
/// implementations.
pub mod executor;

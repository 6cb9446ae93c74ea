/// Operators and the terms an expression is made of.
///
/// Defines [`Operator`] with its priority, associativity and arithmetic, and
/// [`Term`], the resolved form of one word of an expression.
pub mod term;

/// Shunting-yard conversion and postfix evaluation.
///
/// Converts an infix term sequence to reverse Polish notation and evaluates
/// it on an operand stack.
pub mod rpn;

/// Entry points for evaluating expression text.
///
/// Tokenizes, substitutes variables and runs the full infix to value pipeline.
pub mod core;

pub use self::{
    core::{EvalResult, calc, calc_tokens, evaluate, no_variables, resolve_terms},
    term::{Operator, Term},
};

/// The calculator module evaluates arithmetic expressions.
///
/// Expressions are resolved into terms, converted from infix to reverse Polish
/// notation with the shunting-yard algorithm and evaluated on an operand
/// stack. It is the only numeric engine of the interpreter.
///
/// # Responsibilities
/// - Substitutes variable and parameter values through a lookup function.
/// - Applies operator priorities, `^` right associativity and unary signs.
/// - Rejects unbalanced parentheses, missing operands and non-finite results.
pub mod calculator;
/// Runs programs.
///
/// Holds the [`Interpreter`](core::Interpreter), its variable and sequence
/// tables, and the output of a run.
pub mod core;
/// Turns raw line text into words and literals.
///
/// Pads symbols so whitespace splitting yields one word per symbol, parses
/// range literals and checks free-standing expressions.
pub mod formatter;
/// The built-in `map` and `reduce` functions.
///
/// Contains the bracket-tracking reader that delimits a call, inline lambdas,
/// and the executors that validate and compute calls.
pub mod function;
/// Classifies the tokens of a line for editor highlighting.
pub mod highlight;
/// The lexer module classifies words.
///
/// Built on `logos`, it recognizes numbers, keywords, function names,
/// identifiers and symbols.
pub mod lexer;
/// Resolves nested `reduce` calls before a line is parsed.
pub mod reducer;
/// Execution policy, worker pool and cancellation.
///
/// Decides whether a `map` runs on the calling thread or in parallel batches,
/// and carries the stop flag polled by long computations.
pub mod runtime;
/// The per-line parser.
///
/// A closed set of states that consume one word at a time and produce the
/// effect of a completed statement.
pub mod state;
/// Predicates on single words: numbers, signs, names and lambda bodies.
pub mod validator;

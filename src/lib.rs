//! # seqlang
//!
//! seqlang is an interpreter for a small line-oriented language of numbers and
//! integer sequences, written in Rust. Programs declare variables, build
//! sequences from ranges, transform them with `map`, fold them with `reduce`,
//! and print results with `out` and `print`.
//!
//! ```text
//! var n = 500
//! var sequence = map({0, n}, i -> (-1)^i / (2 * i + 1))
//! var pi = 4 * reduce(sequence, 0, x y -> x + y)
//! print "pi = "
//! out pi
//! ```
//!
//! Large `map` calls run in parallel batches on a worker pool, and a running
//! program can be stopped from another thread.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::core::{Interpreter, InterpreterOutput};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every failure a program can run into, from a word the
/// line parser cannot accept to an expression that evaluates to infinity.
/// Errors are plain data: nothing in the interpreter panics on user input.
///
/// # Responsibilities
/// - Defines error enums for the line parser, statement evaluation and the
///   calculator, formatter and function executors.
/// - Attaches line numbers when errors are reported.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Orchestrates the interpretation of programs.
///
/// This module ties together lexing, the line parser, the calculator, the
/// built-in functions and the runtime that schedules their work.
pub mod interpreter;
/// General utilities for numeric conversion and rendering.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Render numbers and sequences the way programs print them.
pub mod util;

/// Interprets a program with a fresh interpreter.
///
/// # Example
/// ```
/// use seqlang::run;
///
/// let result = run("var count = 42\nout count");
/// assert_eq!(result.output, "42");
/// assert!(result.errors.is_empty());
///
/// let result = run("out 1 +");
/// assert!(!result.errors.is_empty());
/// ```
#[must_use]
pub fn run(source: &str) -> InterpreterOutput {
    Interpreter::new().interpret(source)
}

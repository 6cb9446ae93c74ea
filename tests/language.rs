use std::fs;

use seqlang::{
    interpreter::core::{Interpreter, InterpreterOutput},
    run,
    util::display::format_sequence,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "sq"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let result = run(&source);
        assert!(result.errors.is_empty(),
                "Program {path:?} failed:\n{source}\nErrors: {}",
                result.errors);
        assert_eq!(result.output,
                   expected.trim_end(),
                   "Program {path:?} printed the wrong output");
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn assert_output(src: &str, expected: &str) {
    let result = run(src);
    assert!(result.errors.is_empty(), "Script failed: {}", result.errors);
    assert_eq!(result.output, expected);
}

fn assert_failure(src: &str) -> InterpreterOutput {
    let result = run(src);
    assert!(!result.errors.is_empty(), "Script succeeded but was expected to fail");
    result
}

#[test]
fn single_line_programs() {
    assert_output("out 44.0 + 56", "100");
    assert_failure("out 44.0 + 56)");
    assert_failure("out (44.0 + 56");
    assert_failure("(+ 56");
    assert_failure("out (56");
    assert_failure("out 56)");
    assert_failure("out 56 + )");
}

#[test]
fn variables() {
    assert_output("var count = 42\nout count", "42");
    assert_output("var expr = 42+21+11.5\nout expr", "74.5");
    assert_output("var foo = 1 + 2\nvar bar = 3 ^ 2 * 3\nout foo + bar", "30");
    assert_output("var a = 1\nvar b = 10\nvar sum = 10 * (a + b) / 2\nout sum + 0", "55");
    assert_output("var x = 1\nvar x = x + 1\nout x", "2");
}

#[test]
fn broken_assignments_fail() {
    for src in ["var count = 44.0 + 56)\nout count",
                "var count = (44.0 + 56\nout count",
                "var count = ( + \nout count",
                "var count = ( ) \nout count",
                "var count = ,\nout count",
                "var count =\nout count",
                "var count\nout count",
                "var 1x = 2",
                "var out = 2",
                "var count 42",
                "var count = 42 43 foo"]
    {
        let result = assert_failure(src);
        assert!(result.output.is_empty(), "{src:?} printed {:?}", result.output);
    }
}

#[test]
fn error_messages_carry_line_numbers() {
    let result = assert_failure("var a = 1\nvar b = a +\nout b");
    assert_eq!(result.errors,
               "Error on line 2: Cannot evaluate: operator '+' is missing an operand.");

    let result = assert_failure("out 1\nfoo");
    assert_eq!(result.output, "1");
    assert_eq!(result.errors, "Error on line 2: Unexpected token: foo.");

    let result = assert_failure("var a = 1 2\n");
    assert_eq!(result.errors, "Error on line 1: Cannot evaluate expression.");

    let result = assert_failure("out nothing");
    assert_eq!(result.errors, "Error on line 1: Invalid expression in out.");

    let result = assert_failure("var a = 2\nout {a, b}");
    assert_eq!(result.errors, "Error on line 2: Undefined symbol: b.");
}

#[test]
fn first_failing_line_stops_the_program() {
    let result = assert_failure("out 1\nout 1 / 0\nout 2");
    assert_eq!(result.output, "1");
    assert_eq!(result.errors.lines().count(), 1);
}

#[test]
fn sequences() {
    let expected = format_sequence(&(21..=42).map(f64::from).collect::<Vec<_>>());
    assert_output("var seq = {21, 42 }\nout seq", &expected);

    let expected = format_sequence(&(3..=21).map(f64::from).collect::<Vec<_>>());
    assert_output("var seq = {1 + 2, 21}\nout seq", &expected);

    let expected = format_sequence(&(100..=200).map(f64::from).collect::<Vec<_>>());
    assert_output("var foo = 100.0\nout {foo, 200}", &expected);

    assert_output("var n = 1\nvar m = 5\nvar seq = {n, m}\nout seq", "[1, 2, 3, 4, 5]");
    assert_output("var a = {1, 3}\nvar b = a\nout b", "[1, 2, 3]");
    assert_output("{1, 3}\nout 1", "1");
}

#[test]
fn broken_sequences_fail() {
    assert_failure("var seq = {21, 1}\nout seq");
    assert_failure("var seq = {1.2, 21}\nout seq");
    assert_failure("out {100, 101 102}");
    assert_failure("var seq = {1, 5");
    assert_failure("var seq = {1, 5} 6");
}

#[test]
fn sequences_are_not_numbers() {
    assert_failure("var foo = {1,2}\nvar bar = 3 ^ 2 * 3\nout foo + bar");
    assert_failure("var foo = {1,2}\nvar bar = 10090912 + 0.000912131\nvar foobar = foo + bar");

    let result = assert_failure("var foo = {1,2}\nvar bar = 1 + foo");
    assert_eq!(result.errors,
               "Error on line 2: Sequence 'foo' cannot be used in an arithmetic expression.");
}

#[test]
fn print_and_out() {
    assert_output("var o = 10 * (1 + 10) / 2\nprint \"o is\"\nout o", "\"o is\"\n55");
    assert_output("print 55.0", "55.0");
    assert_output("print   spaced    words  ", "spaced words");
    assert_output("var a = 1\nvar b = 10\nout a + b\nvar sum = 10 * (a + b) / 2\nout sum + 0",
                  "11\n55");
}

#[test]
fn map() {
    assert_output("var squares = map({1,5}, i -> i^2 * 3)\nout squares",
                  "[3, 12, 27, 48, 75]");
    assert_output("out map({1,5}, i -> i^2)", "[1, 4, 9, 16, 25]");
    assert_output("var seq = {1,5}\nvar squares = map( seq, i -> i^2)\nout squares",
                  "[1, 4, 9, 16, 25]");
    assert_output("var seq = {1,5}\nvar squares = map(seq, i -> i^2)\nout squares\nvar o = 10 * \
                   (1 + 10) / 2\nout o",
                  "[1, 4, 9, 16, 25]\n55");
    assert_output("var seq = {1,3}\nvar doubles = map(seq, i->  i + i)\nout doubles\nvar \
                   squares = map(doubles, i   -> i * i)\nout squares",
                  "[2, 4, 6]\n[4, 16, 36]");
}

#[test]
fn nested_map() {
    assert_output("var seq = {1,3}\nvar ddoubles = map(map(seq, i -> i + i), i -> i + i)\nout \
                   map(map(seq, i -> i + i), i -> i + i)\n",
                  "[4, 8, 12]");
}

#[test]
fn map_with_nested_parentheses() {
    let expected = (1..=5).map(f64::from)
                          .map(|i| (-1f64).powf(i) / (2.0 * i + 1.0))
                          .collect::<Vec<_>>();

    assert_output("var n = 5\nout map({1, n}, i -> (-1)^i / (2 * i + 1))\n",
                  &format_sequence(&expected));
}

#[test]
fn large_map() {
    let expected = (0..=100_000).map(f64::from).map(|i| i * i).collect::<Vec<_>>();

    assert_output("var n = 0\nvar m = 100000\nvar seq = {n, m}\nvar squares = map(seq, i -> i ^ \
                   2)\nout squares\n",
                  &format_sequence(&expected));
}

#[test]
fn broken_maps_fail() {
    assert_failure("var s = map({1, 3}, i -> i + j)");
    assert_failure("var s = map({1, 3}, a b -> a + b)");
    assert_failure("var s = map({1, 3})");
    assert_failure("var s = map(missing, i -> i)");
    assert_failure("var s = map({1, 3}, i -> i");
    assert_failure("var s = map {1, 3}, i -> i");
    assert_failure("var s = map({1, 3}, i -> i) + 1");
    assert_failure("out map({1, 3}, i -> i) extra");
    assert_failure("out 1 + map({1, 3}, i -> i)");
}

#[test]
fn reduce() {
    assert_output("var n = reduce({1, 5}, 0, i k -> i + k)\nvar m = reduce({1, n}, 2, i k -> k + \
                   k) + reduce({1, 2}, n, k i -> i + i)\nout n + m\n",
                  "83");
    assert_output("out reduce({0, 19999}, 0, i k -> i + k)\n", "1.9999e8");
    assert_output("var seq = {1,5}\nout reduce(seq, 0, i k -> i + k)\n", "15");
    assert_output("out reduce(map({1, 3}, i -> i * i), 0, a b -> a + b)", "14");
    assert_output("out reduce({1, reduce({1, 2}, 0, a b -> a + b)}, 1, a b -> a * b)", "6");
}

#[test]
fn broken_reduces_fail() {
    assert_failure("out reduce({1, 5}, 0, i -> i)");
    assert_failure("out reduce({1, 5}, i k -> i + k)");
    assert_failure("out reduce({1, 5}, 0, i k -> i + k");
    assert_failure("out reduce({1, 5}, 0, i k -> i / 0)");
}

#[test]
fn pi_program() {
    let result = run("var n = 500\nvar sequence = map({0, n}, i -> (-1)^i / (2 * i + 1))\nvar pi \
                      = 4 * reduce(sequence, 0, x y -> x + y)\nprint \"pi = \"\nout pi");

    assert!(result.errors.is_empty(), "{}", result.errors);
    let lines = result.output.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "\"pi = \"");
    assert!(lines[1].starts_with("3.14"), "{}", lines[1]);
}

#[test]
fn state_persists_between_runs_until_reset() {
    let mut interpreter = Interpreter::new();

    let result = interpreter.interpret("var a = 2\nvar s = {1, 3}");
    assert_eq!(result.output, "");
    assert_eq!(interpreter.variable("a"), Some(2.0));
    assert_eq!(interpreter.sequence("s"), Some([1.0, 2.0, 3.0].as_slice()));

    let result = interpreter.interpret("out map(s, i -> i * 2)\nout {a, 4}");
    assert_eq!(result.output, "[2, 4, 6]\n[2, 3, 4]");

    interpreter.reset();
    assert_eq!(interpreter.variable("a"), None);
    assert!(!interpreter.interpret("out a").is_ok());
}

#[test]
fn rebinding_a_name_replaces_its_kind() {
    assert_output("var x = 5\nvar x = {1, 3}\nout x\nout map(x, i -> i * 2)",
                  "[1, 2, 3]\n[2, 4, 6]");
    assert_output("var x = {1, 3}\nvar x = 5\nvar y = x + 1\nout y\nout x", "6\n5");
    assert_failure("var x = {1, 3}\nvar x = 5\nout map(x, i -> i)");

    let mut interpreter = Interpreter::new();
    interpreter.interpret("var x = 5\nvar x = {1, 2}");
    assert_eq!(interpreter.variable("x"), None);
    assert_eq!(interpreter.sequence("x"), Some([1.0, 2.0].as_slice()));
    assert!(interpreter.context().variables.is_empty());
}

#[test]
fn failing_line_leaves_state_untouched() {
    let mut interpreter = Interpreter::new();

    interpreter.interpret("var a = 1");
    let result = interpreter.interpret("var a = 1 / 0");
    assert!(!result.is_ok());
    assert_eq!(interpreter.variable("a"), Some(1.0));
}

#[test]
fn empty_program() {
    assert_output("", "");
    assert_output("\n\n   \n", "");
}

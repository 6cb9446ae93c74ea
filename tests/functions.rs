use std::collections::HashMap;

use seqlang::{
    error::EvalError,
    interpreter::{
        function::{
            executor::{
                core::{Executor, Scope, resolve_sequence, split_arguments, strip_call},
                map::MapExecutor,
                reduce::ReduceExecutor,
            },
            lambda::Lambda,
            reader::FunctionReader,
        },
        reducer::reduce_line,
        runtime::{Outcome, Runtime},
    },
};

struct Fixture {
    variables: HashMap<String, f64>,
    sequences: HashMap<String, Vec<f64>>,
    runtime:   Runtime,
}

impl Fixture {
    fn new() -> Self {
        let variables = HashMap::from([("n".to_string(), 3.0), ("half".to_string(), 0.5)]);
        let sequences = HashMap::from([("seq".to_string(), vec![1.0, 2.0, 3.0])]);
        Self { variables,
               sequences,
               runtime: Runtime::sequential() }
    }

    fn scope(&self) -> Scope<'_> {
        Scope { variables: &self.variables,
                sequences: &self.sequences,
                runtime:   &self.runtime, }
    }

    fn map(&self, call: &str) -> Result<Vec<f64>, EvalError> {
        MapExecutor::validate(call, &self.scope())?.compute(&self.runtime)?
                                                   .complete()
    }

    fn reduce(&self, call: &str) -> Result<f64, EvalError> {
        ReduceExecutor::validate(call, &self.scope())?.compute(&self.runtime)?
                                                      .complete()
    }
}

#[test]
fn lambda_parses_and_applies() {
    let lambda = Lambda::parse("i -> (-1)^i / (2 * i + 1)", "map", 1).unwrap();
    assert_eq!(lambda.parameters(), ["i"]);
    assert_eq!(lambda.apply(&[1.0]), Ok(-1.0 / 3.0));

    let lambda = Lambda::parse("a b -> a - b", "reduce", 2).unwrap();
    assert_eq!(lambda.apply(&[10.0, 4.0]), Ok(6.0));
    assert_eq!(lambda.apply(&[4.0, 10.0]), Ok(-6.0));
}

#[test]
fn lambda_rejects_bad_definitions() {
    assert_eq!(Lambda::parse("i i ^ 2", "map", 1), Err(EvalError::MissingArrow));
    assert_eq!(Lambda::parse("i -> i -> i", "map", 1), Err(EvalError::MissingArrow));
    assert_eq!(Lambda::parse("a b -> a + b", "map", 1),
               Err(EvalError::LambdaArity { function: "map",
                                            expected: 1,
                                            found:    2, }));
    assert_eq!(Lambda::parse("map -> 1", "map", 1),
               Err(EvalError::InvalidParameterName { name: "map".into() }));
    assert_eq!(Lambda::parse("a a -> a", "reduce", 2),
               Err(EvalError::DuplicateParameter { name: "a".into() }));
    assert!(matches!(Lambda::parse("i -> i + k", "map", 1), Err(EvalError::InvalidLambda { .. })));
    assert!(matches!(Lambda::parse("i -> i +", "map", 1), Err(EvalError::InvalidLambda { .. })));
    assert!(matches!(Lambda::parse("i ->", "map", 1), Err(EvalError::InvalidLambda { .. })));
}

#[test]
fn lambda_reports_arithmetic_failures_when_applied() {
    let lambda = Lambda::parse("i -> 1 / i", "map", 1).unwrap();

    assert_eq!(lambda.apply(&[4.0]), Ok(0.25));
    assert!(matches!(lambda.apply(&[0.0]), Err(EvalError::NonFinite { .. })));
}

#[test]
fn reader_tracks_nested_parentheses() {
    let mut reader = FunctionReader::<MapExecutor>::new();

    for c in "(seq, i -> (-1)^i / (2 * i + 1)".chars() {
        reader.read_char(c);
        assert!(!reader.is_completed());
    }
    reader.read_char(')');
    assert!(reader.is_completed());
    assert_eq!(reader.text(), "(seq, i -> (-1)^i / (2 * i + 1))");

    reader.reset();
    assert!(!reader.is_completed());
    assert_eq!(reader.text(), "");
}

#[test]
fn reader_is_not_complete_before_any_bracket() {
    let mut reader = FunctionReader::<ReduceExecutor>::new();

    reader.read_token("seq");
    assert!(!reader.is_completed());
    reader.read_token("(");
    reader.read_token(")");
    assert!(reader.is_completed());
}

#[test]
fn reader_validates_with_its_executor() {
    let fixture = Fixture::new();
    let mut reader = FunctionReader::<MapExecutor>::new();

    for token in ["(", "seq", ",", "i", "->", "i", "*", "n", ")"] {
        reader.read_token(token);
    }

    assert!(matches!(reader.validate(&fixture.scope()), Err(EvalError::InvalidLambda { .. })));
}

#[test]
fn splits_top_level_arguments() {
    assert_eq!(split_arguments("( {1, n}, i -> i )", "map", 2).unwrap(), ["{1, n}", "i -> i"]);
    assert_eq!(split_arguments("(seq, (1 + 2) * 3, a b -> a)", "reduce", 3).unwrap(),
               ["seq", "(1 + 2) * 3", "a b -> a"]);
    assert_eq!(split_arguments("(seq)", "map", 2),
               Err(EvalError::ArgumentCount { function: "map",
                                              expected: 2,
                                              found:    1, }));
    assert_eq!(split_arguments("seq, i -> i", "map", 2),
               Err(EvalError::MalformedCall { function: "map" }));
}

#[test]
fn strips_function_calls() {
    assert_eq!(strip_call("map(seq, i -> i)", "map"), Some("(seq, i -> i)"));
    assert_eq!(strip_call("reduce (seq, 0, a b -> a)", "reduce"), Some("(seq, 0, a b -> a)"));
    assert_eq!(strip_call("map seq", "map"), None);
}

#[test]
fn resolves_sequence_arguments() {
    let fixture = Fixture::new();
    let scope = fixture.scope();

    assert_eq!(resolve_sequence("seq", &scope), Ok(vec![1.0, 2.0, 3.0]));
    assert_eq!(resolve_sequence("{1, n}", &scope), Ok(vec![1.0, 2.0, 3.0]));
    assert_eq!(resolve_sequence("map(seq, i -> -i)", &scope), Ok(vec![-1.0, -2.0, -3.0]));
    assert_eq!(resolve_sequence("n", &scope),
               Err(EvalError::UnknownSequence { name: "n".into() }));
    assert_eq!(resolve_sequence("missing", &scope),
               Err(EvalError::UnknownSequence { name: "missing".into() }));
    assert_eq!(resolve_sequence("42", &scope),
               Err(EvalError::NotASequence { argument: "42".into() }));
}

#[test]
fn map_applies_lambda_to_every_element() {
    let fixture = Fixture::new();

    assert_eq!(fixture.map("({1,5}, i -> i^2)"), Ok(vec![1.0, 4.0, 9.0, 16.0, 25.0]));
    assert_eq!(fixture.map("({1,5}, i -> i^2 * 3)"), Ok(vec![3.0, 12.0, 27.0, 48.0, 75.0]));
    assert_eq!(fixture.map("(seq, x -> x * half)"), Err(EvalError::InvalidLambda {
                   details: "undefined symbol 'half'.".into(),
               }));
}

#[test]
fn nested_map() {
    let fixture = Fixture::new();

    assert_eq!(fixture.map("(map({1,3}, i->i+i), i->i+i)"), Ok(vec![4.0, 8.0, 12.0]));
}

#[test]
fn map_leaves_failing_elements_unchanged() {
    let fixture = Fixture::new();

    assert_eq!(fixture.map("({-1, 1}, i -> 1 / i)"), Ok(vec![-1.0, 0.0, 1.0]));
}

#[test]
fn map_does_not_modify_the_stored_sequence() {
    let fixture = Fixture::new();

    assert_eq!(fixture.map("(seq, i -> i * 10)"), Ok(vec![10.0, 20.0, 30.0]));
    assert_eq!(fixture.sequences["seq"], [1.0, 2.0, 3.0]);
}

#[test]
fn reduce_folds_with_seed() {
    let fixture = Fixture::new();

    assert_eq!(fixture.reduce("({1, 5}, 0, i k -> i + k)"), Ok(15.0));
    assert_eq!(fixture.reduce("(seq, 10, a b -> a + b)"), Ok(16.0));
    assert_eq!(fixture.reduce("({1, 2}, 15, k i -> i + i)"), Ok(8.0));
    assert_eq!(fixture.reduce("({1, 4}, n, a b -> a * b)"), Ok(72.0));
    assert_eq!(fixture.reduce("({1, 3}, 0, a b -> a - b)"), Ok(4.0));
}

#[test]
fn reduce_folds_in_order() {
    let fixture = Fixture::new();

    // f(f(f(1, 2), 3), 4) = ((1 - 2) - 3) - 4, then f(100, -8)
    assert_eq!(fixture.reduce("({1, 4}, 100, a b -> a - b)"), Ok(108.0));
}

#[test]
fn reduce_errors() {
    let fixture = Fixture::new();

    assert_eq!(fixture.reduce("({1, 5}, i k -> i + k)"),
               Err(EvalError::ArgumentCount { function: "reduce",
                                              expected: 3,
                                              found:    2, }));
    assert!(matches!(fixture.reduce("({1, 5}, 0, i -> i)"),
                     Err(EvalError::LambdaArity { expected: 2, .. })));
    assert_eq!(fixture.reduce("({1, 5}, x, a b -> a)"),
               Err(EvalError::UnknownSymbol { token: "x".into() }));
    assert!(matches!(fixture.reduce("({0, 2}, 1, a b -> a / b)"),
                     Err(EvalError::NonFinite { .. })));
}

#[test]
fn cancelled_reduce_returns_partial_value() {
    let fixture = Fixture::new();
    let reduce = ReduceExecutor::validate("({1, 5}, 0, a b -> a + b)", &fixture.scope()).unwrap();

    fixture.runtime.stop_handle().stop();
    let outcome = reduce.compute(&fixture.runtime).unwrap();
    assert_eq!(outcome, Outcome::Cancelled(1.0));
    assert_eq!(outcome.into_inner(), 1.0);
}

#[test]
fn executors_keep_validated_arguments() {
    let fixture = Fixture::new();
    let scope = fixture.scope();

    let map = MapExecutor::validate("({1, n}, i -> i * 2)", &scope).unwrap();
    assert_eq!(map.sequence(), [1.0, 2.0, 3.0]);
    assert_eq!(map.lambda().parameters(), ["i"]);
    assert_eq!(map.lambda().body(), ["i", "*", "2"]);

    let reduce = ReduceExecutor::validate("(seq, n * 2, a b -> a + b)", &scope).unwrap();
    assert_eq!(reduce.seed(), 6.0);
}

#[test]
fn reducer_replaces_nested_calls() {
    let fixture = Fixture::new();
    let scope = fixture.scope();

    assert_eq!(reduce_line("var m = reduce({1, n}, 2, i k -> k + k) + reduce({1, 2}, n, k i -> i + i)",
                           &scope),
               Ok("var m = 12 + 8".to_string()));
    assert_eq!(reduce_line("out reduce(map(seq, i -> i * 2), 0, a b -> a + b)", &scope),
               Ok("out 12".to_string()));
    assert_eq!(reduce_line("out 1 - reduce({1, 2}, 5, a b -> b - a)", &scope),
               Ok("out 1 - -4".to_string()));
}

#[test]
fn reducer_leaves_other_lines_alone() {
    let fixture = Fixture::new();
    let scope = fixture.scope();

    assert_eq!(reduce_line("out seq", &scope), Ok("out seq".to_string()));
    assert_eq!(reduce_line("print reduce(seq, 0, a b -> a + b)", &scope),
               Ok("print reduce(seq, 0, a b -> a + b)".to_string()));
    assert_eq!(reduce_line("out reduce(seq, 0, a b -> a + b", &scope),
               Err(EvalError::UnclosedCall { function: "reduce" }));
}

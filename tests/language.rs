use std::fs;

use fermi::{Engine, EngineConfig, ErrorKind, LineResult, Value, execute_model};
use walkdir::WalkDir;

fn seeded() -> Engine {
    Engine::with_config(EngineConfig::seeded(42).with_samples(5_000))
}

#[test]
fn model_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/models").into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "fermi"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let results = seeded().execute_model(&content);
        assert_eq!(results.len(), content.lines().count());
        for (i, result) in results.iter().enumerate() {
            if let LineResult::Error { message, .. } = result {
                panic!("Line {} of {:?} failed:\n{}\nError: {message}",
                       i + 1,
                       path,
                       content.lines().nth(i).unwrap_or_default());
            }
        }
    }

    assert!(count > 0, "No models found in tests/models");
}

fn assert_success(src: &str) -> Vec<LineResult> {
    let results = seeded().execute_model(src);
    if let Some(LineResult::Error { message, .. }) = results.iter().find(|r| r.is_error()) {
        panic!("Model failed: {message}");
    }
    results
}

fn assert_failure(src: &str, expected: ErrorKind) -> String {
    let results = seeded().execute_model(src);
    match results.iter().find(|r| r.is_error()) {
        Some(LineResult::Error { kind, message }) => {
            assert_eq!(*kind, expected, "unexpected error kind: {message}");
            message.clone()
        },
        _ => panic!("Model succeeded but was expected to fail"),
    }
}

fn last_scalar(src: &str) -> f64 {
    let results = assert_success(src);
    results.iter()
           .rev()
           .find_map(LineResult::value)
           .and_then(Value::as_scalar)
           .unwrap_or_else(|| panic!("no scalar result in {src:?}"))
}

#[test]
fn assignment_then_reference() {
    let results = execute_model("x = 10\ny = x * 2\n");
    assert_eq!(results,
               vec![LineResult::Assignment { name:    "x".into(),
                                             value:   Value::Scalar(10.0),
                                             comment: None, },
                    LineResult::Assignment { name:    "y".into(),
                                             value:   Value::Scalar(20.0),
                                             comment: None, }]);
}

#[test]
fn basic_arithmetic() {
    assert_eq!(last_scalar("1 + 2"), 3.0);
    assert_eq!(last_scalar("7 * 9"), 63.0);
    assert_eq!(last_scalar("8 - 5"), 3.0);
    assert_eq!(last_scalar("10 / 4"), 2.5);
    assert_eq!(last_scalar("17 % 5"), 2.0);
    assert_eq!(last_scalar("2 ^ 10"), 1024.0);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(last_scalar("2 + 3 * 4"), 14.0);
    assert_eq!(last_scalar("(2 + 3) * 4"), 20.0);
    assert_eq!(last_scalar("2 * 3 ^ 2"), 18.0);
    assert_eq!(last_scalar("2 ^ 3 ^ 2"), 64.0);
    assert_eq!(last_scalar("10 - 4 - 3"), 3.0);
    assert_eq!(last_scalar("-3 + 5"), 2.0);
    assert_eq!(last_scalar("-(2 + 3)"), -5.0);
}

#[test]
fn suffixes_in_expressions() {
    assert_eq!(last_scalar("population = 2.7M\npopulation / 1M"), 2.7);
    assert_eq!(last_scalar("1.5B / 1K"), 1_500_000.0);
    assert_eq!(last_scalar("200 * 15%"), 30.0);
}

#[test]
fn comments_and_blank_lines() {
    let results = assert_success("# header\n\nx = 5  # five\nx + 1 # six");
    assert_eq!(results,
               vec![LineResult::Comment { text: " header".into() },
                    LineResult::Empty,
                    LineResult::Assignment { name:    "x".into(),
                                             value:   Value::Scalar(5.0),
                                             comment: Some("five".into()), },
                    LineResult::Expression { value:   Value::Scalar(6.0),
                                             comment: Some("six".into()), }]);
}

#[test]
fn reassignment_replaces_binding() {
    let mut engine = seeded();
    engine.execute_model("x = 1\nx = x + 1\nx = x * 10");
    assert_eq!(engine.variable("x"), Some(&Value::Scalar(20.0)));
}

#[test]
fn ranges_produce_samples() {
    let results = assert_success("tuners = 50 100\ntuners * 2");
    for result in &results {
        let samples = result.value().and_then(Value::as_samples).expect("samples");
        assert_eq!(samples.len(), 5_000);
    }
}

#[test]
fn clear_forgets_bindings() {
    let mut engine = seeded();
    engine.execute_line("x = 3");
    engine.clear();
    assert!(engine.variables().is_empty());
    assert!(engine.execute_line("x").is_error());
}

#[test]
fn unbound_variable_is_name_error() {
    let message = assert_failure("population * 2", ErrorKind::Name);
    assert!(message.contains("population"));
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("x = 1 / 0", ErrorKind::DivisionByZero);
    assert_failure("5 % 0", ErrorKind::DivisionByZero);
    assert_failure("x = 1 10\nx / (x - x)", ErrorKind::DivisionByZero);
}

#[test]
fn malformed_lines_are_errors() {
    assert_failure("2.5.3", ErrorKind::NumberFormat);
    assert_failure("x = ", ErrorKind::Syntax);
    assert_failure("= 5", ErrorKind::Syntax);
    assert_failure("1x = 5", ErrorKind::Syntax);
    assert_failure("(1 + 2", ErrorKind::Syntax);
    assert_failure("1 + 2)", ErrorKind::Syntax);
    assert_failure("1 +", ErrorKind::Syntax);
    assert_failure("3 $ 4", ErrorKind::Syntax);
    assert_failure("sqrt(4)", ErrorKind::Syntax);
}

#[test]
fn bad_distributions_are_fit_errors() {
    assert_failure("10 5", ErrorKind::DistributionFit);
    assert_failure("0 10 lognormal", ErrorKind::DistributionFit);
    assert_failure("0.5 1.5 beta", ErrorKind::DistributionFit);
    assert_failure("normal(10, -1)", ErrorKind::DistributionFit);
}

#[test]
fn extreme_literals_fail_their_line() {
    let huge = format!("17{}", "0".repeat(307));
    let message = assert_failure(&format!("x = -{huge} {huge}"), ErrorKind::DistributionFit);
    assert!(message.contains("too wide"));
    assert_failure(&format!("x = uniform(-{huge}, {huge})"), ErrorKind::DistributionFit);

    let overflowing = format!("1{}", "0".repeat(311));
    assert_failure(&format!("x = {overflowing}"), ErrorKind::NumberFormat);
}

#[test]
fn failed_assignment_leaves_name_unbound() {
    let mut engine = seeded();
    let results = engine.execute_model("x = 1 / 0\ny = x + 1");
    assert!(results.iter().all(LineResult::is_error));
    assert!(engine.variable("x").is_none());
    assert!(engine.variable("y").is_none());
}

#[test]
fn one_result_per_line_despite_errors() {
    let mut source = String::new();
    for i in 0..100 {
        if i == 50 {
            source.push_str("broken = (1 +\n");
        } else {
            source.push_str(&format!("v{i} = {i} * 2\n"));
        }
    }

    let mut engine = seeded();
    let results = engine.execute_model(&source);
    assert_eq!(results.len(), 100);
    assert_eq!(results.iter().filter(|r| r.is_error()).count(), 1);
    assert!(results[50].is_error());
    assert_eq!(engine.variable("v99"), Some(&Value::Scalar(198.0)));
}

#[test]
fn seeded_engines_are_reproducible() {
    let model = "a = 1 10 lognormal\nb = 0.1 0.3 beta\na * b";
    let first = seeded().execute_model(model);
    let second = seeded().execute_model(model);
    assert_eq!(first, second);
}

#[test]
fn scalars_broadcast_across_samples() {
    let mut engine = seeded();
    engine.execute_model("x = 1 2\ny = x * 3\nz = x * x\nw = 2 * 3");

    let x = engine.variable("x").and_then(Value::as_samples).expect("x samples");
    let y = engine.variable("y").and_then(Value::as_samples).expect("y samples");
    let z = engine.variable("z").and_then(Value::as_samples).expect("z samples");
    assert_eq!(y.len(), x.len());
    assert_eq!(z.len(), x.len());
    for ((a, b), c) in x.iter().zip(y).zip(z) {
        assert_eq!(*b, a * 3.0);
        assert_eq!(*c, a * a);
    }
    assert_eq!(engine.variable("w"), Some(&Value::Scalar(6.0)));
}

//! Integration tests for keypad expression evaluation
//!
//! Drives the public API with the strings the keypad actually produces.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use ganit_calc::{evaluate, CalcEngine, EngineConfig, ErrorKind};

#[test]
fn test_reference_values() {
    assert_eq!(evaluate("2+2").unwrap(), "4");
    assert_eq!(evaluate("0.1+0.2").unwrap(), "0.3");
    assert_eq!(evaluate("√(9)").unwrap(), "3");
    assert_eq!(evaluate("3^2").unwrap(), "9");
}

#[test]
fn test_reference_failures() {
    assert_eq!(evaluate("1/0").unwrap_err().kind(), ErrorKind::Math);
    assert_eq!(evaluate("(5").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn test_evaluation_is_idempotent() {
    let engine = CalcEngine::default();
    for input in ["1÷3", "2×π", "√(2)", "(1+2)^2÷7", "15%×4"] {
        let first = engine.evaluate(input).unwrap();
        let second = engine.evaluate(input).unwrap();
        assert_eq!(first, second, "input: {}", input);
    }
}

#[test]
fn test_keypad_macro_outputs_evaluate() {
    // Strings produced by the square, reciprocal and sign-toggle keys
    assert_eq!(evaluate("(12)^2").unwrap(), "144");
    assert_eq!(evaluate("1/(4)").unwrap(), "0.25");
    assert_eq!(evaluate("-(3+4)").unwrap(), "-7");
    assert_eq!(evaluate("10Mod4").unwrap(), "2");
}

#[test]
fn test_percent_in_context() {
    assert_eq!(evaluate("50%").unwrap(), "0.5");
    assert_eq!(evaluate("200+10%").unwrap(), "200.1");
    assert_eq!(evaluate("200×10%").unwrap(), "20");
    assert_eq!(evaluate("10%^2").unwrap(), "0.001");
}

#[test]
fn test_decimal_ties_round_up() {
    assert_eq!(evaluate("1÷2048").unwrap(), "0.0004882813");
    assert_eq!(evaluate("-1÷2048").unwrap(), "-0.0004882813");
}

#[test]
fn test_overlong_chain_is_rejected() {
    let input = vec!["1"; 200_000].join("+");
    assert_eq!(evaluate(&input).unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn test_euler_only_as_standalone_token() {
    assert_eq!(evaluate("e").unwrap(), "2.7182818285");
    assert_eq!(evaluate("eMod1").unwrap(), "0.7182818285");
    // Letter runs are matched as whole keywords, never char by char
    assert_eq!(evaluate("exp(1)").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(evaluate("sec(1)").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn test_incomplete_input_is_syntax_error() {
    for input in ["", "2+", "×3", "((1)", "√(", "sin(", "1..2", "5)"] {
        assert_eq!(
            evaluate(input).unwrap_err().kind(),
            ErrorKind::Syntax,
            "input: {:?}",
            input
        );
    }
}

#[test]
fn test_math_errors() {
    for input in ["0÷0", "√(-1)", "5Mod0", "10^400", "log(-1)"] {
        assert_eq!(
            evaluate(input).unwrap_err().kind(),
            ErrorKind::Math,
            "input: {:?}",
            input
        );
    }
}

#[test]
fn test_basic_keypad_without_scientific_functions() {
    let engine = CalcEngine::new(EngineConfig {
        scientific: false,
        ..EngineConfig::default()
    });

    assert_eq!(engine.evaluate("cos(0)").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(engine.evaluate("√(16)×2").unwrap(), "8");
}

//! End-to-end keypad sessions

#![allow(clippy::disallowed_methods)]

use ganit_common::init_test_logging;
use ganit_session::{
    localize, CalcState, CalculatorSession, GanitConfig, Keypad, Language, Tab,
};
use ganit_units::{Category, Unit};

fn press_all(keypad: &mut Keypad, keys: &[&str]) {
    for key in keys {
        keypad.press(key);
    }
}

#[test]
fn test_history_never_exceeds_capacity() {
    init_test_logging();

    let config = GanitConfig {
        history_capacity: 5,
        ..GanitConfig::default()
    };
    let mut session = CalculatorSession::new(&config);

    for i in 0..12 {
        session.clear();
        for key in [i.to_string().as_str(), "+", "1"] {
            session.handle_input(key);
        }
        let before = session.history().len();
        session.calculate();
        assert_eq!(session.history().len(), (before + 1).min(5));
    }

    let results: Vec<&str> = session.history().iter().map(|e| e.result.as_str()).collect();
    assert_eq!(results, vec!["12", "11", "10", "9", "8"]);
}

#[test]
fn test_failed_calculation_not_recorded() {
    let mut session = CalculatorSession::default();
    for key in ["√", "-", "4", ")"] {
        session.handle_input(key);
    }
    session.calculate();

    assert_eq!(session.state(), CalcState::ShowingError);
    assert_eq!(session.result(), "Error");
    assert!(session.history().is_empty());
}

#[test]
fn test_chained_calculation() {
    let mut keypad = Keypad::default();
    press_all(&mut keypad, &["2", "0", "0", "+", "1", "0", "%", "="]);
    assert_eq!(keypad.calculator().result(), "200.1");

    press_all(&mut keypad, &["×", "1", "0", "="]);
    assert_eq!(keypad.calculator().result(), "2001");
    assert_eq!(keypad.calculator().history().len(), 2);
    assert_eq!(
        keypad.calculator().history().latest().unwrap().expression,
        "200.1×10"
    );
}

#[test]
fn test_error_acknowledged_by_delete() {
    let mut keypad = Keypad::default();
    press_all(&mut keypad, &["1", "÷", "0", "="]);
    assert_eq!(keypad.calculator().state(), CalcState::ShowingError);

    keypad.press("DEL");
    assert_eq!(keypad.calculator().expression(), "");
    assert_eq!(keypad.calculator().state(), CalcState::Idle);
}

#[test]
fn test_scientific_disabled() {
    let config = GanitConfig {
        scientific: false,
        ..GanitConfig::default()
    };
    let mut keypad = Keypad::new(&config);
    press_all(&mut keypad, &["sin(", "0", ")", "="]);
    assert_eq!(keypad.calculator().state(), CalcState::ShowingError);

    press_all(&mut keypad, &["√", "1", "6", ")", "="]);
    assert_eq!(keypad.calculator().result(), "4");
}

#[test]
fn test_native_digit_keys() {
    let config = GanitConfig {
        language: Language::Od,
        ..GanitConfig::default()
    };
    let mut keypad = Keypad::new(&config);
    press_all(&mut keypad, &["୧", "୨", "×", "୨", "="]);

    assert_eq!(keypad.calculator().result(), "24");
    assert_eq!(localize(keypad.calculator().result(), keypad.language()), "୨୪");
}

#[test]
fn test_converter_from_config_category() {
    let config = GanitConfig {
        default_category: Category::Weight,
        ..GanitConfig::default()
    };
    let mut keypad = Keypad::new(&config);
    keypad.set_tab(Tab::Converter);
    press_all(&mut keypad, &["2", ".", "5"]);

    assert_eq!(keypad.converter().unit_from(), Unit::Kg);
    assert_eq!(keypad.converter().result(), "2500");

    keypad.converter_mut().set_units(Unit::Lb, Unit::Kg).unwrap();
    assert_eq!(keypad.converter().result(), "1.134");
}

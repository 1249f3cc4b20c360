//! Integration tests for conversions across whole categories

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use ganit_units::{convert, format_conversion, Category, Unit};

fn linear_categories() -> impl Iterator<Item = Category> {
    Category::ALL
        .into_iter()
        .filter(|c| *c != Category::Temperature)
}

#[test]
fn test_linear_round_trip_every_pair() {
    let samples = [0.0, 1.0, 2.5, 1234.5678, 0.0001];

    for category in linear_categories() {
        for &a in category.units() {
            for &b in category.units() {
                for &x in &samples {
                    let there = convert(x, a, b, category);
                    let back = convert(there, b, a, category);
                    assert_eq!(
                        format_conversion(back),
                        format_conversion(x),
                        "{} {} -> {} -> {}",
                        x,
                        a,
                        b,
                        a
                    );
                }
            }
        }
    }
}

#[test]
fn test_temperature_round_trip_within_precision() {
    let units = Category::Temperature.units();
    for &a in units {
        for &b in units {
            let back = convert(
                convert(37.5, a, b, Category::Temperature),
                b,
                a,
                Category::Temperature,
            );
            assert!((back - 37.5).abs() < 1e-9);
        }
    }
}

#[test]
fn test_reference_conversions() {
    let cases = [
        (0.0, Unit::C, Unit::F, Category::Temperature, "32"),
        (100.0, Unit::C, Unit::F, Category::Temperature, "212"),
        (-40.0, Unit::F, Unit::C, Category::Temperature, "-40"),
        (1024.0, Unit::Kb, Unit::Mb, Category::Data, "1"),
        (1.0, Unit::Gb, Unit::Mb, Category::Data, "1024"),
        (1.0, Unit::M, Unit::Km, Category::Length, "0.001"),
        (1.0, Unit::Lb, Unit::Kg, Category::Weight, "0.4536"),
        (1.0, Unit::Kg, Unit::G, Category::Weight, "1000"),
    ];

    for (value, from, to, category, expected) in cases {
        assert_eq!(
            format_conversion(convert(value, from, to, category)),
            expected,
            "{} {} -> {}",
            value,
            from,
            to
        );
    }
}

#[test]
fn test_identity_conversion() {
    for category in Category::ALL {
        for &unit in category.units() {
            assert!((convert(42.0, unit, unit, category) - 42.0).abs() < 1e-9);
        }
    }
}

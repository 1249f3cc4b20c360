//! Conversion and display formatting

use tracing::debug;

use crate::units::{Category, Unit};

/// Decimal places shown for non-integer conversion results
pub const DISPLAY_DECIMALS: usize = 4;

/// Convert `value` from one unit to another within `category`.
///
/// Callers must only pass units from `category`. A unit outside it yields
/// `NaN` rather than an error.
pub fn convert(value: f64, from: Unit, to: Unit, category: Category) -> f64 {
    if !category.contains(from) || !category.contains(to) {
        debug!(%from, %to, %category, "unit pair outside category");
        return f64::NAN;
    }

    match category {
        Category::Temperature => from_celsius(to_celsius(value, from), to),
        _ => match (from.rate(), to.rate()) {
            (Some(from_rate), Some(to_rate)) => value * from_rate / to_rate,
            _ => f64::NAN,
        },
    }
}

fn to_celsius(value: f64, from: Unit) -> f64 {
    match from {
        Unit::F => (value - 32.0) * 5.0 / 9.0,
        Unit::K => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, to: Unit) -> f64 {
    match to {
        Unit::F => celsius * 9.0 / 5.0 + 32.0,
        Unit::K => celsius + 273.15,
        _ => celsius,
    }
}

/// Render a conversion result: whole numbers without decimals, everything
/// else with at most four decimals and no trailing zeros.
pub fn format_conversion(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let formatted = if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        // Ties go away from zero before fixed-point printing, which would
        // otherwise round them to even
        let factor = 10f64.powi(DISPLAY_DECIMALS as i32);
        let scaled = value * factor;
        let rounded = if scaled.abs() < 9_007_199_254_740_992.0 {
            scaled.round() / factor
        } else {
            value
        };
        let fixed = format!("{:.*}", DISPLAY_DECIMALS, rounded);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    // Tiny negatives round to "-0"
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}

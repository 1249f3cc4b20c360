//! CalcEngine - Expression evaluator for keypad input
//!
//! Pipeline: display string → [`tokenize`] → [`parse`] → [`Expr::eval`] →
//! finiteness check → [`format_result`].
//!
//! Supports:
//! - Arithmetic: +, -, ×, ÷, ^, Mod, postfix %
//! - Constants: π, e
//! - Functions: √( / sqrt( and, with the scientific keypad, sin( cos( tan( log(

use crate::builtin_functions::AngleUnit;
use crate::error::{CalcError, Result};
use crate::lexer::tokenize;
use crate::parser::{parse, Expr};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of decimal places results are rounded to before display
pub const RESULT_DECIMALS: u32 = 10;

/// Engine options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Accept `sin`, `cos`, `tan` and `log`
    pub scientific: bool,
    /// Angle unit for trigonometric functions
    pub angle_unit: AngleUnit,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scientific: true,
            angle_unit: AngleUnit::Radians,
        }
    }
}

/// CalcEngine - Formula evaluation engine
///
/// # Example
/// ```
/// use ganit_calc::CalcEngine;
///
/// let engine = CalcEngine::default();
/// assert_eq!(engine.evaluate("0.1+0.2").unwrap(), "0.3");
/// assert_eq!(engine.evaluate("√(9)").unwrap(), "3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalcEngine {
    config: EngineConfig,
}

impl CalcEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Parse without evaluating
    pub fn compile(&self, input: &str) -> Result<Expr> {
        let tokens = tokenize(input, self.config.scientific)?;
        parse(&tokens)
    }

    /// Evaluate to a raw finite number
    pub fn evaluate_raw(&self, input: &str) -> Result<f64> {
        let expr = self.compile(input)?;
        let value = expr.eval(self.config.angle_unit);

        if value.is_nan() {
            debug!(input, "evaluation produced NaN");
            return Err(CalcError::math("result is not a number"));
        }
        if value.is_infinite() {
            debug!(input, "evaluation produced an infinite value");
            return Err(CalcError::math("result is not finite"));
        }

        debug!(input, value, "evaluated");
        Ok(value)
    }

    /// Evaluate and format for display
    pub fn evaluate(&self, input: &str) -> Result<String> {
        self.evaluate_raw(input).map(format_result)
    }
}

/// Evaluate with the default engine (scientific functions on, radians)
pub fn evaluate(input: &str) -> Result<String> {
    CalcEngine::default().evaluate(input)
}

/// Round half away from zero to `decimals` places. Values too large to carry
/// that many fractional digits are returned unchanged.
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // 2^53: beyond this every f64 is already an integer
    if !scaled.is_finite() || scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    scaled.round() / factor
}

/// Round to [`RESULT_DECIMALS`] places and print in shortest form, which drops
/// trailing zeros and binary noise (`0.30000000000000004` → `0.3`).
pub fn format_result(value: f64) -> String {
    let rounded = round_decimals(value, RESULT_DECIMALS);

    // Also catches -0
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

//! Built-in functions for expression evaluation
//!
//! `sqrt` (written `√(` on the keypad) is always available. The trigonometric
//! functions and `log` belong to the scientific keypad and can be switched off.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Angle unit used by `sin`, `cos` and `tan`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => value.to_radians(),
        }
    }
}

/// Functions callable from an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
}

impl Function {
    /// Keyword spellings recognised by the tokenizer
    pub const NAMES: [(&'static str, Function); 5] = [
        ("sqrt", Function::Sqrt),
        ("sin", Function::Sin),
        ("cos", Function::Cos),
        ("tan", Function::Tan),
        ("log", Function::Log),
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }

    /// Whether the function is only offered on the scientific keypad
    pub fn is_scientific(self) -> bool {
        !matches!(self, Self::Sqrt)
    }

    pub fn apply(self, value: f64, angle: AngleUnit) -> f64 {
        match self {
            Self::Sqrt => sqrt(value),
            Self::Sin => sin(value, angle),
            Self::Cos => cos(value, angle),
            Self::Tan => tan(value, angle),
            Self::Log => log(value),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Square root; negative input yields NaN
pub fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

pub fn sin(value: f64, angle: AngleUnit) -> f64 {
    angle.to_radians(value).sin()
}

pub fn cos(value: f64, angle: AngleUnit) -> f64 {
    angle.to_radians(value).cos()
}

pub fn tan(value: f64, angle: AngleUnit) -> f64 {
    angle.to_radians(value).tan()
}

/// Base-10 logarithm. `log(0)` is `-inf`, negative input is NaN.
pub fn log(value: f64) -> f64 {
    value.log10()
}

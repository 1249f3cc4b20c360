//! Keypad - routes key presses to the active tab's session

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::calculator::CalculatorSession;
use crate::config::GanitConfig;
use crate::converter::ConverterSession;
use crate::error::SessionError;
use crate::locale::Language;

pub const KEY_CLEAR: &str = "AC";
pub const KEY_DELETE: &str = "DEL";
pub const KEY_EQUALS: &str = "=";

/// Calculator keypad, basic and scientific rows
pub const CALCULATOR_KEYS: &[&str] = &[
    "AC", "DEL", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "-", "1", "2", "3", "+", "0", ".",
    "=", "(", ")", "x²", "xʸ", "1/x", "+/-", "√", "π", "e", "Mod", "sin(", "cos(", "tan(", "log(",
];

/// Keys the converter tab reacts to
pub const CONVERTER_KEYS: &[&str] = &[
    "AC", "DEL", "7", "8", "9", "4", "5", "6", "1", "2", "3", "0", ".",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Calculator,
    Converter,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calculator => f.write_str("calculator"),
            Self::Converter => f.write_str("converter"),
        }
    }
}

impl FromStr for Tab {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "calc" | "calculator" => Ok(Self::Calculator),
            "conv" | "converter" => Ok(Self::Converter),
            _ => Err(SessionError::UnknownTab(s.to_string())),
        }
    }
}

/// Both sessions plus the active tab. Switching tabs keeps each session's state.
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    tab: Tab,
    calculator: CalculatorSession,
    converter: ConverterSession,
}

impl Keypad {
    pub fn new(config: &GanitConfig) -> Self {
        Self {
            tab: Tab::Calculator,
            calculator: CalculatorSession::new(config),
            converter: ConverterSession::new(config.default_category),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        debug!(%tab, "tab selected");
        self.tab = tab;
    }

    pub fn calculator(&self) -> &CalculatorSession {
        &self.calculator
    }

    pub fn calculator_mut(&mut self) -> &mut CalculatorSession {
        &mut self.calculator
    }

    pub fn converter(&self) -> &ConverterSession {
        &self.converter
    }

    pub fn converter_mut(&mut self) -> &mut ConverterSession {
        &mut self.converter
    }

    pub fn language(&self) -> Language {
        self.calculator.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.calculator.set_language(language);
    }

    pub fn press(&mut self, key: &str) {
        match self.tab {
            Tab::Calculator => match key {
                KEY_CLEAR => self.calculator.clear(),
                KEY_DELETE => self.calculator.delete_last(),
                KEY_EQUALS => self.calculator.calculate(),
                _ => self.calculator.handle_input(key),
            },
            Tab::Converter => match key {
                KEY_CLEAR => self.converter.clear(),
                KEY_DELETE => self.converter.delete_last(),
                _ => {
                    self.converter.push_input(key);
                },
            },
        }
    }
}

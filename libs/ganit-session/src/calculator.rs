//! CalculatorSession - keypad-driven expression buffer
//!
//! ```text
//!            append                 calculate ok
//!   ┌──────► Idle ──────────────────────────────► ShowingResult
//!   │         ▲  │ calculate err                      │ append
//!   │         │  ▼                                    │ (continue or restart)
//!   │  append ShowingError ◄──────────────────────────┘
//!   └──────────────┘
//! ```
//!
//! The buffer always holds ASCII digits; tokens typed with native digits are
//! delocalized on entry.

use ganit_calc::CalcEngine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GanitConfig;
use crate::error::{Result, SessionError};
use crate::history::{HistoryEntry, HistoryLog};
use crate::locale::{delocalize, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcState {
    #[default]
    Idle,
    ShowingResult,
    ShowingError,
}

/// A keypad token after macro recognition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputToken {
    /// `x²`: wrap the buffer as `(buffer)^2`
    Square,
    /// `xʸ`: append `^`
    Power,
    /// `1/x`: wrap the buffer as `1/(buffer)`
    Reciprocal,
    /// `+/-`: wrap the buffer as `-(buffer)`
    ToggleSign,
    /// `√`: append `√(`
    Sqrt,
    /// `Mod`: append the modulo operator
    Modulo,
    /// Appended verbatim
    Literal(String),
}

impl InputToken {
    pub fn parse(token: &str) -> Self {
        match token {
            "x²" => Self::Square,
            "xʸ" => Self::Power,
            "1/x" => Self::Reciprocal,
            "+/-" => Self::ToggleSign,
            "√" => Self::Sqrt,
            "Mod" => Self::Modulo,
            other => Self::Literal(delocalize(other)),
        }
    }

    /// Tokens that continue from a displayed result
    pub fn is_binary_operator(&self) -> bool {
        match self {
            Self::Power | Self::Modulo => true,
            Self::Literal(text) => matches!(
                text.as_str(),
                "+" | "-" | "×" | "÷" | "%" | "^" | "*" | "/"
            ),
            _ => false,
        }
    }

    /// Tokens that wrap the current buffer
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::Square | Self::Reciprocal | Self::ToggleSign)
    }

    fn apply(&self, buffer: &mut String) {
        match self {
            Self::Square => {
                if !buffer.is_empty() {
                    *buffer = format!("({})^2", buffer);
                }
            },
            Self::Power => buffer.push('^'),
            Self::Reciprocal => {
                *buffer = if buffer.is_empty() {
                    "1/(".to_string()
                } else {
                    format!("1/({})", buffer)
                };
            },
            Self::ToggleSign => {
                *buffer = if buffer.is_empty() {
                    "-".to_string()
                } else {
                    format!("-({})", buffer)
                };
            },
            Self::Sqrt => buffer.push_str("√("),
            Self::Modulo => buffer.push_str("Mod"),
            Self::Literal(text) => buffer.push_str(text),
        }
    }
}

/// Calculator tab state
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    engine: CalcEngine,
    expression: String,
    result: String,
    preview: String,
    state: CalcState,
    history: HistoryLog,
    language: Language,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(&GanitConfig::default())
    }
}

impl CalculatorSession {
    pub fn new(config: &GanitConfig) -> Self {
        Self {
            engine: CalcEngine::new(config.engine_config()),
            expression: String::new(),
            result: String::new(),
            preview: String::new(),
            state: CalcState::Idle,
            history: HistoryLog::new(config.history_capacity),
            language: config.language,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Last value, or the localized error label in [`CalcState::ShowingError`]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Speculative value of the buffer while typing
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn engine(&self) -> &CalcEngine {
        &self.engine
    }

    /// Error label used by subsequent failures
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Feed one keypad token
    pub fn handle_input(&mut self, token: &str) {
        let token = InputToken::parse(token);

        match self.state {
            CalcState::Idle => {},
            CalcState::ShowingResult => {
                let previous = std::mem::take(&mut self.result);
                self.expression = if token.is_binary_operator() || token.is_wrapper() {
                    previous
                } else {
                    String::new()
                };
                self.state = CalcState::Idle;
            },
            CalcState::ShowingError => {
                self.expression.clear();
                self.result.clear();
                self.state = CalcState::Idle;
            },
        }

        token.apply(&mut self.expression);
        self.refresh_preview();
    }

    /// Reset buffer, result and preview
    pub fn clear(&mut self) {
        self.expression.clear();
        self.result.clear();
        self.preview.clear();
        self.state = CalcState::Idle;
    }

    /// Remove the last character; acknowledges an error by clearing everything
    pub fn delete_last(&mut self) {
        if self.state == CalcState::ShowingError {
            self.clear();
            return;
        }
        self.expression.pop();
        self.refresh_preview();
    }

    /// Evaluate the buffer. Empty input is ignored.
    pub fn calculate(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        self.preview.clear();
        match self.engine.evaluate(&self.expression) {
            Ok(value) => {
                info!(expression = %self.expression, result = %value, "calculated");
                self.history
                    .push(HistoryEntry::new(self.expression.clone(), value.clone()));
                self.result = value;
                self.state = CalcState::ShowingResult;
            },
            Err(e) => {
                info!(expression = %self.expression, kind = ?e.kind(), "calculation failed");
                self.result = self.language.labels().error.to_string();
                self.state = CalcState::ShowingError;
            },
        }
    }

    /// Put a past result back into the buffer
    pub fn load_history_item(&mut self, entry: &HistoryEntry) {
        self.expression = entry.result.clone();
        self.result.clear();
        self.preview.clear();
        self.state = CalcState::Idle;
        self.refresh_preview();
    }

    /// [`load_history_item`](Self::load_history_item) by position, 0 being the newest
    pub fn load_history_index(&mut self, index: usize) -> Result<()> {
        let entry = self
            .history
            .get(index)
            .cloned()
            .ok_or_else(|| SessionError::HistoryNotFound(index.to_string()))?;
        self.load_history_item(&entry);
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn refresh_preview(&mut self) {
        if self.state != CalcState::Idle {
            return;
        }

        let evaluable = self
            .expression
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit() || c == ')');

        self.preview = if evaluable {
            self.engine.evaluate(&self.expression).unwrap_or_else(|e| {
                debug!(expression = %self.expression, error = %e, "preview suppressed");
                String::new()
            })
        } else {
            String::new()
        };
    }
}

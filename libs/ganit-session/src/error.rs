//! Session error types

use thiserror::Error;

use ganit_units::UnitError;

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised by session setters. Calculation failures are not errors at
/// this level; they move the calculator into its error state instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Unit selection rejected
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Unsupported display language
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Unknown keypad tab name
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// History entry lookup failed
    #[error("History entry not found: {0}")]
    HistoryNotFound(String),
}

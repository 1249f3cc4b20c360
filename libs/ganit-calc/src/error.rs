//! Error types for ganit-calc

use thiserror::Error;

/// Coarse failure class reported to callers.
///
/// Both kinds end up behind the same localized "Error" label in the UI; the
/// distinction is kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input could not be parsed
    Syntax,
    /// The input parsed but produced NaN or an infinite value
    Math,
}

/// Calculation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Math error: {0}")]
    Math(String),
}

impl CalcError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    pub fn math(msg: impl Into<String>) -> Self {
        Self::Math(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Math(_) => ErrorKind::Math,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

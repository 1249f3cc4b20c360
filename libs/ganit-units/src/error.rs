//! Error types for ganit-units

use thiserror::Error;

use crate::units::{Category, Unit};

/// Unit lookup errors
///
/// Raised only at the boundary (parsing symbols, selecting a unit pair);
/// [`crate::convert`] itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unit {unit} does not belong to category {category}")]
    WrongCategory { unit: Unit, category: Category },
}

impl UnitError {
    pub fn unknown_unit(symbol: impl Into<String>) -> Self {
        Self::UnknownUnit(symbol.into())
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }
}

pub type Result<T> = std::result::Result<T, UnitError>;

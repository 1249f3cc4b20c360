//! ganit-units - Unit conversion engine for the Ganit converter
//!
//! Converts a value between two units of one category using fixed rate
//! tables. Temperature is converted through Celsius.
//!
//! # Example
//!
//! ```rust
//! use ganit_units::{convert, format_conversion, Category, Unit};
//!
//! let f = convert(100.0, Unit::C, Unit::F, Category::Temperature);
//! assert_eq!(format_conversion(f), "212");
//!
//! let mb = convert(1024.0, Unit::Kb, Unit::Mb, Category::Data);
//! assert_eq!(format_conversion(mb), "1");
//! ```

pub mod converter;
pub mod error;
pub mod units;

pub use converter::{convert, format_conversion};
pub use error::{Result, UnitError};
pub use units::{Category, Unit};

//! ganit-session - Keypad sessions for the Ganit calculator and converter
//!
//! [`CalculatorSession`] wraps the expression engine in the
//! `Idle → ShowingResult | ShowingError` state machine with live preview and a
//! capped history; [`ConverterSession`] holds the category, unit pair and input
//! buffer; [`Keypad`] routes key presses to whichever tab is active.
//!
//! # Example
//!
//! ```rust
//! use ganit_session::{CalcState, Keypad, Tab};
//!
//! let mut keypad = Keypad::default();
//! for key in ["1", "2", "×", "3", "="] {
//!     keypad.press(key);
//! }
//! assert_eq!(keypad.calculator().result(), "36");
//! assert_eq!(keypad.calculator().state(), CalcState::ShowingResult);
//!
//! keypad.set_tab(Tab::Converter);
//! for key in ["2", "5", "0", "0"] {
//!     keypad.press(key);
//! }
//! assert_eq!(keypad.converter().result(), "2.5");
//! ```

pub mod calculator;
pub mod config;
pub mod converter;
pub mod error;
pub mod history;
pub mod keypad;
pub mod locale;

// Re-exports for convenience
pub use calculator::{CalcState, CalculatorSession, InputToken};
pub use config::GanitConfig;
pub use converter::{parse_number, ConverterSession};
pub use error::{Result, SessionError};
pub use history::{HistoryEntry, HistoryLog, MAX_HISTORY_CAPACITY};
pub use keypad::{Keypad, Tab, CALCULATOR_KEYS, CONVERTER_KEYS};
pub use locale::{delocalize, localize, Labels, Language};

//! ConverterSession - category, unit pair and numeric input buffer

use ganit_units::{convert, format_conversion, Category, Unit, UnitError};
use tracing::{debug, info};

use crate::error::Result;
use crate::locale::delocalize;

/// Converter tab state. The result is derived on demand and never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterSession {
    category: Category,
    unit_from: Unit,
    unit_to: Unit,
    input: String,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

impl ConverterSession {
    pub fn new(category: Category) -> Self {
        let (unit_from, unit_to) = category.default_pair();
        Self {
            category,
            unit_from,
            unit_to,
            input: String::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn unit_from(&self) -> Unit {
        self.unit_from
    }

    pub fn unit_to(&self) -> Unit {
        self.unit_to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Switch category; clears the input and selects the default pair
    pub fn set_category(&mut self, category: Category) {
        let (from, to) = category.default_pair();
        self.category = category;
        self.unit_from = from;
        self.unit_to = to;
        self.input.clear();
        info!(%category, %from, %to, "converter category changed");
    }

    /// Select a unit pair; both must belong to the active category
    pub fn set_units(&mut self, from: Unit, to: Unit) -> Result<()> {
        for unit in [from, to] {
            if !self.category.contains(unit) {
                return Err(UnitError::WrongCategory {
                    unit,
                    category: self.category,
                }
                .into());
            }
        }
        self.unit_from = from;
        self.unit_to = to;
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.unit_from, &mut self.unit_to);
    }

    /// Replace the buffer
    pub fn set_input(&mut self, input: &str) {
        self.input = delocalize(input);
    }

    /// Append a keypad token. Only digits and `.` are accepted; returns
    /// whether the token was taken.
    pub fn push_input(&mut self, token: &str) -> bool {
        let token = delocalize(token);
        let accepted = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.');

        if accepted {
            self.input.push_str(&token);
        } else {
            debug!(token = %token, "converter ignored key");
        }
        accepted
    }

    pub fn delete_last(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Converted value of the buffer, treating unparsable input as 0
    pub fn value(&self) -> f64 {
        let value = parse_number(&self.input).unwrap_or(0.0);
        convert(value, self.unit_from, self.unit_to, self.category)
    }

    /// Formatted [`value`](Self::value)
    pub fn result(&self) -> String {
        format_conversion(self.value())
    }
}

/// Parse the longest leading decimal prefix: optional sign, digits, optional
/// fraction. At least one digit is required (`1.2.3` → 1.2, `5.` → 5,
/// `.` → None).
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }
    text[..end].parse().ok()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use crate::error::SessionError;

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("1.2.3"), Some(1.2));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-3x"), Some(-3.0));
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_defaults() {
        let session = ConverterSession::default();
        assert_eq!(session.category(), Category::Length);
        assert_eq!(session.unit_from(), Unit::M);
        assert_eq!(session.unit_to(), Unit::Km);
        assert_eq!(session.result(), "0");
    }

    #[test]
    fn test_push_input_filters_operators() {
        let mut session = ConverterSession::default();
        for key in ["1", "+", "5", "×", "0", "=", "Mod", "0"] {
            session.push_input(key);
        }
        assert_eq!(session.input(), "1500");
        assert_eq!(session.result(), "1.5");
    }

    #[test]
    fn test_native_digits_accepted() {
        let mut session = ConverterSession::new(Category::Temperature);
        assert!(session.push_input("१"));
        assert!(session.push_input("००"));
        assert_eq!(session.input(), "100");
        assert_eq!(session.result(), "212");
    }

    #[test]
    fn test_set_category_resets() {
        let mut session = ConverterSession::default();
        session.set_input("42");
        session.set_category(Category::Data);

        assert_eq!(session.input(), "");
        assert_eq!(session.unit_from(), Unit::Mb);
        assert_eq!(session.unit_to(), Unit::Gb);
    }

    #[test]
    fn test_set_units_rejects_foreign_unit() {
        let mut session = ConverterSession::new(Category::Weight);
        let err = session.set_units(Unit::Kg, Unit::M).unwrap_err();

        assert_eq!(
            err,
            SessionError::Unit(UnitError::WrongCategory {
                unit: Unit::M,
                category: Category::Weight,
            })
        );
        assert_eq!(session.unit_from(), Unit::Kg);
        assert_eq!(session.unit_to(), Unit::G);
    }

    #[test]
    fn test_swap_keeps_input() {
        let mut session = ConverterSession::new(Category::Data);
        session.set_input("1024");
        session.set_units(Unit::Kb, Unit::Mb).unwrap();
        assert_eq!(session.result(), "1");

        session.swap_units();
        assert_eq!(session.unit_from(), Unit::Mb);
        assert_eq!(session.input(), "1024");
        assert_eq!(session.result(), "1048576");
    }

    #[test]
    fn test_delete_and_clear() {
        let mut session = ConverterSession::default();
        session.set_input("123");
        session.delete_last();
        assert_eq!(session.input(), "12");
        session.clear();
        assert_eq!(session.input(), "");
    }
}

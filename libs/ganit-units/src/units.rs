//! Categories, units and rate tables
//!
//! Linear categories express every unit as a ratio to a base unit:
//!
//! | Category | Base | Units |
//! |----------|------|-------|
//! | length | meter | m km cm mm ft in |
//! | weight | gram | kg g mg lb oz |
//! | data | byte | B KB MB GB |
//!
//! Temperature (`C F K`) is affine and has no rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Length,
    Weight,
    Temperature,
    Data,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Data,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Data => "data",
        }
    }

    /// Units offered in this category, in menu order
    pub fn units(self) -> &'static [Unit] {
        match self {
            Self::Length => &[Unit::M, Unit::Km, Unit::Cm, Unit::Mm, Unit::Ft, Unit::In],
            Self::Weight => &[Unit::Kg, Unit::G, Unit::Mg, Unit::Lb, Unit::Oz],
            Self::Temperature => &[Unit::C, Unit::F, Unit::K],
            Self::Data => &[Unit::B, Unit::Kb, Unit::Mb, Unit::Gb],
        }
    }

    /// Pair selected when the category is opened
    pub fn default_pair(self) -> (Unit, Unit) {
        match self {
            Self::Length => (Unit::M, Unit::Km),
            Self::Weight => (Unit::Kg, Unit::G),
            Self::Temperature => (Unit::C, Unit::F),
            Self::Data => (Unit::Mb, Unit::Gb),
        }
    }

    pub fn contains(self, unit: Unit) -> bool {
        unit.category() == self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "length" => Ok(Self::Length),
            "weight" => Ok(Self::Weight),
            "temperature" | "temp" => Ok(Self::Temperature),
            "data" => Ok(Self::Data),
            _ => Err(UnitError::unknown_category(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Length
    #[serde(rename = "m")]
    M,
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "ft")]
    Ft,
    #[serde(rename = "in")]
    In,
    // Weight
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "lb")]
    Lb,
    #[serde(rename = "oz")]
    Oz,
    // Temperature
    C,
    F,
    K,
    // Data
    B,
    #[serde(rename = "KB")]
    Kb,
    #[serde(rename = "MB")]
    Mb,
    #[serde(rename = "GB")]
    Gb,
}

impl Unit {
    pub const ALL: [Unit; 18] = [
        Unit::M,
        Unit::Km,
        Unit::Cm,
        Unit::Mm,
        Unit::Ft,
        Unit::In,
        Unit::Kg,
        Unit::G,
        Unit::Mg,
        Unit::Lb,
        Unit::Oz,
        Unit::C,
        Unit::F,
        Unit::K,
        Unit::B,
        Unit::Kb,
        Unit::Mb,
        Unit::Gb,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::M => "m",
            Self::Km => "km",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::Ft => "ft",
            Self::In => "in",
            Self::Kg => "kg",
            Self::G => "g",
            Self::Mg => "mg",
            Self::Lb => "lb",
            Self::Oz => "oz",
            Self::C => "C",
            Self::F => "F",
            Self::K => "K",
            Self::B => "B",
            Self::Kb => "KB",
            Self::Mb => "MB",
            Self::Gb => "GB",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::M | Self::Km | Self::Cm | Self::Mm | Self::Ft | Self::In => Category::Length,
            Self::Kg | Self::G | Self::Mg | Self::Lb | Self::Oz => Category::Weight,
            Self::C | Self::F | Self::K => Category::Temperature,
            Self::B | Self::Kb | Self::Mb | Self::Gb => Category::Data,
        }
    }

    /// Ratio to the category's base unit; `None` for temperature units
    pub fn rate(self) -> Option<f64> {
        let rate = match self {
            Self::M => 1.0,
            Self::Km => 1000.0,
            Self::Cm => 0.01,
            Self::Mm => 0.001,
            Self::Ft => 0.3048,
            Self::In => 0.0254,
            Self::G => 1.0,
            Self::Kg => 1000.0,
            Self::Mg => 0.001,
            Self::Lb => 453.592,
            Self::Oz => 28.3495,
            Self::B => 1.0,
            Self::Kb => 1024.0,
            Self::Mb => 1_048_576.0,
            Self::Gb => 1_073_741_824.0,
            Self::C | Self::F | Self::K => return None,
        };
        Some(rate)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    /// Symbols are case-sensitive (`m` is meter, `MB` is megabyte)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.symbol() == s)
            .ok_or_else(|| UnitError::unknown_unit(s))
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_listed_in_its_category() {
        for unit in Unit::ALL {
            assert!(
                unit.category().units().contains(&unit),
                "{} missing from {}",
                unit,
                unit.category()
            );
        }
    }

    #[test]
    fn test_default_pairs_stay_in_category() {
        for category in Category::ALL {
            let (from, to) = category.default_pair();
            assert!(category.contains(from));
            assert!(category.contains(to));
        }
    }

    #[test]
    fn test_symbol_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.symbol().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert_eq!("MB".parse::<Unit>().unwrap(), Unit::Mb);
        assert!("mb".parse::<Unit>().is_err());
        assert!("yd".parse::<Unit>().is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Temp".parse::<Category>().unwrap(), Category::Temperature);
        assert_eq!("DATA".parse::<Category>().unwrap(), Category::Data);
        assert!("volume".parse::<Category>().is_err());
    }

    #[test]
    fn test_temperature_has_no_rate() {
        assert_eq!(Unit::K.rate(), None);
        assert_eq!(Unit::Kb.rate(), Some(1024.0));
    }

    #[test]
    fn test_serde_symbols() {
        assert_eq!(serde_json::to_string(&Unit::Kb).unwrap(), r#""KB""#);
        assert_eq!(serde_json::from_str::<Unit>(r#""in""#).unwrap(), Unit::In);
        assert_eq!(
            serde_json::from_str::<Category>(r#""weight""#).unwrap(),
            Category::Weight
        );
    }
}

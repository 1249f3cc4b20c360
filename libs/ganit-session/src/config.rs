//! Session configuration
//!
//! Loaded through [`ganit_common::load_config`], so every field can be set from
//! `config/ganit.toml`, `config/ganit.yaml` or `GANIT_*` environment variables
//! (`GANIT_HISTORY_CAPACITY=20`, `GANIT_LOG__LEVEL=debug`).

use ganit_calc::{AngleUnit, EngineConfig};
use ganit_common::{Error, LogConfig, Result};
use ganit_units::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::history::{COMPACT_HISTORY_CAPACITY, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
use crate::locale::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanitConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,
    /// Scientific keypad (`sin cos tan log`)
    pub scientific: bool,
    pub angle_unit: AngleUnit,
    pub language: Language,
    /// Converter category selected at startup
    pub default_category: Category,
    pub log: LogConfig,
}

impl Default for GanitConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            scientific: true,
            angle_unit: AngleUnit::Radians,
            language: Language::En,
            default_category: Category::Length,
            log: LogConfig::default(),
        }
    }
}

impl GanitConfig {
    pub const APP_NAME: &'static str = "ganit";

    /// Small-widget layout: shorter history
    pub fn compact() -> Self {
        Self {
            history_capacity: COMPACT_HISTORY_CAPACITY,
            ..Self::default()
        }
    }

    /// Defaults, then `config/ganit.{toml,yaml}`, then `GANIT_*`
    pub fn load() -> Result<Self> {
        let config: Self = ganit_common::load_config(Self::APP_NAME)?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit config file, still honouring `GANIT_*` overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = ganit_common::load_config_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            warn!("history_capacity must be at least 1");
            return Err(Error::config("history_capacity must be at least 1"));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            warn!(
                capacity = self.history_capacity,
                max = MAX_HISTORY_CAPACITY,
                "history_capacity too large"
            );
            return Err(Error::config(format!(
                "history_capacity must be at most {}",
                MAX_HISTORY_CAPACITY
            )));
        }
        Ok(())
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            scientific: self.scientific,
            angle_unit: self.angle_unit,
        }
    }
}

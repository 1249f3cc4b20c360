//! Layered configuration loading for Ganit

use crate::{Error, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Prefix for environment variable overrides, e.g. `GANIT_LANGUAGE=hi`.
/// Nested keys use a double underscore: `GANIT_LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "GANIT_";

/// Load configuration from multiple sources
///
/// Priority (highest to lowest):
/// 1. Environment variables (`GANIT_` prefix)
/// 2. `config/{app_name}.yaml`
/// 3. `config/{app_name}.toml`
/// 4. `T::default()`
pub fn load_config<T>(app_name: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de> + Serialize + Default,
{
    let figment = Figment::from(Serialized::defaults(T::default()))
        .merge(Toml::file(format!("config/{}.toml", app_name)))
        .merge(Yaml::file(format!("config/{}.yaml", app_name)))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    debug!(app_name, "loading layered configuration");

    figment
        .extract()
        .map_err(|e| Error::Config(format!("Failed to load configuration: {}", e)))
}

/// Load configuration from a specific file, still honouring defaults and
/// environment overrides
pub fn load_config_from_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de> + Serialize + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Config("Config file must have an extension".to_string()))?;

    let figment = Figment::from(Serialized::defaults(T::default()));
    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => {
            return Err(Error::Config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        },
    };

    debug!(path = %path.display(), "loading configuration file");

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| Error::Config(format!("Failed to load configuration from file: {}", e)))
}

/// Save configuration to a file
pub fn save_config_to_file<T, P>(config: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Config("Config file must have an extension".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = match extension {
        "toml" => toml::to_string_pretty(config)?,
        "yaml" | "yml" => serde_yaml::to_string(config)?,
        "json" => serde_json::to_string_pretty(config)?,
        _ => {
            return Err(Error::Config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        },
    };

    std::fs::write(path, content)?;
    Ok(())
}

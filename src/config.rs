//! Application settings.
//!
//! Settings are optional. Without `--config` the stock defaults apply; with it,
//! the given TOML file is layered over the defaults. Files are sparse, so only
//! the keys being changed need to appear.
//!
//! ```toml
//! [calories]
//! threshold = 300          # Warn when a recipe's total exceeds this
//!
//! [display]
//! show_food_groups = true  # Food group beside each ingredient
//! show_calories = true     # Per-ingredient calories
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::recipe::CALORIE_THRESHOLD;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub calories: CaloriesConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calories.threshold == 0 {
            return Err(ConfigError::Validation(
                "calories.threshold must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaloriesConfig {
    /// Total calories above which a recipe triggers a warning.
    pub threshold: u32,
}

impl Default for CaloriesConfig {
    fn default() -> Self {
        Self {
            threshold: CALORIE_THRESHOLD,
        }
    }
}

/// Controls how much detail a recipe listing shows per ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub show_food_groups: bool,
    pub show_calories: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_food_groups: true,
            show_calories: true,
        }
    }
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load settings from `path`, or the stock defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => Ok(Config::default()),
    }
}

/// A fully-commented stock config, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# Recipe Book Configuration
# =========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Calories
# ---------------------------------------------------------------------------
[calories]
# A warning is shown after adding or scaling a recipe whose total
# calories are strictly above this value.
threshold = 300

# ---------------------------------------------------------------------------
# Display
# ---------------------------------------------------------------------------
[display]
# Show the food group beside each ingredient.
show_food_groups = true

# Show per-ingredient calories.
show_calories = true
"#
}

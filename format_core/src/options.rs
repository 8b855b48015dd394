use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable number formatting options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Separator inserted between thousands groups
    #[serde(default = "default_group_separator")]
    pub group_separator: char,
    /// Separator between the whole and fractional parts
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    /// Fractional digits shown for non-integral values
    #[serde(default = "default_max_decimals")]
    pub max_decimals: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            group_separator: ',',
            decimal_separator: '.',
            max_decimals: 1,
        }
    }
}

impl FormatOptions {
    /// Load options from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        let options: FormatOptions = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;
        Ok(options)
    }
}

fn default_group_separator() -> char {
    ','
}
fn default_decimal_separator() -> char {
    '.'
}
fn default_max_decimals() -> u8 {
    1
}

//! Display layout constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global display constants instance
static DISPLAY_CONSTANTS: OnceLock<DisplayConstants> = OnceLock::new();

/// Initialize the global display constants from a TOML file
///
/// Must be called once at startup before any panel is built.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = DisplayConstants::load_from_path(path)?;
    DISPLAY_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::ValidationError("DisplayConstants already initialized".to_string()))
}

/// Initialize the global display constants with default values
///
/// Useful for tests or when no config file is available.
pub fn init_constants_default() -> Result<(), ConfigError> {
    DISPLAY_CONSTANTS
        .set(DisplayConstants::default())
        .map_err(|_| ConfigError::ValidationError("DisplayConstants already initialized".to_string()))
}

/// Get a reference to the global display constants
///
/// Panics if constants have not been initialized via `init_constants()` or
/// `init_constants_default()`.
pub fn constants() -> &'static DisplayConstants {
    DISPLAY_CONSTANTS
        .get()
        .expect("DisplayConstants not initialized - call init_constants() or init_constants_default() first")
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    DISPLAY_CONSTANTS.get().is_some()
}

/// Ensure constants are initialized with defaults (idempotent)
///
/// If constants are already initialized, this does nothing.
/// If not initialized, initializes with default values.
pub fn ensure_constants_initialized() {
    DISPLAY_CONSTANTS.get_or_init(DisplayConstants::default);
}

/// Tunable display constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConstants {
    #[serde(default)]
    pub layout: LayoutConstants,
}

impl Default for DisplayConstants {
    fn default() -> Self {
        DisplayConstants {
            layout: LayoutConstants::default(),
        }
    }
}

impl DisplayConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let constants: DisplayConstants = toml::from_str(&content)?;
        Ok(constants)
    }
}

/// Vertical layout increments, in the renderer's pixel convention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConstants {
    /// Offset before the first line of a column
    #[serde(default = "default_top_margin")]
    pub top_margin: i32,
    /// Height of one label/value line or table row
    #[serde(default = "default_line_height")]
    pub line_height: i32,
    /// Height of a blank spacer line
    #[serde(default = "default_spacer_height")]
    pub spacer_height: i32,
    /// Block reserved for the energy/heat table header, which the renderer
    /// draws itself but the column must budget for
    #[serde(default = "default_table_header_reserve")]
    pub table_header_reserve: i32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        LayoutConstants {
            top_margin: 20,
            line_height: 20,
            spacer_height: 10,
            table_header_reserve: 30,
        }
    }
}

fn default_top_margin() -> i32 {
    20
}
fn default_line_height() -> i32 {
    20
}
fn default_spacer_height() -> i32 {
    10
}
fn default_table_header_reserve() -> i32 {
    30
}

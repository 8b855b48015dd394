//! fleet_core - Ship and outfit definitions
//!
//! This crate owns the data model consumed by the display stack:
//! - AttributeSet: named numeric attribute maps (missing keys read as zero)
//! - Outfit: installable components that grant or draw ship attributes
//! - Ship: a hull plus its installed outfits and current state
//! - ShipyardRegistry: TOML/JSON definition files for outfits and ship
//!   templates

pub mod attribute;
pub mod config;
pub mod outfit;
pub mod ship;
pub mod types;

pub use attribute::{display_name, AttributeSet};
pub use config::ShipyardRegistry;
pub use outfit::{Outfit, WeaponTraits};
pub use ship::{Bay, OutfitStack, Ship};
pub use types::{AttributeKind, BayKind, OutfitCategory};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading definition files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path}': {error}")]
    Json {
        error: serde_json::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error building a ship from a template
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Unknown ship model: {0}")]
    UnknownModel(String),
    #[error("Ship '{model}' references unknown outfit '{outfit}'")]
    UnknownOutfit { model: String, outfit: String },
}

mod number;
mod options;

pub use number::{format_credits, format_number, NumberFormatter};
pub use options::FormatOptions;

use std::path::PathBuf;
use thiserror::Error;

/// Error loading formatting options
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
}

//! Prelude module for convenient imports
//!
//! ```rust
//! use info_core::prelude::*;
//! ```

// Core types
pub use crate::panel::ShipInfoPanel;
pub use crate::types::{DisplayLine, DisplayMode, EnergyHeatRow};

// Aggregation
pub use crate::aggregate::AttributeTotals;

// Collaborator seams
pub use crate::format::{NumberFormat, StandardFormat};
pub use crate::value::{FullPrice, ShipValuation};

// Config
pub use crate::config::{init_constants, init_constants_default};

// Re-exports from fleet_core
pub use fleet_core::{AttributeSet, Outfit, OutfitCategory, Ship};

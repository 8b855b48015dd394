//! info_core - Ship info display core
//!
//! This library turns a ship and its installed outfits into display-ready
//! statistics:
//! - AttributeTotals: capacity and used views aggregated per update
//! - metrics: rate-converted movement figures and energy/heat regime rows
//! - ShipInfoPanel: label/value columns with running layout heights for a
//!   table-drawing renderer
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use info_core::prelude::*;
//! use fleet_core::ShipyardRegistry;
//!
//! let registry = ShipyardRegistry::load(Path::new("data/")).unwrap();
//! let ship = registry.build_ship("Corvette").unwrap();
//!
//! let format = StandardFormat::new();
//! let mut prices = FullPrice::new();
//! prices.register_model("Corvette", 500_000);
//!
//! let panel = ShipInfoPanel::new(&ship, &prices, 0, &format);
//! for line in panel.attribute_lines() {
//!     println!("{:<28}{}", line.label, line.value);
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod format;
pub mod layout;
pub mod metrics;
pub mod panel;
pub mod prelude;
pub mod types;
pub mod value;

// Core API - what most users need
pub use aggregate::AttributeTotals;
pub use layout::InfoColumn;
pub use panel::ShipInfoPanel;
pub use types::{DisplayLine, DisplayMode, EnergyHeatRow};

// Collaborator seams
pub use format::{NumberFormat, StandardFormat};
pub use value::{FullPrice, ShipValuation};

// Configuration
pub use config::{init_constants, init_constants_default};

// Re-export commonly needed fleet_core types
pub use fleet_core::{AttributeSet, Outfit, OutfitCategory, Ship};

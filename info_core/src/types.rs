//! Core display types

use fleet_core::Ship;
use serde::{Deserialize, Serialize};

/// An ordered label/value pair destined for a two-column table
///
/// A line with an empty label and value is a deliberate vertical spacer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    pub label: String,
    pub value: String,
}

impl DisplayLine {
    /// Create a label/value line
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        DisplayLine {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create a vertical spacer
    pub fn spacer() -> Self {
        DisplayLine::default()
    }

    /// Whether this line is a spacer
    pub fn is_spacer(&self) -> bool {
        self.label.is_empty() && self.value.is_empty()
    }
}

/// One row of the multi-column energy/heat table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyHeatRow {
    pub label: String,
    pub energy: String,
    pub heat: String,
}

/// How ship statistics are presented
///
/// Resolved once at the start of an update rather than threaded through the
/// branches as a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// An unnamed or docked chassis: capacities only, and movement stats as
    /// full/empty-cargo pairs
    Template,
    /// An actively crewed ship: current values alongside capacities
    Active,
}

impl DisplayMode {
    /// Resolve the mode for a ship
    pub fn resolve(ship: &Ship) -> Self {
        if ship.name().is_empty() || ship.is_docked() {
            DisplayMode::Template
        } else {
            DisplayMode::Active
        }
    }

    pub fn is_template(self) -> bool {
        matches!(self, DisplayMode::Template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::AttributeSet;

    #[test]
    fn test_spacer_detection() {
        assert!(DisplayLine::spacer().is_spacer());
        assert!(!DisplayLine::new("mass:", "120").is_spacer());
        assert!(!DisplayLine::new("movement:", "").is_spacer());
    }

    #[test]
    fn test_mode_resolution() {
        let mut ship = Ship::new("Corvette", AttributeSet::new());
        assert_eq!(DisplayMode::resolve(&ship), DisplayMode::Template);

        ship.set_name("Adamant");
        assert_eq!(DisplayMode::resolve(&ship), DisplayMode::Active);

        ship.dock("New Boston");
        assert_eq!(DisplayMode::resolve(&ship), DisplayMode::Template);

        ship.undock();
        assert_eq!(DisplayMode::resolve(&ship), DisplayMode::Active);
    }
}

//! Attribute aggregation - capacity and used views of a ship

use fleet_core::{AttributeKind, AttributeSet, Ship};

/// The two parallel attribute views an info panel is built from
///
/// `capacity` is what the hull and its installed outfits allow; `used` is
/// what is currently applied/consumed.
#[derive(Debug, Clone, Default)]
pub struct AttributeTotals {
    pub capacity: AttributeSet,
    pub used: AttributeSet,
}

impl AttributeTotals {
    /// Build both views from a ship
    ///
    /// Capacity starts from the unmodified hull attributes; every installed
    /// outfit entry classified as a grant adds `count x value`. Draw entries
    /// never count toward capacity, so an outfit that consumes outfit space
    /// cannot inflate the displayed total. Flag-style keys (hyperdrive
    /// presence and the like) are not special-cased; linear accumulation is
    /// wrong for them and callers simply never display them.
    pub fn from_ship(ship: &Ship) -> Self {
        let mut capacity = ship.base_attributes().clone();
        for stack in ship.outfits() {
            for (key, value) in stack.outfit.attributes.iter() {
                if stack.outfit.attribute_kind(key) == AttributeKind::Capacity {
                    capacity.add(key, value * stack.count as f64);
                }
            }
        }

        AttributeTotals {
            capacity,
            used: ship.attributes().clone(),
        }
    }
}

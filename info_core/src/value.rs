//! Valuation collaborator seam

use fleet_core::Ship;
use std::collections::HashMap;

/// Converts a ship or a bare hull into a currency value as of a given day
///
/// Implementations own the age-based value curve; the display core only
/// asks for the two figures it shows.
pub trait ShipValuation {
    /// Value of the ship with everything installed
    fn ship_value(&self, ship: &Ship, day: u32) -> i64;
    /// Value of the bare hull of the named model
    fn chassis_value(&self, model_name: &str, day: u32) -> i64;
}

/// Valuation with no age-based loss: ships are worth their full cost and
/// hulls the chassis cost registered for their model
#[derive(Debug, Clone, Default)]
pub struct FullPrice {
    chassis_costs: HashMap<String, i64>,
}

impl FullPrice {
    pub fn new() -> Self {
        FullPrice::default()
    }

    /// Register the bare-hull cost of a model
    pub fn register_model(&mut self, model: impl Into<String>, cost: i64) {
        self.chassis_costs.insert(model.into(), cost);
    }
}

impl ShipValuation for FullPrice {
    fn ship_value(&self, ship: &Ship, _day: u32) -> i64 {
        ship.cost()
    }

    fn chassis_value(&self, model_name: &str, _day: u32) -> i64 {
        self.chassis_costs.get(model_name).copied().unwrap_or(0)
    }
}

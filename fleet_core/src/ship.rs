//! Ship state: hull attributes plus installed outfits

use crate::attribute::AttributeSet;
use crate::outfit::Outfit;
use crate::types::BayKind;
use serde::{Deserialize, Serialize};

/// Heat a hull can hold per ton of mass; the dissipation rate against this
/// ceiling bounds sustained heat output.
const HEAT_CAPACITY_PER_TON: f64 = 100.0;

/// A stack of identical installed outfits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitStack {
    pub outfit: Outfit,
    pub count: u32,
}

/// A carried-craft bay
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bay {
    pub kind: BayKind,
    #[serde(default)]
    pub occupied: bool,
}

/// A vehicle: a hull identified by model name, the outfits installed in it,
/// and its current cargo/fuel/crew state
///
/// `attributes` always equals the hull's base attributes plus the net
/// contribution of every installed outfit; `install` and `remove` keep it
/// in sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    name: String,
    model_name: String,
    base_attributes: AttributeSet,
    attributes: AttributeSet,
    outfits: Vec<OutfitStack>,
    #[serde(default)]
    chassis_cost: i64,
    #[serde(default)]
    cargo_used: f64,
    #[serde(default = "full_tank")]
    fuel: f64,
    #[serde(default = "nominal_cooling")]
    cooling_efficiency: f64,
    #[serde(default)]
    bays: Vec<Bay>,
    #[serde(default)]
    docked_at: Option<String>,
}

fn full_tank() -> f64 {
    1.0
}

fn nominal_cooling() -> f64 {
    1.0
}

impl Ship {
    /// Create an unnamed ship of the given model with its hull attributes
    pub fn new(model_name: impl Into<String>, base_attributes: AttributeSet) -> Self {
        let attributes = base_attributes.clone();
        Ship {
            name: String::new(),
            model_name: model_name.into(),
            base_attributes,
            attributes,
            outfits: Vec::new(),
            chassis_cost: 0,
            cargo_used: 0.0,
            fuel: 1.0,
            cooling_efficiency: 1.0,
            bays: Vec::new(),
            docked_at: None,
        }
    }

    /// Give the ship a name; unnamed ships display as templates
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the bare-hull purchase cost
    pub fn set_chassis_cost(&mut self, cost: i64) {
        self.chassis_cost = cost;
    }

    /// Park the ship at a planet
    pub fn dock(&mut self, planet: impl Into<String>) {
        self.docked_at = Some(planet.into());
    }

    /// Leave the current planet
    pub fn undock(&mut self) {
        self.docked_at = None;
    }

    /// Set the tonnage of cargo currently aboard
    pub fn set_cargo_used(&mut self, tons: f64) {
        self.cargo_used = tons.max(0.0);
    }

    /// Set the fuel level as a fraction of capacity
    pub fn set_fuel(&mut self, fraction: f64) {
        self.fuel = fraction.clamp(0.0, 1.0);
    }

    /// Set the cooling efficiency multiplier applied to cooling attributes
    pub fn set_cooling_efficiency(&mut self, efficiency: f64) {
        self.cooling_efficiency = efficiency;
    }

    /// Add an empty carried-craft bay
    pub fn add_bay(&mut self, kind: BayKind) {
        self.bays.push(Bay {
            kind,
            occupied: false,
        });
    }

    /// Mark the first free bay of the given kind occupied; false if none free
    pub fn occupy_bay(&mut self, kind: BayKind) -> bool {
        for bay in &mut self.bays {
            if bay.kind == kind && !bay.occupied {
                bay.occupied = true;
                return true;
            }
        }
        false
    }

    /// Install `count` copies of an outfit, applying its net attribute
    /// values to the ship. Stacks of the same outfit name merge.
    pub fn install(&mut self, outfit: Outfit, count: u32) {
        if count == 0 {
            return;
        }
        for (key, value) in outfit.attributes.iter() {
            self.attributes.add(key, value * count as f64);
        }
        if let Some(stack) = self.outfits.iter_mut().find(|s| s.outfit.name == outfit.name) {
            stack.count += count;
        } else {
            self.outfits.push(OutfitStack { outfit, count });
        }
    }

    /// Remove up to `count` copies of the named outfit, returning how many
    /// were actually removed. Attribute keys stay present afterwards; their
    /// values just return to the pre-install level.
    pub fn remove(&mut self, name: &str, count: u32) -> u32 {
        let Some(index) = self.outfits.iter().position(|s| s.outfit.name == name) else {
            return 0;
        };
        let removed = count.min(self.outfits[index].count);
        let contributions: Vec<(String, f64)> = self.outfits[index]
            .outfit
            .attributes
            .iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        for (key, value) in contributions {
            self.attributes.add(&key, -value * removed as f64);
        }
        self.outfits[index].count -= removed;
        if self.outfits[index].count == 0 {
            self.outfits.remove(index);
        }
        removed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Whether the ship is parked at a planet
    pub fn is_docked(&self) -> bool {
        self.docked_at.is_some()
    }

    /// The planet the ship is parked at, if any
    pub fn planet(&self) -> Option<&str> {
        self.docked_at.as_deref()
    }

    /// The currently applied attribute set (hull plus net outfit values)
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// The unmodified hull attribute set
    pub fn base_attributes(&self) -> &AttributeSet {
        &self.base_attributes
    }

    /// Installed outfit stacks
    pub fn outfits(&self) -> &[OutfitStack] {
        &self.outfits
    }

    /// Full purchase cost: chassis plus every installed outfit
    pub fn cost(&self) -> i64 {
        self.chassis_cost
            + self
                .outfits
                .iter()
                .map(|s| s.count as i64 * s.outfit.cost)
                .sum::<i64>()
    }

    /// Mass without cargo
    pub fn mass(&self) -> f64 {
        self.attributes.get("mass")
    }

    /// Tonnage of cargo currently aboard
    pub fn cargo_used(&self) -> f64 {
        self.cargo_used
    }

    /// Crew needed to operate the ship
    pub fn required_crew(&self) -> u32 {
        self.attributes.get("required crew").max(0.0).round() as u32
    }

    /// Fuel level as a fraction of capacity
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// Multiplier applied to cooling and active cooling
    pub fn cooling_efficiency(&self) -> f64 {
        self.cooling_efficiency
    }

    /// Fraction of stored heat shed per tick
    pub fn heat_dissipation(&self) -> f64 {
        self.attributes.get("heat dissipation")
    }

    /// Heat the hull can hold before overheating
    pub fn maximum_heat(&self) -> f64 {
        HEAT_CAPACITY_PER_TON * self.mass()
    }

    /// Number of unoccupied bays of the given kind
    pub fn bays_free(&self, kind: BayKind) -> u32 {
        self.bays
            .iter()
            .filter(|b| b.kind == kind && !b.occupied)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutfitCategory;

    fn hull() -> AttributeSet {
        let mut base = AttributeSet::new();
        base.set("mass", 120.0);
        base.set("outfit space", 200.0);
        base.set("shields", 1000.0);
        base
    }

    #[test]
    fn test_install_applies_net_attributes() {
        let mut ship = Ship::new("Corvette", hull());
        let generator = Outfit::new("Generator", OutfitCategory::Power)
            .with_attribute("energy generation", 3.0)
            .with_attribute("outfit space", -40.0)
            .with_attribute("mass", 20.0);
        ship.install(generator, 2);

        assert_eq!(ship.attributes().get("energy generation"), 6.0);
        assert_eq!(ship.attributes().get("outfit space"), 120.0);
        assert_eq!(ship.mass(), 160.0);
        // the hull itself is untouched
        assert_eq!(ship.base_attributes().get("outfit space"), 200.0);
    }

    #[test]
    fn test_install_merges_same_name_stacks() {
        let mut ship = Ship::new("Corvette", hull());
        let pod = Outfit::new("Fuel Pod", OutfitCategory::Systems).with_attribute("fuel capacity", 100.0);
        ship.install(pod.clone(), 1);
        ship.install(pod, 2);

        assert_eq!(ship.outfits().len(), 1);
        assert_eq!(ship.outfits()[0].count, 3);
        assert_eq!(ship.attributes().get("fuel capacity"), 300.0);
    }

    #[test]
    fn test_remove_restores_attributes_and_drops_empty_stacks() {
        let mut ship = Ship::new("Corvette", hull());
        let pod = Outfit::new("Fuel Pod", OutfitCategory::Systems).with_attribute("fuel capacity", 100.0);
        ship.install(pod, 2);

        assert_eq!(ship.remove("Fuel Pod", 5), 2);
        assert!(ship.outfits().is_empty());
        assert_eq!(ship.attributes().get("fuel capacity"), 0.0);
        // the key stays present after removal
        assert!(ship.attributes().contains("fuel capacity"));
    }

    #[test]
    fn test_cost_sums_chassis_and_outfits() {
        let mut ship = Ship::new("Corvette", hull());
        ship.set_chassis_cost(500_000);
        ship.install(
            Outfit::new("Laser", OutfitCategory::Guns).with_cost(36_000),
            2,
        );
        assert_eq!(ship.cost(), 572_000);
    }

    #[test]
    fn test_bays_free_counts_unoccupied() {
        let mut ship = Ship::new("Carrier", hull());
        ship.add_bay(BayKind::Drone);
        ship.add_bay(BayKind::Drone);
        ship.add_bay(BayKind::Fighter);

        assert_eq!(ship.bays_free(BayKind::Drone), 2);
        assert!(ship.occupy_bay(BayKind::Drone));
        assert_eq!(ship.bays_free(BayKind::Drone), 1);
        assert_eq!(ship.bays_free(BayKind::Fighter), 1);
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut ship = Ship::new("Corvette", hull());
        ship.set_name("Adamant");
        ship.set_fuel(0.5);
        let json = serde_json::to_string(&ship).unwrap();
        let back: Ship = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), "Adamant");
        assert_eq!(back.fuel(), 0.5);
        assert_eq!(back.mass(), 120.0);
    }
}

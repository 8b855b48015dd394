//! Derived, rate-converted display metrics

use fleet_core::{AttributeSet, Ship};

/// Multiplier taking a per-tick rate to the displayed per-minute figure
pub const RATE_PER_MINUTE: f64 = 60.0;
/// Multiplier for acceleration, which converts through the rate scale twice
pub const ACCEL_PER_MINUTE: f64 = 3600.0;

/// Division that treats a zero denominator as "undefined, shown as zero"
/// rather than letting a non-finite value reach a display string
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Thrust used for display: primary thrust, falling back to the afterburner
/// when the ship has no main engine
pub fn forward_thrust(attributes: &AttributeSet) -> f64 {
    let thrust = attributes.get("thrust");
    if thrust != 0.0 {
        thrust
    } else {
        attributes.get("afterburner thrust")
    }
}

/// Top speed once thrust balances drag
pub fn max_speed(attributes: &AttributeSet) -> f64 {
    RATE_PER_MINUTE * ratio(forward_thrust(attributes), attributes.get("drag"))
}

/// Acceleration at the given mass
pub fn acceleration(attributes: &AttributeSet, mass: f64) -> f64 {
    ACCEL_PER_MINUTE * ratio(forward_thrust(attributes), mass)
}

/// Turning rate at the given mass
pub fn turning(attributes: &AttributeSet, mass: f64) -> f64 {
    RATE_PER_MINUTE * ratio(attributes.get("turn"), mass)
}

/// Per-tick energy and heat cost of firing every installed weapon
///
/// Reload-normalized: an outfit firing once every `reload` ticks costs
/// `firing / reload` per tick. Weapons with a zero reload never fire and
/// contribute nothing.
pub fn firing_cost(ship: &Ship) -> (f64, f64) {
    let mut energy = 0.0;
    let mut heat = 0.0;
    for stack in ship.outfits() {
        let outfit = &stack.outfit;
        if outfit.is_weapon() && outfit.reload() != 0.0 {
            energy += stack.count as f64 * outfit.firing_energy() / outfit.reload();
            heat += stack.count as f64 * outfit.firing_heat() / outfit.reload();
        }
    }
    (energy, heat)
}

/// One computed row of the energy/heat table, before formatting
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeRow {
    pub label: String,
    pub energy: f64,
    pub heat: f64,
}

/// The five fixed operating regimes, already rate-converted for display
///
/// Energy is negative where the regime consumes it. The "max" row is the
/// comparison ceiling: stored energy capacity, and the steady-state heat
/// the ship sheds per minute at full temperature.
pub fn regime_rows(ship: &Ship) -> Vec<RegimeRow> {
    let attributes = ship.attributes();
    let mut rows = Vec::with_capacity(5);

    rows.push(RegimeRow {
        label: "idle:".to_string(),
        energy: RATE_PER_MINUTE
            * (attributes.get("energy generation") + attributes.get("solar collection")
                - attributes.get("energy consumption")
                - attributes.get("cooling energy")),
        heat: RATE_PER_MINUTE
            * (attributes.get("heat generation")
                - ship.cooling_efficiency()
                    * (attributes.get("cooling") + attributes.get("active cooling"))),
    });

    rows.push(RegimeRow {
        label: "moving:".to_string(),
        energy: -RATE_PER_MINUTE
            * (attributes
                .get("thrusting energy")
                .max(attributes.get("reverse thrusting energy"))
                + attributes.get("turning energy")
                + attributes.get("afterburner energy")),
        heat: RATE_PER_MINUTE
            * (attributes
                .get("thrusting heat")
                .max(attributes.get("reverse thrusting heat"))
                + attributes.get("turning heat")
                + attributes.get("afterburner heat")),
    });

    let (firing_energy, firing_heat) = firing_cost(ship);
    rows.push(RegimeRow {
        label: "firing:".to_string(),
        energy: -RATE_PER_MINUTE * firing_energy,
        heat: RATE_PER_MINUTE * firing_heat,
    });

    let shield_energy = attributes.get("shield energy");
    let hull_energy = attributes.get("hull energy");
    let label = if shield_energy != 0.0 && hull_energy != 0.0 {
        "shields / hull:"
    } else if hull_energy != 0.0 {
        "repairing hull:"
    } else {
        "charging shields:"
    };
    rows.push(RegimeRow {
        label: label.to_string(),
        energy: -RATE_PER_MINUTE * (shield_energy + hull_energy),
        heat: RATE_PER_MINUTE * (attributes.get("shield heat") + attributes.get("hull heat")),
    });

    rows.push(RegimeRow {
        label: "max:".to_string(),
        energy: attributes.get("energy capacity"),
        heat: RATE_PER_MINUTE * ship.heat_dissipation() * ship.maximum_heat(),
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::{Outfit, OutfitCategory, WeaponTraits};

    fn attributes(entries: &[(&str, f64)]) -> AttributeSet {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_max_speed() {
        let attrs = attributes(&[("thrust", 10.0), ("drag", 2.0)]);
        assert_eq!(max_speed(&attrs), 300.0);
    }

    #[test]
    fn test_afterburner_is_the_fallback_thrust() {
        let attrs = attributes(&[("afterburner thrust", 6.0), ("drag", 2.0)]);
        assert_eq!(max_speed(&attrs), 180.0);

        // primary thrust wins when both are present
        let both = attributes(&[("thrust", 10.0), ("afterburner thrust", 6.0), ("drag", 2.0)]);
        assert_eq!(max_speed(&both), 300.0);
    }

    #[test]
    fn test_zero_denominators_display_as_zero() {
        let no_drag = attributes(&[("thrust", 10.0)]);
        assert_eq!(max_speed(&no_drag), 0.0);
        assert_eq!(acceleration(&no_drag, 0.0), 0.0);
        assert_eq!(turning(&no_drag, 0.0), 0.0);
    }

    #[test]
    fn test_acceleration_and_turning_scale_with_mass() {
        let attrs = attributes(&[("thrust", 10.0), ("turn", 120.0)]);
        assert_eq!(acceleration(&attrs, 100.0), 360.0);
        assert_eq!(acceleration(&attrs, 200.0), 180.0);
        assert_eq!(turning(&attrs, 100.0), 72.0);
    }

    #[test]
    fn test_firing_cost_is_reload_normalized() {
        let mut ship = Ship::new("Corvette", AttributeSet::new());
        ship.install(
            Outfit::new("Blaster", OutfitCategory::Guns).with_weapon(WeaponTraits {
                firing_energy: 5.0,
                firing_heat: 2.0,
                reload: 10.0,
            }),
            2,
        );

        let (energy, heat) = firing_cost(&ship);
        assert_eq!(energy, 1.0);
        assert!((heat - 0.4).abs() < 1e-12);

        let rows = regime_rows(&ship);
        let firing = rows.iter().find(|r| r.label == "firing:").unwrap();
        assert_eq!(firing.energy, -60.0);
        assert!((firing.heat - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_reload_weapons_never_fire() {
        let mut ship = Ship::new("Corvette", AttributeSet::new());
        ship.install(
            Outfit::new("Prop", OutfitCategory::Guns).with_weapon(WeaponTraits {
                firing_energy: 5.0,
                firing_heat: 2.0,
                reload: 0.0,
            }),
            1,
        );
        assert_eq!(firing_cost(&ship), (0.0, 0.0));
    }

    #[test]
    fn test_idle_row_balances_generation_against_upkeep() {
        let mut base = AttributeSet::new();
        base.set("energy generation", 3.0);
        base.set("solar collection", 1.0);
        base.set("energy consumption", 0.5);
        base.set("cooling energy", 0.5);
        base.set("heat generation", 2.0);
        base.set("cooling", 1.0);
        base.set("active cooling", 1.0);
        let mut ship = Ship::new("Corvette", base);
        ship.set_cooling_efficiency(0.5);

        let rows = regime_rows(&ship);
        let idle = &rows[0];
        assert_eq!(idle.label, "idle:");
        assert_eq!(idle.energy, 180.0);
        assert_eq!(idle.heat, 60.0);
    }

    #[test]
    fn test_moving_row_takes_the_worse_of_forward_and_reverse() {
        let mut base = AttributeSet::new();
        base.set("thrusting energy", 2.0);
        base.set("reverse thrusting energy", 3.0);
        base.set("turning energy", 1.0);
        base.set("thrusting heat", 4.0);
        base.set("reverse thrusting heat", 1.0);
        let ship = Ship::new("Corvette", base);

        let rows = regime_rows(&ship);
        let moving = &rows[1];
        assert_eq!(moving.energy, -240.0);
        assert_eq!(moving.heat, 240.0);
    }

    #[test]
    fn test_regen_row_label_variants() {
        let shields_only = Ship::new(
            "A",
            attributes(&[("shield energy", 1.0)]),
        );
        assert_eq!(regime_rows(&shields_only)[3].label, "charging shields:");

        let hull_only = Ship::new("B", attributes(&[("hull energy", 1.0)]));
        assert_eq!(regime_rows(&hull_only)[3].label, "repairing hull:");

        let both = Ship::new(
            "C",
            attributes(&[("shield energy", 1.0), ("hull energy", 0.5)]),
        );
        let row = &regime_rows(&both)[3];
        assert_eq!(row.label, "shields / hull:");
        assert_eq!(row.energy, -90.0);

        let neither = Ship::new("D", AttributeSet::new());
        assert_eq!(regime_rows(&neither)[3].label, "charging shields:");
    }

    #[test]
    fn test_max_row_is_the_comparison_ceiling() {
        let mut base = AttributeSet::new();
        base.set("energy capacity", 1000.0);
        base.set("mass", 100.0);
        base.set("heat dissipation", 0.01);
        let ship = Ship::new("Corvette", base);

        let rows = regime_rows(&ship);
        let max = rows.last().unwrap();
        assert_eq!(max.label, "max:");
        // stored capacity is shown unconverted
        assert_eq!(max.energy, 1000.0);
        // 60 * 0.01 * (100 heat/ton * 100 tons)
        assert!((max.heat - 6000.0).abs() < 1e-6);
    }
}

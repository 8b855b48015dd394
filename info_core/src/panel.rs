//! The ship info panel: every list recomputed as a unit whenever the ship
//! changes

use crate::aggregate::AttributeTotals;
use crate::format::NumberFormat;
use crate::layout::{layout_constants, outfit_listing, sale_breakdown, InfoColumn};
use crate::metrics;
use crate::types::{DisplayLine, DisplayMode, EnergyHeatRow};
use crate::value::ShipValuation;
use fleet_core::{attribute, BayKind, Ship};
use serde::Serialize;
use tracing::debug;

/// Slot attributes shown as used/capacity pairs. A line is only emitted
/// when the aggregated capacity is positive; nobody cares about turret
/// mounts on a shuttle.
const SLOT_ATTRIBUTES: &[&str] = &[
    "minibays",
    "bays",
    "outfit space",
    "armory space",
    "weapon capacity",
    "engine capacity",
    "gun ports",
    "turret mounts",
];

/// Display-ready statistics for one ship
///
/// Holds three label/value columns (attributes, outfits, sale) and the
/// multi-column energy/heat table, each with its own running height. All of
/// it is rebuilt from scratch by `update`; the ship, valuation, and
/// formatter are borrowed only for the duration of the call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShipInfoPanel {
    attributes: InfoColumn,
    outfits: InfoColumn,
    sale: InfoColumn,
    energy_heat: Vec<EnergyHeatRow>,
    energy_heat_height: i32,
}

impl ShipInfoPanel {
    /// Build and immediately populate a panel
    pub fn new(
        ship: &Ship,
        valuation: &dyn ShipValuation,
        day: u32,
        format: &dyn NumberFormat,
    ) -> Self {
        let mut panel = ShipInfoPanel::default();
        panel.update(ship, valuation, day, format);
        panel
    }

    /// Recompute every list from scratch. Call this whenever the ship
    /// changes.
    pub fn update(
        &mut self,
        ship: &Ship,
        valuation: &dyn ShipValuation,
        day: u32,
        format: &dyn NumberFormat,
    ) {
        let totals = AttributeTotals::from_ship(ship);
        let mode = DisplayMode::resolve(ship);

        self.update_attributes(ship, &totals, mode, valuation, day, format);
        self.update_energy_heat(ship, format);
        self.outfits = outfit_listing(ship);
        self.sale = sale_breakdown(
            valuation.ship_value(ship, day),
            valuation.chassis_value(ship.model_name(), day),
            format,
        );

        debug!(
            ship = ship.name(),
            model = ship.model_name(),
            "rebuilt info panel"
        );
    }

    fn update_attributes(
        &mut self,
        ship: &Ship,
        totals: &AttributeTotals,
        mode: DisplayMode,
        valuation: &dyn ShipValuation,
        day: u32,
        format: &dyn NumberFormat,
    ) {
        let capacity = &totals.capacity;
        let used = &totals.used;
        let mut column = InfoColumn::new();

        let full_cost = ship.cost();
        let depreciated = valuation.ship_value(ship, day);
        if depreciated == full_cost || full_cost == 0 {
            column.push("cost:", format.credits(depreciated));
        } else {
            column.push(
                format!("cost ({}%):", (100 * depreciated) / full_cost),
                format.credits(depreciated),
            );
        }

        column.spacer();

        let shield_generation = capacity.get("shield generation");
        if shield_generation != 0.0 {
            column.push(
                "shields:",
                format!(
                    "{} ( {} )",
                    format.number(capacity.get("shields")),
                    format.number(metrics::RATE_PER_MINUTE * shield_generation)
                ),
            );
        } else {
            column.push("shields:", format.number(capacity.get("shields")));
        }

        let hull_repair = capacity.get("hull repair rate");
        if hull_repair != 0.0 {
            column.push(
                "hull:",
                format!(
                    "{} ( {} )",
                    format.number(capacity.get("hull")),
                    format.number(metrics::RATE_PER_MINUTE * hull_repair)
                ),
            );
        } else {
            column.push("hull:", format.number(capacity.get("hull")));
        }

        let empty_mass = ship.mass();
        column.push(
            if mode.is_template() {
                "mass with no cargo:"
            } else {
                "mass:"
            },
            format.number(empty_mass),
        );

        let cargo_space = used.get("cargo space");
        if mode.is_template() {
            column.push("cargo space:", format.number(cargo_space));
        } else {
            column.push(
                "cargo:",
                format!(
                    "{} / {}",
                    format.number(ship.cargo_used()),
                    format.number(cargo_space)
                ),
            );
        }

        column.push(
            "required crew / bunks:",
            format!(
                "{} / {}",
                format.number(ship.required_crew() as f64),
                format.number(used.get("bunks"))
            ),
        );

        let fuel_capacity = used.get("fuel capacity");
        if mode.is_template() {
            column.push("fuel capacity:", format.number(fuel_capacity));
        } else {
            column.push(
                "fuel:",
                format!(
                    "{} / {}",
                    format.number(ship.fuel() * fuel_capacity),
                    format.number(fuel_capacity)
                ),
            );
        }

        // Movement only distinguishes full from empty when there is cargo
        // capacity worth distinguishing.
        let full_mass = empty_mass
            + if mode.is_template() {
                cargo_space
            } else {
                ship.cargo_used()
            };
        let movement = if mode.is_template() && full_mass != empty_mass {
            DisplayMode::Template
        } else {
            DisplayMode::Active
        };

        column.spacer();
        column.push(
            if movement.is_template() {
                "movement, full / no cargo:"
            } else {
                "movement:"
            },
            "",
        );
        column.push("max speed:", format.number(metrics::max_speed(used)));

        if movement.is_template() {
            column.push(
                "acceleration:",
                format!(
                    "{} / {}",
                    format.number(metrics::acceleration(used, full_mass)),
                    format.number(metrics::acceleration(used, empty_mass))
                ),
            );
            column.push(
                "turning:",
                format!(
                    "{} / {}",
                    format.number(metrics::turning(used, full_mass)),
                    format.number(metrics::turning(used, empty_mass))
                ),
            );
        } else {
            column.push(
                "acceleration:",
                format.number(metrics::acceleration(used, full_mass)),
            );
            column.push("turning:", format.number(metrics::turning(used, full_mass)));
        }

        column.spacer();

        for &key in SLOT_ATTRIBUTES {
            let available = capacity.get(key);
            if available > 0.0 {
                let label = attribute::display_name(key).unwrap_or(key);
                column.push(
                    format!("{label}:"),
                    format!(
                        "{} / {}",
                        format.number(used.get(key)),
                        format.number(available)
                    ),
                );
            }
        }

        let free_drone_bays = ship.bays_free(BayKind::Drone);
        if free_drone_bays > 0 {
            column.push("drone bays:", free_drone_bays.to_string());
        }
        let free_fighter_bays = ship.bays_free(BayKind::Fighter);
        if free_fighter_bays > 0 {
            column.push("fighter bays:", free_fighter_bays.to_string());
        }

        // Budget for the energy/heat table header the renderer draws below
        // this column.
        column.reserve(layout_constants().table_header_reserve);

        self.attributes = column;
    }

    fn update_energy_heat(&mut self, ship: &Ship, format: &dyn NumberFormat) {
        let layout = layout_constants();
        self.energy_heat.clear();
        for row in metrics::regime_rows(ship) {
            self.energy_heat.push(EnergyHeatRow {
                label: row.label,
                energy: format.number(row.energy),
                heat: format.number(row.heat),
            });
        }
        // Rows plus a bottom pad; the header block is budgeted in the
        // attribute column.
        self.energy_heat_height =
            layout.line_height * self.energy_heat.len() as i32 + layout.spacer_height;
    }

    pub fn attribute_lines(&self) -> &[DisplayLine] {
        self.attributes.lines()
    }

    pub fn attributes_height(&self) -> i32 {
        self.attributes.height()
    }

    pub fn outfit_lines(&self) -> &[DisplayLine] {
        self.outfits.lines()
    }

    pub fn outfits_height(&self) -> i32 {
        self.outfits.height()
    }

    pub fn sale_lines(&self) -> &[DisplayLine] {
        self.sale.lines()
    }

    pub fn sale_height(&self) -> i32 {
        self.sale.height()
    }

    pub fn energy_heat_rows(&self) -> &[EnergyHeatRow] {
        &self.energy_heat
    }

    pub fn energy_heat_height(&self) -> i32 {
        self.energy_heat_height
    }

    /// Overall panel height, given the height of the externally owned
    /// description block
    pub fn panel_height(&self, description_height: i32) -> i32 {
        description_height
            .max(self.attributes.height())
            .max(self.outfits.height())
    }

    /// Serialize the computed panel for an external renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

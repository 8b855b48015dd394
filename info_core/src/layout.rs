//! Layout accumulation: line lists with running height totals
//!
//! Columns track their own cumulative height as lines are appended, so the
//! table-drawing renderer can place variable-length content in one pass.

use crate::config::{constants, ensure_constants_initialized, LayoutConstants};
use crate::format::NumberFormat;
use crate::types::DisplayLine;
use fleet_core::{OutfitCategory, Ship};
use serde::Serialize;
use std::collections::BTreeMap;

pub(crate) fn layout_constants() -> &'static LayoutConstants {
    ensure_constants_initialized();
    &constants().layout
}

/// A list of display lines with its cumulative layout height
#[derive(Debug, Clone, Default, Serialize)]
pub struct InfoColumn {
    lines: Vec<DisplayLine>,
    height: i32,
}

impl InfoColumn {
    /// Empty column, height seeded at the top margin
    pub fn new() -> Self {
        InfoColumn {
            lines: Vec::new(),
            height: layout_constants().top_margin,
        }
    }

    /// Append a label/value line
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(DisplayLine::new(label, value));
        self.height += layout_constants().line_height;
    }

    /// Append a blank spacer line
    pub fn spacer(&mut self) {
        self.lines.push(DisplayLine::spacer());
        self.height += layout_constants().spacer_height;
    }

    /// Reserve vertical space for content the renderer draws itself
    pub fn reserve(&mut self, amount: i32) {
        self.height += amount;
    }

    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Installed outfits grouped by category, then by name, counts summed for
/// outfits of the same name
pub fn group_outfits(ship: &Ship) -> BTreeMap<OutfitCategory, BTreeMap<String, u32>> {
    let mut listing: BTreeMap<OutfitCategory, BTreeMap<String, u32>> = BTreeMap::new();
    for stack in ship.outfits() {
        *listing
            .entry(stack.outfit.category)
            .or_default()
            .entry(stack.outfit.name.clone())
            .or_default() += stack.count;
    }
    listing
}

/// Emit the grouped outfit listing into a column: a header line per
/// category with one name/count line per outfit, and a spacer before every
/// category except the first
pub fn outfit_listing(ship: &Ship) -> InfoColumn {
    let mut column = InfoColumn::new();
    for (index, (category, members)) in group_outfits(ship).iter().enumerate() {
        if index > 0 {
            column.spacer();
        }
        column.push(format!("{category}:"), "");
        for (name, count) in members {
            column.push(name.clone(), count.to_string());
        }
    }
    column
}

/// Sale breakdown: header, bare-hull value, and what the outfits add on top
/// (which may be negative; that is the caller's data to worry about)
pub fn sale_breakdown(total: i64, chassis: i64, format: &dyn NumberFormat) -> InfoColumn {
    let mut column = InfoColumn::new();
    column.push("This ship will sell for:", "");
    column.push("empty hull:", format.credits(chassis));
    column.push("  + outfits:", format.credits(total - chassis));
    column
}

//! Outfit definitions - installable components that grant or draw ship attributes

use crate::attribute::AttributeSet;
use crate::types::{AttributeKind, OutfitCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weapon firing characteristics
///
/// `firing_energy` and `firing_heat` are the per-shot costs; `reload` is the
/// number of ticks between shots, so the sustained per-tick cost is
/// `firing / reload`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponTraits {
    #[serde(default)]
    pub firing_energy: f64,
    #[serde(default)]
    pub firing_heat: f64,
    #[serde(default)]
    pub reload: f64,
}

/// An installable component contributing or consuming ship attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub name: String,
    pub category: OutfitCategory,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub attributes: AttributeSet,
    /// Declared grant/draw classification per key. Keys absent here fall
    /// back to the sign of the value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub declared_kinds: BTreeMap<String, AttributeKind>,
    #[serde(default)]
    pub weapon: Option<WeaponTraits>,
}

impl Outfit {
    /// Create a bare outfit with no attributes
    pub fn new(name: impl Into<String>, category: OutfitCategory) -> Self {
        Outfit {
            name: name.into(),
            category,
            cost: 0,
            attributes: AttributeSet::new(),
            declared_kinds: BTreeMap::new(),
            weapon: None,
        }
    }

    /// Set an attribute value (builder style)
    pub fn with_attribute(mut self, key: impl Into<String>, value: f64) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Declare an explicit grant/draw kind for a key (builder style)
    pub fn with_declared_kind(mut self, key: impl Into<String>, kind: AttributeKind) -> Self {
        self.declared_kinds.insert(key.into(), kind);
        self
    }

    /// Set the purchase cost (builder style)
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Attach weapon firing characteristics (builder style)
    pub fn with_weapon(mut self, weapon: WeaponTraits) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Get an attribute value, zero if absent
    pub fn get(&self, key: &str) -> f64 {
        self.attributes.get(key)
    }

    /// Classification of one attribute entry: a declared kind wins, otherwise
    /// negative values draw and everything else grants.
    pub fn attribute_kind(&self, key: &str) -> AttributeKind {
        if let Some(kind) = self.declared_kinds.get(key) {
            *kind
        } else if self.get(key) < 0.0 {
            AttributeKind::Cost
        } else {
            AttributeKind::Capacity
        }
    }

    /// Whether this outfit fires as a weapon
    pub fn is_weapon(&self) -> bool {
        self.weapon.is_some()
    }

    /// Ticks between shots, zero for non-weapons
    pub fn reload(&self) -> f64 {
        self.weapon.map(|w| w.reload).unwrap_or(0.0)
    }

    /// Energy cost per shot, zero for non-weapons
    pub fn firing_energy(&self) -> f64 {
        self.weapon.map(|w| w.firing_energy).unwrap_or(0.0)
    }

    /// Heat generated per shot, zero for non-weapons
    pub fn firing_heat(&self) -> f64 {
        self.weapon.map(|w| w.firing_heat).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_kind_follows_sign_by_default() {
        let outfit = Outfit::new("Fuel Pod", OutfitCategory::Systems)
            .with_attribute("fuel capacity", 100.0)
            .with_attribute("outfit space", -8.0);
        assert_eq!(outfit.attribute_kind("fuel capacity"), AttributeKind::Capacity);
        assert_eq!(outfit.attribute_kind("outfit space"), AttributeKind::Cost);
    }

    #[test]
    fn test_declared_kind_overrides_sign() {
        let outfit = Outfit::new("Ballast", OutfitCategory::Special)
            .with_attribute("shields", -50.0)
            .with_declared_kind("shields", AttributeKind::Capacity);
        assert_eq!(outfit.attribute_kind("shields"), AttributeKind::Capacity);
    }

    #[test]
    fn test_weapon_accessors_default_to_zero() {
        let outfit = Outfit::new("Cooling Ducts", OutfitCategory::Systems);
        assert!(!outfit.is_weapon());
        assert_eq!(outfit.reload(), 0.0);
        assert_eq!(outfit.firing_energy(), 0.0);

        let weapon = Outfit::new("Blaster", OutfitCategory::Guns).with_weapon(WeaponTraits {
            firing_energy: 5.0,
            firing_heat: 2.0,
            reload: 10.0,
        });
        assert!(weapon.is_weapon());
        assert_eq!(weapon.firing_heat(), 2.0);
    }

    #[test]
    fn test_serialize_round_trip() {
        let outfit = Outfit::new("Laser", OutfitCategory::Guns)
            .with_cost(36_000)
            .with_attribute("weapon capacity", -12.0)
            .with_weapon(WeaponTraits {
                firing_energy: 1.2,
                firing_heat: 1.7,
                reload: 0.5,
            });
        let json = serde_json::to_string(&outfit).unwrap();
        let back: Outfit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Laser");
        assert_eq!(back.get("weapon capacity"), -12.0);
        assert_eq!(back.reload(), 0.5);
    }
}

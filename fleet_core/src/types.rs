use serde::{Deserialize, Serialize};
use std::fmt;

/// Outfit categories, in the order they appear in an outfit listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitCategory {
    Guns,
    Turrets,
    SecondaryWeapons,
    Ammunition,
    Systems,
    Power,
    Engines,
    HandToHand,
    Special,
}

impl OutfitCategory {
    /// Get all categories in listing order
    pub fn all() -> &'static [OutfitCategory] {
        &[
            OutfitCategory::Guns,
            OutfitCategory::Turrets,
            OutfitCategory::SecondaryWeapons,
            OutfitCategory::Ammunition,
            OutfitCategory::Systems,
            OutfitCategory::Power,
            OutfitCategory::Engines,
            OutfitCategory::HandToHand,
            OutfitCategory::Special,
        ]
    }

    /// Whether outfits in this category occupy a weapon mount
    pub fn is_weapon_mount(&self) -> bool {
        matches!(
            self,
            OutfitCategory::Guns | OutfitCategory::Turrets | OutfitCategory::SecondaryWeapons
        )
    }
}

impl fmt::Display for OutfitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutfitCategory::Guns => write!(f, "Guns"),
            OutfitCategory::Turrets => write!(f, "Turrets"),
            OutfitCategory::SecondaryWeapons => write!(f, "Secondary Weapons"),
            OutfitCategory::Ammunition => write!(f, "Ammunition"),
            OutfitCategory::Systems => write!(f, "Systems"),
            OutfitCategory::Power => write!(f, "Power"),
            OutfitCategory::Engines => write!(f, "Engines"),
            OutfitCategory::HandToHand => write!(f, "Hand to Hand"),
            OutfitCategory::Special => write!(f, "Special"),
        }
    }
}

/// Carried-craft bay types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BayKind {
    Drone,
    Fighter,
}

impl fmt::Display for BayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BayKind::Drone => write!(f, "drone"),
            BayKind::Fighter => write!(f, "fighter"),
        }
    }
}

/// Whether an outfit attribute entry grants capacity or draws on it
///
/// Capacity entries count toward a ship's displayed totals; cost entries
/// only reduce what is left for other outfits. Unless a definition declares
/// a kind explicitly, the sign of the value decides: non-negative grants,
/// negative draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    #[default]
    Capacity,
    Cost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_matches_listing_order() {
        let all = OutfitCategory::all();
        let mut sorted = all.to_vec();
        sorted.sort();
        assert_eq!(all, sorted.as_slice());
        assert!(OutfitCategory::Guns < OutfitCategory::Special);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(OutfitCategory::SecondaryWeapons.to_string(), "Secondary Weapons");
        assert_eq!(OutfitCategory::HandToHand.to_string(), "Hand to Hand");
    }

    #[test]
    fn test_weapon_mount_categories() {
        assert!(OutfitCategory::Guns.is_weapon_mount());
        assert!(OutfitCategory::Turrets.is_weapon_mount());
        assert!(!OutfitCategory::Power.is_weapon_mount());
    }
}

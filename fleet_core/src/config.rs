//! TOML/JSON-backed outfit and ship-template definitions

use crate::attribute::AttributeSet;
use crate::outfit::{Outfit, WeaponTraits};
use crate::ship::Ship;
use crate::types::{AttributeKind, BayKind, OutfitCategory};
use crate::{BuildError, ConfigError};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

/// Definition file: any mix of outfits and ship templates
#[derive(Debug, Default, Deserialize)]
pub struct DefinitionFileConfig {
    #[serde(default)]
    pub outfits: Vec<OutfitConfig>,
    #[serde(default)]
    pub ships: Vec<ShipConfig>,
}

/// Configuration for a single outfit
#[derive(Debug, Deserialize)]
pub struct OutfitConfig {
    pub name: String,
    pub category: OutfitCategory,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub attributes: BTreeMap<String, f64>,
    /// Explicit grant/draw declarations; unlisted keys follow the sign
    #[serde(default)]
    pub attribute_kinds: BTreeMap<String, AttributeKind>,
    #[serde(default)]
    pub weapon: Option<WeaponConfig>,
}

/// Weapon block on an outfit definition
#[derive(Debug, Deserialize)]
pub struct WeaponConfig {
    #[serde(default)]
    pub firing_energy: f64,
    #[serde(default)]
    pub firing_heat: f64,
    #[serde(default)]
    pub reload: f64,
}

/// Configuration for a ship template
#[derive(Debug, Deserialize)]
pub struct ShipConfig {
    pub model: String,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub attributes: BTreeMap<String, f64>,
    #[serde(default)]
    pub outfits: Vec<OutfitRefConfig>,
    #[serde(default)]
    pub drone_bays: u32,
    #[serde(default)]
    pub fighter_bays: u32,
}

/// Reference from a ship template to an outfit by name
#[derive(Debug, Deserialize)]
pub struct OutfitRefConfig {
    pub name: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl OutfitConfig {
    fn build(self) -> Outfit {
        Outfit {
            name: self.name,
            category: self.category,
            cost: self.cost,
            attributes: self.attributes.into_iter().collect(),
            declared_kinds: self.attribute_kinds,
            weapon: self.weapon.map(|w| WeaponTraits {
                firing_energy: w.firing_energy,
                firing_heat: w.firing_heat,
                reload: w.reload,
            }),
        }
    }
}

/// Registry of outfits and ship templates, loaded from definition files
#[derive(Debug, Default)]
pub struct ShipyardRegistry {
    outfits: HashMap<String, Outfit>,
    templates: HashMap<String, ShipConfig>,
}

impl ShipyardRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all definitions from a directory (recursively). Both `.toml`
    /// and `.json` files are accepted; other files are skipped.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.load_dir(dir)?;
        Ok(registry)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml" || ext == "json") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: DefinitionFileConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Json {
                error: e,
                path: path.to_path_buf(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?
        };

        debug!(
            path = %path.display(),
            outfits = config.outfits.len(),
            ships = config.ships.len(),
            "loaded definitions"
        );

        for outfit in config.outfits {
            self.register_outfit(outfit.build());
        }
        for ship in config.ships {
            self.templates.insert(ship.model.clone(), ship);
        }
        Ok(())
    }

    /// Add an outfit directly, replacing any previous definition of the name
    pub fn register_outfit(&mut self, outfit: Outfit) {
        self.outfits.insert(outfit.name.clone(), outfit);
    }

    /// Get an outfit definition by name
    pub fn outfit(&self, name: &str) -> Option<&Outfit> {
        self.outfits.get(name)
    }

    /// List all outfit names
    pub fn outfit_names(&self) -> impl Iterator<Item = &str> {
        self.outfits.keys().map(|s| s.as_str())
    }

    /// Whether a ship template exists for the model
    pub fn has_model(&self, model: &str) -> bool {
        self.templates.contains_key(model)
    }

    /// Build an unnamed ship from a template, installing its outfits.
    /// Outfit references are resolved here because definitions may span
    /// multiple files loaded in any order.
    pub fn build_ship(&self, model: &str) -> Result<Ship, BuildError> {
        let template = self
            .templates
            .get(model)
            .ok_or_else(|| BuildError::UnknownModel(model.to_string()))?;

        let base: AttributeSet = template
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        let mut ship = Ship::new(&template.model, base);
        ship.set_chassis_cost(template.cost);
        for _ in 0..template.drone_bays {
            ship.add_bay(BayKind::Drone);
        }
        for _ in 0..template.fighter_bays {
            ship.add_bay(BayKind::Fighter);
        }

        for reference in &template.outfits {
            let outfit = self
                .outfit(&reference.name)
                .ok_or_else(|| BuildError::UnknownOutfit {
                    model: model.to_string(),
                    outfit: reference.name.clone(),
                })?;
            ship.install(outfit.clone(), reference.count);
        }

        Ok(ship)
    }
}

//! Attribute maps and display-name lookup

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named numeric attribute map
///
/// Keys are free-form attribute names ("shields", "cargo space", ...).
/// Reading a missing key yields zero, and keys are never removed once
/// present; aggregation is purely additive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: BTreeMap<String, f64>,
}

impl AttributeSet {
    /// Create an empty attribute set
    pub fn new() -> Self {
        AttributeSet::default()
    }

    /// Get an attribute value, zero if absent
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Set an attribute to an exact value
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Add to an attribute, inserting the key if absent
    pub fn add(&mut self, key: &str, amount: f64) {
        *self.values.entry(key.to_string()).or_insert(0.0) += amount;
    }

    /// Whether the key is present at all
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, f64)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        AttributeSet {
            values: iter.into_iter().collect(),
        }
    }
}

/// Human-readable label for a slot attribute key shown as a used/capacity
/// pair. Returns `None` for keys that have no fixed display label.
pub fn display_name(key: &str) -> Option<&'static str> {
    Some(match key {
        "minibays" => "mini bays",
        "bays" => "bays",
        "outfit space" => "outfit space",
        "armory space" => "armory space",
        "weapon capacity" => "weapon capacity",
        "engine capacity" => "engine capacity",
        "gun ports" => "gun ports",
        "turret mounts" => "turret mounts",
        "bunks" => "bunks",
        "cargo space" => "cargo space",
        "fuel capacity" => "fuel capacity",
        _ => return None,
    })
}

//! Dungeon damage tables.
//!
//! The table asset maps dungeon name to floor name to that floor's enemy
//! damage ratios. Ratios arrive either as an array of numbers or as a
//! comma-separated percentage string; both normalize to `Vec<f64>`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::numbers::parse_ratio;

/// Damage ratios for one floor, in either asset shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DamageSpec {
    Ratios(Vec<f64>),
    Csv(String),
}

impl DamageSpec {
    /// Normalize to a list of finite ratios, dropping unparsable entries.
    #[must_use]
    pub fn ratios(&self) -> Vec<f64> {
        match self {
            Self::Ratios(values) => values.iter().copied().filter(|v| v.is_finite()).collect(),
            Self::Csv(text) => text.split(',').filter_map(parse_ratio).collect(),
        }
    }
}

/// The full dungeon table, loaded once per session and read-only after.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DungeonTable(BTreeMap<String, BTreeMap<String, DamageSpec>>);

impl DungeonTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dungeon names for the selection list.
    #[must_use]
    pub fn dungeon_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Floor names for the selected dungeon; empty for an unknown dungeon.
    #[must_use]
    pub fn floor_names(&self, dungeon: &str) -> Vec<&str> {
        self.0
            .get(dungeon)
            .map(|floors| floors.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, dungeon: &str, floor: &str) -> Option<&DamageSpec> {
        self.0.get(dungeon).and_then(|floors| floors.get(floor))
    }
}

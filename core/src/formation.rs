//! Formation catalog: formation name → ordered slot labels.

use crate::error::{ManagerError, ManagerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_FORMATION: &str = "4-3-3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub name:  String,
    pub slots: Vec<String>,
}

/// Base position of a slot: "CB1" → "CB", "ST" → "ST".
pub fn slot_base(slot: &str) -> &str {
    slot.trim_end_matches(|c: char| c.is_ascii_digit())
}

#[derive(Debug, Clone, Deserialize)]
struct FormationsFile {
    #[serde(default = "default_formation_name")]
    default: String,
    formations: Vec<Formation>,
}

fn default_formation_name() -> String {
    DEFAULT_FORMATION.to_string()
}

/// Fixed, not user-editable. Display order is catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationCatalog {
    formations: Vec<Formation>,
    default:    String,
}

impl FormationCatalog {
    /// Build a catalog, rejecting duplicate slot labels within a formation
    /// and a default that is not in the list.
    pub fn new(formations: Vec<Formation>, default: &str) -> ManagerResult<Self> {
        for formation in &formations {
            let mut seen = HashSet::new();
            for slot in &formation.slots {
                if !seen.insert(slot.as_str()) {
                    return Err(ManagerError::DuplicateSlot {
                        formation: formation.name.clone(),
                        slot:      slot.clone(),
                    });
                }
            }
        }
        if !formations.iter().any(|f| f.name == default) {
            return Err(ManagerError::UnknownFormation { name: default.to_string() });
        }
        Ok(Self { formations, default: default.to_string() })
    }

    pub fn from_json(content: &str) -> ManagerResult<Self> {
        let file: FormationsFile = serde_json::from_str(content)?;
        Self::new(file.formations, &file.default)
    }

    pub fn get(&self, name: &str) -> Option<&Formation> {
        self.formations.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formations.iter().map(|f| f.name.as_str())
    }

    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    pub fn default_formation(&self) -> &str {
        &self.default
    }
}

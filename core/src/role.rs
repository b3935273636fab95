//! Recommended role for a formation slot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Goalkeeper,
    CentralDefender,
    Fullback,
    DefensiveMidfielder,
    CentralMidfielder,
    AttackingMidfielder,
    Winger,
    Forward,
    Player,
}

impl Role {
    /// Label shown in the team table.
    pub fn label(self) -> &'static str {
        match self {
            Role::Goalkeeper          => "Gardien de but",
            Role::CentralDefender     => "Défenseur central",
            Role::Fullback            => "Latéral",
            Role::DefensiveMidfielder => "Milieu défensif",
            Role::CentralMidfielder   => "Milieu central",
            Role::AttackingMidfielder => "Milieu offensif",
            Role::Winger              => "Ailier",
            Role::Forward             => "Attaquant",
            Role::Player              => "Joueur",
        }
    }
}

const FULLBACKS: &[&str] = &["RB", "LB", "RWB", "LWB"];
const DEFENSIVE_MIDS: &[&str] = &["CDM", "RDM", "LDM"];
const CENTRAL_MIDS: &[&str] = &["CM", "CM1", "CM2", "CM3", "RCM", "LCM"];
const ATTACKING_MIDS: &[&str] = &["CAM", "LAM", "RAM"];
// RWB and LWB never reach this list: FULLBACKS is checked first.
const WINGERS: &[&str] = &["RM", "LM", "RW", "LW", "RWB", "LWB"];
const FORWARDS: &[&str] = &["CF", "LS", "RS"];

/// Classify a slot label, case-insensitively. First matching rule wins.
pub fn recommended_role(slot: &str) -> Role {
    let slot = slot.to_uppercase();
    let s = slot.as_str();
    if s == "GK" {
        Role::Goalkeeper
    } else if s.starts_with("CB") {
        Role::CentralDefender
    } else if FULLBACKS.contains(&s) {
        Role::Fullback
    } else if DEFENSIVE_MIDS.contains(&s) {
        Role::DefensiveMidfielder
    } else if CENTRAL_MIDS.contains(&s) {
        Role::CentralMidfielder
    } else if ATTACKING_MIDS.contains(&s) {
        Role::AttackingMidfielder
    } else if WINGERS.contains(&s) {
        Role::Winger
    } else if s.starts_with("ST") || FORWARDS.contains(&s) {
        Role::Forward
    } else {
        Role::Player
    }
}

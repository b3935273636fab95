//! Team builder page: pick a formation and assign a player to each slot.
//!
//! Assignments are keyed by slot label and persisted under `team` after
//! every change. Changing formation wipes every assignment.

use crate::{
    config::ManagerConfig,
    error::{ManagerError, ManagerResult},
    format::parse_int,
    formation::{slot_base, Formation},
    role::{recommended_role, Role},
    roster::{by_rating_then_name, Player, Roster},
    store::{keys, LocalStorage, StorageExt},
    types::{PlayerId, SlotLabel},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const EMPTY_CHOICE_LABEL: &str = "-- Choisir --";

/// Persisted under `team`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    pub formation: String,
    #[serde(default)]
    pub players:   BTreeMap<SlotLabel, PlayerId>,
}

impl TeamState {
    pub fn with_formation(formation: &str) -> Self {
        Self { formation: formation.to_string(), players: BTreeMap::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormationOption {
    pub name:     String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerOption {
    pub player_id: PlayerId,
    pub label:     String,
}

impl PlayerOption {
    fn for_slot(player: &Player) -> Self {
        Self {
            player_id: player.player_id,
            label:     format!("{} ({}) - {}", player.name, player.positions, player.overall),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRow {
    pub slot:       SlotLabel,
    pub options:    Vec<PlayerOption>,
    /// Persisted choice, if it is one of `options`.
    pub selected:   Option<PlayerId>,
    pub role:       Role,
    pub role_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPage {
    pub formations:   Vec<FormationOption>,
    pub empty_choice: &'static str,
    pub rows:         Vec<SlotRow>,
}

/// Players who can play `slot`'s base position, or the whole roster when
/// nobody can. Sorted by rating, then name.
pub fn candidates_for_slot<'r>(roster: &'r Roster, slot: &str) -> Vec<&'r Player> {
    let base = slot_base(slot);
    let mut eligible: Vec<&Player> = roster
        .players()
        .iter()
        .filter(|p| p.can_play(base))
        .collect();
    if eligible.is_empty() {
        eligible = roster.players().iter().collect();
    }
    eligible.sort_by(|a, b| by_rating_then_name(a, b));
    eligible
}

/// One row per slot of `formation`, in formation order.
pub fn render_slot_table(
    formation: &Formation,
    roster: &Roster,
    assignments: &BTreeMap<SlotLabel, PlayerId>,
) -> Vec<SlotRow> {
    formation
        .slots
        .iter()
        .map(|slot| {
            let options: Vec<PlayerOption> = candidates_for_slot(roster, slot)
                .into_iter()
                .map(PlayerOption::for_slot)
                .collect();
            let selected = assignments
                .get(slot)
                .copied()
                .filter(|id| options.iter().any(|o| o.player_id == *id));
            let role = recommended_role(slot);
            SlotRow {
                slot: slot.clone(),
                options,
                selected,
                role,
                role_label: role.label(),
            }
        })
        .collect()
}

pub struct TeamBuilderView<'a> {
    config:  &'a ManagerConfig,
    storage: &'a dyn LocalStorage,
    state:   TeamState,
}

impl<'a> TeamBuilderView<'a> {
    pub fn new(config: &'a ManagerConfig, storage: &'a dyn LocalStorage) -> Self {
        let default_formation = config.formations.default_formation();
        let mut state = storage.read(keys::TEAM, TeamState::with_formation(default_formation));
        if !config.formations.contains(&state.formation) {
            log::warn!(
                "Stored formation '{}' is not in the catalog, resetting team",
                state.formation
            );
            state = TeamState::with_formation(default_formation);
        }
        Self { config, storage, state }
    }

    pub fn state(&self) -> &TeamState {
        &self.state
    }

    pub fn formation(&self) -> &Formation {
        // The constructor and select_formation only ever store catalog names.
        match self.config.formations.get(&self.state.formation) {
            Some(f) => f,
            None => unreachable!("team formation '{}' left the catalog", self.state.formation),
        }
    }

    pub fn formation_options(&self) -> Vec<FormationOption> {
        self.config
            .formations
            .names()
            .map(|name| FormationOption {
                name:     name.to_string(),
                selected: name == self.state.formation,
            })
            .collect()
    }

    pub fn render_table(&self) -> Vec<SlotRow> {
        render_slot_table(self.formation(), &self.config.roster, &self.state.players)
    }

    pub fn render(&self) -> TeamPage {
        TeamPage {
            formations:   self.formation_options(),
            empty_choice: EMPTY_CHOICE_LABEL,
            rows:         self.render_table(),
        }
    }

    /// Switch formation. All assignments are cleared, even when the
    /// formation is unchanged.
    pub fn select_formation(&mut self, name: &str) -> ManagerResult<Vec<SlotRow>> {
        if !self.config.formations.contains(name) {
            return Err(ManagerError::UnknownFormation { name: name.to_string() });
        }
        self.state = TeamState::with_formation(name);
        self.storage.write(keys::TEAM, &self.state)?;
        log::debug!("Formation set to {name}, assignments cleared");
        Ok(self.render_table())
    }

    /// Apply a slot selector change. A non-empty integer value assigns that
    /// player; anything else clears the slot. Slots outside the active
    /// formation are ignored.
    pub fn assign(&mut self, slot: &str, value: &str) -> ManagerResult<()> {
        if !self.formation().slots.iter().any(|s| s == slot) {
            log::warn!("Ignoring assignment to unknown slot '{slot}'");
            return Ok(());
        }
        match parse_int(value) {
            Some(player_id) => {
                self.state.players.insert(slot.to_string(), player_id);
            }
            None => {
                self.state.players.remove(slot);
            }
        }
        self.storage.write(keys::TEAM, &self.state)?;
        log::debug!("Slot {slot} <- {value:?}");
        Ok(())
    }
}

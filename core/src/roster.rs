//! The player roster: a fixed list of player records loaded from a data
//! asset and decorated with each player's eligible position tokens.

use crate::{
    format::compare_names,
    types::{Amount, PlayerId},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name:      String,
    /// Comma-joined position string as published, e.g. "ST,LW,LM".
    pub positions: String,
    /// Derived from `positions` when the roster is built.
    #[serde(skip)]
    pub positions_list: Vec<String>,
    pub overall:   u8,
    pub potential: u8,
    pub value:     Amount,
    pub club:      String,
    pub country:   String,
}

impl Player {
    pub fn can_play(&self, position: &str) -> bool {
        self.positions_list.iter().any(|p| p == position)
    }

    fn decorate(mut self) -> Self {
        self.positions_list = self
            .positions
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();
        self
    }
}

/// Overall rating descending, then name ascending.
pub fn by_rating_then_name(a: &Player, b: &Player) -> Ordering {
    b.overall
        .cmp(&a.overall)
        .then_with(|| compare_names(&a.name, &b.name))
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RosterFile {
    players: Vec<Player>,
}

/// Immutable for the session once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: players.into_iter().map(Player::decorate).collect(),
        }
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let file: RosterFile = serde_json::from_str(content)?;
        Ok(Self::new(file.players))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// Every position token used by at least one player, sorted.
    pub fn distinct_positions(&self) -> Vec<String> {
        self.players
            .iter()
            .flat_map(|p| p.positions_list.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

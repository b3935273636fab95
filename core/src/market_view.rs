//! Transfer market page: searchable roster with a buy action.
//!
//! Buying only appends a purchase to the ledger. There is no
//! affordability check; the budget page derives the balance.

use crate::{
    config::ManagerConfig,
    error::ManagerResult,
    format::format_amount,
    ledger::Transaction,
    roster::{by_rating_then_name, Player, Roster},
    store::{keys, LocalStorage, StorageExt},
    types::{Amount, PlayerId},
};
use serde::{Deserialize, Serialize};

pub const NO_MATCH_MESSAGE: &str = "Aucun joueur correspondant.";

/// Current state of the search box and position filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketFilter {
    #[serde(default)]
    pub query:    String,
    /// Empty means any position.
    #[serde(default)]
    pub position: String,
}

impl MarketFilter {
    pub fn new(query: impl Into<String>, position: impl Into<String>) -> Self {
        Self { query: query.into(), position: position.into() }
    }

    fn matches(&self, query: &str, player: &Player) -> bool {
        let text_ok = query.is_empty()
            || player.name.to_lowercase().contains(query)
            || player.club.to_lowercase().contains(query);
        let position_ok = self.position.is_empty() || player.can_play(&self.position);
        text_ok && position_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketRow {
    pub player_id: PlayerId,
    pub name:      String,
    pub positions: String,
    pub overall:   u8,
    pub potential: u8,
    pub club:      String,
    pub value:     String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarketTable {
    Empty { message: &'static str },
    Rows { rows: Vec<MarketRow> },
}

impl MarketTable {
    pub fn rows(&self) -> &[MarketRow] {
        match self {
            MarketTable::Empty { .. } => &[],
            MarketTable::Rows { rows } => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketPage {
    pub positions: Vec<String>,
    pub filter:    MarketFilter,
    pub players:   MarketTable,
}

/// The confirmation shown after a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub transaction: Transaction,
    pub message:     String,
}

/// Players matching `filter`, best rated first.
pub fn search<'r>(roster: &'r Roster, filter: &MarketFilter) -> Vec<&'r Player> {
    let query = filter.query.trim().to_lowercase();
    let mut found: Vec<&Player> = roster
        .players()
        .iter()
        .filter(|p| filter.matches(&query, p))
        .collect();
    found.sort_by(|a, b| by_rating_then_name(a, b));
    found
}

pub fn render_market_table(roster: &Roster, filter: &MarketFilter) -> MarketTable {
    let found = search(roster, filter);
    if found.is_empty() {
        return MarketTable::Empty { message: NO_MATCH_MESSAGE };
    }
    let rows = found
        .into_iter()
        .map(|p| MarketRow {
            player_id: p.player_id,
            name:      p.name.clone(),
            positions: p.positions.clone(),
            overall:   p.overall,
            potential: p.potential,
            club:      p.club.clone(),
            value:     format_amount(p.value),
        })
        .collect();
    MarketTable::Rows { rows }
}

pub struct TransferMarketView<'a> {
    config:         &'a ManagerConfig,
    storage:        &'a dyn LocalStorage,
    transactions:   Vec<Transaction>,
    // Loaded alongside the ledger; this page never displays it.
    initial_budget: Amount,
    filter:         MarketFilter,
}

impl<'a> TransferMarketView<'a> {
    pub fn new(config: &'a ManagerConfig, storage: &'a dyn LocalStorage) -> Self {
        Self {
            config,
            storage,
            transactions:   storage.read(keys::TRANSACTIONS, Vec::new()),
            initial_budget: storage.read(keys::INITIAL_BUDGET, 0),
            filter:         MarketFilter::default(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn initial_budget(&self) -> Amount {
        self.initial_budget
    }

    pub fn filter(&self) -> &MarketFilter {
        &self.filter
    }

    pub fn position_options(&self) -> Vec<String> {
        self.config.roster.distinct_positions()
    }

    /// Replace the search criteria and return the refreshed list.
    pub fn set_filter(&mut self, filter: MarketFilter) -> MarketTable {
        self.filter = filter;
        render_market_table(&self.config.roster, &self.filter)
    }

    pub fn render(&self) -> MarketPage {
        MarketPage {
            positions: self.position_options(),
            filter:    self.filter.clone(),
            players:   render_market_table(&self.config.roster, &self.filter),
        }
    }

    /// Buy a player at their listed value. `None` if the id is not on the
    /// roster.
    pub fn buy(&mut self, player_id: PlayerId) -> ManagerResult<Option<PurchaseReceipt>> {
        let Some(player) = self.config.roster.find(player_id) else {
            log::warn!("Buy requested for unknown player {player_id}");
            return Ok(None);
        };
        let transaction = Transaction::purchase(player.player_id, player.name.clone(), player.value);
        self.transactions.push(transaction.clone());
        self.storage.write(keys::TRANSACTIONS, &self.transactions)?;
        log::debug!("Bought {} for {}", player.name, player.value);
        Ok(Some(PurchaseReceipt {
            message: format!(
                "Vous avez acheté {} pour {} €.",
                player.name,
                format_amount(player.value)
            ),
            transaction,
        }))
    }
}

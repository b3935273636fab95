//! Budget page: initial budget, manual transactions, derived balance.

use crate::{
    config::ManagerConfig,
    error::ManagerResult,
    format::{format_amount, parse_int},
    ledger::{compute_balance, Transaction, TransactionKind},
    store::{keys, LocalStorage, StorageExt},
    types::{Amount, PlayerId},
};
use serde::Serialize;

pub const UNKNOWN_PLAYER_NAME: &str = "Inconnu";
pub const NO_TRANSACTIONS_MESSAGE: &str = "Aucune transaction enregistrée.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerChoice {
    pub player_id: PlayerId,
    pub label:     String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    /// 1-based.
    pub index:       usize,
    pub player_name: String,
    pub kind_label:  &'static str,
    pub price:       String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionTable {
    Empty { message: &'static str },
    Rows { rows: Vec<TransactionRow> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetPage {
    pub players:        Vec<PlayerChoice>,
    pub initial_budget: Amount,
    pub balance:        Amount,
    pub balance_label:  String,
    pub transactions:   TransactionTable,
}

pub fn render_transaction_table(transactions: &[Transaction]) -> TransactionTable {
    if transactions.is_empty() {
        return TransactionTable::Empty { message: NO_TRANSACTIONS_MESSAGE };
    }
    let rows = transactions
        .iter()
        .enumerate()
        .map(|(i, t)| TransactionRow {
            index:       i + 1,
            player_name: t.player_name.clone(),
            kind_label:  t.kind.label(),
            price:       format_amount(t.price),
        })
        .collect();
    TransactionTable::Rows { rows }
}

pub struct BudgetLedgerView<'a> {
    config:         &'a ManagerConfig,
    storage:        &'a dyn LocalStorage,
    initial_budget: Amount,
    transactions:   Vec<Transaction>,
}

impl<'a> BudgetLedgerView<'a> {
    pub fn new(config: &'a ManagerConfig, storage: &'a dyn LocalStorage) -> Self {
        Self {
            config,
            storage,
            initial_budget: storage.read(keys::INITIAL_BUDGET, 0),
            transactions:   storage.read(keys::TRANSACTIONS, Vec::new()),
        }
    }

    pub fn initial_budget(&self) -> Amount {
        self.initial_budget
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> Amount {
        compute_balance(self.initial_budget, &self.transactions)
    }

    /// Options for the transaction form's player selector, in roster order.
    pub fn player_choices(&self) -> Vec<PlayerChoice> {
        self.config
            .roster
            .players()
            .iter()
            .map(|p| PlayerChoice {
                player_id: p.player_id,
                label:     format!("{} ({})", p.name, p.club),
            })
            .collect()
    }

    pub fn render(&self) -> BudgetPage {
        let balance = self.balance();
        BudgetPage {
            players:        self.player_choices(),
            initial_budget: self.initial_budget,
            balance,
            balance_label:  format_amount(balance),
            transactions:   render_transaction_table(&self.transactions),
        }
    }

    /// Overwrite the initial budget from a form value. An empty field
    /// counts as 0. Returns `false`, changing nothing, when the value is
    /// not an integer.
    pub fn set_initial_budget(&mut self, input: &str) -> ManagerResult<bool> {
        let input = if input.is_empty() { "0" } else { input };
        let Some(value) = parse_int(input) else {
            log::debug!("Rejected budget input {input:?}");
            return Ok(false);
        };
        self.initial_budget = value;
        self.storage.write(keys::INITIAL_BUDGET, &self.initial_budget)?;
        log::debug!("Initial budget set to {value}");
        Ok(true)
    }

    /// Record a manual transaction from the form fields. Returns `None`,
    /// changing nothing, when the player id, kind or price is invalid.
    pub fn record_transaction(
        &mut self,
        player: &str,
        kind: &str,
        price: &str,
    ) -> ManagerResult<Option<Transaction>> {
        let (Some(player_id), Ok(kind), Some(price)) =
            (parse_int(player), kind.parse::<TransactionKind>(), parse_int(price))
        else {
            log::debug!("Rejected transaction form: player={player:?} kind={kind:?} price={price:?}");
            return Ok(None);
        };
        let player_name = self
            .config
            .roster
            .find(player_id)
            .map_or(UNKNOWN_PLAYER_NAME, |p| p.name.as_str())
            .to_string();
        let transaction = Transaction { player_id, player_name, kind, price };
        self.transactions.push(transaction.clone());
        self.storage.write(keys::TRANSACTIONS, &self.transactions)?;
        log::debug!(
            "Recorded {:?} of {} for {price}",
            transaction.kind,
            transaction.player_name
        );
        Ok(Some(transaction))
    }
}

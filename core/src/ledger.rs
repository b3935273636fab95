//! Transfer ledger: append-only transactions and the derived balance.

use crate::types::{Amount, PlayerId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Purchase,
    Sale,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Purchase => "Achat",
            TransactionKind::Sale     => "Vente",
        }
    }

    /// Signed effect of a transaction of this kind on the balance.
    /// Widened so that negating `Amount::MIN` cannot overflow.
    pub fn signed(self, price: Amount) -> i128 {
        match self {
            TransactionKind::Purchase => -i128::from(price),
            TransactionKind::Sale     => i128::from(price),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "purchase" => Ok(TransactionKind::Purchase),
            "sale"     => Ok(TransactionKind::Sale),
            _          => Err(()),
        }
    }
}

/// A recorded purchase or sale. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub player_id:   PlayerId,
    /// Captured when the transaction is recorded.
    pub player_name: String,
    #[serde(rename = "type")]
    pub kind:        TransactionKind,
    pub price:       Amount,
}

impl Transaction {
    pub fn purchase(player_id: PlayerId, player_name: impl Into<String>, price: Amount) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            kind: TransactionKind::Purchase,
            price,
        }
    }
}

/// initial − Σ purchases + Σ sales, folded in append order.
///
/// The sum is taken in i128 and saturates at the `Amount` bounds, so any
/// stored ledger renders.
pub fn compute_balance(initial_budget: Amount, transactions: &[Transaction]) -> Amount {
    let total = transactions
        .iter()
        .fold(i128::from(initial_budget), |total, t| {
            total.saturating_add(t.kind.signed(t.price))
        });
    total.clamp(i128::from(Amount::MIN), i128::from(Amount::MAX)) as Amount
}

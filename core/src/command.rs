use crate::{market_view::PurchaseReceipt, types::PlayerId};
use serde::{Deserialize, Serialize};

/// A user interaction with one of the pages. Field values arrive as the
/// raw strings a form control would hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum UiCommand {
    // ── Team page ─────────────────────────────────
    SelectFormation {
        formation: String,
    },
    AssignPlayer {
        slot:  String,
        #[serde(default)]
        value: String,
    },

    // ── Budget page ───────────────────────────────
    SetBudget {
        #[serde(default)]
        value: String,
    },
    RecordTransaction {
        #[serde(default)]
        player: String,
        #[serde(default)]
        kind:   String,
        #[serde(default)]
        price:  String,
    },

    // ── Transfers page ────────────────────────────
    Search {
        #[serde(default)]
        query:    String,
        #[serde(default)]
        position: String,
    },
    Buy {
        player_id: PlayerId,
    },
}

/// What a page did with a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// State changed (or the view was refreshed) and was persisted.
    Applied,
    /// Input was invalid; nothing changed.
    Rejected,
    /// The command belongs to another page.
    Ignored,
    Purchased { receipt: PurchaseReceipt },
}

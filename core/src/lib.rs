//! Companion-site logic for FC Manager 26: team builder, transfer budget
//! ledger and transfer market, over an injected local storage area.

pub mod bootstrap;
pub mod budget_view;
pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod formation;
pub mod ledger;
pub mod market_view;
pub mod role;
pub mod roster;
pub mod store;
pub mod team_view;
pub mod types;

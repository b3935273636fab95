//! Page bootstrapper: picks the single view matching a page tag.

use crate::{
    budget_view::{BudgetLedgerView, BudgetPage},
    command::{CommandOutcome, UiCommand},
    config::ManagerConfig,
    error::{ManagerError, ManagerResult},
    market_view::{MarketFilter, MarketPage, TransferMarketView},
    store::LocalStorage,
    team_view::{TeamBuilderView, TeamPage},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Team,
    Budget,
    Transfers,
}

impl Page {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "team"      => Some(Page::Team),
            "budget"    => Some(Page::Budget),
            "transfers" => Some(Page::Transfers),
            _           => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Page::Team      => "team",
            Page::Budget    => "budget",
            Page::Transfers => "transfers",
        }
    }
}

/// Rendered state of whichever page is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageModel {
    Team(TeamPage),
    Budget(BudgetPage),
    Transfers(MarketPage),
}

pub enum PageView<'a> {
    Team(TeamBuilderView<'a>),
    Budget(BudgetLedgerView<'a>),
    Transfers(TransferMarketView<'a>),
}

/// Build the view for `tag`. The roster in `config` is already resolved.
/// Unknown tags render nothing.
pub fn bootstrap<'a>(
    tag: &str,
    config: &'a ManagerConfig,
    storage: &'a dyn LocalStorage,
) -> Option<PageView<'a>> {
    let Some(page) = Page::from_tag(tag) else {
        log::warn!("Unknown page '{tag}', nothing to render");
        return None;
    };
    log::debug!("Bootstrapping {} page with {} players", page.tag(), config.roster.len());
    Some(match page {
        Page::Team      => PageView::Team(TeamBuilderView::new(config, storage)),
        Page::Budget    => PageView::Budget(BudgetLedgerView::new(config, storage)),
        Page::Transfers => PageView::Transfers(TransferMarketView::new(config, storage)),
    })
}

impl PageView<'_> {
    pub fn page(&self) -> Page {
        match self {
            PageView::Team(_)      => Page::Team,
            PageView::Budget(_)    => Page::Budget,
            PageView::Transfers(_) => Page::Transfers,
        }
    }

    pub fn render(&self) -> PageModel {
        match self {
            PageView::Team(v)      => PageModel::Team(v.render()),
            PageView::Budget(v)    => PageModel::Budget(v.render()),
            PageView::Transfers(v) => PageModel::Transfers(v.render()),
        }
    }

    /// Route a UI event to the active view.
    pub fn handle(&mut self, command: UiCommand) -> ManagerResult<CommandOutcome> {
        let outcome = match (self, command) {
            (PageView::Team(view), UiCommand::SelectFormation { formation }) => {
                match view.select_formation(&formation) {
                    Ok(_) => CommandOutcome::Applied,
                    Err(ManagerError::UnknownFormation { name }) => {
                        log::warn!("Rejected unknown formation '{name}'");
                        CommandOutcome::Rejected
                    }
                    Err(e) => return Err(e),
                }
            }
            (PageView::Team(view), UiCommand::AssignPlayer { slot, value }) => {
                view.assign(&slot, &value)?;
                CommandOutcome::Applied
            }
            (PageView::Budget(view), UiCommand::SetBudget { value }) => {
                if view.set_initial_budget(&value)? {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Rejected
                }
            }
            (PageView::Budget(view), UiCommand::RecordTransaction { player, kind, price }) => {
                match view.record_transaction(&player, &kind, &price)? {
                    Some(_) => CommandOutcome::Applied,
                    None => CommandOutcome::Rejected,
                }
            }
            (PageView::Transfers(view), UiCommand::Search { query, position }) => {
                view.set_filter(MarketFilter::new(query, position));
                CommandOutcome::Applied
            }
            (PageView::Transfers(view), UiCommand::Buy { player_id }) => {
                match view.buy(player_id)? {
                    Some(receipt) => CommandOutcome::Purchased { receipt },
                    None => CommandOutcome::Rejected,
                }
            }
            (view, command) => {
                log::debug!("{} page ignores {command:?}", view.page().tag());
                CommandOutcome::Ignored
            }
        };
        Ok(outcome)
    }
}

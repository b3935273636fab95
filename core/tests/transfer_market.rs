//! Transfer market tests: search, position filter, buy action.

use fcmanager_core::{
    budget_view::BudgetLedgerView,
    config::ManagerConfig,
    ledger::{Transaction, TransactionKind},
    market_view::{search, MarketFilter, MarketTable, TransferMarketView, NO_MATCH_MESSAGE},
    store::{keys, MemoryStorage, StorageExt},
};

fn config() -> ManagerConfig {
    ManagerConfig::embedded().expect("embedded data assets")
}

fn names(config: &ManagerConfig, filter: &MarketFilter) -> Vec<String> {
    search(&config.roster, filter)
        .into_iter()
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn query_for_mbappe_returns_one_row() {
    let config = config();
    assert_eq!(names(&config, &MarketFilter::new("Mbappé", "")), vec!["Kylian Mbappé"]);
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let config = config();
    assert_eq!(names(&config, &MarketFilter::new("  mbappÉ ", "")), vec!["Kylian Mbappé"]);
}

#[test]
fn query_matches_club_too() {
    let config = config();
    assert_eq!(
        names(&config, &MarketFilter::new("liverpool", "")),
        vec!["Mohamed Salah", "Virgil van Dijk", "Florian Wirtz"]
    );
}

#[test]
fn position_filter_lists_strikers_by_rating() {
    let config = config();
    let found = search(&config.roster, &MarketFilter::new("", "ST"));
    let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Kylian Mbappé", "Erling Haaland", "Ousmane Dembélé", "Florian Wirtz"]
    );
    assert!(found.iter().all(|p| p.can_play("ST")));
    assert!(found.windows(2).all(|w| w[0].overall >= w[1].overall));
}

#[test]
fn query_and_position_combine() {
    let config = config();
    assert_eq!(
        names(&config, &MarketFilter::new("real", "CAM")),
        vec!["Jude Bellingham"]
    );
}

#[test]
fn no_match_renders_informational_row() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TransferMarketView::new(&config, &storage);
    let table = view.set_filter(MarketFilter::new("zzz", ""));
    assert_eq!(table, MarketTable::Empty { message: NO_MATCH_MESSAGE });
    assert!(table.rows().is_empty());
}

#[test]
fn position_options_are_distinct_and_sorted() {
    let config = config();
    let storage = MemoryStorage::new();
    let view = TransferMarketView::new(&config, &storage);
    assert_eq!(
        view.position_options(),
        vec!["CAM", "CB", "CDM", "CM", "LM", "LW", "RB", "RM", "RW", "ST"]
    );
}

#[test]
fn rows_carry_formatted_value() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TransferMarketView::new(&config, &storage);
    let table = view.set_filter(MarketFilter::new("Haaland", ""));
    let row = &table.rows()[0];
    assert_eq!(row.player_id, 239085);
    assert_eq!(row.positions, "ST");
    assert_eq!(row.potential, 92);
    assert_eq!(row.club, "Manchester City");
    assert_eq!(row.value, "157\u{202F}000\u{202F}000");
}

#[test]
fn buying_appends_one_purchase_at_market_value() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TransferMarketView::new(&config, &storage);
    let before = view.transactions().len();

    let receipt = view.buy(231747).unwrap().unwrap();
    assert_eq!(view.transactions().len(), before + 1);
    assert_eq!(
        receipt.transaction,
        Transaction::purchase(231747, "Kylian Mbappé", 173_500_000)
    );
    assert_eq!(receipt.transaction.kind, TransactionKind::Purchase);
    assert_eq!(
        receipt.message,
        "Vous avez acheté Kylian Mbappé pour 173\u{202F}500\u{202F}000 €."
    );

    let stored: Vec<Transaction> = storage.read(keys::TRANSACTIONS, Vec::new());
    assert_eq!(stored.len(), before + 1);
}

#[test]
fn buying_ignores_affordability_and_feeds_the_budget_page() {
    let config = config();
    let storage = MemoryStorage::new();
    {
        let mut budget = BudgetLedgerView::new(&config, &storage);
        budget.set_initial_budget("1000").unwrap();
    }
    {
        let mut market = TransferMarketView::new(&config, &storage);
        assert_eq!(market.initial_budget(), 1000);
        market.buy(239085).unwrap().unwrap();
        market.buy(239085).unwrap().unwrap();
    }
    let budget = BudgetLedgerView::new(&config, &storage);
    assert_eq!(budget.transactions().len(), 2);
    assert_eq!(budget.balance(), 1000 - 2 * 157_000_000);
}

#[test]
fn buying_unknown_player_records_nothing() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TransferMarketView::new(&config, &storage);
    assert!(view.buy(42).unwrap().is_none());
    assert!(view.transactions().is_empty());
    assert_eq!(storage.raw(keys::TRANSACTIONS), None);
}

#[test]
fn buy_keeps_earlier_transactions() {
    let config = config();
    let storage = MemoryStorage::new();
    storage
        .write(keys::TRANSACTIONS, &vec![Transaction::purchase(1, "Someone", 5)])
        .unwrap();
    let mut view = TransferMarketView::new(&config, &storage);
    view.buy(203376).unwrap();

    let stored: Vec<Transaction> = storage.read(keys::TRANSACTIONS, Vec::new());
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].player_name, "Someone");
    assert_eq!(stored[1].player_name, "Virgil van Dijk");
}

//! Team builder tests: slot table, eligibility, formation changes,
//! assignment persistence.

use fcmanager_core::{
    config::ManagerConfig,
    error::ManagerError,
    formation::slot_base,
    role::Role,
    store::{keys, LocalStorage, MemoryStorage, StorageExt},
    team_view::{candidates_for_slot, TeamBuilderView, TeamState, EMPTY_CHOICE_LABEL},
};

fn config() -> ManagerConfig {
    ManagerConfig::embedded().expect("embedded data assets")
}

#[test]
fn defaults_to_433_with_no_assignments() {
    let config = config();
    let storage = MemoryStorage::new();
    let view = TeamBuilderView::new(&config, &storage);

    assert_eq!(view.state(), &TeamState::with_formation("4-3-3"));
    let options = view.formation_options();
    let names: Vec<_> = options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["4-3-3", "4-4-2", "3-5-2", "5-3-2"]);
    assert!(options[0].selected);
    assert!(options[1..].iter().all(|o| !o.selected));
    assert_eq!(view.render().empty_choice, EMPTY_CHOICE_LABEL);
}

#[test]
fn table_has_one_row_per_slot_for_every_formation() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TeamBuilderView::new(&config, &storage);

    for formation in config.formations.formations() {
        let rows = view.select_formation(&formation.name).unwrap();
        let labels: Vec<_> = rows.iter().map(|r| r.slot.clone()).collect();
        assert_eq!(labels, formation.slots, "formation {}", formation.name);
    }
}

#[test]
fn candidates_are_eligible_or_the_whole_roster() {
    let config = config();
    for formation in config.formations.formations() {
        for slot in &formation.slots {
            let base = slot_base(slot);
            let candidates = candidates_for_slot(&config.roster, slot);
            let any_eligible = config.roster.players().iter().any(|p| p.can_play(base));
            if any_eligible {
                assert!(
                    candidates.iter().all(|p| p.positions_list.iter().any(|t| t == base)),
                    "slot {slot} lists an ineligible player"
                );
            } else {
                assert_eq!(candidates.len(), config.roster.len(), "slot {slot} fallback");
            }
        }
    }
}

#[test]
fn goalkeeper_slot_falls_back_to_full_sorted_roster() {
    let config = config();
    let candidates = candidates_for_slot(&config.roster, "GK");
    let names: Vec<_> = candidates.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Kylian Mbappé",
            "Mohamed Salah",
            "Erling Haaland",
            "Jude Bellingham",
            "Ousmane Dembélé",
            "Rodri",
            "Virgil van Dijk",
            "Achraf Hakimi",
            "Florian Wirtz",
            "Lamine Yamal",
            "Pedri",
            "Vitinha",
        ]
    );
}

#[test]
fn striker_slot_lists_strikers_by_rating_then_name() {
    let config = config();
    let storage = MemoryStorage::new();
    let view = TeamBuilderView::new(&config, &storage);
    let rows = view.render_table();
    let st = rows.iter().find(|r| r.slot == "ST").unwrap();

    let labels: Vec<_> = st.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Kylian Mbappé (ST,LW,LM) - 91",
            "Erling Haaland (ST) - 90",
            "Ousmane Dembélé (ST,RW,CAM) - 90",
            "Florian Wirtz (CAM,ST,CM) - 89",
        ]
    );
    assert_eq!(st.role, Role::Forward);
    assert_eq!(st.role_label, "Attaquant");
}

#[test]
fn assignment_is_persisted_and_restored() {
    let config = config();
    let storage = MemoryStorage::new();
    {
        let mut view = TeamBuilderView::new(&config, &storage);
        view.assign("ST", "239085").unwrap();
        view.assign("CB1", "203376").unwrap();
    }
    assert_eq!(
        storage.raw(keys::TEAM).as_deref(),
        Some(r#"{"formation":"4-3-3","players":{"CB1":203376,"ST":239085}}"#)
    );

    let view = TeamBuilderView::new(&config, &storage);
    let rows = view.render_table();
    let st = rows.iter().find(|r| r.slot == "ST").unwrap();
    assert_eq!(st.selected, Some(239085));
    let cb = rows.iter().find(|r| r.slot == "CB1").unwrap();
    assert_eq!(cb.selected, Some(203376));
    let gk = rows.iter().find(|r| r.slot == "GK").unwrap();
    assert_eq!(gk.selected, None);
}

#[test]
fn clearing_a_selector_removes_the_slot() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TeamBuilderView::new(&config, &storage);
    view.assign("ST", "239085").unwrap();
    view.assign("ST", "").unwrap();

    assert!(view.state().players.is_empty());
    let stored: TeamState = storage.read(keys::TEAM, TeamState::with_formation("x"));
    assert!(stored.players.is_empty());
}

#[test]
fn switching_formation_clears_every_assignment() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TeamBuilderView::new(&config, &storage);
    view.assign("GK", "231747").unwrap();
    view.assign("ST", "239085").unwrap();

    view.select_formation("4-4-2").unwrap();
    assert_eq!(view.state(), &TeamState::with_formation("4-4-2"));

    // Reselecting the active formation clears too.
    view.assign("ST1", "239085").unwrap();
    view.select_formation("4-4-2").unwrap();
    assert!(view.state().players.is_empty());

    let stored: TeamState = storage.read(keys::TEAM, TeamState::with_formation("x"));
    assert_eq!(stored, TeamState::with_formation("4-4-2"));
}

#[test]
fn unknown_formation_is_an_error_and_changes_nothing() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TeamBuilderView::new(&config, &storage);
    view.assign("ST", "239085").unwrap();

    let err = view.select_formation("2-3-5").unwrap_err();
    assert!(matches!(err, ManagerError::UnknownFormation { .. }));
    assert_eq!(view.state().formation, "4-3-3");
    assert_eq!(view.state().players.get("ST"), Some(&239085));
}

#[test]
fn stored_formation_outside_catalog_resets_to_default() {
    let config = config();
    let storage = MemoryStorage::new();
    storage
        .set_item(keys::TEAM, r#"{"formation":"9-9-9","players":{"ST":239085}}"#)
        .unwrap();

    let view = TeamBuilderView::new(&config, &storage);
    assert_eq!(view.state(), &TeamState::with_formation("4-3-3"));
}

#[test]
fn same_player_may_fill_several_slots() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TeamBuilderView::new(&config, &storage);
    view.assign("GK", "203376").unwrap();
    view.assign("CB1", "203376").unwrap();
    view.assign("CB2", "203376").unwrap();

    let rows = view.render_table();
    let filled = rows.iter().filter(|r| r.selected == Some(203376)).count();
    assert_eq!(filled, 3);
}

#[test]
fn assignment_outside_candidates_is_kept_but_not_shown() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TeamBuilderView::new(&config, &storage);
    // Haaland is not a centre-back, and CB1 has an eligible player.
    view.assign("CB1", "239085").unwrap();

    assert_eq!(view.state().players.get("CB1"), Some(&239085));
    let rows = view.render_table();
    let cb = rows.iter().find(|r| r.slot == "CB1").unwrap();
    assert_eq!(cb.selected, None);
}

#[test]
fn assignment_to_slot_outside_formation_is_ignored() {
    let config = config();
    let storage = MemoryStorage::new();
    let mut view = TeamBuilderView::new(&config, &storage);
    view.assign("ST2", "239085").unwrap();

    assert!(view.state().players.is_empty());
    assert_eq!(storage.get_item(keys::TEAM).unwrap(), None);
}

#[test]
fn test_config_exercises_fallback_and_ties() {
    let config = ManagerConfig::default_test();
    let storage = MemoryStorage::new();
    let view = TeamBuilderView::new(&config, &storage);
    let rows = view.render_table();

    let rb = rows.iter().find(|r| r.slot == "RB").unwrap();
    assert_eq!(rb.options.len(), 1);
    let lb = rows.iter().find(|r| r.slot == "LB").unwrap();
    let ids: Vec<_> = lb.options.iter().map(|o| o.player_id).collect();
    // 88, then the two 84s by name, then 80.
    assert_eq!(ids, vec![4, 2, 3, 1]);
}

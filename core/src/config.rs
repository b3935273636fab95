use crate::{
    error::ManagerResult,
    formation::{Formation, FormationCatalog, DEFAULT_FORMATION},
    roster::{Player, Roster},
};

const EMBEDDED_ROSTER: &str = include_str!("../../data/roster.json");
const EMBEDDED_FORMATIONS: &str = include_str!("../../data/formations.json");

/// Static data every page is built from.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    pub roster:     Roster,
    pub formations: FormationCatalog,
}

impl ManagerConfig {
    /// Load from the data/ directory.
    /// In tests, use ManagerConfig::default_test() or ManagerConfig::embedded().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let roster_path = format!("{data_dir}/roster.json");
        let roster_content = std::fs::read_to_string(&roster_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {roster_path}: {e}"))?;
        let roster = Roster::from_json(&roster_content)?;

        let formations_path = format!("{data_dir}/formations.json");
        let formations_content = std::fs::read_to_string(&formations_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {formations_path}: {e}"))?;
        let formations = FormationCatalog::from_json(&formations_content)?;

        log::debug!(
            "Loaded {} players and {} formations from {data_dir}",
            roster.len(),
            formations.formations().len()
        );
        Ok(Self { roster, formations })
    }

    /// The data assets compiled into the binary.
    pub fn embedded() -> ManagerResult<Self> {
        Ok(Self {
            roster:     Roster::from_json(EMBEDDED_ROSTER)?,
            formations: FormationCatalog::from_json(EMBEDDED_FORMATIONS)?,
        })
    }

    /// Config with hardcoded defaults for use in unit tests.
    ///
    /// Four players and two formations: enough to exercise eligibility,
    /// the full-roster fallback, and rating ties.
    pub fn default_test() -> Self {
        let player = |player_id, name: &str, positions: &str, overall, value, club: &str| Player {
            player_id,
            name: name.into(),
            positions: positions.into(),
            positions_list: Vec::new(),
            overall,
            potential: overall,
            value,
            club: club.into(),
            country: "Testland".into(),
        };
        let roster = Roster::new(vec![
            player(1, "Alpha Keeper", "GK", 80, 10_000_000, "North FC"),
            player(2, "Bravo Back", "CB,RB", 84, 20_000_000, "South FC"),
            player(3, "Charlie Striker", "ST", 84, 30_000_000, "North FC"),
            player(4, "Delta Mid", "CM,CAM", 88, 40_000_000, "East FC"),
        ]);

        fn slots(labels: &[&str]) -> Vec<String> {
            labels.iter().map(|s| s.to_string()).collect()
        }
        let formations = vec![
            Formation {
                name:  DEFAULT_FORMATION.into(),
                slots: slots(&["GK", "RB", "CB1", "CB2", "LB", "CM1", "CM2", "CM3", "RW", "ST", "LW"]),
            },
            Formation {
                name:  "4-4-2".into(),
                slots: slots(&["GK", "RB", "CB1", "CB2", "LB", "RM", "CM1", "CM2", "LM", "ST1", "ST2"]),
            },
        ];
        let formations = match FormationCatalog::new(formations, DEFAULT_FORMATION) {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("built-in test catalog is valid: {e}"),
        };

        Self { roster, formations }
    }
}

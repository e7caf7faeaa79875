use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{Difficulty, Team};

/// Key the leaderboard is filed under in the backing store
pub const STORAGE_KEY: &str = "memoria_rankings";
/// The board never keeps more than the top ten
pub const MAX_ENTRIES: usize = 10;

/// Where leaderboard JSON lives. The shell decides what a key maps to;
/// the core only reads and writes strings.
pub trait RankingStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// One saved score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
    pub time_secs: u32,
    pub difficulty: Difficulty,
    pub date: String,
    #[serde(default)]
    pub team: Option<Team>,
}

/// Top-ten list, highest score first. The sort is stable, so an earlier
/// entry outranks a later one with the same score.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<RankingEntry>,
}

impl Leaderboard {
    /// Read the saved list. Anything missing or malformed counts as an
    /// empty board, never an error.
    pub fn load(store: &dyn RankingStore) -> Self {
        let entries = store
            .get(STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { entries }
    }

    /// Insert, re-sort by score descending and cap at the top ten
    pub fn add(&mut self, entry: RankingEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn save(&self, store: &mut dyn RankingStore) {
        if let Ok(raw) = serde_json::to_string(&self.entries) {
            store.set(STORAGE_KEY, &raw);
        }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const NAME_PREFIXES: [&str; 12] = [
    "BoiBandido",
    "CurralMaster",
    "Garantilindo",
    "CaprichosoLoko",
    "CunhãNinja",
    "BatucadaForte",
    "PajéDoido",
    "TouroVeloz",
    "EstrelaFoguete",
    "AzulzãoBrabo",
    "BumbáRei",
    "LendaDoBoi",
];

const NAME_SUFFIXES: [&str; 10] = [
    "do Garantido",
    "do Caprichoso",
    "Dançarino do Curral",
    "Mito de Parintins",
    "Rei do Festival",
    "Puxador Oficial",
    "Amo da Arena",
    "Campeão da Batucada",
    "Brabo do Bumbódromo",
    "Pajé Supremo",
];

/// A festival-flavored placeholder name for the ranking form
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let prefix = NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())];
    let suffix = NAME_SUFFIXES[rng.gen_range(0..NAME_SUFFIXES.len())];
    let number = rng.gen_range(0..1000);
    format!("{} {} {}", prefix, suffix, number)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[derive(Default)]
    struct MemStore {
        slots: HashMap<String, String>,
    }

    impl RankingStore for MemStore {
        fn get(&self, key: &str) -> Option<String> {
            self.slots.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.slots.insert(key.to_string(), value.to_string());
        }
    }

    fn entry(name: &str, score: u32) -> RankingEntry {
        RankingEntry {
            name: name.to_string(),
            score,
            time_secs: 40,
            difficulty: Difficulty::Medium,
            date: "23/08/2026".to_string(),
            team: Some(Team::Garantido),
        }
    }

    #[test]
    fn test_add_keeps_descending_order() {
        let mut board = Leaderboard::default();
        board.add(entry("a", 500));
        board.add(entry("b", 900));
        board.add(entry("c", 700));
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![900, 700, 500]);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut board = Leaderboard::default();
        board.add(entry("first", 800));
        board.add(entry("second", 800));
        board.add(entry("third", 800));
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_board_caps_at_ten() {
        let mut board = Leaderboard::default();
        for i in 0..15 {
            board.add(entry(&format!("p{}", i), 100 * i));
        }
        assert_eq!(board.len(), MAX_ENTRIES);
        assert_eq!(board.entries()[0].score, 1400);
        assert_eq!(board.entries()[9].score, 500);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = MemStore::default();
        let mut board = Leaderboard::default();
        board.add(entry("campeã", 1890));
        board.save(&mut store);

        let loaded = Leaderboard::load(&store);
        assert_eq!(loaded.entries(), board.entries());
    }

    #[test]
    fn test_missing_store_loads_empty() {
        let store = MemStore::default();
        let board = Leaderboard::load(&store);
        assert!(board.is_empty());
    }

    #[test]
    fn test_malformed_payload_loads_empty() {
        let mut store = MemStore::default();
        store.set(STORAGE_KEY, "{not json");
        let board = Leaderboard::load(&store);
        assert!(board.is_empty());
    }

    #[test]
    fn test_entry_without_team_deserializes() {
        let raw = r#"[{"name":"solo","score":100,"time_secs":30,"difficulty":"easy","date":"01/01/2026"}]"#;
        let mut store = MemStore::default();
        store.set(STORAGE_KEY, raw);
        let board = Leaderboard::load(&store);
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].team, None);
    }

    #[test]
    fn test_random_name_is_nonempty() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = random_name(&mut rng);
        assert!(!name.is_empty());
        assert!(name.chars().rev().take_while(|c| c.is_ascii_digit()).count() >= 1);
    }
}

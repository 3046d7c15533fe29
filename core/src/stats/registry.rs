use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const STATS_KEY: &str = "game_stats";

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum GameId {
    SlidingPuzzle,
    MemoryMatch,
    ReactionTime,
    SpeedMath,
    WordSearch,
}

impl GameId {
    pub const ALL: [GameId; 5] = [
        GameId::SlidingPuzzle,
        GameId::MemoryMatch,
        GameId::ReactionTime,
        GameId::SpeedMath,
        GameId::WordSearch,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            GameId::SlidingPuzzle => "sliding_puzzle",
            GameId::MemoryMatch => "memory_match",
            GameId::ReactionTime => "reaction_time",
            GameId::SpeedMath => "speed_math",
            GameId::WordSearch => "word_search",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GameId::SlidingPuzzle => "Sliding Puzzle",
            GameId::MemoryMatch => "Memory Match",
            GameId::ReactionTime => "Reaction Time",
            GameId::SpeedMath => "Speed Math",
            GameId::WordSearch => "Word Search",
        }
    }
}

/// Per-game counters. A superset of what each game records so every game can
/// share the same read-modify-write path instead of keeping its own shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStatsRecord {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub pairs_matched: u32,
    #[serde(default)]
    pub total_score: u32,
    #[serde(default)]
    pub words_found: Vec<String>,
}

/// Shared completion counter for all games. Persists a single JSON mapping of
/// game key to record; last write wins, consistent with single-instance usage.
/// Storage failures are logged and swallowed so gameplay is never disrupted.
pub struct StatsRegistry {
    store: Box<dyn KeyValueStore>,
}

impl StatsRegistry {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn read(&self, game_id: GameId) -> GameStatsRecord {
        self.read_all()
            .remove(game_id.storage_key())
            .unwrap_or_default()
    }

    /// Counts one completed session for the game.
    pub fn record_completion(&self, game_id: GameId) {
        self.record(game_id, |record| {
            record.games_played += 1;
        });
    }

    /// Read-modify-write of the game's record.
    pub fn record(&self, game_id: GameId, update: impl FnOnce(&mut GameStatsRecord)) {
        let mut all = self.read_all();
        let record = all.entry(game_id.storage_key().to_string()).or_default();
        update(record);

        let serialized = match serde_json::to_string(&all) {
            Ok(serialized) => serialized,
            Err(err) => {
                crate::warn!("Failed to serialize game stats: {}", err);
                return;
            }
        };
        if let Err(err) = self.store.set(STATS_KEY, &serialized) {
            crate::warn!("Failed to persist game stats: {}", err);
        }
    }

    pub fn total_games_played(&self) -> u32 {
        self.read_all().values().map(|r| r.games_played).sum()
    }

    fn read_all(&self) -> BTreeMap<String, GameStatsRecord> {
        let content = match self.store.get(STATS_KEY) {
            Ok(Some(content)) => content,
            Ok(None) => return BTreeMap::new(),
            Err(err) => {
                crate::warn!("Failed to read game stats: {}", err);
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(all) => all,
            Err(err) => {
                crate::warn!("Discarding unreadable game stats: {}", err);
                BTreeMap::new()
            }
        }
    }
}

pub mod config;
pub mod dashboard;
pub mod games;
pub mod journal;
pub mod logger;
pub mod notes;
pub mod stats;
pub mod storage;

pub use stats::{GameId, GameStatsRecord, StatsRegistry};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

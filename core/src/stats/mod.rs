mod registry;

pub use registry::{GameId, GameStatsRecord, StatsRegistry};

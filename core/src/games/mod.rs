mod session_rng;

pub mod memory_match;
pub mod reaction_time;
pub mod sliding_puzzle;
pub mod speed_math;
pub mod word_search;

pub use session_rng::SessionRng;

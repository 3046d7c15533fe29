mod game_state;
mod types;

pub use game_state::MemoryMatchGameState;
pub use types::{Card, FlipOutcome, CARD_SYMBOLS, PAIR_COUNT};

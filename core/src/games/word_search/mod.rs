mod game_state;
mod grid;
mod types;

pub use game_state::WordSearchGameState;
pub use grid::Grid;
pub use types::{CellPos, SubmitOutcome, GRID_SIZE, POINTS_PER_LETTER, ROUND_SECONDS, TARGET_WORDS};

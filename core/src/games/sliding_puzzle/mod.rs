mod board;
mod game_state;
mod types;
mod validate;

pub use board::Board;
pub use game_state::SlidingPuzzleGameState;
pub use types::{MoveOutcome, PuzzlePhase, Tile};
pub use validate::validate_board_size;

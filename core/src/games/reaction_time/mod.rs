mod game_state;
mod types;

pub use game_state::ReactionTimeGameState;
pub use types::{PressOutcome, ReactionPhase, LIGHT_COLUMNS, LIGHT_ROWS};

mod game_state;
mod types;

pub use game_state::SpeedMathGameState;
pub use types::{AnswerOutcome, Operator, Question, POINTS_PER_ANSWER, ROUND_SECONDS};

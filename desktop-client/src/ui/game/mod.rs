mod memory_match;
mod reaction_time;
mod sliding_puzzle;
mod speed_math;
mod word_search;

use eframe::egui;
use thinktank_core::{GameId, StatsRegistry};

pub use memory_match::MemoryMatchScreen;
pub use reaction_time::ReactionTimeScreen;
pub use sliding_puzzle::SlidingPuzzleScreen;
pub use speed_math::SpeedMathScreen;
pub use word_search::WordSearchScreen;

/// The currently open game screen. Each screen owns its engine and rng and
/// reports completions to the shared stats registry.
pub enum GameScreen {
    SlidingPuzzle(SlidingPuzzleScreen),
    MemoryMatch(MemoryMatchScreen),
    ReactionTime(ReactionTimeScreen),
    SpeedMath(SpeedMathScreen),
    WordSearch(WordSearchScreen),
}

impl GameScreen {
    pub fn start(game_id: GameId, puzzle_board_size: usize) -> Self {
        match game_id {
            GameId::SlidingPuzzle => {
                Self::SlidingPuzzle(SlidingPuzzleScreen::new(puzzle_board_size))
            }
            GameId::MemoryMatch => Self::MemoryMatch(MemoryMatchScreen::new()),
            GameId::ReactionTime => Self::ReactionTime(ReactionTimeScreen::new()),
            GameId::SpeedMath => Self::SpeedMath(SpeedMathScreen::new()),
            GameId::WordSearch => Self::WordSearch(WordSearchScreen::new()),
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, stats: &StatsRegistry) {
        match self {
            Self::SlidingPuzzle(screen) => screen.render(ui, stats),
            Self::MemoryMatch(screen) => screen.render(ui, ctx, stats),
            Self::ReactionTime(screen) => screen.render(ui, ctx, stats),
            Self::SpeedMath(screen) => screen.render(ui, ctx, stats),
            Self::WordSearch(screen) => screen.render(ui, ctx, stats),
        }
    }
}

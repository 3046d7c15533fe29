use super::board::Board;
use super::types::{MoveOutcome, PuzzlePhase, Tile};
use super::validate::validate_board_size;
use crate::games::session_rng::SessionRng;

/// The puzzle engine: owns the arrangement, validates and applies moves, and
/// reports the solved transition exactly once per board.
pub struct SlidingPuzzleGameState {
    board: Board,
    phase: PuzzlePhase,
    moves_made: u32,
}

impl SlidingPuzzleGameState {
    pub fn new(size: usize, rng: &mut SessionRng) -> Result<Self, String> {
        validate_board_size(size)?;
        Ok(Self {
            board: Board::shuffled(size, rng),
            phase: PuzzlePhase::Shuffled,
            moves_made: 0,
        })
    }

    /// Requests a swap of the tile at `position` with the empty slot. Illegal
    /// input (non-adjacent, out of range, or any input once solved) is
    /// silently rejected and leaves the board untouched.
    pub fn attempt_move(&mut self, position: usize) -> MoveOutcome {
        if self.phase == PuzzlePhase::Solved {
            return MoveOutcome::Illegal;
        }
        if !self.board.is_legal_move(position) {
            return MoveOutcome::Illegal;
        }

        self.board.swap_with_empty(position);
        self.moves_made += 1;

        if self.board.is_solved() {
            self.phase = PuzzlePhase::Solved;
            MoveOutcome::Solved
        } else {
            self.phase = PuzzlePhase::Solving;
            MoveOutcome::Moved
        }
    }

    /// Discards the current board and starts a fresh shuffled one.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.board = Board::shuffled(self.board.size(), rng);
        self.phase = PuzzlePhase::Shuffled;
        self.moves_made = 0;
    }

    pub fn slots(&self) -> &[Tile] {
        self.board.slots()
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn is_solved(&self) -> bool {
        self.phase == PuzzlePhase::Solved
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.phase = if board.is_solved() {
            PuzzlePhase::Solved
        } else {
            PuzzlePhase::Solving
        };
        self.board = board;
    }
}

pub const GRID_SIZE: usize = 6;
pub const ROUND_SECONDS: u64 = 60;
pub const POINTS_PER_LETTER: u32 = 10;

/// Words hidden in the grid. Must each fit within a grid row.
pub const TARGET_WORDS: [&str; 5] = ["REACT", "NODE", "RUST", "CSS", "HTML"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    WordFound { word: String, points: u32 },
    /// Not a target word, or a target already found. Selection is cleared.
    Invalid,
    /// Nothing selected; nothing happens.
    EmptySelection,
    RoundOver,
}

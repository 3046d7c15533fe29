/// One slot of the puzzle board. Exactly one slot holds `Empty` at all times.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Numbered(u8),
    Empty,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PuzzlePhase {
    /// Freshly shuffled, no move applied yet.
    Shuffled,
    /// At least one legal move applied.
    Solving,
    /// Canonical order reached. Terminal for this board instance.
    Solved,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// Non-adjacent, out-of-range, or post-solve input. Board unchanged.
    Illegal,
    Moved,
    /// This move reached the solved order. Reported exactly once per board.
    Solved,
}

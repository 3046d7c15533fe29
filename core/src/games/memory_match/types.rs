pub const PAIR_COUNT: usize = 8;

/// Symbols shown on the card faces; each appears on exactly two cards.
pub const CARD_SYMBOLS: [&str; PAIR_COUNT] = ["💎", "🔥", "🍀", "⚡", "🌙", "⭐", "🍎", "🎵"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Card {
    pub symbol_index: usize,
    pub matched: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FlipOutcome {
    /// Already face-up, already matched, or the game is over.
    Ignored,
    /// First card of a pair turned face-up.
    FirstFlipped,
    /// Second card matched the first; the pair is locked face-up.
    PairMatched,
    /// Second card did not match; both stay visible until `hide_unmatched`.
    Mismatch,
    /// The matching pair was the last one on the table.
    GameWon,
}

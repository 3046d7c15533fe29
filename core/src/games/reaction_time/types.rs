pub const LIGHT_ROWS: usize = 3;
pub const LIGHT_COLUMNS: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReactionPhase {
    /// Waiting for the player to start a round.
    Idle,
    /// Start lights coming on row by row. Pressing now is a jump start.
    Lights,
    /// Lights out, the clock is running.
    Armed,
    /// Round finished, result on display.
    Result,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PressOutcome {
    RoundStarted,
    JumpStart,
    Reaction { millis: u64 },
    BackToIdle,
}

use super::types::{PressOutcome, ReactionPhase, LIGHT_ROWS};
use crate::games::session_rng::SessionRng;
use std::time::{Duration, Instant};

/// Offsets from round start at which each light row comes on.
const ROW_DELAYS_MS: [u64; LIGHT_ROWS] = [800, 2000, 3500];

/// All three rows stay lit this long before the random wait even starts.
const LAST_ROW_HOLD_MS: u64 = 1800;

/// Random extra wait after the hold before the lights go out.
const GO_DELAY_RANGE_MS: std::ops::RangeInclusive<u64> = 1500..=3500;

/// F1-style start-light reaction test. The engine has no internal timers; the
/// host drives it by calling `tick` with the current instant and forwards
/// every press to `press`.
pub struct ReactionTimeGameState {
    phase: ReactionPhase,
    round_started_at: Option<Instant>,
    go_at: Option<Instant>,
    armed_at: Option<Instant>,
    last_result_millis: Option<u64>,
    jump_start: bool,
    best_millis: Option<u64>,
}

impl ReactionTimeGameState {
    pub fn new() -> Self {
        Self {
            phase: ReactionPhase::Idle,
            round_started_at: None,
            go_at: None,
            armed_at: None,
            last_result_millis: None,
            jump_start: false,
            best_millis: None,
        }
    }

    /// Advances the light sequence. No-op outside the `Lights` phase.
    pub fn tick(&mut self, now: Instant) {
        if self.phase != ReactionPhase::Lights {
            return;
        }
        if let Some(go_at) = self.go_at
            && now >= go_at
        {
            self.phase = ReactionPhase::Armed;
            self.armed_at = Some(go_at);
        }
    }

    pub fn press(&mut self, now: Instant, rng: &mut SessionRng) -> PressOutcome {
        match self.phase {
            ReactionPhase::Idle => {
                let go_delay = Duration::from_millis(rng.random_range(GO_DELAY_RANGE_MS));
                let lights_done = Duration::from_millis(
                    ROW_DELAYS_MS[LIGHT_ROWS - 1] + LAST_ROW_HOLD_MS,
                );
                self.phase = ReactionPhase::Lights;
                self.round_started_at = Some(now);
                self.go_at = Some(now + lights_done + go_delay);
                self.armed_at = None;
                self.last_result_millis = None;
                self.jump_start = false;
                PressOutcome::RoundStarted
            }
            ReactionPhase::Lights => {
                self.phase = ReactionPhase::Result;
                self.jump_start = true;
                PressOutcome::JumpStart
            }
            ReactionPhase::Armed => {
                let armed_at = self.armed_at.unwrap_or(now);
                let millis = now.saturating_duration_since(armed_at).as_millis() as u64;
                self.phase = ReactionPhase::Result;
                self.last_result_millis = Some(millis);
                self.best_millis = Some(match self.best_millis {
                    Some(best) => best.min(millis),
                    None => millis,
                });
                PressOutcome::Reaction { millis }
            }
            ReactionPhase::Result => {
                self.phase = ReactionPhase::Idle;
                self.round_started_at = None;
                self.go_at = None;
                self.armed_at = None;
                PressOutcome::BackToIdle
            }
        }
    }

    /// How many light rows are currently lit. All rows go dark once armed.
    pub fn lit_rows(&self, now: Instant) -> usize {
        if self.phase != ReactionPhase::Lights {
            return 0;
        }
        let Some(started_at) = self.round_started_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started_at).as_millis() as u64;
        ROW_DELAYS_MS.iter().filter(|&&delay| elapsed >= delay).count()
    }

    pub fn phase(&self) -> ReactionPhase {
        self.phase
    }

    pub fn last_result_millis(&self) -> Option<u64> {
        self.last_result_millis
    }

    pub fn was_jump_start(&self) -> bool {
        self.jump_start
    }

    pub fn best_millis(&self) -> Option<u64> {
        self.best_millis
    }
}

impl Default for ReactionTimeGameState {
    fn default() -> Self {
        Self::new()
    }
}

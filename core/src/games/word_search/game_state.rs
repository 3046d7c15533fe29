use super::grid::Grid;
use super::types::{
    CellPos, SubmitOutcome, POINTS_PER_LETTER, ROUND_SECONDS, TARGET_WORDS,
};
use crate::games::session_rng::SessionRng;
use std::time::{Duration, Instant};

/// Timed word hunt on a letter grid. Cells toggle in and out of the current
/// selection; submitting checks the selection (in click order) against the
/// unfound target words.
pub struct WordSearchGameState {
    grid: Grid,
    selected: Vec<CellPos>,
    found_words: Vec<String>,
    score: u32,
    started_at: Instant,
    round_length: Duration,
    game_over: bool,
}

impl WordSearchGameState {
    pub fn new(now: Instant, rng: &mut SessionRng) -> Self {
        Self {
            grid: Grid::generate(&TARGET_WORDS, rng),
            selected: Vec::new(),
            found_words: Vec::new(),
            score: 0,
            started_at: now,
            round_length: Duration::from_secs(ROUND_SECONDS),
            game_over: false,
        }
    }

    /// Adds the cell to the selection, or removes it if already selected.
    /// Out-of-range and post-round clicks are ignored.
    pub fn toggle_cell(&mut self, pos: CellPos) {
        if self.game_over || self.grid.letter(pos).is_none() {
            return;
        }
        if let Some(index) = self.selected.iter().position(|&p| p == pos) {
            self.selected.remove(index);
        } else {
            self.selected.push(pos);
        }
    }

    pub fn submit_selection(&mut self, now: Instant) -> SubmitOutcome {
        self.tick(now);
        if self.game_over {
            return SubmitOutcome::RoundOver;
        }
        if self.selected.is_empty() {
            return SubmitOutcome::EmptySelection;
        }

        let word = self.grid.word_at(&self.selected);
        self.selected.clear();

        let is_new_target = TARGET_WORDS.contains(&word.as_str())
            && !self.found_words.contains(&word);
        if !is_new_target {
            return SubmitOutcome::Invalid;
        }

        let points = word.len() as u32 * POINTS_PER_LETTER;
        self.score += points;
        self.found_words.push(word.clone());
        SubmitOutcome::WordFound { word, points }
    }

    /// Ends the round once the clock has run out.
    pub fn tick(&mut self, now: Instant) {
        if !self.game_over && now.saturating_duration_since(self.started_at) >= self.round_length {
            self.game_over = true;
        }
    }

    pub fn seconds_left(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.round_length.saturating_sub(elapsed).as_secs()
    }

    pub fn reset(&mut self, now: Instant, rng: &mut SessionRng) {
        *self = Self::new(now, rng);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_selected(&self, pos: CellPos) -> bool {
        self.selected.contains(&pos)
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn all_words_found(&self) -> bool {
        self.found_words.len() == TARGET_WORDS.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

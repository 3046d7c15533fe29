use super::types::{Card, FlipOutcome, PAIR_COUNT};
use crate::games::session_rng::SessionRng;

/// Concentration-style pair matching over a shuffled 16-card deck. The engine
/// keeps mismatched cards face-up until the host calls `hide_unmatched`, so
/// the player gets a moment to memorize them.
pub struct MemoryMatchGameState {
    cards: Vec<Card>,
    face_up: Vec<usize>,
    pairs_matched: u32,
    game_over: bool,
}

impl MemoryMatchGameState {
    pub fn new(rng: &mut SessionRng) -> Self {
        let mut symbol_indices: Vec<usize> = (0..PAIR_COUNT).chain(0..PAIR_COUNT).collect();
        rng.shuffle(&mut symbol_indices);

        let cards = symbol_indices
            .into_iter()
            .map(|symbol_index| Card {
                symbol_index,
                matched: false,
            })
            .collect();

        Self {
            cards,
            face_up: Vec::new(),
            pairs_matched: 0,
            game_over: false,
        }
    }

    pub fn flip(&mut self, card_index: usize) -> FlipOutcome {
        if self.game_over || card_index >= self.cards.len() {
            return FlipOutcome::Ignored;
        }
        if self.cards[card_index].matched || self.face_up.contains(&card_index) {
            return FlipOutcome::Ignored;
        }
        // A mismatched pair still on display blocks further flips until the
        // host hides it.
        if self.face_up.len() == 2 {
            return FlipOutcome::Ignored;
        }

        self.face_up.push(card_index);
        if self.face_up.len() < 2 {
            return FlipOutcome::FirstFlipped;
        }

        let first = self.face_up[0];
        let second = self.face_up[1];
        if self.cards[first].symbol_index != self.cards[second].symbol_index {
            return FlipOutcome::Mismatch;
        }

        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.face_up.clear();
        self.pairs_matched += 1;

        if self.cards.iter().all(|card| card.matched) {
            self.game_over = true;
            FlipOutcome::GameWon
        } else {
            FlipOutcome::PairMatched
        }
    }

    /// Turns a displayed mismatch back face-down. Called by the host after
    /// its reveal delay elapses.
    pub fn hide_unmatched(&mut self) {
        self.face_up.clear();
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_face_up(&self, card_index: usize) -> bool {
        self.cards
            .get(card_index)
            .is_some_and(|card| card.matched)
            || self.face_up.contains(&card_index)
    }

    pub fn has_pending_mismatch(&self) -> bool {
        self.face_up.len() == 2
    }

    pub fn pairs_matched(&self) -> u32 {
        self.pairs_matched
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    fn position_of_pair(&self, symbol_index: usize) -> (usize, usize) {
        let positions: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.symbol_index == symbol_index)
            .map(|(i, _)| i)
            .collect();
        (positions[0], positions[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> MemoryMatchGameState {
        let mut rng = SessionRng::new(42);
        MemoryMatchGameState::new(&mut rng)
    }

    #[test]
    fn test_deck_has_eight_pairs() {
        let state = new_game();
        assert_eq!(state.cards().len(), PAIR_COUNT * 2);
        for symbol_index in 0..PAIR_COUNT {
            let count = state
                .cards()
                .iter()
                .filter(|card| card.symbol_index == symbol_index)
                .count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_matching_pair_locks_cards() {
        let mut state = new_game();
        let (first, second) = state.position_of_pair(0);

        assert_eq!(state.flip(first), FlipOutcome::FirstFlipped);
        assert_eq!(state.flip(second), FlipOutcome::PairMatched);
        assert!(state.cards()[first].matched);
        assert!(state.cards()[second].matched);
        assert_eq!(state.pairs_matched(), 1);
    }

    #[test]
    fn test_mismatch_stays_visible_until_hidden() {
        let mut state = new_game();
        let (first, _) = state.position_of_pair(0);
        let (other, _) = state.position_of_pair(1);

        state.flip(first);
        assert_eq!(state.flip(other), FlipOutcome::Mismatch);
        assert!(state.has_pending_mismatch());
        assert!(state.is_face_up(first));
        assert!(state.is_face_up(other));

        // Blocked until the host hides the mismatch.
        let (third, _) = state.position_of_pair(2);
        assert_eq!(state.flip(third), FlipOutcome::Ignored);

        state.hide_unmatched();
        assert!(!state.is_face_up(first));
        assert!(!state.is_face_up(other));
        assert_eq!(state.flip(third), FlipOutcome::FirstFlipped);
    }

    #[test]
    fn test_flip_same_card_twice_is_ignored() {
        let mut state = new_game();
        let (first, _) = state.position_of_pair(0);
        state.flip(first);
        assert_eq!(state.flip(first), FlipOutcome::Ignored);
    }

    #[test]
    fn test_out_of_range_flip_is_ignored() {
        let mut state = new_game();
        assert_eq!(state.flip(16), FlipOutcome::Ignored);
        assert_eq!(state.flip(usize::MAX), FlipOutcome::Ignored);
    }

    #[test]
    fn test_matching_all_pairs_wins() {
        let mut state = new_game();
        for symbol_index in 0..PAIR_COUNT {
            let (first, second) = state.position_of_pair(symbol_index);
            state.flip(first);
            let outcome = state.flip(second);
            if symbol_index == PAIR_COUNT - 1 {
                assert_eq!(outcome, FlipOutcome::GameWon);
            } else {
                assert_eq!(outcome, FlipOutcome::PairMatched);
            }
        }
        assert!(state.is_game_over());
        assert_eq!(state.pairs_matched(), PAIR_COUNT as u32);

        // Inert once over.
        assert_eq!(state.flip(0), FlipOutcome::Ignored);
    }

    #[test]
    fn test_reset_starts_fresh() {
        let mut rng = SessionRng::new(7);
        let mut state = new_game();
        let (first, second) = state.position_of_pair(0);
        state.flip(first);
        state.flip(second);

        state.reset(&mut rng);
        assert_eq!(state.pairs_matched(), 0);
        assert!(!state.is_game_over());
        assert!(state.cards().iter().all(|card| !card.matched));
    }
}

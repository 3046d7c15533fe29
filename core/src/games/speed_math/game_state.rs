use super::types::{AnswerOutcome, Operator, Question, POINTS_PER_ANSWER, ROUND_SECONDS};
use crate::games::session_rng::SessionRng;
use std::time::{Duration, Instant};

/// Timed arithmetic drill: answer as many small-number questions as possible
/// before the round clock runs out. Every submission advances to a fresh
/// question, right or wrong, matching the original game's pace.
pub struct SpeedMathGameState {
    question: Question,
    score: u32,
    answered: u32,
    started_at: Instant,
    round_length: Duration,
    game_over: bool,
}

impl SpeedMathGameState {
    pub fn new(now: Instant, rng: &mut SessionRng) -> Self {
        Self {
            question: generate_question(rng),
            score: 0,
            answered: 0,
            started_at: now,
            round_length: Duration::from_secs(ROUND_SECONDS),
            game_over: false,
        }
    }

    pub fn submit_answer(
        &mut self,
        raw_answer: &str,
        now: Instant,
        rng: &mut SessionRng,
    ) -> AnswerOutcome {
        self.tick(now);
        if self.game_over {
            return AnswerOutcome::RoundOver;
        }

        let outcome = match raw_answer.trim().parse::<i32>() {
            Ok(answer) if answer == self.question.answer() => {
                self.score += POINTS_PER_ANSWER;
                AnswerOutcome::Correct
            }
            Ok(_) => AnswerOutcome::Wrong,
            Err(_) => AnswerOutcome::NotANumber,
        };

        self.answered += 1;
        self.question = generate_question(rng);
        outcome
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

    pub fn question(&self) -> Question {
        self.question
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

fn generate_question(rng: &mut SessionRng) -> Question {
    let a = rng.random_range(1..=10);
    let b = rng.random_range(1..=10);
    let op = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
    Question { a, b, op }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> (SpeedMathGameState, SessionRng, Instant) {
        let mut rng = SessionRng::new(42);
        let now = Instant::now();
        let state = SpeedMathGameState::new(now, &mut rng);
        (state, rng, now)
    }

    #[test]
    fn test_operator_arithmetic() {
        assert_eq!(Operator::Add.apply(7, 3), 10);
        assert_eq!(Operator::Subtract.apply(2, 9), -7);
        assert_eq!(Operator::Multiply.apply(6, 6), 36);
    }

    #[test]
    fn test_question_operands_in_range() {
        let mut rng = SessionRng::new(0);
        for _ in 0..500 {
            let question = generate_question(&mut rng);
            assert!((1..=10).contains(&question.a));
            assert!((1..=10).contains(&question.b));
        }
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let (mut state, mut rng, now) = new_game();
        let answer = state.question().answer().to_string();
        assert_eq!(
            state.submit_answer(&answer, now, &mut rng),
            AnswerOutcome::Correct
        );
        assert_eq!(state.score(), POINTS_PER_ANSWER);
        assert_eq!(state.answered(), 1);
    }

    #[test]
    fn test_wrong_answer_advances_without_score() {
        let (mut state, mut rng, now) = new_game();
        let wrong = (state.question().answer() + 1).to_string();
        assert_eq!(
            state.submit_answer(&wrong, now, &mut rng),
            AnswerOutcome::Wrong
        );
        assert_eq!(state.score(), 0);
        assert_eq!(state.answered(), 1);
    }

    #[test]
    fn test_garbage_input_is_not_a_number() {
        let (mut state, mut rng, now) = new_game();
        assert_eq!(
            state.submit_answer("twelve", now, &mut rng),
            AnswerOutcome::NotANumber
        );
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_round_ends_after_sixty_seconds() {
        let (mut state, mut rng, now) = new_game();
        let late = now + Duration::from_secs(ROUND_SECONDS);
        assert_eq!(state.seconds_left(late), 0);
        assert_eq!(
            state.submit_answer("5", late, &mut rng),
            AnswerOutcome::RoundOver
        );
        assert!(state.is_game_over());
    }

    #[test]
    fn test_seconds_left_counts_down() {
        let (state, _, now) = new_game();
        assert_eq!(state.seconds_left(now), ROUND_SECONDS);
        assert_eq!(state.seconds_left(now + Duration::from_secs(13)), 47);
    }

    #[test]
    fn test_reset_starts_new_round() {
        let (mut state, mut rng, now) = new_game();
        let answer = state.question().answer().to_string();
        state.submit_answer(&answer, now, &mut rng);
        state.tick(now + Duration::from_secs(120));
        assert!(state.is_game_over());

        let later = now + Duration::from_secs(200);
        state.reset(later, &mut rng);
        assert!(!state.is_game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.seconds_left(later), ROUND_SECONDS);
    }
}

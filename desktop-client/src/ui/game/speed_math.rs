use eframe::egui;
use std::time::{Duration, Instant};
use thinktank_core::games::speed_math::SpeedMathGameState;
use thinktank_core::games::SessionRng;
use thinktank_core::{GameId, StatsRegistry};

pub struct SpeedMathScreen {
    state: SpeedMathGameState,
    rng: SessionRng,
    answer_input: String,
    round_recorded: bool,
}

impl SpeedMathScreen {
    pub fn new() -> Self {
        let mut rng = SessionRng::from_random();
        let state = SpeedMathGameState::new(Instant::now(), &mut rng);
        Self {
            state,
            rng,
            answer_input: String::new(),
            round_recorded: false,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, stats: &StatsRegistry) {
        let now = Instant::now();
        self.state.tick(now);

        if self.state.is_game_over() && !self.round_recorded {
            self.round_recorded = true;
            let score = self.state.score();
            stats.record(GameId::SpeedMath, |record| {
                record.games_played += 1;
                record.total_score += score;
            });
        }

        ui.vertical_centered(|ui| {
            ui.heading("Speed Math");
            ui.add_space(10.0);

            if !self.state.is_game_over() {
                ctx.request_repaint_after(Duration::from_millis(250));
                ui.label(format!(
                    "Time left: {}s | Score: {}",
                    self.state.seconds_left(now),
                    self.state.score()
                ));
                ui.add_space(10.0);
                ui.heading(
                    egui::RichText::new(self.state.question().to_string())
                        .color(egui::Color32::from_rgb(0, 247, 255))
                        .size(32.0),
                );

                let response = ui.text_edit_singleline(&mut self.answer_input);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui.button("Submit").clicked();
                if submitted || clicked {
                    let answer = self.answer_input.clone();
                    self.state.submit_answer(&answer, now, &mut self.rng);
                    self.answer_input.clear();
                    response.request_focus();
                }
            } else {
                ui.heading(
                    egui::RichText::new("Time's up!")
                        .color(egui::Color32::GREEN)
                        .size(24.0),
                );
                ui.label(format!("Final score: {}", self.state.score()));
                ui.label(format!("Questions answered: {}", self.state.answered()));
                if ui.button("Restart").clicked() {
                    self.state.reset(Instant::now(), &mut self.rng);
                    self.answer_input.clear();
                    self.round_recorded = false;
                }
            }
        });
    }
}

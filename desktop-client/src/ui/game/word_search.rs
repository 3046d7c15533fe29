use eframe::egui;
use std::time::{Duration, Instant};
use thinktank_core::games::word_search::{CellPos, WordSearchGameState, GRID_SIZE, TARGET_WORDS};
use thinktank_core::games::SessionRng;
use thinktank_core::{GameId, StatsRegistry};

pub struct WordSearchScreen {
    state: WordSearchGameState,
    rng: SessionRng,
    round_recorded: bool,
}

impl WordSearchScreen {
    pub fn new() -> Self {
        let mut rng = SessionRng::from_random();
        let state = WordSearchGameState::new(Instant::now(), &mut rng);
        Self {
            state,
            rng,
            round_recorded: false,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, stats: &StatsRegistry) {
        let now = Instant::now();
        self.state.tick(now);

        if self.state.is_game_over() && !self.round_recorded {
            self.round_recorded = true;
            let score = self.state.score();
            let found: Vec<String> = self.state.found_words().to_vec();
            stats.record(GameId::WordSearch, |record| {
                record.games_played += 1;
                record.total_score += score;
                record.words_found.extend(found);
            });
        }

        ui.vertical_centered(|ui| {
            ui.heading("Word Search");
            ui.label(format!("Find these words: {}", TARGET_WORDS.join(", ")));
            ui.add_space(6.0);

            if !self.state.is_game_over() {
                ctx.request_repaint_after(Duration::from_millis(250));
            }
            ui.label(format!(
                "Time: {}s | Score: {}",
                self.state.seconds_left(now),
                self.state.score()
            ));
            ui.add_space(10.0);

            if let Some(pos) = self.render_grid(ui) {
                self.state.toggle_cell(pos);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() / 2.0 - 110.0);
                if ui.button("Check Word").clicked() {
                    self.state.submit_selection(now);
                }
                if ui.button("Reset").clicked() {
                    self.state.reset(Instant::now(), &mut self.rng);
                    self.round_recorded = false;
                }
            });

            if !self.state.found_words().is_empty() {
                ui.label(format!("Found: {}", self.state.found_words().join(", ")));
            }

            if self.state.is_game_over() {
                ui.add_space(8.0);
                ui.heading(
                    egui::RichText::new("Time's up!")
                        .color(egui::Color32::GREEN)
                        .size(24.0),
                );
                ui.label(format!("Final score: {}", self.state.score()));
            }
        });
    }

    fn render_grid(&self, ui: &mut egui::Ui) -> Option<CellPos> {
        let available = ui.available_size();
        let cell_size = (available.x.min(420.0) / GRID_SIZE as f32 - 4.0).max(36.0);

        let mut clicked = None;
        for row in 0..GRID_SIZE {
            ui.horizontal(|ui| {
                ui.add_space((available.x - (cell_size + 4.0) * GRID_SIZE as f32) / 2.0);
                for col in 0..GRID_SIZE {
                    let pos = CellPos::new(row, col);
                    if self.render_cell(ui, pos, cell_size) {
                        clicked = Some(pos);
                    }
                }
            });
        }
        clicked
    }

    fn render_cell(&self, ui: &mut egui::Ui, pos: CellPos, cell_size: f32) -> bool {
        let size = egui::vec2(cell_size, cell_size);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        let bg = if self.state.is_selected(pos) {
            egui::Color32::from_rgb(0, 160, 170)
        } else {
            egui::Color32::from_rgb(30, 32, 40)
        };
        ui.painter().rect_filled(rect.shrink(2.0), 4.0, bg);

        if let Some(letter) = self.state.grid().letter(pos) {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                letter.to_string(),
                egui::FontId::proportional(cell_size * 0.45),
                egui::Color32::WHITE,
            );
        }

        response.clicked()
    }
}

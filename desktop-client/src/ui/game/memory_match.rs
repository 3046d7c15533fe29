use eframe::egui;
use std::time::{Duration, Instant};
use thinktank_core::games::memory_match::{
    FlipOutcome, MemoryMatchGameState, CARD_SYMBOLS, PAIR_COUNT,
};
use thinktank_core::games::SessionRng;
use thinktank_core::{GameId, StatsRegistry};

const GRID_COLUMNS: usize = 4;
const MISMATCH_REVEAL: Duration = Duration::from_millis(800);

pub struct MemoryMatchScreen {
    state: MemoryMatchGameState,
    rng: SessionRng,
    mismatch_shown_at: Option<Instant>,
}

impl MemoryMatchScreen {
    pub fn new() -> Self {
        let mut rng = SessionRng::from_random();
        let state = MemoryMatchGameState::new(&mut rng);
        Self {
            state,
            rng,
            mismatch_shown_at: None,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, stats: &StatsRegistry) {
        // Turn a displayed mismatch back over once the reveal delay passes.
        if let Some(shown_at) = self.mismatch_shown_at {
            if shown_at.elapsed() >= MISMATCH_REVEAL {
                self.state.hide_unmatched();
                self.mismatch_shown_at = None;
            } else {
                ctx.request_repaint_after(MISMATCH_REVEAL - shown_at.elapsed());
            }
        }

        ui.vertical_centered(|ui| {
            ui.heading("Memory Match");
            ui.label(format!(
                "Pairs matched: {}/{}",
                self.state.pairs_matched(),
                PAIR_COUNT
            ));
            ui.add_space(10.0);

            if let Some(card_index) = self.render_cards(ui) {
                match self.state.flip(card_index) {
                    FlipOutcome::Mismatch => {
                        self.mismatch_shown_at = Some(Instant::now());
                        ctx.request_repaint_after(MISMATCH_REVEAL);
                    }
                    FlipOutcome::GameWon => {
                        stats.record(GameId::MemoryMatch, |record| {
                            record.games_played += 1;
                            record.pairs_matched += PAIR_COUNT as u32;
                        });
                    }
                    _ => {}
                }
            }

            if self.state.is_game_over() {
                ui.add_space(10.0);
                ui.heading(
                    egui::RichText::new("You matched all cards!")
                        .color(egui::Color32::GREEN)
                        .size(24.0),
                );
                if ui.button("Play Again").clicked() {
                    self.state.reset(&mut self.rng);
                    self.mismatch_shown_at = None;
                }
            }
        });
    }

    fn render_cards(&self, ui: &mut egui::Ui) -> Option<usize> {
        let available = ui.available_size();
        let cell_size = (available.x.min(480.0) / GRID_COLUMNS as f32 - 8.0).max(48.0);

        let mut clicked = None;
        for row in 0..self.state.cards().len() / GRID_COLUMNS {
            ui.horizontal(|ui| {
                ui.add_space((available.x - (cell_size + 8.0) * GRID_COLUMNS as f32) / 2.0);
                for col in 0..GRID_COLUMNS {
                    let index = row * GRID_COLUMNS + col;
                    if self.render_card(ui, index, cell_size) {
                        clicked = Some(index);
                    }
                }
            });
        }
        clicked
    }

    fn render_card(&self, ui: &mut egui::Ui, index: usize, cell_size: f32) -> bool {
        let size = egui::vec2(cell_size, cell_size);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        let face_up = self.state.is_face_up(index);
        let bg = if face_up {
            egui::Color32::from_rgb(0, 160, 170)
        } else {
            egui::Color32::from_rgb(30, 32, 40)
        };
        ui.painter().rect_filled(rect.shrink(3.0), 8.0, bg);

        let text = if face_up {
            CARD_SYMBOLS[self.state.cards()[index].symbol_index]
        } else {
            "?"
        };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(cell_size * 0.45),
            egui::Color32::WHITE,
        );

        response.clicked()
    }
}

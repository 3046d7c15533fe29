use eframe::egui;
use thinktank_core::games::sliding_puzzle::{MoveOutcome, SlidingPuzzleGameState, Tile};
use thinktank_core::games::SessionRng;
use thinktank_core::{GameId, StatsRegistry};

pub struct SlidingPuzzleScreen {
    state: SlidingPuzzleGameState,
    rng: SessionRng,
}

impl SlidingPuzzleScreen {
    pub fn new(board_size: usize) -> Self {
        let mut rng = SessionRng::from_random();
        // Board size comes pre-validated from the config layer.
        let state = SlidingPuzzleGameState::new(board_size, &mut rng)
            .unwrap_or_else(|_| SlidingPuzzleGameState::new(3, &mut rng).expect("3x3 is valid"));
        Self { state, rng }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, stats: &StatsRegistry) {
        ui.vertical_centered(|ui| {
            if self.state.is_solved() {
                ui.heading(
                    egui::RichText::new("Puzzle Completed!")
                        .color(egui::Color32::GREEN)
                        .size(28.0),
                );
            } else {
                ui.heading("Sliding Puzzle");
            }
            ui.label(format!("Moves: {}", self.state.moves_made()));
            ui.add_space(10.0);

            if let Some(position) = self.render_board(ui) {
                if self.state.attempt_move(position) == MoveOutcome::Solved {
                    stats.record_completion(GameId::SlidingPuzzle);
                }
            }

            ui.add_space(10.0);
            if self.state.is_solved() && ui.button("Restart").clicked() {
                self.state.reset(&mut self.rng);
            }
        });
    }

    /// Draws the grid and returns the clicked slot index, if any.
    fn render_board(&self, ui: &mut egui::Ui) -> Option<usize> {
        let size = self.state.size();
        let available = ui.available_size();
        let max_board_size = (available.x.min(available.y - 80.0)).min(480.0);
        let cell_size = (max_board_size / size as f32 - 4.0).max(40.0);

        let mut clicked = None;
        for row in 0..size {
            ui.horizontal(|ui| {
                ui.add_space((available.x - (cell_size + 4.0) * size as f32) / 2.0);
                for col in 0..size {
                    let index = row * size + col;
                    if self.render_tile(ui, self.state.slots()[index], cell_size) {
                        clicked = Some(index);
                    }
                }
            });
        }
        clicked
    }

    fn render_tile(&self, ui: &mut egui::Ui, tile: Tile, cell_size: f32) -> bool {
        let size = egui::vec2(cell_size, cell_size);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        let solved = self.state.is_solved();
        let (bg, text_color) = match tile {
            Tile::Empty => (egui::Color32::from_rgb(40, 40, 46), egui::Color32::TRANSPARENT),
            Tile::Numbered(_) if solved => (
                egui::Color32::from_rgb(60, 160, 90),
                egui::Color32::BLACK,
            ),
            Tile::Numbered(_) => (
                egui::Color32::from_rgb(30, 32, 40),
                egui::Color32::from_rgb(0, 247, 255),
            ),
        };

        ui.painter().rect_filled(rect.shrink(2.0), 6.0, bg);
        if let Tile::Numbered(label) = tile {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label.to_string(),
                egui::FontId::proportional(cell_size * 0.4),
                text_color,
            );
        }

        response.clicked()
    }
}

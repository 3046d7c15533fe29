use eframe::egui;
use std::time::{Duration, Instant};
use thinktank_core::games::reaction_time::{
    PressOutcome, ReactionPhase, ReactionTimeGameState, LIGHT_COLUMNS, LIGHT_ROWS,
};
use thinktank_core::games::SessionRng;
use thinktank_core::{GameId, StatsRegistry};

pub struct ReactionTimeScreen {
    state: ReactionTimeGameState,
    rng: SessionRng,
}

impl ReactionTimeScreen {
    pub fn new() -> Self {
        Self {
            state: ReactionTimeGameState::new(),
            rng: SessionRng::from_random(),
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, stats: &StatsRegistry) {
        let now = Instant::now();
        self.state.tick(now);
        if self.state.phase() == ReactionPhase::Lights {
            ctx.request_repaint_after(Duration::from_millis(16));
        }

        ui.vertical_centered(|ui| {
            ui.heading("Reaction Time");
            ui.add_space(10.0);

            match self.state.phase() {
                ReactionPhase::Idle => {
                    ui.label("Click the panel to start. Wait for the lights to go out, then click!");
                }
                ReactionPhase::Lights => {
                    ui.label("Wait for it...");
                }
                ReactionPhase::Armed => {
                    ui.label(
                        egui::RichText::new("GO!")
                            .color(egui::Color32::GREEN)
                            .size(24.0),
                    );
                }
                ReactionPhase::Result => {
                    if self.state.was_jump_start() {
                        ui.label(
                            egui::RichText::new("Jump start!")
                                .color(egui::Color32::RED)
                                .size(24.0),
                        );
                    } else if let Some(millis) = self.state.last_result_millis() {
                        ui.label(
                            egui::RichText::new(format!("{} ms", millis))
                                .color(egui::Color32::GREEN)
                                .size(28.0),
                        );
                    }
                    if let Some(best) = self.state.best_millis() {
                        ui.label(format!("Best: {} ms", best));
                    }
                    ui.weak("(Click to go again)");
                }
            }

            ui.add_space(10.0);
            if self.render_panel(ui, now) {
                let outcome = self.state.press(now, &mut self.rng);
                if matches!(
                    outcome,
                    PressOutcome::JumpStart | PressOutcome::Reaction { .. }
                ) {
                    stats.record_completion(GameId::ReactionTime);
                }
            }
        });
    }

    /// Draws the light board as one big clickable surface.
    fn render_panel(&self, ui: &mut egui::Ui, now: Instant) -> bool {
        let light_size = 36.0;
        let spacing = 10.0;
        let width = LIGHT_COLUMNS as f32 * (light_size + spacing) + spacing;
        let height = LIGHT_ROWS as f32 * (light_size + spacing) + spacing;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

        ui.painter()
            .rect_filled(rect, 8.0, egui::Color32::from_rgb(16, 16, 20));

        let lit_rows = self.state.lit_rows(now);
        let armed = self.state.phase() == ReactionPhase::Armed;
        for row in 0..LIGHT_ROWS {
            for col in 0..LIGHT_COLUMNS {
                let center = rect.min
                    + egui::vec2(
                        spacing + light_size / 2.0 + col as f32 * (light_size + spacing),
                        spacing + light_size / 2.0 + row as f32 * (light_size + spacing),
                    );
                let color = if armed {
                    egui::Color32::from_rgb(40, 200, 80)
                } else if row < lit_rows {
                    egui::Color32::from_rgb(220, 40, 40)
                } else {
                    egui::Color32::from_rgb(60, 60, 68)
                };
                ui.painter().circle_filled(center, light_size / 2.0, color);
            }
        }

        response.clicked()
    }
}

use crate::app::ThinkTankApp;
use crate::ui::game::GameScreen;
use eframe::egui;
use thinktank_core::GameId;

pub fn render(app: &mut ThinkTankApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    if app.active_game.is_some() {
        let mut leave = false;
        ui.horizontal(|ui| {
            if ui.button("< Back to games").clicked() {
                leave = true;
            }
        });
        ui.separator();

        if leave {
            app.active_game = None;
            return;
        }
        if let Some(screen) = app.active_game.as_mut() {
            screen.render(ui, ctx, &app.stats);
        }
        return;
    }

    ui.heading("Games");
    ui.label("Pick a game and give your brain a stretch.");
    ui.add_space(12.0);

    for game_id in GameId::ALL {
        let record = app.stats.read(game_id);
        ui.horizontal(|ui| {
            if ui.button(game_id.display_name()).clicked() {
                app.active_game = Some(GameScreen::start(game_id, app.config.puzzle_board_size));
            }
            ui.weak(format!("played {} times", record.games_played));
        });
    }
}

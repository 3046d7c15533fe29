use eframe::egui;

pub fn render(ui: &mut egui::Ui) {
    ui.heading("About ThinkTank");
    ui.add_space(8.0);
    ui.label(
        "ThinkTank is a personal productivity and wellness companion: \
         a dashboard, notes, a daily journal, and a handful of mini-games \
         to give your brain a stretch between tasks.",
    );
    ui.add_space(8.0);
    ui.label("Everything is stored locally on this device. No accounts, no sync, no cloud.");
}

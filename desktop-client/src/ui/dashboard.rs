use crate::app::{Page, ThinkTankApp};
use chrono::Utc;
use eframe::egui;
use thinktank_core::dashboard::DashboardSummary;

pub fn render(app: &mut ThinkTankApp, ui: &mut egui::Ui) {
    let summary = DashboardSummary::build(&app.notes, &app.journal, &app.stats, Utc::now());

    ui.heading(format!("Welcome back, {}!", app.config.display_name));
    ui.label(format!("Today: {}", Utc::now().format("%d %b %Y")));
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        overview_card(ui, "Notes", summary.note_count.to_string(), || {
            app.page = Page::Notes;
        });
        overview_card(ui, "Journal", summary.journal_count.to_string(), || {
            app.page = Page::Journal;
        });
        overview_card(ui, "Games Played", summary.games_played.to_string(), || {
            app.page = Page::Games;
        });
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Add Note").clicked() {
            app.page = Page::Notes;
            app.notes_page.adding = true;
        }
        if ui.button("Write Journal").clicked() {
            app.page = Page::Journal;
            app.journal_page.show_form = true;
        }
        if ui.button("Play Game").clicked() {
            app.page = Page::Games;
        }
    });

    ui.add_space(12.0);
    ui.heading("Recent Activity");
    if summary.recent_activity.is_empty() {
        ui.label("No recent activity yet...");
    } else {
        for item in &summary.recent_activity {
            ui.horizontal(|ui| {
                ui.label(&item.title);
                ui.weak(item.date.format("%d %b %Y").to_string());
            });
        }
    }

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label("Tip of the Day:");
        ui.label(summary.daily_tip);
    });
}

fn overview_card(ui: &mut egui::Ui, title: &str, count: String, on_click: impl FnOnce()) {
    let response = ui
        .group(|ui| {
            ui.vertical(|ui| {
                ui.strong(title);
                ui.label(egui::RichText::new(count).size(24.0));
            });
        })
        .response;
    if response.interact(egui::Sense::click()).clicked() {
        on_click();
    }
}

use crate::app::ThinkTankApp;
use chrono::NaiveDate;
use eframe::egui;

#[derive(Default)]
pub struct JournalPageState {
    pub show_form: bool,
    pub title: String,
    pub content: String,
    pub date_input: String,
    pub form_error: Option<String>,
}

pub fn render(app: &mut ThinkTankApp, ui: &mut egui::Ui) {
    ui.heading("Journal");
    ui.label("Capture your thoughts, reflections, and experiences daily.");
    ui.add_space(8.0);

    if !app.journal_page.show_form && ui.button("+ Add Entry").clicked() {
        app.journal_page.show_form = true;
    }

    if app.journal_page.show_form {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Title:");
                ui.text_edit_singleline(&mut app.journal_page.title);
            });
            ui.horizontal(|ui| {
                ui.label("Date (YYYY-MM-DD):");
                ui.text_edit_singleline(&mut app.journal_page.date_input);
            });
            ui.label("Description:");
            ui.text_edit_multiline(&mut app.journal_page.content);

            ui.horizontal(|ui| {
                if ui.button("Save Entry").clicked() {
                    save_entry(app);
                }
                if ui.button("Cancel").clicked() {
                    app.journal_page.show_form = false;
                    app.journal_page.form_error = None;
                }
            });
            if let Some(ref error) = app.journal_page.form_error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });
    }

    ui.add_space(8.0);

    if app.journal.entries().is_empty() {
        ui.label("No journal entries yet. Start writing your thoughts above.");
        return;
    }

    let mut to_delete = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in app.journal.entries() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&entry.title);
                    if ui.small_button("x").clicked() {
                        to_delete = Some(entry.id);
                    }
                });
                ui.weak(entry.date.format("%d %b %Y").to_string());
                ui.label(&entry.content);
            });
        }
    });

    if let Some(id) = to_delete {
        app.journal.delete(id);
    }
}

fn save_entry(app: &mut ThinkTankApp) {
    let date = match NaiveDate::parse_from_str(app.journal_page.date_input.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            app.journal_page.form_error = Some("Date must be YYYY-MM-DD".to_string());
            return;
        }
    };

    let title = app.journal_page.title.clone();
    let content = app.journal_page.content.clone();
    match app.journal.add(&title, &content, date) {
        Ok(_) => {
            app.journal_page.title.clear();
            app.journal_page.content.clear();
            app.journal_page.date_input.clear();
            app.journal_page.show_form = false;
            app.journal_page.form_error = None;
        }
        Err(error) => {
            app.journal_page.form_error = Some(error);
        }
    }
}

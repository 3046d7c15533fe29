use crate::app::ThinkTankApp;
use chrono::Utc;
use eframe::egui;

#[derive(Default)]
pub struct NotesPageState {
    pub search_term: String,
    pub adding: bool,
    pub new_title: String,
    pub new_content: String,
    pub editing_id: Option<u64>,
    pub editing_title: String,
    pub editing_content: String,
}

pub fn render(app: &mut ThinkTankApp, ui: &mut egui::Ui) {
    ui.heading("Notes");
    ui.label("Capture your thoughts and ideas");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.text_edit_singleline(&mut app.notes_page.search_term);
        if ui.button("Add Note").clicked() {
            app.notes_page.adding = !app.notes_page.adding;
        }
    });

    if app.notes_page.adding {
        ui.group(|ui| {
            ui.text_edit_singleline(&mut app.notes_page.new_title);
            ui.text_edit_multiline(&mut app.notes_page.new_content);
            if ui.button("Save").clicked() {
                let added = app.notes.add(
                    &app.notes_page.new_title,
                    &app.notes_page.new_content,
                    Utc::now(),
                );
                if added.is_some() {
                    app.notes_page.new_title.clear();
                    app.notes_page.new_content.clear();
                    app.notes_page.adding = false;
                }
            }
        });
    }

    ui.add_space(8.0);

    let matching_ids: Vec<u64> = app
        .notes
        .search(&app.notes_page.search_term)
        .iter()
        .map(|note| note.id)
        .collect();
    if matching_ids.is_empty() {
        ui.label("No notes found.");
        return;
    }

    let mut to_delete = None;
    let mut to_save = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for id in matching_ids {
            let Some(note) = app.notes.notes().iter().find(|note| note.id == id) else {
                continue;
            };
            let editing_this = app.notes_page.editing_id == Some(id);
            let (title, content) = (note.title.clone(), note.content.clone());

            ui.group(|ui| {
                if editing_this {
                    ui.text_edit_singleline(&mut app.notes_page.editing_title);
                    ui.text_edit_multiline(&mut app.notes_page.editing_content);
                    if ui.button("Save").clicked() {
                        to_save = Some(id);
                    }
                } else {
                    let display_title = if title.is_empty() {
                        "Untitled"
                    } else {
                        title.as_str()
                    };
                    ui.strong(display_title);
                    ui.label(&content);
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            app.notes_page.editing_id = Some(id);
                            app.notes_page.editing_title = title.clone();
                            app.notes_page.editing_content = content.clone();
                        }
                        if ui.button("Delete").clicked() {
                            to_delete = Some(id);
                        }
                    });
                }
            });
        }
    });

    if let Some(id) = to_save {
        let title = app.notes_page.editing_title.clone();
        let content = app.notes_page.editing_content.clone();
        app.notes.edit(id, &title, &content);
        app.notes_page.editing_id = None;
    }
    if let Some(id) = to_delete {
        app.notes.delete(id);
    }
}

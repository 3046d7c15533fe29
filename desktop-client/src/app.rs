use crate::config::Config;
use crate::ui;
use crate::ui::game::GameScreen;
use eframe::egui;
use thinktank_core::journal::JournalStore;
use thinktank_core::notes::NotesStore;
use thinktank_core::{FileKeyValueStore, StatsRegistry};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Dashboard,
    Notes,
    Journal,
    Games,
    About,
}

pub struct ThinkTankApp {
    pub config: Config,
    pub page: Page,
    pub notes: NotesStore,
    pub journal: JournalStore,
    pub stats: StatsRegistry,
    pub notes_page: ui::notes::NotesPageState,
    pub journal_page: ui::journal::JournalPageState,
    pub active_game: Option<GameScreen>,
}

impl ThinkTankApp {
    pub fn new(config: Config) -> Self {
        let data_dir = config.data_dir.clone();
        Self {
            config,
            page: Page::Dashboard,
            notes: NotesStore::load(Box::new(FileKeyValueStore::new(data_dir.clone()))),
            journal: JournalStore::load(Box::new(FileKeyValueStore::new(data_dir.clone()))),
            stats: StatsRegistry::new(Box::new(FileKeyValueStore::new(data_dir))),
            notes_page: ui::notes::NotesPageState::default(),
            journal_page: ui::journal::JournalPageState::default(),
            active_game: None,
        }
    }

    fn render_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("ThinkTank");
            ui.separator();
            for (page, label) in [
                (Page::Dashboard, "Dashboard"),
                (Page::Notes, "Notes"),
                (Page::Journal, "Journal"),
                (Page::Games, "Games"),
                (Page::About, "About"),
            ] {
                if ui.selectable_label(self.page == page, label).clicked() {
                    self.page = page;
                    if page != Page::Games {
                        self.active_game = None;
                    }
                }
            }
        });
    }
}

impl eframe::App for ThinkTankApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            self.render_nav(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Dashboard => ui::dashboard::render(self, ui),
            Page::Notes => ui::notes::render(self, ui),
            Page::Journal => ui::journal::render(self, ui),
            Page::Games => ui::games_menu::render(self, ui, ctx),
            Page::About => ui::about::render(ui),
        });
    }
}

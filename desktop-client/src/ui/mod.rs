pub mod about;
pub mod dashboard;
pub mod game;
pub mod games_menu;
pub mod journal;
pub mod notes;

mod app;
mod config;
mod ui;

use app::ThinkTankApp;
use clap::Parser;
use eframe::egui;
use thinktank_core::{log, logger};

#[derive(Parser)]
#[command(name = "thinktank")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("ThinkTank".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = match args.config {
        Some(path) => thinktank_core::config::ConfigManager::from_yaml_file(&path),
        None => config::get_config_manager(),
    };
    let config = config_manager.get_config()?;
    log!("Starting with data directory '{}'", config.data_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1024.0, 768.0)),
        ..Default::default()
    };

    eframe::run_native(
        "ThinkTank",
        options,
        Box::new(move |_cc| Ok(Box::new(ThinkTankApp::new(config)))),
    )?;

    Ok(())
}

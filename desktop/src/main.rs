mod app;
mod config;
mod loader;

use app::QuizzlerApp;
use config::AppConfig;
use eframe::egui;
use quiz_core::OpenTriviaSource;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = AppConfig::from_env();
    let source = Arc::new(OpenTriviaSource::new(config.source.clone())?);
    log::info!("using trivia source at {}", source.config().base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quizzler")
            .with_inner_size([520.0, 620.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Quizzler",
        options,
        Box::new(move |cc| Ok(Box::new(QuizzlerApp::new(cc, source, &config)))),
    )?;
    Ok(())
}

use std::sync::{Arc, RwLock};

use games_mania::app::GamesManiaApp;
use games_mania::config::LauncherConfig;
use games_mania::util::init_logging;

fn games_mania(config: LauncherConfig, fatal_error: Arc<RwLock<Option<String>>>) -> eframe::Result<()> {
    let mut native_options = eframe::NativeOptions::default();
    native_options.default_theme = eframe::Theme::Dark;
    native_options.initial_window_size = Some(config.window_size);
    native_options.resizable = false;
    eframe::run_native(
        "Game Menu",
        native_options,
        Box::new(move |cc| Box::new(GamesManiaApp::new(cc, config, fatal_error))),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = LauncherConfig::default();
    log::info!("loading assets from {}", config.asset_dir.display());

    let fatal_error = Arc::new(RwLock::new(None));
    games_mania(config, Arc::clone(&fatal_error))?;

    let fatal_error = fatal_error.read().map(|e| e.clone()).unwrap_or_default();
    match fatal_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

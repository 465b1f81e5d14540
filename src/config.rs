use std::path::PathBuf;

use egui::Vec2;
use lazy_static::lazy_static;

pub const ASSET_DIR_ENV: &str = "GAMES_MANIA_ASSETS";
const DEFAULT_ASSET_DIR: &str = "images";

pub const WINDOW_LEN_X: f32 = 700.0;
pub const WINDOW_LEN_Y: f32 = 500.0;

#[rustfmt::skip]
lazy_static! {
    pub static ref ASSET_DIR: PathBuf = std::env::var_os(ASSET_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));
}

#[derive(Clone, Debug)]
pub struct LauncherConfig {
    pub window_size: Vec2,
    pub menu_fps: u32,
    pub asset_dir: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            window_size: Vec2::new(WINDOW_LEN_X, WINDOW_LEN_Y),
            menu_fps: 30,
            asset_dir: ASSET_DIR.clone(),
        }
    }
}

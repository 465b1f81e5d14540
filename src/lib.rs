pub mod app;
pub mod config;
pub mod games;
pub mod host;
pub mod menu;
pub mod util;

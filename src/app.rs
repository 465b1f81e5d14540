use std::sync::{Arc, RwLock};
use std::time::Instant;

use egui::{Context, Id, LayerId, Order};

use crate::config::LauncherConfig;
use crate::games::GameId;
use crate::host::{AssetError, AssetLoader, Canvas, FrameClock, FrameInput, GameLoop, LoopControl, Viewport};
use crate::menu::{entry_at, MenuDrawer, MenuEntry};

/// How the launcher reacts to an error from constructing or stepping a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureAction {
    /// close the window and exit with an error status
    Fatal(String),
    BackToMenu,
}

/// Missing required images end the process; every other error only ends the current game.
pub fn failure_action(e: &anyhow::Error) -> FailureAction {
    match e.downcast_ref::<AssetError>() {
        Some(asset_error) => FailureAction::Fatal(asset_error.to_string()),
        None => FailureAction::BackToMenu,
    }
}

enum Screen {
    Menu,
    Playing(Box<dyn GameLoop>),
}

/// Launcher window: shows the menu and runs one game at a time inside the same window.
pub struct GamesManiaApp {
    config: LauncherConfig,
    screen: Screen,
    clock: FrameClock,
    pending_input: FrameInput,
    /// set when a failure must end the process with an error status
    fatal_error: Arc<RwLock<Option<String>>>,
}

impl GamesManiaApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: LauncherConfig,
        fatal_error: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            clock: FrameClock::from_fps(config.menu_fps, Instant::now()),
            config,
            screen: Screen::Menu,
            pending_input: FrameInput::default(),
            fatal_error,
        }
    }

    fn viewport(&self, ctx: &Context) -> Viewport {
        Viewport::new(ctx.screen_rect(), self.config.window_size)
    }

    fn enter_menu(&mut self, frame: &mut eframe::Frame) {
        self.screen = Screen::Menu;
        self.clock = FrameClock::from_fps(self.config.menu_fps, Instant::now());
        frame.set_window_title("Game Menu");
    }

    fn launch(&mut self, ctx: &Context, frame: &mut eframe::Frame, game: GameId) {
        let assets = AssetLoader::new(ctx, &self.config.asset_dir);
        match game.launch(&assets) {
            Ok(game_loop) => {
                log::info!("starting {}", game_loop.title());
                frame.set_window_title(game_loop.title());
                self.clock = FrameClock::new(game_loop.frame_duration(), Instant::now());
                self.screen = Screen::Playing(game_loop);
            }
            Err(e) => self.handle_failure(frame, game.label(), e),
        }
    }

    fn handle_failure(&mut self, frame: &mut eframe::Frame, title: &str, e: anyhow::Error) {
        match failure_action(&e) {
            FailureAction::Fatal(reason) => {
                log::error!("{title} cannot run: {reason}");
                if let Ok(mut slot) = self.fatal_error.write() {
                    *slot = Some(reason);
                }
                frame.close();
            }
            FailureAction::BackToMenu => {
                log::error!("Error running {title}: {e:#}");
                self.enter_menu(frame);
            }
        }
    }

    /// Advances the active screen by one step; false when the screen was switched.
    fn step(&mut self, ctx: &Context, frame: &mut eframe::Frame, input: &FrameInput) -> bool {
        let (title, result) = match &mut self.screen {
            Screen::Playing(game_loop) => (Some(game_loop.title()), game_loop.time_step(input)),
            Screen::Menu => (None, Ok(LoopControl::Continue)),
        };
        let Some(title) = title else {
            return self.step_menu(ctx, frame, input);
        };
        match result {
            Ok(LoopControl::Continue) => true,
            Ok(LoopControl::Exit) => {
                log::info!("leaving {title}");
                self.enter_menu(frame);
                false
            }
            Err(e) => {
                self.handle_failure(frame, title, e);
                false
            }
        }
    }

    fn step_menu(&mut self, ctx: &Context, frame: &mut eframe::Frame, input: &FrameInput) -> bool {
        match input.first_click().and_then(entry_at) {
            Some(MenuEntry::Play(game)) => {
                self.launch(ctx, frame, game);
                false
            }
            Some(MenuEntry::Quit) => {
                frame.close();
                false
            }
            None => true,
        }
    }

    fn draw(&self, ctx: &Context, viewport: Viewport) {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        let canvas = Canvas::new(&painter, viewport);
        match &self.screen {
            Screen::Menu => MenuDrawer::new(&canvas, self.pending_input.pointer).draw(),
            Screen::Playing(game_loop) => game_loop.draw(&canvas),
        }
    }
}

impl eframe::App for GamesManiaApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let viewport = self.viewport(ctx);
        self.pending_input.merge(FrameInput::read(ctx, &viewport));

        // events go to the first due step only, held keys to all of them
        for _ in 0..self.clock.due_steps(Instant::now()) {
            let input = self.pending_input.take_events();
            if !self.step(ctx, frame, &input) {
                break;
            }
        }

        self.draw(ctx, viewport);
        ctx.request_repaint_after(self.clock.until_next_step(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use anyhow::{anyhow, Context as _};
    use rstest::rstest;

    use super::*;

    fn missing_image() -> AssetError {
        AssetError {
            path: PathBuf::from("images/Shooter/space.png"),
            reason: "No such file or directory".to_string(),
        }
    }

    #[rstest]
    #[case(anyhow::Error::from(missing_image()))]
    #[case(anyhow::Error::from(missing_image()).context("starting 2-Player Shooter"))]
    fn asset_errors_are_fatal(#[case] e: anyhow::Error) {
        assert_eq!(
            failure_action(&e),
            FailureAction::Fatal("error loading image images/Shooter/space.png: No such file or directory".to_string())
        );
    }

    #[rstest]
    #[case(anyhow!("no free cell left to place food (snake length 375)"))]
    #[case(anyhow!("no room for a pipe gap").context("stepping Flappy Bird"))]
    fn other_errors_return_to_the_menu(#[case] e: anyhow::Error) {
        assert_eq!(failure_action(&e), FailureAction::BackToMenu);
    }
}

use std::time::Duration;

use egui::Key;

use crate::host::frame_clock::frame_duration_for;
use crate::host::{AssetError, AssetLoader, Canvas, FrameInput, GameLoop, LoopControl};

use drawer::{ShooterDrawer, ShooterSprites};
use mechanics::{ShipControl, ShooterConfig, ShooterInput, ShooterMechanics};

pub mod drawer;
pub mod mechanics;

pub struct ShooterLoop {
    mechanics: ShooterMechanics,
    sprites: ShooterSprites,
}

impl ShooterLoop {
    pub fn new(assets: &AssetLoader) -> Result<Self, AssetError> {
        let config = ShooterConfig::default();
        let sprites = ShooterSprites::load(assets, &config)?;
        Ok(Self {
            mechanics: ShooterMechanics::new(config),
            sprites,
        })
    }

    fn read_controls(input: &FrameInput) -> ShooterInput {
        ShooterInput {
            yellow: ShipControl {
                up: input.is_held(Key::W),
                down: input.is_held(Key::S),
                left: input.is_held(Key::A),
                right: input.is_held(Key::D),
                fire: input.was_pressed(Key::Space),
            },
            red: ShipControl {
                up: input.is_held(Key::ArrowUp),
                down: input.is_held(Key::ArrowDown),
                left: input.is_held(Key::ArrowLeft),
                right: input.is_held(Key::ArrowRight),
                fire: input.was_pressed(Key::Enter),
            },
        }
    }
}

impl GameLoop for ShooterLoop {
    fn title(&self) -> &'static str {
        "2-Player Shooter"
    }

    fn frame_duration(&self) -> Duration {
        frame_duration_for(self.mechanics.config.fps)
    }

    fn time_step(&mut self, input: &FrameInput) -> anyhow::Result<LoopControl> {
        if input.exit_requested() || self.mechanics.banner_finished() {
            return Ok(LoopControl::Exit);
        }
        let decided = self.mechanics.winner().is_some();
        self.mechanics.time_step(&Self::read_controls(input));
        if let (false, Some(winner)) = (decided, self.mechanics.winner()) {
            log::info!(
                "shooter won by {:?} (yellow health {}, red health {})",
                winner,
                self.mechanics.yellow.health,
                self.mechanics.red.health
            );
        }
        Ok(LoopControl::Continue)
    }

    fn draw(&self, canvas: &Canvas) {
        ShooterDrawer::new(canvas, &self.sprites, &self.mechanics).draw();
    }
}

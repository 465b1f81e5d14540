use std::time::Duration;

use egui::Key;

use crate::host::frame_clock::frame_duration_for;
use crate::host::{AssetLoader, Canvas, FrameInput, GameLoop, LoopControl};

use drawer::{BrickoutDrawer, BrickoutSprites};
use mechanics::{BrickoutConfig, BrickoutMechanics, GameInput, PaddleControl};

pub mod drawer;
pub mod mechanics;

pub struct BrickoutLoop {
    mechanics: BrickoutMechanics,
    sprites: BrickoutSprites,
}

impl BrickoutLoop {
    pub fn new(assets: &AssetLoader) -> Self {
        let config = BrickoutConfig::default();
        let sprites = BrickoutSprites::load(assets, &config);
        Self {
            mechanics: BrickoutMechanics::new(config, &mut rand::thread_rng()),
            sprites,
        }
    }

    fn read_control(input: &FrameInput) -> GameInput {
        let control = if input.is_held(Key::ArrowLeft) && !input.is_held(Key::ArrowRight) {
            PaddleControl::MoveLeft
        } else if input.is_held(Key::ArrowRight) && !input.is_held(Key::ArrowLeft) {
            PaddleControl::MoveRight
        } else {
            PaddleControl::None
        };
        GameInput {
            control,
            exit: input.exit_requested(),
        }
    }
}

impl GameLoop for BrickoutLoop {
    fn title(&self) -> &'static str {
        "Brickout"
    }

    fn frame_duration(&self) -> Duration {
        frame_duration_for(self.mechanics.config.fps)
    }

    fn time_step(&mut self, input: &FrameInput) -> anyhow::Result<LoopControl> {
        if self.mechanics.finished() {
            return Ok(match input.exit_requested() {
                true => LoopControl::Exit,
                false => LoopControl::Continue,
            });
        }
        self.mechanics.time_step(Self::read_control(input));
        if let Some(result) = self.mechanics.outcome() {
            log::info!("brickout {:?}, score: {}", result, self.mechanics.score);
        }
        Ok(LoopControl::Continue)
    }

    fn draw(&self, canvas: &Canvas) {
        BrickoutDrawer::new(canvas, &self.sprites, &self.mechanics).draw();
    }
}

use std::time::Duration;

use egui::Key;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::host::frame_clock::frame_duration_for;
use crate::host::{AssetError, AssetLoader, Canvas, FrameInput, GameLoop, LoopControl};

use drawer::{FlappyDrawer, FlappySprites};
use mechanics::{FlappyConfig, FlappyMechanics};

pub mod drawer;
pub mod mechanics;

pub struct FlappyLoop {
    mechanics: FlappyMechanics,
    sprites: FlappySprites,
    rng: StdRng,
}

impl FlappyLoop {
    pub fn new(assets: &AssetLoader) -> Result<Self, AssetError> {
        let config = FlappyConfig::default();
        let sprites = FlappySprites::load(assets, &config)?;
        Ok(Self {
            mechanics: FlappyMechanics::new(config),
            sprites,
            rng: StdRng::from_entropy(),
        })
    }
}

fn wants_flap(input: &FrameInput) -> bool {
    input.was_pressed(Key::Space) || input.first_click().is_some()
}

impl GameLoop for FlappyLoop {
    fn title(&self) -> &'static str {
        "Flappy Bird"
    }

    fn frame_duration(&self) -> Duration {
        frame_duration_for(self.mechanics.config.fps)
    }

    fn time_step(&mut self, input: &FrameInput) -> anyhow::Result<LoopControl> {
        if input.exit_requested() {
            return Ok(LoopControl::Exit);
        }
        if self.mechanics.is_finished() {
            return Ok(LoopControl::Continue);
        }
        if wants_flap(input) {
            self.mechanics.flap();
        }
        let frame_duration = self.frame_duration();
        self.mechanics.time_step(&mut self.rng, frame_duration)?;
        if self.mechanics.is_finished() {
            log::info!("flappy bird game over, score: {}", self.mechanics.score);
        }
        Ok(LoopControl::Continue)
    }

    fn draw(&self, canvas: &Canvas) {
        FlappyDrawer::new(canvas, &self.sprites, &self.mechanics).draw();
    }
}

#[cfg(test)]
mod tests {
    use egui::{Context, Key, Pos2};
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use crate::host::input::test_input::{clicking, holding, pressing};

    use super::*;

    fn flappy_with_images(ctx: &Context) -> (FlappyLoop, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let image_dir = dir.path().join("flappybird");
        std::fs::create_dir_all(&image_dir).unwrap();
        for name in ["background.png", "bird.gif", "pipe.png", "base.png"] {
            RgbaImage::from_pixel(8, 8, Rgba([40, 180, 60, 255]))
                .save(image_dir.join(name))
                .unwrap();
        }
        let game = FlappyLoop::new(&AssetLoader::new(ctx, dir.path())).unwrap();
        (game, dir)
    }

    #[test]
    fn space_press_flaps_within_the_step() {
        let ctx = Context::default();
        let (mut game, _dir) = flappy_with_images(&ctx);

        let control = game.time_step(&pressing(&[Key::Space])).unwrap();

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(game.mechanics.velocity, -7.5);
        assert_eq!(game.mechanics.bird_y, 242.5);
    }

    #[test]
    fn holding_space_does_not_keep_flapping() {
        let ctx = Context::default();
        let (mut game, _dir) = flappy_with_images(&ctx);
        game.time_step(&pressing(&[Key::Space])).unwrap();

        game.time_step(&holding(&[Key::Space])).unwrap();

        assert_eq!(game.mechanics.velocity, -7.0);
    }

    #[test]
    fn space_or_click_flaps() {
        assert!(wants_flap(&pressing(&[Key::Space])));
        assert!(wants_flap(&clicking(Pos2::new(10.0, 10.0))));
        // only the key-down event counts, not holding the key
        assert!(!wants_flap(&holding(&[Key::Space])));
    }
}

use std::time::Duration;

use egui::Key;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::host::frame_clock::frame_duration_for;
use crate::host::{AssetLoader, Canvas, FrameInput, GameLoop, LoopControl};

use drawer::{SnakeDrawer, SnakeSprites};
use mechanics::{Direction, SnakeConfig, SnakeMechanics};

pub mod drawer;
pub mod mechanics;

pub struct SnakeLoop {
    mechanics: SnakeMechanics,
    sprites: SnakeSprites,
    rng: StdRng,
}

impl SnakeLoop {
    pub fn new(assets: &AssetLoader) -> anyhow::Result<Self> {
        let config = SnakeConfig::default();
        let sprites = SnakeSprites::load(assets, &config);
        let mut rng = StdRng::from_entropy();
        Ok(Self {
            mechanics: SnakeMechanics::new(config, &mut rng)?,
            sprites,
            rng,
        })
    }
}

fn direction_of(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowUp => Some(Direction::Up),
        Key::ArrowDown => Some(Direction::Down),
        Key::ArrowLeft => Some(Direction::Left),
        Key::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

impl GameLoop for SnakeLoop {
    fn title(&self) -> &'static str {
        "Snake Game"
    }

    fn frame_duration(&self) -> Duration {
        frame_duration_for(self.mechanics.config.fps)
    }

    fn time_step(&mut self, input: &FrameInput) -> anyhow::Result<LoopControl> {
        if self.mechanics.is_finished() {
            return Ok(match input.exit_requested() {
                true => LoopControl::Exit,
                false => LoopControl::Continue,
            });
        }
        if input.exit_requested() {
            self.mechanics.game_over = true;
        } else {
            for direction in input.pressed.iter().filter_map(|k| direction_of(*k)) {
                self.mechanics.steer(direction);
            }
            self.mechanics.time_step(&mut self.rng)?;
        }
        if self.mechanics.is_finished() {
            log::info!("snake game over, score: {}", self.mechanics.score);
        }
        Ok(LoopControl::Continue)
    }

    fn draw(&self, canvas: &Canvas) {
        SnakeDrawer::new(canvas, &self.sprites, &self.mechanics).draw();
    }
}

#[cfg(test)]
mod tests {
    use egui::Key;

    use super::*;

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(direction_of(Key::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_of(Key::ArrowRight), Some(Direction::Right));
        assert_eq!(direction_of(Key::W), None);
    }
}

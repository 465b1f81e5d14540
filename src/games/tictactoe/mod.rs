use std::time::Duration;

use crate::host::frame_clock::frame_duration_for;
use crate::host::{Canvas, FrameInput, GameLoop, LoopControl};

use drawer::TicTacToeDrawer;
use mechanics::{TicTacToeConfig, TicTacToeMechanics};

pub mod drawer;
pub mod mechanics;

pub struct TicTacToeLoop {
    mechanics: TicTacToeMechanics,
}

impl TicTacToeLoop {
    pub fn new() -> Self {
        Self {
            mechanics: TicTacToeMechanics::new(TicTacToeConfig::default()),
        }
    }
}

impl Default for TicTacToeLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLoop for TicTacToeLoop {
    fn title(&self) -> &'static str {
        "TicTacToe"
    }

    fn frame_duration(&self) -> Duration {
        frame_duration_for(self.mechanics.config.fps)
    }

    fn time_step(&mut self, input: &FrameInput) -> anyhow::Result<LoopControl> {
        if input.exit_requested() {
            return Ok(LoopControl::Exit);
        }
        let was_finished = self.mechanics.is_finished();
        self.mechanics.time_step(input.first_click(), &mut rand::thread_rng());
        if !was_finished {
            if let Some(outcome) = self.mechanics.outcome().filter(|_| self.mechanics.is_finished()) {
                log::info!("tictactoe finished: {:?}", outcome);
            }
        }
        Ok(LoopControl::Continue)
    }

    fn draw(&self, canvas: &Canvas) {
        TicTacToeDrawer::new(canvas, &self.mechanics).draw();
    }
}

#[cfg(test)]
mod tests {
    use egui::{Key, Pos2};

    use crate::host::input::test_input::{clicking, pressing};

    use super::mechanics::Mark;
    use super::*;

    #[test]
    fn escape_leaves_at_any_time() {
        let mut game = TicTacToeLoop::new();
        assert_eq!(game.time_step(&pressing(&[Key::Escape])).unwrap(), LoopControl::Exit);
    }

    #[test]
    fn click_marks_the_cell_below_the_pointer() {
        let mut game = TicTacToeLoop::new();
        let control = game.time_step(&clicking(Pos2::new(180.0, 110.0))).unwrap();
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(game.mechanics.board.get(0, 0), Mark::Player);
    }
}

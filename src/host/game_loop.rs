use std::time::Duration;

use super::canvas::Canvas;
use super::input::FrameInput;

/// What the launcher should do after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// One running game: advanced one fixed step at a time, drawn once per host frame.
pub trait GameLoop {
    /// window title while the game is active
    fn title(&self) -> &'static str;

    fn frame_duration(&self) -> Duration;

    /// Performs one input → update → collide step.
    fn time_step(&mut self, input: &FrameInput) -> anyhow::Result<LoopControl>;

    fn draw(&self, canvas: &Canvas);
}

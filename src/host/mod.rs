pub mod algebra_2d;
pub mod assets;
pub mod canvas;
pub mod frame_clock;
pub mod game_loop;
pub mod input;

pub use assets::{AssetError, AssetLoader, Sprite, Transform};
pub use canvas::Canvas;
pub use frame_clock::FrameClock;
pub use game_loop::{GameLoop, LoopControl};
pub use input::{FrameInput, Viewport};

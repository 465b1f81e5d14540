use crate::host::{AssetLoader, GameLoop};

use brickout::BrickoutLoop;
use flappy::FlappyLoop;
use shooter::ShooterLoop;
use snake::SnakeLoop;
use tictactoe::TicTacToeLoop;

pub mod brickout;
pub mod flappy;
pub mod shooter;
pub mod snake;
pub mod tictactoe;

pub const TITLE_FONT_SIZE: f32 = 38.0;
pub const BODY_FONT_SIZE: f32 = 26.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameId {
    Snake,
    Brickout,
    TicTacToe,
    Shooter,
    FlappyBird,
}

impl GameId {
    pub fn label(&self) -> &'static str {
        match self {
            GameId::Snake => "Snake",
            GameId::Brickout => "Brickout",
            GameId::TicTacToe => "Tictactoe",
            GameId::Shooter => "2-Player Shooter",
            GameId::FlappyBird => "Flappy Bird",
        }
    }

    /// Builds a fresh run of the game. Shooter and Flappy Bird fail with an
    /// [`AssetError`](crate::host::AssetError) when their images are missing.
    pub fn launch(&self, assets: &AssetLoader) -> anyhow::Result<Box<dyn GameLoop>> {
        Ok(match self {
            GameId::Snake => Box::new(SnakeLoop::new(assets)?),
            GameId::Brickout => Box::new(BrickoutLoop::new(assets)),
            GameId::TicTacToe => Box::new(TicTacToeLoop::new()),
            GameId::Shooter => Box::new(ShooterLoop::new(assets)?),
            GameId::FlappyBird => Box::new(FlappyLoop::new(assets)?),
        })
    }
}

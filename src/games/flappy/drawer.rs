use egui::{Align2, Color32, Pos2, Vec2};

use crate::games::BODY_FONT_SIZE;
use crate::host::algebra_2d::AaBB;
use crate::host::{AssetError, AssetLoader, Canvas, Sprite, Transform};

use super::mechanics::{FlappyConfig, FlappyMechanics};

const SCORE_FONT_SIZE: f32 = 40.0;

pub struct FlappySprites {
    pub background: Sprite,
    pub bird: Sprite,
    pub pipe: Sprite,
    pub pipe_top: Sprite,
    pub ground: Sprite,
}

impl FlappySprites {
    pub fn load(assets: &AssetLoader, config: &FlappyConfig) -> Result<Self, AssetError> {
        let pixels = |v: Vec2| [v.x as u32, v.y as u32];
        let pipe = pixels(config.pipe_size);
        Ok(Self {
            background: Sprite::Image(assets.require("flappybird/background.png", pixels(config.field_size))?),
            bird: Sprite::Image(assets.require("flappybird/bird.gif", pixels(config.bird_size))?),
            pipe: Sprite::Image(assets.require("flappybird/pipe.png", pipe)?),
            pipe_top: Sprite::Image(assets.require_transformed("flappybird/pipe.png", pipe, Transform::FlipVertical)?),
            ground: Sprite::Image(assets.require(
                "flappybird/base.png",
                [config.field_size.x as u32, config.ground_height as u32],
            )?),
        })
    }
}

pub struct FlappyDrawer<'a> {
    canvas: &'a Canvas<'a>,
    sprites: &'a FlappySprites,
    game_state: &'a FlappyMechanics,
}

impl<'a> FlappyDrawer<'a> {
    pub fn new(canvas: &'a Canvas<'a>, sprites: &'a FlappySprites, game_state: &'a FlappyMechanics) -> Self {
        Self { canvas, sprites, game_state }
    }

    pub fn draw(&self) {
        if self.game_state.is_finished() {
            self.canvas.fill(Color32::BLACK);
            self.canvas.text(
                self.canvas.model_bounds().center(),
                Align2::CENTER_TOP,
                "Game Over! Press ESC to return to menu.",
                BODY_FONT_SIZE,
                Color32::from_rgb(255, 0, 0),
            );
            return;
        }

        let config = &self.game_state.config;
        self.canvas.backdrop(&self.sprites.background);
        for pipe in &self.game_state.pipes {
            self.canvas.sprite(&self.sprites.pipe_top, &pipe.top);
            self.canvas.sprite(&self.sprites.pipe, &pipe.bottom);
        }

        // two copies one screen apart make the scrolling seamless
        let ground = AaBB::from_min_size(
            Pos2::new(self.game_state.ground_x, config.ground_y()),
            Vec2::new(config.field_size.x, config.ground_height),
        );
        self.canvas.sprite(&self.sprites.ground, &ground);
        self.canvas
            .sprite(&self.sprites.ground, &ground.translate(Vec2::new(-config.field_size.x, 0.0)));

        self.canvas.sprite(&self.sprites.bird, &self.game_state.bird());
        self.canvas.text(
            Pos2::new(config.field_size.x / 2.0, 30.0),
            Align2::CENTER_TOP,
            self.game_state.score,
            SCORE_FONT_SIZE,
            Color32::BLACK,
        );
    }
}

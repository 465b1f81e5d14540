use egui::{Align2, Color32, Pos2, Vec2};

use crate::games::{BODY_FONT_SIZE, TITLE_FONT_SIZE};
use crate::host::algebra_2d::AaBB;
use crate::host::{AssetLoader, Canvas, Sprite};

use super::mechanics::{Ball, BrickoutConfig, BrickoutMechanics, GameResult};

const BORDER_COLOR: Color32 = Color32::from_rgb(150, 150, 255);
const TITLE_COLOR: Color32 = Color32::from_rgb(0, 200, 255);
const BALL_COLOR: Color32 = Color32::from_rgb(220, 20, 60);
const RESULT_COLOR: Color32 = Color32::from_rgb(255, 215, 0);

pub struct BrickoutSprites {
    pub background: Sprite,
    pub brick: Sprite,
    pub ball: Sprite,
    pub paddle: Sprite,
}

impl BrickoutSprites {
    pub fn load(assets: &AssetLoader, config: &BrickoutConfig) -> Self {
        let brick_size = config.brick_cell - Vec2::splat(config.brick_spacing);
        let ball_len = (config.ball_radius * 2.0) as u32;
        Self {
            background: assets.sprite("brickout/background.png", [700, 500], Color32::BLACK),
            brick: assets.sprite("brickout/brick.png", size_of(brick_size), RESULT_COLOR),
            ball: assets.sprite("brickout/ball.png", [ball_len + 10, ball_len], BALL_COLOR),
            paddle: assets.sprite("brickout/paddle.png", size_of(config.paddle_size), Color32::WHITE),
        }
    }
}

fn size_of(v: Vec2) -> [u32; 2] {
    [v.x.round() as u32, v.y.round() as u32]
}

pub struct BrickoutDrawer<'a> {
    canvas: &'a Canvas<'a>,
    sprites: &'a BrickoutSprites,
    game_state: &'a BrickoutMechanics,
}

impl<'a> BrickoutDrawer<'a> {
    pub fn new(canvas: &'a Canvas<'a>, sprites: &'a BrickoutSprites, game_state: &'a BrickoutMechanics) -> Self {
        Self { canvas, sprites, game_state }
    }

    pub fn draw(&self) {
        self.frame();
        match self.game_state.result {
            None => {
                for brick in &self.game_state.bricks {
                    self.canvas.sprite(&self.sprites.brick, &brick.shape);
                }
                self.canvas.sprite(&self.sprites.paddle, &self.game_state.paddle.shape);
                self.draw_ball(&self.game_state.ball);
                let field = &self.game_state.config.field;
                self.canvas.text(
                    Pos2::new(field.max.x - 100.0, field.min.y - 30.0),
                    Align2::LEFT_TOP,
                    format!("Score: {}", self.game_state.score),
                    BODY_FONT_SIZE,
                    BORDER_COLOR,
                );
            }
            Some(result) => self.summary(result),
        }
    }

    fn frame(&self) {
        let field = &self.game_state.config.field;
        self.canvas.backdrop(&self.sprites.background);
        self.canvas.rect_outline(&field.expand(3.0), 3.0, BORDER_COLOR);
        self.canvas.text(
            Pos2::new(self.canvas.model_bounds().center().x, field.min.y - 60.0),
            Align2::CENTER_TOP,
            "Brickout",
            TITLE_FONT_SIZE,
            TITLE_COLOR,
        );
    }

    fn draw_ball(&self, ball: &Ball) {
        match &self.sprites.ball {
            Sprite::Image(_) => {
                let r = ball.shape.radius;
                let min = ball.shape.center - Vec2::splat(r);
                let aabb = AaBB::from_min_size(min, Vec2::new(r * 2.0 + 10.0, r * 2.0));
                self.canvas.sprite(&self.sprites.ball, &aabb);
            }
            Sprite::Flat(color) => self.canvas.circle_filled(&ball.shape, *color),
        }
    }

    fn summary(&self, result: GameResult) {
        let center = self.canvas.model_bounds().center();
        let msg = match result {
            GameResult::Won => "You Win!",
            GameResult::Lost => "Game Over!",
        };
        self.canvas.text(
            center - Vec2::new(0.0, 30.0),
            Align2::CENTER_TOP,
            format!("{msg} Score: {}", self.game_state.score),
            BODY_FONT_SIZE,
            RESULT_COLOR,
        );
        self.canvas.text(
            center + Vec2::new(0.0, 10.0),
            Align2::CENTER_TOP,
            "Press ESC to return to menu",
            BODY_FONT_SIZE,
            Color32::WHITE,
        );
    }
}

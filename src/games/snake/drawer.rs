use egui::{Align2, Color32, Pos2};

use crate::games::{BODY_FONT_SIZE, TITLE_FONT_SIZE};
use crate::host::{AssetLoader, Canvas, Sprite, Transform};

use super::mechanics::{Direction, SnakeConfig, SnakeMechanics};

const FIELD_COLOR: Color32 = Color32::from_rgb(0, 255, 0);
const GAME_OVER_COLOR: Color32 = Color32::from_rgb(255, 0, 0);

pub struct SnakeSprites {
    pub head_up: Sprite,
    pub head_down: Sprite,
    pub head_left: Sprite,
    pub head_right: Sprite,
    pub body: Sprite,
    pub food: Sprite,
    pub background: Sprite,
}

impl SnakeSprites {
    pub fn load(assets: &AssetLoader, config: &SnakeConfig) -> Self {
        let cell = [config.cell_size as u32; 2];
        let head_color = Color32::from_rgb(0, 140, 0);
        // the head image looks down
        let head = |transform| assets.sprite_transformed("snake/snake_head.png", cell, transform, head_color);
        Self {
            head_up: head(Transform::Rotate180),
            head_down: head(Transform::None),
            head_left: head(Transform::Rotate90),
            head_right: head(Transform::Rotate270),
            body: assets.sprite("snake/snake_body.png", cell, Color32::from_rgb(0, 200, 0)),
            food: assets.sprite("snake/food.png", cell, Color32::from_rgb(230, 40, 40)),
            background: assets.sprite("snake/background.png", [700, 500], Color32::from_rgb(10, 25, 10)),
        }
    }

    fn head(&self, direction: Direction) -> &Sprite {
        match direction {
            Direction::Up => &self.head_up,
            Direction::Down => &self.head_down,
            Direction::Left => &self.head_left,
            Direction::Right => &self.head_right,
        }
    }
}

pub struct SnakeDrawer<'a> {
    canvas: &'a Canvas<'a>,
    sprites: &'a SnakeSprites,
    game_state: &'a SnakeMechanics,
}

impl<'a> SnakeDrawer<'a> {
    pub fn new(canvas: &'a Canvas<'a>, sprites: &'a SnakeSprites, game_state: &'a SnakeMechanics) -> Self {
        Self { canvas, sprites, game_state }
    }

    pub fn draw(&self) {
        let config = &self.game_state.config;
        let field = config.field();
        self.canvas.backdrop(&self.sprites.background);
        self.canvas.rect_outline(&field.expand(3.0), 3.0, FIELD_COLOR);
        self.canvas.text(
            Pos2::new(self.canvas.model_bounds().center().x, field.min.y - 60.0),
            Align2::CENTER_TOP,
            "Snake Game",
            TITLE_FONT_SIZE,
            FIELD_COLOR,
        );

        if self.game_state.game_over {
            self.game_over();
            return;
        }

        for (i, cell) in self.game_state.body.iter().enumerate() {
            let sprite = match i {
                0 => self.sprites.head(self.game_state.direction),
                _ => &self.sprites.body,
            };
            self.canvas.sprite(sprite, &config.cell_rect(*cell));
        }
        self.canvas.sprite(&self.sprites.food, &config.cell_rect(self.game_state.food));
        self.canvas.text(
            Pos2::new(field.max.x - 100.0, field.min.y - 30.0),
            Align2::LEFT_TOP,
            format!("Score: {}", self.game_state.score),
            BODY_FONT_SIZE,
            FIELD_COLOR,
        );
    }

    fn game_over(&self) {
        let center = self.canvas.model_bounds().center();
        self.canvas.text(
            center,
            Align2::CENTER_TOP,
            "Game Over! Press ESC to return to menu.",
            BODY_FONT_SIZE,
            GAME_OVER_COLOR,
        );
        self.canvas.text(
            Pos2::new(center.x, center.y - 40.0),
            Align2::LEFT_TOP,
            format!("Score: {}", self.game_state.score),
            BODY_FONT_SIZE,
            Color32::WHITE,
        );
    }
}

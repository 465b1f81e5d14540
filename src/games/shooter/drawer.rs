use egui::{Align2, Color32, Pos2, Vec2};

use crate::games::BODY_FONT_SIZE;
use crate::host::algebra_2d::AaBB;
use crate::host::{AssetError, AssetLoader, Canvas, Sprite, Transform};

use super::mechanics::{ShooterConfig, ShooterMechanics, Side};

const BANNER_FONT_SIZE: f32 = 60.0;
const YELLOW: Color32 = Color32::from_rgb(255, 255, 0);
const RED: Color32 = Color32::from_rgb(255, 0, 0);

pub struct ShooterSprites {
    pub yellow: Sprite,
    pub red: Sprite,
    pub background: Sprite,
}

impl ShooterSprites {
    pub fn load(assets: &AssetLoader, config: &ShooterConfig) -> Result<Self, AssetError> {
        let ship = [config.ship_size.x as u32, config.ship_size.y as u32];
        let field = [config.field_size.x as u32, config.field_size.y as u32];
        Ok(Self {
            yellow: Sprite::Image(assets.require_transformed(
                "Shooter/spaceship_yellow.png",
                ship,
                Transform::Rotate270,
            )?),
            red: Sprite::Image(assets.require_transformed("Shooter/spaceship_red.png", ship, Transform::Rotate90)?),
            background: Sprite::Image(assets.require("Shooter/space.png", field)?),
        })
    }

    fn ship(&self, side: Side) -> &Sprite {
        match side {
            Side::Yellow => &self.yellow,
            Side::Red => &self.red,
        }
    }
}

pub struct ShooterDrawer<'a> {
    canvas: &'a Canvas<'a>,
    sprites: &'a ShooterSprites,
    game_state: &'a ShooterMechanics,
}

impl<'a> ShooterDrawer<'a> {
    pub fn new(canvas: &'a Canvas<'a>, sprites: &'a ShooterSprites, game_state: &'a ShooterMechanics) -> Self {
        Self { canvas, sprites, game_state }
    }

    pub fn draw(&self) {
        let config = &self.game_state.config;
        self.canvas.backdrop(&self.sprites.background);
        self.canvas.rect_filled(&config.border(), Color32::BLACK);

        self.canvas.text(
            Pos2::new(10.0, 10.0),
            Align2::LEFT_TOP,
            format!("Health: {}", self.game_state.yellow.health),
            BODY_FONT_SIZE,
            Color32::WHITE,
        );
        self.canvas.text(
            Pos2::new(config.field_size.x - 10.0, 10.0),
            Align2::RIGHT_TOP,
            format!("Health: {}", self.game_state.red.health),
            BODY_FONT_SIZE,
            Color32::WHITE,
        );

        for side in [Side::Yellow, Side::Red] {
            let ship = self.game_state.ship(side);
            // the rotated image is upright, anchored at the ship's top left corner
            let size = Vec2::new(ship.shape.height(), ship.shape.width());
            self.canvas
                .sprite(self.sprites.ship(side), &AaBB::from_min_size(ship.shape.min, size));
            let color = match side {
                Side::Yellow => YELLOW,
                Side::Red => RED,
            };
            for bullet in &ship.bullets {
                self.canvas.rect_filled(bullet, color);
            }
        }

        if let Some(winner) = self.game_state.winner() {
            let text = match winner {
                Side::Yellow => "Yellow Wins!",
                Side::Red => "Red Wins!",
            };
            self.canvas.text(
                self.canvas.model_bounds().center(),
                Align2::CENTER_CENTER,
                text,
                BANNER_FONT_SIZE,
                Color32::WHITE,
            );
        }
    }
}

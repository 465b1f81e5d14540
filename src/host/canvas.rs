use egui::{pos2, Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Stroke};

use super::algebra_2d::{AaBB, Circle};
use super::assets::Sprite;
use super::input::Viewport;

/// Drawing in model coordinates on top of an egui painter.
pub struct Canvas<'a> {
    painter: &'a Painter,
    viewport: Viewport,
}

impl<'a> Canvas<'a> {
    pub fn new(painter: &'a Painter, viewport: Viewport) -> Self {
        Self { painter, viewport }
    }

    fn rect(&self, aabb: &AaBB) -> Rect {
        Rect::from_two_pos(self.viewport.to_screen(aabb.min), self.viewport.to_screen(aabb.max))
    }

    fn len(&self, len: f32) -> f32 {
        self.viewport.scale_len(len)
    }

    pub fn model_bounds(&self) -> AaBB {
        AaBB::from_min_size(Pos2::ZERO, self.viewport.model_size)
    }

    pub fn fill(&self, color: Color32) {
        self.painter.rect_filled(self.viewport.screen, Rounding::none(), color);
    }

    pub fn rect_filled(&self, aabb: &AaBB, color: Color32) {
        self.painter.rect_filled(self.rect(aabb), Rounding::none(), color);
    }

    pub fn rect_rounded(&self, aabb: &AaBB, corner_radius: f32, color: Color32) {
        self.painter
            .rect_filled(self.rect(aabb), Rounding::same(self.len(corner_radius)), color);
    }

    /// outline drawn inside the box, like a framed border
    pub fn rect_outline(&self, aabb: &AaBB, width: f32, color: Color32) {
        let inset = aabb.expand(-width / 2.0);
        self.painter
            .rect_stroke(self.rect(&inset), Rounding::none(), Stroke::new(self.len(width), color));
    }

    pub fn circle_filled(&self, circle: &Circle, color: Color32) {
        self.painter.circle_filled(
            self.viewport.to_screen(circle.center),
            self.len(circle.radius),
            color,
        );
    }

    pub fn circle_outline(&self, circle: &Circle, width: f32, color: Color32) {
        self.painter.circle_stroke(
            self.viewport.to_screen(circle.center),
            self.len(circle.radius - width / 2.0),
            Stroke::new(self.len(width), color),
        );
    }

    pub fn line(&self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.viewport.to_screen(from), self.viewport.to_screen(to)],
            Stroke::new(self.len(width), color),
        );
    }

    /// Returns the model-space box the text occupies.
    pub fn text(&self, pos: Pos2, anchor: Align2, text: impl ToString, size: f32, color: Color32) -> AaBB {
        let screen_rect = self.painter.text(
            self.viewport.to_screen(pos),
            anchor,
            text,
            FontId::proportional(self.len(size)),
            color,
        );
        AaBB {
            min: self.viewport.to_model(screen_rect.min),
            max: self.viewport.to_model(screen_rect.max),
        }
    }

    pub fn sprite(&self, sprite: &Sprite, aabb: &AaBB) {
        match sprite {
            Sprite::Image(texture) => {
                self.painter.image(
                    texture.id(),
                    self.rect(aabb),
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
            Sprite::Flat(color) => self.rect_filled(aabb, *color),
        }
    }

    /// Background image or flat color over the whole window.
    pub fn backdrop(&self, sprite: &Sprite) {
        self.sprite(sprite, &self.model_bounds());
    }
}

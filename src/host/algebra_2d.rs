use egui::{Pos2, Vec2};

/// Axis-aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Pos2,
    pub max: Pos2,
}

impl AaBB {
    pub fn from_min_size(min: Pos2, size: Vec2) -> Self {
        AaBB { min, max: min + size }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

impl AaBB {
    pub fn translate(&self, value: Vec2) -> Self {
        AaBB {
            min: self.min + value,
            max: self.max + value,
        }
    }

    /// moves the box so that its top left corner lands at `min`
    pub fn moved_to(&self, min: Pos2) -> Self {
        AaBB::from_min_size(min, self.size())
    }

    /// half-open: the right and bottom edges are outside
    pub fn contains(&self, p: Pos2) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// strict overlap; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &AaBB) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn expand(&self, amount: f32) -> Self {
        AaBB {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Pos2,
    pub radius: f32,
}

impl Circle {
    /// top, bottom, left and right points on the circle outline
    pub fn cardinal_points(&self) -> [Pos2; 4] {
        let c = self.center;
        let r = self.radius;
        [
            Pos2::new(c.x, c.y - r),
            Pos2::new(c.x, c.y + r),
            Pos2::new(c.x - r, c.y),
            Pos2::new(c.x + r, c.y),
        ]
    }
}

/// r = v - 2 (v ⋅ n) n
pub fn reflected_vector(v: Vec2, surface_normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(surface_normal) * surface_normal
}

/// for normalized vectors: cos(angle) = v1 ⋅ v2
pub fn vector_angle(v1: Vec2, v2: Vec2) -> f32 {
    v1.normalized().dot(v2.normalized()).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use egui::{Pos2, Vec2};
    use rstest::rstest;

    use super::*;

    fn unit_box() -> AaBB {
        AaBB::from_min_size(Pos2::new(10.0, 10.0), Vec2::new(10.0, 10.0))
    }

    #[rstest]
    #[case(Pos2::new(10.0, 10.0), true)]
    #[case(Pos2::new(19.9, 19.9), true)]
    #[case(Pos2::new(20.0, 15.0), false)]
    #[case(Pos2::new(15.0, 20.0), false)]
    #[case(Pos2::new(9.9, 15.0), false)]
    fn aabb_contains_is_half_open(#[case] p: Pos2, #[case] expected: bool) {
        assert_eq!(unit_box().contains(p), expected);
    }

    #[rstest]
    #[case(Pos2::new(15.0, 15.0), true)]
    #[case(Pos2::new(20.0, 10.0), false)]
    #[case(Pos2::new(10.0, 20.0), false)]
    #[case(Pos2::new(0.5, 0.5), true)]
    #[case(Pos2::new(30.0, 30.0), false)]
    fn aabb_intersects_is_strict(#[case] other_min: Pos2, #[case] expected: bool) {
        let other = AaBB::from_min_size(other_min, Vec2::new(10.0, 10.0));
        assert_eq!(unit_box().intersects(&other), expected);
        assert_eq!(other.intersects(&unit_box()), expected);
    }

    #[test]
    fn reflect_on_vertical_wall_flips_x() {
        let r = reflected_vector(Vec2::new(3.0, -2.0), Vec2::new(1.0, 0.0));
        assert_eq!(r, Vec2::new(-3.0, -2.0));
    }

    #[test]
    fn angle_between_perpendicular_vectors() {
        let a = vector_angle(Vec2::new(0.0, -1.0), Vec2::new(5.0, 0.0));
        assert!((a - FRAC_PI_2).abs() < 0.0001);
    }
}

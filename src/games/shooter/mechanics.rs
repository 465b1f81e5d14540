use std::time::Duration;

use egui::{Pos2, Vec2};

use crate::host::algebra_2d::AaBB;

#[derive(Clone, Debug)]
pub struct ShooterConfig {
    pub field_size: Vec2,
    pub ship_size: Vec2,
    pub yellow_start: Pos2,
    pub red_start: Pos2,
    pub health: i32,
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub max_bullets: usize,
    pub bullet_size: Vec2,
    /// ships stay this far above the bottom edge
    pub bottom_margin: f32,
    pub border_width: f32,
    pub winner_banner: Duration,
    pub fps: u32,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            field_size: Vec2::new(700.0, 500.0),
            ship_size: Vec2::new(55.0, 40.0),
            yellow_start: Pos2::new(100.0, 300.0),
            red_start: Pos2::new(500.0, 300.0),
            health: 10,
            ship_speed: 5.0,
            bullet_speed: 7.0,
            max_bullets: 3,
            bullet_size: Vec2::new(10.0, 5.0),
            bottom_margin: 15.0,
            border_width: 10.0,
            winner_banner: Duration::from_secs(2),
            fps: 60,
        }
    }
}

impl ShooterConfig {
    pub fn border(&self) -> AaBB {
        AaBB::from_min_size(
            Pos2::new((self.field_size.x - self.border_width) / 2.0, 0.0),
            Vec2::new(self.border_width, self.field_size.y),
        )
    }

    /// The area a ship must stay strictly inside.
    pub fn zone(&self, side: Side) -> AaBB {
        let border = self.border();
        let bottom = self.field_size.y - self.bottom_margin;
        match side {
            Side::Yellow => AaBB {
                min: Pos2::ZERO,
                max: Pos2::new(border.min.x, bottom),
            },
            Side::Red => AaBB {
                min: Pos2::new(border.max.x, 0.0),
                max: Pos2::new(self.field_size.x, bottom),
            },
        }
    }

    pub fn banner_steps(&self) -> u32 {
        (self.winner_banner.as_secs_f32() * self.fps as f32).round() as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Yellow,
    Red,
}

impl Side {
    /// horizontal bullet direction
    fn heading(&self) -> f32 {
        match self {
            Side::Yellow => 1.0,
            Side::Red => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShipControl {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ShooterInput {
    pub yellow: ShipControl,
    pub red: ShipControl,
}

#[derive(Clone, Debug)]
pub struct Ship {
    pub side: Side,
    pub shape: AaBB,
    pub health: i32,
    pub bullets: Vec<AaBB>,
}

impl Ship {
    fn new(side: Side, start: Pos2, config: &ShooterConfig) -> Self {
        Self {
            side,
            shape: AaBB::from_min_size(start, config.ship_size),
            health: config.health,
            bullets: Vec::with_capacity(config.max_bullets),
        }
    }

    fn proceed(&mut self, control: &ShipControl, speed: f32, zone: &AaBB) {
        let moves = [
            (control.left, Vec2::new(-speed, 0.0)),
            (control.right, Vec2::new(speed, 0.0)),
            (control.up, Vec2::new(0.0, -speed)),
            (control.down, Vec2::new(0.0, speed)),
        ];
        for (_, delta) in moves.into_iter().filter(|(active, _)| *active) {
            let moved = self.shape.translate(delta);
            if strictly_inside(&moved, zone) {
                self.shape = moved;
            }
        }
    }
}

fn strictly_inside(inner: &AaBB, outer: &AaBB) -> bool {
    inner.min.x > outer.min.x && inner.min.y > outer.min.y && inner.max.x < outer.max.x && inner.max.y < outer.max.y
}

#[derive(Clone, Debug)]
pub struct ShooterMechanics {
    pub config: ShooterConfig,
    pub yellow: Ship,
    pub red: Ship,
    winner: Option<Side>,
    steps_since_win: u32,
}

impl ShooterMechanics {
    pub fn new(config: ShooterConfig) -> Self {
        Self {
            yellow: Ship::new(Side::Yellow, config.yellow_start, &config),
            red: Ship::new(Side::Red, config.red_start, &config),
            config,
            winner: None,
            steps_since_win: 0,
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        match side {
            Side::Yellow => &self.yellow,
            Side::Red => &self.red,
        }
    }

    fn ship_mut(&mut self, side: Side) -> &mut Ship {
        match side {
            Side::Yellow => &mut self.yellow,
            Side::Red => &mut self.red,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// true once the winner announcement has been shown long enough
    pub fn banner_finished(&self) -> bool {
        self.winner.is_some() && self.steps_since_win >= self.config.banner_steps()
    }

    /// Spawns a bullet at the ship's facing edge unless the side already has the maximum in flight.
    pub fn fire(&mut self, side: Side) -> bool {
        let max_bullets = self.config.max_bullets;
        let bullet_size = self.config.bullet_size;
        let ship = self.ship_mut(side);
        if ship.bullets.len() >= max_bullets {
            return false;
        }
        let x = match side {
            Side::Yellow => ship.shape.max.x,
            Side::Red => ship.shape.min.x,
        };
        let y = ship.shape.min.y + (ship.shape.height() / 2.0).floor() - 2.0;
        ship.bullets.push(AaBB::from_min_size(Pos2::new(x, y), bullet_size));
        true
    }

    pub fn time_step(&mut self, input: &ShooterInput) {
        if self.winner.is_some() {
            self.steps_since_win += 1;
            return;
        }
        for (side, control) in [(Side::Yellow, &input.yellow), (Side::Red, &input.red)] {
            if control.fire {
                self.fire(side);
            }
            let zone = self.config.zone(side);
            let speed = self.config.ship_speed;
            self.ship_mut(side).proceed(control, speed, &zone);
        }
        self.advance_bullets(Side::Yellow);
        self.advance_bullets(Side::Red);

        self.winner = if self.yellow.health <= 0 {
            Some(Side::Red)
        } else if self.red.health <= 0 {
            Some(Side::Yellow)
        } else {
            None
        };
    }

    fn advance_bullets(&mut self, shooter: Side) {
        let (own, target) = match shooter {
            Side::Yellow => (&mut self.yellow, &mut self.red),
            Side::Red => (&mut self.red, &mut self.yellow),
        };
        let delta = Vec2::new(self.config.bullet_speed * shooter.heading(), 0.0);
        let field_width = self.config.field_size.x;
        own.bullets.retain_mut(|bullet| {
            *bullet = bullet.translate(delta);
            if target.shape.intersects(bullet) {
                target.health -= 1;
                log::debug!("{:?} ship hit, health left: {}", target.side, target.health);
                false
            } else {
                match shooter {
                    Side::Yellow => bullet.min.x <= field_width,
                    Side::Red => bullet.min.x >= 0.0,
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn holding(control: ShipControl) -> ShooterInput {
        ShooterInput {
            yellow: control,
            red: control,
        }
    }

    #[test]
    fn bullets_spawn_at_the_facing_edge() {
        let mut m = ShooterMechanics::new(ShooterConfig::default());
        assert!(m.fire(Side::Yellow));
        assert!(m.fire(Side::Red));
        assert_eq!(m.yellow.bullets[0].min, Pos2::new(155.0, 318.0));
        assert_eq!(m.red.bullets[0].min, Pos2::new(500.0, 318.0));
        assert_eq!(m.red.bullets[0].size(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn at_most_three_bullets_in_flight() {
        let mut m = ShooterMechanics::new(ShooterConfig::default());
        for _ in 0..3 {
            assert!(m.fire(Side::Yellow));
        }
        assert!(!m.fire(Side::Yellow));
        assert_eq!(m.yellow.bullets.len(), 3);
        assert!(m.fire(Side::Red));
    }

    #[test]
    fn a_hit_costs_exactly_one_health_and_removes_the_bullet() {
        let mut m = ShooterMechanics::new(ShooterConfig::default());
        m.red.shape = m.red.shape.moved_to(Pos2::new(400.0, 300.0));
        m.fire(Side::Yellow);

        let mut steps = 0;
        while !m.yellow.bullets.is_empty() {
            m.time_step(&ShooterInput::default());
            steps += 1;
            assert!(steps < 100);
        }

        assert_eq!(m.red.health, 9);
        assert_eq!(m.yellow.health, 10);
        for _ in 0..200 {
            m.time_step(&ShooterInput::default());
        }
        assert_eq!(m.red.health, 9);
    }

    #[test]
    fn a_miss_leaves_the_field_without_damage() {
        let mut m = ShooterMechanics::new(ShooterConfig::default());
        m.red.shape = m.red.shape.moved_to(Pos2::new(500.0, 100.0));
        m.fire(Side::Yellow);

        for _ in 0..100 {
            m.time_step(&ShooterInput::default());
        }

        assert!(m.yellow.bullets.is_empty());
        assert_eq!(m.red.health, 10);
    }

    #[rstest]
    #[case(ShipControl { left: true, ..Default::default() })]
    #[case(ShipControl { right: true, ..Default::default() })]
    #[case(ShipControl { up: true, ..Default::default() })]
    #[case(ShipControl { down: true, ..Default::default() })]
    fn ships_stay_in_their_half(#[case] control: ShipControl) {
        let config = ShooterConfig::default();
        let mut m = ShooterMechanics::new(config.clone());
        for _ in 0..200 {
            m.time_step(&holding(control));
            for side in [Side::Yellow, Side::Red] {
                let shape = m.ship(side).shape;
                assert!(strictly_inside(&shape, &config.zone(side)), "{side:?} left its zone: {shape:?}");
                assert!(!shape.intersects(&config.border()));
            }
        }
    }

    #[test]
    fn yellow_defeat_is_checked_first() {
        let mut m = ShooterMechanics::new(ShooterConfig::default());
        m.yellow.health = 0;
        m.red.health = 0;
        m.time_step(&ShooterInput::default());
        assert_eq!(m.winner(), Some(Side::Red));
    }

    #[test]
    fn banner_is_shown_for_two_seconds() {
        let mut m = ShooterMechanics::new(ShooterConfig::default());
        m.red.health = 0;
        m.time_step(&ShooterInput::default());
        assert_eq!(m.winner(), Some(Side::Yellow));

        for _ in 0..119 {
            m.time_step(&ShooterInput::default());
            assert!(!m.banner_finished());
        }
        m.time_step(&ShooterInput::default());
        assert!(m.banner_finished());
    }
}

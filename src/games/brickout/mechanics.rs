use std::f32::consts::FRAC_PI_3;

use egui::{Pos2, Vec2};
use rand::Rng;

use crate::host::algebra_2d::{reflected_vector, AaBB, Circle};

/// TOP / LEFT corner is 0/0
#[derive(Clone, Debug)]
pub struct BrickoutConfig {
    pub field: AaBB,
    pub paddle_size: Vec2,
    /// distance between paddle bottom and field bottom
    pub paddle_bottom_margin: f32,
    pub paddle_speed_per_frame: f32,
    pub ball_radius: f32,
    pub ball_start: Pos2,
    /// per axis, the horizontal sign is random
    pub ball_start_speed: f32,
    pub brick_rows: usize,
    pub brick_cols: usize,
    /// grid pitch of the brick layout
    pub brick_cell: Vec2,
    pub brick_spacing: f32,
    pub brick_score: u32,
    /// launch angle limit measured from vertical
    pub max_launch_angle: f32,
    pub fps: u32,
}

impl Default for BrickoutConfig {
    fn default() -> Self {
        let field = AaBB::from_min_size(Pos2::new(50.0, 80.0), Vec2::new(600.0, 400.0));
        Self {
            field,
            paddle_size: Vec2::new(120.0, 30.0),
            paddle_bottom_margin: 10.0,
            paddle_speed_per_frame: 10.0,
            ball_radius: 10.0,
            ball_start: Pos2::new(field.center().x, field.center().y + 80.0),
            ball_start_speed: 4.0,
            brick_rows: 6,
            brick_cols: 8,
            brick_cell: Vec2::new(600.0 / 8.0, 30.0),
            brick_spacing: 5.0,
            brick_score: 10,
            max_launch_angle: FRAC_PI_3,
            fps: 60,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaddleControl {
    None,
    MoveLeft,
    MoveRight,
}

#[derive(Copy, Clone, Debug)]
pub struct GameInput {
    pub control: PaddleControl,
    pub exit: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self {
            control: PaddleControl::None,
            exit: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Brick {
    pub shape: AaBB,
}

/// A ball is a perfect round 2D structure
#[derive(Clone, Debug)]
pub struct Ball {
    pub shape: Circle,
    pub velocity: Vec2,
}

#[derive(Clone, Debug)]
pub struct Paddle {
    pub shape: AaBB,
}

impl Paddle {
    /// moves by at most `speed` and stays inside the field
    pub fn proceed(&mut self, control: PaddleControl, speed: f32, field: &AaBB) {
        let dx = match control {
            PaddleControl::None => return,
            PaddleControl::MoveLeft => -speed,
            PaddleControl::MoveRight => speed,
        };
        let moved = self.shape.translate(Vec2::new(dx, 0.0));
        self.shape = if moved.min.x < field.min.x {
            moved.translate(Vec2::new(field.min.x - moved.min.x, 0.0))
        } else if moved.max.x > field.max.x {
            moved.translate(Vec2::new(field.max.x - moved.max.x, 0.0))
        } else {
            moved
        };
    }
}

#[derive(Clone, Debug)]
pub struct BrickoutMechanics {
    pub config: BrickoutConfig,
    pub bricks: Vec<Brick>,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u32,
    pub result: Option<GameResult>,
}

impl BrickoutMechanics {
    pub fn new<R: Rng>(config: BrickoutConfig, rng: &mut R) -> Self {
        Self {
            bricks: Self::initial_bricks(&config),
            ball: Self::initial_ball(&config, rng),
            paddle: Self::initial_paddle(&config),
            config,
            score: 0,
            result: None,
        }
    }

    /// row-major, which is also the hit test order
    pub fn initial_bricks(config: &BrickoutConfig) -> Vec<Brick> {
        let size = config.brick_cell - Vec2::splat(config.brick_spacing);
        let mut bricks = Vec::with_capacity(config.brick_rows * config.brick_cols);
        for row in 0..config.brick_rows {
            for col in 0..config.brick_cols {
                let offset = Vec2::new(col as f32 * config.brick_cell.x, row as f32 * config.brick_cell.y);
                bricks.push(Brick {
                    shape: AaBB::from_min_size(config.field.min + offset, size),
                });
            }
        }
        bricks
    }

    fn initial_ball<R: Rng>(config: &BrickoutConfig, rng: &mut R) -> Ball {
        let dx = if rng.gen_bool(0.5) { config.ball_start_speed } else { -config.ball_start_speed };
        Ball {
            shape: Circle {
                center: config.ball_start,
                radius: config.ball_radius,
            },
            velocity: Vec2::new(dx, -config.ball_start_speed),
        }
    }

    fn initial_paddle(config: &BrickoutConfig) -> Paddle {
        let field = &config.field;
        let min = Pos2::new(
            field.min.x + (field.width() - config.paddle_size.x) / 2.0,
            field.max.y - config.paddle_size.y - config.paddle_bottom_margin,
        );
        Paddle {
            shape: AaBB::from_min_size(min, config.paddle_size),
        }
    }

    pub fn finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn outcome(&self) -> Option<GameResult> {
        self.result
    }

    /// physically move one time step forward
    pub fn time_step(&mut self, input: GameInput) {
        if self.finished() {
            return;
        }
        if input.exit {
            self.result = Some(GameResult::Lost);
            return;
        }
        self.paddle.proceed(input.control, self.config.paddle_speed_per_frame, &self.config.field);
        self.ball.shape.center += self.ball.velocity;

        self.check_paddle_contact();
        self.check_wall_contact();
        self.check_brick_contact();
        self.check_game_end_situation();
    }

    fn check_paddle_contact(&mut self) {
        let ball = &mut self.ball;
        let contact_point = ball.shape.center + Vec2::new(0.0, ball.shape.radius);
        if self.paddle.shape.contains(contact_point) {
            let speed = ball.velocity.length();
            ball.velocity = launch_velocity(ball.shape.center.x, &self.paddle.shape, speed, self.config.max_launch_angle);
            log::debug!("paddle hit at x={}, new velocity {:?}", ball.shape.center.x, ball.velocity);
        }
    }

    /// Unlike a plain overlap test, a wall only reflects a ball that still moves towards it.
    /// A ball overlapping a wall while already moving away keeps its velocity,
    /// otherwise it would flip back every frame and stick to the wall.
    fn check_wall_contact(&mut self) {
        let field = &self.config.field;
        let ball = &mut self.ball;
        let Circle { center, radius } = ball.shape;

        if center.x - radius <= field.min.x && ball.velocity.x < 0.0 {
            ball.velocity = reflected_vector(ball.velocity, Vec2::new(1.0, 0.0));
        } else if center.x + radius >= field.max.x && ball.velocity.x > 0.0 {
            ball.velocity = reflected_vector(ball.velocity, Vec2::new(-1.0, 0.0));
        }
        if center.y - radius <= field.min.y && ball.velocity.y < 0.0 {
            ball.velocity = reflected_vector(ball.velocity, Vec2::new(0.0, 1.0));
        }
    }

    fn check_brick_contact(&mut self) {
        let points = self.ball.shape.cardinal_points();
        let hit = self.bricks
            .iter()
            .position(|brick| points.iter().any(|p| brick.shape.contains(*p)));

        if let Some(idx) = hit {
            let brick = self.bricks.remove(idx);
            self.score += self.config.brick_score;
            self.ball.velocity = reflected_vector(self.ball.velocity, Vec2::new(0.0, 1.0));
            log::debug!("brick {:?} hit, {} left", brick.shape.min, self.bricks.len());
        }
    }

    fn check_game_end_situation(&mut self) {
        if self.bricks.is_empty() {
            self.result = Some(GameResult::Won);
        } else if self.ball.shape.center.y > self.config.field.max.y {
            self.result = Some(GameResult::Lost);
        }
    }
}

/// The horizontal impact offset from the paddle center, normalized to [-1, 1], maps linearly onto
/// a launch angle within ±`max_angle` of straight up. The speed stays the same.
pub fn launch_velocity(hit_x: f32, paddle: &AaBB, speed: f32, max_angle: f32) -> Vec2 {
    let half_width = paddle.width() / 2.0;
    let relative_hit = ((hit_x - paddle.center().x) / half_width).clamp(-1.0, 1.0);
    let angle = relative_hit * max_angle;
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_3;

    use egui::{Pos2, Vec2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use crate::host::algebra_2d::{vector_angle, AaBB};

    use super::*;

    fn mechanics() -> BrickoutMechanics {
        BrickoutMechanics::new(BrickoutConfig::default(), &mut StdRng::seed_from_u64(7))
    }

    fn assert_eq_roughly(what: &str, a: f32, b: f32, tolerance: f32) {
        assert!(!tolerance.is_sign_negative());
        assert!((a - b).abs() <= tolerance, "'{what}' difference between {a} and {b} more than {tolerance}");
    }

    #[rstest]
    #[case(290.0)]
    #[case(300.0)]
    #[case(330.0)]
    #[case(350.0)]
    #[case(371.5)]
    #[case(409.9)]
    #[case(250.0)]
    #[case(450.0)]
    fn launch_angle_is_limited_and_speed_preserved(#[case] hit_x: f32) {
        let paddle = AaBB::from_min_size(Pos2::new(290.0, 440.0), Vec2::new(120.0, 30.0));
        let incoming = Vec2::new(3.0, 4.0);
        let speed = incoming.length();

        let outgoing = launch_velocity(hit_x, &paddle, speed, FRAC_PI_3);

        assert_eq_roughly("speed", outgoing.length(), speed, 0.0001);
        assert!(outgoing.y < 0.0);
        assert!(vector_angle(outgoing, Vec2::new(0.0, -1.0)) <= FRAC_PI_3 + 0.0001);
    }

    #[test]
    fn dead_center_hit_goes_straight_up() {
        let mut m = mechanics();
        let paddle_center = m.paddle.shape.center();
        m.ball.shape.center = Pos2::new(paddle_center.x, m.paddle.shape.min.y - m.ball.shape.radius + 2.0);
        m.ball.velocity = Vec2::new(0.0, -5.0);
        m.ball.shape.center.y -= m.ball.velocity.y;

        m.time_step(GameInput::none());

        assert_eq_roughly("dx", m.ball.velocity.x, 0.0, 0.0001);
        assert_eq_roughly("dy", m.ball.velocity.y, -5.0, 0.0001);
    }

    #[test]
    fn initial_layout() {
        let m = mechanics();
        assert_eq!(m.bricks.len(), 48);
        assert_eq!(m.bricks[0].shape, AaBB::from_min_size(Pos2::new(50.0, 80.0), Vec2::new(70.0, 25.0)));
        assert_eq!(m.bricks[1].shape.min, Pos2::new(125.0, 80.0));
        assert_eq!(m.bricks[8].shape.min, Pos2::new(50.0, 110.0));
        assert_eq!(m.paddle.shape.min, Pos2::new(290.0, 440.0));
        assert_eq!(m.ball.velocity.y, -4.0);
        assert_eq!(m.ball.velocity.x.abs(), 4.0);
    }

    #[test]
    fn brick_hit_removes_exactly_one_brick() {
        let mut m = mechanics();
        // top point lands in brick 40, right point in brick 41: only the first in order is taken
        let lowest_row = m.bricks[40].shape;
        m.ball.shape.center = Pos2::new(lowest_row.max.x - 3.0, lowest_row.max.y - 1.0);
        m.ball.velocity = Vec2::new(0.0, -4.0);

        m.time_step(GameInput::none());

        assert_eq!(m.bricks.len(), 47);
        assert_eq!(m.score, 10);
        assert_eq!(m.ball.velocity, Vec2::new(0.0, 4.0));
        assert!(!m.bricks.iter().any(|b| b.shape == lowest_row));
    }

    #[rstest]
    #[case(Pos2::new(62.0, 300.0), Vec2::new(-4.0, 4.0), Vec2::new(4.0, 4.0))]
    #[case(Pos2::new(638.0, 300.0), Vec2::new(4.0, 4.0), Vec2::new(-4.0, 4.0))]
    #[case(Pos2::new(620.0, 300.0), Vec2::new(4.0, 4.0), Vec2::new(4.0, 4.0))]
    fn side_walls_reflect_horizontal_velocity(#[case] center: Pos2, #[case] velocity: Vec2, #[case] expected: Vec2) {
        let mut m = mechanics();
        m.bricks.truncate(1);
        m.ball.shape.center = center;
        m.ball.velocity = velocity;

        m.time_step(GameInput::none());

        assert_eq!(m.ball.velocity, expected);
    }

    #[test]
    fn top_wall_reflects_vertical_velocity() {
        let mut m = mechanics();
        m.bricks = vec![Brick { shape: AaBB::from_min_size(Pos2::new(600.0, 300.0), Vec2::new(10.0, 10.0)) }];
        m.ball.shape.center = Pos2::new(300.0, 92.0);
        m.ball.velocity = Vec2::new(4.0, -4.0);

        m.time_step(GameInput::none());

        assert_eq!(m.ball.velocity, Vec2::new(4.0, 4.0));
    }

    #[rstest]
    #[case(Pos2::new(52.0, 300.0), Vec2::new(4.0, 4.0))]
    #[case(Pos2::new(648.0, 300.0), Vec2::new(-4.0, 4.0))]
    #[case(Pos2::new(300.0, 86.0), Vec2::new(4.0, 4.0))]
    fn ball_moving_away_from_overlapped_wall_keeps_velocity(#[case] center: Pos2, #[case] velocity: Vec2) {
        let mut m = mechanics();
        m.bricks = vec![Brick { shape: AaBB::from_min_size(Pos2::new(600.0, 400.0), Vec2::new(10.0, 10.0)) }];
        m.ball.shape.center = center;
        m.ball.velocity = velocity;

        for _ in 0..2 {
            m.time_step(GameInput::none());
            assert_eq!(m.ball.velocity, velocity);
        }
        assert_eq!(m.ball.shape.center, center + 2.0 * velocity);
    }

    #[test]
    fn ball_below_field_is_lost() {
        let mut m = mechanics();
        m.ball.shape.center = Pos2::new(100.0, 478.0);
        m.ball.velocity = Vec2::new(0.0, 4.0);

        m.time_step(GameInput::none());

        assert_eq!(m.result, Some(GameResult::Lost));
        let score = m.score;
        m.time_step(GameInput::none());
        assert_eq!(m.score, score);
    }

    #[test]
    fn clearing_last_brick_wins() {
        let mut m = mechanics();
        m.bricks.truncate(1);
        let last = m.bricks[0].shape;
        m.ball.shape.center = Pos2::new(last.center().x, last.max.y + 12.0);
        m.ball.velocity = Vec2::new(0.0, -4.0);

        m.time_step(GameInput::none());

        assert!(m.bricks.is_empty());
        assert_eq!(m.result, Some(GameResult::Won));
    }

    #[test]
    fn escape_ends_the_run() {
        let mut m = mechanics();
        m.time_step(GameInput { control: PaddleControl::None, exit: true });
        assert_eq!(m.result, Some(GameResult::Lost));
    }

    #[rstest]
    #[case(PaddleControl::MoveLeft, 40, 50.0)]
    #[case(PaddleControl::MoveRight, 40, 530.0)]
    #[case(PaddleControl::MoveLeft, 1, 280.0)]
    #[case(PaddleControl::None, 5, 290.0)]
    fn paddle_stays_in_field(#[case] control: PaddleControl, #[case] steps: usize, #[case] expected_min_x: f32) {
        let config = BrickoutConfig::default();
        let mut paddle = BrickoutMechanics::new(config.clone(), &mut StdRng::seed_from_u64(1)).paddle;
        for _ in 0..steps {
            paddle.proceed(control, config.paddle_speed_per_frame, &config.field);
        }
        assert_eq!(paddle.shape.min.x, expected_min_x);
    }
}

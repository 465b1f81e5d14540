use std::time::Duration;

use anyhow::bail;
use egui::{Pos2, Vec2};
use rand::Rng;

use crate::host::algebra_2d::AaBB;

#[derive(Clone, Debug)]
pub struct FlappyConfig {
    pub field_size: Vec2,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub start_velocity: f32,
    pub bird_size: Vec2,
    pub pipe_size: Vec2,
    pub pipe_gap: f32,
    /// scroll speed of pipes and ground
    pub pipe_speed: f32,
    pub pipe_interval: Duration,
    pub ground_height: f32,
    /// minimum distance of the gap from the top and from the ground
    pub gap_margin: f32,
    pub fps: u32,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            field_size: Vec2::new(700.0, 500.0),
            gravity: 0.5,
            flap_velocity: -8.0,
            start_velocity: -10.0,
            bird_size: Vec2::new(40.0, 28.0),
            pipe_size: Vec2::new(70.0, 200.0),
            pipe_gap: 170.0,
            pipe_speed: 3.0,
            pipe_interval: Duration::from_millis(1500),
            ground_height: 100.0,
            gap_margin: 60.0,
            fps: 60,
        }
    }
}

impl FlappyConfig {
    pub fn bird_x(&self) -> f32 {
        (self.field_size.x / 4.0).floor()
    }

    pub fn ground_y(&self) -> f32 {
        self.field_size.y - self.ground_height
    }
}

#[derive(Clone, Debug)]
pub struct Pipe {
    pub top: AaBB,
    pub bottom: AaBB,
    pub scored: bool,
}

#[derive(Clone, Debug)]
pub struct FlappyMechanics {
    pub config: FlappyConfig,
    pub bird_y: f32,
    pub velocity: f32,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// horizontal offset of the scrolling ground, in `[0, width)`
    pub ground_x: f32,
    pub game_over: bool,
    elapsed: Duration,
    last_spawn: Duration,
}

impl FlappyMechanics {
    pub fn new(config: FlappyConfig) -> Self {
        Self {
            bird_y: (config.field_size.y / 2.0).floor(),
            velocity: config.start_velocity,
            config,
            pipes: vec![],
            score: 0,
            ground_x: 0.0,
            game_over: false,
            elapsed: Duration::ZERO,
            last_spawn: Duration::ZERO,
        }
    }

    pub fn bird(&self) -> AaBB {
        AaBB::from_min_size(Pos2::new(self.config.bird_x(), self.bird_y), self.config.bird_size)
    }

    pub fn is_finished(&self) -> bool {
        self.game_over
    }

    pub fn flap(&mut self) {
        self.velocity = self.config.flap_velocity;
    }

    pub fn time_step<R: Rng>(&mut self, rng: &mut R, frame_duration: Duration) -> anyhow::Result<()> {
        if self.game_over {
            return Ok(());
        }
        self.elapsed += frame_duration;

        self.velocity += self.config.gravity;
        self.bird_y += self.velocity;

        if self.elapsed - self.last_spawn > self.config.pipe_interval {
            self.last_spawn = self.elapsed;
            self.spawn_pipe(rng)?;
        }

        let delta = Vec2::new(-self.config.pipe_speed, 0.0);
        for pipe in self.pipes.iter_mut() {
            pipe.top = pipe.top.translate(delta);
            pipe.bottom = pipe.bottom.translate(delta);
        }
        self.pipes.retain(|p| p.top.max.x > 0.0);
        self.ground_x = (self.ground_x - self.config.pipe_speed).rem_euclid(self.config.field_size.x);

        if self.collides() {
            log::debug!("bird crashed at y={}", self.bird_y);
            self.game_over = true;
            return Ok(());
        }

        let bird_x = self.config.bird_x();
        for pipe in self.pipes.iter_mut().filter(|p| !p.scored && p.top.max.x < bird_x) {
            pipe.scored = true;
            self.score += 1;
        }
        Ok(())
    }

    fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) -> anyhow::Result<()> {
        let config = &self.config;
        let lowest_gap_top = config.field_size.y - config.pipe_gap - config.ground_height - config.gap_margin;
        let (low, high) = (config.gap_margin as i32, lowest_gap_top as i32);
        if low > high {
            bail!("no room for a pipe gap between y={} and y={}", low, high);
        }
        let gap_top = rng.gen_range(low..=high) as f32;
        let x = config.field_size.x;
        self.pipes.push(Pipe {
            top: AaBB::from_min_size(Pos2::new(x, gap_top - config.pipe_size.y), config.pipe_size),
            bottom: AaBB::from_min_size(Pos2::new(x, gap_top + config.pipe_gap), config.pipe_size),
            scored: false,
        });
        Ok(())
    }

    fn collides(&self) -> bool {
        let bird = self.bird();
        bird.min.y < 0.0
            || bird.max.y > self.config.ground_y()
            || self
                .pipes
                .iter()
                .any(|p| bird.intersects(&p.top) || bird.intersects(&p.bottom))
    }
}

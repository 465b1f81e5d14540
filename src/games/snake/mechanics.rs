use std::collections::VecDeque;

use anyhow::anyhow;
use egui::{Pos2, Vec2};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::host::algebra_2d::AaBB;

#[derive(Clone, Debug)]
pub struct SnakeConfig {
    pub cols: i32,
    pub rows: i32,
    pub cell_size: f32,
    /// top left corner of the grid in window coordinates
    pub field_origin: Pos2,
    pub initial_len: usize,
    pub fps: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        let cols = 25;
        let cell_size = 25.0;
        Self {
            cols,
            rows: 15,
            cell_size,
            field_origin: Pos2::new(((700.0 - cols as f32 * cell_size) / 2.0).floor(), 80.0),
            initial_len: 4,
            fps: 10,
        }
    }
}

impl SnakeConfig {
    pub fn field(&self) -> AaBB {
        AaBB::from_min_size(
            self.field_origin,
            Vec2::new(self.cols as f32, self.rows as f32) * self.cell_size,
        )
    }

    pub fn cell_rect(&self, cell: Cell) -> AaBB {
        AaBB::from_min_size(
            self.field_origin + Vec2::new(cell.x as f32, cell.y as f32) * self.cell_size,
            Vec2::splat(self.cell_size),
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SnakeMechanics {
    pub config: SnakeConfig,
    /// head first
    pub body: VecDeque<Cell>,
    pub direction: Direction,
    /// latched by `steer`, applied on the next tick
    pub next_direction: Direction,
    pub grow_pending: bool,
    pub food: Cell,
    pub score: u32,
    pub game_over: bool,
}

impl SnakeMechanics {
    pub fn new<R: Rng>(config: SnakeConfig, rng: &mut R) -> anyhow::Result<Self> {
        let head = Cell::new(config.cols / 2, config.rows / 2);
        let body: VecDeque<Cell> = (0..config.initial_len as i32)
            .map(|i| Cell::new(head.x - i, head.y))
            .collect();
        // the body trails to the left, so heading left would be an instant collision
        let direction = *[Direction::Up, Direction::Down, Direction::Right]
            .choose(rng)
            .unwrap_or(&Direction::Right);

        let mut mechanics = Self {
            config,
            body,
            direction,
            next_direction: direction,
            grow_pending: false,
            food: head,
            score: 0,
            game_over: false,
        };
        mechanics.food = mechanics.random_free_cell(rng)?;
        Ok(mechanics)
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn is_finished(&self) -> bool {
        self.game_over
    }

    /// A reversal of the current direction is ignored.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.next_direction = direction;
        }
    }

    /// One grid step; fails only when food cannot be placed anymore.
    pub fn time_step<R: Rng>(&mut self, rng: &mut R) -> anyhow::Result<()> {
        if self.game_over {
            return Ok(());
        }
        self.direction = self.next_direction;
        let new_head = self.head().step(self.direction);

        if !self.can_move_to(new_head) {
            log::debug!("snake crashed at {:?}", new_head);
            self.game_over = true;
            return Ok(());
        }

        self.body.push_front(new_head);
        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }

        if new_head == self.food {
            self.grow_pending = true;
            self.score += 1;
            self.food = self.random_free_cell(rng)?;
        }
        Ok(())
    }

    /// the tail cell only counts as occupied while it is not vacated this tick
    fn can_move_to(&self, cell: Cell) -> bool {
        let vacated = if self.grow_pending { 0 } else { 1 };
        let blocking = self.body.len() - vacated;
        self.config.contains(cell) && !self.body.iter().take(blocking).any(|c| *c == cell)
    }

    fn random_free_cell<R: Rng>(&self, rng: &mut R) -> anyhow::Result<Cell> {
        let free_cells = (0..self.config.cols)
            .cartesian_product(0..self.config.rows)
            .map(|(x, y)| Cell::new(x, y))
            .filter(|c| !self.body.contains(c))
            .collect_vec();
        free_cells
            .choose(rng)
            .copied()
            .ok_or_else(|| anyhow!("no free cell left to place food (snake length {})", self.body.len()))
    }
}

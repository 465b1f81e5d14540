use std::time::Duration;

use egui::{Pos2, Vec2};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::host::algebra_2d::AaBB;
use crate::host::frame_clock::frame_duration_for;

pub const BOARD_LEN: usize = 3;

#[derive(Clone, Debug)]
pub struct TicTacToeConfig {
    /// the board area, split into 3×3 square cells
    pub board_box: AaBB,
    pub ai_delay: Duration,
    pub fps: u32,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        let box_len = 360.0;
        Self {
            board_box: AaBB::from_min_size(Pos2::new((700.0 - box_len) / 2.0, 100.0), Vec2::splat(box_len)),
            ai_delay: Duration::from_millis(500),
            fps: 30,
        }
    }
}

impl TicTacToeConfig {
    pub fn cell_len(&self) -> f32 {
        self.board_box.width() / BOARD_LEN as f32
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> AaBB {
        let len = self.cell_len();
        AaBB::from_min_size(
            self.board_box.min + Vec2::new(col as f32 * len, row as f32 * len),
            Vec2::splat(len),
        )
    }
}

/// (row, col) of the board cell under `pos`
pub fn cell_at(config: &TicTacToeConfig, pos: Pos2) -> Option<(usize, usize)> {
    if !config.board_box.contains(pos) {
        return None;
    }
    let offset = (pos - config.board_box.min) / config.cell_len();
    let clamp = |v: f32| (v.floor() as usize).min(BOARD_LEN - 1);
    Some((clamp(offset.y), clamp(offset.x)))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Ai,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinLine {
    Column(usize),
    Row(usize),
    DescendingDiagonal,
    AscendingDiagonal,
}

impl WinLine {
    /// all lines in search order
    fn all() -> impl Iterator<Item = WinLine> {
        (0..BOARD_LEN)
            .map(WinLine::Column)
            .chain((0..BOARD_LEN).map(WinLine::Row))
            .chain([WinLine::DescendingDiagonal, WinLine::AscendingDiagonal])
    }

    pub fn cells(&self) -> [(usize, usize); BOARD_LEN] {
        let mut cells = [(0, 0); BOARD_LEN];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = match *self {
                WinLine::Column(col) => (i, col),
                WinLine::Row(row) => (row, i),
                WinLine::DescendingDiagonal => (i, i),
                WinLine::AscendingDiagonal => (i, BOARD_LEN - 1 - i),
            };
        }
        cells
    }
}

/// Indexed `[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board(pub [[Mark; BOARD_LEN]; BOARD_LEN]);

impl Board {
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.0[row][col]
    }

    pub fn mark(&mut self, row: usize, col: usize, mark: Mark) {
        self.0[row][col] = mark;
    }

    pub fn is_available(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|m| *m != Mark::Empty)
    }

    pub fn check_win(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    /// The first complete line of `mark`: columns, then rows, then the diagonals.
    pub fn winning_line(&self, mark: Mark) -> Option<WinLine> {
        if mark == Mark::Empty {
            return None;
        }
        WinLine::all().find(|line| line.cells().iter().all(|(r, c)| self.get(*r, *c) == mark))
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..BOARD_LEN)
            .cartesian_product(0..BOARD_LEN)
            .filter(|(r, c)| self.is_available(*r, *c))
            .collect_vec()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    AiWins,
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    /// the player moved at the given simulated time
    AiThinking { since: Duration },
    Terminal,
}

#[derive(Clone, Debug)]
pub struct TicTacToeMechanics {
    pub config: TicTacToeConfig,
    pub board: Board,
    pub phase: Phase,
    /// simulated time since the start
    elapsed: Duration,
}

impl TicTacToeMechanics {
    pub fn new(config: TicTacToeConfig) -> Self {
        Self {
            config,
            board: Board::default(),
            phase: Phase::PlayerTurn,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Reads the result off the board; the player's line wins over the AI's.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.board.check_win(Mark::Player) {
            Some(Outcome::PlayerWins)
        } else if self.board.check_win(Mark::Ai) {
            Some(Outcome::AiWins)
        } else if self.board.is_full() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    pub fn time_step<R: Rng>(&mut self, click: Option<Pos2>, rng: &mut R) {
        self.elapsed += frame_duration_for(self.config.fps);
        match self.phase {
            Phase::PlayerTurn => {
                if let Some((row, col)) = click.and_then(|pos| cell_at(&self.config, pos)) {
                    self.player_move(row, col);
                }
            }
            Phase::AiThinking { since } => {
                if self.elapsed - since >= self.config.ai_delay {
                    self.ai_move(rng);
                }
            }
            Phase::Terminal => return,
        }
        if self.board.is_full() {
            self.phase = Phase::Terminal;
        }
    }

    fn player_move(&mut self, row: usize, col: usize) {
        if !self.board.is_available(row, col) {
            return;
        }
        self.board.mark(row, col, Mark::Player);
        self.phase = match self.board.check_win(Mark::Player) {
            true => Phase::Terminal,
            false => Phase::AiThinking { since: self.elapsed },
        };
    }

    fn ai_move<R: Rng>(&mut self, rng: &mut R) {
        if let Some((row, col)) = self.board.empty_cells().choose(rng).copied() {
            log::debug!("ai marks ({row}, {col})");
            self.board.mark(row, col, Mark::Ai);
        }
        self.phase = match self.board.check_win(Mark::Ai) {
            true => Phase::Terminal,
            false => Phase::PlayerTurn,
        };
    }
}

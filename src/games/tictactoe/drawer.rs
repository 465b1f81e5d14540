use egui::{Align2, Color32, Pos2, Vec2};

use crate::games::{BODY_FONT_SIZE, TITLE_FONT_SIZE};
use crate::host::algebra_2d::Circle;
use crate::host::Canvas;

use super::mechanics::{Mark, Outcome, TicTacToeMechanics, WinLine, BOARD_LEN};

const BG_COLOR: Color32 = Color32::from_rgb(28, 170, 156);
const LINE_COLOR: Color32 = Color32::from_rgb(23, 145, 135);
const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);
const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);
const TEXT_COLOR: Color32 = Color32::from_rgb(0, 255, 0);

const LINE_WIDTH: f32 = 15.0;
const CIRCLE_WIDTH: f32 = 15.0;
const CROSS_WIDTH: f32 = 25.0;
/// distance of the winning line ends from the board edge
const WIN_LINE_INSET: f32 = 15.0;

pub struct TicTacToeDrawer<'a> {
    canvas: &'a Canvas<'a>,
    game_state: &'a TicTacToeMechanics,
}

impl<'a> TicTacToeDrawer<'a> {
    pub fn new(canvas: &'a Canvas<'a>, game_state: &'a TicTacToeMechanics) -> Self {
        Self { canvas, game_state }
    }

    pub fn draw(&self) {
        let board_box = &self.game_state.config.board_box;
        self.canvas.fill(BG_COLOR);
        self.canvas.rect_outline(&board_box.expand(3.0), 3.0, TEXT_COLOR);
        self.canvas.text(
            Pos2::new(self.canvas.model_bounds().center().x, board_box.min.y - 60.0),
            Align2::CENTER_TOP,
            "TicTacToe",
            TITLE_FONT_SIZE,
            TEXT_COLOR,
        );
        self.grid();
        self.marks();

        if self.game_state.is_finished() {
            for mark in [Mark::Player, Mark::Ai] {
                if let Some(line) = self.game_state.board.winning_line(mark) {
                    self.winning_line(line, mark);
                    break;
                }
            }
            self.summary();
        }
    }

    fn grid(&self) {
        let board_box = &self.game_state.config.board_box;
        let len = self.game_state.config.cell_len();
        for i in 1..BOARD_LEN {
            let offset = i as f32 * len;
            self.canvas.line(
                Pos2::new(board_box.min.x, board_box.min.y + offset),
                Pos2::new(board_box.max.x, board_box.min.y + offset),
                LINE_WIDTH,
                LINE_COLOR,
            );
            self.canvas.line(
                Pos2::new(board_box.min.x + offset, board_box.min.y),
                Pos2::new(board_box.min.x + offset, board_box.max.y),
                LINE_WIDTH,
                LINE_COLOR,
            );
        }
    }

    fn marks(&self) {
        let config = &self.game_state.config;
        let len = config.cell_len();
        let space = len / 4.0;
        for row in 0..BOARD_LEN {
            for col in 0..BOARD_LEN {
                let cell = config.cell_rect(row, col);
                match self.game_state.board.get(row, col) {
                    Mark::Player => self.canvas.circle_outline(
                        &Circle {
                            center: cell.center(),
                            radius: (len / 3.0).floor(),
                        },
                        CIRCLE_WIDTH,
                        CIRCLE_COLOR,
                    ),
                    Mark::Ai => {
                        let inner = cell.expand(-space);
                        self.canvas.line(
                            Pos2::new(inner.min.x, inner.max.y),
                            Pos2::new(inner.max.x, inner.min.y),
                            CROSS_WIDTH,
                            CROSS_COLOR,
                        );
                        self.canvas.line(inner.min, inner.max, CROSS_WIDTH, CROSS_COLOR);
                    }
                    Mark::Empty => {}
                }
            }
        }
    }

    fn winning_line(&self, line: WinLine, mark: Mark) {
        let config = &self.game_state.config;
        let inner = config.board_box.expand(-WIN_LINE_INSET);
        let half = config.cell_len() / 2.0;
        let (from, to) = match line {
            WinLine::Column(col) => {
                let x = config.board_box.min.x + col as f32 * config.cell_len() + half;
                (Pos2::new(x, inner.min.y), Pos2::new(x, inner.max.y))
            }
            WinLine::Row(row) => {
                let y = config.board_box.min.y + row as f32 * config.cell_len() + half;
                (Pos2::new(inner.min.x, y), Pos2::new(inner.max.x, y))
            }
            WinLine::DescendingDiagonal => (inner.min, inner.max),
            WinLine::AscendingDiagonal => (Pos2::new(inner.min.x, inner.max.y), Pos2::new(inner.max.x, inner.min.y)),
        };
        let color = match mark {
            Mark::Player => CIRCLE_COLOR,
            _ => CROSS_COLOR,
        };
        self.canvas.line(from, to, LINE_WIDTH, color);
    }

    fn summary(&self) {
        let msg = match self.game_state.outcome() {
            Some(Outcome::PlayerWins) => "You Win!",
            Some(Outcome::AiWins) => "AI Wins!",
            _ => "It's a Tie!",
        };
        let center = self.canvas.model_bounds().center();
        self.canvas.text(center - Vec2::new(0.0, 20.0), Align2::CENTER_TOP, msg, BODY_FONT_SIZE, TEXT_COLOR);
        self.canvas.text(
            center + Vec2::new(0.0, 20.0),
            Align2::CENTER_TOP,
            "Press ESC to return",
            BODY_FONT_SIZE,
            TEXT_COLOR,
        );
    }
}

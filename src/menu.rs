use egui::{Align2, Color32, Pos2, Vec2};
use lazy_static::lazy_static;

use crate::config::{WINDOW_LEN_X, WINDOW_LEN_Y};
use crate::games::GameId;
use crate::host::algebra_2d::AaBB;
use crate::host::Canvas;

const COLUMNS: usize = 2;
const BUTTON_SIZE: Vec2 = Vec2::new(260.0, 60.0);
const BUTTON_GAP: Vec2 = Vec2::new(40.0, 18.0);
const BOTTOM_MARGIN: f32 = 30.0;
const PANEL_PADDING: f32 = 20.0;

const BG_COLOR: Color32 = Color32::from_rgb(20, 20, 30);
const PANEL_COLOR: Color32 = Color32::from_rgb(40, 40, 60);
const BUTTON_COLOR: Color32 = Color32::from_rgb(70, 70, 100);
const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(255, 200, 0);
const TEXT_COLOR: Color32 = Color32::from_rgb(230, 230, 230);
const TITLE_COLOR: Color32 = Color32::from_rgb(0, 200, 255);

const TITLE_FONT_SIZE: f32 = 60.0;
const BUTTON_FONT_SIZE: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Play(GameId),
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 6] = [
        MenuEntry::Play(GameId::Snake),
        MenuEntry::Play(GameId::Brickout),
        MenuEntry::Play(GameId::TicTacToe),
        MenuEntry::Play(GameId::Shooter),
        MenuEntry::Play(GameId::FlappyBird),
        MenuEntry::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Play(game) => game.label(),
            MenuEntry::Quit => "Quit",
        }
    }
}

lazy_static! {
    static ref MENU_LAYOUT: Vec<(MenuEntry, AaBB)> = {
        let grid = grid_bounds();
        MenuEntry::ALL
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let (row, col) = (i / COLUMNS, i % COLUMNS);
                let offset = Vec2::new(col as f32, row as f32) * (BUTTON_SIZE + BUTTON_GAP);
                (*entry, AaBB::from_min_size(grid.min + offset, BUTTON_SIZE))
            })
            .collect()
    };
}

fn rows() -> usize {
    (MenuEntry::ALL.len() + COLUMNS - 1) / COLUMNS
}

/// Area covered by the buttons: centered horizontally, resting above the bottom margin.
fn grid_bounds() -> AaBB {
    let (cols, rows) = (COLUMNS as f32, rows() as f32);
    let size = Vec2::new(
        cols * BUTTON_SIZE.x + (cols - 1.0) * BUTTON_GAP.x,
        rows * BUTTON_SIZE.y + (rows - 1.0) * BUTTON_GAP.y,
    );
    let min = Pos2::new(
        ((WINDOW_LEN_X - size.x) / 2.0).floor(),
        WINDOW_LEN_Y - size.y - BOTTOM_MARGIN,
    );
    AaBB::from_min_size(min, size)
}

pub fn menu_layout() -> &'static [(MenuEntry, AaBB)] {
    &MENU_LAYOUT
}

pub fn entry_at(pos: Pos2) -> Option<MenuEntry> {
    menu_layout()
        .iter()
        .find(|(_, bounds)| bounds.contains(pos))
        .map(|(entry, _)| *entry)
}

pub struct MenuDrawer<'a> {
    canvas: &'a Canvas<'a>,
    pointer: Option<Pos2>,
}

impl<'a> MenuDrawer<'a> {
    pub fn new(canvas: &'a Canvas<'a>, pointer: Option<Pos2>) -> Self {
        Self { canvas, pointer }
    }

    pub fn draw(&self) {
        self.canvas.fill(BG_COLOR);
        self.canvas.text(
            Pos2::new(WINDOW_LEN_X / 2.0, 50.0),
            Align2::CENTER_TOP,
            "Games Mania",
            TITLE_FONT_SIZE,
            TITLE_COLOR,
        );
        self.canvas
            .rect_rounded(&grid_bounds().expand(PANEL_PADDING), 22.0, PANEL_COLOR);

        let hovered = self.pointer.and_then(entry_at);
        for (entry, bounds) in menu_layout() {
            self.canvas.rect_rounded(bounds, 14.0, BUTTON_COLOR);
            let color = match hovered == Some(*entry) {
                true => HIGHLIGHT_COLOR,
                false => TEXT_COLOR,
            };
            self.canvas
                .text(bounds.center(), Align2::CENTER_CENTER, entry.label(), BUTTON_FONT_SIZE, color);
        }
    }
}

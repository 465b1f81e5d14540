use egui::{Pos2, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use games_mania::games::brickout::mechanics::{BrickoutConfig, BrickoutMechanics, GameInput, GameResult};
use games_mania::games::snake::mechanics::{Cell, Direction, SnakeConfig, SnakeMechanics};
use games_mania::games::tictactoe::mechanics::{Board, Mark, Outcome, TicTacToeConfig, TicTacToeMechanics, WinLine};
use games_mania::games::GameId;
use games_mania::menu::{entry_at, menu_layout, MenuEntry};

#[test]
fn brickout_dead_center_paddle_hit_bounces_straight_up() {
    let mut m = BrickoutMechanics::new(BrickoutConfig::default(), &mut StdRng::seed_from_u64(1));
    let paddle = m.paddle.shape;
    m.ball.velocity = Vec2::new(0.0, 5.0);
    m.ball.shape.center = Pos2::new(paddle.center().x, paddle.min.y - m.ball.shape.radius - 3.0);

    m.time_step(GameInput::none());

    assert!((m.ball.velocity - Vec2::new(0.0, -5.0)).length() < 0.0001, "{:?}", m.ball.velocity);
    assert_eq!(m.outcome(), None);
}

#[test]
fn brickout_missed_ball_is_lost() {
    let mut m = BrickoutMechanics::new(BrickoutConfig::default(), &mut StdRng::seed_from_u64(1));
    m.ball.velocity = Vec2::new(0.0, 5.0);
    m.ball.shape.center = Pos2::new(60.0, 470.0);

    for _ in 0..10 {
        m.time_step(GameInput::none());
    }

    assert_eq!(m.outcome(), Some(GameResult::Lost));
    assert_eq!(m.score, 0);
}

#[test]
fn tictactoe_top_row_is_a_player_win() {
    let (e, p, a) = (Mark::Empty, Mark::Player, Mark::Ai);
    let board = Board([[p, p, p], [e, a, e], [a, e, a]]);

    assert!(board.check_win(Mark::Player));
    assert!(!board.check_win(Mark::Ai));
    assert_eq!(board.winning_line(Mark::Player), Some(WinLine::Row(0)));

    let mut m = TicTacToeMechanics::new(TicTacToeConfig::default());
    m.board = board;
    assert_eq!(m.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn snake_eats_and_grows() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut m = SnakeMechanics::new(SnakeConfig::default(), &mut rng).unwrap();
    m.direction = Direction::Right;
    m.steer(Direction::Up);
    m.food = m.head().step(Direction::Up);
    let before = m.body.len();

    m.time_step(&mut rng).unwrap();
    assert_ne!(m.food, Cell::new(12, 6));
    m.food = Cell::new(0, 0);
    m.time_step(&mut rng).unwrap();

    assert!(!m.is_finished());
    assert_eq!(m.score, 1);
    assert_eq!(m.body.len(), before + 1);
    assert_eq!(m.head(), Cell::new(12, 5));
}

#[test]
fn menu_buttons_dispatch_to_their_games() {
    let expected = [
        MenuEntry::Play(GameId::Snake),
        MenuEntry::Play(GameId::Brickout),
        MenuEntry::Play(GameId::TicTacToe),
        MenuEntry::Play(GameId::Shooter),
        MenuEntry::Play(GameId::FlappyBird),
        MenuEntry::Quit,
    ];
    for ((entry, bounds), expected) in menu_layout().iter().zip(expected) {
        assert_eq!(*entry, expected);
        assert_eq!(entry_at(bounds.center()), Some(expected));
    }
    assert_eq!(entry_at(Pos2::new(10.0, 10.0)), None);
}

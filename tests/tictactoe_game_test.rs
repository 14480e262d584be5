//! End-to-end tests for the turn controller.

use std::collections::VecDeque;
use std::io::Cursor;
use strictly_noughts::{
    Board, Cell, ComputerPlayer, ConsoleInput, Game, GameError, GameEvent, HumanPlayer, IndexPolicy,
    InputError, NullObserver, Outcome, Player, PlayerKind, Position, Symbol, TurnState, rules,
};

/// Player that replays fixed (row, col) moves.
struct Scripted {
    symbol: Symbol,
    moves: VecDeque<Position>,
}

fn scripted(symbol: char, moves: &[(usize, usize)]) -> Box<dyn Player> {
    Box::new(Scripted {
        symbol: Symbol::new(symbol),
        moves: moves.iter().map(|&(r, c)| Position::new(r, c)).collect(),
    })
}

impl Player for Scripted {
    fn get_move(&mut self, _board: &Board) -> Result<Position, InputError> {
        self.moves.pop_front().ok_or(InputError::Closed)
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

fn human(symbol: char, typed: &'static str) -> Box<dyn Player> {
    Box::new(HumanPlayer::new(
        symbol,
        Box::new(ConsoleInput::new(Cursor::new(typed), Vec::new())),
    ))
}

#[test]
fn test_scenario_diagonal_win() {
    let mut game = Game::new(
        scripted('X', &[(0, 0), (1, 1), (2, 2)]),
        scripted('O', &[(0, 1), (1, 0)]),
    );
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.play(&mut events), Ok(Outcome::Player1Wins));
    assert_eq!(game.turn(), TurnState::Finished(Outcome::Player1Wins));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Player1Wins,
            winner: Some(Symbol::new('X')),
        })
    );
}

#[test]
fn test_scenario_draw() {
    // X O X / X O O / O X X
    let mut game = Game::new(
        scripted('X', &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)]),
        scripted('O', &[(0, 1), (1, 1), (1, 2), (2, 0)]),
    );
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.play(&mut events), Ok(Outcome::Draw));
    assert!(game.board().all_filled());
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Draw,
            winner: None,
        })
    );
}

#[test]
fn test_player_two_wins_column() {
    let mut game = Game::new(
        scripted('X', &[(0, 0), (0, 1), (2, 0)]),
        scripted('O', &[(0, 2), (1, 2), (0, 0), (2, 2)]),
    );
    assert_eq!(game.play(&mut NullObserver), Ok(Outcome::Player2Wins));
}

#[test]
fn test_input_closed_ends_game() {
    let mut game = Game::new(scripted('X', &[(0, 0)]), scripted('O', &[]));
    assert_eq!(
        game.play(&mut NullObserver),
        Err(GameError::Input(InputError::Closed))
    );
}

#[test]
fn test_turn_alternation() {
    let mut game = Game::new(scripted('X', &[]), scripted('O', &[]));
    let order: Vec<Symbol> = (0..3)
        .map(|_| game.current_player().unwrap().symbol())
        .collect();
    assert_eq!(order, vec![Symbol::new('X'), Symbol::new('O'), Symbol::new('X')]);
}

#[test]
fn test_occupied_cell_does_not_advance_turn() {
    let mut game = Game::new(
        scripted('X', &[(1, 1)]),
        scripted('O', &[(1, 1), (1, 1), (0, 0)]),
    );
    let mut events: Vec<GameEvent> = Vec::new();
    game.play_round(&mut events).unwrap();
    events.clear();

    assert_eq!(game.play_round(&mut events), Ok(Outcome::InProgress));
    let rejected = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CellOccupied { .. }))
        .count();
    assert_eq!(rejected, 2);
    assert_eq!(game.turn(), TurnState::Player2Turn);

    let cells = game.board().snapshot();
    assert_eq!(cells[4], Cell::Occupied(Symbol::new('X')));
    assert_eq!(cells[0], Cell::Occupied(Symbol::new('O')));
    assert_eq!(cells.iter().filter(|c| **c != Cell::Empty).count(), 2);
}

#[test]
fn test_off_board_move_is_retried() {
    let mut game = Game::new(scripted('X', &[(3, 3), (0, 0)]), scripted('O', &[]));
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.play_round(&mut events), Ok(Outcome::InProgress));
    assert!(events.contains(&GameEvent::CellOccupied {
        symbol: Symbol::new('X'),
        position: Position::new(3, 3),
    }));
    assert_eq!(game.board().snapshot()[0], Cell::Occupied(Symbol::new('X')));
}

#[test]
fn test_humans_from_typed_input() {
    // X types a bad line, O asks for a taken cell
    let mut game = Game::new(
        human('X', "0\nhello\n4\n8\n"),
        human('O', "3\n4\n5\n"),
    );
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.play(&mut events), Ok(Outcome::Player1Wins));
    assert!(events.iter().any(|e| matches!(e, GameEvent::CellOccupied { .. })));
}

#[test]
fn test_last_cell_policy_in_game() {
    let x = HumanPlayer::new('X', Box::new(ConsoleInput::new(Cursor::new("42\n"), Vec::new())))
        .with_policy(IndexPolicy::LastCell);
    let mut game = Game::new(Box::new(x), scripted('O', &[]));
    game.play_round(&mut NullObserver).unwrap();
    assert_eq!(game.board().snapshot()[8], Cell::Occupied(Symbol::new('X')));
}

#[test]
fn test_computer_games_always_finish() {
    for seed in 0..50 {
        let mut game = Game::new(
            Box::new(ComputerPlayer::seeded('X', "random", seed)),
            Box::new(ComputerPlayer::seeded('O', "whatever", seed + 1000)),
        );
        let outcome = game.play(&mut NullObserver).unwrap();
        assert!(outcome.is_terminal());
        let cells = game.board().snapshot();
        assert_eq!(
            outcome,
            rules::evaluate(&cells, Symbol::new('X'), Symbol::new('O'))
        );
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let mut game = Game::new(
            Box::new(ComputerPlayer::seeded('X', "random", 11)),
            Box::new(ComputerPlayer::seeded('O', "random", 12)),
        );
        let outcome = game.play(&mut NullObserver).unwrap();
        (outcome, game.board().snapshot())
    };
    assert_eq!(play(), play());
}

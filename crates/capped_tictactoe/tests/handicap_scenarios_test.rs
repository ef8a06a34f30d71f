//! End-to-end scenarios for the handicap modes.

use capped_tictactoe::{
    Engine, EngineError, GameState, GameStatus, Mode, Outcome, Phase, Player, Position, Square,
};

/// Finds a seed whose forced moves after `opening` satisfy `accept`.
fn find_seed(mode: Mode, opening: &[usize], accept: impl Fn(&GameState) -> bool) -> Engine {
    for seed in 0..1_000 {
        let mut engine = Engine::seeded(seed);
        engine.select_mode(mode);
        for &index in opening {
            engine.apply_move(index).expect("legal opening move");
        }
        if engine.state().is_some_and(&accept) {
            return engine;
        }
    }
    panic!("no seed produced the wanted forced moves");
}

fn marks(state: &GameState, player: Player) -> Vec<usize> {
    Position::ALL
        .iter()
        .filter(|pos| state.board().get(**pos) == Square::Occupied(player))
        .map(|pos| pos.to_index())
        .collect()
}

#[test]
fn test_mode1_scenario_second_turn_forced_x() {
    for seed in 0..200 {
        let mut engine = Engine::seeded(seed);
        engine.select_mode(Mode::Mode1);
        assert_eq!(engine.apply_move(0), Ok(Outcome::Continue));
        assert_eq!(engine.apply_move(4), Ok(Outcome::Continue));

        let state = engine.state().expect("game running");
        let xs = marks(state, Player::X);
        assert_eq!(xs.len(), 2);
        assert_eq!(marks(state, Player::O), vec![4]);
        assert!(xs.contains(&0));
        assert!(xs.iter().all(|i| *i != 4));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.turn_count(), 3);
    }
}

#[test]
fn test_mode2_scenario_second_turns_forced_for_both() {
    for seed in 0..200 {
        let mut engine = Engine::seeded(seed);
        engine.select_mode(Mode::Mode2);
        engine.apply_move(8).expect("legal move");
        engine.apply_move(2).expect("legal move");

        let state = engine.state().expect("game running");
        assert_eq!(marks(state, Player::X).len(), 2);
        assert_eq!(marks(state, Player::O).len(), 2);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.board().filled(), 4);
    }
}

#[test]
fn test_no_handicap_on_first_turn() {
    let mut engine = Engine::seeded(11);
    engine.select_mode(Mode::Mode2);
    engine.apply_move(4).expect("legal move");
    let state = engine.state().expect("game running");
    assert_eq!(state.board().filled(), 1);
    assert_eq!(state.current_player(), Player::O);
}

#[test]
fn test_occupied_move_keeps_board_and_player() {
    let mut engine = Engine::seeded(5);
    engine.select_mode(Mode::Mode1);
    engine.apply_move(0).expect("legal move");
    engine.apply_move(4).expect("legal move");
    let before = engine.state().cloned().expect("game running");

    for index in marks(&before, Player::X)
        .into_iter()
        .chain(marks(&before, Player::O))
    {
        assert_eq!(engine.apply_move(index), Ok(Outcome::IgnoredOccupied));
        assert_eq!(engine.state(), Some(&before));
    }
}

#[test]
fn test_mode1_draw_reached_by_legal_moves() {
    // Target: X O X / X O O / O X X
    let x_cells = [0, 2, 3, 7, 8];
    let engine = find_seed(Mode::Mode1, &[0, 1], |s| {
        marks(s, Player::X).iter().all(|i| x_cells.contains(i))
    });
    let mut engine = engine;
    let state = engine.state().expect("game running").clone();
    let mut x_left: Vec<usize> = x_cells
        .iter()
        .copied()
        .filter(|i| !marks(&state, Player::X).contains(i))
        .collect();
    let mut o_left = vec![4, 5, 6];

    let mut outcome = Outcome::Continue;
    while !outcome.is_terminal() {
        let player = engine.state().expect("game running").current_player();
        let index = match player {
            Player::X => x_left.remove(0),
            Player::O => o_left.remove(0),
        };
        outcome = engine.apply_move(index).expect("legal move");
    }

    assert_eq!(outcome, Outcome::Draw);
    let final_state = engine.state().expect("finished game kept");
    assert_eq!(final_state.status(), GameStatus::Draw);
    assert_eq!(final_state.turn_count(), 9);
    assert!(matches!(engine.phase(), Phase::Finished(_)));
}

#[test]
fn test_mode2_forced_moves_keep_draw_reachable() {
    let x_cells = [0, 2, 3, 7, 8];
    let o_cells = [1, 4, 5, 6];
    let mut engine = find_seed(Mode::Mode2, &[0, 1], |s| {
        marks(s, Player::X).iter().all(|i| x_cells.contains(i))
            && marks(s, Player::O).iter().all(|i| o_cells.contains(i))
    });

    let mut outcome = Outcome::Continue;
    while !outcome.is_terminal() {
        let state = engine.state().expect("game running");
        let wanted: &[usize] = match state.current_player() {
            Player::X => &x_cells,
            Player::O => &o_cells,
        };
        let index = wanted
            .iter()
            .copied()
            .find(|i| state.board().squares()[*i] == Square::Empty)
            .expect("a target square is free");
        outcome = engine.apply_move(index).expect("legal move");
    }
    assert_eq!(outcome, Outcome::Draw);
}

#[test]
fn test_x_wins_top_row_after_handicap() {
    let mut engine = find_seed(Mode::Mode1, &[0, 3], |s| {
        let xs = marks(s, Player::X);
        xs.contains(&1) || xs.contains(&2)
    });
    let state = engine.state().expect("game running").clone();
    let missing = if marks(&state, Player::X).contains(&1) { 2 } else { 1 };

    assert_eq!(engine.apply_move(6), Ok(Outcome::Continue));
    assert_eq!(engine.apply_move(missing), Ok(Outcome::Win(Player::X)));
    assert_eq!(
        engine.state().map(|s| s.status()),
        Some(GameStatus::Won(Player::X))
    );
    assert!(matches!(
        engine.apply_move(5),
        Err(EngineError::InvalidModeTransition(_))
    ));
}

#[test]
fn test_forced_moves_only_fill_empty_squares() {
    for seed in 0..300 {
        for mode in [Mode::Mode1, Mode::Mode2] {
            let mut engine = Engine::seeded(seed);
            engine.select_mode(mode);
            engine.apply_move(4).expect("legal move");
            engine.apply_move(0).expect("legal move");
            let state = engine.state().expect("game running");
            // The human marks survive, so the forced ones went elsewhere.
            assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
            assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Player::O));
            assert_eq!(state.turn_count() as usize, state.board().filled());
        }
    }
}

use proptest::prelude::*;
use tictactoe::{evaluate, Board, MatchState, Move, Outcome, BOARD_SIZE};

/// Play a sequence of candidate moves from an empty board, skipping
/// invalid ones and stopping at a terminal outcome. Every board this
/// produces is reachable by legal alternating play.
fn reachable_state(candidates: &[(usize, usize)]) -> (MatchState, Outcome) {
    let mut state = MatchState::new();
    let mut outcome = Outcome::InProgress;
    for &(r, c) in candidates {
        if outcome != Outcome::InProgress {
            break;
        }
        let mv = Move::new(r, c);
        if state.board().is_valid_move(mv) {
            outcome = state.play(mv).unwrap();
        }
    }
    (state, outcome)
}

fn candidate_moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validity_predicate_matches_bounds_and_occupancy(
        candidates in candidate_moves(),
        row in 0..2 * BOARD_SIZE,
        col in 0..2 * BOARD_SIZE,
    ) {
        let (state, _) = reachable_state(&candidates);
        let expected = row < BOARD_SIZE
            && col < BOARD_SIZE
            && state.board().cell(row, col).is_some_and(|cell| cell.is_empty());
        prop_assert_eq!(state.board().is_valid_move(Move::new(row, col)), expected);
    }

    #[test]
    fn evaluate_is_pure_and_idempotent(candidates in candidate_moves()) {
        let (state, _) = reachable_state(&candidates);
        let before = *state.board();
        let first = evaluate(state.board());
        let second = evaluate(state.board());
        prop_assert_eq!(first, second);
        prop_assert_eq!(&before, state.board());
    }

    #[test]
    fn a_win_only_goes_to_the_last_mover(candidates in candidate_moves()) {
        let mut state = MatchState::new();
        for &(r, c) in &candidates {
            let mv = Move::new(r, c);
            if !state.board().is_valid_move(mv) {
                continue;
            }
            let mover = state.current();
            let outcome = state.play(mv).unwrap();
            if let Outcome::Win(winner) = outcome {
                prop_assert_eq!(winner, mover);
                return Ok(());
            }
        }
    }

    #[test]
    fn terminal_outcomes_are_mutually_exclusive(candidates in candidate_moves()) {
        // A drawn board is full with no winning line; a won board has a
        // line. evaluate can only ever report one of them.
        let (state, outcome) = reachable_state(&candidates);
        match outcome {
            Outcome::Draw => prop_assert!(state.board().is_full()),
            Outcome::Win(_) => prop_assert_eq!(evaluate(state.board()), outcome),
            Outcome::InProgress => prop_assert!(!state.board().is_full()),
        }
    }

    #[test]
    fn play_never_mutates_on_error(candidates in candidate_moves()) {
        let (mut state, outcome) = reachable_state(&candidates);
        prop_assume!(outcome == Outcome::InProgress);
        // find an occupied cell, if any, and replay onto it
        let occupied = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .find(|&(r, c)| !state.board().cell(r, c).unwrap().is_empty());
        if let Some((r, c)) = occupied {
            let before = state;
            prop_assert!(state.play(Move::new(r, c)).is_err());
            prop_assert_eq!(before.board(), state.board());
            prop_assert_eq!(before.current(), state.current());
        }
    }
}

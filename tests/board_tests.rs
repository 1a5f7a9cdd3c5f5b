use tictactoe::{Board, BoardError, Cell, Move, Player, BOARD_SIZE};

#[test]
fn test_empty_board_all_moves_valid() {
    let board = Board::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert!(board.is_valid_move(Move::new(r, c)));
        }
    }
}

#[test]
fn test_out_of_bounds_moves_invalid() {
    let board = Board::new();
    assert!(!board.is_valid_move(Move::new(3, 0)));
    assert!(!board.is_valid_move(Move::new(0, 3)));
    assert!(!board.is_valid_move(Move::new(3, 3)));
    assert!(!board.is_valid_move(Move::new(usize::MAX, 0)));
}

#[test]
fn test_occupied_cell_invalid() {
    let mut board = Board::new();
    board.apply(Move::new(1, 1), Player::One).unwrap();
    assert!(!board.is_valid_move(Move::new(1, 1)));
    // the rest of the board is still open
    assert!(board.is_valid_move(Move::new(0, 0)));
}

#[test]
fn test_apply_sets_mark() {
    let mut board = Board::new();
    board.apply(Move::new(2, 0), Player::Two).unwrap();
    assert_eq!(board.cell(2, 0), Some(Cell::Mark(Player::Two)));
    assert_eq!(board.cell(0, 0), Some(Cell::Empty));
}

#[test]
fn test_apply_errors() {
    let mut board = Board::new();
    assert_eq!(
        board.apply(Move::new(5, 1), Player::One).unwrap_err(),
        BoardError::OutOfBounds
    );
    board.apply(Move::new(0, 0), Player::One).unwrap();
    assert_eq!(
        board.apply(Move::new(0, 0), Player::Two).unwrap_err(),
        BoardError::CellOccupied
    );
    // the failed apply left the original mark in place
    assert_eq!(board.cell(0, 0), Some(Cell::Mark(Player::One)));
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());
    let mut player = Player::One;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            board.apply(Move::new(r, c), player).unwrap();
            player = player.opponent();
        }
    }
    assert!(board.is_full());
    assert!(!board.is_valid_move(Move::new(1, 1)));
}

#[test]
fn test_cell_out_of_bounds_is_none() {
    let board = Board::new();
    assert_eq!(board.cell(3, 0), None);
    assert_eq!(board.cell(0, 3), None);
}

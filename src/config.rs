/// Side length of the square game board.
pub const BOARD_SIZE: usize = 3;

pub const BOARD_ROWS: usize = 12;
pub const BOARD_COLS: usize = 8;

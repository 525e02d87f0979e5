mod movepath;
mod position;
mod square;
mod tile;

pub use movepath::{Move, MAXIMUM_MOVE_SIZE, PATH_END};
pub use position::{Board, Position};
pub use square::{BOARD_COLS, BOARD_ROWS};
pub use tile::{Color, Tile};

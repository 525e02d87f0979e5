//! Terminal-state detection: the game ends once every ant on the board is
//! gone.

use crate::board::Color;
use crate::state::GameState;

/// True once the board holds no ants for either side.
pub fn is_terminal(state: &GameState) -> bool {
    state.pos.board.ants_all_removed()
}

/// The side with ants remaining, if exactly one side has any left. Can be
/// `Some` before `is_terminal` does, since one side can be fully captured
/// while the other still holds ants on the board.
pub fn winner(state: &GameState) -> Option<Color> {
    let pos = &state.pos;
    let white = pos.board.ants_on_board(Color::White);
    let black = pos.board.ants_on_board(Color::Black);
    match (white, black) {
        (0, 0) => None,
        (0, _) => Some(Color::Black),
        (_, 0) => Some(Color::White),
        _ => None,
    }
}

//! Move ordering for the successors the search engine is about to recurse
//! into.

use crate::evaluator::evaluate;
use crate::state::GameState;

/// Orders `children` by ascending evaluator value of the resulting state.
///
/// This is the same direction the move ordering used on the original
/// reference implementation, carried over unchanged even though it puts the
/// worst-looking children first for a maximizing node — alpha-beta pruning
/// is still correct either way, it just prunes less than descending order
/// would at a Max node.
pub fn order<T>(mut children: Vec<(T, GameState, f64)>) -> Vec<(T, GameState, f64)> {
    children.sort_by_key(|(_, state, _)| evaluate(state));
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Position, Tile};

    fn state_with_extra_white_ant(at: (usize, usize)) -> GameState {
        let mut board = Board::starting();
        board.set(at.0, at.1, Tile::White);
        let pos = Position { board, score: [0, 0], turn: Color::White };
        GameState::new(pos, Color::White)
    }

    #[test]
    fn orders_ascending_by_evaluation() {
        let worse = GameState::starting(Color::White);
        let better = state_with_extra_white_ant((5, 0));

        let children = vec![(1u8, better.clone(), 0.0), (2u8, worse.clone(), 0.0)];
        let ordered = order(children);

        assert_eq!(ordered[0].1, worse);
        assert_eq!(ordered[1].1, better);
    }
}

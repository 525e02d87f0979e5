//! Static position evaluation: the per-cell position-value table and the
//! utility function the search engine falls back on at the depth cutoff.

use crate::board::{Color, Position, BOARD_COLS, BOARD_ROWS};
use crate::movegen::{move_once, which_moves};
use crate::state::GameState;
use crate::types::Utility;

/// Per-cell positional value, indexed `[color][row][col]`. Rewards holding
/// back rows (protects against being jumped from behind) and owning the
/// far edge columns (can't be captured by a jump that lands off the board).
const POSITION_VALUE: [[[i32; BOARD_COLS]; BOARD_ROWS]; 2] = [
    // White
    [
        [0, 2, 0, 2, 0, 2, 0, 2],
        [2, 0, 2, 0, 2, 0, 2, 0],
        [0, 2, 0, 2, 0, 2, 0, 2],
        [5, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 5],
        [5, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 5],
        [5, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 5],
        [3, 0, 3, 0, 3, 0, 3, 0],
        [0, 3, 0, 3, 0, 3, 0, 3],
        [3, 0, 3, 0, 3, 0, 3, 0],
    ],
    // Black
    [
        [0, 3, 0, 3, 0, 3, 0, 3],
        [3, 0, 3, 0, 3, 0, 3, 0],
        [0, 3, 0, 3, 0, 3, 0, 3],
        [5, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 5],
        [5, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 5],
        [5, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 5],
        [2, 0, 2, 0, 2, 0, 2, 0],
        [0, 2, 0, 2, 0, 2, 0, 2],
        [2, 0, 2, 0, 2, 0, 2, 0],
    ],
];

fn own_ants(pos: &Position, color: Color) -> impl Iterator<Item = (i32, i32)> + '_ {
    (0..BOARD_ROWS as i32)
        .flat_map(move |row| (0..BOARD_COLS as i32).map(move |col| (row, col)))
        .filter(move |&(row, col)| pos.board.get(row as usize, col as usize) == color.tile())
}

fn position_value(pos: &Position, color: Color) -> i32 {
    own_ants(pos, color)
        .map(|(row, col)| POSITION_VALUE[color.to_byte() as usize][row as usize][col as usize])
        .sum()
}

fn legal_move_count(pos: &Position, color: Color) -> i32 {
    own_ants(pos, color)
        .map(|(row, col)| which_moves(pos, row, col).len() as i32)
        .sum()
}

fn capture_count(pos: &Position, color: Color) -> i32 {
    own_ants(pos, color)
        .flat_map(|(row, col)| which_moves(pos, row, col))
        .map(|mv| mv.num_captures() as i32)
        .sum()
}

/// +1 per diagonally-forward cell occupied by an ant of the same color,
/// capped at 2 (an ant has at most two forward diagonals).
fn protection_bonus(pos: &Position, color: Color) -> i32 {
    own_ants(pos, color)
        .map(|(row, col)| {
            let (d1, d2) = move_once(row, col, color);
            let mut bonus = 0;
            for (r, c) in [d1, d2] {
                if crate::movegen::in_bounds(r, c)
                    && pos.board.get(r as usize, c as usize) == color.tile()
                {
                    bonus += 1;
                }
            }
            bonus.min(2)
        })
        .sum()
}

/// `player`'s standalone utility in `state`, independent of the opponent's
/// score. Combines positional value, mobility, captures already on offer,
/// a small bonus for mutually-protected ants, a penalty for captures the
/// opponent could make in reply, and a bonus for food this exact state
/// resolved (credited only to the side whose turn it is).
pub fn player_utility(state: &GameState, player: Color) -> i32 {
    let pos = &state.pos;
    let opponent = !player;

    let mut opponent_reply = pos.clone();
    opponent_reply.turn = opponent;

    let food_bonus = if pos.turn == player { 2 * state.food_obtained as i32 } else { 0 };

    position_value(pos, player)
        + legal_move_count(pos, player)
        + capture_count(pos, player)
        + protection_bonus(pos, player)
        - 2 * capture_count(&opponent_reply, opponent)
        + food_bonus
}

/// The search engine's leaf evaluation: each side's utility plus its
/// running food score, from `state.own_color`'s perspective.
pub fn evaluate(state: &GameState) -> Utility {
    let own = state.own_color;
    let opp = !own;

    let own_value = player_utility(state, own) + state.pos.score_of(own);
    let opp_value = player_utility(state, opp) + state.pos.score_of(opp);

    (own_value - opp_value) as Utility
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Tile};

    #[test]
    fn starting_position_is_symmetric() {
        let state = GameState::starting(Color::White);
        assert_eq!(evaluate(&state), 0);
    }

    #[test]
    fn extra_ant_improves_evaluation_for_its_owner() {
        let mut board = Board::starting();
        board.set(5, 0, Tile::White);
        let pos = Position { board, score: [0, 0], turn: Color::White };
        let state = GameState::new(pos, Color::White);
        assert!(evaluate(&state) > 0);
    }

    #[test]
    fn food_obtained_only_benefits_the_side_on_turn() {
        let pos = Position { board: Board::starting(), score: [0, 0], turn: Color::White };
        let mut state = GameState::new(pos, Color::White);
        state.food_obtained = 1;
        let with_food = evaluate(&state);

        let plain = GameState::starting(Color::White);
        assert!(with_food > evaluate(&plain));
    }

    #[test]
    fn protection_bonus_caps_at_two() {
        let mut board = Board::empty();
        board.set(3, 0, Tile::White);
        board.set(4, 1, Tile::White);
        let pos = Position { board, score: [0, 0], turn: Color::White };
        assert_eq!(protection_bonus(&pos, Color::White), 1);
    }
}

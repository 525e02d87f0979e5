//! Move generation: per-ant legal moves, capture chaining, move application
//! and the top-level `successors` function the search engine drives.

use crate::board::{Color, Move, Position, Tile, BOARD_COLS, BOARD_ROWS};
use crate::state::GameState;

#[inline]
pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_ROWS as i32).contains(&row) && (0..BOARD_COLS as i32).contains(&col)
}

#[inline]
fn has_ant(pos: &Position, row: i32, col: i32) -> bool {
    pos.board.get(row as usize, col as usize).has_ant()
}

#[inline]
fn is_food(pos: &Position, row: i32, col: i32) -> bool {
    pos.board.get(row as usize, col as usize) == Tile::Food
}

#[inline]
fn of_same_color(pos: &Position, i1: i32, j1: i32, i2: i32, j2: i32) -> bool {
    pos.board.get(i1 as usize, j1 as usize) == pos.board.get(i2 as usize, j2 as usize)
}

/// The two forward diagonal destinations one step ahead for `color`.
pub(crate) fn move_once(row: i32, col: i32, color: Color) -> ((i32, i32), (i32, i32)) {
    let dr = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    ((row + dr, col - 1), (row + dr, col + 1))
}

/// Extending a jump `(i,j) -> (x,y)` one more step in the same direction.
fn landing_beyond(i: i32, j: i32, x: i32, y: i32) -> (i32, i32) {
    (2 * x - i, 2 * y - j)
}

/// Continues a capture chain: `(i,j)` is the cell the jump started from,
/// `(x,y)` holds the opponent ant being jumped. Returns every way the chain
/// can be completed (or a single length-2 move if it can't continue).
fn captivity_tail(pos: &Position, i: i32, j: i32, x: i32, y: i32, color: Color) -> Vec<Move> {
    let (nx, ny) = landing_beyond(i, j, x, y);

    if !in_bounds(nx, ny) || has_ant(pos, nx, ny) {
        return Vec::new();
    }

    let (d1, d2) = move_once(nx, ny, color);
    let mut moves = Vec::new();
    let mut made_more_captures = false;

    for &(ax, ay) in &[d1, d2] {
        if in_bounds(ax, ay) && has_ant(pos, ax, ay) && pos.board.get(ax as usize, ay as usize) != color.tile() {
            let tails = captivity_tail(pos, nx, ny, ax, ay, color);
            for tail in &tails {
                moves.push(Move::prefixed((i, j), (nx, ny), tail));
            }
            made_more_captures = true;
        }
    }

    if !made_more_captures {
        moves.push(Move::from_path(color, &[(i, j), (nx, ny)]));
    }

    moves
}

/// All legal moves for the ant at `(row, col)`, including capture chains.
/// Applies the local capture-preference suppression of an ant's own two
/// diagonals (global capture precedence across all ants lives in
/// `successors`).
pub fn which_moves(pos: &Position, row: i32, col: i32) -> Vec<Move> {
    let color = match pos.board.get(row as usize, col as usize).color() {
        Some(c) => c,
        None => return Vec::new(),
    };

    let (d1, d2) = move_once(row, col, color);
    let mut moves = Vec::new();

    // First diagonal.
    if in_bounds(d1.0, d1.1) && !of_same_color(pos, row, col, d1.0, d1.1) {
        if !has_ant(pos, d1.0, d1.1) {
            let other_blocks = in_bounds(d2.0, d2.1)
                && !of_same_color(pos, row, col, d2.0, d2.1)
                && has_ant(pos, d2.0, d2.1);
            if other_blocks {
                let (nx, ny) = landing_beyond(row, col, d2.0, d2.1);
                if has_ant(pos, nx, ny) {
                    moves.push(Move::from_path(color, &[(row, col), d1]));
                }
            } else {
                moves.push(Move::from_path(color, &[(row, col), d1]));
            }
        } else {
            moves.extend(captivity_tail(pos, row, col, d1.0, d1.1, color));
        }
    }

    // Second diagonal.
    if in_bounds(d2.0, d2.1) && !of_same_color(pos, row, col, d2.0, d2.1) {
        if !has_ant(pos, d2.0, d2.1) {
            let other_blocks = in_bounds(d1.0, d1.1)
                && !of_same_color(pos, row, col, d1.0, d1.1)
                && has_ant(pos, d1.0, d1.1);
            if other_blocks {
                let (nx, ny) = landing_beyond(row, col, d1.0, d1.1);
                if has_ant(pos, nx, ny) {
                    moves.push(Move::from_path(color, &[(row, col), d2]));
                }
            } else {
                moves.push(Move::from_path(color, &[(row, col), d2]));
            }
        } else {
            moves.extend(captivity_tail(pos, row, col, d2.0, d2.1, color));
        }
    }

    moves
}

/// Number of `Food` tiles the move's path lands on, read from the board
/// *before* the move is applied (see the note on `GameState::food_path_count`).
fn food_cells_on_path(pos: &Position, mv: &Move) -> u8 {
    mv.cells().skip(1).filter(|&(r, c)| is_food(pos, r, c)).count() as u8
}

/// Applies a move to a position: removes the source ant, removes any
/// captured ants at jump midpoints, places the ant at the final cell, and
/// flips whose turn it is. Food consumption is not resolved here — see
/// `successors`'s chance-node expansion.
pub fn apply_move(pos: &Position, mv: &Move) -> Position {
    let mut next = pos.clone();

    if mv.is_null() {
        next.turn = !next.turn;
        return next;
    }

    let cells: Vec<(i32, i32)> = mv.cells().collect();
    let (sr, sc) = cells[0];
    next.board.set(sr as usize, sc as usize, Tile::Empty);

    for pair in cells.windows(2) {
        let (r0, c0) = pair[0];
        let (r1, c1) = pair[1];
        if (r0 - r1).abs() == 2 && (c0 - c1).abs() == 2 {
            let mid = ((r0 + r1) / 2, (c0 + c1) / 2);
            next.board.set(mid.0 as usize, mid.1 as usize, Tile::Empty);
        }
    }

    let (fr, fc) = *cells.last().unwrap();
    next.board.set(fr as usize, fc as usize, mv.color.tile());
    next.turn = !next.turn;
    next
}

/// The search engine's successor function: for a non-chance state, every
/// ant move (with capture precedence applied and food landings tagged as
/// chance nodes); for a chance state, the stochastic food-resolution
/// children.
pub fn successors(state: &GameState) -> Vec<(Move, GameState, f64)> {
    if state.chance_node {
        return chance_successors(state);
    }

    let pos = &state.pos;
    let mut raw: Vec<(Move, GameState, f64)> = Vec::new();

    for row in 0..BOARD_ROWS as i32 {
        for col in 0..BOARD_COLS as i32 {
            if pos.board.get(row as usize, col as usize) != pos.turn.tile() {
                continue;
            }
            for mv in which_moves(pos, row, col) {
                let food_count = food_cells_on_path(pos, &mv);
                let mut child = state.clone();
                child.pos = apply_move(pos, &mv);
                child.chance_node = false;
                child.food_obtained = 0;
                child.food_path_count = 0;
                child.pending_move = None;

                if food_count > 0 {
                    child.chance_node = true;
                    child.food_path_count = food_count;
                    child.pending_move = Some(mv);
                }

                raw.push((mv, child, 0.0));
            }
        }
    }

    let any_capture = raw.iter().any(|(mv, _, _)| mv.num_captures() > 0);
    if any_capture {
        raw.retain(|(mv, _, _)| mv.num_captures() > 0);
    }

    if raw.is_empty() {
        let null_move = Move::null(pos.turn);
        let mut child = state.clone();
        child.pos.turn = !pos.turn;
        child.chance_node = false;
        child.food_obtained = 0;
        child.food_path_count = 0;
        child.pending_move = None;
        raw.push((null_move, child, 0.0));
    }

    raw
}

fn chance_successors(state: &GameState) -> Vec<(Move, GameState, f64)> {
    let mv = state.pending_move.expect("chance node must carry a pending move");

    let make_child = |food_obtained: u8| {
        let mut child = state.clone();
        child.chance_node = false;
        child.food_obtained = food_obtained;
        child.pos.credit_score(mv.color, food_obtained as i32);
        (mv, child)
    };

    match state.food_path_count {
        1 => {
            let (m1, c1) = make_child(1);
            let (m2, c2) = make_child(0);
            vec![(m1, c1, 1.0 / 3.0), (m2, c2, 2.0 / 3.0)]
        }
        2 => {
            let (m1, c1) = make_child(0);
            let (m2, c2) = make_child(1);
            let (m3, c3) = make_child(2);
            vec![(m1, c1, 4.0 / 9.0), (m2, c2, 4.0 / 9.0), (m3, c3, 1.0 / 9.0)]
        }
        other => unreachable!("chance node with {other} food cells on its path"),
    }
}

/// Does the side to move have any legal move (including captures)?
pub fn can_move(pos: &Position) -> bool {
    for row in 0..BOARD_ROWS as i32 {
        for col in 0..BOARD_COLS as i32 {
            if pos.board.get(row as usize, col as usize) == pos.turn.tile()
                && !which_moves(pos, row, col).is_empty()
            {
                return true;
            }
        }
    }
    false
}

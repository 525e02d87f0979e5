use crate::board::{Color, Move, Position};

/// The three kinds of node the search engine must dispatch on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Max,
    Min,
    Chance,
}

/// Search state: a Position plus the bookkeeping the generator and agent
/// loop need (whose perspective we're searching from, whether we're
/// mid-resolution of a food chance event, and running capture counts).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    pub pos: Position,
    pub own_color: Color,
    pub chance_node: bool,
    pub food_obtained: u8,
    pub pending_move: Option<Move>,
    pub player_captures: u32,
    pub opponent_captures: u32,

    /// Number of `Food` cells the pending move's path lands on (1 or 2),
    /// valid only while `chance_node` is set. The board only keeps one
    /// `Tile` per cell, so once the move is applied the final landing
    /// cell's `Food` marker is overwritten by the arriving ant — this
    /// count has to be captured from the pre-move board at generation
    /// time rather than re-derived later.
    pub food_path_count: u8,
}

impl GameState {
    pub fn new(pos: Position, own_color: Color) -> Self {
        GameState {
            pos,
            own_color,
            chance_node: false,
            food_obtained: 0,
            pending_move: None,
            player_captures: 0,
            opponent_captures: 0,
            food_path_count: 0,
        }
    }

    pub fn starting(own_color: Color) -> Self {
        GameState::new(Position::starting(), own_color)
    }

    pub fn node_kind(&self) -> NodeKind {
        if self.chance_node {
            NodeKind::Chance
        } else if self.pos.turn == self.own_color {
            NodeKind::Max
        } else {
            NodeKind::Min
        }
    }

    /// Cumulative food eaten by each side, combining the running score with
    /// any food this exact state resolved (mirrors the original's
    /// `food_amount()` bookkeeping, exposed here as an accessor rather than
    /// a console print since the agent logs rather than narrates to stdout).
    pub fn food_totals(&self) -> (i32, i32) {
        let white = self.pos.score_of(Color::White)
            + if self.pos.turn == Color::White { self.food_obtained as i32 } else { 0 };
        let black = self.pos.score_of(Color::Black)
            + if self.pos.turn == Color::Black { self.food_obtained as i32 } else { 0 };
        (white, black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_node_when_turn_matches_own_color() {
        let state = GameState::starting(Color::White);
        assert_eq!(state.node_kind(), NodeKind::Max);
    }

    #[test]
    fn min_node_when_turn_is_opponent() {
        let state = GameState::starting(Color::Black);
        assert_eq!(state.node_kind(), NodeKind::Min);
    }

    #[test]
    fn chance_node_overrides_turn_comparison() {
        let mut state = GameState::starting(Color::White);
        state.chance_node = true;
        assert_eq!(state.node_kind(), NodeKind::Chance);
    }

    #[test]
    fn food_obtained_only_counts_for_the_side_on_turn() {
        let mut state = GameState::starting(Color::White);
        state.food_obtained = 1;
        let (white, black) = state.food_totals();
        assert_eq!(white, 1);
        assert_eq!(black, 0);
    }
}

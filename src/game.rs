//! Wires the Tucants move generator, evaluator, ordering and cutoff
//! predicate into the generic search engine's `Game` trait.

use crate::board::Move;
use crate::cutoff;
use crate::evaluator;
use crate::movegen;
use crate::ordering;
use crate::search::{Game, NodeKind};
use crate::state::{GameState, NodeKind as StateNodeKind};
use crate::types::Utility;

pub struct Tucants;

impl Game for Tucants {
    type State = GameState;
    type Action = Move;

    fn node_kind(state: &Self::State) -> NodeKind {
        match state.node_kind() {
            StateNodeKind::Max => NodeKind::Max,
            StateNodeKind::Min => NodeKind::Min,
            StateNodeKind::Chance => NodeKind::Chance,
        }
    }

    fn is_cutoff(state: &Self::State) -> bool {
        cutoff::is_terminal(state)
    }

    fn successors(state: &Self::State) -> Vec<(Self::Action, Self::State, f64)> {
        movegen::successors(state)
    }

    fn order(
        children: Vec<(Self::Action, Self::State, f64)>,
    ) -> Vec<(Self::Action, Self::State, f64)> {
        ordering::order(children)
    }

    fn evaluate(state: &Self::State) -> Utility {
        evaluator::evaluate(state)
    }
}

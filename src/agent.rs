//! Agent Loop: bridges the referee's TCP connection to the search engine,
//! maintaining a single persistent `GameState` and the capture counters
//! derived from successive positions.

use std::net::TcpStream;

use log::{debug, info};

use crate::board::{Color, Move, Position};
use crate::cutoff;
use crate::error::AgentResult;
use crate::game::Tucants;
use crate::movegen;
use crate::protocol::{self, MessageTag};
use crate::search::decide;
use crate::state::GameState;
use crate::types::INITIAL_ANTS;

pub struct Agent {
    state: GameState,
    own_color: Option<Color>,
    previous_ants_removed: u32,
    name: String,
    timeout_ms: u64,
}

impl Agent {
    pub fn new(name: String, timeout_ms: u64) -> Self {
        Agent {
            state: GameState::starting(Color::White),
            own_color: None,
            previous_ants_removed: 0,
            name,
            timeout_ms,
        }
    }

    pub fn run(&mut self, stream: &mut TcpStream) -> AgentResult<()> {
        loop {
            match protocol::read_tag(stream)? {
                MessageTag::RequestName => {
                    debug!("referee requested our name");
                    protocol::write_name(stream, &self.name)?;
                }
                MessageTag::ColorWhite => {
                    info!("assigned color White");
                    self.set_own_color(Color::White);
                }
                MessageTag::ColorBlack => {
                    info!("assigned color Black");
                    self.set_own_color(Color::Black);
                }
                MessageTag::NewPosition => {
                    let pos = protocol::read_position(stream)?;
                    self.handle_new_position(pos);
                }
                MessageTag::PrepareReceiveMove => {
                    // The referee is about to send RequestMove; nothing to do yet.
                }
                MessageTag::RequestMove => {
                    let mv = self.choose_move();
                    info!("replying with move: {mv}");
                    protocol::write_move(stream, &mv)?;
                }
                MessageTag::Quit => {
                    info!("referee sent quit");
                    return Ok(());
                }
            }
        }
    }

    fn set_own_color(&mut self, color: Color) {
        self.own_color = Some(color);
        self.state.own_color = color;
    }

    /// Updates the persistent GameState from a freshly-received position.
    /// Resets everything if the board matches the starting layout (a new
    /// game); otherwise, if it's now our move, credits the opponent with
    /// however many of our ants disappeared since the last update.
    fn handle_new_position(&mut self, pos: Position) {
        let own_color = self.own_color.unwrap_or(Color::White);

        if pos.board.is_starting() {
            self.state = GameState::new(pos, own_color);
            self.previous_ants_removed = 0;
            return;
        }

        if pos.turn == own_color {
            let removed_now = INITIAL_ANTS - pos.board.ants_on_board(own_color);
            let delta = removed_now.saturating_sub(self.previous_ants_removed);
            self.state.opponent_captures += delta;
            self.previous_ants_removed = removed_now;
        }

        self.state.pos = pos;
        self.state.chance_node = false;
        self.state.food_obtained = 0;
        self.state.pending_move = None;
        self.state.food_path_count = 0;

        let (white_food, black_food) = self.state.food_totals();
        debug!("food totals: White {white_food}, Black {black_food}");

        if cutoff::is_terminal(&self.state) {
            match cutoff::winner(&self.state) {
                Some(color) => info!("game over, {color:?} wins"),
                None => info!("game over, no ants remain for either side"),
            }
        }
    }

    fn choose_move(&mut self) -> Move {
        if !movegen::can_move(&self.state.pos) {
            debug!("no legal move available, passing");
            return Move::null(self.state.pos.turn);
        }

        let mv = decide::<Tucants>(&self.state, self.timeout_ms);
        self.state.player_captures += mv.num_captures();
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Tile};

    #[test]
    fn starting_layout_resets_counters() {
        let mut agent = Agent::new("test".to_string(), 100);
        agent.set_own_color(Color::White);
        agent.state.opponent_captures = 5;
        agent.previous_ants_removed = 3;

        agent.handle_new_position(Position::starting());
        assert_eq!(agent.state.opponent_captures, 0);
        assert_eq!(agent.previous_ants_removed, 0);
    }

    #[test]
    fn missing_own_ant_credits_opponent_captures() {
        let mut agent = Agent::new("test".to_string(), 100);
        agent.set_own_color(Color::White);
        agent.handle_new_position(Position::starting());

        let mut board = Board::starting();
        board.set(0, 1, Tile::Empty); // one White ant removed
        let pos = Position { board, score: [0, 0], turn: Color::White };
        agent.handle_new_position(pos);

        assert_eq!(agent.state.opponent_captures, 1);
        assert_eq!(agent.previous_ants_removed, 1);
    }

    #[test]
    fn choose_move_passes_when_no_legal_move_exists() {
        let mut agent = Agent::new("test".to_string(), 100);
        agent.set_own_color(Color::White);
        let mut board = Board::empty();
        board.set(11, 0, Tile::White);
        agent.state.pos = Position { board, score: [0, 0], turn: Color::White };

        let mv = agent.choose_move();
        assert!(mv.is_null());
    }
}

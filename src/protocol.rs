//! Wire protocol with the referee: message tags, fixed-width binary
//! payloads, and the TCP plumbing to read/write them.

use std::io::{Read, Write};
use std::net::TcpStream;

use crate::board::{Board, Color, Move, Position, BOARD_COLS, BOARD_ROWS, MAXIMUM_MOVE_SIZE, PATH_END};
use crate::error::{AgentError, AgentResult};
use crate::types::MAX_NAME_LENGTH;

pub const POSITION_BYTES: usize = BOARD_ROWS * BOARD_COLS + 2 + 1;
pub const MOVE_BYTES: usize = 2 * MAXIMUM_MOVE_SIZE + 1;
pub const NAME_BYTES: usize = MAX_NAME_LENGTH + 1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageTag {
    NewPosition = 1,
    ColorWhite = 2,
    ColorBlack = 3,
    RequestMove = 4,
    PrepareReceiveMove = 5,
    RequestName = 6,
    Quit = 7,
}

impl MessageTag {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            1 => Some(MessageTag::NewPosition),
            2 => Some(MessageTag::ColorWhite),
            3 => Some(MessageTag::ColorBlack),
            4 => Some(MessageTag::RequestMove),
            5 => Some(MessageTag::PrepareReceiveMove),
            6 => Some(MessageTag::RequestName),
            7 => Some(MessageTag::Quit),
            _ => None,
        }
    }
}

pub fn encode_position(pos: &Position) -> [u8; POSITION_BYTES] {
    let mut out = [0u8; POSITION_BYTES];
    out[..BOARD_ROWS * BOARD_COLS].copy_from_slice(&pos.board.to_bytes());
    out[BOARD_ROWS * BOARD_COLS] = pos.score[0] as u8;
    out[BOARD_ROWS * BOARD_COLS + 1] = pos.score[1] as u8;
    out[BOARD_ROWS * BOARD_COLS + 2] = pos.turn.to_byte();
    out
}

pub fn decode_position(bytes: &[u8; POSITION_BYTES]) -> Option<Position> {
    let mut board_bytes = [0u8; BOARD_ROWS * BOARD_COLS];
    board_bytes.copy_from_slice(&bytes[..BOARD_ROWS * BOARD_COLS]);
    let board = Board::from_bytes(&board_bytes)?;
    let score = [
        bytes[BOARD_ROWS * BOARD_COLS] as i32,
        bytes[BOARD_ROWS * BOARD_COLS + 1] as i32,
    ];
    let turn = Color::from_byte(bytes[BOARD_ROWS * BOARD_COLS + 2])?;
    Some(Position { board, score, turn })
}

pub fn encode_move(mv: &Move) -> [u8; MOVE_BYTES] {
    let mut out = [0u8; MOVE_BYTES];
    for i in 0..MAXIMUM_MOVE_SIZE {
        let (row, col) = if i < mv.path_len() { mv.cell(i) } else { (PATH_END as i32, PATH_END as i32) };
        out[i] = row as i8 as u8;
        out[MAXIMUM_MOVE_SIZE + i] = col as i8 as u8;
    }
    out[2 * MAXIMUM_MOVE_SIZE] = mv.color.to_byte();
    out
}

pub fn decode_move(bytes: &[u8; MOVE_BYTES]) -> Option<Move> {
    let color = Color::from_byte(bytes[2 * MAXIMUM_MOVE_SIZE])?;
    let mut path = Vec::with_capacity(MAXIMUM_MOVE_SIZE);
    for i in 0..MAXIMUM_MOVE_SIZE {
        let row = bytes[i] as i8;
        if row == PATH_END {
            break;
        }
        let col = bytes[MAXIMUM_MOVE_SIZE + i] as i8;
        path.push((row as i32, col as i32));
    }
    Some(Move::from_path(color, &path))
}

pub fn encode_name(name: &str) -> [u8; NAME_BYTES] {
    let mut out = [0u8; NAME_BYTES];
    for (i, b) in name.bytes().take(MAX_NAME_LENGTH).enumerate() {
        out[i] = b;
    }
    out
}

fn io_fault(what: &str, err: std::io::Error) -> AgentError {
    AgentError::ProtocolFault(format!("{what}: {err}"))
}

pub fn connect(addr: &str) -> AgentResult<TcpStream> {
    TcpStream::connect(addr).map_err(|source| AgentError::ConnectFault { addr: addr.to_string(), source })
}

pub fn read_tag(stream: &mut TcpStream) -> AgentResult<MessageTag> {
    let mut byte = [0u8; 1];
    stream.read_exact(&mut byte).map_err(|e| io_fault("reading message tag", e))?;
    MessageTag::from_byte(byte[0]).ok_or_else(|| AgentError::ProtocolFault(format!("unknown message tag {}", byte[0])))
}

pub fn read_position(stream: &mut TcpStream) -> AgentResult<Position> {
    let mut bytes = [0u8; POSITION_BYTES];
    stream.read_exact(&mut bytes).map_err(|e| io_fault("reading position", e))?;
    decode_position(&bytes).ok_or_else(|| AgentError::ProtocolFault("malformed position payload".to_string()))
}

pub fn write_move(stream: &mut TcpStream, mv: &Move) -> AgentResult<()> {
    stream.write_all(&encode_move(mv)).map_err(|e| io_fault("writing move", e))
}

pub fn write_name(stream: &mut TcpStream, name: &str) -> AgentResult<()> {
    stream.write_all(&encode_name(name)).map_err(|e| io_fault("writing name", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_roundtrips_through_wire_bytes() {
        let pos = Position::starting();
        let bytes = encode_position(&pos);
        assert_eq!(bytes.len(), POSITION_BYTES);
        let restored = decode_position(&bytes).unwrap();
        assert_eq!(pos, restored);
    }

    #[test]
    fn quiet_move_roundtrips_through_wire_bytes() {
        let mv = Move::from_path(Color::White, &[(2, 1), (3, 0)]);
        let bytes = encode_move(&mv);
        assert_eq!(bytes.len(), MOVE_BYTES);
        let restored = decode_move(&bytes).unwrap();
        assert_eq!(mv, restored);
    }

    #[test]
    fn null_move_encodes_all_sentinel_row_bytes() {
        let mv = Move::null(Color::Black);
        let bytes = encode_move(&mv);
        for i in 0..MAXIMUM_MOVE_SIZE {
            assert_eq!(bytes[i], 0xFF);
        }
        let restored = decode_move(&bytes).unwrap();
        assert!(restored.is_null());
    }

    #[test]
    fn name_is_null_padded_and_truncated() {
        let bytes = encode_name("ant");
        assert_eq!(&bytes[..3], b"ant");
        assert_eq!(bytes[3], 0);

        let long = "a".repeat(32);
        let bytes = encode_name(&long);
        assert_eq!(&bytes[..16], "a".repeat(16).as_bytes());
    }

    #[test]
    fn decode_position_rejects_invalid_tile_bytes() {
        let mut bytes = [0u8; POSITION_BYTES];
        bytes[0] = 9; // not a valid Tile encoding
        assert!(decode_position(&bytes).is_none());
    }
}

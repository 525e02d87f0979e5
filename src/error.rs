//! Error kinds surfaced across the network boundary and at startup.
//!
//! `DeadlineElapsed`, `IllegalMoveDetected` and `SearchInvariant` from the
//! error-handling design are not constructible variants here: the deadline
//! is a plain bool the search engine polls, the generator's path-cap
//! truncation never produces an illegal move to report, and the search
//! engine's exhaustive 3-variant `NodeKind` match rules out an unreachable
//! dispatch path at compile time.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("protocol fault: {0}")]
    ProtocolFault(String),

    #[error("could not connect to referee at {addr}: {source}")]
    ConnectFault {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;

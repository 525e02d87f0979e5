/// Utility domain the evaluator and search engine operate in.
pub type Utility = i64;

pub const INITIAL_ANTS: u32 = 12;
pub const MAX_NAME_LENGTH: usize = 16;

pub const DEFAULT_IP: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "6001";
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_AGENT_NAME: &str = "tucants-agent";

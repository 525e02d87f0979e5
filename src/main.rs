use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use log::error;

use tucants_agent::agent::Agent;
use tucants_agent::protocol;
use tucants_agent::types;

/// Expectiminimax agent for the Tucants board game, played over a referee socket.
#[derive(Parser, Debug)]
#[command(name = "tucants-agent")]
struct Cli {
    /// Referee host
    #[arg(short = 'i', long = "ip", default_value = types::DEFAULT_IP)]
    ip: String,

    /// Referee TCP port
    #[arg(short = 'p', long = "port", default_value = types::DEFAULT_PORT)]
    port: String,

    /// Per-move time budget in milliseconds
    #[arg(short = 't', long = "timeout", default_value_t = types::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Agent identifier (at most 16 bytes)
    #[arg(short = 'a', long = "name", default_value = types::DEFAULT_AGENT_NAME)]
    name: String,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{e}");
                    ExitCode::SUCCESS
                }
                _ => {
                    eprint!("{e}");
                    ExitCode::FAILURE
                }
            };
        }
    };

    env_logger::init();

    let addr = format!("{}:{}", cli.ip, cli.port);
    let mut stream = match protocol::connect(&addr) {
        Ok(stream) => stream,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut agent = Agent::new(cli.name, cli.timeout_ms);
    match agent.run(&mut stream) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

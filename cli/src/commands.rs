pub mod flood;

use std::net::IpAddr;

use clap::Parser;
use floodr_common::config::{DEFAULT_CONCURRENCY, DEFAULT_COUNT};

#[derive(Parser)]
#[command(name = "floodr")]
#[command(about = "Opens many TCP connections to a target and leaves them open.")]
pub struct CommandLine {
    /// Target port. Anything that is not a usable port number silently
    /// falls back to 50006.
    pub port: Option<String>,

    /// Target host
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Number of connection attempts to launch
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Ceiling on simultaneously in-flight handshakes
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-handshake deadline in milliseconds (default: block on the OS connect)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Skip the progress bar and summary
    #[arg(long, short)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

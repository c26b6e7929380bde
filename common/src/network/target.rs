//! # Flood Target Model
//!
//! Defines where connections are aimed: a single (host, port) pair, immutable
//! for the whole run.
//!
//! Port input from the command line is parsed *leniently*: anything that is
//! not a usable port number silently falls back to [`DEFAULT_PORT`], matching
//! the reference tool's behaviour of never surfacing a parse error.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;
use tracing::debug;

/// Port used when no usable port argument is given.
pub const DEFAULT_PORT: u16 = 50_006;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("port must be between 1 and 65535")]
    PortOutOfRange,
}

/// The (host, port) pair every connection attempt is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub host: IpAddr,
    pub port: u16,
}

impl Target {
    /// Builds a target, rejecting port 0 (not connectable).
    pub fn new(host: IpAddr, port: u16) -> Result<Self, TargetError> {
        if port == 0 {
            return Err(TargetError::PortOutOfRange);
        }
        Ok(Self { host, port })
    }

    /// Target on the local loopback address, where the reference tool
    /// always aims.
    pub fn loopback(port: u16) -> Result<Self, TargetError> {
        Self::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Lenient port parsing for the positional CLI argument.
    ///
    /// Absent, non-numeric, out-of-range and zero inputs all fall back to
    /// [`DEFAULT_PORT`] without surfacing an error.
    pub fn port_from_arg(raw: Option<&str>) -> u16 {
        match raw {
            Some(s) => match s.trim().parse::<u16>() {
                Ok(0) | Err(_) => {
                    debug!("unusable port argument {s:?}, using default {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
                Ok(port) => port,
            },
            None => DEFAULT_PORT,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

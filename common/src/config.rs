use std::time::Duration;

/// Number of connection attempts the launch loop performs by default.
pub const DEFAULT_COUNT: usize = 65_535;

/// Default ceiling on simultaneously in-flight connection attempts.
///
/// The flooder is meant to exhaust the *target's* descriptors, not its own;
/// an unbounded spawn can trip the local process limit long before the
/// requested count is reached.
pub const DEFAULT_CONCURRENCY: usize = 512;

/// Run settings for a single flood, built once at startup and shared
/// read-only with every worker.
#[derive(Clone, Debug)]
pub struct Config {
    /// Total number of connection attempts to launch.
    pub count: usize,
    /// Maximum number of attempts allowed to be mid-connect at once.
    pub concurrency: usize,
    /// Per-attempt deadline on the TCP handshake.
    ///
    /// `None` blocks on the OS connect for as long as the kernel allows.
    pub connect_timeout: Option<Duration>,
    /// Suppresses the progress bar and summary output.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            concurrency: DEFAULT_CONCURRENCY,
            connect_timeout: None,
            quiet: false,
        }
    }
}

impl Config {
    /// Clamps nonsensical values rather than erroring: a ceiling of zero
    /// would leave every worker parked on the semaphore forever.
    pub fn sanitized(mut self) -> Self {
        if self.concurrency == 0 {
            self.concurrency = 1;
        }
        self
    }
}

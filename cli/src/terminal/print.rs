use std::time::Duration;

use colored::*;
use tracing::info;

use floodr_common::config::Config;
use floodr_common::network::target::Target;
use floodr_core::flooder::FloodOutcome;

pub fn header(target: &Target, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let name = format!("floodr v{}", env!("CARGO_PKG_VERSION")).bright_green().bold();
    println!("{name} — aiming {} attempts at {}", cfg.count, target.to_string().bold());
}

pub fn summary(outcome: &FloodOutcome, elapsed: Duration, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let held = format!("{} held", outcome.established()).green().bold();
    let failed = format!("{} failed", outcome.failed()).red();
    let took = format!("{:.2}s", elapsed.as_secs_f64()).yellow();

    info!("{held}, {failed} out of {} attempts in {took}", outcome.attempted());
}

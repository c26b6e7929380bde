use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use floodr_common::config::Config;
use floodr_common::network::target::Target;
use floodr_core::flooder::{self, ProgressFn};

use crate::commands::CommandLine;
use crate::terminal::print;

pub async fn run(args: CommandLine) -> anyhow::Result<()> {
    let port = Target::port_from_arg(args.port.as_deref());
    let target = Target::new(args.host, port)?;

    let cfg = Config {
        count: args.count,
        concurrency: args.concurrency,
        connect_timeout: args.timeout_ms.map(Duration::from_millis),
        quiet: args.quiet,
    }
    .sanitized();

    print::header(&target, &cfg);

    let bar = launch_bar(&cfg);
    let progress = bar.as_ref().map(|bar| {
        let bar = bar.clone();
        Box::new(move |settled: usize| bar.set_position(settled as u64)) as ProgressFn
    });

    let start = Instant::now();
    let outcome = flooder::flood(target, &cfg, progress).await?;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    print::summary(&outcome, start.elapsed(), &cfg);

    // The whole point of the tool: sit on the descriptors until killed.
    info!("holding {} connections, Ctrl-C to release", outcome.established());
    tokio::signal::ctrl_c().await?;

    drop(outcome);
    Ok(())
}

fn launch_bar(cfg: &Config) -> Option<ProgressBar> {
    if cfg.quiet {
        return None;
    }

    let bar = ProgressBar::new(cfg.count as u64);
    let style = ProgressStyle::with_template("{bar:40.blue} {pos}/{len} attempts")
        .expect("static template is valid");
    bar.set_style(style);
    Some(bar)
}

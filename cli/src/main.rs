mod commands;
mod terminal;

use commands::{CommandLine, flood};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    logging::init_logging(args.quiet);

    flood::run(args).await
}

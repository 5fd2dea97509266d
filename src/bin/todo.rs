use std::io;

use shelltools::todo::{cli, TodoConfig};
use shelltools::{args, logging};

fn main() {
    if let Err(error) = run() {
        eprintln!("todo: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli: cli::Cli = args::parse_or_exit(cli::FLAGS);
    logging::init_tracing("TODO_LOG")?;

    let config = TodoConfig::load()?;
    tracing::debug!(file = %config.filename.display(), "using todo file");

    cli::run(cli.action(), &config, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

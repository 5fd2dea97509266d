use std::io;

use shelltools::markdown::{cli, preview, MdpConfig, PreviewOptions};
use shelltools::{args, logging};

fn main() {
    if let Err(error) = run() {
        eprintln!("mdp: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli: cli::Cli = args::parse_or_exit(cli::FLAGS);
    logging::init_tracing("MDP_LOG")?;

    let config = MdpConfig::load()?;
    preview::run(&PreviewOptions::from(cli), &config, io::stdout().lock())?;
    Ok(())
}

use std::io;

use anyhow::Context;
use shelltools::{args, counter, logging};

fn main() {
    if let Err(error) = run() {
        eprintln!("wc: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli: counter::Cli = args::parse_or_exit(&[args::Flag::switch("l"), args::Flag::switch("b")]);
    logging::init_tracing("WC_LOG")?;

    let total = counter::count(io::stdin().lock(), counter::CountMode::from(&cli))
        .context("failed to read stdin")?;
    println!("{total}");
    Ok(())
}

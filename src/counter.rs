//! Word, line and byte counting over a stream.

use std::io::{self, BufRead};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "wc", about = "Count words, lines or bytes read from stdin")]
pub struct Cli {
    /// Count lines
    #[arg(short = 'l')]
    pub lines: bool,

    /// Count bytes (together with -l)
    #[arg(short = 'b')]
    pub bytes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    Words,
    Lines,
    Bytes,
}

impl CountMode {
    /// `bytes` only takes effect together with `lines`.
    pub fn from_flags(lines: bool, bytes: bool) -> Self {
        match (lines, bytes) {
            (false, _) => Self::Words,
            (true, false) => Self::Lines,
            (true, true) => Self::Bytes,
        }
    }
}

impl From<&Cli> for CountMode {
    fn from(cli: &Cli) -> Self {
        Self::from_flags(cli.lines, cli.bytes)
    }
}

/// Counts units in `reader`, one newline-terminated segment at a time.
pub fn count<R: BufRead>(mut reader: R, mode: CountMode) -> io::Result<usize> {
    let mut segment = Vec::new();
    let mut total = 0;

    loop {
        segment.clear();
        let n = reader.read_until(b'\n', &mut segment)?;
        if n == 0 {
            break;
        }
        total += match mode {
            CountMode::Bytes => n,
            CountMode::Lines => 1,
            CountMode::Words => String::from_utf8_lossy(&segment).split_whitespace().count(),
        };
    }

    tracing::debug!(?mode, total, "counted");
    Ok(total)
}

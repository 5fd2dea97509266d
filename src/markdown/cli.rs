use std::path::PathBuf;

use clap::Parser;

use crate::args::Flag;
use crate::markdown::preview::PreviewOptions;

/// Flags recognised in single-dash long form.
pub const FLAGS: &[Flag] = &[
    Flag::value("file"),
    Flag::switch("s"),
    Flag::value("t"),
    Flag::value("b"),
];

#[derive(Debug, Parser)]
#[command(name = "mdp", about = "Markdown preview tool")]
pub struct Cli {
    /// Markdown file to preview
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Skip auto-preview
    #[arg(short = 's')]
    pub skip_preview: bool,

    /// Alternate template name
    #[arg(short = 't', value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Preferred browser
    #[arg(short = 'b', value_name = "NAME")]
    pub browser: Option<String>,
}

impl From<Cli> for PreviewOptions {
    fn from(cli: Cli) -> Self {
        Self {
            file: cli.file,
            template: cli.template,
            browser: cli.browser,
            skip_preview: cli.skip_preview,
        }
    }
}

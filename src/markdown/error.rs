//! Markdown previewer error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template: unclosed action at byte {offset}")]
    Unclosed { offset: usize },

    #[error("template: unknown action '{action}' at byte {offset}")]
    UnknownAction { action: String, offset: usize },
}

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("failed to read markdown file '{}'", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to create preview file")]
    CreateOutput(#[source] std::io::Error),

    #[error("failed to write preview file '{}'", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to print preview file path")]
    Output(#[source] std::io::Error),

    #[error("browser '{0}' not found in PATH")]
    BrowserNotFound(String),

    #[error("failed to launch browser '{browser}'")]
    Launch {
        browser: String,
        #[source]
        source: std::io::Error,
    },
}

//! Todo manager error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// 1-based index outside the current list.
    #[error("Item {0} does not exist")]
    NotFound(i64),

    /// No action flag was given.
    #[error("Invalid option")]
    InvalidOption,

    #[error("failed to read todo file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse todo file '{}'", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode tasks")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write todo file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read tasks from stdin")]
    Stdin(#[source] std::io::Error),

    #[error("failed to write output")]
    Output(#[source] std::io::Error),
}

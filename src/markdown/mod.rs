//! Markdown preview: markdown file in, sanitized HTML page out, optionally
//! shown in a browser.

pub mod cli;
pub mod config;
pub mod error;
pub mod preview;
pub mod render;
pub mod template;

pub use config::MdpConfig;
pub use error::{MarkdownError, TemplateError};
pub use preview::PreviewOptions;
pub use template::Template;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::markdown::config::MdpConfig;
use crate::markdown::error::MarkdownError;
use crate::markdown::render::parse_content;
use crate::markdown::template::Template;

#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    pub file: PathBuf,
    pub template: Option<PathBuf>,
    /// Overrides the configured browser.
    pub browser: Option<String>,
    pub skip_preview: bool,
}

/// Renders `options.file` into a temporary HTML file and prints its path.
///
/// With `skip_preview` the file is kept and its path returned. Otherwise the
/// browser is started on it and the file is removed once the grace period
/// has passed, or right away if the browser could not be started. A failure
/// before the path is printed leaves no file behind.
pub fn run<W: Write>(
    options: &PreviewOptions,
    config: &MdpConfig,
    mut out: W,
) -> Result<PathBuf, MarkdownError> {
    let input = std::fs::read(&options.file).map_err(|source| MarkdownError::ReadSource {
        path: options.file.clone(),
        source,
    })?;
    let template = options
        .template
        .as_deref()
        .map(Template::from_file)
        .transpose()?;

    let mut staged = tempfile::Builder::new()
        .prefix("mdp")
        .suffix(".html")
        .tempfile()
        .map_err(MarkdownError::CreateOutput)?;
    let out_path = staged.path().to_path_buf();
    let write_err = |source: std::io::Error| MarkdownError::WriteOutput {
        path: out_path.clone(),
        source,
    };

    let page = parse_content(
        &String::from_utf8_lossy(&input),
        template.as_ref(),
        &out_path.to_string_lossy(),
    )?;
    staged.write_all(page.as_bytes()).map_err(write_err)?;
    staged.flush().map_err(write_err)?;
    let temp_path = staged.into_temp_path();
    tracing::debug!(path = %out_path.display(), bytes = page.len(), "wrote preview file");

    writeln!(out, "{}", out_path.display()).map_err(MarkdownError::Output)?;

    if options.skip_preview {
        return temp_path
            .keep()
            .map_err(|err| write_err(err.error));
    }

    let browser = options.browser.as_deref().unwrap_or(&config.browser);
    let result = preview(&out_path, browser, config.grace_period());
    if let Err(error) = temp_path.close() {
        tracing::warn!(path = %out_path.display(), %error, "failed to remove preview file");
    }
    result.map(|()| out_path)
}

/// Starts `browser` on `file` detached, then sleeps for `grace` so the
/// browser can read the file before it is removed.
pub fn preview(file: &Path, browser: &str, grace: Duration) -> Result<(), MarkdownError> {
    tracing::debug!(browser, file = %file.display(), "launching browser");
    open::with_detached(file, browser).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MarkdownError::BrowserNotFound(browser.to_string()),
        _ => MarkdownError::Launch {
            browser: browser.to_string(),
            source,
        },
    })?;

    std::thread::sleep(grace);
    Ok(())
}

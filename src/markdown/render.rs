use pulldown_cmark::{html, Options, Parser};

use crate::markdown::error::MarkdownError;
use crate::markdown::template::{Content, Template, DEFAULT_TEMPLATE};

pub const PAGE_TITLE: &str = "Markdown Preview Tool";

/// Converts markdown to HTML and strips active content.
pub fn sanitized_body(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut unsafe_html = String::new();
    html::push_html(&mut unsafe_html, Parser::new_ext(markdown, options));

    ammonia::Builder::default().clean(&unsafe_html).to_string()
}

/// Renders a complete page: markdown body inside `template` (or the
/// built-in page), with `footer` shown at the bottom.
pub fn parse_content(
    markdown: &str,
    template: Option<&Template>,
    footer: &str,
) -> Result<String, MarkdownError> {
    let body = sanitized_body(markdown);
    let content = Content {
        title: PAGE_TITLE,
        body: &body,
        footer,
    };

    let page = match template {
        Some(template) => template.render(&content),
        None => Template::parse(DEFAULT_TEMPLATE)?.render(&content),
    };
    Ok(page)
}

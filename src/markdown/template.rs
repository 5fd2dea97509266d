//! HTML page templates with `{{ .Title }}`, `{{ .Body }}` and `{{ .Footer }}`
//! placeholders.

use std::path::Path;

use crate::markdown::error::TemplateError;

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
	<head>
		<meta http-equiv="content-type" content="text/html; charset=utf-8">
		<title>{{ .Title }}</title>
	</head>
	<body>
{{ .Body }}
		<footer>
{{ .Footer }}
		</footer>
	</body>
</html>
"#;

/// Values substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct Content<'a> {
    pub title: &'a str,
    /// Sanitized HTML, inserted without escaping.
    pub body: &'a str,
    pub footer: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Body,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after_open = &rest[start + 2..];
            let end = after_open
                .find("}}")
                .ok_or(TemplateError::Unclosed { offset: offset + start })?;
            segments.push(Segment::Field(parse_action(&after_open[..end], offset + start)?));

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn render(&self, content: &Content<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(Field::Title) => escape_into(&mut out, content.title),
                Segment::Field(Field::Body) => out.push_str(content.body),
                Segment::Field(Field::Footer) => escape_into(&mut out, content.footer),
            }
        }
        out
    }
}

fn parse_action(action: &str, offset: usize) -> Result<Field, TemplateError> {
    let name = action.trim();
    match name {
        ".Title" => Ok(Field::Title),
        ".Body" => Ok(Field::Body),
        ".Footer" => Ok(Field::Footer),
        _ => Err(TemplateError::UnknownAction {
            action: name.to_string(),
            offset,
        }),
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

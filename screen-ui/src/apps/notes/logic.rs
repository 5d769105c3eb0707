//! Pure import/export logic for notes documents.

use screen_types::NoteDocument;

use crate::error::ScreenError;

const HTML_CONTENT_OPEN: &str = "<pre class=\"note-content\">";
const HTML_CONTENT_CLOSE: &str = "</pre>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    PlainText,
    Markdown,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Html,
        ExportFormat::PlainText,
        ExportFormat::Markdown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::PlainText => "Plain text",
            ExportFormat::Markdown => "Markdown",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html",
            ExportFormat::PlainText => "text/plain",
            ExportFormat::Markdown => "text/markdown",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::PlainText => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn unescape_html(escaped: &str) -> String {
    escaped
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

/// Render a document in the requested format. The HTML form keeps the raw
/// content in a marked block so [`import_note`] can recover it exactly.
pub fn export_note(doc: &NoteDocument, format: ExportFormat) -> String {
    match format {
        ExportFormat::Html => format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             </head>\n<body>\n<h1>{title}</h1>\n{open}{content}{close}\n</body>\n</html>\n",
            title = escape_html(&doc.title),
            open = HTML_CONTENT_OPEN,
            content = escape_html(&doc.content),
            close = HTML_CONTENT_CLOSE,
        ),
        ExportFormat::PlainText => format!("{}\n\n{}", doc.title, doc.content),
        ExportFormat::Markdown => format!("# {}\n\n{}", doc.title, doc.content),
    }
}

/// Parse `(title, content)` back out of an exported document. Malformed
/// input is an error and must leave caller state untouched.
pub fn import_note(raw: &str, format: ExportFormat) -> Result<(String, String), ScreenError> {
    match format {
        ExportFormat::Html => {
            let title = raw
                .split_once("<title>")
                .and_then(|(_, rest)| rest.split_once("</title>"))
                .map(|(title, _)| unescape_html(title))
                .ok_or_else(|| ScreenError::Validation("HTML import has no title".into()))?;

            let start = raw
                .find(HTML_CONTENT_OPEN)
                .ok_or_else(|| ScreenError::Validation("HTML import has no content block".into()))?
                + HTML_CONTENT_OPEN.len();
            let end = raw[start..]
                .rfind(HTML_CONTENT_CLOSE)
                .ok_or_else(|| ScreenError::Validation("HTML content block is unterminated".into()))?
                + start;

            Ok((title, unescape_html(&raw[start..end])))
        }
        ExportFormat::Markdown => {
            let rest = raw
                .strip_prefix("# ")
                .ok_or_else(|| ScreenError::Validation("Markdown import has no heading".into()))?;
            let (title, content) = rest.split_once('\n').unwrap_or((rest, ""));
            Ok((
                title.trim_end().to_string(),
                content.strip_prefix('\n').unwrap_or(content).to_string(),
            ))
        }
        ExportFormat::PlainText => {
            if raw.trim().is_empty() {
                return Err(ScreenError::Validation("plain text import is empty".into()));
            }
            let (title, content) = raw.split_once('\n').unwrap_or((raw, ""));
            Ok((
                title.trim_end().to_string(),
                content.strip_prefix('\n').unwrap_or(content).to_string(),
            ))
        }
    }
}

/// Safe filename from a document title.
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let stem = stem.trim_matches('-');
    let stem = if stem.is_empty() { "note" } else { stem };
    format!("{stem}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, content: &str) -> NoteDocument {
        let mut d = NoteDocument::new(title);
        d.content = content.to_string();
        d
    }

    #[test]
    fn html_export_import_round_trips_exactly() {
        let original = doc(
            "Session 12 <recap>",
            "The crew hit \"Biotechnica\" & bailed.\n\n<next>: chase scene",
        );
        let html = export_note(&original, ExportFormat::Html);
        let (title, content) = import_note(&html, ExportFormat::Html).unwrap();
        assert_eq!(title, original.title);
        assert_eq!(content, original.content);
    }

    #[test]
    fn malformed_html_is_rejected() {
        assert!(import_note("<html><body>hi</body></html>", ExportFormat::Html).is_err());
        assert!(import_note("", ExportFormat::Html).is_err());
    }

    #[test]
    fn markdown_round_trips_title_and_body() {
        let original = doc("Heist plan", "step one\nstep two");
        let md = export_note(&original, ExportFormat::Markdown);
        let (title, content) = import_note(&md, ExportFormat::Markdown).unwrap();
        assert_eq!(title, "Heist plan");
        assert_eq!(content, "step one\nstep two");
    }

    #[test]
    fn markdown_without_heading_is_rejected() {
        assert!(import_note("just some text", ExportFormat::Markdown).is_err());
    }

    #[test]
    fn plain_text_uses_first_line_as_title() {
        let (title, content) = import_note("Shopping\n\nammo\nmedkit", ExportFormat::PlainText).unwrap();
        assert_eq!(title, "Shopping");
        assert_eq!(content, "ammo\nmedkit");

        assert!(import_note("   \n  ", ExportFormat::PlainText).is_err());
    }

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(
            export_filename("Session 12: The Fall", ExportFormat::Html),
            "session-12--the-fall.html"
        );
        assert_eq!(export_filename("???", ExportFormat::Markdown), "note.md");
    }
}

//! Netscape-style bookmark markup.
//!
//! The document is assembled by plain concatenation: a fixed header, one
//! `<dt>`/`<dd>` pair per bookmark in the order they are pushed, and a fixed
//! footer. Importers match on this exact shape, so the templates below are
//! kept byte-for-byte stable.

use crate::model::BookmarkEntry;
use std::fmt;

const HEADER: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>Bookmarks</title>
</head>
<body>
<h1>Bookmarks</h1>
<dl>";

const FOOTER: &str = "
</dl>
</body>
</html>";

#[cfg(test)]
const ENTRY_MARKER: &str = "<dt><a href=";

/// Escape text for use inside markup and double- or single-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one entry. Fields are written as-is; escaping happens when the
/// entry is built.
fn render_entry(entry: &BookmarkEntry) -> String {
    format!(
        "\n    <dt><a href=\"{}\" time_added=\"{}\" tags=\"{}\">{}</a></dt>\n    <dd>{}</dd>",
        entry.url, entry.time_added, entry.tags, entry.title, entry.description
    )
}

/// The finished bookmark file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDocument(String);

impl BookmarkDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn entry_count(&self) -> usize {
        self.0.matches(ENTRY_MARKER).count()
    }
}

impl fmt::Display for BookmarkDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
pub struct DocumentBuilder {
    buf: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            buf: HEADER.to_string(),
        }
    }

    pub fn push_entry(&mut self, entry: &BookmarkEntry) {
        self.buf.push_str(&render_entry(entry));
    }

    pub fn finish(mut self) -> BookmarkDocument {
        self.buf.push_str(FOOTER);
        BookmarkDocument(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> BookmarkEntry {
        BookmarkEntry {
            title: "Title".into(),
            url: "https://x.test/a".into(),
            time_added: "2023-05-01 10:00:00".into(),
            tags: "news,tech".into(),
            description: "<b>raw</b>".into(),
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"A&B <i> "q" 'a'"#),
            "A&amp;B &lt;i&gt; &quot;q&quot; &#x27;a&#x27;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn empty_document_is_header_and_footer() {
        let doc = DocumentBuilder::new().finish();
        assert!(doc.as_str().starts_with("<!DOCTYPE html>\n<html>\n<head>"));
        assert!(doc.as_str().contains("<h1>Bookmarks</h1>\n<dl>\n</dl>"));
        assert!(doc.as_str().ends_with("</dl>\n</body>\n</html>"));
        assert_eq!(doc.entry_count(), 0);
    }

    #[test]
    fn entry_fragment_layout() {
        assert_eq!(
            render_entry(&entry()),
            "\n    <dt><a href=\"https://x.test/a\" time_added=\"2023-05-01 10:00:00\" tags=\"news,tech\">Title</a></dt>\n    <dd><b>raw</b></dd>"
        );
    }

    #[test]
    fn entries_keep_push_order() {
        let mut builder = DocumentBuilder::new();
        let mut second = entry();
        second.title = "Second".into();
        builder.push_entry(&entry());
        builder.push_entry(&second);
        let doc = builder.finish();

        assert_eq!(doc.entry_count(), 2);
        let first_at = doc.as_str().find(">Title<").unwrap();
        let second_at = doc.as_str().find(">Second<").unwrap();
        assert!(first_at < second_at);
    }
}

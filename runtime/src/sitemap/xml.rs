//! Small XML writing helpers shared by the sitemap generators.
//!
//! Documents are assembled as strings; every text node and attribute value
//! passes through [`escape`] so unexpected input cannot break well-formedness.

use chrono::NaiveDate;
use std::borrow::Cow;
use std::fmt::Write;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
pub const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";
pub const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";

/// Priority written when an entry carries a non-finite value.
pub const DEFAULT_PRIORITY: f64 = 0.5;

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape `& < > ' "` for text and attribute content. Characters XML 1.0
/// cannot represent at all are dropped.
pub fn escape(raw: &str) -> Cow<'_, str> {
    if raw.chars().all(is_xml_char) {
        return quick_xml::escape::escape(raw);
    }
    let cleaned: String = raw.chars().filter(|c| is_xml_char(*c)).collect();
    Cow::Owned(quick_xml::escape::escape(&cleaned).into_owned())
}

/// `lastmod` format used by every generator: date only.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Render a priority with at most two decimals and at least one.
pub fn format_priority(priority: f64) -> String {
    let clamped = if priority.is_finite() {
        priority.clamp(0.0, 1.0)
    } else {
        DEFAULT_PRIORITY
    };
    let mut text = format!("{clamped:.2}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

/// Indented element writer over a `String` buffer.
pub struct XmlBuf {
    out: String,
}

impl XmlBuf {
    pub fn new() -> Self {
        let mut out = String::with_capacity(4096);
        out.push_str(XML_DECLARATION);
        out.push('\n');
        Self { out }
    }

    /// Open the root element with its namespace declarations.
    pub fn open_root(&mut self, name: &str, namespaces: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(name);
        for (prefix, uri) in namespaces {
            let _ = write!(self.out, r#" {prefix}="{}""#, escape(uri));
        }
        self.out.push_str(">\n");
    }

    pub fn open(&mut self, depth: usize, name: &str) {
        self.indent(depth);
        let _ = writeln!(self.out, "<{name}>");
    }

    pub fn close(&mut self, depth: usize, name: &str) {
        self.indent(depth);
        let _ = writeln!(self.out, "</{name}>");
    }

    /// `<name>text</name>` on its own line.
    pub fn text(&mut self, depth: usize, name: &str, text: &str) {
        self.indent(depth);
        let _ = writeln!(self.out, "<{name}>{}</{name}>", escape(text));
    }

    pub fn opt_text(&mut self, depth: usize, name: &str, text: Option<&str>) {
        if let Some(text) = text {
            self.text(depth, name, text);
        }
    }

    /// Self-closing element with attributes.
    pub fn empty(&mut self, depth: usize, name: &str, attrs: &[(&str, &str)]) {
        self.indent(depth);
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            let _ = write!(self.out, r#" {key}="{}""#, escape(value));
        }
        self.out.push_str(" />\n");
    }

    pub fn comment(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        // `--` is not allowed inside comments; split every dash run.
        let mut body = String::with_capacity(text.len());
        for c in text.chars().filter(|c| is_xml_char(*c)) {
            if c == '-' && body.ends_with('-') {
                body.push(' ');
            }
            body.push(c);
        }
        let _ = writeln!(self.out, "<!-- {body} -->");
    }

    pub fn finish(mut self, root: &str) -> String {
        let _ = writeln!(self.out, "</{root}>");
        self.out
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
    }
}

impl Default for XmlBuf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_priority() {
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.95), "0.95");
        assert_eq!(format_priority(0.8), "0.8");
        assert_eq!(format_priority(0.65), "0.65");
        assert_eq!(format_priority(0.8 - 0.1), "0.7");
        assert_eq!(format_priority(1.7), "1.0");
        assert_eq!(format_priority(f64::NAN), "0.5");
        assert_eq!(format_priority(f64::INFINITY), "0.5");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(d), "2025-01-05");
    }

    #[test]
    fn test_text_is_escaped() {
        let mut buf = XmlBuf::new();
        buf.open_root("root", &[]);
        buf.text(1, "loc", "https://x.test/?a=1&b=<2>");
        buf.empty(1, "link", &[("href", "\"quoted\"")]);
        let xml = buf.finish("root");
        assert!(xml.contains("<loc>https://x.test/?a=1&amp;b=&lt;2&gt;</loc>"));
        assert!(xml.contains(r#"href="&quot;quoted&quot;""#));
    }

    #[test]
    fn test_comment_strips_double_dash() {
        let mut buf = XmlBuf::new();
        buf.open_root("r", &[]);
        buf.comment(1, "a -- b");
        let xml = buf.finish("r");
        assert!(xml.contains("<!-- a - - b -->"));
    }

    #[test]
    fn test_comment_splits_dash_runs() {
        let mut buf = XmlBuf::new();
        buf.open_root("r", &[]);
        buf.comment(1, "a --- b ----");
        let xml = buf.finish("r");
        let body = xml
            .split("<!--")
            .nth(1)
            .and_then(|rest| rest.split("-->").next())
            .unwrap();
        assert_eq!(body, " a - - - b - - - - ");
        assert!(!body.contains("--"));
    }

    #[test]
    fn test_forbidden_characters_are_dropped() {
        assert_eq!(escape("a\u{1}b\u{B}c\u{FFFE}"), "abc");
        assert_eq!(escape("tab\tline\n"), "tab\tline\n");
        assert_eq!(escape("x\u{0}&y"), "x&amp;y");

        let mut buf = XmlBuf::new();
        buf.open_root("r", &[]);
        buf.text(1, "loc", "https://example.com/a\u{1}b");
        buf.empty(1, "link", &[("href", "\u{1F}x")]);
        let xml = buf.finish("r");
        assert!(xml.contains("<loc>https://example.com/ab</loc>"));
        assert!(xml.contains(r#"href="x""#));
        assert!(!xml.chars().any(|c| !is_xml_char(c)));
    }
}

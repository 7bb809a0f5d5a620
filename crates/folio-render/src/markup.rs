//! Small HTML helpers shared by the formatters.

use std::fmt::Write;

use minijinja::HtmlEscape;

/// Escape text for use in element content and double-quoted attributes.
/// Same rules as the layout template's autoescape, so `/` becomes `&#x2f;`.
pub fn escape(text: &str) -> String {
    HtmlEscape(text).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "alert-info",
            NoticeLevel::Warning => "alert-warning",
            NoticeLevel::Error => "alert-error",
        }
    }
}

/// Inline notice box (info / warning / error).
pub fn notice(out: &mut String, level: NoticeLevel, text: &str) {
    let _ = write!(out, r#"<div class="alert {}">{}</div>"#, level.class(), escape(text));
}

/// Split free text into `<p>` blocks on blank lines, collapsing the
/// indentation and line breaks inside each block.
pub fn paragraphs(out: &mut String, text: &str) {
    let mut block: Vec<&str> = Vec::new();
    for line in text.lines().chain(std::iter::once("")) {
        let line = line.trim();
        if line.is_empty() {
            if !block.is_empty() {
                let _ = write!(out, "<p>{}</p>", escape(&block.join(" ")));
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
}

/// Tag chips, in input order.
pub fn tag_chips(out: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    out.push_str(r#"<div class="tags">"#);
    let chips: Vec<String> = tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
        .collect();
    out.push_str(&chips.join(" "));
    out.push_str("</div>");
}

/// `<h3>` heading followed by a bullet list, skipped when `items` is empty.
pub fn bullet_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(out, "<h3>{}</h3><ul>", escape(heading));
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;&#x2f;a&gt;");
        assert_eq!(escape("https://x/y?a=1&b=2"), "https:&#x2f;&#x2f;x&#x2f;y?a=1&amp;b=2");
        assert_eq!(escape("plain ✓"), "plain ✓");
    }

    #[test]
    fn test_paragraphs_collapse_indentation() {
        let mut out = String::new();
        paragraphs(&mut out, "\n    First line\n    continues.\n\n    Second.\n    ");
        assert_eq!(out, "<p>First line continues.</p><p>Second.</p>");
    }

    #[test]
    fn test_tag_chips_order() {
        let mut out = String::new();
        tag_chips(&mut out, &["Robotics".to_string(), "Computer Vision".to_string()]);
        let a = out.find("Robotics").unwrap();
        let b = out.find("Computer Vision").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_empty_bullet_section_emits_nothing() {
        let mut out = String::new();
        bullet_section(&mut out, "Key Findings", &[]);
        assert!(out.is_empty());
    }
}

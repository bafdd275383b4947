//! Heading-based decomposition of rendered item html.
//!
//! ```text
//! <h1>Day 3</h1>            preamble, dropped
//! <h2>Focus Area</h2>       ─┐
//! <p>Parsers</p>             ├─ Subsection { id: "focus-area", .. }
//! <h2>What I Learned</h2>   ─┐
//! <p>Lifetimes</p>           ├─ Subsection { id: "what-i-learned", .. }
//! ```

pub mod heuristics;
pub mod view;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use heuristics::StyleCategory;
pub use view::{StructuredView, ViewEntry};

/// Maximum length of a subsection id, in chars.
pub const MAX_ID_LEN: usize = 30;

/// Level-2 heading element. Attributes allowed, content may span lines.
static H2_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h2(?:\s[^>]*)?>(.*?)</h2\s*>").expect("valid h2 regex")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// One titled fragment of an item's html.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    pub id: String,
    pub title: String,
    pub html: String,
}

/// Split `html` at level-2 headings.
///
/// Content before the first heading is dropped, as is any heading with an
/// empty title or a whitespace-only body.
pub fn segment(html: &str) -> Vec<Subsection> {
    let headings: Vec<_> = H2_RE.captures_iter(html).collect();
    let mut subsections = Vec::with_capacity(headings.len());

    for (i, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let body_end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(html.len(), |m| m.start());

        let title = decode_entities(TAG_RE.replace_all(inner.as_str(), "").trim());
        let body = html[whole.end()..body_end].trim();
        if title.is_empty() || body.is_empty() {
            continue;
        }

        subsections.push(Subsection {
            id: subsection_id(&title),
            title,
            html: body.to_owned(),
        });
    }

    subsections
}

/// Decode the entities a markup renderer emits in heading text.
pub fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, &str); 7] = [
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&#x27;", "'"),
        ("&#x2F;", "/"),
    ];

    if !text.contains('&') {
        return text.to_owned();
    }
    ENTITIES
        .iter()
        .fold(text.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Fragment id: lowercase alphanumerics, whitespace runs as `-`, at most
/// [`MAX_ID_LEN`] chars.
pub fn subsection_id(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let mut id = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.push(c);
            in_space = false;
        }
    }

    id.chars().take(MAX_ID_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic() {
        let html = "<h1>Day 3</h1>\n<p>intro</p>\n<h2>Focus Area</h2>\n<p>Parsers</p>\n\
                    <h2>What I Learned</h2>\n<p>Lifetimes</p>\n";
        let subs = segment(html);
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].id, "focus-area");
        assert_eq!(subs[0].title, "Focus Area");
        assert_eq!(subs[0].html, "<p>Parsers</p>");
        assert_eq!(subs[1].id, "what-i-learned");
        assert_eq!(subs[1].html, "<p>Lifetimes</p>");
    }

    #[test]
    fn test_segment_no_headings() {
        assert!(segment("<p>just text</p>").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_segment_drops_empty_bodies_and_titles() {
        let html = "<h2>Empty</h2>\n  \n<h2>  </h2><p>orphan</p><h2>Kept</h2><p>x</p>";
        let subs = segment(html);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].title, "Kept");
    }

    #[test]
    fn test_segment_attributes_case_and_multiline() {
        let html = "<H2 id=\"plan\" class=\"x\">Next\nSession <em>Plan</em></H2><p>a</p>";
        let subs = segment(html);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].title, "Next\nSession Plan");
        assert_eq!(subs[0].id, "next-session-plan");
    }

    #[test]
    fn test_segment_ignores_other_h_tags() {
        let html = "<h2>A</h2><h3>Sub</h3><p>a</p><header>x</header><h2x>y</h2x>";
        let subs = segment(html);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].html, "<h3>Sub</h3><p>a</p><header>x</header><h2x>y</h2x>");
    }

    #[test]
    fn test_segment_unclosed_heading_is_body() {
        let html = "<h2>A</h2><p>a</p><h2>Broken<p>b</p>";
        let subs = segment(html);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].html, "<p>a</p><h2>Broken<p>b</p>");
    }

    #[test]
    fn test_segment_nested_heading_stops_at_first_close() {
        let html = "<h2>Outer <h2>Inner</h2> tail</h2><p>a</p>";
        let subs = segment(html);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].title, "Outer Inner");
        assert_eq!(subs[0].html, "tail</h2><p>a</p>");
    }

    #[test]
    fn test_segment_decodes_entities() {
        let subs = segment("<h2>Tips &amp; Tricks for a &lt; b</h2><p>x</p>");
        assert_eq!(subs[0].title, "Tips & Tricks for a < b");
        assert_eq!(subs[0].id, "tips-tricks-for-a-b");
    }

    #[test]
    fn test_segment_keeps_duplicate_ids() {
        let subs = segment("<h2>Notes</h2><p>a</p><h2>Notes</h2><p>b</p>");
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].id, subs[1].id);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &quot;b&quot; &#39;c&#x27; d&#x2F;e"), "a \"b\" 'c' d/e");
        assert_eq!(decode_entities("&gt; plain"), "> plain");
        assert_eq!(decode_entities("no entities"), "no entities");
        // &amp; is decoded first
        assert_eq!(decode_entities("&amp;lt;"), "<");
    }

    #[test]
    fn test_subsection_id() {
        assert_eq!(subsection_id("What I'd Do Differently"), "what-id-do-differently");
        assert_eq!(subsection_id("What I Actually Built / Did"), "what-i-actually-built-did");
        assert_eq!(subsection_id("Energy & Focus Check"), "energy-focus-check");
    }

    #[test]
    fn test_subsection_id_truncates() {
        let id = subsection_id("What Challenged or Confused Me Most Today");
        assert_eq!(id, "what-challenged-or-confused-me");
        assert_eq!(id.chars().count(), MAX_ID_LEN);
    }

    #[test]
    fn test_subsection_id_leading_pictograph() {
        assert_eq!(subsection_id("🧠 What I Learned"), "-what-i-learned");
    }

    #[test]
    fn test_subsection_id_unicode_letters() {
        assert_eq!(subsection_id("Über Café"), "über-café");
        assert_eq!(subsection_id("日本語 メモ"), "日本語-メモ");
    }
}

//! Frontmatter extraction.
//!
//! A document may start with a block of `key: value` lines fenced by `---`:
//!
//! ```text
//! ---
//! title: "Hello World"
//! date: 2024-01-15
//! tags: [rust, "web"]
//! ---
//! Body text...
//! ```
//!
//! Parsing is line based and never fails. Anything that does not look like a
//! fenced block leaves the document untouched with no fields.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `---` fence, the block, closing `---` fence, then the body.
///
/// Trailing blanks on fence lines and CRLF endings are tolerated; the closing
/// fence may be the last line of the file.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)(.*)\z")
        .expect("valid frontmatter regex")
});

/// A raw frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    Scalar(String),
    List(Vec<String>),
}

impl FrontmatterValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

/// Result of splitting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Parsed `key: value` pairs, later keys overwrite earlier ones.
    pub fields: BTreeMap<String, FrontmatterValue>,
    /// Document text after the closing fence (the whole input when no block).
    pub body: String,
}

/// Split `text` into frontmatter fields and body.
pub fn parse_frontmatter(text: &str) -> Frontmatter {
    let Some(caps) = FRONTMATTER_RE.captures(text) else {
        return Frontmatter {
            fields: BTreeMap::new(),
            body: text.to_owned(),
        };
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    Frontmatter {
        fields: parse_block(block),
        body: body.to_owned(),
    }
}

/// Parse the lines between the fences.
fn parse_block(block: &str) -> BTreeMap<String, FrontmatterValue> {
    let mut fields = BTreeMap::new();

    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_owned(), parse_value(value.trim()));
    }

    fields
}

/// Parse one raw (already trimmed) value.
pub fn parse_value(raw: &str) -> FrontmatterValue {
    if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
        let items = parse_json_list(raw).unwrap_or_else(|| split_list(&raw[1..raw.len() - 1]));
        return FrontmatterValue::List(items);
    }
    FrontmatterValue::Scalar(strip_quotes(raw).to_owned())
}

/// Structured list: a JSON array of scalars.
///
/// Strings are taken verbatim, numbers and booleans by their JSON text.
/// Returns `None` for invalid JSON or nested / null elements.
fn parse_json_list(raw: &str) -> Option<Vec<String>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
    values
        .into_iter()
        .map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

/// Fallback list syntax: `a, 'b', "c"`.
fn split_list(inner: &str) -> Vec<String> {
    inner
        .split(',')
        .map(|item| strip_quotes(item.trim()).to_owned())
        .collect()
}

/// Strip one leading and one trailing quote character (`"` or `'`).
///
/// The two ends are handled independently, so `'text"` becomes `text`.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

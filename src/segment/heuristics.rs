//! Title heuristics for structured subsections: icons and style categories.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::schema::IconTable;

static LEADING_PICTOGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Emoji_Presentation}\p{Extended_Pictographic}]")
        .expect("valid pictograph regex")
});

/// A run of pictographs (with variation selectors and joiners) plus trailing space.
static PICTOGRAPH_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[\p{Emoji_Presentation}\p{Extended_Pictographic}][\x{FE0F}\x{200D}]*)+)\s*")
        .expect("valid pictograph run regex")
});

/// Whether the trimmed title begins with an emoji-like glyph.
pub fn starts_with_pictograph(title: &str) -> bool {
    LEADING_PICTOGRAPH_RE.is_match(title.trim())
}

/// Split a title into its leading pictographs and the remaining text.
///
/// Both parts are trimmed; the glyph part is empty when there is none.
pub fn split_leading_pictograph(title: &str) -> (&str, &str) {
    let trimmed = title.trim();
    match PICTOGRAPH_RUN_RE.captures(trimmed) {
        Some(caps) => {
            let (Some(whole), Some(glyphs)) = (caps.get(0), caps.get(1)) else {
                return ("", trimmed);
            };
            (glyphs.as_str(), trimmed[whole.end()..].trim())
        }
        None => ("", trimmed),
    }
}

/// Icon for a subsection title.
///
/// `None` for a blank title or one that already carries a pictograph.
/// Otherwise an exact match, then the first entry (in table order) whose key
/// contains the title or is contained by it, ignoring case.
pub fn infer_icon(title: &str, table: IconTable) -> Option<&'static str> {
    if title.trim().is_empty() || starts_with_pictograph(title) {
        return None;
    }
    if let Some((_, icon)) = table.iter().find(|(key, _)| *key == title) {
        return Some(*icon);
    }

    let lower = title.to_lowercase();
    table
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            lower.contains(&key) || key.contains(&lower)
        })
        .map(|(_, icon)| *icon)
}

/// Visual category of a subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleCategory {
    Objective,
    Built,
    Learned,
    Challenged,
    Revision,
    Next,
    Energy,
    Reflection,
    Default,
}

impl StyleCategory {
    /// Keyword groups, checked in order; first hit wins.
    const RULES: [(Self, &'static [&'static str]); 8] = [
        (Self::Objective, &["objective", "focus"]),
        (Self::Built, &["built", "did"]),
        (Self::Learned, &["learned"]),
        (Self::Challenged, &["challenged", "confused"]),
        (Self::Revision, &["differently"]),
        (Self::Next, &["next", "plan"]),
        (Self::Energy, &["energy", "focus check"]),
        (Self::Reflection, &["reflection"]),
    ];

    pub fn infer(title: &str) -> Self {
        let lower = title.to_lowercase();
        Self::RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map_or(Self::Default, |(category, _)| *category)
    }

    /// CSS class for this category.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Objective => "section-objective",
            Self::Built => "section-built",
            Self::Learned => "section-learned",
            Self::Challenged => "section-challenged",
            Self::Revision => "section-differently",
            Self::Next => "section-next",
            Self::Energy => "section-energy",
            Self::Reflection => "section-reflection",
            Self::Default => "section-default",
        }
    }
}

/// Title is promoted to the header focus slot.
pub fn is_focus(title: &str) -> bool {
    title.to_lowercase().contains("focus")
}

/// Title is excluded from the body list.
pub fn is_focus_area(title: &str) -> bool {
    title.to_lowercase().contains("focus area")
}

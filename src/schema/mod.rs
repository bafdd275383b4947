//! Display schemas: how a section's items are presented.
//!
//! # Resolution
//!
//! | Step | Input                               | Result          |
//! |------|-------------------------------------|-----------------|
//! | 1    | layout override naming a known key  | that schema     |
//! | 2    | section slug naming a known key     | that schema     |
//! | 3    | anything else                       | `posts` default |
//!
//! A key is named either by its section (`posts`, `technical-sessions`) or by
//! its layout (`article`, `technical-session`).

use std::sync::LazyLock;

use serde::Serialize;

/// Page layout used to present an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    Article,
    Structured,
}

/// Header variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    Minimal,
    Full,
    Structured,
}

/// Ordered `(subsection title, icon)` pairs.
pub type IconTable = &'static [(&'static str, &'static str)];

/// Presentation rules for one kind of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySchema {
    pub layout: LayoutKind,
    pub show_tags: bool,
    pub show_date: bool,
    pub show_author: bool,
    pub header_style: HeaderStyle,
    /// Split rendered html into subsections at level-2 headings
    pub extract_subsections: bool,
    pub icon_table: IconTable,
    /// CSS class prefix
    pub style_prefix: &'static str,
}

/// Icons for the technical-session template headings.
pub const SESSION_ICONS: IconTable = &[
    ("Focus Area", "🎯"),
    ("Objective for Today", "🎯"),
    ("What I Actually Built / Did", "🛠️"),
    ("What I Learned", "🧠"),
    ("What Challenged or Confused Me", "😕"),
    ("What I'd Do Differently", "🔁"),
    ("Next Session Plan", "▶️"),
    ("Energy & Focus Check", "⚡"),
    ("Quick Reflection", "💬"),
];

/// Declared schema keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKey {
    Posts,
    TechnicalSessions,
}

impl SchemaKey {
    pub const ALL: [Self; 2] = [Self::Posts, Self::TechnicalSessions];

    /// Section slug this key is declared under.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::TechnicalSessions => "technical-sessions",
        }
    }

    /// Layout name accepted as an alias in frontmatter overrides.
    pub const fn layout_name(self) -> &'static str {
        match self {
            Self::Posts => "article",
            Self::TechnicalSessions => "technical-session",
        }
    }

    /// Match a section slug or layout name exactly.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == name || key.layout_name() == name)
    }
}

/// Closed registry of display schemas with a mandatory default.
#[derive(Debug, Clone)]
pub struct DisplaySchemaRegistry {
    posts: DisplaySchema,
    technical_sessions: DisplaySchema,
}

impl DisplaySchemaRegistry {
    /// The built-in schemas.
    pub fn builtin() -> Self {
        Self {
            posts: DisplaySchema {
                layout: LayoutKind::Article,
                show_tags: false,
                show_date: true,
                show_author: true,
                header_style: HeaderStyle::Minimal,
                extract_subsections: false,
                icon_table: &[],
                style_prefix: "article",
            },
            technical_sessions: DisplaySchema {
                layout: LayoutKind::Structured,
                show_tags: true,
                show_date: true,
                show_author: false,
                header_style: HeaderStyle::Structured,
                extract_subsections: true,
                icon_table: SESSION_ICONS,
                style_prefix: "session",
            },
        }
    }

    pub const fn get(&self, key: SchemaKey) -> &DisplaySchema {
        match key {
            SchemaKey::Posts => &self.posts,
            SchemaKey::TechnicalSessions => &self.technical_sessions,
        }
    }

    pub const fn default_schema(&self) -> &DisplaySchema {
        &self.posts
    }

    /// Resolve the schema for an item in `section`, honoring `layout_override`.
    pub fn schema_for_content(&self, section: &str, layout_override: Option<&str>) -> &DisplaySchema {
        layout_override
            .and_then(SchemaKey::parse)
            .or_else(|| SchemaKey::parse(section))
            .map_or(self.default_schema(), |key| self.get(key))
    }
}

impl Default for DisplaySchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

static REGISTRY: LazyLock<DisplaySchemaRegistry> = LazyLock::new(DisplaySchemaRegistry::builtin);

/// The process-wide built-in registry.
#[inline]
pub fn registry() -> &'static DisplaySchemaRegistry {
    &REGISTRY
}

/// [`DisplaySchemaRegistry::schema_for_content`] on the built-in registry.
pub fn schema_for_content(section: &str, layout_override: Option<&str>) -> &'static DisplaySchema {
    registry().schema_for_content(section, layout_override)
}

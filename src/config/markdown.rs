//! `[markdown]` section configuration.
//!
//! Toggles the CommonMark extensions used when rendering item bodies.

use super::defaults;
use educe::Educe;
use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

/// `[markdown]` section in folio.toml.
///
/// # Example
/// ```toml
/// [markdown]
/// tables = true
/// footnotes = false
/// smart_punctuation = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// GitHub-style tables.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub tables: bool,

    /// `~~strikethrough~~`.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub strikethrough: bool,

    /// `- [x]` task list items.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub tasklists: bool,

    /// `[^1]` footnotes.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub footnotes: bool,

    /// Curly quotes and dashes.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub smart_punctuation: bool,

    /// `{#id .class}` heading attributes (rendered as `<h2 id="...">`).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub heading_attributes: bool,
}

impl MarkdownConfig {
    /// Convert to pulldown-cmark parser options.
    pub fn to_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.smart_punctuation {
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        if self.heading_attributes {
            options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        options
    }
}

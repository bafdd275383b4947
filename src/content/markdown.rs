//! Markdown body rendering.
//!
//! The indexer only depends on [`MarkupRenderer`]; the default implementation
//! is CommonMark via pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

/// Converts an item body to HTML.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, body: &str) -> String;
}

/// CommonMark renderer backed by pulldown-cmark.
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    pub fn new(config: &MarkdownConfig) -> Self {
        Self {
            options: config.to_options(),
        }
    }

    pub const fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

impl MarkupRenderer for CommonMarkRenderer {
    fn render(&self, body: &str) -> String {
        let parser = Parser::new_ext(body, self.options);
        let mut out = String::with_capacity(body.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl<F> MarkupRenderer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render(&self, body: &str) -> String {
        self(body)
    }
}

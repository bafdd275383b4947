//! Render-ready view of one item under its display schema.

use serde::Serialize;

use super::heuristics::{
    StyleCategory, infer_icon, is_focus, is_focus_area, split_leading_pictograph,
};
use super::{Subsection, segment};
use crate::data::Item;
use crate::schema::{DisplaySchema, schema_for_content};

/// One body subsection, decorated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEntry {
    pub id: String,
    /// Title without its leading pictograph
    pub title: String,
    pub icon: Option<String>,
    pub category: StyleCategory,
    pub style_class: &'static str,
    pub html: String,
}

impl ViewEntry {
    fn new(subsection: Subsection, schema: &DisplaySchema) -> Self {
        let (glyphs, text) = split_leading_pictograph(&subsection.title);
        let icon = if glyphs.is_empty() {
            infer_icon(&subsection.title, schema.icon_table).map(str::to_owned)
        } else {
            Some(glyphs.to_owned())
        };
        let category = StyleCategory::infer(&subsection.title);

        Self {
            title: text.to_owned(),
            icon,
            category,
            style_class: category.css_class(),
            id: subsection.id,
            html: subsection.html,
        }
    }
}

/// Header fields plus either decorated subsections or the raw html.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredView {
    pub title: String,
    /// Long-form date, when the schema shows dates
    pub formatted_date: Option<String>,
    /// Long-form update date, whenever it parses
    pub formatted_updated: Option<String>,
    /// Empty unless the schema shows tags
    pub tags: Vec<String>,
    pub author: Option<String>,
    /// Html of the first subsection mentioning "focus"
    pub focus_html: Option<String>,
    pub entries: Vec<ViewEntry>,
    /// Whole item html when nothing was extracted
    pub fallback_html: Option<String>,
}

impl StructuredView {
    pub fn build(item: &Item, schema: &DisplaySchema) -> Self {
        let meta = &item.metadata;
        let subsections = if schema.extract_subsections {
            segment(&item.html)
        } else {
            Vec::new()
        };

        let fallback_html = subsections.is_empty().then(|| item.html.clone());
        let focus_html = subsections
            .iter()
            .find(|s| is_focus(&s.title))
            .map(|s| s.html.clone());
        let entries = subsections
            .into_iter()
            .filter(|s| !is_focus_area(&s.title))
            .map(|s| ViewEntry::new(s, schema))
            .collect();

        Self {
            title: meta.title.clone(),
            formatted_date: schema
                .show_date
                .then(|| meta.date())
                .flatten()
                .map(|d| d.format_long()),
            formatted_updated: meta.updated().map(|d| d.format_long()),
            tags: if schema.show_tags {
                meta.tags.clone()
            } else {
                Vec::new()
            },
            author: meta.author.clone().filter(|_| schema.show_author),
            focus_html,
            entries,
            fallback_html,
        }
    }

    /// Build with the schema resolved from the item's section and layout override.
    pub fn for_item(item: &Item) -> Self {
        let schema = schema_for_content(&item.section, item.metadata.layout.as_deref());
        Self::build(item, schema)
    }
}

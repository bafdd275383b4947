//! Typed item metadata.
//!
//! Recognized frontmatter keys become typed fields; every other key is kept
//! verbatim in [`Metadata::extra`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::frontmatter::FrontmatterValue;
use crate::utils::date::ContentDate;

/// Metadata of one content item.
///
/// Optional scalar fields are `None` when the key is missing or its value is
/// empty. A list given for a scalar field is joined with `", "`; a scalar
/// given for `tags` is split on commas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display title (falls back to the item slug)
    pub title: String,

    /// Publication date as written in the frontmatter (e.g., "2024-01-15")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Owning section slug (always the section directory name)
    pub section: String,

    /// Display schema override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Last update date as written in the frontmatter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    /// Unrecognized keys, unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, FrontmatterValue>,
}

impl Metadata {
    /// Build metadata for item `slug` in section `section` from parsed fields.
    pub fn from_fields(
        mut fields: BTreeMap<String, FrontmatterValue>,
        slug: &str,
        section: &str,
    ) -> Self {
        let mut take = |key: &str| fields.remove(key).and_then(into_scalar);

        let title = take("title").unwrap_or_else(|| slug.to_owned());
        let date = take("date");
        let author = take("author");
        let description = take("description");
        let layout = take("layout");
        let updated = take("updated");

        let tags = fields.remove("tags").map(into_tags).unwrap_or_default();
        // The owning directory decides the section.
        fields.remove("section");

        Self {
            title,
            date,
            author,
            description,
            tags,
            section: section.to_owned(),
            layout,
            updated,
            extra: fields,
        }
    }

    /// Parsed publication date, if it is in a recognized format.
    pub fn date(&self) -> Option<ContentDate> {
        self.date.as_deref().and_then(ContentDate::parse)
    }

    /// Parsed update date, if it is in a recognized format.
    pub fn updated(&self) -> Option<ContentDate> {
        self.updated.as_deref().and_then(ContentDate::parse)
    }

    /// Look up an extension key.
    pub fn extra(&self, key: &str) -> Option<&FrontmatterValue> {
        self.extra.get(key)
    }
}

fn into_scalar(value: FrontmatterValue) -> Option<String> {
    let s = match value {
        FrontmatterValue::Scalar(s) => s,
        FrontmatterValue::List(items) => items.join(", "),
    };
    (!s.is_empty()).then_some(s)
}

fn into_tags(value: FrontmatterValue) -> Vec<String> {
    match value {
        FrontmatterValue::List(items) => items,
        FrontmatterValue::Scalar(s) => s
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect(),
    }
}

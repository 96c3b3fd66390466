//! Shared types used across all pipeline stages.
//!
//! These types flow between stages (select → assign → emit → link) and over
//! the site manifest boundary, so they are serde-serializable and must stay
//! identical across all modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A content item subject to pagination.
///
/// Items are owned by the surrounding publishing system; this crate only
/// reads them. The `data` bag carries front-matter-like values and is
/// consulted solely for the configured sort field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display title, if the item has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Hidden items never appear on any page.
    #[serde(default)]
    pub hidden: bool,
    /// Front-matter values (date, weight, ...) keyed by field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, serde_json::Value>,
}

/// A page-producing template known to the surrounding site.
///
/// The `paginate` flag is the site's opt-in marker: only flagged templates
/// seed a pagination stream in standard mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRef {
    /// Template path relative to the site root, e.g. `blog/index.html`.
    pub path: String,
    /// Whether this template opted into pagination.
    #[serde(default)]
    pub paginate: bool,
}

/// Opaque handle to a render target registered with the surrounding site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId(pub u64);

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artifact #{}", self.0)
    }
}

/// A contiguous slice of eligible items assigned to one page.
///
/// Buckets are contiguous, non-overlapping, and cover the eligible item set
/// exactly in selection order. Every bucket except possibly the last holds
/// exactly `per_page` items; the last holds at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBucket {
    /// 1-based page index.
    pub index: usize,
    /// Items on this page, in selection order.
    pub items: Vec<Item>,
    /// Page count of the whole sequence this bucket belongs to.
    pub total_pages: usize,
    /// Eligible item count across the whole sequence.
    pub total_items: usize,
}

/// The render target bound to one bucket and one template.
///
/// Created through the site integration boundary by the emit stage, then
/// augmented with navigation references by the link stage.
#[derive(Debug, Clone, Serialize)]
pub struct PageArtifact {
    /// Handle returned by the site when the artifact was registered.
    pub id: ArtifactId,
    /// Path of the template seeding this pagination stream.
    pub template: String,
    /// Resolved output path for this page.
    pub path: String,
    /// Resolved display title for this page.
    pub title: String,
    /// 1-based page index within the stream.
    pub index: usize,
    /// Items rendered on this page.
    pub items: Vec<Item>,
    /// Page count of the stream.
    pub total_pages: usize,
    /// Eligible item count across the stream.
    pub total_items: usize,
    /// Number of items on pages before this one.
    pub offset: usize,
    /// Number of items on pages after this one.
    pub remaining: usize,
    /// Index of the previous page, absent on the first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_index: Option<usize>,
    /// Index of the next page, absent on the last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_index: Option<usize>,
    pub is_first: bool,
    pub is_last: bool,
}

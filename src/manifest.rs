//! Site manifest loading and the manifest-backed site.
//!
//! The CLI does not embed in a host build system; it runs the pipeline
//! against a JSON description of the site instead. The manifest carries
//! exactly what the boundary needs — the item collection, the template
//! collection, and a fallback title:
//!
//! ```json
//! {
//!   "title": "My Site",
//!   "items": [
//!     { "title": "First post", "data": { "date": "2026-01-02" } },
//!     { "title": "Draft", "hidden": true }
//!   ],
//!   "templates": [
//!     { "path": "blog/index.html", "paginate": true },
//!     { "path": "about/index.html" }
//!   ]
//! }
//! ```
//!
//! [`ManifestSite`] implements the [`Site`] boundary over a loaded
//! manifest: created artifacts are appended to an in-memory page list and
//! removed from it on deregistration, mirroring how a host build mutates
//! its page collection in place.

use crate::site::{Site, SiteError};
use crate::types::{ArtifactId, Item, TemplateRef};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON description of the surrounding site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteManifest {
    /// Site-wide fallback title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Full item collection, in canonical order.
    pub items: Vec<Item>,
    /// All page-producing templates.
    pub templates: Vec<TemplateRef>,
}

impl SiteManifest {
    /// Load a site manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// A registered render target, tracked in memory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredPage {
    pub id: ArtifactId,
    pub path: String,
}

/// In-memory [`Site`] backed by a loaded manifest.
#[derive(Debug, Default)]
pub struct ManifestSite {
    manifest: SiteManifest,
    pages: Vec<RegisteredPage>,
    next_id: u64,
}

impl ManifestSite {
    pub fn new(manifest: SiteManifest) -> Self {
        Self {
            manifest,
            pages: Vec::new(),
            next_id: 0,
        }
    }

    /// Render targets registered so far, in creation order.
    pub fn pages(&self) -> &[RegisteredPage] {
        &self.pages
    }
}

impl Site for ManifestSite {
    fn title(&self) -> Option<String> {
        self.manifest.title.clone()
    }

    fn items(&self) -> Vec<Item> {
        self.manifest.items.clone()
    }

    fn templates(&self) -> Vec<TemplateRef> {
        self.manifest.templates.clone()
    }

    fn create_artifact(&mut self, path: &str) -> Result<ArtifactId, SiteError> {
        self.next_id += 1;
        let id = ArtifactId(self.next_id);
        self.pages.push(RegisteredPage {
            id,
            path: path.to_string(),
        });
        Ok(id)
    }

    fn remove_artifact(&mut self, id: ArtifactId) {
        self.pages.retain(|page| page.id != id);
    }
}

//! Shared test utilities for the quire test suite.
//!
//! Provides item/template builders, a recording fake for the site
//! integration boundary, and a collecting logger for asserting on
//! diagnostics.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut site = RecordingSite::new(vec![item("a"), hidden_item("b")], vec![template("blog/index.html")]);
//! let log = CollectingLogger::default();
//! let report = paginate(&raw, &mut site, &log).unwrap();
//!
//! assert_eq!(site.created_paths(), vec!["blog/index.html"]);
//! assert!(log.contains(Level::Info, "pagination"));
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::site::{Level, Logger, Site, SiteError};
use crate::types::{ArtifactId, Item, TemplateRef};

// =========================================================================
// Builders
// =========================================================================

/// Build a visible item titled `title`.
pub fn item(title: &str) -> Item {
    Item {
        title: Some(title.to_string()),
        hidden: false,
        data: BTreeMap::new(),
    }
}

/// Build a hidden item titled `title`.
pub fn hidden_item(title: &str) -> Item {
    Item {
        hidden: true,
        ..item(title)
    }
}

/// Build a visible item with a single front-matter entry.
pub fn item_with(title: &str, key: &str, value: serde_json::Value) -> Item {
    let mut it = item(title);
    it.data.insert(key.to_string(), value);
    it
}

/// Build a pagination-enabled template at `path`.
pub fn template(path: &str) -> TemplateRef {
    TemplateRef {
        path: path.to_string(),
        paginate: true,
    }
}

// =========================================================================
// Boundary fakes
// =========================================================================

/// Site fake that records every boundary call.
///
/// Set `fail_on` to a path to make `create_artifact` fail when asked for
/// exactly that path — for exercising mid-stream creation failures.
pub struct RecordingSite {
    pub title: Option<String>,
    pub items: Vec<Item>,
    pub templates: Vec<TemplateRef>,
    pub created: Vec<(ArtifactId, String)>,
    pub removed: Vec<ArtifactId>,
    pub fail_on: Option<String>,
    next_id: u64,
}

impl RecordingSite {
    pub fn new(items: Vec<Item>, templates: Vec<TemplateRef>) -> Self {
        Self {
            title: Some("Test Site".to_string()),
            items,
            templates,
            created: Vec::new(),
            removed: Vec::new(),
            fail_on: None,
            next_id: 0,
        }
    }

    /// Paths of all created artifacts, in creation order.
    pub fn created_paths(&self) -> Vec<&str> {
        self.created.iter().map(|(_, path)| path.as_str()).collect()
    }
}

impl Site for RecordingSite {
    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn templates(&self) -> Vec<TemplateRef> {
        self.templates.clone()
    }

    fn create_artifact(&mut self, path: &str) -> Result<ArtifactId, SiteError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(SiteError::Create {
                path: path.to_string(),
                reason: "scripted failure".to_string(),
            });
        }
        self.next_id += 1;
        let id = ArtifactId(self.next_id);
        self.created.push((id, path.to_string()));
        Ok(id)
    }

    fn remove_artifact(&mut self, id: ArtifactId) {
        self.removed.push(id);
        self.created.retain(|(created_id, _)| *created_id != id);
    }
}

/// Logger that collects `(level, message)` pairs for assertions.
#[derive(Default)]
pub struct CollectingLogger {
    pub messages: RefCell<Vec<(Level, String)>>,
}

impl CollectingLogger {
    /// True if any collected message at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl Logger for CollectingLogger {
    fn log(&self, level: Level, message: &str) {
        self.messages
            .borrow_mut()
            .push((level, message.to_string()));
    }
}

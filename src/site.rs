//! The site integration boundary.
//!
//! The pagination core never touches the surrounding build system directly.
//! Everything it needs — the item collection, the template collection, the
//! ability to register or deregister a render target — comes in through the
//! [`Site`] trait, and every diagnostic goes out through the [`Logger`]
//! trait. Both are injected by the caller, which keeps the core testable
//! against in-memory fakes and portable across host systems.
//!
//! ## Capabilities
//!
//! | Capability | Effect |
//! |------------|--------|
//! | `title` / `items` / `templates` | read-only snapshots of site state |
//! | `create_artifact` | registers a render target so the build emits it |
//! | `remove_artifact` | deregisters a previously created render target |
//!
//! The create/remove pair is assumed non-reentrant and not thread-safe: the
//! host's page list is mutated in place, synchronously, on one thread.

use crate::types::{ArtifactId, Item, TemplateRef};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("artifact registration failed for {path}: {reason}")]
    Create { path: String, reason: String },
}

/// Capabilities the surrounding build system supplies to the core.
pub trait Site {
    /// Site-wide fallback title, used when a page has no title of its own.
    fn title(&self) -> Option<String>;

    /// Full item collection, in the site's canonical order.
    fn items(&self) -> Vec<Item>;

    /// All page-producing templates known to the site.
    fn templates(&self) -> Vec<TemplateRef>;

    /// Register a new render target at `path` with the surrounding build.
    fn create_artifact(&mut self, path: &str) -> Result<ArtifactId, SiteError>;

    /// Deregister a previously created render target.
    fn remove_artifact(&mut self, id: ArtifactId);
}

/// Diagnostic severity for pagination log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Leveled diagnostics sink, injected alongside the [`Site`].
///
/// Logging is non-critical: implementations must not fail, and the core
/// never changes behavior based on what a logger does.
pub trait Logger {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Logger that forwards to the `tracing` ecosystem under the
/// `pagination` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!(target: "pagination", "{message}"),
            Level::Info => tracing::info!(target: "pagination", "{message}"),
            Level::Warn => tracing::warn!(target: "pagination", "{message}"),
            Level::Error => tracing::error!(target: "pagination", "{message}"),
        }
    }
}

//! Artifact creation and removal.
//!
//! Third stage of the pipeline, and the only place new render targets enter
//! the surrounding build. For each bucket of a template's stream the site's
//! creation capability is invoked, and the returned handle is wrapped in a
//! [`PageArtifact`] carrying the bucket's pagination metadata.
//!
//! ## Path binding
//!
//! Page 1 is always bound to the template's own canonical path. Later pages
//! resolve the permalink pattern relative to the template's directory:
//!
//! ```text
//! blog/index.html + "/page:num/" + 3  →  blog/page3/index.html
//! ```
//!
//! ## Failure policy
//!
//! Creation is fail-fast per stream: the first failure aborts the remaining
//! pages of that template, surfaced as [`EmitError::ArtifactCreation`].
//! Artifacts created before the failure stay registered with the site —
//! rolling them back is the caller's decision, via [`remove_stale`]. Other
//! templates' streams are unaffected.

use crate::config::EffectiveConfig;
use crate::site::{Logger, Site, SiteError};
use crate::types::{ArtifactId, PageArtifact, PageBucket, TemplateRef};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("could not create page {index} for template {template}: {source}")]
    ArtifactCreation {
        template: String,
        index: usize,
        source: SiteError,
    },
}

/// Create one artifact per bucket for a single template's pagination stream.
///
/// Returns the artifacts in ascending page order, without navigation
/// references — wiring those is the link stage's job.
pub fn emit_stream(
    config: &EffectiveConfig,
    template: &TemplateRef,
    buckets: &[PageBucket],
    site: &mut dyn Site,
    log: &dyn Logger,
) -> Result<Vec<PageArtifact>, EmitError> {
    let site_title = site.title();
    let mut artifacts = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        let path = page_path(&template.path, &config.permalink, bucket.index);
        let id = site
            .create_artifact(&path)
            .map_err(|source| EmitError::ArtifactCreation {
                template: template.path.clone(),
                index: bucket.index,
                source,
            })?;
        log.debug(&format!(
            "created page {}/{} at {path}",
            bucket.index, bucket.total_pages
        ));
        artifacts.push(PageArtifact {
            id,
            template: template.path.clone(),
            path,
            title: page_title(config, &template.path, site_title.as_deref(), bucket.index),
            index: bucket.index,
            items: bucket.items.clone(),
            total_pages: bucket.total_pages,
            total_items: bucket.total_items,
            offset: 0,
            remaining: 0,
            prev_index: None,
            next_index: None,
            is_first: false,
            is_last: false,
        });
    }
    Ok(artifacts)
}

/// Deregister an artifact from a previous generation pass that is no longer
/// backed by a current bucket.
///
/// The core keeps no previous-run state; callers invoke this from their own
/// bookkeeping across incremental runs.
pub fn remove_stale(site: &mut dyn Site, id: ArtifactId, log: &dyn Logger) {
    site.remove_artifact(id);
    log.debug(&format!("removed stale {id}"));
}

/// Resolve the output path for page `index` of a template.
pub fn page_path(template_path: &str, permalink: &str, index: usize) -> String {
    if index <= 1 {
        return template_path.to_string();
    }
    let mut rel = interpolate_permalink(permalink, index);
    if rel.ends_with('/') {
        rel.push_str("index.html");
    }
    let rel = rel.trim_start_matches('/');
    let dir = template_dir(template_path);
    if dir.is_empty() {
        rel.to_string()
    } else {
        format!("{dir}/{rel}")
    }
}

/// Resolve the display title for page `index` of a template.
///
/// `:title` resolves to the site fallback title, or the template's
/// directory name when the site has none. Page 1 keeps the bare title,
/// matching its canonical path.
pub fn page_title(
    config: &EffectiveConfig,
    template_path: &str,
    site_title: Option<&str>,
    index: usize,
) -> String {
    let base = site_title
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            let dir = template_dir(template_path);
            match dir.rsplit('/').next() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => "index".to_string(),
            }
        });
    if index <= 1 {
        return base;
    }
    config
        .title
        .replace(":title", &base)
        .replace(":num", &index.to_string())
}

fn template_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// Substitute the page index into a permalink pattern.
///
/// Patterns without a `:num` token get the index appended.
fn interpolate_permalink(pattern: &str, index: usize) -> String {
    if pattern.contains(":num") {
        pattern.replace(":num", &index.to_string())
    } else {
        format!("{pattern}{index}")
    }
}

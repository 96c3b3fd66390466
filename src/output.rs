//! CLI output formatting for the page plan.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric. The primary display
//! for every stream is its semantic identity — template path, page and
//! item counts — with the individual page paths as indented context lines.
//!
//! # Output Format
//!
//! ## Plan
//!
//! ```text
//! Pagination
//! 001 blog/index.html (3 pages, 7 items)
//!     001 blog/index.html (3 items)
//!     002 blog/page2/index.html (3 items)
//!     003 blog/page3/index.html (1 item)
//!
//! Failures
//! 001 docs/index.html
//!     could not create page 2 for template docs/index.html: ...
//!
//! Paginated 1 template into 3 pages (7 items)
//! ```
//!
//! ## Check
//!
//! ```text
//! Site
//!     Items: 8 (2 hidden)
//!     Templates: 3 (1 paginated)
//!
//! Policy
//!     Mode: standard
//!     Enabled: true
//!     Per page: 10
//!     Permalink: /page:num/
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::config::{EffectiveConfig, SourceMode};
use crate::manifest::SiteManifest;
use crate::run::RunReport;
use crate::types::PageArtifact;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Singular/plural noun with its count: `1 page`, `3 pages`.
fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

// ============================================================================
// Plan
// ============================================================================

/// Format the page plan as display lines. Pure, testable.
pub fn format_plan(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();

    let streams = group_by_template(&report.artifacts);
    if !streams.is_empty() {
        lines.push("Pagination".to_string());
        for (pos, (template, pages)) in streams.iter().enumerate() {
            let total_items = pages.first().map_or(0, |p| p.total_items);
            lines.push(format!(
                "{} {} ({}, {})",
                format_index(pos + 1),
                template,
                counted(pages.len(), "page"),
                counted(total_items, "item"),
            ));
            for page in pages {
                lines.push(format!(
                    "{}{} {} ({})",
                    indent(1),
                    format_index(page.index),
                    page.path,
                    counted(page.items.len(), "item"),
                ));
            }
        }
    }

    if !report.failures.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Failures".to_string());
        for (pos, failure) in report.failures.iter().enumerate() {
            lines.push(format!("{} {}", format_index(pos + 1), failure.template));
            lines.push(format!("{}{}", indent(1), failure.error));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Paginated {} into {} ({})",
        counted(streams.len(), "template"),
        counted(report.artifacts.len(), "page"),
        counted(report.eligible_items, "item"),
    ));
    lines
}

/// Print the page plan to stdout.
pub fn print_plan(report: &RunReport) {
    for line in format_plan(report) {
        println!("{line}");
    }
}

/// Group artifacts by template path, preserving first-appearance order.
fn group_by_template(artifacts: &[PageArtifact]) -> Vec<(&str, Vec<&PageArtifact>)> {
    let mut streams: Vec<(&str, Vec<&PageArtifact>)> = Vec::new();
    for artifact in artifacts {
        match streams.iter_mut().find(|(t, _)| *t == artifact.template) {
            Some((_, pages)) => pages.push(artifact),
            None => streams.push((artifact.template.as_str(), vec![artifact])),
        }
    }
    streams
}

// ============================================================================
// Check
// ============================================================================

/// Format the validation summary for a manifest and resolved policy.
pub fn format_check(manifest: &SiteManifest, config: &EffectiveConfig) -> Vec<String> {
    let hidden = manifest.items.iter().filter(|i| i.hidden).count();
    let paginated = manifest.templates.iter().filter(|t| t.paginate).count();
    let mode = match config.source_mode {
        SourceMode::Standard => "standard",
        SourceMode::Legacy => "legacy",
    };

    let mut lines = vec![
        "Site".to_string(),
        format!(
            "{}Items: {} ({} hidden)",
            indent(1),
            manifest.items.len(),
            hidden
        ),
        format!(
            "{}Templates: {} ({} paginated)",
            indent(1),
            manifest.templates.len(),
            paginated
        ),
        String::new(),
        "Policy".to_string(),
        format!("{}Mode: {}", indent(1), mode),
        format!("{}Enabled: {}", indent(1), config.enabled),
        format!("{}Per page: {}", indent(1), config.per_page),
        format!("{}Permalink: {}", indent(1), config.permalink),
    ];
    if let Some(field) = &config.sort_field {
        let order = if config.sort_reverse { "descending" } else { "ascending" };
        lines.push(format!("{}Sort: {} ({})", indent(1), field, order));
    }
    lines
}

/// Print the validation summary to stdout.
pub fn print_check(manifest: &SiteManifest, config: &EffectiveConfig) {
    for line in format_check(manifest, config) {
        println!("{line}");
    }
}

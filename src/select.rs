//! Item and template selection.
//!
//! First stage of the pipeline: decides *what* gets paginated. Two
//! independent selections happen here:
//!
//! - **Items**: the full collection is filtered down to the eligible set —
//!   everything not flagged hidden, in the site's original order. An
//!   explicit sort only happens when the policy configures a sort field.
//! - **Templates**: standard mode selects the templates that opted in via
//!   their `paginate` flag (optionally narrowed by the configured path
//!   filter); legacy mode ignores the template collection entirely and
//!   fixes exactly one implicit template at the legacy source root.
//!
//! Finding zero candidate templates is not an error — pagination is simply
//! a no-op then, which the orchestrator reports as a diagnostic.

use crate::config::{EffectiveConfig, SourceMode};
use crate::types::{Item, TemplateRef};
use serde_json::Value;
use std::cmp::Ordering;

/// Filter the full item collection down to the eligible set.
///
/// Hidden items are excluded; relative order is preserved.
pub fn eligible_items(items: &[Item]) -> Vec<Item> {
    items.iter().filter(|item| !item.hidden).cloned().collect()
}

/// Sort eligible items by the configured sort field, if any.
///
/// Without a configured field the selection order is left untouched. The
/// sort is stable; `sort_reverse` reverses the sorted sequence afterward.
pub fn sort_items(config: &EffectiveConfig, items: &mut Vec<Item>) {
    let Some(field) = &config.sort_field else {
        return;
    };
    items.sort_by(|a, b| compare_keys(a.data.get(field), b.data.get(field)));
    if config.sort_reverse {
        items.reverse();
    }
}

/// Total order over optional front-matter values.
///
/// Numbers compare numerically, strings lexicographically. Items missing
/// the field sort last; mixed-type comparisons keep input order.
fn compare_keys(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Determine which templates seed a pagination stream.
pub fn candidate_templates(
    config: &EffectiveConfig,
    templates: &[TemplateRef],
) -> Vec<TemplateRef> {
    if config.source_mode == SourceMode::Legacy {
        let root = config.legacy_source.as_deref().unwrap_or(".");
        return vec![TemplateRef {
            path: legacy_index_path(root),
            paginate: true,
        }];
    }
    templates
        .iter()
        .filter(|t| t.paginate)
        .filter(|t| {
            config
                .template_filter
                .as_deref()
                .is_none_or(|f| t.path.contains(f))
        })
        .cloned()
        .collect()
}

/// Path of the implicit legacy template: the index page at the source root.
fn legacy_index_path(root: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() || root == "." {
        "index.html".to_string()
    } else {
        format!("{root}/index.html")
    }
}

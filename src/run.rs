//! Pipeline orchestration.
//!
//! Executes the stages in order — select → assign → emit → link — against
//! an injected [`Site`] and [`Logger`]. Each stage consumes only the prior
//! stage's output; the whole run is synchronous and single-pass.
//!
//! ## Failure policy
//!
//! Configuration errors abort the entire run before any stage executes.
//! A creation failure aborts only the affected template's stream: it is
//! logged, recorded in [`RunReport::failures`], and the remaining templates
//! still paginate. Empty item sets and missing templates are diagnostics,
//! not errors — the run completes successfully with zero artifacts.

use crate::assign;
use crate::config::{ConfigError, EffectiveConfig, RawConfig, resolve_config};
use crate::emit::{self, EmitError};
use crate::link;
use crate::select;
use crate::site::{Logger, Site};
use crate::types::PageArtifact;

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Fully created and linked page artifacts, across all templates.
    pub artifacts: Vec<PageArtifact>,
    /// Template streams that aborted on a creation failure.
    pub failures: Vec<StreamFailure>,
    /// Number of items that survived the eligibility filter.
    pub eligible_items: usize,
    /// Pages per template stream.
    pub total_pages: usize,
}

/// A pagination stream that aborted before creating all of its pages.
#[derive(Debug)]
pub struct StreamFailure {
    pub template: String,
    pub error: EmitError,
}

/// Resolve the raw policy, then paginate.
///
/// Configuration errors surface immediately to the invoking build process;
/// see [`run`] for everything downstream of a valid configuration.
pub fn paginate(
    raw: &RawConfig,
    site: &mut dyn Site,
    log: &dyn Logger,
) -> Result<RunReport, ConfigError> {
    let config = resolve_config(raw)?;
    Ok(run(&config, site, log))
}

/// Execute the pagination pipeline against a resolved configuration.
pub fn run(config: &EffectiveConfig, site: &mut dyn Site, log: &dyn Logger) -> RunReport {
    let mut report = RunReport::default();

    if !config.enabled {
        log.info("pagination is disabled in the site config");
        return report;
    }
    log.debug("pagination starting");

    let mut eligible = select::eligible_items(&site.items());
    select::sort_items(config, &mut eligible);
    report.eligible_items = eligible.len();

    let templates = select::candidate_templates(config, &site.templates());
    if templates.is_empty() {
        log.info("no pagination templates found; nothing to paginate");
        return report;
    }

    if eligible.is_empty() {
        log.info("no eligible items; pagination renders nothing");
        return report;
    }

    let buckets = assign::assign(&eligible, config.per_page);
    report.total_pages = buckets.len();

    for template in &templates {
        match emit::emit_stream(config, template, &buckets, site, log) {
            Ok(mut artifacts) => {
                link::link(&mut artifacts);
                report.artifacts.extend(artifacts);
            }
            Err(error) => {
                log.error(&format!("{error}; skipping this template's remaining pages"));
                report.failures.push(StreamFailure {
                    template: template.path.clone(),
                    error,
                });
            }
        }
    }

    log.debug(&format!(
        "pagination complete: {} pages across {} templates",
        report.artifacts.len(),
        templates.len()
    ));
    report
}

//! Pagination policy resolution.
//!
//! Handles loading, merging, and validating the pagination policy from
//! `config.toml`. Two mutually exclusive configuration sources exist:
//!
//! ## New-style configuration
//!
//! ```toml
//! [pagination]
//! enabled = true
//! per_page = 10
//! permalink = "/page:num/"
//! ```
//!
//! ## Legacy configuration
//!
//! Older sites configure a single page-size value at the top level. Its
//! presence alone implies intent to paginate, so `enabled` is forced on:
//!
//! ```toml
//! paginate = 10
//! paginate_path = "/page:num/"
//! source = "."
//! ```
//!
//! Setting both sources at once is a fatal misconfiguration
//! ([`ConfigError::Conflict`]) — the page-size and permalink semantics
//! would be ambiguous. The decision is made exactly once, in
//! [`PolicySource::classify`]; downstream stages only ever see the resolved
//! [`EffectiveConfig`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [pagination]
//! enabled = false               # Pagination is opt-in
//! per_page = 10                 # Items per page (must be > 0)
//! permalink = "/page:num/"      # Path pattern for pages 2..N
//! title = ":title - page :num"  # Title pattern for pages 2..N
//! sort_reverse = false          # Reverse the configured sort
//! # sort_field = "date"         # Front-matter field to sort by
//! # template_filter = "blog"    # Only paginate matching template paths
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(
        "the legacy `paginate` key and the `[pagination]` table cannot both be \
         configured at the same time; remove the legacy `paginate` settings"
    )]
    Conflict,
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Raw pagination configuration as it appears in `config.toml`.
///
/// Carries both the new-style `[pagination]` table and the legacy top-level
/// keys; [`resolve_config`] reconciles them into one [`EffectiveConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// New-style pagination policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationPolicy>,
    /// Legacy page size. Mutually exclusive with `pagination`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paginate: Option<usize>,
    /// Legacy permalink pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paginate_path: Option<String>,
    /// Legacy content root; seeds the implicit pagination template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The new-style `[pagination]` table.
///
/// All fields have defaults; user config files need only specify the values
/// they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationPolicy {
    /// Whether pagination runs at all. Off by default.
    pub enabled: bool,
    /// Items per page.
    pub per_page: usize,
    /// Path pattern for pages 2..N; `:num` is replaced by the page index.
    pub permalink: String,
    /// Title pattern for pages 2..N; `:title` and `:num` are replaced.
    pub title: String,
    /// Front-matter field to sort eligible items by. Unset keeps the
    /// site's item order.
    pub sort_field: Option<String>,
    /// Reverse the configured sort.
    pub sort_reverse: bool,
    /// Only templates whose path contains this substring seed a stream.
    pub template_filter: Option<String>,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            per_page: 10,
            permalink: "/page:num/".to_string(),
            title: ":title - page :num".to_string(),
            sort_field: None,
            sort_reverse: false,
            template_filter: None,
        }
    }
}

/// Which configuration source populates the effective policy.
///
/// Classified exactly once per run; downstream code never re-checks key
/// presence.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicySource {
    NewStyle(PaginationPolicy),
    Legacy(LegacyPolicy),
    Unset,
}

/// The legacy top-level keys, gathered.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyPolicy {
    pub per_page: usize,
    pub permalink: Option<String>,
    pub source: Option<String>,
}

impl PolicySource {
    /// Classify the raw mapping into exactly one policy source.
    pub fn classify(raw: &RawConfig) -> Result<Self, ConfigError> {
        match (&raw.pagination, raw.paginate) {
            (Some(_), Some(_)) => Err(ConfigError::Conflict),
            (Some(policy), None) => Ok(Self::NewStyle(policy.clone())),
            (None, Some(per_page)) => Ok(Self::Legacy(LegacyPolicy {
                per_page,
                permalink: raw.paginate_path.clone(),
                source: raw.source.clone(),
            })),
            (None, None) => Ok(Self::Unset),
        }
    }
}

/// Which policy source produced the effective configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Standard,
    Legacy,
}

/// The single validated configuration every downstream stage consumes.
///
/// Created once per generation run and immutable afterward.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub enabled: bool,
    pub per_page: usize,
    pub permalink: String,
    pub title: String,
    pub sort_field: Option<String>,
    pub sort_reverse: bool,
    pub template_filter: Option<String>,
    pub source_mode: SourceMode,
    /// Content root of the implicit template, legacy mode only.
    pub legacy_source: Option<String>,
}

impl EffectiveConfig {
    fn from_policy(policy: PaginationPolicy) -> Self {
        Self {
            enabled: policy.enabled,
            per_page: policy.per_page,
            permalink: policy.permalink,
            title: policy.title,
            sort_field: policy.sort_field,
            sort_reverse: policy.sort_reverse,
            template_filter: policy.template_filter,
            source_mode: SourceMode::Standard,
            legacy_source: None,
        }
    }

    fn from_legacy(legacy: LegacyPolicy) -> Self {
        let defaults = PaginationPolicy::default();
        Self {
            // Legacy presence implies intent to paginate
            enabled: true,
            per_page: legacy.per_page,
            permalink: legacy.permalink.unwrap_or(defaults.permalink),
            title: defaults.title,
            sort_field: defaults.sort_field,
            sort_reverse: defaults.sort_reverse,
            template_filter: None,
            source_mode: SourceMode::Legacy,
            legacy_source: Some(legacy.source.unwrap_or_else(|| ".".to_string())),
        }
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::Validation(
                "per_page must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Reconcile the raw mapping into one validated, immutable configuration.
pub fn resolve_config(raw: &RawConfig) -> Result<EffectiveConfig, ConfigError> {
    let config = match PolicySource::classify(raw)? {
        PolicySource::NewStyle(policy) => EffectiveConfig::from_policy(policy),
        PolicySource::Legacy(legacy) => EffectiveConfig::from_legacy(legacy),
        PolicySource::Unset => EffectiveConfig::from_policy(PaginationPolicy::default()),
    };
    config.validate()?;
    Ok(config)
}

/// Load and resolve configuration from a `config.toml` file.
///
/// A missing file resolves to the documented defaults (pagination disabled).
/// A file that exists but fails to parse or validate is an error.
pub fn load_config(path: &Path) -> Result<EffectiveConfig, ConfigError> {
    let raw = if path.exists() {
        toml::from_str(&fs::read_to_string(path)?)?
    } else {
        RawConfig::default()
    };
    resolve_config(&raw)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Quire Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# The [pagination] table and the legacy top-level `paginate` key are
# mutually exclusive - configuring both is an error.

[pagination]
# Pagination is opt-in.
enabled = false

# Items per page. Must be greater than zero.
per_page = 10

# Path pattern for pages 2..N, resolved relative to the template's
# directory. `:num` is replaced by the page index. Page 1 always keeps
# the template's own path.
permalink = "/page:num/"

# Title pattern for pages 2..N. `:title` is the site title (or the
# template's directory name), `:num` the page index.
title = ":title - page :num"

# Front-matter field to sort eligible items by. Omit to keep the site's
# item order.
# sort_field = "date"

# Reverse the configured sort.
sort_reverse = false

# Only templates whose path contains this substring seed a pagination
# stream. Omit to accept every opted-in template.
# template_filter = "blog"

# ---------------------------------------------------------------------------
# Legacy configuration (older sites only - do not combine with [pagination])
# ---------------------------------------------------------------------------
# paginate = 10
# paginate_path = "/page:num/"
# source = "."
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn new_style(policy: PaginationPolicy) -> RawConfig {
        RawConfig {
            pagination: Some(policy),
            ..RawConfig::default()
        }
    }

    fn legacy(per_page: usize) -> RawConfig {
        RawConfig {
            paginate: Some(per_page),
            ..RawConfig::default()
        }
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn default_policy_is_disabled() {
        let policy = PaginationPolicy::default();
        assert!(!policy.enabled);
        assert_eq!(policy.per_page, 10);
        assert_eq!(policy.permalink, "/page:num/");
        assert_eq!(policy.title, ":title - page :num");
        assert!(policy.sort_field.is_none());
        assert!(!policy.sort_reverse);
    }

    #[test]
    fn empty_raw_config_resolves_to_disabled_defaults() {
        let config = resolve_config(&RawConfig::default()).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.per_page, 10);
        assert_eq!(config.source_mode, SourceMode::Standard);
        assert!(config.legacy_source.is_none());
    }

    #[test]
    fn parse_partial_policy_keeps_defaults() {
        let raw: RawConfig = toml::from_str(
            r#"
[pagination]
enabled = true
per_page = 5
"#,
        )
        .unwrap();
        let config = resolve_config(&raw).unwrap();
        assert!(config.enabled);
        assert_eq!(config.per_page, 5);
        // Unspecified values preserved from defaults
        assert_eq!(config.permalink, "/page:num/");
        assert_eq!(config.title, ":title - page :num");
    }

    // =========================================================================
    // Policy source classification
    // =========================================================================

    #[test]
    fn classify_unset() {
        let source = PolicySource::classify(&RawConfig::default()).unwrap();
        assert_eq!(source, PolicySource::Unset);
    }

    #[test]
    fn classify_new_style() {
        let raw = new_style(PaginationPolicy::default());
        let source = PolicySource::classify(&raw).unwrap();
        assert!(matches!(source, PolicySource::NewStyle(_)));
    }

    #[test]
    fn classify_legacy_gathers_all_keys() {
        let raw = RawConfig {
            paginate: Some(7),
            paginate_path: Some("/p:num/".to_string()),
            source: Some("blog".to_string()),
            ..RawConfig::default()
        };
        let source = PolicySource::classify(&raw).unwrap();
        assert_eq!(
            source,
            PolicySource::Legacy(LegacyPolicy {
                per_page: 7,
                permalink: Some("/p:num/".to_string()),
                source: Some("blog".to_string()),
            })
        );
    }

    #[test]
    fn both_sources_conflict() {
        let mut raw = new_style(PaginationPolicy::default());
        raw.paginate = Some(5);
        let result = resolve_config(&raw);
        assert!(matches!(result, Err(ConfigError::Conflict)));
    }

    #[test]
    fn both_sources_conflict_regardless_of_contents() {
        // Even a disabled new-style policy conflicts with a legacy key
        let mut raw = new_style(PaginationPolicy {
            enabled: false,
            ..PaginationPolicy::default()
        });
        raw.paginate = Some(1);
        assert!(matches!(resolve_config(&raw), Err(ConfigError::Conflict)));
    }

    // =========================================================================
    // Legacy synthesis
    // =========================================================================

    #[test]
    fn legacy_forces_enabled() {
        let config = resolve_config(&legacy(10)).unwrap();
        assert!(config.enabled);
        assert_eq!(config.source_mode, SourceMode::Legacy);
    }

    #[test]
    fn legacy_takes_page_size_and_default_permalink() {
        let config = resolve_config(&legacy(4)).unwrap();
        assert_eq!(config.per_page, 4);
        assert_eq!(config.permalink, "/page:num/");
    }

    #[test]
    fn legacy_paginate_path_overrides_permalink() {
        let raw = RawConfig {
            paginate: Some(4),
            paginate_path: Some("/blog/page:num/".to_string()),
            ..RawConfig::default()
        };
        let config = resolve_config(&raw).unwrap();
        assert_eq!(config.permalink, "/blog/page:num/");
    }

    #[test]
    fn legacy_source_defaults_to_current_dir() {
        let config = resolve_config(&legacy(10)).unwrap();
        assert_eq!(config.legacy_source.as_deref(), Some("."));
    }

    #[test]
    fn legacy_source_passes_through() {
        let raw = RawConfig {
            paginate: Some(10),
            source: Some("site".to_string()),
            ..RawConfig::default()
        };
        let config = resolve_config(&raw).unwrap();
        assert_eq!(config.legacy_source.as_deref(), Some("site"));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn zero_per_page_rejected() {
        let raw = new_style(PaginationPolicy {
            per_page: 0,
            ..PaginationPolicy::default()
        });
        let err = resolve_config(&raw).unwrap_err();
        assert!(err.to_string().contains("per_page"));
    }

    #[test]
    fn zero_legacy_page_size_rejected() {
        assert!(matches!(
            resolve_config(&legacy(0)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn per_page_of_one_is_valid() {
        let raw = new_style(PaginationPolicy {
            per_page: 1,
            ..PaginationPolicy::default()
        });
        assert!(resolve_config(&raw).is_ok());
    }

    // =========================================================================
    // Unknown key rejection
    // =========================================================================

    #[test]
    fn unknown_pagination_key_rejected() {
        let result: Result<RawConfig, _> = toml::from_str(
            r#"
[pagination]
per_pge = 10
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let result: Result<RawConfig, _> = toml::from_str("paginate_pth = \"/p/\"");
        assert!(result.is_err());
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_defaults_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[pagination]
enabled = true
per_page = 3
sort_field = "date"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.enabled);
        assert_eq!(config.per_page, 3);
        assert_eq!(config.sort_field.as_deref(), Some("date"));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_surfaces_conflict() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
paginate = 5

[pagination]
enabled = true
"#,
        )
        .unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Conflict)));
    }

    // =========================================================================
    // stock_config_toml
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let raw: RawConfig = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(&raw).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.per_page, 10);
        assert_eq!(config.permalink, "/page:num/");
        assert_eq!(config.title, ":title - page :num");
    }
}

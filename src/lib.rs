//! # Quire
//!
//! A build-time pagination engine for static site pipelines. Given a site's
//! full item collection and a page-size policy, quire deterministically
//! partitions the eligible items into pages 1..N and materializes, for each
//! page, a render target bound to a template plus the navigation metadata
//! linking the pages in sequence.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! Pagination runs as four sequential stages, each consuming only the prior
//! stage's output, orchestrated by [`run`]:
//!
//! ```text
//! 0. config   raw policy   →  EffectiveConfig   (resolve + validate once)
//! 1. select   items        →  eligible set      (hidden filter, opt. sort)
//! 2. assign   eligible set →  PageBuckets       (pure ceil(n/p) partition)
//! 3. emit     buckets      →  PageArtifacts     (create through the boundary)
//! 4. link     artifacts    →  navigation        (prev/next/first/last)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Determinism**: assign and link are pure functions — identical inputs
//!   always produce identical page sequences, with no hidden state.
//! - **Testability**: every stage is exercised in isolation against
//!   in-memory fakes; only emit touches the (injected) outside world.
//! - **Failure isolation**: configuration errors abort before any side
//!   effect, while a creation failure is contained to one template's
//!   stream.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Policy resolution — merges new-style and legacy configuration into one validated `EffectiveConfig`, rejecting ambiguous double configuration |
//! | [`select`] | Stage 1 — eligibility filtering, optional configured sort, candidate-template selection |
//! | [`assign`] | Stage 2 — pure partition of eligible items into page buckets |
//! | [`emit`] | Stage 3 — artifact creation/removal through the site boundary, path and title binding |
//! | [`link`] | Stage 4 — previous/next/first/last wiring and positional fields |
//! | [`run`] | Pipeline orchestration and the `RunReport` outcome |
//! | [`site`] | The injected integration boundary: `Site` and `Logger` traits |
//! | [`manifest`] | JSON site manifest and the in-memory `ManifestSite` the CLI runs against |
//! | [`types`] | Shared data model (`Item`, `TemplateRef`, `PageBucket`, `PageArtifact`) |
//! | [`output`] | CLI output formatting — tree-based display of the page plan |
//!
//! # Design Decisions
//!
//! ## Capability Injection Over Global Callbacks
//!
//! The core never reaches into a host build system. Item and template
//! collections come in, and render targets go out, through the
//! [`site::Site`] trait; diagnostics leave through [`site::Logger`]. A host
//! integrates by implementing two small traits, and tests run against
//! recording fakes with no setup.
//!
//! ## One Policy Decision, Made Once
//!
//! Sites can carry either the structured `[pagination]` table or the legacy
//! single-value `paginate` key. The two are reconciled exactly once, into a
//! tagged [`config::PolicySource`] and then a single immutable
//! [`config::EffectiveConfig`] — downstream stages never re-check which
//! source was present, and configuring both is a hard error rather than a
//! silent precedence rule.
//!
//! ## Pages Render Nothing For Nothing
//!
//! An empty eligible set produces zero pages — not a single empty page —
//! and zero calls to the creation capability. Likewise a site with no
//! opted-in templates paginates nothing and reports it as a diagnostic,
//! not an error.

pub mod assign;
pub mod config;
pub mod emit;
pub mod link;
pub mod manifest;
pub mod output;
pub mod run;
pub mod select;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

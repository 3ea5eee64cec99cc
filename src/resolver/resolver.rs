//! Specifier lookup against the pattern table.
//!
//! # Responsibilities
//! - Parse the specifier; malformed input is unresolved, never an error
//! - Walk registries and matchers in declared order
//! - Apply semantic validation and the configured rejection policy
//! - Hand the winning match to the canonicalizer
//!
//! # Design Decisions
//! - First structural match wins; no scoring, no backtracking
//! - Immutable after construction (thread-safe without locks)
//! - Explicit Unresolved rather than a silent default

use std::sync::Arc;

use url::Url;

use crate::config::{InvalidMatchPolicy, ResolutionConfig};
use crate::registry::PatternTable;
use crate::resolver::canonical::canonicalize;
use crate::resolver::identity::Resolution;
use crate::resolver::validation::validate;

/// Resolves module specifiers against a shared pattern table.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<PatternTable>,
    policy: InvalidMatchPolicy,
}

impl Resolver {
    /// Create a resolver with the default `Reject` policy.
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self::with_policy(table, InvalidMatchPolicy::default())
    }

    pub fn with_policy(table: Arc<PatternTable>, policy: InvalidMatchPolicy) -> Self {
        Self { table, policy }
    }

    pub fn from_config(table: Arc<PatternTable>, config: &ResolutionConfig) -> Self {
        Self::with_policy(table, config.on_invalid_match)
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn policy(&self) -> InvalidMatchPolicy {
        self.policy
    }

    /// Classify `specifier`. Unparsable input yields `Unresolved`.
    pub fn resolve(&self, specifier: &str) -> Resolution {
        match Url::parse(specifier) {
            Ok(url) => self.resolve_parsed(specifier, &url),
            Err(err) => {
                tracing::debug!(url = specifier, error = %err, "Specifier is not an absolute URL");
                Resolution::unresolved(specifier)
            }
        }
    }

    /// Classify an already parsed URL.
    pub fn resolve_url(&self, url: &Url) -> Resolution {
        self.resolve_parsed(url.as_str(), url)
    }

    /// Classify every specifier, preserving input order.
    pub fn resolve_all<I, S>(&self, specifiers: I) -> Vec<Resolution>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        specifiers
            .into_iter()
            .map(|specifier| self.resolve(specifier.as_ref()))
            .collect()
    }

    fn resolve_parsed(&self, original: &str, url: &Url) -> Resolution {
        for registry in self.table.registries() {
            for (index, matcher) in registry.matchers().iter().enumerate() {
                let Some(raw) = matcher.match_url(url) else {
                    tracing::trace!(
                        registry = registry.name(),
                        matcher = index,
                        "No structural match"
                    );
                    continue;
                };

                if let Err(violation) = validate(registry, &raw) {
                    tracing::warn!(
                        url = original,
                        registry = registry.name(),
                        matcher = index,
                        %violation,
                        "Structural match failed validation"
                    );
                    match self.policy {
                        InvalidMatchPolicy::Reject => return Resolution::unresolved(original),
                        InvalidMatchPolicy::FallThrough => continue,
                    }
                }

                let identity = canonicalize(registry, raw);
                tracing::debug!(
                    url = original,
                    registry = registry.name(),
                    matcher = index,
                    pkg = %identity.pkg,
                    "Specifier resolved"
                );
                return Resolution::Resolved(identity);
            }
        }

        tracing::debug!(url = original, "No registry matched");
        Resolution::unresolved(original)
    }
}

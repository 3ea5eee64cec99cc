//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the pattern table from its compiled-in definition
//! - Construct the resolver with the configured policy
//!
//! # Design Decisions
//! - Fail fast: a malformed table is fatal before any URL is resolved
//! - The table is built fully or not at all

use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::registry::{PatternTable, TableError};
use crate::resolver::Resolver;

/// Build the built-in table and a resolver configured by `config`.
pub fn build_resolver(config: &ResolverConfig) -> Result<Resolver, TableError> {
    let table = PatternTable::builtin()?;
    let resolver = Resolver::from_config(Arc::new(table), &config.resolution);
    tracing::info!(
        policy = ?resolver.policy(),
        registries = resolver.table().len(),
        "Resolver ready"
    );
    Ok(resolver)
}

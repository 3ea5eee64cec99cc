//! Semantic checks layered over structural matches.
//!
//! # Rules
//! - package: non-empty, no `/` or `@`
//! - version (when present): no `/`, `@` or whitespace
//! - org (when present): no `/`
//!
//! Empty captures count as absent, as they do in canonicalization.

use thiserror::Error;

use crate::pattern::RawMatch;
use crate::registry::Registry;

/// Why a structural match was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("package name is empty")]
    EmptyPackage,

    #[error("package name `{0}` contains a path separator")]
    PackageSeparator(String),

    #[error("package name `{0}` contains a version marker")]
    PackageVersionMarker(String),

    #[error("version `{0}` contains a disallowed character")]
    VersionCharacter(String),

    #[error("organization `{0}` contains a path separator")]
    OrgSeparator(String),
}

/// Check `raw` against the registry's constraints.
pub fn validate(registry: &Registry, raw: &RawMatch) -> Result<(), Violation> {
    let pkg = raw
        .get("pkg")
        .filter(|p| !p.is_empty())
        .or(registry.fixed_package())
        .unwrap_or_default();
    if pkg.is_empty() {
        return Err(Violation::EmptyPackage);
    }
    if pkg.contains('/') {
        return Err(Violation::PackageSeparator(pkg.to_string()));
    }
    if pkg.contains('@') {
        return Err(Violation::PackageVersionMarker(pkg.to_string()));
    }

    if let Some(ver) = raw.get("ver").filter(|v| !v.is_empty()) {
        if ver.contains(|c: char| c == '/' || c == '@' || c.is_whitespace()) {
            return Err(Violation::VersionCharacter(ver.to_string()));
        }
    }

    if let Some(org) = raw.get("org").filter(|o| !o.is_empty()) {
        if org.contains('/') {
            return Err(Violation::OrgSeparator(org.to_string()));
        }
    }

    Ok(())
}

//! Pattern table construction and lookup.
//!
//! # Responsibilities
//! - Compile every registry definition into matchers
//! - Reject malformed tables before any resolution runs
//! - Expose registries in declared order
//!
//! # Design Decisions
//! - Immutable after `build`; share via `Arc`
//! - Built all-or-nothing: the first error aborts construction
//! - Declaration order is the only tie-break between registries

use std::collections::HashSet;

use thiserror::Error;

use crate::pattern::{Matcher, MatcherSpec, TemplateError};
use crate::registry::builtin;

/// Whether a registry's URLs carry an organization segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrgShape {
    /// Single namespace; identities never carry an org.
    #[default]
    Flat,
    /// Org comes from the `org` capture when present.
    Namespaced,
}

/// Declarative definition of a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySpec {
    pub name: String,
    pub org: OrgShape,
    /// Substituted when a URL omits an optional version.
    pub default_version: Option<String>,
    /// Package name implied by the registry itself, used when no `pkg` is captured.
    pub fixed_package: Option<String>,
    pub matchers: Vec<MatcherSpec>,
}

impl RegistrySpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org: OrgShape::Flat,
            default_version: None,
            fixed_package: None,
            matchers: Vec::new(),
        }
    }

    pub fn namespaced(mut self) -> Self {
        self.org = OrgShape::Namespaced;
        self
    }

    pub fn default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = Some(version.into());
        self
    }

    pub fn fixed_package(mut self, package: impl Into<String>) -> Self {
        self.fixed_package = Some(package.into());
        self
    }

    /// Append a matcher in `scheme://host/path` shorthand.
    pub fn url(mut self, template: impl Into<String>) -> Self {
        self.matchers.push(MatcherSpec::Url(template.into()));
        self
    }

    /// Append a matcher.
    pub fn matcher(mut self, spec: impl Into<MatcherSpec>) -> Self {
        self.matchers.push(spec.into());
        self
    }
}

/// Errors that make a table unusable.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("registry `{registry}` matcher #{index}: {source}")]
    Template {
        registry: String,
        index: usize,
        #[source]
        source: TemplateError,
    },

    #[error("registry name must not be empty")]
    UnnamedRegistry,

    #[error("registry `{0}` declared more than once")]
    DuplicateRegistry(String),

    #[error("registry `{0}` has no matchers")]
    EmptyRegistry(String),

    #[error("registry `{0}` declares an empty fixed package")]
    EmptyFixedPackage(String),

    #[error(
        "registry `{registry}` matcher #{index} captures no `pkg` and the registry has no fixed package"
    )]
    NoPackageSource { registry: String, index: usize },
}

/// A compiled registry.
#[derive(Debug, Clone)]
pub struct Registry {
    name: String,
    org: OrgShape,
    default_version: Option<String>,
    fixed_package: Option<String>,
    matchers: Vec<Matcher>,
}

impl Registry {
    fn compile(spec: RegistrySpec) -> Result<Self, TableError> {
        if spec.name.is_empty() {
            return Err(TableError::UnnamedRegistry);
        }
        if spec.matchers.is_empty() {
            return Err(TableError::EmptyRegistry(spec.name));
        }
        if spec.fixed_package.as_deref() == Some("") {
            return Err(TableError::EmptyFixedPackage(spec.name));
        }

        let mut matchers = Vec::with_capacity(spec.matchers.len());
        for (index, matcher_spec) in spec.matchers.iter().enumerate() {
            let matcher = matcher_spec.compile().map_err(|source| TableError::Template {
                registry: spec.name.clone(),
                index,
                source,
            })?;
            if spec.fixed_package.is_none() && !matcher.declares_capture("pkg") {
                return Err(TableError::NoPackageSource {
                    registry: spec.name.clone(),
                    index,
                });
            }
            matchers.push(matcher);
        }

        Ok(Self {
            name: spec.name,
            org: spec.org,
            default_version: spec.default_version,
            fixed_package: spec.fixed_package,
            matchers,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn org_shape(&self) -> OrgShape {
        self.org
    }

    pub fn default_version(&self) -> Option<&str> {
        self.default_version.as_deref()
    }

    pub fn fixed_package(&self) -> Option<&str> {
        self.fixed_package.as_deref()
    }

    /// Matchers in declared order.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }
}

/// Ordered, immutable set of registries.
#[derive(Debug, Clone)]
pub struct PatternTable {
    registries: Vec<Registry>,
}

impl PatternTable {
    /// Compile `specs` in order.
    pub fn build<I>(specs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = RegistrySpec>,
    {
        let mut seen = HashSet::new();
        let mut registries = Vec::new();
        for spec in specs {
            if !seen.insert(spec.name.clone()) {
                return Err(TableError::DuplicateRegistry(spec.name));
            }
            registries.push(Registry::compile(spec)?);
        }

        let table = Self { registries };
        tracing::info!(
            registries = table.len(),
            matchers = table.matcher_count(),
            "Pattern table built"
        );
        Ok(table)
    }

    /// The built-in table of known registries.
    pub fn builtin() -> Result<Self, TableError> {
        Self::build(builtin::registries())
    }

    /// Registries in declared order.
    pub fn registries(&self) -> &[Registry] {
        &self.registries
    }

    pub fn get(&self, name: &str) -> Option<&Registry> {
        self.registries.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    pub fn matcher_count(&self) -> usize {
        self.registries.iter().map(|r| r.matchers.len()).sum()
    }
}

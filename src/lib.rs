//! Module specifier resolution.
//!
//! Classifies third-party module URLs (registries, CDNs, source forges) into
//! a canonical [`Identity`]: registry, organization, package, version and
//! in-package module path.
//!
//! ```text
//! URL → Resolver (registries → matchers) → RawMatch
//!     → validation → Canonicalizer → Identity
//!                                                                   └─ no match → Unresolved
//! ```

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod pattern;
pub mod registry;
pub mod resolver;

pub use config::ResolverConfig;
pub use registry::{PatternTable, RegistrySpec, TableError};
pub use resolver::{Identity, InvalidMatchPolicy, Resolution, Resolver, Unresolved};

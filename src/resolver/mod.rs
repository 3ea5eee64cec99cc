//! Resolution subsystem.
//!
//! # Data Flow
//! ```text
//! specifier (string)
//!     → resolver.rs (parse URL, walk registries → matchers)
//!     → pattern::Matcher (structural match → RawMatch)
//!     → validation.rs (semantic checks, policy on failure)
//!     → canonical.rs (RawMatch → Identity)
//!     → Return: Resolution::Resolved(Identity) or Resolution::Unresolved
//! ```
//!
//! # Design Decisions
//! - Every per-URL outcome is a value; nothing here returns `Err`
//! - Pure function over an immutable table: safe from any number of threads

pub mod canonical;
pub mod identity;
#[allow(clippy::module_inception)]
pub mod resolver;
pub mod validation;

pub use crate::config::InvalidMatchPolicy;
pub use identity::{Identity, Resolution, Unresolved};
pub use resolver::Resolver;
pub use validation::Violation;

//! URL shape matching engine.
//!
//! # Data Flow
//! ```text
//! Table construction (at startup):
//!     MatcherSpec (url shorthand or per-component templates)
//!     → template.rs (parse mini-language, emit anchored regex)
//!     → matcher.rs (one Template per component)
//!     → Matcher (immutable)
//!
//! Resolution:
//!     parsed Url → Matcher::match_url → RawMatch | None
//! ```
//!
//! # Design Decisions
//! - Generic: knows nothing about registries or package semantics
//! - Compile errors surface at construction, never during matching

pub mod matcher;
pub mod template;

pub use matcher::{ComponentTemplates, Matcher, MatcherSpec, RawMatch};
pub use template::{Component, Template, TemplateError};

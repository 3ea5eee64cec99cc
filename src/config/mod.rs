//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ResolverConfig (validated, immutable)
//!     → resolution policy handed to the Resolver, logging settings to observability
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The pattern table is not configurable here; it is compiled-in data

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::InvalidMatchPolicy;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::ResolutionConfig;
pub use schema::ResolverConfig;

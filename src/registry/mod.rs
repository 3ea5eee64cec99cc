//! Registry subsystem.
//!
//! # Data Flow
//! ```text
//! Table construction (once, at startup):
//!     RegistrySpec[] (builtin.rs or caller-provided)
//!     → table.rs (compile matchers, check names and package sources)
//!     → PatternTable (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Adding a registry is a table edit in builtin.rs only
//! - Tables are injected values so tests can substitute smaller ones

pub mod builtin;
pub mod table;

pub use table::{OrgShape, PatternTable, Registry, RegistrySpec, TableError};

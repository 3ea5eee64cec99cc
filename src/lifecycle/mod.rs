//! Process lifecycle.

pub mod startup;

pub use startup::build_resolver;

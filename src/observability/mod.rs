//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (table build, resolution outcomes, rejections)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; installing a subscriber is the binary's job
//! - Per-matcher attempts log at trace level to keep batch runs quiet

pub mod logging;

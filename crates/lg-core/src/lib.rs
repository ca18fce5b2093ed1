//! lg-core: stable foundation for labelgraph.
//!
//! Contains:
//! - label (the `Label` bound and the `Weight` type)
//! - error (shared error types)

pub mod error;
pub mod label;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LgError, LgResult};
pub use label::{Label, Weight};

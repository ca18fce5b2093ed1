//! Graph-specific error types.

use lg_core::LgError;
use thiserror::Error;

/// Representation-invariant violations.
///
/// Each variant names one way the internal state can be broken. Any of them
/// is a bug in this crate: no sequence of valid contract calls produces one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two vertex records carry the same label.
    #[error("duplicate vertex label {label}")]
    DuplicateLabel { label: String },

    /// An edge is stored with weight zero. Zero means "no edge" and must
    /// never reach storage.
    ///
    /// Field is `src`, not `source`: thiserror reserves that name for an
    /// error cause, and these labels are plain strings.
    #[error("edge {src} -> {target} stored with zero weight")]
    ZeroWeight { src: String, target: String },

    /// An edge endpoint is not in the vertex set.
    #[error("edge {src} -> {target} references missing vertex {missing}")]
    DanglingEndpoint {
        src: String,
        target: String,
        missing: String,
    },
}

impl From<GraphError> for LgError {
    fn from(err: GraphError) -> Self {
        LgError::Invariant {
            what: err.to_string(),
        }
    }
}

//! Error types for ranking pipeline construction.
//!
//! Ranking itself cannot fail; only edits to a pipeline can.

use thiserror::Error;

/// Errors raised while assembling a [`RankingPipeline`](crate::RankingPipeline).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// An anchor or removal target names no weigher in the pipeline.
    #[error("Unknown weigher: {0}")]
    UnknownWeigher(String),

    /// A weigher with the same id is already part of the pipeline.
    #[error("Duplicate weigher: {0}")]
    DuplicateWeigher(String),
}

impl PipelineError {
    /// Create an unknown-weigher error.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownWeigher(id.into())
    }

    /// Create a duplicate-weigher error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateWeigher(id.into())
    }
}

/// Result type for pipeline construction.
pub type PipelineResult<T> = Result<T, PipelineError>;

//! Ranking tests
//!
//! Tests for:
//! - Ordering properties (determinism, stability, parallel evaluation)
//! - Individual dimensions through the full pipeline
//! - Smart-completion relevance in basic completion
//! - End-to-end completion scenarios

pub mod tests_dimensions;

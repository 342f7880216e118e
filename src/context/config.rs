//! Ranking options

use smol_str::SmolStr;

/// Tunables for one ranking pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    /// Candidate count from which keys are computed on the rayon pool
    pub parallel_threshold: usize,
    /// Constructor of the boolean type, used to gate `true`/`false`
    pub boolean_type: SmolStr,
    /// Multiplier applied to name similarity of full type matches
    pub full_match_similarity_factor: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            boolean_type: SmolStr::new_static("kotlin.Boolean"),
            full_match_similarity_factor: 3,
        }
    }
}

impl RankingConfig {
    /// Whether a list of `len` candidates should be weighed in parallel
    pub fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}

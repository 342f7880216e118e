//! Completion ranking: the weigher pipeline and `rank`.

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::candidate::Candidate;
use crate::context::RankingContext;
use crate::error::{PipelineError, PipelineResult};
use crate::weighers::{
    CallableWeigher, DeclaredPriorityWeigher, DeprecatedWeigher, ExactPrefixMatchWeigher,
    ImportedWeigher, KindWeigher, LocationWeigher, NotImportedWeigher, OrderKey,
    SmartCompletionPriorityWeigher, SmartInBasicWeigher, VariableOrFunctionWeigher, Weigher,
};

/// An ordered sequence of weighers.
///
/// Candidates are sorted by comparing their key tuples lexicographically in
/// pipeline order. The sort is stable: candidates with equal tuples keep
/// their input order.
pub struct RankingPipeline {
    /// Weighers by id (IndexMap preserves pipeline order).
    weighers: IndexMap<&'static str, Box<dyn Weigher>>,
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl RankingPipeline {
    /// A pipeline without weighers; `rank` keeps the input order.
    pub fn empty() -> Self {
        Self {
            weighers: IndexMap::new(),
        }
    }

    /// The standard basic-completion pipeline.
    pub fn standard() -> Self {
        let weighers: [Box<dyn Weigher>; 11] = [
            Box::new(ExactPrefixMatchWeigher),
            Box::new(SmartInBasicWeigher),
            Box::new(DeclaredPriorityWeigher),
            Box::new(SmartCompletionPriorityWeigher),
            Box::new(DeprecatedWeigher),
            Box::new(NotImportedWeigher),
            Box::new(KindWeigher),
            Box::new(CallableWeigher),
            Box::new(VariableOrFunctionWeigher),
            Box::new(ImportedWeigher),
            Box::new(LocationWeigher),
        ];
        Self {
            weighers: weighers.into_iter().map(|w| (w.id(), w)).collect(),
        }
    }

    /// Append a weigher at the end.
    pub fn push(mut self, weigher: impl Weigher + 'static) -> PipelineResult<Self> {
        let id = weigher.id();
        if self.weighers.contains_key(id) {
            return Err(PipelineError::duplicate(id));
        }
        self.weighers.insert(id, Box::new(weigher));
        Ok(self)
    }

    /// Insert a weigher immediately before `anchor`.
    pub fn weigh_before(self, anchor: &str, weigher: impl Weigher + 'static) -> PipelineResult<Self> {
        let index = self.index_of(anchor)?;
        self.insert_at(index, weigher)
    }

    /// Insert a weigher immediately after `anchor`.
    pub fn weigh_after(self, anchor: &str, weigher: impl Weigher + 'static) -> PipelineResult<Self> {
        let index = self.index_of(anchor)?;
        self.insert_at(index + 1, weigher)
    }

    /// Remove the weigher with the given id.
    pub fn without(mut self, id: &str) -> PipelineResult<Self> {
        match self.weighers.shift_remove(id) {
            Some(_) => Ok(self),
            None => Err(PipelineError::unknown(id)),
        }
    }

    /// Weigher ids in pipeline order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.weighers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.weighers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weighers.is_empty()
    }

    /// The key tuple of one candidate.
    pub fn keys(&self, candidate: &Candidate, ctx: &RankingContext<'_>) -> Vec<OrderKey> {
        self.weighers
            .values()
            .map(|weigher| weigher.weigh(candidate, ctx))
            .collect()
    }

    /// The key tuple of one candidate, labeled by weigher id.
    pub fn explain(
        &self,
        candidate: &Candidate,
        ctx: &RankingContext<'_>,
    ) -> Vec<(&'static str, OrderKey)> {
        self.weighers
            .iter()
            .map(|(id, weigher)| (*id, weigher.weigh(candidate, ctx)))
            .collect()
    }

    /// Order `candidates` best first.
    pub fn rank(&self, candidates: Vec<Candidate>, ctx: &RankingContext<'_>) -> Vec<Candidate> {
        let parallel = ctx.config.is_parallel(candidates.len());
        debug!(
            "[RANK] candidates={} weighers={} parallel={} prefix='{}'",
            candidates.len(),
            self.weighers.len(),
            parallel,
            ctx.prefix
        );

        let keys: Vec<Vec<OrderKey>> = if parallel {
            candidates.par_iter().map(|c| self.keys(c, ctx)).collect()
        } else {
            candidates.iter().map(|c| self.keys(c, ctx)).collect()
        };

        let mut keyed: Vec<(Vec<OrderKey>, Candidate)> = keys.into_iter().zip(candidates).collect();
        // Stable: ties keep input order.
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        keyed
            .into_iter()
            .map(|(keys, candidate)| {
                trace!("[RANK] '{}' -> {:?}", candidate.lookup_string, keys);
                candidate
            })
            .collect()
    }

    fn index_of(&self, id: &str) -> PipelineResult<usize> {
        self.weighers
            .get_index_of(id)
            .ok_or_else(|| PipelineError::unknown(id))
    }

    fn insert_at(mut self, index: usize, weigher: impl Weigher + 'static) -> PipelineResult<Self> {
        let id = weigher.id();
        if self.weighers.contains_key(id) {
            return Err(PipelineError::duplicate(id));
        }
        self.weighers.shift_insert(index, id, Box::new(weigher));
        Ok(self)
    }
}

/// Rank candidates with the standard pipeline.
///
/// # Arguments
/// * `candidates` - Materialized completion candidates, in generation order
/// * `ctx` - Session context (prefix, classifiers, smart-completion data)
///
/// # Returns
/// The same candidates, best first. Candidates the pipeline cannot tell
/// apart keep their relative input order.
pub fn rank(candidates: Vec<Candidate>, ctx: &RankingContext<'_>) -> Vec<Candidate> {
    RankingPipeline::standard().rank(candidates, ctx)
}

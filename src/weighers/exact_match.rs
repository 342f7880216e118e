//! Exact prefix match weigher.

use crate::candidate::{Candidate, LookupObject};
use crate::context::RankingContext;

use super::{OrderKey, Weigher, ids};

/// Keyword exact matches first so typing `return` is never buried under
/// symbols called `return`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExactMatchWeight {
    KeywordExactMatch,
    FunctionExactMatch,
    DefaultExactMatch,
    NotExactMatch,
}

impl From<ExactMatchWeight> for OrderKey {
    fn from(weight: ExactMatchWeight) -> Self {
        OrderKey::ExactMatch(weight)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExactPrefixMatchWeigher;

impl ExactPrefixMatchWeigher {
    /// An empty prefix matches nothing exactly.
    pub fn weight(candidate: &Candidate, prefix: &str) -> ExactMatchWeight {
        if prefix.is_empty() || candidate.lookup_string != prefix {
            return ExactMatchWeight::NotExactMatch;
        }
        match &candidate.object {
            LookupObject::Keyword(_) => ExactMatchWeight::KeywordExactMatch,
            LookupObject::Declaration(declaration) if declaration.descriptor.is_function() => {
                ExactMatchWeight::FunctionExactMatch
            }
            LookupObject::Declaration(_)
            | LookupObject::Package(_)
            | LookupObject::ThisReceiver(_) => ExactMatchWeight::DefaultExactMatch,
        }
    }
}

impl Weigher for ExactPrefixMatchWeigher {
    fn id(&self) -> &'static str {
        ids::EXACT_PREFIX_MATCH
    }

    fn weigh(&self, candidate: &Candidate, ctx: &RankingContext<'_>) -> OrderKey {
        Self::weight(candidate, &ctx.prefix).into()
    }
}

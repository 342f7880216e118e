//! Deprecated declarations sort after everything else of the same rank.

use crate::candidate::{Candidate, LookupObject};
use crate::context::RankingContext;

use super::{OrderKey, Weigher, ids};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeprecatedWeigher;

impl DeprecatedWeigher {
    pub fn is_deprecated(candidate: &Candidate) -> bool {
        match &candidate.object {
            LookupObject::Declaration(declaration) => declaration.deprecated,
            LookupObject::Package(_) | LookupObject::Keyword(_) | LookupObject::ThisReceiver(_) => {
                false
            }
        }
    }
}

impl Weigher for DeprecatedWeigher {
    fn id(&self) -> &'static str {
        ids::DEPRECATED
    }

    fn weigh(&self, candidate: &Candidate, _ctx: &RankingContext<'_>) -> OrderKey {
        OrderKey::Deprecated(Self::is_deprecated(candidate))
    }
}

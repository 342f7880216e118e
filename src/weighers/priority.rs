//! Passthrough weighers for priorities assigned upstream.

use crate::candidate::{Candidate, ItemPriority, SmartCompletionItemPriority};
use crate::context::RankingContext;

use super::{OrderKey, Weigher, ids};

impl From<ItemPriority> for OrderKey {
    fn from(priority: ItemPriority) -> Self {
        OrderKey::Priority(priority)
    }
}

impl From<SmartCompletionItemPriority> for OrderKey {
    fn from(priority: SmartCompletionItemPriority) -> Self {
        OrderKey::SmartPriority(priority)
    }
}

/// Declared base priority, [`ItemPriority::Default`] when unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredPriorityWeigher;

impl Weigher for DeclaredPriorityWeigher {
    fn id(&self) -> &'static str {
        ids::PRIORITY
    }

    fn weigh(&self, candidate: &Candidate, _ctx: &RankingContext<'_>) -> OrderKey {
        candidate.priority.unwrap_or_default().into()
    }
}

/// Separates items smart completion injected (literals, lambdas, ...) from
/// regular symbols.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartCompletionPriorityWeigher;

impl Weigher for SmartCompletionPriorityWeigher {
    fn id(&self) -> &'static str {
        ids::SMART_COMPLETION_PRIORITY
    }

    fn weigh(&self, candidate: &Candidate, _ctx: &RankingContext<'_>) -> OrderKey {
        candidate.smart_priority.unwrap_or_default().into()
    }
}

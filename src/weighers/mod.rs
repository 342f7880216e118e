//! Weighers: one ranking dimension each.
//!
//! A [`Weigher`] maps a candidate to an [`OrderKey`]. Keys produced by the
//! same weigher are totally ordered and smaller keys sort first; keys of
//! different weighers are never compared with each other. A weigher with
//! nothing to say about a candidate returns [`OrderKey::NoOpinion`], which
//! ties with other no-opinion keys and sorts before every real key. A
//! candidate outside a weigher's domain (a local without an importable name,
//! a declaration without a location) is never demoted below the candidates
//! that weigher did grade.
//!
//! ## Standard order
//!
//! ```text
//! exactPrefixMatch        typed prefix equals the lookup string
//! smartInBasic            expected-type relevance from smart completion
//! priority                declared ItemPriority
//! smartCompletionPriority smart-completion item priority
//! deprecated              deprecated declarations last
//! notImported             candidates needing a new import last
//! kind                    enum member / callable / keyword / other / package
//! callableWeight          upstream receiver-match weight
//! variableOrFunction      variables before functions
//! imported                how the candidate is already imported
//! location                current file / module / project / libraries
//! ```

mod deprecated;
mod exact_match;
mod imports;
mod kind;
mod location;
mod priority;
mod smart_in_basic;

pub use deprecated::DeprecatedWeigher;
pub use exact_match::{ExactMatchWeight, ExactPrefixMatchWeigher};
pub use imports::{ImportedWeight, ImportedWeigher, NotImportedWeight, NotImportedWeigher};
pub use kind::{
    CallableWeigher, KindWeight, KindWeigher, VariableOrFunctionWeight, VariableOrFunctionWeigher,
};
pub use location::{LocationWeight, LocationWeigher};
pub use priority::{DeclaredPriorityWeigher, SmartCompletionPriorityWeigher};
pub use smart_in_basic::{LiteralMatch, SmartInBasicWeigher, SmartTier, SmartWeight};

use std::cmp::Reverse;

use crate::candidate::{Candidate, CallableWeight, ItemPriority, SmartCompletionItemPriority};
use crate::context::RankingContext;

/// Identifiers of the standard weighers, used as anchors when editing a
/// pipeline.
pub mod ids {
    pub const EXACT_PREFIX_MATCH: &str = "exactPrefixMatch";
    pub const SMART_IN_BASIC: &str = "smartInBasic";
    pub const PRIORITY: &str = "priority";
    pub const SMART_COMPLETION_PRIORITY: &str = "smartCompletionPriority";
    pub const DEPRECATED: &str = "deprecated";
    pub const NOT_IMPORTED: &str = "notImported";
    pub const KIND: &str = "kind";
    pub const CALLABLE_WEIGHT: &str = "callableWeight";
    pub const VARIABLE_OR_FUNCTION: &str = "variableOrFunction";
    pub const IMPORTED: &str = "imported";
    pub const LOCATION: &str = "location";
}

/// Sort key produced by one weigher for one candidate.
///
/// Each standard weigher produces exactly one variant (or `NoOpinion`).
/// `Custom` is available to weighers inserted by callers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderKey {
    NoOpinion,
    ExactMatch(ExactMatchWeight),
    /// Higher smart weights are better, hence reversed.
    SmartInBasic(Reverse<SmartWeight>),
    Priority(ItemPriority),
    SmartPriority(SmartCompletionItemPriority),
    Deprecated(bool),
    NotImported(NotImportedWeight),
    Kind(KindWeight),
    Callable(CallableWeight),
    VariableOrFunction(VariableOrFunctionWeight),
    Imported(ImportedWeight),
    Location(LocationWeight),
    Custom(i64),
}

impl<T: Into<OrderKey>> From<Option<T>> for OrderKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(OrderKey::NoOpinion, Into::into)
    }
}

/// A pure scoring function over one ranking dimension.
///
/// Implementations must not fail: a candidate variant the weigher does not
/// understand gets its documented default or [`OrderKey::NoOpinion`].
pub trait Weigher: Send + Sync {
    /// Stable identifier, unique within a pipeline.
    fn id(&self) -> &'static str;

    fn weigh(&self, candidate: &Candidate, ctx: &RankingContext<'_>) -> OrderKey;
}

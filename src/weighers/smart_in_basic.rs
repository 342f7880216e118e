//! Smart-completion relevance folded into basic completion.
//!
//! Basic completion offers every visible symbol; smart completion knows
//! which types the cursor position expects. This weigher lifts candidates
//! whose type fits an expected slot, and among those prefers names that
//! resemble the slot's name hint.
//!
//! ## Weight layout
//!
//! A [`SmartWeight`] compares `tier`, then `similarity`, then `literal`:
//!
//! ```text
//! Suppressed < NoMatch < Extra < WeakMatch < FullMatch
//! ```
//!
//! Literals carry similarity 0 and a [`LiteralMatch`] marker, so `true`
//! outranks a same-tier symbol with similarity 0 and loses to one with any
//! positive similarity.

use std::cmp::Reverse;

use crate::candidate::{Candidate, LookupObject};
use crate::context::{RankingConfig, RankingContext};
use crate::smart::{
    ExpectedInfoMatch, SmartCompletion, classify_expected_infos, name_similarity,
};
use crate::types::FuzzyType;

use super::{OrderKey, Weigher, ids};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SmartTier {
    /// Already offered by smart completion itself.
    Suppressed,
    NoMatch,
    /// An item smart completion generated (lambda, instantiation, ...).
    Extra,
    /// Matches only after a non-null check; also matched `null`.
    WeakMatch,
    FullMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralMatch {
    None,
    Null,
    False,
    True,
}

/// Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SmartWeight {
    pub tier: SmartTier,
    pub similarity: u32,
    pub literal: LiteralMatch,
}

impl SmartWeight {
    pub const SUPPRESSED: SmartWeight = SmartWeight::new(SmartTier::Suppressed, 0);
    pub const NO_MATCH: SmartWeight = SmartWeight::new(SmartTier::NoMatch, 0);
    pub const TRUE_MATCHED: SmartWeight = SmartWeight::literal(SmartTier::FullMatch, LiteralMatch::True);
    pub const FALSE_MATCHED: SmartWeight = SmartWeight::literal(SmartTier::FullMatch, LiteralMatch::False);
    pub const NULL_MATCHED: SmartWeight = SmartWeight::literal(SmartTier::WeakMatch, LiteralMatch::Null);

    pub const fn new(tier: SmartTier, similarity: u32) -> Self {
        Self {
            tier,
            similarity,
            literal: LiteralMatch::None,
        }
    }

    const fn literal(tier: SmartTier, literal: LiteralMatch) -> Self {
        Self {
            tier,
            similarity: 0,
            literal,
        }
    }
}

impl From<SmartWeight> for OrderKey {
    fn from(weight: SmartWeight) -> Self {
        OrderKey::SmartInBasic(Reverse(weight))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmartInBasicWeigher;

impl SmartInBasicWeigher {
    pub fn weight(candidate: &Candidate, ctx: &RankingContext<'_>) -> SmartWeight {
        // Smart-completion items were type-matched when they were created.
        if candidate.smart_priority.is_some() {
            return SmartWeight::new(SmartTier::Extra, candidate.name_similarity.unwrap_or(0));
        }

        let Some(smart) = &ctx.smart else {
            return SmartWeight::NO_MATCH;
        };

        if let Some(descriptor) = candidate.descriptor() {
            if smart.should_skip(descriptor.id) {
                return SmartWeight::SUPPRESSED;
            }
        }

        if smart.expected_infos.is_empty() {
            return SmartWeight::NO_MATCH;
        }

        match &candidate.object {
            LookupObject::Keyword(keyword) => keyword_weight(keyword, smart, &ctx.config),
            LookupObject::Declaration(declaration) => typed_weight(
                declaration.descriptor.name.as_deref(),
                &declaration.descriptor.fuzzy_types(),
                smart,
                &ctx.config,
            ),
            LookupObject::ThisReceiver(slot) => typed_weight(
                None,
                &smart.smart_casts.smart_cast_types(slot),
                smart,
                &ctx.config,
            ),
            LookupObject::Package(_) => SmartWeight::NO_MATCH,
        }
    }
}

impl Weigher for SmartInBasicWeigher {
    fn id(&self) -> &'static str {
        ids::SMART_IN_BASIC
    }

    fn weigh(&self, candidate: &Candidate, ctx: &RankingContext<'_>) -> OrderKey {
        Self::weight(candidate, ctx).into()
    }
}

fn keyword_weight(keyword: &str, smart: &SmartCompletion<'_>, config: &RankingConfig) -> SmartWeight {
    let expects_boolean = || {
        smart.expected_infos.iter().any(|info| {
            info.fuzzy_type
                .as_ref()
                .is_some_and(|fuzzy| is_boolean(fuzzy, config))
        })
    };
    let expects_nullable = || smart.expected_infos.iter().any(|info| info.accepts_null());

    match keyword {
        "true" if expects_boolean() => SmartWeight::TRUE_MATCHED,
        "false" if expects_boolean() => SmartWeight::FALSE_MATCHED,
        "null" if expects_nullable() => SmartWeight::NULL_MATCHED,
        _ => SmartWeight::NO_MATCH,
    }
}

/// `Boolean` or `Boolean?`.
fn is_boolean(fuzzy: &FuzzyType, config: &RankingConfig) -> bool {
    fuzzy.ty.constructor == config.boolean_type && fuzzy.ty.arguments.is_empty()
}

fn typed_weight(
    name: Option<&str>,
    types: &[FuzzyType],
    smart: &SmartCompletion<'_>,
    config: &RankingConfig,
) -> SmartWeight {
    if types.is_empty() {
        return SmartWeight::NO_MATCH;
    }

    let classified = classify_expected_infos(types, &smart.expected_infos, smart.hierarchy);
    let best = classified
        .iter()
        .map(|(_, matched)| *matched)
        .max()
        .unwrap_or(ExpectedInfoMatch::NoMatch);
    if !best.is_match() {
        return SmartWeight::NO_MATCH;
    }

    // Slots that did not match must not contribute a name hint.
    let similarity = name.map_or(0, |name| {
        name_similarity(
            name,
            classified
                .iter()
                .filter(|(_, matched)| matched.is_match())
                .map(|(info, _)| *info),
        )
    });

    if best == ExpectedInfoMatch::Match {
        SmartWeight::new(
            SmartTier::FullMatch,
            similarity.saturating_mul(config.full_match_similarity_factor),
        )
    } else {
        SmartWeight::new(SmartTier::WeakMatch, similarity)
    }
}

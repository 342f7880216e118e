//! Expected-type slots and matching candidate types against them.

use smol_str::SmolStr;

use crate::types::{FuzzyType, TypeHierarchy};

/// One expected-type slot at the cursor, e.g. a parameter of the call being
/// completed. `expected_name` is the name hint (the parameter or variable
/// name) used for name similarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedInfo {
    pub fuzzy_type: Option<FuzzyType>,
    pub expected_name: Option<SmolStr>,
}

impl ExpectedInfo {
    pub fn new(fuzzy_type: FuzzyType) -> Self {
        Self {
            fuzzy_type: Some(fuzzy_type),
            expected_name: None,
        }
    }

    /// A slot that only carries a name hint.
    pub fn untyped(expected_name: impl Into<SmolStr>) -> Self {
        Self {
            fuzzy_type: None,
            expected_name: Some(expected_name.into()),
        }
    }

    pub fn with_name(mut self, expected_name: impl Into<SmolStr>) -> Self {
        self.expected_name = Some(expected_name.into());
        self
    }

    pub fn accepts_null(&self) -> bool {
        self.fuzzy_type.as_ref().is_some_and(FuzzyType::is_nullable)
    }
}

/// How well a set of candidate types fits one expected slot.
///
/// Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpectedInfoMatch {
    NoMatch,
    /// Fits after a non-null check (`!!` or `?.`).
    IfNotNullMatch,
    Match,
}

impl ExpectedInfoMatch {
    pub fn is_match(self) -> bool {
        self != ExpectedInfoMatch::NoMatch
    }
}

/// Classify `types` against a single expected slot.
pub fn match_expected_info(
    types: &[FuzzyType],
    info: &ExpectedInfo,
    hierarchy: &dyn TypeHierarchy,
) -> ExpectedInfoMatch {
    let Some(expected) = &info.fuzzy_type else {
        return ExpectedInfoMatch::NoMatch;
    };

    if types
        .iter()
        .any(|ty| ty.check_is_subtype_of(expected, hierarchy).is_some())
    {
        return ExpectedInfoMatch::Match;
    }

    let matches_if_not_null = types.iter().filter(|ty| ty.is_nullable()).any(|ty| {
        ty.make_not_nullable()
            .check_is_subtype_of(expected, hierarchy)
            .is_some()
    });
    if matches_if_not_null {
        ExpectedInfoMatch::IfNotNullMatch
    } else {
        ExpectedInfoMatch::NoMatch
    }
}

/// Classify `types` against every slot, preserving slot order.
pub fn classify_expected_infos<'i>(
    types: &[FuzzyType],
    infos: &'i [ExpectedInfo],
    hierarchy: &dyn TypeHierarchy,
) -> Vec<(&'i ExpectedInfo, ExpectedInfoMatch)> {
    infos
        .iter()
        .map(|info| (info, match_expected_info(types, info, hierarchy)))
        .collect()
}

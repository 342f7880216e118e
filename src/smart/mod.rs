//! Smart-completion inputs consumed by basic-completion ranking.
//!
//! Smart completion runs before ranking and leaves behind two things the
//! ranking core reads: the expected-type slots at the cursor and the
//! descriptors it already surfaced as its own items. This module holds that
//! data plus the two pieces of logic that score against it:
//! [`match_expected_info`] (type relevance) and [`name_similarity`].

mod expected_info;
mod name_similarity;

pub use expected_info::{ExpectedInfo, ExpectedInfoMatch, classify_expected_infos, match_expected_info};
pub use name_similarity::{name_similarity, split_words};

use rustc_hash::FxHashSet;

use crate::candidate::{DescriptorId, ReceiverSlot};
use crate::types::{FuzzyType, NoHierarchy, TypeHierarchy};

/// Types a receiver can be smart-cast to at the cursor.
pub trait SmartCastTypeResolver: Send + Sync {
    fn smart_cast_types(&self, receiver: &ReceiverSlot) -> Vec<FuzzyType>;
}

/// Resolver for positions where no smart casts are in effect: a receiver
/// only has its declared type.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSmartCasts;

impl SmartCastTypeResolver for NoSmartCasts {
    fn smart_cast_types(&self, receiver: &ReceiverSlot) -> Vec<FuzzyType> {
        vec![FuzzyType::exact(receiver.declared_type.clone())]
    }
}

static NO_SMART_CASTS: NoSmartCasts = NoSmartCasts;
static NO_HIERARCHY: NoHierarchy = NoHierarchy;

/// Session data produced by smart completion.
pub struct SmartCompletion<'a> {
    pub expected_infos: Vec<ExpectedInfo>,
    /// Descriptors smart completion already offered as dedicated items.
    pub descriptors_to_skip: FxHashSet<DescriptorId>,
    pub smart_casts: &'a dyn SmartCastTypeResolver,
    pub hierarchy: &'a dyn TypeHierarchy,
}

impl<'a> SmartCompletion<'a> {
    /// Smart-completion data without smart casts or class hierarchy.
    pub fn new(expected_infos: Vec<ExpectedInfo>) -> Self {
        Self {
            expected_infos,
            descriptors_to_skip: FxHashSet::default(),
            smart_casts: &NO_SMART_CASTS,
            hierarchy: &NO_HIERARCHY,
        }
    }

    pub fn with_descriptors_to_skip(
        mut self,
        descriptors: impl IntoIterator<Item = DescriptorId>,
    ) -> Self {
        self.descriptors_to_skip.extend(descriptors);
        self
    }

    pub fn with_smart_casts(mut self, smart_casts: &'a dyn SmartCastTypeResolver) -> Self {
        self.smart_casts = smart_casts;
        self
    }

    pub fn with_hierarchy(mut self, hierarchy: &'a dyn TypeHierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    pub fn should_skip(&self, descriptor: DescriptorId) -> bool {
        self.descriptors_to_skip.contains(&descriptor)
    }
}

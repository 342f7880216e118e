//! Weighers over the syntactic kind of a candidate.

use crate::candidate::{CallableWeight, Candidate, ClassKind, DescriptorKind, LookupObject};
use crate::context::RankingContext;

use super::{OrderKey, Weigher, ids};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum KindWeight {
    EnumMember,
    Callable,
    Keyword,
    Default,
    Packages,
}

impl From<KindWeight> for OrderKey {
    fn from(weight: KindWeight) -> Self {
        OrderKey::Kind(weight)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KindWeigher;

impl KindWeigher {
    pub fn weight(candidate: &Candidate) -> KindWeight {
        match &candidate.object {
            LookupObject::Package(_) => KindWeight::Packages,
            LookupObject::Keyword(_) => KindWeight::Keyword,
            LookupObject::Declaration(declaration) => match &declaration.descriptor.kind {
                DescriptorKind::Variable { .. } | DescriptorKind::Function { .. } => {
                    KindWeight::Callable
                }
                DescriptorKind::Class {
                    kind: ClassKind::EnumEntry,
                    ..
                } => KindWeight::EnumMember,
                DescriptorKind::Class { .. }
                | DescriptorKind::TypeParameter
                | DescriptorKind::Other => KindWeight::Default,
            },
            LookupObject::ThisReceiver(_) => KindWeight::Default,
        }
    }
}

impl Weigher for KindWeigher {
    fn id(&self) -> &'static str {
        ids::KIND
    }

    fn weigh(&self, candidate: &Candidate, _ctx: &RankingContext<'_>) -> OrderKey {
        Self::weight(candidate).into()
    }
}

impl From<CallableWeight> for OrderKey {
    fn from(weight: CallableWeight) -> Self {
        OrderKey::Callable(weight)
    }
}

/// Passes the upstream [`CallableWeight`] through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallableWeigher;

impl Weigher for CallableWeigher {
    fn id(&self) -> &'static str {
        ids::CALLABLE_WEIGHT
    }

    fn weigh(&self, candidate: &Candidate, _ctx: &RankingContext<'_>) -> OrderKey {
        candidate.callable_weight.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VariableOrFunctionWeight {
    Variable,
    Function,
}

impl From<VariableOrFunctionWeight> for OrderKey {
    fn from(weight: VariableOrFunctionWeight) -> Self {
        OrderKey::VariableOrFunction(weight)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VariableOrFunctionWeigher;

impl VariableOrFunctionWeigher {
    pub fn weight(candidate: &Candidate) -> Option<VariableOrFunctionWeight> {
        match &candidate.object {
            LookupObject::Declaration(declaration) => match &declaration.descriptor.kind {
                DescriptorKind::Variable { .. } => Some(VariableOrFunctionWeight::Variable),
                DescriptorKind::Function { .. } => Some(VariableOrFunctionWeight::Function),
                DescriptorKind::Class { .. }
                | DescriptorKind::TypeParameter
                | DescriptorKind::Other => None,
            },
            LookupObject::Package(_) | LookupObject::Keyword(_) | LookupObject::ThisReceiver(_) => {
                None
            }
        }
    }
}

impl Weigher for VariableOrFunctionWeigher {
    fn id(&self) -> &'static str {
        ids::VARIABLE_OR_FUNCTION
    }

    fn weigh(&self, candidate: &Candidate, _ctx: &RankingContext<'_>) -> OrderKey {
        Self::weight(candidate).into()
    }
}

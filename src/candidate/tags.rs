//! Tags attached to candidates by upstream completion stages.
//!
//! Declaration order is rank order for every enum here: earlier variants
//! sort first.

/// Base priority assigned when a candidate is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemPriority {
    SuperMethodWithArguments,
    FromUnresolvedNameSuggestion,
    GetOperator,
    #[default]
    Default,
    Implement,
    Override,
    StaticMemberFromImports,
    StaticMember,
}

/// Priority of items smart completion adds on its own (literals, lambdas,
/// instantiations) relative to plain symbol candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmartCompletionItemPriority {
    MultipleArguments,
    LambdaSignature,
    CallableReferenceExpected,
    It,
    True,
    False,
    This,
    DelegatesStaticMember,
    Instantiation,
    StaticMember,
    AnonymousObject,
    LambdaNoParams,
    Lambda,
    CallableReference,
    Null,
    InheritorInstantiation,
    #[default]
    Default,
}

/// How a callable is reachable from the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallableWeightKind {
    Local,
    ThisClassMember,
    BaseClassMember,
    ThisTypeExtension,
    BaseTypeExtension,
    GlobalOrStatic,
    TypeParameterExtension,
    ReceiverCastRequired,
}

/// Relevance of a function or variable computed upstream from receiver
/// matching. `receiver_index` is the position of the implicit receiver that
/// was used, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallableWeight {
    pub kind: CallableWeightKind,
    pub receiver_index: Option<u32>,
}

impl CallableWeight {
    pub const fn new(kind: CallableWeightKind) -> Self {
        Self {
            kind,
            receiver_index: None,
        }
    }

    pub const fn with_receiver(kind: CallableWeightKind, receiver_index: u32) -> Self {
        Self {
            kind,
            receiver_index: Some(receiver_index),
        }
    }
}

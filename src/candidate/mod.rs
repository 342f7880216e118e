//! Completion candidates and the metadata upstream stages attach to them.
//!
//! A [`Candidate`] wraps one [`LookupObject`] (what the suggestion refers to)
//! together with optional tags. Tags are plain optional fields: a stage that
//! has nothing to say leaves them unset and every weigher treats the absence
//! as a normal case.

mod tags;

pub use tags::{CallableWeight, CallableWeightKind, ItemPriority, SmartCompletionItemPriority};

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{FqName, SourceLocation};
use crate::types::{FuzzyType, Type};

/// Identity of a resolved descriptor, stable for one completion session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescriptorId(pub u32);

/// Kind of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    Object,
    Annotation,
}

/// What a descriptor declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorKind {
    /// A property, local variable or parameter.
    Variable { ty: Type },
    /// A function; `type_parameters` are free in its return type.
    Function {
        return_type: Type,
        type_parameters: Vec<SmolStr>,
    },
    /// A class-like declaration and the type of its value when used as one.
    Class { kind: ClassKind, ty: Type },
    TypeParameter,
    Other,
}

/// A resolved declaration as produced by the semantic layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub id: DescriptorId,
    pub name: Option<SmolStr>,
    pub kind: DescriptorKind,
}

impl Descriptor {
    pub fn new(id: DescriptorId, name: impl Into<SmolStr>, kind: DescriptorKind) -> Self {
        Self {
            id,
            name: Some(name.into()),
            kind,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, DescriptorKind::Variable { .. })
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, DescriptorKind::Function { .. })
    }

    /// Types a reference to this descriptor evaluates to.
    ///
    /// Only objects and enum entries are values among class-like declarations;
    /// other classes contribute nothing.
    pub fn fuzzy_types(&self) -> Vec<FuzzyType> {
        match &self.kind {
            DescriptorKind::Variable { ty } => vec![FuzzyType::exact(ty.clone())],
            DescriptorKind::Function {
                return_type,
                type_parameters,
            } => vec![FuzzyType::new(
                return_type.clone(),
                type_parameters.iter().cloned(),
            )],
            DescriptorKind::Class {
                kind: ClassKind::Object | ClassKind::EnumEntry,
                ty,
            } => vec![FuzzyType::exact(ty.clone())],
            DescriptorKind::Class { .. } | DescriptorKind::TypeParameter | DescriptorKind::Other => {
                Vec::new()
            }
        }
    }
}

/// A declaration candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub descriptor: Arc<Descriptor>,
    /// Name under which the declaration could be imported, if any.
    pub importable_fq_name: Option<FqName>,
    pub deprecated: bool,
    pub location: Option<SourceLocation>,
}

impl Declaration {
    pub fn new(descriptor: Arc<Descriptor>) -> Self {
        Self {
            descriptor,
            importable_fq_name: None,
            deprecated: false,
            location: None,
        }
    }
}

/// An implicit or labeled `this` receiver available at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiverSlot {
    pub label: Option<SmolStr>,
    pub declared_type: Type,
}

/// What a candidate refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupObject {
    Declaration(Declaration),
    Package(FqName),
    Keyword(SmolStr),
    ThisReceiver(ReceiverSlot),
}

/// One completion suggestion plus upstream metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Text shown to the user and compared against the typed prefix.
    pub lookup_string: SmolStr,
    pub object: LookupObject,
    pub priority: Option<ItemPriority>,
    pub smart_priority: Option<SmartCompletionItemPriority>,
    pub callable_weight: Option<CallableWeight>,
    pub name_similarity: Option<u32>,
    pub not_imported: bool,
}

impl Candidate {
    pub fn new(lookup_string: impl Into<SmolStr>, object: LookupObject) -> Self {
        Self {
            lookup_string: lookup_string.into(),
            object,
            priority: None,
            smart_priority: None,
            callable_weight: None,
            name_similarity: None,
            not_imported: false,
        }
    }

    /// A declaration candidate whose lookup string is the descriptor name.
    pub fn declaration(declaration: Declaration) -> Self {
        let lookup_string = declaration.descriptor.name.clone().unwrap_or_default();
        Self::new(lookup_string, LookupObject::Declaration(declaration))
    }

    pub fn keyword(text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        Self::new(text.clone(), LookupObject::Keyword(text))
    }

    pub fn package(fq_name: FqName) -> Self {
        let short_name = SmolStr::new(fq_name.short_name());
        Self::new(short_name, LookupObject::Package(fq_name))
    }

    pub fn this_receiver(slot: ReceiverSlot) -> Self {
        let lookup_string = match &slot.label {
            Some(label) => SmolStr::new(format!("this@{label}")),
            None => SmolStr::new_static("this"),
        };
        Self::new(lookup_string, LookupObject::ThisReceiver(slot))
    }

    pub fn with_priority(mut self, priority: ItemPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_smart_priority(mut self, priority: SmartCompletionItemPriority) -> Self {
        self.smart_priority = Some(priority);
        self
    }

    pub fn with_callable_weight(mut self, weight: CallableWeight) -> Self {
        self.callable_weight = Some(weight);
        self
    }

    pub fn with_name_similarity(mut self, similarity: u32) -> Self {
        self.name_similarity = Some(similarity);
        self
    }

    pub fn mark_not_imported(mut self) -> Self {
        self.not_imported = true;
        self
    }

    pub fn as_declaration(&self) -> Option<&Declaration> {
        match &self.object {
            LookupObject::Declaration(declaration) => Some(declaration),
            LookupObject::Package(_) | LookupObject::Keyword(_) | LookupObject::ThisReceiver(_) => {
                None
            }
        }
    }

    pub fn descriptor(&self) -> Option<&Descriptor> {
        self.as_declaration().map(|d| d.descriptor.as_ref())
    }

    /// Fully-qualified name an import would use, and whether it is a package.
    pub fn importable_name(&self) -> Option<(&FqName, bool)> {
        match &self.object {
            LookupObject::Declaration(declaration) => {
                declaration.importable_fq_name.as_ref().map(|name| (name, false))
            }
            LookupObject::Package(name) => Some((name, true)),
            LookupObject::Keyword(_) | LookupObject::ThisReceiver(_) => None,
        }
    }
}

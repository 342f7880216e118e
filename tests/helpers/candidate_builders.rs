//! Builders for candidates used across ranking tests.

use std::sync::Arc;

use smol_str::SmolStr;

use ranking::candidate::ClassKind;
use ranking::types::Type;
use ranking::{Candidate, Declaration, Descriptor, DescriptorId, DescriptorKind, FqName, SourceLocation};

/// Builder for declaration candidates.
pub struct Decl {
    id: u32,
    name: SmolStr,
    kind: DescriptorKind,
    fq_name: Option<FqName>,
    deprecated: bool,
    location: Option<SourceLocation>,
}

impl Decl {
    fn new(id: u32, name: &str, kind: DescriptorKind) -> Self {
        Self {
            id,
            name: SmolStr::new(name),
            kind,
            fq_name: None,
            deprecated: false,
            location: None,
        }
    }

    pub fn variable(id: u32, name: &str, ty: Type) -> Self {
        Self::new(id, name, DescriptorKind::Variable { ty })
    }

    pub fn function(id: u32, name: &str, return_type: Type) -> Self {
        Self::new(
            id,
            name,
            DescriptorKind::Function {
                return_type,
                type_parameters: Vec::new(),
            },
        )
    }

    pub fn class(id: u32, name: &str, kind: ClassKind) -> Self {
        let ty = Type::simple(name);
        Self::new(id, name, DescriptorKind::Class { kind, ty })
    }

    /// Declares free type parameters on a function; ignored for other kinds.
    pub fn type_parameters<const N: usize>(mut self, names: [&str; N]) -> Self {
        if let DescriptorKind::Function { type_parameters, .. } = &mut self.kind {
            type_parameters.extend(names.into_iter().map(SmolStr::new));
        }
        self
    }

    pub fn fq(mut self, fq_name: &str) -> Self {
        self.fq_name = Some(FqName::from(fq_name));
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn build(self) -> Candidate {
        let descriptor = Arc::new(Descriptor::new(DescriptorId(self.id), self.name, self.kind));
        let mut declaration = Declaration::new(descriptor);
        declaration.importable_fq_name = self.fq_name;
        declaration.deprecated = self.deprecated;
        declaration.location = self.location;
        Candidate::declaration(declaration)
    }
}

pub fn int() -> Type {
    Type::simple("kotlin.Int")
}

pub fn string() -> Type {
    Type::simple("kotlin.String")
}

pub fn boolean() -> Type {
    Type::simple("kotlin.Boolean")
}

/// Lookup strings in order.
pub fn labels(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.lookup_string.as_str()).collect()
}

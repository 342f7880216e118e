//! Types and fuzzy types as seen by the ranking core.
//!
//! The core never infers types. Upstream stages hand over already-computed
//! [`Type`]s; this module only answers one question structurally: can a
//! candidate's [`FuzzyType`] be used where an expected [`FuzzyType`] is
//! required, and under which substitution of free type parameters.

mod fuzzy;

pub use fuzzy::{FuzzyType, TypeSubstitution};

use std::fmt;

use smol_str::SmolStr;

/// A (possibly generic, possibly nullable) type.
///
/// Type parameters are represented as a `Type` whose constructor is the
/// parameter's name; whether such a name is free is decided by the
/// [`FuzzyType`] that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    pub constructor: SmolStr,
    pub arguments: Vec<Type>,
    pub nullable: bool,
}

impl Type {
    /// A non-generic, non-nullable type.
    pub fn simple(constructor: impl Into<SmolStr>) -> Self {
        Self {
            constructor: constructor.into(),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// A generic, non-nullable type.
    pub fn generic(constructor: impl Into<SmolStr>, arguments: Vec<Type>) -> Self {
        Self {
            constructor: constructor.into(),
            arguments,
            nullable: false,
        }
    }

    pub fn make_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn make_not_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.constructor)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// Class hierarchy queries needed for subtype checks.
///
/// Implemented by the semantic layer that owns class descriptors.
pub trait TypeHierarchy: Send + Sync {
    /// Whether class `sub` (transitively) extends or implements `sup`.
    fn is_subclass_of(&self, sub: &str, sup: &str) -> bool;
}

/// A hierarchy in which distinct classes are never related.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHierarchy;

impl TypeHierarchy for NoHierarchy {
    fn is_subclass_of(&self, _sub: &str, _sup: &str) -> bool {
        false
    }
}

//! Fuzzy types: a type plus the type parameters that may still be substituted.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::{Type, TypeHierarchy};

/// A type together with the set of its type parameters that are free.
///
/// `fun <T> emptyList(): List<T>` has the fuzzy return type `List<T>` with
/// `T` free: it can be used wherever any `List<X>` is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyType {
    pub ty: Type,
    pub free_parameters: FxHashSet<SmolStr>,
}

/// Bindings found while matching a fuzzy type against an expected one.
///
/// Both sides may have free parameters, so bindings are kept per side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSubstitution {
    pub candidate: FxHashMap<SmolStr, Type>,
    pub expected: FxHashMap<SmolStr, Type>,
}

impl FuzzyType {
    pub fn new<I, S>(ty: Type, free_parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            ty,
            free_parameters: free_parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// A fuzzy type without free parameters.
    pub fn exact(ty: Type) -> Self {
        Self {
            ty,
            free_parameters: FxHashSet::default(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.ty.nullable
    }

    pub fn make_not_nullable(&self) -> Self {
        Self {
            ty: self.ty.clone().make_not_nullable(),
            free_parameters: self.free_parameters.clone(),
        }
    }

    /// Check whether a value of this type can be used where `expected` is
    /// required. Returns the substitution that makes it work.
    pub fn check_is_subtype_of(
        &self,
        expected: &FuzzyType,
        hierarchy: &dyn TypeHierarchy,
    ) -> Option<TypeSubstitution> {
        let mut unifier = Unifier {
            candidate_free: &self.free_parameters,
            expected_free: &expected.free_parameters,
            hierarchy,
            substitution: TypeSubstitution::default(),
        };
        if unifier.subtype(&self.ty, &expected.ty) {
            Some(unifier.substitution)
        } else {
            None
        }
    }
}

struct Unifier<'a> {
    candidate_free: &'a FxHashSet<SmolStr>,
    expected_free: &'a FxHashSet<SmolStr>,
    hierarchy: &'a dyn TypeHierarchy,
    substitution: TypeSubstitution,
}

impl Unifier<'_> {
    /// Top-level check: `actual <: expected`.
    fn subtype(&mut self, actual: &Type, expected: &Type) -> bool {
        if self.expected_free.contains(&expected.constructor) {
            let mut bound = actual.clone();
            bound.nullable = actual.nullable && !expected.nullable;
            return bind(&mut self.substitution.expected, &expected.constructor, bound);
        }

        if actual.nullable && !expected.nullable {
            return false;
        }

        if self.candidate_free.contains(&actual.constructor) {
            let mut bound = expected.clone();
            bound.nullable = expected.nullable && !actual.nullable;
            return bind(&mut self.substitution.candidate, &actual.constructor, bound);
        }

        if actual.constructor == expected.constructor {
            return self.arguments_match(actual, expected);
        }

        // Without supertype arguments only raw or fully-free expectations can
        // be satisfied through the class hierarchy.
        self.hierarchy
            .is_subclass_of(&actual.constructor, &expected.constructor)
            && expected
                .arguments
                .iter()
                .all(|arg| self.expected_free.contains(&arg.constructor))
    }

    fn arguments_match(&mut self, actual: &Type, expected: &Type) -> bool {
        actual.arguments.len() == expected.arguments.len()
            && actual
                .arguments
                .iter()
                .zip(&expected.arguments)
                .all(|(a, e)| self.same(a, e))
    }

    /// Invariant position: types must be equal modulo free parameters.
    fn same(&mut self, actual: &Type, expected: &Type) -> bool {
        if self.expected_free.contains(&expected.constructor) {
            let mut bound = actual.clone();
            bound.nullable = actual.nullable && !expected.nullable;
            return bind(&mut self.substitution.expected, &expected.constructor, bound);
        }
        if self.candidate_free.contains(&actual.constructor) {
            let mut bound = expected.clone();
            bound.nullable = expected.nullable && !actual.nullable;
            return bind(&mut self.substitution.candidate, &actual.constructor, bound);
        }
        actual.nullable == expected.nullable
            && actual.constructor == expected.constructor
            && self.arguments_match(actual, expected)
    }
}

fn bind(bindings: &mut FxHashMap<SmolStr, Type>, parameter: &SmolStr, ty: Type) -> bool {
    match bindings.get(parameter) {
        Some(existing) => *existing == ty,
        None => {
            bindings.insert(parameter.clone(), ty);
            true
        }
    }
}

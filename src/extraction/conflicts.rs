//! Override and overload detection within a same-named method group.
//!
//! The binder only consumes the verdicts of a [`ConflictResolver`]; how
//! declarations are related is decided here.

use crate::model::{MethodDescriptor, TypeHierarchy};

pub trait ConflictResolver: Send + Sync {
    /// Chains of declarations sharing one signature across the hierarchy.
    /// `None` when no signature is declared more than once.
    fn overridden_methods(&self, methods: &[MethodDescriptor]) -> Option<Vec<Vec<MethodDescriptor>>>;

    /// One representative per distinct parameter signature, when there is
    /// more than one. `None` otherwise.
    fn overloaded_methods(&self, methods: &[MethodDescriptor]) -> Option<Vec<MethodDescriptor>>;

    /// The declaration on the most derived type, ties broken by covariant
    /// return type. `None` only for an empty slice.
    fn most_specific<'m>(&self, methods: &'m [MethodDescriptor]) -> Option<&'m MethodDescriptor>;
}

/// Resolver backed by the subtype relation of the provider's types.
#[derive(Debug, Clone, Default)]
pub struct HierarchyResolver {
    hierarchy: TypeHierarchy,
}

impl HierarchyResolver {
    pub fn new(hierarchy: TypeHierarchy) -> Self {
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    fn is_more_specific(&self, candidate: &MethodDescriptor, current: &MethodDescriptor) -> bool {
        if candidate.declaring_type != current.declaring_type {
            return self
                .hierarchy
                .is_proper_subtype(&candidate.declaring_type, &current.declaring_type);
        }
        self.hierarchy
            .is_proper_subtype(&candidate.return_type, &current.return_type)
    }
}

impl ConflictResolver for HierarchyResolver {
    fn overridden_methods(&self, methods: &[MethodDescriptor]) -> Option<Vec<Vec<MethodDescriptor>>> {
        let mut chains: Vec<Vec<MethodDescriptor>> = Vec::new();
        for method in methods {
            match chains.iter_mut().find(|chain| chain[0].same_signature(method)) {
                Some(chain) => chain.push(method.clone()),
                None => chains.push(vec![method.clone()]),
            }
        }
        chains.retain(|chain| chain.len() > 1);
        (!chains.is_empty()).then_some(chains)
    }

    fn overloaded_methods(&self, methods: &[MethodDescriptor]) -> Option<Vec<MethodDescriptor>> {
        let mut distinct: Vec<MethodDescriptor> = Vec::new();
        for method in methods {
            if !distinct.iter().any(|m| m.same_signature(method)) {
                distinct.push(method.clone());
            }
        }
        (distinct.len() > 1).then_some(distinct)
    }

    fn most_specific<'m>(&self, methods: &'m [MethodDescriptor]) -> Option<&'m MethodDescriptor> {
        methods.iter().reduce(|current, candidate| {
            if self.is_more_specific(candidate, current) {
                candidate
            } else {
                current
            }
        })
    }
}

//! Sources of method sets.
//!
//! Extraction never introspects anything itself; a [`MethodSetProvider`]
//! describes each type as a plain [`MethodSet`].

pub mod catalog;

pub use catalog::{MethodDeclaration, TypeCatalog, TypeDeclaration};

use crate::model::{MethodSet, TypeHierarchy, TypeName};

pub trait MethodSetProvider: Send + Sync {
    /// Own and inherited methods of `name`, most-derived declarations first.
    /// `None` for types the provider does not know.
    fn method_set(&self, name: &TypeName) -> Option<MethodSet>;

    /// Subtype relation between the provider's types.
    fn hierarchy(&self) -> TypeHierarchy;
}

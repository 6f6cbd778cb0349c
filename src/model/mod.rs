//! Data model shared by the extraction engine, the policy hooks and the
//! worklist driver.
//!
//! Method descriptors are produced by a [`MethodSetProvider`](crate::provider::MethodSetProvider)
//! and only read by the engine. Bound properties, diagnostics and schemas are
//! the outputs handed back to the caller.

pub mod descriptor;
pub mod diagnostic;
pub mod hierarchy;
pub mod property;
pub mod schema;

pub use descriptor::{Marker, MethodDescriptor, MethodSet, TypeDescriptor, TypeKind, TypeName};
pub use diagnostic::{DiagnosticEvent, DiagnosticKind, DiagnosticThreshold, Severity};
pub use hierarchy::TypeHierarchy;
pub use property::{BoundProperty, StateManagement};
pub use schema::{ModelSchema, SchemaAspect, StructSchema};

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod driver;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod model;
pub mod observability;
pub mod policy;
pub mod provider;
pub mod testkit;

// Re-export commonly used types
pub use crate::model::{
    BoundProperty, DiagnosticEvent, DiagnosticKind, DiagnosticThreshold, Marker,
    MethodDescriptor, MethodSet, ModelSchema, SchemaAspect, Severity, StateManagement,
    StructSchema, TypeDescriptor, TypeHierarchy, TypeKind, TypeName,
};

pub use crate::extraction::{
    ConflictResolver, ExtractionContext, ExtractionResult, HierarchyResolver,
    StructSchemaExtractor,
};

pub use crate::policy::{AspectExtractor, ManagedStructPolicy, SchemaPolicy, SetterVerdict};

pub use crate::provider::{MethodSetProvider, TypeCatalog};

pub use crate::driver::{extract_batch, SchemaReport, SchemaStore};

pub use crate::config::{SchemaConfig, TypeSettings};

pub use crate::errors::SchemaError;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

//! Pluggable policy hooks.
//!
//! A [`SchemaPolicy`] supplies every decision the extraction engine does not
//! make itself. Each family of extractable types is one implementation;
//! [`ManagedStructPolicy`] is the built-in family for managed struct types.

pub mod managed;

pub use managed::ManagedStructPolicy;

use crate::extraction::{AccessorContext, ExtractionContext, PropertyValidator};
use crate::model::{
    BoundProperty, DiagnosticKind, MethodDescriptor, ModelSchema, SchemaAspect, StateManagement,
    StructSchema, TypeDescriptor, TypeName,
};
use std::collections::BTreeSet;

/// Outcome of setter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterVerdict {
    Accept,
    /// The property is still bound, without a setter binding.
    Reject,
}

pub trait SchemaPolicy: Send + Sync {
    fn validate_hierarchy(&self, ctx: &mut ExtractionContext, target: &TypeDescriptor);

    fn classify_state(&self, ctx: &mut ExtractionContext, getter: &AccessorContext) -> StateManagement;

    fn validate_setter(
        &self,
        ctx: &mut ExtractionContext,
        value_type: &TypeName,
        getter: &AccessorContext,
        setter: &AccessorContext,
    ) -> SetterVerdict;

    fn on_invalid_getter(&self, ctx: &mut ExtractionContext, getter: &MethodDescriptor, message: &str) {
        ctx.error(
            DiagnosticKind::InvalidGetter,
            std::slice::from_ref(getter),
            format!("invalid property accessor {}: {}", getter.signature(), message),
        );
    }

    fn on_overridden_methods(&self, ctx: &mut ExtractionContext, chains: &[Vec<MethodDescriptor>]);

    fn on_overloaded_methods(&self, ctx: &mut ExtractionContext, overloads: &[MethodDescriptor]) {
        let signatures: Vec<String> = overloads.iter().map(MethodDescriptor::signature).collect();
        ctx.error(
            DiagnosticKind::OverloadedMethods,
            overloads,
            format!("overloaded methods are not supported: {}", signatures.join(", ")),
        );
    }

    /// Report methods that are neither bound nor excused. Returns the subset
    /// of `unhandled` this policy accepts anyway.
    fn on_incomplete_coverage(
        &self,
        ctx: &mut ExtractionContext,
        all: &[MethodDescriptor],
        unhandled: &[MethodDescriptor],
    ) -> BTreeSet<MethodDescriptor>;

    fn build_schema(
        &self,
        ctx: &ExtractionContext,
        properties: Vec<BoundProperty>,
        aspects: Vec<SchemaAspect>,
    ) -> ModelSchema {
        ModelSchema::Struct(StructSchema {
            type_name: ctx.type_name().clone(),
            properties,
            aspects,
        })
    }

    /// Validator run by the driver once `property`'s value schema exists.
    fn property_validator(&self, owner: &TypeName, property: &BoundProperty) -> PropertyValidator;
}

/// Extracts cross-cutting aspects from bound properties.
pub trait AspectExtractor: Send + Sync {
    fn extract(&self, ctx: &mut ExtractionContext, properties: &[BoundProperty]) -> Vec<SchemaAspect>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoAspects;

impl AspectExtractor for NoAspects {
    fn extract(&self, _ctx: &mut ExtractionContext, _properties: &[BoundProperty]) -> Vec<SchemaAspect> {
        Vec::new()
    }
}

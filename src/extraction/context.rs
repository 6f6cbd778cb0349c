//! Per-pass extraction context handed to policy hooks.

use crate::model::{
    BoundProperty, DiagnosticEvent, DiagnosticKind, MethodDescriptor, ModelSchema, Severity,
    TypeDescriptor, TypeName,
};
use std::fmt;
use tracing::{error, warn};

/// Runs once the nested schema of a property is known and returns the
/// diagnostics it raises.
pub type PropertyValidator = Box<dyn FnOnce(&ModelSchema) -> Vec<DiagnosticEvent> + Send>;

/// Collects diagnostics and recursion requests for one extraction call.
pub struct ExtractionContext {
    target: TypeDescriptor,
    diagnostics: Vec<DiagnosticEvent>,
    children: Vec<ChildRequest>,
}

impl ExtractionContext {
    pub fn new(target: TypeDescriptor) -> Self {
        Self {
            target,
            diagnostics: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn target(&self) -> &TypeDescriptor {
        &self.target
    }

    pub fn type_name(&self) -> &TypeName {
        &self.target.name
    }

    pub fn report(&mut self, event: DiagnosticEvent) {
        match event.severity {
            Severity::Error => error!(kind = %event.kind, type_name = %event.subject, "{}", event.message),
            Severity::Warning => warn!(kind = %event.kind, type_name = %event.subject, "{}", event.message),
        }
        self.diagnostics.push(event);
    }

    pub fn error(&mut self, kind: DiagnosticKind, methods: &[MethodDescriptor], message: impl Into<String>) {
        self.emit(Severity::Error, kind, methods, message.into());
    }

    pub fn warning(&mut self, kind: DiagnosticKind, methods: &[MethodDescriptor], message: impl Into<String>) {
        self.emit(Severity::Warning, kind, methods, message.into());
    }

    fn emit(&mut self, severity: Severity, kind: DiagnosticKind, methods: &[MethodDescriptor], message: String) {
        let event =
            DiagnosticEvent::new(severity, kind, self.type_name().clone(), message).with_methods(methods);
        self.report(event);
    }

    pub fn diagnostics(&self) -> &[DiagnosticEvent] {
        &self.diagnostics
    }

    pub(crate) fn child(&mut self, request: ChildRequest) {
        self.children.push(request);
    }

    pub(crate) fn into_parts(self) -> (Vec<DiagnosticEvent>, Vec<ChildRequest>) {
        (self.diagnostics, self.children)
    }
}

/// Request to extract the value type of a bound property.
pub struct ChildRequest {
    pub owner: TypeName,
    pub property: String,
    pub value_type: TypeName,
    pub description: String,
    on_extracted: PropertyValidator,
}

impl ChildRequest {
    pub fn new(owner: &TypeName, property: &BoundProperty, on_extracted: PropertyValidator) -> Self {
        Self {
            owner: owner.clone(),
            property: property.name.clone(),
            value_type: property.value_type.clone(),
            description: property.description(owner),
            on_extracted,
        }
    }

    /// Hand the nested schema to the property's validator.
    pub fn on_extracted(self, schema: &ModelSchema) -> Vec<DiagnosticEvent> {
        (self.on_extracted)(schema)
    }
}

impl fmt::Debug for ChildRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildRequest")
            .field("owner", &self.owner)
            .field("property", &self.property)
            .field("value_type", &self.value_type)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

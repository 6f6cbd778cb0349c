//! Builders and a recording policy for tests.

use crate::config::TypeSettings;
use crate::extraction::{
    AccessorContext, ExtractionContext, HierarchyResolver, PropertyValidator, StructSchemaExtractor,
};
use crate::model::{
    BoundProperty, DiagnosticKind, MethodDescriptor, MethodSet, ModelSchema, StateManagement,
    TypeDescriptor, TypeHierarchy, TypeName,
};
use crate::policy::{SchemaPolicy, SetterVerdict};
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Abstract zero-parameter getter.
pub fn getter(declaring: &str, name: &str, returns: &str) -> MethodDescriptor {
    MethodDescriptor::new(name, declaring, returns)
}

/// Abstract one-parameter `void` setter.
pub fn setter(declaring: &str, name: &str, parameter: &str) -> MethodDescriptor {
    MethodDescriptor::new(name, declaring, "void").with_parameter(parameter)
}

/// Method set for an interface with no declared supertypes.
pub fn method_set(target: &str, methods: Vec<MethodDescriptor>) -> MethodSet {
    MethodSet::new(TypeDescriptor::interface(target), methods)
}

/// Extractor with default type settings over `hierarchy`.
pub fn extractor_with(policy: Arc<dyn SchemaPolicy>, hierarchy: TypeHierarchy) -> StructSchemaExtractor {
    StructSchemaExtractor::new(
        policy,
        Arc::new(HierarchyResolver::new(hierarchy)),
        TypeSettings::default(),
    )
}

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookCall {
    ValidateHierarchy(TypeName),
    ClassifyState(String),
    ValidateSetter { value_type: TypeName, setter: String },
    InvalidGetter { getter: String, message: String },
    OverriddenMethods(Vec<Vec<String>>),
    OverloadedMethods(Vec<String>),
    IncompleteCoverage(Vec<String>),
}

/// Policy that records every call, reports each hook as an error
/// diagnostic and returns a fixed setter verdict.
#[derive(Debug)]
pub struct RecordingPolicy {
    setter_verdict: SetterVerdict,
    calls: Mutex<Vec<HookCall>>,
}

impl Default for RecordingPolicy {
    fn default() -> Self {
        Self::new(SetterVerdict::Accept)
    }
}

impl RecordingPolicy {
    pub fn new(setter_verdict: SetterVerdict) -> Self {
        Self {
            setter_verdict,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Extractor over an empty hierarchy plus a handle on the policy.
    pub fn extractor() -> (StructSchemaExtractor, Arc<RecordingPolicy>) {
        Self::default().into_extractor(TypeHierarchy::new())
    }

    pub fn into_extractor(self, hierarchy: TypeHierarchy) -> (StructSchemaExtractor, Arc<RecordingPolicy>) {
        let policy = Arc::new(self);
        (extractor_with(policy.clone(), hierarchy), policy)
    }

    pub fn calls(&self) -> Vec<HookCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: HookCall) {
        self.calls.lock().push(call);
    }
}

fn signatures(methods: &[MethodDescriptor]) -> Vec<String> {
    methods.iter().map(ToString::to_string).collect()
}

impl SchemaPolicy for RecordingPolicy {
    fn validate_hierarchy(&self, _ctx: &mut ExtractionContext, target: &TypeDescriptor) {
        self.record(HookCall::ValidateHierarchy(target.name.clone()));
    }

    fn classify_state(&self, _ctx: &mut ExtractionContext, getter: &AccessorContext) -> StateManagement {
        self.record(HookCall::ClassifyState(getter.most_specific().to_string()));
        StateManagement::Managed
    }

    fn validate_setter(
        &self,
        ctx: &mut ExtractionContext,
        value_type: &TypeName,
        _getter: &AccessorContext,
        setter: &AccessorContext,
    ) -> SetterVerdict {
        self.record(HookCall::ValidateSetter {
            value_type: value_type.clone(),
            setter: setter.most_specific().to_string(),
        });
        if self.setter_verdict == SetterVerdict::Reject {
            ctx.error(
                DiagnosticKind::InvalidSetter,
                setter.declaring_methods(),
                "setter rejected",
            );
        }
        self.setter_verdict
    }

    fn on_invalid_getter(&self, ctx: &mut ExtractionContext, getter: &MethodDescriptor, message: &str) {
        self.record(HookCall::InvalidGetter {
            getter: getter.to_string(),
            message: message.to_string(),
        });
        ctx.error(DiagnosticKind::InvalidGetter, std::slice::from_ref(getter), message);
    }

    fn on_overridden_methods(&self, ctx: &mut ExtractionContext, chains: &[Vec<MethodDescriptor>]) {
        self.record(HookCall::OverriddenMethods(
            chains.iter().map(|c| signatures(c)).collect(),
        ));
        ctx.error(
            DiagnosticKind::OverriddenMethods,
            &chains.concat(),
            "overridden methods",
        );
    }

    fn on_overloaded_methods(&self, ctx: &mut ExtractionContext, overloads: &[MethodDescriptor]) {
        self.record(HookCall::OverloadedMethods(signatures(overloads)));
        ctx.error(DiagnosticKind::OverloadedMethods, overloads, "overloaded methods");
    }

    fn on_incomplete_coverage(
        &self,
        ctx: &mut ExtractionContext,
        _all: &[MethodDescriptor],
        unhandled: &[MethodDescriptor],
    ) -> BTreeSet<MethodDescriptor> {
        self.record(HookCall::IncompleteCoverage(signatures(unhandled)));
        ctx.error(DiagnosticKind::IncompleteCoverage, unhandled, "unhandled methods");
        BTreeSet::new()
    }

    fn property_validator(&self, _owner: &TypeName, _property: &BoundProperty) -> PropertyValidator {
        Box::new(|_: &ModelSchema| Vec::new())
    }
}

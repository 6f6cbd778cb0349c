//! Policy for managed struct types: interfaces or abstract classes whose
//! abstract properties are implemented by the model layer.

use super::{SchemaPolicy, SetterVerdict};
use crate::config::TypeSettings;
use crate::extraction::{AccessorContext, ExtractionContext, PropertyValidator};
use crate::model::{
    BoundProperty, DiagnosticEvent, DiagnosticKind, MethodDescriptor, ModelSchema,
    StateManagement, TypeDescriptor, TypeKind, TypeName,
};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ManagedStructPolicy {
    types: TypeSettings,
}

impl ManagedStructPolicy {
    pub fn new(types: TypeSettings) -> Self {
        Self { types }
    }

    fn setter_problems(
        &self,
        value_type: &TypeName,
        getter: &AccessorContext,
        setter: &MethodDescriptor,
    ) -> Vec<String> {
        let mut problems = Vec::new();
        if setter.arity() != 1 {
            problems.push("setter method must declare exactly one parameter".to_string());
        }
        if !self.types.is_void(&setter.return_type) {
            problems.push(format!(
                "setter method must have {} return type (found: {})",
                self.types.void, setter.return_type
            ));
        }
        if let Some(param) = setter.parameter_types.first() {
            if param != value_type {
                problems.push(format!(
                    "setter method param must be of exactly the same type as the getter returns (expected: {}, found: {})",
                    value_type, param
                ));
            }
        }
        if !getter.most_specific().is_concrete() && setter.is_concrete() {
            problems.push("setter of a managed property cannot have an implementation".to_string());
        }
        problems
    }
}

impl SchemaPolicy for ManagedStructPolicy {
    fn validate_hierarchy(&self, ctx: &mut ExtractionContext, target: &TypeDescriptor) {
        if target.kind == TypeKind::Class {
            ctx.error(
                DiagnosticKind::InvalidHierarchy,
                &[],
                format!(
                    "type {} must be an interface or an abstract class, not a {}",
                    target.name, target.kind
                ),
            );
        }
    }

    fn classify_state(&self, _ctx: &mut ExtractionContext, getter: &AccessorContext) -> StateManagement {
        if getter.most_specific().is_concrete() {
            StateManagement::Unmanaged
        } else {
            StateManagement::Managed
        }
    }

    fn validate_setter(
        &self,
        ctx: &mut ExtractionContext,
        value_type: &TypeName,
        getter: &AccessorContext,
        setter: &AccessorContext,
    ) -> SetterVerdict {
        let declaration = setter.most_specific();
        let problems = self.setter_problems(value_type, getter, declaration);
        if problems.is_empty() {
            return SetterVerdict::Accept;
        }
        for problem in problems {
            ctx.error(
                DiagnosticKind::InvalidSetter,
                std::slice::from_ref(declaration),
                format!("invalid property accessor {}: {}", declaration.signature(), problem),
            );
        }
        SetterVerdict::Reject
    }

    fn on_overridden_methods(&self, ctx: &mut ExtractionContext, chains: &[Vec<MethodDescriptor>]) {
        for chain in chains {
            if chain.iter().all(MethodDescriptor::is_concrete) {
                debug!(method = %chain[0].signature(), "accepted overridden behaviour method");
                continue;
            }
            ctx.error(
                DiagnosticKind::OverriddenMethods,
                chain,
                format!(
                    "method {} is overridden but has no implementation",
                    chain[0].signature()
                ),
            );
        }
    }

    fn on_incomplete_coverage(
        &self,
        ctx: &mut ExtractionContext,
        _all: &[MethodDescriptor],
        unhandled: &[MethodDescriptor],
    ) -> BTreeSet<MethodDescriptor> {
        let (excused, invalid): (Vec<_>, Vec<_>) =
            unhandled.iter().cloned().partition(MethodDescriptor::is_concrete);
        if !invalid.is_empty() {
            let signatures: Vec<String> = invalid.iter().map(ToString::to_string).collect();
            ctx.error(
                DiagnosticKind::IncompleteCoverage,
                &invalid,
                format!(
                    "only paired getter/setter methods are supported (invalid methods: {})",
                    signatures.join(", ")
                ),
            );
        }
        excused.into_iter().collect()
    }

    fn property_validator(&self, owner: &TypeName, property: &BoundProperty) -> PropertyValidator {
        let owner = owner.clone();
        let name = property.name.clone();
        Box::new(move |schema: &ModelSchema| match schema {
            ModelSchema::Unknown { type_name } => vec![DiagnosticEvent::error(
                DiagnosticKind::UnsupportedPropertyType,
                owner,
                format!(
                    "type {} cannot be used for property '{}'; mark the getter unmanaged or declare the type",
                    type_name, name
                ),
            )],
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::HierarchyResolver;
    use crate::model::Marker;

    fn ctx() -> ExtractionContext {
        ExtractionContext::new(TypeDescriptor::interface("Person"))
    }

    fn context_of(methods: Vec<MethodDescriptor>) -> AccessorContext {
        AccessorContext::new(methods, &HierarchyResolver::default()).unwrap()
    }

    #[test]
    fn test_concrete_class_is_rejected() {
        let mut ctx = ctx();
        let target = TypeDescriptor::interface("Person").with_kind(TypeKind::Class);
        ManagedStructPolicy::default().validate_hierarchy(&mut ctx, &target);
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].kind, DiagnosticKind::InvalidHierarchy);
    }

    #[test]
    fn test_state_follows_implementation_marker() {
        let policy = ManagedStructPolicy::default();
        let abstract_getter = context_of(vec![MethodDescriptor::new("getName", "Person", "String")]);
        let concrete_getter = context_of(vec![
            MethodDescriptor::new("getName", "Person", "String").with_marker(Marker::Concrete)
        ]);
        assert_eq!(policy.classify_state(&mut ctx(), &abstract_getter), StateManagement::Managed);
        assert_eq!(policy.classify_state(&mut ctx(), &concrete_getter), StateManagement::Unmanaged);
    }

    #[test]
    fn test_setter_type_mismatch_is_rejected() {
        let policy = ManagedStructPolicy::default();
        let mut ctx = ctx();
        let getter = context_of(vec![MethodDescriptor::new("getAge", "Person", "int")]);
        let setter = context_of(vec![
            MethodDescriptor::new("setAge", "Person", "void").with_parameter("long")
        ]);

        let verdict = policy.validate_setter(&mut ctx, &"int".into(), &getter, &setter);

        assert_eq!(verdict, SetterVerdict::Reject);
        assert_eq!(ctx.diagnostics().len(), 1);
        assert!(ctx.diagnostics()[0].message.contains("expected: int, found: long"));
    }

    #[test]
    fn test_matching_setter_is_accepted() {
        let policy = ManagedStructPolicy::default();
        let mut ctx = ctx();
        let getter = context_of(vec![MethodDescriptor::new("getAge", "Person", "int")]);
        let setter = context_of(vec![
            MethodDescriptor::new("setAge", "Person", "void").with_parameter("int")
        ]);
        assert_eq!(
            policy.validate_setter(&mut ctx, &"int".into(), &getter, &setter),
            SetterVerdict::Accept
        );
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_concrete_leftovers_are_excused() {
        let policy = ManagedStructPolicy::default();
        let mut ctx = ctx();
        let helper = MethodDescriptor::new("describe", "Person", "String").with_marker(Marker::Concrete);
        let stray = MethodDescriptor::new("compute", "Person", "int");
        let all = vec![helper.clone(), stray.clone()];

        let excused = policy.on_incomplete_coverage(&mut ctx, &all, &all);

        assert_eq!(excused, BTreeSet::from([helper]));
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].methods, vec![stray]);
    }

    #[test]
    fn test_validator_reports_unknown_value_type() {
        let policy = ManagedStructPolicy::default();
        let property = BoundProperty {
            name: "address".into(),
            value_type: "Address".into(),
            state: StateManagement::Managed,
            declaring_types: [TypeName::from("Person")].into_iter().collect(),
            getter_bindings: vec![MethodDescriptor::new("getAddress", "Person", "Address")],
            setter_binding: None,
            is_opaque: false,
        };

        let validator = policy.property_validator(&"Person".into(), &property);
        let events = validator(&ModelSchema::Unknown {
            type_name: "Address".into(),
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, DiagnosticKind::UnsupportedPropertyType);
        let validator = policy.property_validator(&"Person".into(), &property);
        assert!(validator(&ModelSchema::Value { type_name: "Address".into() }).is_empty());
    }
}

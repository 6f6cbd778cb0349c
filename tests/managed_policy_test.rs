mod common;

use common::concrete;
use modelschema::assert_has_diagnostic;
use modelschema::testkit::{extractor_with, getter, method_set, setter};
use modelschema::{
    DiagnosticKind, ManagedStructPolicy, MethodDescriptor, MethodSet, StateManagement,
    StructSchemaExtractor, TypeDescriptor, TypeHierarchy, TypeKind,
};
use std::sync::Arc;

fn managed(hierarchy: TypeHierarchy) -> StructSchemaExtractor {
    extractor_with(Arc::new(ManagedStructPolicy::default()), hierarchy)
}

#[test]
fn test_plain_class_is_rejected() {
    let set = MethodSet::new(
        TypeDescriptor::interface("Impl").with_kind(TypeKind::Class),
        vec![getter("Impl", "getName", "String")],
    );

    let result = managed(TypeHierarchy::new()).extract(&set);

    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::InvalidHierarchy,
        "must be an interface or an abstract class"
    );
}

#[test]
fn test_abstract_class_is_accepted() {
    let set = MethodSet::new(
        TypeDescriptor::interface("Base").with_kind(TypeKind::AbstractClass),
        vec![getter("Base", "getName", "String")],
    );

    let result = managed(TypeHierarchy::new()).extract(&set);

    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_malformed_getter_message_names_the_accessor() {
    let set = method_set("T", vec![getter("T", "getx", "int")]);

    let result = managed(TypeHierarchy::new()).extract(&set);

    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::InvalidGetter,
        "invalid property accessor getx(): the 4th character"
    );
}

#[test]
fn test_overloaded_getter_is_an_error() {
    let set = method_set(
        "T",
        vec![
            getter("T", "getValue", "String"),
            getter("T", "getValue", "String").with_parameter("int"),
        ],
    );

    let result = managed(TypeHierarchy::new()).extract(&set);

    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::OverloadedMethods,
        "overloaded methods are not supported: getValue(), getValue(int)"
    );
}

#[test]
fn test_setter_type_must_match_getter() {
    let set = method_set(
        "T",
        vec![getter("T", "getName", "String"), setter("T", "setName", "int")],
    );

    let result = managed(TypeHierarchy::new()).extract(&set);

    let property = result.property("name").expect("getter-only property survives");
    assert!(!property.is_writable());
    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::InvalidSetter,
        "(expected: String, found: int)"
    );
    assert!(result.unhandled.is_empty());
}

#[test]
fn test_setter_must_return_void() {
    let set = method_set(
        "T",
        vec![
            getter("T", "getName", "String"),
            MethodDescriptor::new("setName", "T", "String").with_parameter("String"),
        ],
    );

    let result = managed(TypeHierarchy::new()).extract(&set);

    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::InvalidSetter,
        "setter method must have void return type (found: String)"
    );
}

#[test]
fn test_managed_property_setter_cannot_be_concrete() {
    let set = method_set(
        "T",
        vec![
            getter("T", "getName", "String"),
            concrete(setter("T", "setName", "String")),
        ],
    );

    let result = managed(TypeHierarchy::new()).extract(&set);

    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::InvalidSetter,
        "setter of a managed property cannot have an implementation"
    );
}

#[test]
fn test_concrete_getter_is_unmanaged_state() {
    let set = method_set(
        "T",
        vec![
            concrete(getter("T", "getName", "String")),
            concrete(setter("T", "setName", "String")),
        ],
    );

    let result = managed(TypeHierarchy::new()).extract(&set);

    let property = result.property("name").expect("name is bound");
    assert_eq!(property.state, StateManagement::Unmanaged);
    assert!(property.is_writable());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_concrete_override_chain_is_accepted() {
    let set = method_set(
        "Sub",
        vec![
            concrete(MethodDescriptor::new("build", "Sub", "void")),
            concrete(MethodDescriptor::new("build", "Base", "void")),
        ],
    );

    let result = managed(TypeHierarchy::new().with("Sub", "Base")).extract(&set);

    assert!(result.diagnostics.is_empty());
    assert_eq!(result.handled.len(), 2);
}

#[test]
fn test_abstract_override_chain_is_an_error() {
    let set = method_set(
        "Sub",
        vec![
            MethodDescriptor::new("build", "Sub", "void"),
            MethodDescriptor::new("build", "Base", "void"),
        ],
    );

    let result = managed(TypeHierarchy::new().with("Sub", "Base")).extract(&set);

    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::OverriddenMethods,
        "method build() is overridden but has no implementation"
    );
}

#[test]
fn test_concrete_helpers_are_excused_abstract_ones_are_not() {
    let describe = concrete(MethodDescriptor::new("describe", "T", "String"));
    let compute = MethodDescriptor::new("compute", "T", "int");
    let set = method_set("T", vec![describe.clone(), compute.clone()]);

    let result = managed(TypeHierarchy::new()).extract(&set);

    assert!(result.handled.contains(&describe));
    assert_eq!(result.unhandled, vec![compute]);
    assert_has_diagnostic!(
        result.diagnostics,
        DiagnosticKind::IncompleteCoverage,
        "only paired getter/setter methods are supported (invalid methods: T.compute())"
    );
}

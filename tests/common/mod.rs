// Test utility module for modelschema integration tests
#![allow(dead_code)]

use modelschema::testkit::{getter, setter};
use modelschema::{Marker, MethodDescriptor, TypeCatalog};
use std::path::PathBuf;

/// Catalog used by the driver and CLI tests: a person with a managed
/// address, a concrete display name and an opaque handle.
pub const PEOPLE_CATALOG: &str = indoc::indoc! {r#"
    [[type]]
    name = "Named"

    [[type.method]]
    name = "getName"
    returns = "String"

    [[type]]
    name = "Person"
    supertypes = ["Named"]

    [[type.method]]
    name = "getName"
    returns = "String"

    [[type.method]]
    name = "setName"
    returns = "void"
    parameters = ["String"]

    [[type.method]]
    name = "getAddress"
    returns = "Address"

    [[type.method]]
    name = "isActive"
    returns = "boolean"

    [[type.method]]
    name = "getDisplayName"
    returns = "String"
    markers = ["concrete"]

    [[type.method]]
    name = "getHandle"
    returns = "Handle"
    markers = ["unmanaged"]

    [[type]]
    name = "Address"

    [[type.method]]
    name = "getStreet"
    returns = "String"

    [[type.method]]
    name = "getOwner"
    returns = "Person"
"#};

pub fn people_catalog() -> TypeCatalog {
    TypeCatalog::from_toml(PEOPLE_CATALOG).expect("people catalog parses")
}

// Helper to create temporary test files
pub fn create_test_file(content: &str, file_name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(file_name);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}

pub fn concrete(method: MethodDescriptor) -> MethodDescriptor {
    method.with_marker(Marker::Concrete)
}

/// `getX`/`setX` pair declared on `declaring`.
pub fn property_pair(declaring: &str, residue: &str, value_type: &str) -> Vec<MethodDescriptor> {
    vec![
        getter(declaring, &format!("get{}", residue), value_type),
        setter(declaring, &format!("set{}", residue), value_type),
    ]
}

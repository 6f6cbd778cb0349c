use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{DiagnosticThreshold, TypeName};

/// Root configuration structure for modelschema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Type vocabulary used when classifying accessors
    #[serde(default)]
    pub types: TypeSettings,

    /// Diagnostic handling
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Names of the built-in types the extraction rules depend on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSettings {
    /// Types accepted as boolean-valued (`is` getters, boolean duals)
    #[serde(default = "default_boolean_types")]
    pub boolean: BTreeSet<TypeName>,

    /// Return type of a setter
    #[serde(default = "default_void_type")]
    pub void: TypeName,

    /// Leaf types that are never extracted as structs
    #[serde(default = "default_scalar_types")]
    pub scalars: BTreeSet<TypeName>,
}

impl TypeSettings {
    pub fn is_boolean(&self, name: &TypeName) -> bool {
        self.boolean.contains(name)
    }

    pub fn is_void(&self, name: &TypeName) -> bool {
        &self.void == name
    }

    pub fn is_scalar(&self, name: &TypeName) -> bool {
        self.scalars.contains(name) || self.is_boolean(name)
    }
}

impl Default for TypeSettings {
    fn default() -> Self {
        Self {
            boolean: default_boolean_types(),
            void: default_void_type(),
            scalars: default_scalar_types(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Lowest severity that fails an extraction
    #[serde(default)]
    pub fail_on: DiagnosticThreshold,
}

pub fn default_boolean_types() -> BTreeSet<TypeName> {
    [TypeName::from("boolean")].into_iter().collect()
}

pub fn default_void_type() -> TypeName {
    TypeName::from("void")
}

pub fn default_scalar_types() -> BTreeSet<TypeName> {
    [
        "String",
        "boolean",
        "Boolean",
        "char",
        "Character",
        "byte",
        "Byte",
        "short",
        "Short",
        "int",
        "Integer",
        "long",
        "Long",
        "float",
        "Float",
        "double",
        "Double",
        "BigInteger",
        "BigDecimal",
        "File",
    ]
    .into_iter()
    .map(TypeName::from)
    .collect()
}

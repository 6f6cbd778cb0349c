//! Extracted schemas.

use super::descriptor::TypeName;
use super::property::BoundProperty;
use serde::{Deserialize, Serialize};

/// Cross-cutting behaviour attached to a struct schema by an aspect extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaAspect {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructSchema {
    pub type_name: TypeName,
    pub properties: Vec<BoundProperty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aspects: Vec<SchemaAspect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "snake_case")]
pub enum ModelSchema {
    /// Scalar leaf type; not extracted further.
    Value { type_name: TypeName },
    Struct(StructSchema),
    /// The method set provider has no description of the type.
    Unknown { type_name: TypeName },
}

impl ModelSchema {
    pub fn type_name(&self) -> &TypeName {
        match self {
            Self::Value { type_name } | Self::Unknown { type_name } => type_name,
            Self::Struct(schema) => &schema.type_name,
        }
    }

    pub fn as_struct(&self) -> Option<&StructSchema> {
        match self {
            Self::Struct(schema) => Some(schema),
            _ => None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&BoundProperty> {
        self.as_struct()?.properties.iter().find(|p| p.name == name)
    }
}

//! Bound property descriptors.

use super::descriptor::{MethodDescriptor, TypeName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a property's value is held, as decided by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateManagement {
    /// State is owned and generated by the model layer.
    Managed,
    /// State is provided by a hand-written implementation.
    Unmanaged,
}

/// A validated, name-unique property of an extracted type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundProperty {
    pub name: String,
    pub value_type: TypeName,
    pub state: StateManagement,
    pub declaring_types: BTreeSet<TypeName>,
    /// Most specific getter first; one entry per accessor name. Never empty.
    pub getter_bindings: Vec<MethodDescriptor>,
    pub setter_binding: Option<MethodDescriptor>,
    pub is_opaque: bool,
}

impl BoundProperty {
    pub fn primary_getter(&self) -> &MethodDescriptor {
        &self.getter_bindings[0]
    }

    pub fn is_writable(&self) -> bool {
        self.setter_binding.is_some()
    }

    /// Human-readable path used when recursing into the value type.
    ///
    /// A property declared only by `current` reads `property 'name'`;
    /// anything else lists the declaring types in order.
    pub fn description(&self, current: &TypeName) -> String {
        if self.declaring_types.len() == 1 && self.declaring_types.contains(current) {
            format!("property '{}'", self.name)
        } else {
            let declared_by: Vec<&str> = self.declaring_types.iter().map(TypeName::as_str).collect();
            format!(
                "property '{}' declared by {}",
                self.name,
                declared_by.join(", ")
            )
        }
    }
}

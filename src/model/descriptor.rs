//! Method and type descriptors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Display name of a declared type (`String`, `boolean`, `com.acme.Person`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Semantic markers attached to a method declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Opaque-type marker: the property's value type is not extracted.
    Unmanaged,
    /// The declaration carries an implementation (it is not abstract).
    Concrete,
}

/// One method as seen on a type, own or inherited.
///
/// Ordering and equality cover every field, so two declarations of the same
/// signature on different types are distinct descriptors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub declaring_type: TypeName,
    pub return_type: TypeName,
    #[serde(default)]
    pub parameter_types: Vec<TypeName>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub markers: BTreeSet<Marker>,
}

impl MethodDescriptor {
    pub fn new(
        name: impl Into<String>,
        declaring_type: impl Into<TypeName>,
        return_type: impl Into<TypeName>,
    ) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            return_type: return_type.into(),
            parameter_types: Vec::new(),
            markers: BTreeSet::new(),
        }
    }

    pub fn with_parameter(mut self, parameter_type: impl Into<TypeName>) -> Self {
        self.parameter_types.push(parameter_type.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.insert(marker);
        self
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    pub fn is_concrete(&self) -> bool {
        self.has_marker(Marker::Concrete)
    }

    /// Same name and parameter list, regardless of declaring or return type.
    pub fn same_signature(&self, other: &MethodDescriptor) -> bool {
        self.name == other.name && self.parameter_types == other.parameter_types
    }

    /// `name(A, B)`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.parameter_types.iter().map(TypeName::as_str).collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.signature())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Interface,
    AbstractClass,
    Class,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface => write!(f, "interface"),
            Self::AbstractClass => write!(f, "abstract class"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// The type being extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: TypeName,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub supertypes: Vec<TypeName>,
}

impl TypeDescriptor {
    pub fn interface(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Interface,
            supertypes: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_supertype(mut self, supertype: impl Into<TypeName>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }
}

/// Every candidate method visible on a type, own and inherited, most-derived
/// declarations first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet {
    pub target: TypeDescriptor,
    pub methods: Vec<MethodDescriptor>,
}

impl MethodSet {
    pub fn new(target: TypeDescriptor, methods: Vec<MethodDescriptor>) -> Self {
        Self { target, methods }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.target.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_lists_parameter_types() {
        let method = MethodDescriptor::new("setName", "Person", "void").with_parameter("String");
        assert_eq!(method.signature(), "setName(String)");
        assert_eq!(method.to_string(), "Person.setName(String)");
    }

    #[test]
    fn test_same_signature_ignores_declaring_and_return_type() {
        let base = MethodDescriptor::new("getValue", "Base", "Object");
        let derived = MethodDescriptor::new("getValue", "Derived", "String");
        let overload = MethodDescriptor::new("getValue", "Base", "Object").with_parameter("int");

        assert!(base.same_signature(&derived));
        assert!(!base.same_signature(&overload));
        assert_ne!(base, derived);
    }

    #[test]
    fn test_markers_deserialize_in_snake_case() {
        let method: MethodDescriptor = serde_json::from_str(
            r#"{"name":"getFile","declaring_type":"T","return_type":"File","markers":["unmanaged"]}"#,
        )
        .unwrap();
        assert!(method.has_marker(Marker::Unmanaged));
        assert!(!method.is_concrete());
        assert_eq!(method.arity(), 0);
    }
}

//! In-memory catalog of type declarations, loaded from JSON or TOML.
//!
//! ```toml
//! [[type]]
//! name = "Person"
//! supertypes = ["Named"]
//!
//! [[type.method]]
//! name = "getAge"
//! returns = "int"
//! ```

use super::MethodSetProvider;
use crate::errors::SchemaError;
use crate::model::{
    Marker, MethodDescriptor, MethodSet, TypeDescriptor, TypeHierarchy, TypeKind, TypeName,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub returns: TypeName,
    #[serde(default)]
    pub parameters: Vec<TypeName>,
    #[serde(default)]
    pub markers: BTreeSet<Marker>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: TypeName,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub supertypes: Vec<TypeName>,
    #[serde(default, rename = "method", alias = "methods")]
    pub methods: Vec<MethodDeclaration>,
}

impl TypeDeclaration {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name.clone(),
            kind: self.kind,
            supertypes: self.supertypes.clone(),
        }
    }

    fn method_descriptors(&self) -> impl Iterator<Item = MethodDescriptor> + '_ {
        self.methods.iter().map(|m| MethodDescriptor {
            name: m.name.clone(),
            declaring_type: self.name.clone(),
            return_type: m.returns.clone(),
            parameter_types: m.parameters.clone(),
            markers: m.markers.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "type", alias = "types")]
    types: Vec<TypeDeclaration>,
}

#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: BTreeMap<TypeName, TypeDeclaration>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_declarations(
        declarations: impl IntoIterator<Item = TypeDeclaration>,
    ) -> Result<Self, SchemaError> {
        let mut catalog = Self::new();
        for declaration in declarations {
            catalog.insert(declaration)?;
        }
        Ok(catalog)
    }

    pub fn from_json(contents: &str) -> Result<Self, SchemaError> {
        let file: CatalogFile = serde_json::from_str(contents)?;
        Self::from_declarations(file.types)
    }

    pub fn from_toml(contents: &str) -> Result<Self, SchemaError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::from_declarations(file.types)
    }

    /// Load by extension: `.toml` is TOML, anything else JSON.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let contents = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_json(&contents),
        }
    }

    pub fn insert(&mut self, declaration: TypeDeclaration) -> Result<(), SchemaError> {
        if self.types.contains_key(&declaration.name) {
            return Err(SchemaError::catalog(format!(
                "type '{}' is declared more than once",
                declaration.name
            )));
        }
        self.types.insert(declaration.name.clone(), declaration);
        Ok(())
    }

    pub fn contains(&self, name: &TypeName) -> bool {
        self.types.contains_key(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &TypeName> {
        self.types.keys()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MethodSetProvider for TypeCatalog {
    fn method_set(&self, name: &TypeName) -> Option<MethodSet> {
        let target = self.types.get(name)?;

        let mut methods: Vec<MethodDescriptor> = Vec::new();
        let mut visited: HashSet<&TypeName> = HashSet::new();
        let mut queue: VecDeque<&TypeName> = VecDeque::from([name]);
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            let Some(declaration) = self.types.get(current) else {
                warn!(type_name = %name, supertype = %current, "supertype is not declared in the catalog");
                continue;
            };
            for method in declaration.method_descriptors() {
                if !methods.contains(&method) {
                    methods.push(method);
                }
            }
            queue.extend(declaration.supertypes.iter());
        }

        Some(MethodSet::new(target.descriptor(), methods))
    }

    fn hierarchy(&self) -> TypeHierarchy {
        let mut hierarchy = TypeHierarchy::new();
        for declaration in self.types.values() {
            hierarchy.declare(declaration.name.clone(), declaration.supertypes.iter().cloned());
        }
        hierarchy
    }
}

//! Worklist driver: extracts a root type and, transitively, the value types
//! of its properties.
//!
//! Each type is extracted at most once per store, which also terminates
//! cyclic property graphs. Child requests are completed in FIFO order, so
//! diagnostics follow the deterministic order of the extractions.

use crate::errors::SchemaError;
use crate::extraction::{ChildRequest, StructSchemaExtractor};
use crate::model::{DiagnosticEvent, DiagnosticThreshold, ModelSchema, TypeName};
use crate::provider::MethodSetProvider;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, info_span};

/// Result of extracting one root type and everything reachable from it.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaReport {
    pub root: TypeName,
    pub schemas: BTreeMap<TypeName, ModelSchema>,
    pub diagnostics: Vec<DiagnosticEvent>,
}

impl SchemaReport {
    pub fn root_schema(&self) -> Option<&ModelSchema> {
        self.schemas.get(&self.root)
    }

    pub fn fails(&self, threshold: DiagnosticThreshold) -> bool {
        threshold.any_exceeded(&self.diagnostics)
    }
}

pub struct SchemaStore<'a, P: MethodSetProvider + ?Sized> {
    provider: &'a P,
    extractor: &'a StructSchemaExtractor,
    schemas: BTreeMap<TypeName, ModelSchema>,
    diagnostics: Vec<DiagnosticEvent>,
}

impl<'a, P: MethodSetProvider + ?Sized> SchemaStore<'a, P> {
    pub fn new(provider: &'a P, extractor: &'a StructSchemaExtractor) -> Self {
        Self {
            provider,
            extractor,
            schemas: BTreeMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Extract `root` and every type reachable through non-opaque properties.
    pub fn extract(&mut self, root: &TypeName) -> Result<&ModelSchema, SchemaError> {
        if !self.extractor.types().is_scalar(root) && self.provider.method_set(root).is_none() {
            return Err(SchemaError::UnknownType(root.clone()));
        }

        let mut worklist: VecDeque<(TypeName, Option<ChildRequest>)> =
            VecDeque::from([(root.clone(), None)]);
        while let Some((name, request)) = worklist.pop_front() {
            if !self.schemas.contains_key(&name) {
                let (schema, children) = self.extract_one(&name);
                self.schemas.insert(name.clone(), schema);
                worklist.extend(children.into_iter().map(|c| (c.value_type.clone(), Some(c))));
            }
            if let (Some(request), Some(schema)) = (request, self.schemas.get(&name)) {
                debug!(owner = %request.owner, description = %request.description, "linking property schema");
                self.diagnostics.extend(request.on_extracted(schema));
            }
        }

        self.schemas
            .get(root)
            .ok_or_else(|| SchemaError::UnknownType(root.clone()))
    }

    fn extract_one(&mut self, name: &TypeName) -> (ModelSchema, Vec<ChildRequest>) {
        if self.extractor.types().is_scalar(name) {
            return (ModelSchema::Value { type_name: name.clone() }, Vec::new());
        }
        match self.provider.method_set(name) {
            Some(method_set) => {
                let result = self.extractor.extract(&method_set);
                self.diagnostics.extend(result.diagnostics);
                (result.schema, result.children)
            }
            None => (ModelSchema::Unknown { type_name: name.clone() }, Vec::new()),
        }
    }

    pub fn schema(&self, name: &TypeName) -> Option<&ModelSchema> {
        self.schemas.get(name)
    }

    /// Schema of the value type of `owner.property`, once extracted.
    pub fn property_schema(&self, owner: &TypeName, property: &str) -> Option<&ModelSchema> {
        let property = self.schemas.get(owner)?.property(property)?;
        self.schemas.get(&property.value_type)
    }

    pub fn diagnostics(&self) -> &[DiagnosticEvent] {
        &self.diagnostics
    }

    pub fn into_report(self, root: TypeName) -> SchemaReport {
        SchemaReport {
            root,
            schemas: self.schemas,
            diagnostics: self.diagnostics,
        }
    }
}

/// Extract independent roots in parallel, one store per root.
pub fn extract_batch<P: MethodSetProvider + ?Sized>(
    provider: &P,
    extractor: &StructSchemaExtractor,
    roots: &[TypeName],
) -> Vec<Result<SchemaReport, SchemaError>> {
    roots
        .par_iter()
        .map(|root| {
            let _span = info_span!("extract_root", root = %root).entered();
            let mut store = SchemaStore::new(provider, extractor);
            store.extract(root)?;
            Ok(store.into_report(root.clone()))
        })
        .collect()
}

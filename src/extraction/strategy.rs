//! Schema extraction for one struct-like type.

use crate::config::TypeSettings;
use crate::extraction::accessor::AccessorGroups;
use crate::extraction::binder::PropertyBinder;
use crate::extraction::completeness::{check_completeness, Coverage};
use crate::extraction::conflicts::ConflictResolver;
use crate::extraction::context::{ChildRequest, ExtractionContext};
use crate::model::{
    BoundProperty, DiagnosticEvent, DiagnosticThreshold, MethodDescriptor, MethodSet, ModelSchema,
};
use crate::observability::{set_current_type, set_phase, ExtractionPhase};
use crate::policy::{AspectExtractor, NoAspects, SchemaPolicy};
use std::sync::Arc;
use tracing::{debug, debug_span};

/// Everything one extraction call produces.
#[derive(Debug)]
pub struct ExtractionResult {
    pub schema: ModelSchema,
    pub properties: Vec<BoundProperty>,
    pub diagnostics: Vec<DiagnosticEvent>,
    /// One request per non-opaque property, in property order.
    pub children: Vec<ChildRequest>,
    /// Bound or excused methods.
    pub handled: Vec<MethodDescriptor>,
    /// Methods flagged by the completeness check.
    pub unhandled: Vec<MethodDescriptor>,
}

impl ExtractionResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticEvent::is_error)
    }

    pub fn fails(&self, threshold: DiagnosticThreshold) -> bool {
        threshold.any_exceeded(&self.diagnostics)
    }

    pub fn property(&self, name: &str) -> Option<&BoundProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Extracts property schemas from method sets. Holds no per-call state, so
/// one instance can serve several threads.
#[derive(Clone)]
pub struct StructSchemaExtractor {
    policy: Arc<dyn SchemaPolicy>,
    resolver: Arc<dyn ConflictResolver>,
    aspects: Arc<dyn AspectExtractor>,
    types: TypeSettings,
}

impl StructSchemaExtractor {
    pub fn new(
        policy: Arc<dyn SchemaPolicy>,
        resolver: Arc<dyn ConflictResolver>,
        types: TypeSettings,
    ) -> Self {
        Self {
            policy,
            resolver,
            aspects: Arc::new(NoAspects),
            types,
        }
    }

    pub fn with_aspects(mut self, aspects: Arc<dyn AspectExtractor>) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn types(&self) -> &TypeSettings {
        &self.types
    }

    pub fn extract(&self, method_set: &MethodSet) -> ExtractionResult {
        let type_name = method_set.type_name().clone();
        let _span = debug_span!("extract", type_name = %type_name).entered();
        let _type_guard = set_current_type(type_name.as_str());
        let mut ctx = ExtractionContext::new(method_set.target.clone());

        {
            let _phase = set_phase(ExtractionPhase::HierarchyValidation);
            self.policy.validate_hierarchy(&mut ctx, &method_set.target);
        }

        let (properties, handled) = {
            let _phase = set_phase(ExtractionPhase::PropertyBinding);
            let groups = AccessorGroups::from_methods(&method_set.methods);
            debug!(groups = groups.len(), methods = method_set.methods.len(), "grouped methods");
            PropertyBinder::new(
                self.policy.as_ref(),
                self.resolver.as_ref(),
                &self.types,
                &groups,
            )
            .bind(&mut ctx)
        };

        let Coverage { handled, unhandled } = {
            let _phase = set_phase(ExtractionPhase::CompletenessCheck);
            check_completeness(&mut ctx, self.policy.as_ref(), &method_set.methods, handled)
        };

        let _phase = set_phase(ExtractionPhase::SchemaAssembly);
        let aspects = self.aspects.extract(&mut ctx, &properties);
        let schema = self.policy.build_schema(&ctx, properties.clone(), aspects);

        for property in properties.iter().filter(|p| !p.is_opaque) {
            let validator = self.policy.property_validator(&type_name, property);
            ctx.child(ChildRequest::new(&type_name, property, validator));
        }

        let (diagnostics, children) = ctx.into_parts();
        debug!(
            properties = properties.len(),
            diagnostics = diagnostics.len(),
            "extracted schema"
        );

        ExtractionResult {
            schema,
            properties,
            diagnostics,
            children,
            handled,
            unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SchemaAspect, TypeHierarchy};
    use crate::policy::ManagedStructPolicy;
    use crate::testkit::{extractor_with, getter, method_set, setter};

    struct WritableAspect;

    impl AspectExtractor for WritableAspect {
        fn extract(&self, _ctx: &mut ExtractionContext, properties: &[BoundProperty]) -> Vec<SchemaAspect> {
            vec![SchemaAspect {
                name: "writable".into(),
                properties: properties
                    .iter()
                    .filter(|p| p.is_writable())
                    .map(|p| p.name.clone())
                    .collect(),
            }]
        }
    }

    #[test]
    fn test_aspects_are_attached_to_struct_schema() {
        let extractor = extractor_with(Arc::new(ManagedStructPolicy::default()), TypeHierarchy::new())
            .with_aspects(Arc::new(WritableAspect));
        let set = method_set(
            "Person",
            vec![
                getter("Person", "getName", "String"),
                setter("Person", "setName", "String"),
                getter("Person", "getAge", "int"),
            ],
        );

        let result = extractor.extract(&set);

        let schema = result.schema.as_struct().unwrap();
        assert_eq!(schema.aspects.len(), 1);
        assert_eq!(schema.aspects[0].properties, vec!["name".to_string()]);
        assert!(!result.fails(DiagnosticThreshold::Error));
    }

    #[test]
    fn test_child_requests_follow_property_order() {
        let extractor = extractor_with(Arc::new(ManagedStructPolicy::default()), TypeHierarchy::new());
        let set = method_set(
            "Person",
            vec![
                getter("Person", "getName", "String"),
                getter("Person", "getAddress", "Address"),
            ],
        );

        let result = extractor.extract(&set);

        let requested: Vec<&str> = result.children.iter().map(|c| c.value_type.as_str()).collect();
        assert_eq!(requested, vec!["Address", "String"]);
        assert!(result.children.iter().all(|c| c.owner.as_str() == "Person"));
    }
}

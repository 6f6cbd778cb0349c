//! Binding of getter, setter and boolean-dual groups into properties.

use crate::config::TypeSettings;
use crate::extraction::accessor::{
    boolean_dual_name, decapitalize, is_accessor_name, malformed_getter_message, setter_name,
    AccessorContext, AccessorGroup, AccessorGroups, GetterName, GetterPrefix,
};
use crate::extraction::completeness::HandledSet;
use crate::extraction::conflicts::ConflictResolver;
use crate::extraction::context::ExtractionContext;
use crate::model::{BoundProperty, Marker};
use crate::policy::{SchemaPolicy, SetterVerdict};
use std::collections::BTreeSet;
use tracing::{debug, trace};

pub struct PropertyBinder<'a> {
    policy: &'a dyn SchemaPolicy,
    resolver: &'a dyn ConflictResolver,
    types: &'a TypeSettings,
    groups: &'a AccessorGroups,
    handled: HandledSet,
    consumed: BTreeSet<String>,
}

impl<'a> PropertyBinder<'a> {
    pub fn new(
        policy: &'a dyn SchemaPolicy,
        resolver: &'a dyn ConflictResolver,
        types: &'a TypeSettings,
        groups: &'a AccessorGroups,
    ) -> Self {
        Self {
            policy,
            resolver,
            types,
            groups,
            handled: HandledSet::new(),
            consumed: BTreeSet::new(),
        }
    }

    /// Bind every getter-shaped group, in name order. Returns the bound
    /// properties and the methods accounted for along the way.
    pub fn bind(mut self, ctx: &mut ExtractionContext) -> (Vec<BoundProperty>, HandledSet) {
        let groups = self.groups;
        let mut properties = Vec::new();
        for group in groups.iter() {
            if self.consumed.contains(group.name()) {
                trace!(name = group.name(), "already merged into a boolean property");
                continue;
            }
            if let Some(property) = self.bind_group(ctx, group) {
                debug!(property = %property.name, value_type = %property.value_type, "bound property");
                properties.push(property);
            }
        }
        (properties, self.handled)
    }

    fn bind_group(&mut self, ctx: &mut ExtractionContext, group: &AccessorGroup) -> Option<BoundProperty> {
        let groups = self.groups;
        let mut methods = group.clone();

        if !is_accessor_name(group.name()) {
            if let Some(chains) = self.resolver.overridden_methods(methods.methods()) {
                self.policy.on_overridden_methods(ctx, &chains);
                let overridden: Vec<_> = chains.into_iter().flatten().collect();
                self.handled.extend(&overridden);
                methods = methods.filtered(|m| !overridden.contains(m));
                if methods.is_empty() {
                    return None;
                }
            }
        }

        methods = self.resolve_overloads(ctx, methods)?;

        let (prefix, residue) = match GetterName::classify(group.name()) {
            GetterName::NotGetter => return None,
            GetterName::Malformed { prefix } => {
                if let Some(getter) = self.resolver.most_specific(methods.methods()) {
                    self.policy
                        .on_invalid_getter(ctx, getter, &malformed_getter_message(prefix));
                }
                return None;
            }
            GetterName::Valid { prefix, residue } => (prefix, residue),
        };

        let property_name = decapitalize(residue);
        let setter = groups
            .get(&setter_name(residue))
            .and_then(|g| AccessorContext::new(g.methods().to_vec(), self.resolver));

        let primary = self.resolver.most_specific(methods.methods())?.clone();
        if primary.arity() != 0 {
            self.policy
                .on_invalid_getter(ctx, &primary, "getter methods cannot take parameters");
            return None;
        }

        let mut getter_methods = methods.methods().to_vec();
        if prefix == GetterPrefix::Get {
            let dual_name = boolean_dual_name(residue);
            if let Some(dual) = groups.get(&dual_name) {
                // Merged, rejected or excused: never bound on its own afterwards.
                self.consumed.insert(dual_name);
                let dual = self.resolve_overloads(ctx, dual.clone());
                if let Some(dual) = dual {
                    let dual_getter = self.resolver.most_specific(dual.methods())?;
                    if !self.types.is_boolean(&primary.return_type)
                        || !self.types.is_boolean(&dual_getter.return_type)
                    {
                        let message = format!(
                            "property '{}' has both '{}()' and '{}()' getters, but they don't both return a boolean",
                            property_name,
                            dual.name(),
                            group.name()
                        );
                        self.policy.on_invalid_getter(ctx, dual_getter, &message);
                        return None;
                    }
                    getter_methods.extend(dual.methods().iter().cloned());
                }
            }
        }

        let getter = AccessorContext::new(getter_methods, self.resolver)?;
        let property = self.bind_property(ctx, property_name, prefix, &getter, setter.as_ref())?;

        self.handled.extend(getter.declaring_methods());
        if let Some(setter) = &setter {
            self.handled.extend(setter.declaring_methods());
        }
        Some(property)
    }

    /// Report overload ambiguity and keep only zero-parameter members.
    /// Reported members count as handled. `None` if nothing remains.
    fn resolve_overloads(&mut self, ctx: &mut ExtractionContext, group: AccessorGroup) -> Option<AccessorGroup> {
        let Some(overloads) = self.resolver.overloaded_methods(group.methods()) else {
            return Some(group);
        };
        self.policy.on_overloaded_methods(ctx, &overloads);
        self.handled.extend(group.methods());
        let remaining = group.zero_parameter();
        (!remaining.is_empty()).then_some(remaining)
    }

    fn bind_property(
        &self,
        ctx: &mut ExtractionContext,
        name: String,
        prefix: GetterPrefix,
        getter: &AccessorContext,
        setter: Option<&AccessorContext>,
    ) -> Option<BoundProperty> {
        let primary = getter.most_specific();
        if primary.arity() != 0 {
            self.policy
                .on_invalid_getter(ctx, primary, "getter methods cannot take parameters");
            return None;
        }
        if prefix == GetterPrefix::Is && !self.types.is_boolean(&primary.return_type) {
            self.policy
                .on_invalid_getter(ctx, primary, "getter method name must start with 'get'");
            return None;
        }

        let state = self.policy.classify_state(ctx, getter);
        let value_type = primary.return_type.clone();

        let setter_binding = setter.and_then(|setter| {
            match self.policy.validate_setter(ctx, &value_type, getter, setter) {
                SetterVerdict::Accept => Some(setter.most_specific().clone()),
                SetterVerdict::Reject => None,
            }
        });

        let getter_bindings = getter.getters().to_vec();
        let is_opaque = getter.has_marker(Marker::Unmanaged);

        Some(BoundProperty {
            name,
            value_type,
            state,
            declaring_types: getter.declaring_types(),
            getter_bindings,
            setter_binding,
            is_opaque,
        })
    }
}

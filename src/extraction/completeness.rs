//! Accounting of the methods consumed by one extraction pass.

use crate::extraction::context::ExtractionContext;
use crate::model::MethodDescriptor;
use crate::policy::SchemaPolicy;
use std::collections::BTreeSet;
use tracing::debug;

/// Methods bound into a property or excused by a hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandledSet {
    methods: BTreeSet<MethodDescriptor>,
}

impl HandledSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, method: MethodDescriptor) {
        self.methods.insert(method);
    }

    pub fn extend<'a>(&mut self, methods: impl IntoIterator<Item = &'a MethodDescriptor>) {
        self.methods.extend(methods.into_iter().cloned());
    }

    pub fn contains(&self, method: &MethodDescriptor) -> bool {
        self.methods.contains(method)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn into_vec(self) -> Vec<MethodDescriptor> {
        self.methods.into_iter().collect()
    }
}

/// Partition of the method set after the completeness check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    pub handled: Vec<MethodDescriptor>,
    pub unhandled: Vec<MethodDescriptor>,
}

/// Hand every method not in `handled` to the policy; whatever it does not
/// excuse stays unhandled.
pub fn check_completeness(
    ctx: &mut ExtractionContext,
    policy: &dyn SchemaPolicy,
    all: &[MethodDescriptor],
    mut handled: HandledSet,
) -> Coverage {
    let mut leftovers: Vec<MethodDescriptor> = Vec::new();
    for method in all {
        if !handled.contains(method) && !leftovers.contains(method) {
            leftovers.push(method.clone());
        }
    }

    if leftovers.is_empty() {
        return Coverage {
            handled: handled.into_vec(),
            unhandled: Vec::new(),
        };
    }

    let excused = policy.on_incomplete_coverage(ctx, all, &leftovers);
    let (accepted, unhandled): (Vec<_>, Vec<_>) =
        leftovers.into_iter().partition(|m| excused.contains(m));
    debug!(
        excused = accepted.len(),
        unhandled = unhandled.len(),
        "completeness check"
    );
    handled.extend(&accepted);

    Coverage {
        handled: handled.into_vec(),
        unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Marker, TypeDescriptor};
    use crate::policy::ManagedStructPolicy;

    #[test]
    fn test_policy_excuses_part_of_the_leftovers() {
        let bound = MethodDescriptor::new("getName", "T", "String");
        let helper = MethodDescriptor::new("describe", "T", "String").with_marker(Marker::Concrete);
        let stray = MethodDescriptor::new("compute", "T", "int");
        let all = vec![bound.clone(), helper.clone(), stray.clone()];
        let mut handled = HandledSet::new();
        handled.insert(bound.clone());
        let mut ctx = ExtractionContext::new(TypeDescriptor::interface("T"));

        let coverage = check_completeness(&mut ctx, &ManagedStructPolicy::default(), &all, handled);

        assert_eq!(coverage.unhandled, vec![stray]);
        assert!(coverage.handled.contains(&bound));
        assert!(coverage.handled.contains(&helper));
        assert_eq!(ctx.diagnostics().len(), 1);
    }

    #[test]
    fn test_fully_handled_set_skips_the_policy() {
        let bound = MethodDescriptor::new("getName", "T", "String");
        let mut handled = HandledSet::new();
        handled.insert(bound.clone());
        let mut ctx = ExtractionContext::new(TypeDescriptor::interface("T"));

        let coverage = check_completeness(&mut ctx, &ManagedStructPolicy::default(), &[bound], handled);

        assert!(coverage.unhandled.is_empty());
        assert!(ctx.diagnostics().is_empty());
    }
}

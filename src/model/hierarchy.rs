//! Subtype relation between declared types.

use super::descriptor::TypeName;
use std::collections::{HashMap, HashSet, VecDeque};

/// Direct supertypes per type; the subtype relation is its reflexive,
/// transitive closure. Cyclic declarations terminate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeHierarchy {
    supertypes: HashMap<TypeName, Vec<TypeName>>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, subtype: TypeName, supertypes: impl IntoIterator<Item = TypeName>) {
        self.supertypes
            .entry(subtype)
            .or_default()
            .extend(supertypes);
    }

    pub fn with(mut self, subtype: impl Into<TypeName>, supertype: impl Into<TypeName>) -> Self {
        self.declare(subtype.into(), [supertype.into()]);
        self
    }

    pub fn direct_supertypes(&self, name: &TypeName) -> &[TypeName] {
        self.supertypes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_subtype(&self, subtype: &TypeName, supertype: &TypeName) -> bool {
        if subtype == supertype {
            return true;
        }
        let mut seen: HashSet<&TypeName> = HashSet::new();
        let mut queue: VecDeque<&TypeName> = VecDeque::from([subtype]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            for parent in self.direct_supertypes(current) {
                if parent == supertype {
                    return true;
                }
                queue.push_back(parent);
            }
        }
        false
    }

    /// Strict subtype: subtype of, but not equal to.
    pub fn is_proper_subtype(&self, subtype: &TypeName, supertype: &TypeName) -> bool {
        subtype != supertype && self.is_subtype(subtype, supertype)
    }
}

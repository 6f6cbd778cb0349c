//! Accessor naming conventions and per-name method groups.

use crate::extraction::conflicts::ConflictResolver;
use crate::model::{Marker, MethodDescriptor, TypeName};
use std::collections::{BTreeMap, BTreeSet};

pub const GET_PREFIX: &str = "get";
pub const IS_PREFIX: &str = "is";
pub const SET_PREFIX: &str = "set";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetterPrefix {
    Get,
    Is,
}

impl GetterPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => GET_PREFIX,
            Self::Is => IS_PREFIX,
        }
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Position of the first residue character, as users count it.
    fn residue_ordinal(&self) -> &'static str {
        match self {
            Self::Get => "4th",
            Self::Is => "3rd",
        }
    }
}

/// Getter prefix of `name`, if it has one and is longer than it.
pub fn getter_prefix(name: &str) -> Option<GetterPrefix> {
    if name.len() > GET_PREFIX.len() && name.starts_with(GET_PREFIX) {
        Some(GetterPrefix::Get)
    } else if name.len() > IS_PREFIX.len() && name.starts_with(IS_PREFIX) {
        Some(GetterPrefix::Is)
    } else {
        None
    }
}

pub fn is_setter_name(name: &str) -> bool {
    name.len() > SET_PREFIX.len() && name.starts_with(SET_PREFIX)
}

/// Getter- or setter-shaped, regardless of whether the residue is well formed.
pub fn is_accessor_name(name: &str) -> bool {
    getter_prefix(name).is_some() || is_setter_name(name)
}

/// Classification of a method name as a getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetterName<'a> {
    Valid {
        prefix: GetterPrefix,
        residue: &'a str,
    },
    Malformed {
        prefix: GetterPrefix,
    },
    NotGetter,
}

impl<'a> GetterName<'a> {
    pub fn classify(name: &'a str) -> Self {
        let Some(prefix) = getter_prefix(name) else {
            return Self::NotGetter;
        };
        let residue = &name[prefix.len()..];
        if is_well_formed_residue(residue) {
            Self::Valid { prefix, residue }
        } else {
            Self::Malformed { prefix }
        }
    }
}

/// Uppercase first character, or lowercase first followed by uppercase
/// second (`xCoordinate` style residues).
pub fn is_well_formed_residue(residue: &str) -> bool {
    let mut chars = residue.chars();
    match (chars.next(), chars.next()) {
        (Some(first), _) if first.is_uppercase() => true,
        (Some(_), Some(second)) => second.is_uppercase(),
        _ => false,
    }
}

pub fn malformed_getter_message(prefix: GetterPrefix) -> String {
    format!(
        "the {} character of the getter method name must be an uppercase character",
        prefix.residue_ordinal()
    )
}

/// Lower the first character unless the first two are both uppercase, so
/// `Name` becomes `name` while `URL` stays `URL`.
///
/// Only a single-character lowercase mapping is applied. A character whose
/// lowercase form expands (`İ`) is kept as is, so the name never grows.
pub fn decapitalize(residue: &str) -> String {
    let mut chars = residue.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.next().is_some_and(char::is_uppercase) && first.is_uppercase() {
        return residue.to_string();
    }
    let mut lower = first.to_lowercase();
    let first = match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(first).chain(residue.chars().skip(1)).collect()
}

pub fn setter_name(residue: &str) -> String {
    format!("{}{}", SET_PREFIX, residue)
}

pub fn boolean_dual_name(residue: &str) -> String {
    format!("{}{}", IS_PREFIX, residue)
}

/// All descriptors sharing one method name, in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorGroup {
    name: String,
    methods: Vec<MethodDescriptor>,
}

impl AccessorGroup {
    pub fn new(name: impl Into<String>, methods: Vec<MethodDescriptor>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn filtered(&self, keep: impl Fn(&MethodDescriptor) -> bool) -> AccessorGroup {
        AccessorGroup::new(
            self.name.clone(),
            self.methods.iter().filter(|m| keep(m)).cloned().collect(),
        )
    }

    pub fn zero_parameter(&self) -> AccessorGroup {
        self.filtered(|m| m.arity() == 0)
    }
}

/// Groups for one extraction pass, keyed and iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct AccessorGroups {
    groups: BTreeMap<String, AccessorGroup>,
}

impl AccessorGroups {
    pub fn from_methods(methods: &[MethodDescriptor]) -> Self {
        let mut by_name: BTreeMap<String, Vec<MethodDescriptor>> = BTreeMap::new();
        for method in methods {
            let group = by_name.entry(method.name.clone()).or_default();
            if !group.contains(method) {
                group.push(method.clone());
            }
        }
        let groups = by_name
            .into_iter()
            .map(|(name, methods)| (name.clone(), AccessorGroup::new(name, methods)))
            .collect();
        Self { groups }
    }

    pub fn get(&self, name: &str) -> Option<&AccessorGroup> {
        self.groups.get(name).filter(|g| !g.is_empty())
    }

    /// Groups in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &AccessorGroup> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A getter or setter: its declarations across the hierarchy plus the most
/// specific one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorContext {
    declaring_methods: Vec<MethodDescriptor>,
    most_specific: MethodDescriptor,
    getters: Vec<MethodDescriptor>,
}

impl AccessorContext {
    /// `None` when `declaring_methods` is empty.
    pub fn new(
        declaring_methods: Vec<MethodDescriptor>,
        resolver: &dyn ConflictResolver,
    ) -> Option<Self> {
        let most_specific = resolver.most_specific(&declaring_methods)?.clone();

        let mut names: Vec<&str> = vec![most_specific.name.as_str()];
        for method in &declaring_methods {
            if !names.contains(&method.name.as_str()) {
                names.push(&method.name);
            }
        }
        let getters = names
            .iter()
            .filter_map(|name| {
                let same_name: Vec<MethodDescriptor> = declaring_methods
                    .iter()
                    .filter(|m| m.name == *name)
                    .cloned()
                    .collect();
                resolver.most_specific(&same_name).cloned()
            })
            .collect();

        Some(Self {
            declaring_methods,
            most_specific,
            getters,
        })
    }

    pub fn declaring_methods(&self) -> &[MethodDescriptor] {
        &self.declaring_methods
    }

    pub fn most_specific(&self) -> &MethodDescriptor {
        &self.most_specific
    }

    /// Most specific declaration per accessor name, primary name first.
    pub fn getters(&self) -> &[MethodDescriptor] {
        &self.getters
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.declaring_methods.iter().any(|m| m.has_marker(marker))
    }

    pub fn declaring_types(&self) -> BTreeSet<TypeName> {
        self.declaring_methods
            .iter()
            .map(|m| m.declaring_type.clone())
            .collect()
    }
}

use modelschema::extraction::accessor::{decapitalize, GetterName};
use modelschema::testkit::{method_set, RecordingPolicy};
use modelschema::{MethodDescriptor, TypeHierarchy};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_method() -> impl Strategy<Value = MethodDescriptor> {
    let names = prop::sample::select(vec![
        "getName", "setName", "isName", "getURL", "getx", "getEnabled", "isEnabled", "setEnabled",
        "build", "add",
    ]);
    let declaring = prop::sample::select(vec!["Base", "Sub"]);
    let types = prop::sample::select(vec!["String", "boolean", "void", "int"]);
    let params = prop::collection::vec(prop::sample::select(vec!["String", "int"]), 0..2);

    (names, declaring, types, params).prop_map(|(name, declaring, returns, params)| {
        params
            .into_iter()
            .fold(MethodDescriptor::new(name, declaring, returns), |m, p| m.with_parameter(p))
    })
}

proptest! {
    #[test]
    fn prop_extraction_is_deterministic_and_complete(
        methods in prop::collection::vec(arb_method(), 0..12)
    ) {
        let set = method_set("Sub", methods.clone());
        let (extractor, _) =
            RecordingPolicy::default().into_extractor(TypeHierarchy::new().with("Sub", "Base"));

        let first = extractor.extract(&set);
        let second = extractor.extract(&set);

        prop_assert_eq!(&first.properties, &second.properties);
        prop_assert_eq!(&first.diagnostics, &second.diagnostics);

        let handled: BTreeSet<_> = first.handled.iter().cloned().collect();
        let unhandled: BTreeSet<_> = first.unhandled.iter().cloned().collect();
        let all: BTreeSet<_> = methods.into_iter().collect();
        prop_assert!(handled.is_disjoint(&unhandled));
        prop_assert_eq!(&handled | &unhandled, all);

        let names: BTreeSet<&str> = first.properties.iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(names.len(), first.properties.len());
        for property in &first.properties {
            prop_assert!(!property.getter_bindings.is_empty());
            prop_assert_eq!(property.getter_bindings[0].arity(), 0);
        }
    }

    #[test]
    fn prop_capitalized_residue_decapitalizes(residue in "[A-Z][a-z]{0,8}") {
        let name = format!("get{}", residue);
        match GetterName::classify(&name) {
            GetterName::Valid { residue: found, .. } => prop_assert_eq!(found, residue.as_str()),
            other => prop_assert!(false, "expected a valid getter, got {:?}", other),
        }
        let property = decapitalize(&residue);
        prop_assert!(property.starts_with(|c: char| c.is_lowercase()));
        prop_assert_eq!(&property[1..], &residue[1..]);
    }

    #[test]
    fn prop_acronym_residue_is_unchanged(residue in "[A-Z]{2,5}[a-z]{0,4}") {
        prop_assert_eq!(decapitalize(&residue), residue);
    }
}

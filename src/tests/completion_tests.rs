use clap::ValueEnum;

use super::*;

#[test]
fn kinds_use_kebab_case_names() {
    assert_eq!(
        CompletionKind::from_str("resource-plans", false).unwrap(),
        CompletionKind::ResourcePlans
    );
    assert_eq!(CompletionKind::from_str("apps", false).unwrap(), CompletionKind::Apps);
    assert!(CompletionKind::from_str("nope", false).is_err());
}

#[test]
fn app_scoped_kinds_need_an_app() {
    for kind in [CompletionKind::Ptypes, CompletionKind::Volumes, CompletionKind::Perms] {
        assert!(kind.app_scoped(), "{kind:?}");
    }
    for kind in [CompletionKind::Apps, CompletionKind::Plans, CompletionKind::ResourcePlans] {
        assert!(!kind.app_scoped(), "{kind:?}");
    }
}

#[test]
fn names_keep_mapping_order() {
    let mapped = names(vec![("b", 1), ("a", 2)], |(n, i)| format!("{n}{i}"));
    assert_eq!(mapped, vec!["b1", "a2"]);
}

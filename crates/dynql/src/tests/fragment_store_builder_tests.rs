use crate::FragmentStore;
use crate::FragmentStoreBuilder;

#[test]
fn empty_builder_creates_empty_store() {
    let store = FragmentStoreBuilder::new().build();
    assert!(store.is_empty());
    assert_eq!(store, FragmentStore::new());
}

#[test]
fn registers_queued_fragments_in_order() {
    let store = FragmentStore::builder()
        .fragment("B", "fragment B on T { b }")
        .fragments_from_str("fragment A on T { a } fragment C on T { ...B }")
        .build();

    assert_eq!(store.fragments().keys().collect::<Vec<_>>(), vec!["B", "A", "C"]);
    assert_eq!(store.get("C").unwrap().depends_on(), ["B"]);
}

#[test]
fn later_queued_fragment_overwrites_earlier() {
    let store = FragmentStore::builder()
        .fragments_from_str("fragment A on T { old }")
        .fragment("A", "fragment A on T { new }")
        .build();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("A").unwrap().definition(), "fragment A on T { new }");
}

/// Verifies that naming rules are in effect before queued fragments are
/// registered, so queued fragments with now-invalid names are dropped.
#[test]
fn name_rules_apply_to_queued_fragments() {
    let store = FragmentStore::builder()
        .fragment("X", "fragment X on T { x }")
        .fragments_from_str("fragment query on T { q } fragment Ok on T { ok }")
        .reserved_name("query")
        .min_name_len(2)
        .build();

    assert_eq!(store.fragments().keys().collect::<Vec<_>>(), vec!["Ok"]);
}

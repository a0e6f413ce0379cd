use cohort::roster::EntityRegistry;

#[test]
fn test_register_assigns_indices_in_first_seen_order() {
    let mut registry = EntityRegistry::new();
    let alice = registry.register("Alice");
    let bob = registry.register("Bob");
    let carol = registry.register("Carol");

    assert_eq!(alice.index, 0);
    assert_eq!(bob.index, 1);
    assert_eq!(carol.index, 2);

    let names: Vec<&str> = registry.all_entities().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_register_duplicate_returns_existing_entity() {
    let mut registry = EntityRegistry::new();
    let first = registry.register("Alice");
    registry.register("Bob");
    let again = registry.register("Alice");

    assert_eq!(first, again);
    assert_eq!(again.index, 0);
    assert_eq!(registry.all_entities().len(), 2);
}

#[test]
fn test_names_are_case_sensitive() {
    let mut registry = EntityRegistry::new();
    let lower = registry.register("alice");
    let upper = registry.register("Alice");

    assert_ne!(lower.index, upper.index);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_get_looks_up_by_exact_name() {
    let mut registry = EntityRegistry::new();
    registry.register("Alice");
    registry.register("Bob");

    assert_eq!(registry.get("Bob").map(|e| e.index), Some(1));
    assert!(registry.get("bob").is_none());
    assert!(registry.get("Carol").is_none());
}

#[test]
fn test_empty_registry() {
    let registry = EntityRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.all_entities().is_empty());
}

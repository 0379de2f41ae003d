use super::*;
use crate::TypeInterner;
use crate::types::PropertyInfo;

#[test]
fn test_self_match_is_identity() {
    let db = TypeInterner::new();
    let dict = db.collection(TypeId::STRING, TypeId::NUMBER);
    let alias = db.alias("Dict", Some(dict));

    assert!(contains(&db, dict, dict));
    assert!(contains(&db, alias, alias));
    assert!(weak_contains(&db, alias, alias));
}

#[test]
fn test_finds_key_and_value() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let dict = db.collection(TypeId::STRING, t);

    assert!(contains(&db, dict, t));
    assert!(contains(&db, dict, TypeId::STRING));
    assert!(!contains(&db, dict, TypeId::NUMBER));
}

#[test]
fn test_alias_is_opaque_to_strict_containment() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let boxed = db.alias("Box", Some(db.collection(TypeId::STRING, t)));
    let outer = db.tuple(vec![boxed, TypeId::NUMBER]);

    assert!(!contains(&db, outer, t));
    assert!(weak_contains(&db, outer, t));
}

#[test]
fn test_alias_in_collection_value_needs_weak_containment() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let boxed = db.alias("Box", Some(db.collection(TypeId::NUMBER, t)));
    let dict = db.collection(TypeId::STRING, boxed);

    assert!(contains(&db, dict, boxed));
    assert!(!contains(&db, dict, t));
    assert!(weak_contains(&db, dict, t));
}

#[test]
fn test_recurses_into_objects_and_unions() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let maybe_t = db.union(vec![t, TypeId::NULL]);
    let holder = db.object(vec![PropertyInfo::new("item", maybe_t)]);

    assert!(contains(&db, holder, t));
    assert!(contains(&db, holder, TypeId::NULL));
}

#[test]
fn test_weak_containment_terminates_on_cycles() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let tree = db.alias("Tree", None);
    let node = db.collection(TypeId::STRING, tree);
    db.set_alias_target(tree, node).expect("alias");

    let mut checker = ContainsChecker::new(&db, Containment::Weak);
    assert!(!checker.contains(tree, t));
    assert!(checker.contains(tree, node));
}

use super::*;
use crate::TypeInterner;
use crate::types::PropertyInfo;

#[test]
fn test_substitution_lists() {
    let mut subst = TypeSubstitution::new();
    assert!(subst.is_empty());

    subst.insert(TypeId(40), TypeId::STRING);
    assert_eq!(subst.len(), 1);
    assert_eq!(subst.sources(), &[TypeId(40)]);
    assert_eq!(subst.targets(), &[TypeId::STRING]);
}

#[test]
fn test_substitution_arity_mismatch() {
    let err = TypeSubstitution::from_lists(&[TypeId(40), TypeId(41)], &[TypeId::STRING])
        .expect_err("lists differ in length");
    assert_eq!(
        err,
        TypeGraphError::SubstitutionArity {
            sources: 2,
            targets: 1
        }
    );
}

#[test]
fn test_empty_substitution_shares_node() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let collection = db.collection(TypeId::STRING, t);

    let result = change_all(&db, collection, &[], &[], &TypeScope::new()).expect("empty lists");
    assert_eq!(result, collection);
}

#[test]
fn test_unrelated_substitution_shares_node() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let u = db.type_var("U", None);
    let collection = db.collection(TypeId::STRING, t);

    let result =
        change_all(&db, collection, &[u], &[TypeId::NUMBER], &TypeScope::new()).expect("arity");
    assert_eq!(result, collection);
}

#[test]
fn test_type_var_is_replaced() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let result = change_all(&db, t, &[t], &[TypeId::NUMBER], &TypeScope::new()).expect("arity");
    assert_eq!(result, TypeId::NUMBER);
}

#[test]
fn test_collection_value_is_rewritten_key_kept() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let collection = db.collection(TypeId::STRING, t);

    let result =
        change_all(&db, collection, &[t], &[TypeId::NUMBER], &TypeScope::new()).expect("arity");
    assert_ne!(result, collection);

    let node = db.lookup(result).expect("rebuilt collection");
    assert_eq!(
        node.data,
        TypeData::Collection {
            key: TypeId::STRING,
            value: TypeId::NUMBER
        }
    );
    assert_eq!(node.name.as_ref(), "{ [key: string]: number }");
}

#[test]
fn test_key_is_never_substituted() {
    let db = TypeInterner::new();
    let k = db.type_var("K", None);
    let collection = db.collection(k, TypeId::NUMBER);

    let result =
        change_all(&db, collection, &[k], &[TypeId::STRING], &TypeScope::new()).expect("arity");
    assert_eq!(result, collection);
}

#[test]
fn test_named_collection_renamed_and_link_substituted() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let array_of_t = db.object_named(
        "Array<T>",
        vec![PropertyInfo::new("first", t)],
        None,
    );
    let list = db.collection_named("Array<T>", TypeId::NUMBER, t, Some(array_of_t));

    let result =
        change_all(&db, list, &[t], &[TypeId::STRING], &TypeScope::new()).expect("arity");
    let node = db.lookup(result).expect("rebuilt");
    assert_eq!(node.name.as_ref(), "Array<string>");

    let link = node.is_subtype_of.expect("link kept");
    assert_ne!(link, array_of_t);
    let link_node = db.lookup(link).expect("rebuilt link");
    assert_eq!(link_node.name.as_ref(), "Array<string>");
    assert_eq!(
        link_node.data,
        TypeData::Object {
            properties: vec![PropertyInfo::new("first", TypeId::STRING)]
        }
    );
}

#[test]
fn test_union_substitution_renormalizes() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let maybe_t = db.union(vec![t, TypeId::UNDEFINED]);

    let result =
        change_all(&db, maybe_t, &[t], &[TypeId::UNDEFINED], &TypeScope::new()).expect("arity");
    assert_eq!(result, TypeId::UNDEFINED);
}

#[test]
fn test_tuple_substitution_shares_unchanged_items() {
    let db = TypeInterner::new();
    let t = db.type_var("T", None);
    let pair = db.tuple(vec![t, TypeId::BOOLEAN]);

    let result =
        change_all(&db, pair, &[t], &[TypeId::STRING], &TypeScope::new()).expect("arity");
    assert_eq!(result, db.tuple(vec![TypeId::STRING, TypeId::BOOLEAN]));
}

#[test]
fn test_changed_name_uses_substitution() {
    let db = TypeInterner::new();
    let k = db.type_var("K", None);
    let v = db.type_var("V", None);
    let mut subst = TypeSubstitution::new();
    subst.insert(k, TypeId::STRING);
    subst.insert(v, TypeId::NUMBER);

    let scope = TypeScope::new();
    let instantiator = TypeInstantiator::new(&db, &subst, &scope);
    let node = TypeNode::new(
        "Map<K, V>",
        TypeData::Collection { key: k, value: v },
    );
    assert_eq!(instantiator.get_changed_name(&node), "Map<string, number>");
    assert!(std::ptr::eq(instantiator.scope(), &scope));
}

use super::*;
use crate::types::{LiteralValue, PropertyInfo};

#[test]
fn test_interner_intrinsics() {
    let interner = TypeInterner::new();

    for kind in IntrinsicKind::ALL {
        let node = interner
            .lookup(kind.type_id())
            .expect("intrinsics are pre-registered");
        assert_eq!(node.data, TypeData::Intrinsic(kind));
        assert_eq!(node.name.as_ref(), kind.name());
    }
    assert_eq!(interner.len(), IntrinsicKind::ALL.len());
}

#[test]
fn test_undefined_is_linked_to_void() {
    let interner = TypeInterner::new();
    let undefined = interner.lookup(TypeId::UNDEFINED).expect("undefined");
    assert_eq!(undefined.is_subtype_of, Some(TypeId::VOID));
}

#[test]
fn test_interner_deduplication() {
    let interner = TypeInterner::new();

    let id1 = interner.literal_string("hello");
    let id2 = interner.literal_string("hello");
    let id3 = interner.literal_string("world");

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
}

#[test]
fn test_number_literals_intern_by_value() {
    let interner = TypeInterner::new();

    let nan = interner.literal_number(f64::NAN);
    assert_eq!(interner.literal_number(f64::NAN), nan);
    assert_eq!(interner.literal_number(0.0), interner.literal_number(-0.0));

    let big = interner.literal_number(1e20);
    let bigger = interner.literal_number(2e20);
    assert_ne!(big, bigger);
    assert_eq!(
        interner.lookup(bigger).expect("literal").name.as_ref(),
        "200000000000000000000"
    );
}

#[test]
fn test_literal_linked_to_primitive() {
    let interner = TypeInterner::new();
    let two = interner.literal_number(2.0);
    let node = interner.lookup(two).expect("literal");
    assert_eq!(node.name.as_ref(), "2");
    assert_eq!(node.data, TypeData::Literal(LiteralValue::Number(2.0)));
    assert_eq!(node.is_subtype_of, Some(TypeId::NUMBER));
}

#[test]
fn test_collection_interned_by_canonical_name() {
    let interner = TypeInterner::new();
    let first = interner.collection(TypeId::STRING, TypeId::NUMBER);
    let second = interner.collection(TypeId::STRING, TypeId::NUMBER);
    assert_eq!(first, second);
    assert_eq!(
        interner.find_by_name("{ [key: string]: number }"),
        vec![first]
    );
}

#[test]
fn test_same_name_different_shape_is_not_merged() {
    let interner = TypeInterner::new();
    // Two distinct variables render identically.
    let t1 = interner.type_var("T", None);
    let t2 = interner.type_var("T", None);
    assert_ne!(t1, t2);

    let first = interner.collection(TypeId::STRING, t1);
    let second = interner.collection(TypeId::STRING, t2);
    assert_ne!(first, second);
    assert_eq!(interner.find_by_name("{ [key: string]: T }").len(), 2);
}

#[test]
fn test_interner_union_normalization() {
    let interner = TypeInterner::new();

    assert_eq!(interner.union(vec![TypeId::STRING]), TypeId::STRING);
    assert_eq!(interner.union(vec![]), TypeId::NEVER);
    assert_eq!(
        interner.union(vec![TypeId::STRING, TypeId::NEVER]),
        TypeId::STRING
    );
    assert_eq!(
        interner.union(vec![TypeId::STRING, TypeId::UNKNOWN]),
        TypeId::UNKNOWN
    );
}

#[test]
fn test_interner_union_dedups_and_flattens() {
    let interner = TypeInterner::new();

    let nested = interner.union(vec![TypeId::STRING, TypeId::NUMBER]);
    let flattened = interner.union(vec![TypeId::STRING, nested, TypeId::STRING]);
    assert_eq!(flattened, nested);

    let reordered = interner.union(vec![TypeId::NUMBER, TypeId::STRING]);
    assert_eq!(reordered, nested);

    let node = interner.lookup(flattened).expect("union");
    assert_eq!(node.name.as_ref(), "number | string");
}

#[test]
fn test_object_and_tuple_builders() {
    let interner = TypeInterner::new();
    let object = interner.object(vec![PropertyInfo::new("length", TypeId::NUMBER)]);
    let tuple = interner.tuple(vec![TypeId::STRING, TypeId::NUMBER]);

    assert_eq!(
        interner.lookup(object).expect("object").name.as_ref(),
        "{ length: number }"
    );
    assert_eq!(
        interner.lookup(tuple).expect("tuple").name.as_ref(),
        "[string, number]"
    );
    assert_eq!(tuple, interner.tuple(vec![TypeId::STRING, TypeId::NUMBER]));
}

#[test]
fn test_alloc_bypasses_name_index() {
    let interner = TypeInterner::new();
    let interned = interner.collection(TypeId::STRING, TypeId::NUMBER);
    let node = TypeNode::clone(&interner.lookup(interned).expect("collection"));
    let fresh = interner.alloc(node);
    assert_ne!(fresh, interned);
    assert_eq!(
        interner.find_by_name("{ [key: string]: number }"),
        vec![interned]
    );
}

#[test]
fn test_set_alias_target() {
    let interner = TypeInterner::new();
    let alias = interner.alias("Id", None);
    interner
        .set_alias_target(alias, TypeId::STRING)
        .expect("alias can be retargeted");
    let node = interner.lookup(alias).expect("alias");
    assert_eq!(
        node.data,
        TypeData::Alias {
            target: Some(TypeId::STRING)
        }
    );
    assert_eq!(node.name.as_ref(), "Id");
}

#[test]
fn test_set_alias_target_rejects_non_alias() {
    let interner = TypeInterner::new();
    let err = interner
        .set_alias_target(TypeId::STRING, TypeId::NUMBER)
        .expect_err("string is not an alias");
    assert_eq!(
        err,
        TypeGraphError::NotAnAlias {
            name: "string".to_string()
        }
    );

    let missing = TypeId(9_999);
    assert_eq!(
        interner.set_alias_target(missing, TypeId::NUMBER),
        Err(TypeGraphError::UnknownType(missing))
    );
}

#[test]
fn test_custom_options_are_exposed() {
    let options = SolverOptions {
        max_relation_depth: 7,
        ..SolverOptions::default()
    };
    let interner = TypeInterner::with_options(options);
    assert_eq!(interner.options().max_relation_depth, 7);
}

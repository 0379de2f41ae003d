use super::*;

#[test]
fn test_intrinsic_ids_are_reserved() {
    for kind in IntrinsicKind::ALL {
        assert!(kind.type_id().is_intrinsic());
    }
    assert_eq!(IntrinsicKind::Undefined.type_id(), TypeId::UNDEFINED);
    assert!(!TypeId(TypeId::FIRST_DYNAMIC).is_intrinsic());
}

#[test]
fn test_only_literal_marks_collections() {
    let collection = TypeNode::new(
        "{ [key: string]: number }",
        TypeData::Collection {
            key: TypeId::STRING,
            value: TypeId::NUMBER,
        },
    );
    let tuple = TypeNode::new(
        "[number]",
        TypeData::Tuple {
            items: TypeList::from_slice(&[TypeId::NUMBER]),
        },
    );
    assert!(collection.only_literal());
    assert!(!tuple.only_literal());
}

#[test]
fn test_key_kind_from_key_type() {
    assert_eq!(
        KeyKind::of(&TypeData::Intrinsic(IntrinsicKind::String)),
        KeyKind::String
    );
    assert_eq!(
        KeyKind::of(&TypeData::Intrinsic(IntrinsicKind::Number)),
        KeyKind::Number
    );
    assert_eq!(
        KeyKind::of(&TypeData::Intrinsic(IntrinsicKind::Boolean)),
        KeyKind::Opaque
    );
    assert_eq!(
        KeyKind::of(&TypeData::Literal(LiteralValue::Number(1.0))),
        KeyKind::Literal(LiteralValue::Number(1.0))
    );
}

#[test]
fn test_key_kind_admits_by_category() {
    assert!(KeyKind::String.admits(PropertyKey::String("anything")));
    assert!(!KeyKind::String.admits(PropertyKey::Number(0.0)));
    assert!(KeyKind::Number.admits(PropertyKey::Number(3.0)));
    assert!(!KeyKind::Number.admits(PropertyKey::String("3")));
    assert!(!KeyKind::Opaque.admits(PropertyKey::String("x")));
}

#[test]
fn test_key_kind_admits_exact_literal() {
    let name = KeyKind::Literal(LiteralValue::String("id".into()));
    assert!(name.admits(PropertyKey::String("id")));
    assert!(!name.admits(PropertyKey::String("ids")));
    assert!(!name.admits(PropertyKey::Number(0.0)));

    let index = KeyKind::Literal(LiteralValue::Number(2.0));
    assert!(index.admits(PropertyKey::Number(2.0)));
    assert!(!index.admits(PropertyKey::Number(1.0)));
}

#[test]
fn test_literal_primitive() {
    assert_eq!(LiteralValue::String("a".into()).primitive(), TypeId::STRING);
    assert_eq!(LiteralValue::Number(1.5).primitive(), TypeId::NUMBER);
    assert_eq!(LiteralValue::Boolean(false).primitive(), TypeId::BOOLEAN);
}

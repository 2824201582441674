use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use super::*;

fn user(fields: Vec<(&str, FieldSlot)>) -> Record {
    let ty = RecordType::new("User");
    Record::new(ty, fields.into_iter().map(|(k, v)| (Atom::new(k), v)))
}

#[test]
fn test_scalar_equality() {
    assert_eq!(Value::int(1), Value::int(1));
    assert_ne!(Value::int(1), Value::int(2));
    assert_ne!(Value::int(1), Value::Bool(true));
    assert_eq!(Value::atom("ok"), Value::atom("ok"));
}

#[test]
fn test_heap_value_equality() {
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_eq!(
        Value::list(vec![Value::int(1), Value::int(2)]),
        Value::list(vec![Value::int(1), Value::int(2)])
    );
    let a = Value::map_from([(Atom::new("x"), Value::int(1))]);
    let b = Value::map_from([(Atom::new("x"), Value::int(1))]);
    assert_eq!(a, b);
}

#[test]
fn test_record_equality_requires_same_type() {
    let a = user(vec![("age", FieldSlot::Loaded(Value::int(30)))]);
    let b = user(vec![("age", FieldSlot::Loaded(Value::int(30)))]);
    assert_eq!(Value::record(a.clone()), Value::record(b));

    let other = Record::new(
        RecordType::new("Admin"),
        [(Atom::new("age"), FieldSlot::Loaded(Value::int(30)))],
    );
    assert_ne!(Value::record(a), Value::record(other));
}

#[test]
fn test_record_field_lookup() {
    let r = user(vec![
        ("age", FieldSlot::Loaded(Value::int(30))),
        ("owner", FieldSlot::Deferred),
    ]);
    assert_eq!(
        r.field(&Atom::new("age")),
        Some(&FieldSlot::Loaded(Value::int(30)))
    );
    assert_eq!(r.field(&Atom::new("owner")), Some(&FieldSlot::Deferred));
    assert_eq!(r.field(&Atom::new("missing")), None);
}

#[test]
fn test_record_with_field_replaces_slot() {
    let r = user(vec![("owner", FieldSlot::Deferred)]);
    let loaded = r.with_field("owner", FieldSlot::Loaded(Value::string("x")));
    assert_eq!(
        loaded.field(&Atom::new("owner")),
        Some(&FieldSlot::Loaded(Value::string("x")))
    );
    // The original is untouched.
    assert_eq!(r.field(&Atom::new("owner")), Some(&FieldSlot::Deferred));
}

#[test]
fn test_record_type_compare_capability() {
    fn by_age(a: &Record, b: &Record) -> Ordering {
        let age = |r: &Record| match r.field(&Atom::new("age")) {
            Some(FieldSlot::Loaded(Value::Int(n))) => *n,
            _ => 0,
        };
        age(a).cmp(&age(b))
    }

    let ty = RecordType::with_compare("Version", by_age);
    let a = Record::new(
        ty.clone(),
        [(Atom::new("age"), FieldSlot::Loaded(Value::int(1)))],
    );
    assert!(a.ty().compare.is_some());
}

#[test]
fn test_type_name() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::int(1).type_name(), "int");
    assert_eq!(Value::record(user(vec![])).type_name(), "User");
}

#[test]
fn test_display() {
    assert_eq!(Value::atom("active").to_string(), ":active");
    assert_eq!(Value::string("x").to_string(), "\"x\"");
    assert_eq!(
        Value::list(vec![Value::int(1), Value::Null]).to_string(),
        "[1, null]"
    );
    assert_eq!(Value::record(user(vec![])).to_string(), "<User>");
}

use crate::value::Value;
use std::collections::BTreeMap;

// ---- helpers -----------------------------------------------------------

fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("valid json value")
}

#[test]
fn json_integers_keep_their_sign() {
    assert_eq!(parse("99"), Value::Uint(99));
    assert_eq!(parse("-1"), Value::Int(-1));
    assert_eq!(parse("1.5"), Value::Float(1.5));
}

#[test]
fn json_containers_map_onto_list_and_map() {
    let value = parse(r#"{"tags": ["a", null, true]}"#);

    let mut expected = BTreeMap::new();
    expected.insert(
        "tags".to_string(),
        Value::List(vec![Value::from("a"), Value::Null, Value::Bool(true)]),
    );

    assert_eq!(value, Value::Map(expected));
}

#[test]
fn serialization_is_untagged() {
    let json = serde_json::to_string(&Value::from(vec!["alice", "bob"])).unwrap();

    assert_eq!(json, r#"["alice","bob"]"#);
}

#[test]
fn as_uint_accepts_non_negative_int_only() {
    assert_eq!(Value::Int(7).as_uint(), Some(7));
    assert_eq!(Value::Int(-7).as_uint(), None);
    assert_eq!(Value::Uint(7).as_uint(), Some(7));
    assert_eq!(Value::from("7").as_uint(), None);
}

#[test]
fn option_none_converts_to_null() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn tags_name_each_variant() {
    assert_eq!(Value::Null.tag(), "Null");
    assert_eq!(Value::from(vec![1u64]).tag(), "List");
    assert_eq!(Value::Map(BTreeMap::new()).tag(), "Map");
}

#[test]
fn float_equality_follows_ieee() {
    assert_eq!(Value::from(0.5), Value::Float(0.5));
    assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert!(serde_json::from_str::<Value>("NaN").is_err());
}

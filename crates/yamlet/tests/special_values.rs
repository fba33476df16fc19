use std::collections::BTreeMap;

use yamlet::{Options, Value};

#[test]
fn string_keyed_maps_encode_as_objects() -> yamlet::Result<()> {
    let mut map = BTreeMap::new();
    map.insert("zone".to_string(), "eu-west".to_string());
    map.insert("app".to_string(), "api".to_string());
    let out = yamlet::encode_to_string(&map, &Options::default())?;
    // BTreeMap iterates in key order.
    assert_eq!(out, "app: api\nzone: eu-west");
    Ok(())
}

#[test]
fn map_values_expand_recursively() -> yamlet::Result<()> {
    let mut map = BTreeMap::new();
    map.insert("ports".to_string(), vec![80u16, 443]);
    let out = yamlet::encode_to_string(&map, &Options::default())?;
    assert_eq!(out, "ports:\n   - 80\n   - 443");
    Ok(())
}

#[test]
fn urls_render_their_canonical_text() -> yamlet::Result<()> {
    let url: url::Url = "https://example.com/a?b=1".parse().expect("valid url");
    let out = yamlet::encode_to_string(&url, &Options::default())?;
    assert_eq!(out, "https://example.com/a?b=1");
    Ok(())
}

#[test]
fn finalized_values_pass_through_unchanged() -> yamlet::Result<()> {
    let tree = Value::Object(vec![
        ("n".to_string(), Value::Number("1.50".to_string())),
        ("s".to_string(), Value::String("x".to_string())),
    ]);
    // The stored literal is rendered verbatim, not reparsed.
    let out = yamlet::encode_to_string(&tree, &Options::default())?;
    assert_eq!(out, "n: 1.50\ns: x");
    Ok(())
}

#[test]
fn byte_vectors_are_plain_number_arrays_without_the_wrapper() -> yamlet::Result<()> {
    let bytes: Vec<u8> = vec![1, 2];
    let out = yamlet::encode_to_string(&bytes, &Options::default())?;
    assert_eq!(out, "- 1\n- 2");
    Ok(())
}

#[test]
fn value_kind_labels() {
    assert_eq!(Value::Null.kind(), "null");
    assert_eq!(Value::Bool(true).kind(), "bool");
    assert_eq!(Value::Number("1".into()).kind(), "number");
    assert_eq!(Value::String("x".into()).kind(), "string");
    assert_eq!(Value::Array(Vec::new()).kind(), "array");
    assert_eq!(Value::Object(Vec::new()).kind(), "object");
}

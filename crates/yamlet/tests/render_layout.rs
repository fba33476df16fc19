use yamlet::{Options, Value};

fn object(entries: &[(&str, Value)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

fn render(value: &Value, options: &Options) -> String {
    yamlet::encode_to_string(value, options).expect("render")
}

#[test]
fn array_of_objects_continues_the_dash_line() {
    let value = Value::Array(vec![
        object(&[("a", Value::Number("1".into())), ("b", Value::Number("2".into()))]),
        object(&[("a", Value::Number("3".into())), ("b", Value::Number("4".into()))]),
    ]);
    let out = render(&value, &Options::default());
    assert_eq!(out, "- a: 1\n   b: 2\n- a: 3\n   b: 4");
}

#[test]
fn nested_arrays_chain_dash_markers() {
    let value = Value::Array(vec![
        Value::Array(vec![Value::Number("1".into()), Value::Number("2".into())]),
        Value::Array(vec![Value::Number("3".into())]),
    ]);
    let out = render(&value, &Options::default());
    assert_eq!(out, "- - 1\n   - 2\n- - 3");
}

#[test]
fn mixed_array_under_key() {
    let value = object(&[(
        "xs",
        Value::Array(vec![
            Value::Number("1".into()),
            object(&[("a", Value::Number("2".into()))]),
            Value::Number("3".into()),
        ]),
    )]);
    let out = render(&value, &Options::default());
    assert_eq!(out, "xs:\n   - 1\n   - a: 2\n   - 3");
}

#[test]
fn empty_containers_render_nothing_after_the_key() {
    let value = object(&[
        ("meta", Value::Object(Vec::new())),
        ("items", Value::Array(Vec::new())),
        ("done", Value::Bool(true)),
    ]);
    let out = render(&value, &Options::default());
    assert_eq!(out, "meta:\nitems:\ndone: true");
}

#[test]
fn indent_width_is_configurable() {
    let value = object(&[("a", object(&[("b", Value::Number("1".into()))]))]);
    let narrow = Options {
        indent: 2,
        ..Options::default()
    };
    assert_eq!(render(&value, &narrow), "a:\n  b: 1");
    assert_eq!(render(&value, &Options::default()), "a:\n   b: 1");
}

#[test]
fn null_and_bools_render_as_literals() {
    let value = object(&[
        ("missing", Value::Null),
        ("on", Value::Bool(true)),
        ("off", Value::Bool(false)),
    ]);
    let out = render(&value, &Options::default());
    assert_eq!(out, "missing: null\non: true\noff: false");
}

#[test]
fn deep_nesting_accumulates_indentation() {
    let value = object(&[(
        "a",
        object(&[("b", object(&[("c", Value::String("deep".into()))]))]),
    )]);
    let out = render(&value, &Options::default());
    assert_eq!(out, "a:\n   b:\n      c: deep");
}

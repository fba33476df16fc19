use yamlet::{Encodable, Encoder, Options, Result, Scope, Value};

struct With<F: Fn(&mut Scope) -> Result<()>>(F);

impl<F: Fn(&mut Scope) -> Result<()>> Encodable for With<F> {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        (self.0)(scope)
    }
}

fn encode_with<F: Fn(&mut Scope) -> Result<()>>(f: F) -> Result<String> {
    yamlet::encode_to_string(&With(f), &Options::default())
}

#[test]
fn nested_handles_accept_writes_after_sibling_appends() -> Result<()> {
    let out = encode_with(|scope| {
        let mut items = scope.array();
        let mut head = items.nested_object();
        items.push(2i64);
        items.push(3i64);
        // Populated after the siblings were appended; still lands first.
        head.set("a", 1i64);
        Ok(())
    })?;
    assert_eq!(out, "- a: 1\n- 2\n- 3");
    Ok(())
}

#[test]
fn nested_object_rerequest_returns_the_same_builder() -> Result<()> {
    let out = encode_with(|scope| {
        let mut object = scope.object();
        let mut first = object.nested_object("meta");
        first.set("a", 1i64);
        let mut second = object.nested_object("meta");
        second.set("b", 2i64);
        Ok(())
    })?;
    assert_eq!(out, "meta:\n   a: 1\n   b: 2");
    Ok(())
}

#[test]
fn scope_container_rerequest_returns_the_same_builder() -> Result<()> {
    let out = encode_with(|scope| {
        scope.array().push(1i64);
        scope.array().push(2i64);
        Ok(())
    })?;
    assert_eq!(out, "- 1\n- 2");
    Ok(())
}

#[test]
fn unwritten_nested_encode_resolves_to_an_empty_object() -> Result<()> {
    struct Silent;
    impl Encodable for Silent {
        fn encode(&self, _scope: &mut Scope) -> Result<()> {
            Ok(())
        }
    }

    let out = encode_with(|scope| {
        let mut object = scope.object();
        object.encode("inner", &Silent)?;
        object.set("after", true);
        Ok(())
    })?;
    assert_eq!(out, "inner:\nafter: true");
    Ok(())
}

#[test]
fn root_that_writes_nothing_fails() {
    let err = encode_with(|_scope| Ok(())).expect_err("must fail");
    assert!(matches!(err, yamlet::Error::NoValuesEncoded));
    assert!(err.to_string().contains("did not encode any values"));
}

#[test]
fn finalized_tree_is_inspectable_before_rendering() -> Result<()> {
    let encoder = Encoder::new();
    let tree = encoder.encode_to_value(&With(|scope: &mut Scope| {
        let mut object = scope.object();
        object.set("n", 1i64);
        Ok(())
    }))?;
    assert_eq!(
        tree,
        Value::Object(vec![("n".to_string(), Value::Number("1".to_string()))])
    );
    Ok(())
}

#[test]
#[should_panic(expected = "container kind conflict")]
fn nested_array_after_nested_object_at_the_same_key_panics() {
    let _ = encode_with(|scope| {
        let mut object = scope.object();
        let _obj = object.nested_object("slot");
        let _arr = object.nested_array("slot");
        Ok(())
    });
}

#[test]
#[should_panic(expected = "written twice")]
fn double_single_value_write_panics() {
    let _ = encode_with(|scope| {
        scope.put(Value::Bool(true));
        scope.put(Value::Bool(false));
        Ok(())
    });
}

#[test]
#[should_panic(expected = "container kind conflict")]
fn array_request_on_an_object_scope_panics() {
    let _ = encode_with(|scope| {
        let _object = scope.object();
        let _items = scope.array();
        Ok(())
    });
}

#[test]
#[should_panic(expected = "container kind conflict")]
fn terminal_set_on_a_nested_container_key_panics() {
    let _ = encode_with(|scope| {
        let mut object = scope.object();
        let _inner = object.nested_object("slot");
        object.set("slot", 1i64);
        Ok(())
    });
}

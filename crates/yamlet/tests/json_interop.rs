#![cfg(feature = "json")]

use serde_json::json;
use yamlet::Options;

#[test]
fn json_document_encodes_in_insertion_order() -> yamlet::Result<()> {
    let doc = json!({
        "apiVersion": "v1",
        "kind": "Service",
        "spec": {
            "ports": [{"port": 80, "targetPort": 8080}],
            "selector": {"app": "web"}
        }
    });
    let out = yamlet::encode_to_string(&doc, &Options::default())?;
    assert_eq!(
        out,
        "apiVersion: v1\nkind: Service\nspec:\n   ports:\n      - port: 80\n         targetPort: 8080\n   selector:\n      app: web"
    );
    Ok(())
}

#[test]
fn json_number_literals_are_preserved_exactly() -> yamlet::Result<()> {
    let doc = json!({
        "big": 18446744073709551615u64,
        "neg": i64::MIN,
        "frac": 1.5
    });
    let out = yamlet::encode_to_string(&doc, &Options::default())?;
    assert_eq!(
        out,
        "big: 18446744073709551615\nneg: -9223372036854775808\nfrac: 1.5"
    );
    Ok(())
}

#[test]
fn json_scalars_and_nulls() -> yamlet::Result<()> {
    let doc = json!([null, true, "x", 0]);
    let out = yamlet::encode_to_string(&doc, &Options::default())?;
    assert_eq!(out, "- null\n- true\n- x\n- 0");
    Ok(())
}

#[test]
fn sorted_keys_reorders_json_objects() -> yamlet::Result<()> {
    let doc = json!({"b": 1, "a": 2});
    let options = Options {
        sorted_keys: true,
        ..Options::default()
    };
    let out = yamlet::encode_to_string(&doc, &options)?;
    assert_eq!(out, "a: 2\nb: 1");
    Ok(())
}

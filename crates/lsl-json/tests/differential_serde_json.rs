//! Cross-checks the codec against serde_json on documents both can represent.

use lsl_json::json::{JsonDecoder, JsonEncoder, JsonValue};
use lsl_json::{flatten, json_parse, json_serialize, ContainerKind, Element, JSON_NULL};
use serde_json::{json, Value};

fn documents() -> Vec<&'static str> {
    vec![
        r#"{"a":1,"b":[1,2,3],"c":{"d":null,"e":true}}"#,
        r#"[0,0.0,-0.0,-5,1e2,1E-2,123456789012345678,0.1,"x"]"#,
        r#"{"esc":"quote\" slash\\ tab\t nl\n unié ctl\u0001 pair😀"}"#,
        r#"[[[]],{},[{}],""]"#,
        r#"  {"sp ace" : [ 1 , 2 ] }  "#,
        r#""just a string""#,
        "42",
        "false",
    ]
}

#[test]
fn decoder_agrees_with_serde_json() {
    let decoder = JsonDecoder::new();
    for text in documents() {
        let ours = decoder.decode(text).expect("decode");
        let theirs: Value = serde_json::from_str(text).expect("serde decode");
        assert_eq!(Value::from(&ours), theirs, "document {text}");
    }
}

#[test]
fn encoder_output_is_valid_json() {
    let decoder = JsonDecoder::new();
    let mut encoder = JsonEncoder::new();
    for text in documents() {
        let value = decoder.decode(text).expect("decode");
        let canonical = encoder.encode(&value);
        let reparsed: Value = serde_json::from_str(&canonical).expect("canonical text parses");
        assert_eq!(reparsed, Value::from(&value), "document {text}");
        assert!(!canonical.contains(": ") && !canonical.contains(", "));
    }
}

#[test]
fn serialized_lists_parse_with_serde_json() {
    let list = vec![
        Element::str("int"),
        Element::Integer(i64::MIN),
        Element::str("float"),
        Element::Float(-1.5e-9),
        Element::str("big"),
        Element::Float(1e15),
        Element::str("null"),
        Element::str(JSON_NULL),
        Element::str("ctl"),
        Element::str("\u{0}\u{7f}"),
    ];
    let text = json_serialize(ContainerKind::Object, &list).unwrap();
    let value: Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["int"], json!(i64::MIN));
    assert!(value["float"].is_f64());
    assert_eq!(value["float"].as_f64(), Some(-1.5e-9));
    assert_eq!(value["big"].as_f64(), Some(1e15));
    assert_eq!(value["null"], Value::Null);
    assert_eq!(value["ctl"], json!("\u{0}\u{7f}"));
}

#[test]
fn flatten_serde_values() {
    let value = JsonValue::from(json!({"n": 1, "f": 1.0, "l": [1, {"k": false}]}));
    assert_eq!(
        flatten(&value).unwrap(),
        vec![
            Element::str("n"),
            Element::Integer(1),
            Element::str("f"),
            Element::Float(1.0),
            Element::str("l"),
            Element::str(r#"[1,{"k":false}]"#),
        ]
    );
}

#[test]
fn duplicate_keys_survive_where_serde_json_collapses() {
    let text = r#"{"k":1,"k":2}"#;
    assert_eq!(
        json_parse(text),
        vec![
            Element::str("k"),
            Element::Integer(1),
            Element::str("k"),
            Element::Integer(2)
        ]
    );
    let theirs: Value = serde_json::from_str(text).unwrap();
    assert_eq!(theirs, json!({"k": 2}));
}

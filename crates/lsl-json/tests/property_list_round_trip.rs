use lsl_json::number::{classify_lexeme, format_float, format_integer};
use lsl_json::{
    json_parse, json_serialize, try_json_parse, ContainerKind, Element, ParseError, JSON_INVALID,
};
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |x| x.is_finite())
}

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![
        any::<i64>().prop_map(Element::Integer),
        finite_f64().prop_map(Element::Float),
        "\\PC{0,12}".prop_map(Element::Str),
        "[\\x00-\\x1f\"\\\\]{0,4}".prop_map(Element::Str),
    ]
}

proptest! {
    #[test]
    fn integer_lexemes_classify_as_integer(n in any::<i64>()) {
        let text = format_integer(n);
        prop_assert!(!text.contains('.'));
        prop_assert_eq!(classify_lexeme(&text), Ok(Element::Integer(n)));
    }

    #[test]
    fn float_text_always_has_point_and_round_trips(x in finite_f64()) {
        let text = format_float(x);
        prop_assert!(text.contains('.'));
        prop_assert_eq!(classify_lexeme(&text), Ok(Element::Float(x)));
    }

    #[test]
    fn arrays_round_trip(list in prop::collection::vec(element(), 0..8)) {
        let text = json_serialize(ContainerKind::Array, &list).unwrap();
        prop_assert_eq!(json_parse(&text), list);
    }

    #[test]
    fn objects_round_trip(
        pairs in prop::collection::vec(("\\PC{0,8}", element()), 0..6)
    ) {
        let list: Vec<Element> = pairs
            .into_iter()
            .flat_map(|(key, value)| [Element::Str(key), value])
            .collect();
        let text = json_serialize(ContainerKind::Object, &list).unwrap();
        prop_assert_eq!(json_parse(&text), list);
    }

    #[test]
    fn rejection_is_always_the_invalid_sentinel(text in "\\PC{0,24}") {
        match try_json_parse(&text) {
            Ok(list) => prop_assert_eq!(json_parse(&text), list),
            Err(error) => {
                prop_assert_eq!(json_parse(&text), vec![Element::str(JSON_INVALID)]);
                // Text serde_json accepts is only refused for numbers outside i64/f64.
                if serde_json::from_str::<serde_json::Value>(&text).is_ok() {
                    prop_assert!(matches!(error, ParseError::Number(_)), "{}", error);
                }
            }
        }
    }

    #[test]
    fn json_looking_text_never_panics(text in "[\\[\\]{}\",:0-9.eE+\\- a-z\\\\]{0,24}") {
        let _ = json_parse(&text);
    }
}

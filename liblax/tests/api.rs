//! Behavior of the public API as seen by a consumer of parsed documents.

use std::thread;

use liblax::{
    parse, parse_with_options, Number, ParseError, ParseOptions, Parser, Value, DEFAULT_MAX_DEPTH,
};

#[test]
fn test_object_with_array_keeps_order() {
    let v = parse(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
    let entries: Vec<(&str, &Value)> = v
        .as_object()
        .iter()
        .map(|(k, v)| (k.as_str(), v))
        .collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], ("a", &Value::from(1)));
    assert_eq!(
        entries[1],
        (
            "b",
            &Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)])
        )
    );
}

#[test]
fn test_array_get_by_index() {
    let v = parse("[1, 2, 3]").unwrap();
    assert!(v.is_array());
    assert_eq!(v.as_array().len(), 3);
    assert_eq!(v.get(1).as_number(), Number::I32(2));
}

#[test]
fn test_nested_navigation() {
    let v = parse(r#"{"user":{"name":"Bob","roles":["admin","user"]}}"#).unwrap();
    assert_eq!(v.get("user").get("name").as_str(), "Bob");
    assert_eq!(v.get("user").get("roles").get(0).as_str(), "admin");
    assert_eq!(v["user"]["roles"][1].as_str(), "user");
}

#[test]
fn test_truncated_document_fails() {
    let err = parse(r#"{"badJson": "#).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn test_booleans_and_null() {
    let v = parse(r#"{"a":true,"b":false,"c":null}"#).unwrap();
    assert!(v.get("a").as_bool());
    assert!(!v.get("b").as_bool());
    assert!(v.get("c").is_null());
}

#[test]
fn test_newline_escape() {
    let v = parse(r#"{"text":"Line1\nLine2"}"#).unwrap();
    assert_eq!(v.get("text").as_str(), "Line1\nLine2");
}

#[test]
fn test_safe_navigation_never_fails() {
    let docs = [
        "null",
        "true",
        "42",
        "4.5",
        r#""text""#,
        "[1, [2]]",
        r#"{"k": {"k": null}}"#,
    ];
    for doc in docs {
        let v = parse(doc).unwrap();
        for key in ["missing", "", "K"] {
            assert!(v.get(key).is_null(), "{} / {}", doc, key);
        }
        if !v.is_array() {
            assert!(v.get(0).is_null(), "{}", doc);
        }
    }
}

#[test]
fn test_out_of_range_index_is_null() {
    let v = parse("[10, 20]").unwrap();
    for i in [-1i64, 2, 3, 1000, i64::MAX, i64::MIN] {
        assert!(v.get(i).is_null(), "index {}", i);
    }
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let v = parse(r#"{"x":1,"x":2}"#).unwrap();
    assert_eq!(v.get("x").as_number(), Number::I32(2));
    assert_eq!(v.as_object().len(), 1);
}

#[test]
fn test_number_classification() {
    let v = parse("[2147483647, 2147483648, -2147483648, -2147483649, 1.0]").unwrap();
    assert_eq!(v.get(0).as_number(), Number::I32(i32::MAX));
    assert_eq!(v.get(1).as_number(), Number::I64(2147483648));
    assert_eq!(v.get(2).as_number(), Number::I32(i32::MIN));
    assert_eq!(v.get(3).as_number(), Number::I64(-2147483649));
    assert_eq!(v.get(4).as_number(), Number::F64(1.0));
}

#[test]
fn test_number_conversions_match_consumer_usage() {
    let v = parse(r#"{"int":10,"float":12.5}"#).unwrap();
    assert_eq!(v.get("int").as_number().to_i32(), 10);
    assert_eq!(v.get("float").as_number().to_f64(), 12.5);
}

#[test]
fn test_order_document() {
    let order = parse(
        r#"{ "orderId": "ORD-001", "storeId": "S1", "discount": 0.1,
             "items": [
               {"product": "APPLE", "price": 1.2, "quantity": 3},
               {"product": "ORANGE", "price": 49.99, "quantity": 1}
             ]}"#,
    )
    .unwrap();

    assert_eq!(order.get("orderId").as_str(), "ORD-001");
    assert!(order.get("discount").is_number());
    let items = order.get("items");
    assert_eq!(items.len(), 2);
    let quantities: Vec<i32> = items
        .as_array()
        .iter()
        .map(|item| item.get("quantity").as_number().to_i32())
        .collect();
    assert_eq!(quantities, [3, 1]);
    assert!(items.get(0).get("sku").is_null());
}

#[test]
fn test_strict_option() {
    let input = r#"["\q"]"#;
    assert_eq!(parse(input).unwrap(), Value::Array(vec![Value::from("q")]));
    let err = parse_with_options(input, &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.to_string(), "Bad escaped character 'q' at 3");
}

#[test]
fn test_deep_nesting_parses_by_default() {
    let doc = format!("{}1{}", "[".repeat(200), "]".repeat(200));
    let v = parse(&doc).unwrap();
    assert_eq!(v.len(), 1);

    let bounded = ParseOptions::default().with_max_depth(Some(DEFAULT_MAX_DEPTH));
    let err = parse_with_options(&doc, &bounded).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 128, .. }));
}

#[test]
fn test_error_location() {
    let input = "{\n  \"a\": 1,\n  \"b\": ?\n}";
    let err = parse(input).unwrap_err();
    let loc = err.locate(input);
    assert_eq!((loc.line, loc.column), (3, 8));
}

#[test]
fn test_parsers_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let doc = format!(r#"{{"id": {}, "items": [{}, {}]}}"#, i, i * 2, i * 3);
                let v = Parser::new(&doc).parse().unwrap();
                (
                    v.get("id").as_number().to_i32(),
                    v.get("items").get(1).as_number().to_i32(),
                )
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = i as i32;
        assert_eq!(handle.join().unwrap(), (i, i * 3));
    }
}

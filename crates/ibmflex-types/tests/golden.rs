use ibmflex_types::{
    Attr, AttrType, BasicDiagnostic, Date, DateTime, ListValue, MapValue, SetValue, Severity,
    StringValue,
};
use serde_json::json;

#[test]
fn attr_type_serializes_to_golden_json() {
    let ty = AttrType::List(Box::new(AttrType::Map(Box::new(AttrType::String))));
    assert_eq!(
        serde_json::to_value(&ty).unwrap(),
        json!({"list": {"map": "string"}})
    );
    assert_eq!(ty.to_string(), "list[map[string]]");
}

#[test]
fn diagnostic_matches_expected_shape() {
    let diag = BasicDiagnostic::warning("Deprecated", "use `name`");
    assert_eq!(
        serde_json::to_value(&diag).unwrap(),
        json!({"severity": "warning", "summary": "Deprecated", "detail": "use `name`"})
    );
    assert_eq!(Severity::default(), Severity::Error);
}

#[test]
fn domain_types_render_canonically() {
    let date: Date = serde_json::from_value(json!("2025-01-01")).unwrap();
    assert_eq!(serde_json::to_value(date).unwrap(), json!("2025-01-01"));
    let dt: DateTime = "2025-01-20T12:00:00.198Z".parse().unwrap();
    assert_eq!(serde_json::to_value(dt).unwrap(), json!("2025-01-20T12:00:00.198Z"));
}

#[test]
fn container_rendering_is_deterministic() {
    let list: ListValue<StringValue> = vec![
        StringValue::known("b".into()),
        StringValue::Null,
    ]
    .into_iter()
    .collect();
    assert_eq!(list.render(), r#"["b",<null>]"#);

    let set: SetValue<StringValue> = vec![
        StringValue::known("b".into()),
        StringValue::known("a".into()),
        StringValue::known("b".into()),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.render(), r#"["a","b"]"#);

    let map: MapValue<StringValue> = vec![("k".to_string(), StringValue::Unknown)]
        .into_iter()
        .collect();
    assert_eq!(map.render(), r#"{"k":<unknown>}"#);
    assert!(ListValue::<StringValue>::null().is_null());
}

use pretty_assertions::assert_eq;
use rowmap::{db::Config, Row, Strictness, Value};

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.strictness, Strictness::Strict);
    assert_eq!(config.primary_key, "id");
}

#[test]
fn config_from_json() {
    let config: Config = serde_json::from_str(r#"{ "strictness": "lenient" }"#).unwrap();
    assert_eq!(config, Config::new().strictness(Strictness::Lenient));

    let config: Config = serde_json::from_str(r#"{ "primary_key": "uuid" }"#).unwrap();
    assert_eq!(config.strictness, Strictness::Strict);
    assert_eq!(config.primary_key, "uuid");
}

#[test]
fn rows_from_json() {
    let row: Row = serde_json::from_str(
        r#"{ "id": 42, "item_name": "Widget", "ppu": 2.5, "notes": null, "taxable": true }"#,
    )
    .unwrap();

    assert_eq!(row.get("id"), Some(&Value::I64(42)));
    assert_eq!(row.get("item_name"), Some(&Value::from("Widget")));
    assert_eq!(row.get("ppu"), Some(&Value::F64(2.5)));
    assert_eq!(row.get("notes"), Some(&Value::Null));
    assert_eq!(row.get("taxable"), Some(&Value::Bool(true)));

    let names: Vec<_> = row.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["id", "item_name", "ppu", "notes", "taxable"]);
}

#[test]
fn empty_primary_key_in_config_fails_the_build() {
    let mut builder = rowmap::Db::builder();
    builder.config(&Config::new().primary_key(""));
    builder.model("Order").define_schema(["total"]);

    let err = builder.build(rowmap::MemoryStore::new()).unwrap_err();
    assert!(err.is_invalid_schema());
}

//! # Declarative Config Tests
//!
//! `SerializerConfig` documents in YAML and JSON, converted into options and
//! exercised through a serializer.

use jss_serializer::{KeyCase, SerializeError, Serializer, SerializerConfig};
use serde_json::{json, Value};

const CONFIG_YAML: &str = r#"
inject_key: injects
null_through: false
empty_string_number_coerce_null: true
false_values: [false, "", 0, null, "no"]
schema_key_transform_for_input: snake_case
output_key_transform: lowercase
"#;

fn schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "userName": {"type": "string"},
            "loginCount": {"type": "integer"},
            "isActive": {"type": "boolean"}
        },
        "required": ["userName", "loginCount", "isActive"]
    })
}

#[test]
fn yaml_config_parses_with_aliases() {
    let config = SerializerConfig::from_yaml_str(CONFIG_YAML).unwrap();
    assert_eq!(config.inject_key.as_deref(), Some("injects"));
    assert!(config.empty_string_number_coerce_null);
    assert_eq!(config.input_key_transform, Some(KeyCase::SnakeCase));
    assert_eq!(config.output_key_transform, Some(KeyCase::Lowercase));
    assert_eq!(
        config.false_values,
        Some(vec![json!(false), json!(""), json!(0), Value::Null, json!("no")])
    );
}

#[test]
fn yaml_config_drives_serialization() {
    let config = SerializerConfig::from_yaml_str(CONFIG_YAML).unwrap();
    let serializer = Serializer::from_config(schema(), config).unwrap();
    let out = serializer
        .serialize(json!({"user_name": "ann", "login_count": "", "is_active": "no"}))
        .unwrap();
    assert_eq!(out, json!({"username": "ann", "logincount": null, "isactive": false}));
}

#[test]
fn json_config_is_equivalent() {
    let from_json = SerializerConfig::from_json_str(
        r#"{
            "inject_key": "injects",
            "empty_string_number_coerce_null": true,
            "false_values": [false, "", 0, null, "no"],
            "input_key_transform": "snake_case",
            "schema_key_transform_for_output": "lowercase"
        }"#,
    )
    .unwrap();
    let from_yaml = SerializerConfig::from_yaml_str(CONFIG_YAML).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn empty_config_is_default() {
    assert_eq!(SerializerConfig::from_yaml_str("{}").unwrap(), SerializerConfig::default());
    assert_eq!(SerializerConfig::from_json_str("{}").unwrap(), SerializerConfig::default());
}

#[test]
fn malformed_config_is_rejected() {
    let unknown_case = SerializerConfig::from_yaml_str("input_key_transform: kebab_case").unwrap_err();
    assert!(matches!(unknown_case, SerializeError::Config(_)));

    let unknown_field = SerializerConfig::from_json_str(r#"{"resolver": "x"}"#).unwrap_err();
    assert!(unknown_field.to_string().starts_with("invalid serializer config:"));
}

#[test]
fn config_round_trips_through_yaml() {
    let config = SerializerConfig::from_yaml_str(CONFIG_YAML).unwrap();
    let rendered = serde_yaml::to_string(&config).unwrap();
    assert_eq!(SerializerConfig::from_yaml_str(&rendered).unwrap(), config);
}

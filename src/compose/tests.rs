//! Composer tests

use super::*;
use crate::config::GenConfig;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn compose(config: GenConfig, document: &Value) -> crate::error::Result<String> {
    DocumentComposer::new(&config)?.compose(document)
}

fn zone_document() -> Value {
    json!({
        "example.com": {
            "name": "example.com",
            "type": "SOA",
            "ttl": 300,
            "content": "ns1.example.com. hostmaster.example.com. 1299682996 300 1800 604800 300"
        }
    })
}

const ZONE_STRUCT_BODY: &str = "\tContent string `json:\"content\"`\n\
                                \tName string `json:\"name\"`\n\
                                \tTTL int `json:\"ttl\"`\n\
                                \tType string `json:\"type\"`\n\
                                }\n";

#[test]
fn test_compose_basic() {
    let document = json!({
        "foo": "fooer",
        "bar": "bars",
        "biz": 1,
        "baz": 42.1,
        "foo_bar": "frood"
    });

    let source = compose(GenConfig::new("basic"), &document).unwrap();

    assert_eq!(
        source,
        "package main\n\n\
         type Basic struct {\n\
         \tBar string `json:\"bar\"`\n\
         \tBaz float64 `json:\"baz\"`\n\
         \tBiz int `json:\"biz\"`\n\
         \tFoo string `json:\"foo\"`\n\
         \tFooBar string `json:\"foo_bar\"`\n\
         }\n"
    );
}

#[test]
fn test_compose_root_list_uses_first_element() {
    let document = json!([
        {"foo": "fooer", "biz_id": 1},
        {"other": true}
    ]);

    let source = compose(GenConfig::new("BasicArr"), &document).unwrap();

    assert_eq!(
        source,
        "package main\n\n\
         type BasicArr struct {\n\
         \tBizID int `json:\"biz_id\"`\n\
         \tFoo string `json:\"foo\"`\n\
         }\n"
    );
}

#[test]
fn test_compose_slice_map() {
    let document = json!({
        "foo": [
            {"bar": "biz", "foo_bar": "frood"},
            {"bar": "baz", "foo_bar": "hoopy"}
        ]
    });

    let source = compose(GenConfig::new("SliceMap"), &document).unwrap();

    assert_eq!(
        source,
        "package main\n\n\
         type SliceMap struct {\n\
         \tFoos []Foo `json:\"foo\"`\n\
         }\n\
         \n\
         type Foo struct {\n\
         \tBar string `json:\"bar\"`\n\
         \tFooBar string `json:\"foo_bar\"`\n\
         }\n"
    );
}

#[test]
fn test_compose_map_type_default_struct_name() {
    let config = GenConfig::new("Zone").with_map_type(true);

    let source = compose(config, &zone_document()).unwrap();

    assert_eq!(
        source,
        format!(
            "package main\n\ntype Zone map[string]Struct\n\ntype Struct struct {{\n{ZONE_STRUCT_BODY}"
        )
    );
}

#[test]
fn test_compose_map_type_named_struct() {
    let config = GenConfig::new("zone")
        .with_map_type(true)
        .with_struct_name("domain");

    let source = compose(config, &zone_document()).unwrap();

    assert_eq!(
        source,
        format!(
            "package main\n\ntype Zone map[string]Domain\n\ntype Domain struct {{\n{ZONE_STRUCT_BODY}"
        )
    );
}

#[test]
fn test_compose_map_slice_type() {
    let document = json!({
        "example.com": [
            {
                "name": "example.com",
                "type": "SOA",
                "ttl": 300,
                "content": "ns1.example.com."
            }
        ]
    });
    let config = GenConfig::new("Zone").with_map_type(true);

    let source = compose(config, &document).unwrap();

    assert_eq!(
        source,
        format!(
            "package main\n\ntype Zone map[string][]Struct\n\ntype Struct struct {{\n{ZONE_STRUCT_BODY}"
        )
    );
}

#[test]
fn test_compose_package_and_import() {
    let config = GenConfig::new("Basic")
        .with_package("test")
        .with_import_json(true);

    let source = compose(config, &json!({"foo": "x"})).unwrap();

    assert_eq!(
        source,
        "package test\n\n\
         import (\n\t\"encoding/json\"\n)\n\n\
         type Basic struct {\n\
         \tFoo string `json:\"foo\"`\n\
         }\n"
    );
}

#[test]
fn test_compose_is_deterministic() {
    let document = json!({
        "widget": {"window": {"width": 500}, "image": {"src": "x"}},
        "id": 1
    });
    let first = compose(GenConfig::new("TestW"), &document).unwrap();
    let second = compose(GenConfig::new("TestW"), &document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_compose_null_field() {
    let source = compose(GenConfig::new("WNull"), &json!({"bar": null})).unwrap();
    assert!(source.contains("\tBar interface{} `json:\"bar\"`\n"));
}

#[test]
fn test_compose_requires_name() {
    let err = compose(GenConfig::default(), &json!({"a": 1})).unwrap_err();
    assert!(err.is_config_error(), "{err}");
}

#[test]
fn test_map_type_on_non_object() {
    let config = GenConfig::new("Zone").with_map_type(true);
    let err = compose(config, &json!("just a string")).unwrap_err();
    assert!(
        matches!(err, Error::Shape { ref found, .. } if found == "string"),
        "{err}"
    );
}

#[test]
fn test_map_type_on_empty_object() {
    let config = GenConfig::new("Zone").with_map_type(true);
    let err = compose(config, &json!({})).unwrap_err();
    assert!(err.is_shape_error(), "{err}");
}

#[test]
fn test_map_type_with_scalar_values() {
    let config = GenConfig::new("Zone").with_map_type(true);
    let err = compose(config, &json!({"a": 1})).unwrap_err();
    assert!(
        matches!(err, Error::Shape { ref found, .. } if found == "number"),
        "{err}"
    );
}

#[test]
fn test_map_type_with_empty_list_value() {
    let config = GenConfig::new("Zone").with_map_type(true);
    let err = compose(config, &json!({"a": []})).unwrap_err();
    assert!(matches!(err, Error::EmptyList { .. }), "{err}");
}

#[test]
fn test_record_mode_on_non_object() {
    let err = compose(GenConfig::new("Basic"), &json!([1, 2])).unwrap_err();
    assert!(
        matches!(err, Error::Shape { ref found, .. } if found == "number"),
        "{err}"
    );
}

#[test]
fn test_empty_root_list() {
    let err = compose(GenConfig::new("Basic"), &json!([])).unwrap_err();
    assert!(matches!(err, Error::EmptyList { .. }), "{err}");
}

#[test]
fn test_no_partial_output_on_nested_failure() {
    let document = json!({"ok": 1, "nested": {"matrix": [[1]]}});
    let err = compose(GenConfig::new("Basic"), &document).unwrap_err();
    assert!(matches!(err, Error::NestedList { .. }), "{err}");
}

#[test]
fn test_representative_sample() {
    let document = json!([{"a": 1}, {"b": 2}]);
    assert_eq!(representative_sample(&document).unwrap(), &json!({"a": 1}));

    let document = json!({"a": 1});
    assert_eq!(representative_sample(&document).unwrap(), &document);

    assert!(representative_sample(&json!([])).is_err());
}

#[test]
fn test_map_type_alias_clashes_with_record() {
    let config = GenConfig::new("Zone")
        .with_map_type(true)
        .with_struct_name("zone");
    let err = compose(config, &zone_document()).unwrap_err();
    assert!(matches!(err, Error::DuplicateRecord { ref name } if name == "Zone"), "{err}");
}

#[test]
fn test_map_type_alias_clashes_with_nested_record() {
    let document = json!({"example.com": {"zone": {"id": 1}}});
    let config = GenConfig::new("Zone").with_map_type(true);
    let err = compose(config, &document).unwrap_err();
    assert!(matches!(err, Error::DuplicateRecord { ref name } if name == "Zone"), "{err}");
}

#[test]
fn test_colliding_keys_produce_no_output() {
    let err = compose(GenConfig::new("T"), &json!({"foo_bar": 1, "fooBar": 2})).unwrap_err();
    assert!(matches!(err, Error::DuplicateField { .. }), "{err}");
}

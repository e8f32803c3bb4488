//! Tests for property parsing: typed values, text bodies and the error
//! split between attribute and literal failures.

use std::path::{Path, PathBuf};

use tmx_core::{Color, Error};
use tmx_parser::{Properties, Value, parse_tmx};

fn parse_properties(properties: &str) -> tmx_core::Result<Properties> {
    let xml = format!(
        r#"<map version="1.0" orientation="orthogonal" width="1" height="1"
                tilewidth="16" tileheight="16" nextobjectid="1">
              <properties>
                {properties}
              </properties>
            </map>"#
    );
    Ok(parse_tmx(&xml, Path::new("."))?.properties)
}

fn parse_value(property: &str) -> tmx_core::Result<Value> {
    let mut properties = parse_properties(property)?;
    Ok(properties.remove(0).value)
}

#[test]
fn test_untyped_property_is_string() {
    let properties =
        parse_properties(r#"<property name="author" value="someone"/>"#).unwrap();
    assert_eq!(properties[0].name.get(), "author");
    assert_eq!(properties[0].value, Value::String("someone".to_string()));
}

#[test]
fn test_typed_values() {
    assert_eq!(
        parse_value(r#"<property name="p" type="int" value="-3"/>"#).unwrap(),
        Value::Int(-3)
    );
    assert_eq!(
        parse_value(r#"<property name="p" type="float" value="0.5"/>"#).unwrap(),
        Value::Float(0.5)
    );
    assert_eq!(
        parse_value(r##"<property name="p" type="color" value="#80ff0000"/>"##).unwrap(),
        Value::Color(Color { a: 0x80, r: 0xff, g: 0x00, b: 0x00 })
    );
    assert_eq!(
        parse_value(r#"<property name="p" type="file" value="../art/hero.png"/>"#).unwrap(),
        Value::File(PathBuf::from("../art/hero.png"))
    );
}

#[test]
fn test_bool_values() {
    assert_eq!(
        parse_value(r#"<property name="p" type="bool" value="true"/>"#).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        parse_value(r#"<property name="p" type="bool" value="0"/>"#).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn test_bad_bool_is_text_conversion() {
    // Bad typed literals are conversion failures; only the type tag itself
    // fails as an attribute error.
    let err = parse_value(r#"<property name="p" type="bool" value="yes"/>"#).unwrap_err();
    assert!(matches!(err, Error::TextConversion(_)));

    let err = parse_value(r#"<property name="p" type="int" value="yes"/>"#).unwrap_err();
    assert!(matches!(err, Error::TextConversion(_)));
}

#[test]
fn test_missing_value_reads_text_body() {
    let value = parse_value(r#"<property name="note">multi
line</property>"#)
        .unwrap();
    assert_eq!(value, Value::String("multi\nline".to_string()));
}

#[test]
fn test_unknown_type_is_invalid_attribute() {
    let err = parse_value(r#"<property name="p" type="object" value="3"/>"#).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAttribute { name, value } if name == "type" && value == "object"
    ));
}

#[test]
fn test_empty_name_is_invalid_attribute() {
    let err = parse_properties(r#"<property name="" value="x"/>"#).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAttribute { name, .. } if name == "name"
    ));
}

#[test]
fn test_bad_color_value_is_text_conversion() {
    let err = parse_value(r##"<property name="p" type="color" value="#12345"/>"##).unwrap_err();
    assert!(matches!(err, Error::TextConversion(_)));
}

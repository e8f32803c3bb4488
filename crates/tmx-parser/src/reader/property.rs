//! Property set readers.

use tmx_core::{Error, NonEmptyString, Result};

use crate::model::{Properties, Property, Value};
use crate::reader::{helpers, names};
use crate::xml::Element;

/// Reads the optional `<properties>` child of any entity element.
pub(crate) fn read_properties(element: &Element) -> Result<Properties> {
    let Some(properties) = element.opt_child(names::PROPERTIES) else {
        return Ok(Vec::new());
    };

    properties
        .children(names::PROPERTY)
        .map(read_property)
        .collect()
}

fn read_property(property: &Element) -> Result<Property> {
    Ok(Property {
        name: read_name(property)?,
        value: read_value(property)?,
    })
}

fn read_name(property: &Element) -> Result<NonEmptyString> {
    let raw = property.attribute(names::NAME)?;
    NonEmptyString::new(raw).map_err(|_| helpers::invalid(names::NAME, raw))
}

fn read_value(property: &Element) -> Result<Value> {
    // No value attribute: the value is the element's own text body.
    let Some(value) = property.opt_attribute(names::PROPERTY_VALUE) else {
        return Ok(Value::String(property.text().to_string()));
    };

    let kind = property
        .opt_attribute(names::PROPERTY_TYPE)
        .unwrap_or(names::TYPE_STRING);

    match kind {
        names::TYPE_STRING => Ok(Value::String(value.to_string())),
        names::TYPE_INT => Ok(Value::Int(helpers::parse(value)?)),
        names::TYPE_FLOAT => Ok(Value::Float(helpers::parse(value)?)),
        // A third literal is a generic conversion failure, not an
        // attribute error; callers rely on the distinction.
        names::TYPE_BOOL => helpers::parse_bool(value).map(Value::Bool).ok_or_else(|| {
            Error::TextConversion(format!("bad boolean property value: \"{value}\""))
        }),
        names::TYPE_COLOR => Ok(Value::Color(value.parse()?)),
        names::TYPE_FILE => Ok(Value::File(value.into())),
        _ => Err(helpers::invalid(names::PROPERTY_TYPE, kind)),
    }
}

//! Attribute parsing helpers shared by the element readers.
//!
//! Failures tied to a named attribute surface as
//! [`Error::InvalidAttribute`]; free-standing literal failures (CSV tokens,
//! boolean property values) surface as [`Error::TextConversion`].

use std::fmt;
use std::str::FromStr;

use tmx_core::{Error, GridSize, NonNegative, Offset, PixelSize, Positive, Result, Size};

use crate::reader::names;
use crate::xml::Element;

/// Builds the error for a present-but-unusable attribute.
pub(crate) fn invalid(name: &str, value: &str) -> Error {
    Error::InvalidAttribute {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Parses a free-standing literal, failing with [`Error::TextConversion`].
pub(crate) fn parse<T: FromStr>(text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| Error::TextConversion(format!("bad literal: \"{text}\"")))
}

/// Parses a required attribute into the target primitive.
pub(crate) fn attribute<T: FromStr>(element: &Element, name: &str) -> Result<T> {
    let raw = element.attribute(name)?;
    raw.trim().parse().map_err(|_| invalid(name, raw))
}

/// Parses an optional attribute into the target primitive.
pub(crate) fn opt_attribute<T: FromStr>(element: &Element, name: &str) -> Result<Option<T>> {
    match element.opt_attribute(name) {
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| invalid(name, raw)),
        None => Ok(None),
    }
}

/// Interprets the wire forms of a boolean literal.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parses an optional boolean attribute, e.g. `visible`.
pub(crate) fn bool_attribute(element: &Element, name: &str, default: bool) -> Result<bool> {
    match element.opt_attribute(name) {
        Some(raw) => parse_bool(raw).ok_or_else(|| invalid(name, raw)),
        None => Ok(default),
    }
}

/// Parses a required attribute and wraps it as a positive value.
pub(crate) fn positive_attribute<T>(element: &Element, name: &str) -> Result<Positive<T>>
where
    T: FromStr + Copy + PartialOrd + Default + fmt::Debug,
{
    let raw = element.attribute(name)?;
    let value: T = raw.trim().parse().map_err(|_| invalid(name, raw))?;
    Positive::new(value).map_err(|_| invalid(name, raw))
}

/// Parses an optional attribute and wraps it as a non-negative value,
/// defaulting to zero when absent.
pub(crate) fn non_negative_attribute<T>(element: &Element, name: &str) -> Result<NonNegative<T>>
where
    T: FromStr + Copy + PartialOrd + Default + fmt::Debug,
{
    match element.opt_attribute(name) {
        Some(raw) => {
            let value: T = raw.trim().parse().map_err(|_| invalid(name, raw))?;
            NonNegative::new(value).map_err(|_| invalid(name, raw))
        }
        None => NonNegative::new(T::default()),
    }
}

/// Reads the `width`/`height` pair as a grid size.
pub(crate) fn grid_size(element: &Element) -> Result<GridSize> {
    Ok(Size {
        w: positive_attribute(element, names::WIDTH)?,
        h: positive_attribute(element, names::HEIGHT)?,
    })
}

/// Reads the `tilewidth`/`tileheight` pair as a pixel size.
pub(crate) fn tile_size(element: &Element) -> Result<PixelSize> {
    Ok(Size {
        w: positive_attribute(element, names::TILE_WIDTH)?,
        h: positive_attribute(element, names::TILE_HEIGHT)?,
    })
}

/// Reads the optional `width`/`height` pair of images and objects.
///
/// The two attributes must appear together: one without the other fails
/// with [`Error::MissingAttribute`] naming the absent one.
pub(crate) fn opt_pixel_size(element: &Element) -> Result<Option<PixelSize>> {
    match (
        element.opt_attribute(names::WIDTH),
        element.opt_attribute(names::HEIGHT),
    ) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(Error::MissingAttribute {
            name: names::HEIGHT.to_string(),
        }),
        (None, Some(_)) => Err(Error::MissingAttribute {
            name: names::WIDTH.to_string(),
        }),
        (Some(_), Some(_)) => Ok(Some(Size {
            w: positive_attribute(element, names::WIDTH)?,
            h: positive_attribute(element, names::HEIGHT)?,
        })),
    }
}

/// Reads a pixel displacement from a pair of optional attributes.
pub(crate) fn offset(element: &Element, x_name: &str, y_name: &str) -> Result<Offset> {
    Ok(Offset {
        x: opt_attribute(element, x_name)?.unwrap_or(0.0),
        y: opt_attribute(element, y_name)?.unwrap_or(0.0),
    })
}

/// Parses an optional color attribute.
pub(crate) fn opt_color(element: &Element, name: &str) -> Result<Option<tmx_core::Color>> {
    match element.opt_attribute(name) {
        Some(raw) => raw.parse().map(Some).map_err(|_| invalid(name, raw)),
        None => Ok(None),
    }
}

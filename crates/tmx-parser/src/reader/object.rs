//! Object readers: placement, shape dispatch and tile references.

use tmx_core::{FlippedGlobalId, Point, Result, UniqueId, geometry::parse_points};

use crate::model::{Object, Shape};
use crate::reader::property::read_properties;
use crate::reader::{helpers, names};
use crate::xml::Element;

pub(crate) fn read_object(object: &Element) -> Result<Object> {
    Ok(Object {
        id: UniqueId(helpers::attribute(object, names::OBJECT_ID)?),
        name: object.opt_attribute(names::NAME).unwrap_or_default().to_string(),
        kind: object
            .opt_attribute(names::OBJECT_TYPE)
            .unwrap_or_default()
            .to_string(),
        position: read_position(object)?,
        shape: read_shape(object)?,
        rotation: helpers::opt_attribute(object, names::ROTATION)?.unwrap_or(0.0),
        tile: helpers::opt_attribute(object, names::GLOBAL_ID)?.map(FlippedGlobalId),
        visible: helpers::bool_attribute(object, names::VISIBLE, true)?,
        properties: read_properties(object)?,
    })
}

fn read_position(object: &Element) -> Result<Point> {
    Ok(Point {
        x: helpers::attribute(object, names::X)?,
        y: helpers::attribute(object, names::Y)?,
    })
}

/// Shape dispatch, in priority order: polyline, polygon, then (when a size
/// is present) ellipse or rectangle, else none (a point object).
fn read_shape(object: &Element) -> Result<Option<Shape>> {
    if let Some(polyline) = object.opt_child(names::POLYLINE) {
        return Ok(Some(Shape::Polyline {
            points: read_points(polyline)?,
        }));
    }

    if let Some(polygon) = object.opt_child(names::POLYGON) {
        return Ok(Some(Shape::Polygon {
            points: read_points(polygon)?,
        }));
    }

    let Some(size) = helpers::opt_pixel_size(object)? else {
        return Ok(None);
    };

    if object.opt_child(names::ELLIPSE).is_some() {
        Ok(Some(Shape::Ellipse { size }))
    } else {
        Ok(Some(Shape::Rectangle { size }))
    }
}

fn read_points(poly: &Element) -> Result<Vec<Point>> {
    parse_points(poly.attribute(names::POINTS)?)
}

//! Objects placed on object layers.

use tmx_core::{FlippedGlobalId, PixelSize, Point, UniqueId};

use crate::model::Properties;

/// A placed object.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub id: UniqueId,
    pub name: String,
    /// Free-form type tag assigned in the editor.
    pub kind: String,
    /// Anchor point of the object, in pixels.
    pub position: Point,
    /// `None` makes this a point object.
    pub shape: Option<Shape>,
    /// Clockwise rotation in degrees around the anchor point.
    pub rotation: f32,
    /// Tile graphic shown at the object's position, flip flags included.
    pub tile: Option<FlippedGlobalId>,
    pub visible: bool,
    pub properties: Properties,
}

/// Geometric shape of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle { size: PixelSize },
    Ellipse { size: PixelSize },
    Polygon { points: Vec<Point> },
    Polyline { points: Vec<Point> },
}

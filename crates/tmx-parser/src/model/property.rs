//! Named properties attached to maps, tile sets, layers, objects and tiles.

use std::path::PathBuf;

use tmx_core::{Color, NonEmptyString};

/// The property set of one entity.
pub type Properties = Vec<Property>;

/// A single named property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: NonEmptyString,
    pub value: Value,
}

/// The value alternatives a property can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i32),
    Float(f64),
    Bool(bool),
    Color(Color),
    /// A file reference, kept as written in the document.
    File(PathBuf),
}

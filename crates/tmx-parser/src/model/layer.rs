//! Map layers and the decoded tile-layer payload.

use std::fmt;

use tmx_core::{Color, FlippedGlobalId, GridSize, Offset, UnitInterval};

use crate::model::{Image, Object, Properties};

/// A map layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Tile(TileLayer),
    Object(ObjectLayer),
    Image(ImageLayer),
}

impl Layer {
    /// Returns the fields shared by every layer kind.
    #[must_use]
    pub fn common(&self) -> &LayerCommon {
        match self {
            Self::Tile(layer) => &layer.common,
            Self::Object(layer) => &layer.common,
            Self::Image(layer) => &layer.common,
        }
    }
}

/// Fields shared by every layer kind.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerCommon {
    pub name: String,
    pub opacity: UnitInterval,
    pub visible: bool,
    pub offset: Offset,
    pub properties: Properties,
}

/// A layer of tile placements.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub common: LayerCommon,
    /// Layer size in tiles.
    pub size: GridSize,
    pub data: Data,
}

/// A layer of freely placed objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLayer {
    pub common: LayerCommon,
    /// Tint applied to the layer's objects.
    pub color: Option<Color>,
    pub draw_order: DrawOrder,
    pub objects: Vec<Object>,
}

/// The order objects of an object layer are drawn in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawOrder {
    /// Sorted by the objects' y position.
    #[default]
    TopDown,
    /// Document order.
    Index,
}

/// A layer showing a single image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    pub common: LayerCommon,
    pub image: Option<Image>,
}

/// A decoded tile-layer payload: one flipped global identifier per map
/// cell, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    pub format: DataFormat,
    pub ids: Vec<FlippedGlobalId>,
}

/// The declared wire format of a `<data>` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat {
    pub encoding: Encoding,
    pub compression: Compression,
}

/// Text encoding of a `<data>` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Csv,
    Base64,
}

/// Compression applied to a base64 `<data>` payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    #[default]
    None,
    Zlib,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Base64 => "base64",
        })
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Zlib => "zlib",
        })
    }
}

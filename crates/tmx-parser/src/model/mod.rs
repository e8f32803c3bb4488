//! The immutable TMX document model.
//!
//! Every entity is constructed once, bottom-up, during a single parse pass
//! and never mutated afterwards. Closed alternatives of the format (map
//! orientation, layer kind, object shape, property value, tile set versus
//! image collection) are sum types.

mod layer;
mod map;
mod object;
mod property;
mod tileset;

pub use layer::{
    Compression, Data, DataFormat, DrawOrder, Encoding, ImageLayer, Layer, LayerCommon,
    ObjectLayer, TileLayer,
};
pub use map::{Axis, Map, MapTileSet, Orientation, RenderOrder, StaggerIndex};
pub use object::{Object, Shape};
pub use property::{Properties, Property, Value};
pub use tileset::{
    Animation, Frame, Image, ImageCollection, ImageCollectionTile, TileSet, TileSetTile,
};

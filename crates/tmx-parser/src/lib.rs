//! Reader for Tiled TMX/TSX tile-map documents.
//!
//! This crate turns an XML map document into the strongly-typed,
//! invariant-checked model of [`model`]: a single synchronous pass over the
//! element tree, built bottom-up, aborted on the first error. Externally
//! referenced tile sets (TSX) are resolved recursively relative to the
//! containing document, bounded against reference cycles.

pub mod model;
mod reader;
pub mod xml;

use std::path::Path;

use tmx_core::{Error, GlobalTileId, Result};

pub use model::{
    Animation, Axis, Compression, Data, DataFormat, DrawOrder, Encoding, Frame, Image,
    ImageCollection, ImageCollectionTile, ImageLayer, Layer, LayerCommon, Map, MapTileSet, Object,
    ObjectLayer, Orientation, Properties, Property, RenderOrder, Shape, StaggerIndex, TileLayer,
    TileSet, TileSetTile, Value,
};

use crate::reader::{Context, names};
use crate::xml::{Document, Element};

/// Parses the map document at `path`.
///
/// External tile-set references are resolved relative to the document's
/// directory.
///
/// # Errors
/// Returns an error when the document cannot be loaded, its root is not a
/// `<map>` element, or any element fails to decode.
pub fn read_tmx(path: &Path) -> Result<Map> {
    let document = Document::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    read_root_map(document.root(), base_dir)
}

/// Parses a map document from its full text.
///
/// `base_dir` anchors the resolution of external tile-set references.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tmx_parser::parse_tmx;
///
/// let xml = r#"
/// <map version="1.0" orientation="orthogonal" width="2" height="1"
///      tilewidth="16" tileheight="16" nextobjectid="1">
///   <layer name="ground" width="2" height="1">
///     <data encoding="csv">1,2</data>
///   </layer>
/// </map>"#;
///
/// let map = parse_tmx(xml, Path::new(".")).unwrap();
/// assert_eq!(map.layers.len(), 1);
/// ```
pub fn parse_tmx(xml: &str, base_dir: &Path) -> Result<Map> {
    let document = Document::parse(xml)?;
    read_root_map(document.root(), base_dir)
}

/// Loads a standalone tile-set document, classifying it as a sheet tile
/// set or an image collection.
///
/// `first_id` is the global identifier the parent map assigns to the tile
/// set's first tile. Also used internally to resolve external references.
pub fn read_tsx(first_id: GlobalTileId, source: &Path, base_dir: &Path) -> Result<MapTileSet> {
    reader::tileset::read_external(first_id, source, &Context::new(base_dir))
}

/// Loads a standalone sheet tile set.
///
/// # Errors
/// [`Error::InvalidElement`] when the referenced root is not a `<tileset>`
/// element or lacks the sheet `<image>`.
pub fn read_tile_set(first_id: GlobalTileId, source: &Path, base_dir: &Path) -> Result<TileSet> {
    let document = Document::load(&base_dir.join(source))?;
    let root = require_tile_set_root(document.root())?;
    reader::tileset::read_tile_set(root, first_id, Some(source.to_path_buf()))
}

/// Loads a standalone image collection.
///
/// # Errors
/// [`Error::InvalidElement`] when the referenced root is not a `<tileset>`
/// element, or carries the sheet `<image>` that marks a sheet tile set.
pub fn read_image_collection(
    first_id: GlobalTileId,
    source: &Path,
    base_dir: &Path,
) -> Result<ImageCollection> {
    let document = Document::load(&base_dir.join(source))?;
    let root = require_tile_set_root(document.root())?;
    if reader::tileset::is_tile_set(root) {
        return Err(Error::InvalidElement {
            tag: names::IMAGE.to_string(),
        });
    }
    reader::tileset::read_image_collection(root, first_id, Some(source.to_path_buf()))
}

fn read_root_map(root: &Element, base_dir: &Path) -> Result<Map> {
    if root.name() != names::MAP {
        return Err(Error::InvalidElement {
            tag: root.name().to_string(),
        });
    }
    reader::map::read_map(root, &Context::new(base_dir))
}

fn require_tile_set_root(root: &Element) -> Result<&Element> {
    if root.name() != names::TILE_SET {
        return Err(Error::InvalidElement {
            tag: root.name().to_string(),
        });
    }
    Ok(root)
}

//! The map document and its top-level variants.

use tmx_core::{Color, GridSize, PixelSize, UniqueId};

use crate::model::{ImageCollection, Layer, Properties, TileSet};

/// A complete parsed map document.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub version: String,
    pub orientation: Orientation,
    pub render_order: RenderOrder,
    /// Grid size in tiles.
    pub size: GridSize,
    /// Size of one tile in pixels.
    pub tile_size: PixelSize,
    pub background: Option<Color>,
    /// The id the editor will hand to the next placed object. A plain
    /// stored value, not process-wide state.
    pub next_id: UniqueId,
    pub properties: Properties,
    pub tile_sets: Vec<MapTileSet>,
    pub layers: Vec<Layer>,
}

/// How tile coordinates project onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    Orthogonal,
    Isometric,
    Staggered {
        axis: Axis,
        index: StaggerIndex,
    },
    Hexagonal {
        axis: Axis,
        index: StaggerIndex,
        /// Length of the flat hexagon side, in pixels.
        side_length: f32,
    },
}

/// The staggered axis of a staggered or hexagonal map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Which rows or columns along the staggered axis are shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerIndex {
    Even,
    Odd,
}

/// The order in which tiles of a tile layer are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderOrder {
    #[default]
    RightDown,
    RightUp,
    LeftDown,
    LeftUp,
}

/// A tile palette referenced by a map: either a sheet-sliced tile set or a
/// collection of per-tile images.
#[derive(Debug, Clone, PartialEq)]
pub enum MapTileSet {
    TileSet(TileSet),
    ImageCollection(ImageCollection),
}

//! Tile sets, image collections and their per-tile overrides.

use std::path::PathBuf;
use std::time::Duration;

use tmx_core::{Color, GlobalTileId, GridSize, LocalTileId, NonNegative, Offset, PixelSize};

use crate::model::{ObjectLayer, Properties};

/// A sheet-based tile set: one shared image, tiles addressed by their grid
/// position within it.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    /// Global identifier of the tile set's first tile within the map.
    pub first_id: GlobalTileId,
    /// Path of the external TSX document this tile set was loaded from, if
    /// any.
    pub source: Option<PathBuf>,
    pub name: String,
    pub tile_size: PixelSize,
    /// Pixels between neighbouring tiles in the sheet image.
    pub spacing: NonNegative<f32>,
    /// Pixels between the sheet image border and the first tile.
    pub margin: NonNegative<f32>,
    /// Tile grid of the sheet: columns by tile-count / columns.
    pub grid: GridSize,
    pub offset: Offset,
    pub properties: Properties,
    pub image: Image,
    pub tiles: Vec<TileSetTile>,
}

/// Per-tile overrides within a [`TileSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct TileSetTile {
    pub id: LocalTileId,
    pub properties: Properties,
    /// Collision shapes, stored as an object layer.
    pub collision: Option<ObjectLayer>,
    pub animation: Option<Animation>,
}

/// A tile set where every tile owns its own image instead of sharing one
/// sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCollection {
    pub first_id: GlobalTileId,
    pub source: Option<PathBuf>,
    pub name: String,
    pub tile_size: PixelSize,
    pub tile_count: NonNegative<i32>,
    pub columns: NonNegative<i32>,
    pub offset: Offset,
    pub properties: Properties,
    pub tiles: Vec<ImageCollectionTile>,
}

/// One tile of an [`ImageCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCollectionTile {
    pub id: LocalTileId,
    pub properties: Properties,
    pub image: Image,
    pub collision: Option<ObjectLayer>,
    pub animation: Option<Animation>,
}

/// A reference to an image file.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub source: PathBuf,
    /// Color rendered as transparent.
    pub transparent: Option<Color>,
    pub size: Option<PixelSize>,
}

/// An ordered list of animation frames cycling on a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub frames: Vec<Frame>,
}

/// One frame of a tile animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The tile shown during this frame, local to the owning tile set.
    pub id: LocalTileId,
    pub duration: NonNegative<Duration>,
}

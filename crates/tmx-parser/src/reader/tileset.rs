//! Tile-set readers: sheet tile sets, image collections, per-tile
//! overrides and external TSX resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tmx_core::{Error, GlobalTileId, GridSize, LocalTileId, NonNegative, Offset, Result, Size};

use crate::model::{
    Animation, Frame, Image, ImageCollection, ImageCollectionTile, MapTileSet, ObjectLayer,
    TileSet, TileSetTile,
};
use crate::reader::layer::read_object_layer;
use crate::reader::property::read_properties;
use crate::reader::{Context, helpers, names};
use crate::xml::{Document, Element};

/// Classifies a tile-set element: a direct `<image>` child makes it a sheet
/// tile set, otherwise it is an image collection. This runs before field
/// extraction since the two forms have different required fields.
pub(crate) fn is_tile_set(element: &Element) -> bool {
    element.opt_child(names::IMAGE).is_some()
}

/// Reads one `<tileset>` entry of a map, resolving an external reference
/// when the element carries a `source` attribute.
pub(crate) fn read_map_tile_set(element: &Element, ctx: &Context) -> Result<MapTileSet> {
    let first_id = GlobalTileId(helpers::attribute(element, names::FIRST_ID)?);

    match element.opt_attribute(names::SOURCE) {
        None => {
            if is_tile_set(element) {
                Ok(MapTileSet::TileSet(read_tile_set(element, first_id, None)?))
            } else {
                Ok(MapTileSet::ImageCollection(read_image_collection(
                    element, first_id, None,
                )?))
            }
        }
        Some(source) => read_external(first_id, Path::new(source), ctx),
    }
}

/// Loads an externally referenced tile-set document and rebuilds it with
/// the parent-supplied first identifier.
pub(crate) fn read_external(
    first_id: GlobalTileId,
    source: &Path,
    ctx: &Context,
) -> Result<MapTileSet> {
    let ctx = ctx.descend(source)?;
    let path = ctx.resolve(source);
    let document = Document::load(&path)?;
    let root = document.root();

    if root.name() != names::TILE_SET {
        return Err(Error::InvalidElement {
            tag: root.name().to_string(),
        });
    }

    // A chained reference resolves relative to this document's directory.
    if let Some(nested) = root.opt_attribute(names::SOURCE) {
        let nested_ctx = ctx.rebase(&path);
        return read_external(first_id, Path::new(nested), &nested_ctx);
    }

    let source = Some(source.to_path_buf());
    if is_tile_set(root) {
        Ok(MapTileSet::TileSet(read_tile_set(root, first_id, source)?))
    } else {
        Ok(MapTileSet::ImageCollection(read_image_collection(
            root, first_id, source,
        )?))
    }
}

/// Reads a sheet-based tile set.
pub(crate) fn read_tile_set(
    element: &Element,
    first_id: GlobalTileId,
    source: Option<PathBuf>,
) -> Result<TileSet> {
    Ok(TileSet {
        first_id,
        source,
        name: element.opt_attribute(names::NAME).unwrap_or_default().to_string(),
        tile_size: helpers::tile_size(element)?,
        spacing: helpers::non_negative_attribute(element, names::SPACING)?,
        margin: helpers::non_negative_attribute(element, names::MARGIN)?,
        grid: read_grid(element)?,
        offset: read_tile_offset(element)?,
        properties: read_properties(element)?,
        image: read_image(element.child(names::IMAGE)?)?,
        tiles: element
            .children(names::TILE)
            .map(read_tile)
            .collect::<Result<_>>()?,
    })
}

/// Reads a tile set whose tiles each own their image.
pub(crate) fn read_image_collection(
    element: &Element,
    first_id: GlobalTileId,
    source: Option<PathBuf>,
) -> Result<ImageCollection> {
    Ok(ImageCollection {
        first_id,
        source,
        name: element.opt_attribute(names::NAME).unwrap_or_default().to_string(),
        tile_size: helpers::tile_size(element)?,
        tile_count: required_non_negative(element, names::TILE_COUNT)?,
        columns: required_non_negative(element, names::COLUMNS)?,
        offset: read_tile_offset(element)?,
        properties: read_properties(element)?,
        tiles: element
            .children(names::TILE)
            .map(read_collection_tile)
            .collect::<Result<_>>()?,
    })
}

/// Reads an `<image>` element.
pub(crate) fn read_image(image: &Element) -> Result<Image> {
    Ok(Image {
        source: image.attribute(names::SOURCE)?.into(),
        transparent: helpers::opt_color(image, names::TRANSPARENT)?,
        size: helpers::opt_pixel_size(image)?,
    })
}

/// Derives the sheet grid: columns wide, tile-count over columns tall.
/// Zero columns would divide by zero and is rejected up front.
fn read_grid(tile_set: &Element) -> Result<GridSize> {
    let tile_count = required_non_negative(tile_set, names::TILE_COUNT)?.get();

    let raw = tile_set.attribute(names::COLUMNS)?;
    let columns: i32 = raw
        .trim()
        .parse()
        .map_err(|_| helpers::invalid(names::COLUMNS, raw))?;
    if columns <= 0 {
        return Err(helpers::invalid(names::COLUMNS, raw));
    }

    Size::new(columns, tile_count / columns)
        .map_err(|_| helpers::invalid(names::TILE_COUNT, &tile_count.to_string()))
}

fn required_non_negative(element: &Element, name: &str) -> Result<NonNegative<i32>> {
    let raw = element.attribute(name)?;
    let value: i32 = raw.trim().parse().map_err(|_| helpers::invalid(name, raw))?;
    NonNegative::new(value).map_err(|_| helpers::invalid(name, raw))
}

fn read_tile_offset(tile_set: &Element) -> Result<Offset> {
    match tile_set.opt_child(names::TILE_OFFSET) {
        Some(offset) => helpers::offset(offset, names::X, names::Y),
        None => Ok(Offset::default()),
    }
}

fn read_tile(tile: &Element) -> Result<TileSetTile> {
    Ok(TileSetTile {
        id: LocalTileId(helpers::attribute(tile, names::TILE_ID)?),
        properties: read_properties(tile)?,
        collision: read_collision(tile)?,
        animation: read_animation(tile)?,
    })
}

fn read_collection_tile(tile: &Element) -> Result<ImageCollectionTile> {
    Ok(ImageCollectionTile {
        id: LocalTileId(helpers::attribute(tile, names::TILE_ID)?),
        properties: read_properties(tile)?,
        image: read_image(tile.child(names::IMAGE)?)?,
        collision: read_collision(tile)?,
        animation: read_animation(tile)?,
    })
}

fn read_collision(tile: &Element) -> Result<Option<ObjectLayer>> {
    tile.opt_child(names::OBJECT_LAYER)
        .map(read_object_layer)
        .transpose()
}

fn read_animation(tile: &Element) -> Result<Option<Animation>> {
    let Some(animation) = tile.opt_child(names::ANIMATION) else {
        return Ok(None);
    };

    let frames = animation
        .children(names::FRAME)
        .map(read_frame)
        .collect::<Result<_>>()?;
    Ok(Some(Animation { frames }))
}

fn read_frame(frame: &Element) -> Result<Frame> {
    let millis: u64 = helpers::attribute(frame, names::FRAME_DURATION)?;
    Ok(Frame {
        id: LocalTileId(helpers::attribute(frame, names::FRAME_TILE_ID)?),
        duration: NonNegative::new(Duration::from_millis(millis))?,
    })
}

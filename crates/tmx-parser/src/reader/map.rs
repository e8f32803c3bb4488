//! The map reader: top-level attributes, tile-set entries and layers.

use tmx_core::{Result, UniqueId};

use crate::model::{Axis, Layer, Map, Orientation, RenderOrder, StaggerIndex};
use crate::reader::layer::read_layer;
use crate::reader::property::read_properties;
use crate::reader::tileset::read_map_tile_set;
use crate::reader::{Context, helpers, names};
use crate::xml::Element;

pub(crate) fn read_map(map: &Element, ctx: &Context) -> Result<Map> {
    Ok(Map {
        version: map.attribute(names::VERSION)?.to_string(),
        orientation: read_orientation(map)?,
        render_order: read_render_order(map)?,
        size: helpers::grid_size(map)?,
        tile_size: helpers::tile_size(map)?,
        background: helpers::opt_color(map, names::BACKGROUND)?,
        next_id: UniqueId(helpers::attribute(map, names::NEXT_ID)?),
        properties: read_properties(map)?,
        tile_sets: map
            .children(names::TILE_SET)
            .map(|tile_set| read_map_tile_set(tile_set, ctx))
            .collect::<Result<_>>()?,
        layers: read_layers(map)?,
    })
}

/// Reads the map's layers in document order. Tile-set entries and the
/// property block are handled elsewhere; any other tag must be a layer.
fn read_layers(map: &Element) -> Result<Vec<Layer>> {
    let mut layers = Vec::new();
    for child in map.elements() {
        match child.name() {
            names::TILE_SET | names::PROPERTIES => {}
            _ => layers.push(read_layer(child)?),
        }
    }
    Ok(layers)
}

fn read_orientation(map: &Element) -> Result<Orientation> {
    let raw = map.attribute(names::ORIENTATION)?;

    match raw {
        names::ORTHOGONAL => Ok(Orientation::Orthogonal),
        names::ISOMETRIC => Ok(Orientation::Isometric),
        names::STAGGERED => Ok(Orientation::Staggered {
            axis: read_axis(map)?,
            index: read_stagger_index(map)?,
        }),
        names::HEXAGONAL => Ok(Orientation::Hexagonal {
            axis: read_axis(map)?,
            index: read_stagger_index(map)?,
            side_length: helpers::attribute(map, names::HEX_SIDE_LENGTH)?,
        }),
        _ => Err(helpers::invalid(names::ORIENTATION, raw)),
    }
}

fn read_axis(map: &Element) -> Result<Axis> {
    let raw = map.attribute(names::STAGGER_AXIS)?;
    match raw {
        names::AXIS_X => Ok(Axis::X),
        names::AXIS_Y => Ok(Axis::Y),
        _ => Err(helpers::invalid(names::STAGGER_AXIS, raw)),
    }
}

fn read_stagger_index(map: &Element) -> Result<StaggerIndex> {
    let raw = map.attribute(names::STAGGER_INDEX)?;
    match raw {
        names::INDEX_EVEN => Ok(StaggerIndex::Even),
        names::INDEX_ODD => Ok(StaggerIndex::Odd),
        _ => Err(helpers::invalid(names::STAGGER_INDEX, raw)),
    }
}

fn read_render_order(map: &Element) -> Result<RenderOrder> {
    match map.opt_attribute(names::RENDER_ORDER) {
        None | Some(names::RIGHT_DOWN) => Ok(RenderOrder::RightDown),
        Some(names::RIGHT_UP) => Ok(RenderOrder::RightUp),
        Some(names::LEFT_DOWN) => Ok(RenderOrder::LeftDown),
        Some(names::LEFT_UP) => Ok(RenderOrder::LeftUp),
        Some(raw) => Err(helpers::invalid(names::RENDER_ORDER, raw)),
    }
}

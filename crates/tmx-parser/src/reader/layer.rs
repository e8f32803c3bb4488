//! Layer readers: shared fields plus the three layer kinds.

use tmx_core::{Error, Result, UnitInterval};

use crate::model::{DrawOrder, ImageLayer, Layer, LayerCommon, ObjectLayer, TileLayer};
use crate::reader::object::read_object;
use crate::reader::property::read_properties;
use crate::reader::tileset::read_image;
use crate::reader::{data, helpers, names};
use crate::xml::Element;

/// Dispatches a layer element on its tag.
pub(crate) fn read_layer(element: &Element) -> Result<Layer> {
    match element.name() {
        names::TILE_LAYER => Ok(Layer::Tile(read_tile_layer(element)?)),
        names::OBJECT_LAYER => Ok(Layer::Object(read_object_layer(element)?)),
        names::IMAGE_LAYER => Ok(Layer::Image(read_image_layer(element)?)),
        tag => Err(Error::InvalidElement {
            tag: tag.to_string(),
        }),
    }
}

/// Reads the fields shared by every layer kind.
pub(crate) fn read_common(layer: &Element) -> Result<LayerCommon> {
    Ok(LayerCommon {
        name: layer.opt_attribute(names::NAME).unwrap_or_default().to_string(),
        opacity: read_opacity(layer)?,
        visible: helpers::bool_attribute(layer, names::VISIBLE, true)?,
        offset: helpers::offset(layer, names::OFFSET_X, names::OFFSET_Y)?,
        properties: read_properties(layer)?,
    })
}

fn read_opacity(layer: &Element) -> Result<UnitInterval> {
    match layer.opt_attribute(names::OPACITY) {
        Some(raw) => {
            let value: f32 = raw
                .trim()
                .parse()
                .map_err(|_| helpers::invalid(names::OPACITY, raw))?;
            UnitInterval::new(value).map_err(|_| helpers::invalid(names::OPACITY, raw))
        }
        None => Ok(UnitInterval::ONE),
    }
}

fn read_tile_layer(layer: &Element) -> Result<TileLayer> {
    Ok(TileLayer {
        common: read_common(layer)?,
        size: helpers::grid_size(layer)?,
        data: data::read_data(layer.child(names::DATA)?)?,
    })
}

/// Reads an object layer; also used for tile collision shapes.
pub(crate) fn read_object_layer(layer: &Element) -> Result<ObjectLayer> {
    Ok(ObjectLayer {
        common: read_common(layer)?,
        color: helpers::opt_color(layer, names::COLOR)?,
        draw_order: read_draw_order(layer)?,
        objects: layer.children(names::OBJECT).map(read_object).collect::<Result<_>>()?,
    })
}

fn read_draw_order(layer: &Element) -> Result<DrawOrder> {
    match layer.opt_attribute(names::DRAW_ORDER) {
        None | Some(names::TOP_DOWN) => Ok(DrawOrder::TopDown),
        Some(names::INDEX) => Ok(DrawOrder::Index),
        Some(raw) => Err(helpers::invalid(names::DRAW_ORDER, raw)),
    }
}

fn read_image_layer(layer: &Element) -> Result<ImageLayer> {
    Ok(ImageLayer {
        common: read_common(layer)?,
        image: layer.opt_child(names::IMAGE).map(read_image).transpose()?,
    })
}

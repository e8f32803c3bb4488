//! Tests for object parsing: placement, shape dispatch and tile
//! references.

use std::path::Path;

use tmx_core::{Error, GlobalTileId, Point, UniqueId};
use tmx_parser::{Layer, Object, Shape, parse_tmx};

fn parse_object(object: &str) -> tmx_core::Result<Object> {
    let xml = format!(
        r#"<map version="1.0" orientation="orthogonal" width="1" height="1"
                tilewidth="16" tileheight="16" nextobjectid="2">
              <objectgroup name="things">
                {object}
              </objectgroup>
            </map>"#
    );
    let map = parse_tmx(&xml, Path::new("."))?;
    let Some(Layer::Object(layer)) = map.layers.into_iter().next() else {
        panic!("expected an object layer");
    };
    Ok(layer.objects.into_iter().next().expect("one object"))
}

#[test]
fn test_rectangle_object() {
    let object = parse_object(
        r#"<object id="1" name="spawn" type="marker" x="8" y="24"
                   width="16" height="32" rotation="45"/>"#,
    )
    .unwrap();

    assert_eq!(object.id, UniqueId(1));
    assert_eq!(object.name, "spawn");
    assert_eq!(object.kind, "marker");
    assert_eq!(object.position, Point { x: 8.0, y: 24.0 });
    assert_eq!(object.rotation, 45.0);
    assert!(object.visible);
    assert!(object.tile.is_none());

    let Some(Shape::Rectangle { size }) = object.shape else {
        panic!("expected a rectangle");
    };
    assert_eq!(size.w.get(), 16.0);
    assert_eq!(size.h.get(), 32.0);
}

#[test]
fn test_point_object_has_no_shape() {
    let object = parse_object(r#"<object id="1" x="4" y="4"/>"#).unwrap();
    assert!(object.shape.is_none());
    assert_eq!(object.name, "");
    assert_eq!(object.rotation, 0.0);
}

#[test]
fn test_ellipse_marker() {
    let object = parse_object(
        r#"<object id="1" x="0" y="0" width="10" height="20"><ellipse/></object>"#,
    )
    .unwrap();
    assert!(matches!(object.shape, Some(Shape::Ellipse { .. })));
}

#[test]
fn test_polygon_takes_priority_over_size() {
    let object = parse_object(
        r#"<object id="1" x="0" y="0" width="10" height="10">
             <polygon points="0,0 10,0 10,10"/>
           </object>"#,
    )
    .unwrap();

    let Some(Shape::Polygon { points }) = object.shape else {
        panic!("expected a polygon");
    };
    assert_eq!(
        points,
        vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 10.0, y: 0.0 },
            Point { x: 10.0, y: 10.0 },
        ]
    );
}

#[test]
fn test_polyline() {
    let object = parse_object(
        r#"<object id="1" x="0" y="0">
             <polyline points="0,0 4,-2"/>
           </object>"#,
    )
    .unwrap();

    let Some(Shape::Polyline { points }) = object.shape else {
        panic!("expected a polyline");
    };
    assert_eq!(points[1], Point { x: 4.0, y: -2.0 });
}

#[test]
fn test_bad_points_is_text_conversion() {
    let err = parse_object(
        r#"<object id="1" x="0" y="0"><polygon points="0,0 nope"/></object>"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::TextConversion(_)));
}

#[test]
fn test_width_without_height_is_missing_attribute() {
    let err = parse_object(r#"<object id="1" x="0" y="0" width="16"/>"#).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAttribute { name } if name == "height"
    ));
}

#[test]
fn test_tile_object_gid_decodes() {
    // 0xC000_0007: horizontal and vertical flips of global tile 7.
    let object = parse_object(r#"<object id="1" x="0" y="0" gid="3221225479"/>"#).unwrap();

    let (flip, id) = object.tile.expect("tile reference").decode();
    assert!(flip.horizontal);
    assert!(flip.vertical);
    assert!(!flip.diagonal);
    assert_eq!(id, GlobalTileId(7));
}

#[test]
fn test_invisible_object() {
    let object = parse_object(r#"<object id="1" x="0" y="0" visible="0"/>"#).unwrap();
    assert!(!object.visible);
}

#[test]
fn test_missing_position_is_missing_attribute() {
    let err = parse_object(r#"<object id="1" x="4"/>"#).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAttribute { name } if name == "y"
    ));
}

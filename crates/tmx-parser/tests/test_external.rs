//! Tests for external tile-set resolution: TSX loading, chained
//! references and the recursion bound.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tmx_core::{Error, GlobalTileId};
use tmx_parser::{MapTileSet, read_image_collection, read_tile_set, read_tmx, read_tsx};

const SHEET_TSX: &str = r#"<tileset name="terrain" tilewidth="16" tileheight="16"
                                    tilecount="4" columns="2">
                             <image source="terrain.png" width="32" height="32"/>
                           </tileset>"#;

const COLLECTION_TSX: &str = r#"<tileset name="props" tilewidth="32" tileheight="32"
                                         tilecount="1" columns="1">
                                  <tile id="0">
                                    <image source="barrel.png" width="32" height="32"/>
                                  </tile>
                                </tileset>"#;

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

#[test]
fn test_map_resolves_external_sheet() {
    let dir = TempDir::new().unwrap();
    write(&dir, "terrain.tsx", SHEET_TSX);
    write(
        &dir,
        "main.tmx",
        r#"<map version="1.0" orientation="orthogonal" width="1" height="1"
                tilewidth="16" tileheight="16" nextobjectid="1">
             <tileset firstgid="1" source="terrain.tsx"/>
           </map>"#,
    );

    let map = read_tmx(&dir.path().join("main.tmx")).unwrap();
    let MapTileSet::TileSet(tile_set) = &map.tile_sets[0] else {
        panic!("expected a sheet tile set");
    };
    assert_eq!(tile_set.first_id, GlobalTileId(1));
    assert_eq!(tile_set.name, "terrain");
    assert_eq!(tile_set.source.as_deref(), Some(Path::new("terrain.tsx")));
}

#[test]
fn test_read_tsx_classifies_image_collection() {
    let dir = TempDir::new().unwrap();
    write(&dir, "props.tsx", COLLECTION_TSX);

    let entry = read_tsx(GlobalTileId(9), Path::new("props.tsx"), dir.path()).unwrap();
    let MapTileSet::ImageCollection(collection) = entry else {
        panic!("expected an image collection");
    };
    assert_eq!(collection.first_id, GlobalTileId(9));
    assert_eq!(collection.tiles[0].image.source, Path::new("barrel.png"));
}

#[test]
fn test_chained_reference_resolves_relative_to_referrer() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("shared")).unwrap();
    write(&dir, "alias.tsx", r#"<tileset source="shared/real.tsx"/>"#);
    fs::write(dir.path().join("shared/real.tsx"), SHEET_TSX).unwrap();

    let entry = read_tsx(GlobalTileId(1), Path::new("alias.tsx"), dir.path()).unwrap();
    let MapTileSet::TileSet(tile_set) = entry else {
        panic!("expected a sheet tile set");
    };
    assert_eq!(tile_set.name, "terrain");
    assert_eq!(
        tile_set.source.as_deref(),
        Some(Path::new("shared/real.tsx"))
    );
}

#[test]
fn test_non_tile_set_root_is_invalid_element() {
    let dir = TempDir::new().unwrap();
    write(&dir, "odd.tsx", "<spritesheet/>");

    let err = read_tsx(GlobalTileId(1), Path::new("odd.tsx"), dir.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidElement { tag } if tag == "spritesheet"
    ));
}

#[test]
fn test_reference_cycle_is_bounded() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.tsx", r#"<tileset source="b.tsx"/>"#);
    write(&dir, "b.tsx", r#"<tileset source="a.tsx"/>"#);

    let err = read_tsx(GlobalTileId(1), Path::new("a.tsx"), dir.path()).unwrap_err();
    assert!(matches!(err, Error::ExternalDepthExceeded { .. }));
}

#[test]
fn test_missing_external_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_tsx(GlobalTileId(1), Path::new("absent.tsx"), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_read_image_collection_loads_collection_document() {
    let dir = TempDir::new().unwrap();
    write(&dir, "props.tsx", COLLECTION_TSX);

    let collection =
        read_image_collection(GlobalTileId(3), Path::new("props.tsx"), dir.path()).unwrap();
    assert_eq!(collection.first_id, GlobalTileId(3));
    assert_eq!(collection.source.as_deref(), Some(Path::new("props.tsx")));
    assert_eq!(collection.tiles[0].image.source, Path::new("barrel.png"));
}

#[test]
fn test_read_image_collection_rejects_sheet_document() {
    let dir = TempDir::new().unwrap();
    write(&dir, "terrain.tsx", SHEET_TSX);

    let err = read_image_collection(GlobalTileId(1), Path::new("terrain.tsx"), dir.path())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidElement { tag } if tag == "image"
    ));
}

#[test]
fn test_read_tile_set_rejects_collection_document() {
    let dir = TempDir::new().unwrap();
    write(&dir, "props.tsx", COLLECTION_TSX);

    let err =
        read_tile_set(GlobalTileId(1), Path::new("props.tsx"), dir.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidElement { tag } if tag == "image"
    ));
}

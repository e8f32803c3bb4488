//! The TMX wire vocabulary: element tags, attribute names and enumerated
//! attribute literals, kept in one place so every reader agrees on them.

// Element tags.
pub const MAP: &str = "map";
pub const TILE_SET: &str = "tileset";
pub const TILE: &str = "tile";
pub const IMAGE: &str = "image";
pub const TILE_OFFSET: &str = "tileoffset";
pub const TILE_LAYER: &str = "layer";
pub const OBJECT_LAYER: &str = "objectgroup";
pub const IMAGE_LAYER: &str = "imagelayer";
pub const OBJECT: &str = "object";
pub const PROPERTIES: &str = "properties";
pub const PROPERTY: &str = "property";
pub const DATA: &str = "data";
pub const ANIMATION: &str = "animation";
pub const FRAME: &str = "frame";
pub const ELLIPSE: &str = "ellipse";
pub const POLYGON: &str = "polygon";
pub const POLYLINE: &str = "polyline";

// Shared attributes.
pub const NAME: &str = "name";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const TILE_WIDTH: &str = "tilewidth";
pub const TILE_HEIGHT: &str = "tileheight";
pub const SOURCE: &str = "source";
pub const VISIBLE: &str = "visible";
pub const COLOR: &str = "color";
pub const X: &str = "x";
pub const Y: &str = "y";

// Map attributes.
pub const VERSION: &str = "version";
pub const ORIENTATION: &str = "orientation";
pub const RENDER_ORDER: &str = "renderorder";
pub const STAGGER_AXIS: &str = "staggeraxis";
pub const STAGGER_INDEX: &str = "staggerindex";
pub const HEX_SIDE_LENGTH: &str = "hexsidelength";
pub const BACKGROUND: &str = "backgroundcolor";
pub const NEXT_ID: &str = "nextobjectid";

// Tile-set attributes.
pub const FIRST_ID: &str = "firstgid";
pub const SPACING: &str = "spacing";
pub const MARGIN: &str = "margin";
pub const TILE_COUNT: &str = "tilecount";
pub const COLUMNS: &str = "columns";
pub const TILE_ID: &str = "id";

// Image attributes.
pub const TRANSPARENT: &str = "trans";

// Layer attributes.
pub const OPACITY: &str = "opacity";
pub const OFFSET_X: &str = "offsetx";
pub const OFFSET_Y: &str = "offsety";
pub const DRAW_ORDER: &str = "draworder";

// Data attributes and literals.
pub const ENCODING: &str = "encoding";
pub const COMPRESSION: &str = "compression";
pub const ENCODING_CSV: &str = "csv";
pub const ENCODING_BASE64: &str = "base64";
pub const COMPRESSION_ZLIB: &str = "zlib";

// Object attributes.
pub const OBJECT_ID: &str = "id";
pub const OBJECT_TYPE: &str = "type";
pub const ROTATION: &str = "rotation";
pub const GLOBAL_ID: &str = "gid";
pub const POINTS: &str = "points";

// Property attributes and literals.
pub const PROPERTY_VALUE: &str = "value";
pub const PROPERTY_TYPE: &str = "type";
pub const TYPE_STRING: &str = "string";
pub const TYPE_INT: &str = "int";
pub const TYPE_FLOAT: &str = "float";
pub const TYPE_BOOL: &str = "bool";
pub const TYPE_COLOR: &str = "color";
pub const TYPE_FILE: &str = "file";

// Frame attributes.
pub const FRAME_TILE_ID: &str = "tileid";
pub const FRAME_DURATION: &str = "duration";

// Enumerated attribute literals.
pub const ORTHOGONAL: &str = "orthogonal";
pub const ISOMETRIC: &str = "isometric";
pub const STAGGERED: &str = "staggered";
pub const HEXAGONAL: &str = "hexagonal";
pub const AXIS_X: &str = "x";
pub const AXIS_Y: &str = "y";
pub const INDEX_EVEN: &str = "even";
pub const INDEX_ODD: &str = "odd";
pub const RIGHT_DOWN: &str = "right-down";
pub const RIGHT_UP: &str = "right-up";
pub const LEFT_DOWN: &str = "left-down";
pub const LEFT_UP: &str = "left-up";
pub const TOP_DOWN: &str = "topdown";
pub const INDEX: &str = "index";

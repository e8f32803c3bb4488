//! Core types for TMX tile-map document decoding.
//!
//! This crate provides the error type, the constrained value wrappers, the
//! tile identifier codec and the geometry/color primitives shared by every
//! stage of the reader.

pub mod color;
pub mod constrained;
pub mod error;
pub mod geometry;
pub mod id;

pub use color::Color;
pub use constrained::{NonEmptyString, NonNegative, Positive, UnitInterval};
pub use error::{Error, Result};
pub use geometry::{GridSize, Offset, PixelSize, Point, Size};
pub use id::{Flip, FlippedGlobalId, GlobalTileId, LocalTileId, UniqueId};

//! Sizes, points and offsets used throughout the document model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constrained::Positive;
use crate::{Error, Result};

/// A two-dimensional size with strictly positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size<T> {
    pub w: Positive<T>,
    pub h: Positive<T>,
}

/// A size in pixels.
pub type PixelSize = Size<f32>;

/// A size in whole tiles or grid cells.
pub type GridSize = Size<i32>;

impl<T> Size<T>
where
    T: Copy + PartialOrd + Default + fmt::Debug,
{
    /// Builds a size from raw dimensions, failing unless both are positive.
    pub fn new(w: T, h: T) -> Result<Self> {
        Ok(Self {
            w: Positive::new(w)?,
            h: Positive::new(h)?,
        })
    }
}

/// A position in pixels, `y` growing downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl FromStr for Point {
    type Err = Error;

    /// Parses the `"x,y"` coordinate-pair literal used by polygon and
    /// polyline points.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::TextConversion(format!("bad point literal: \"{s}\""));

        let (x, y) = s.split_once(',').ok_or_else(bad)?;
        Ok(Self {
            x: x.trim().parse().map_err(|_| bad())?,
            y: y.trim().parse().map_err(|_| bad())?,
        })
    }
}

/// Parses a space-separated list of `"x,y"` pairs.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    text.split_whitespace().map(str::parse).collect()
}

/// A pixel displacement applied to a layer or tile set when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

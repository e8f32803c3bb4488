//! The ARGB color type and its hex-literal parser.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An ARGB color as written in TMX documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#RRGGBB` or `#AARRGGBB`; the leading `#` is optional.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::TextConversion(format!("bad color literal: \"{s}\""));

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(bad());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());

        match hex.len() {
            6 => Ok(Self {
                a: 0xff,
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            }),
            8 => Ok(Self {
                a: channel(0)?,
                r: channel(2)?,
                g: channel(4)?,
                b: channel(6)?,
            }),
            _ => Err(bad()),
        }
    }
}

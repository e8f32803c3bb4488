//! Tile identifier newtypes and the flip-flag codec.
//!
//! A tile placement on the wire is a single 32-bit value: the three most
//! significant bits carry the horizontal/vertical/diagonal flip flags, the
//! remaining 29 bits the unflipped map-wide identifier. Flip flags are a
//! per-placement rendering hint, not part of tile identity, so the codec
//! keeps them strictly apart from the identifier used for tile-set lookups.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier of a tile within a single tile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalTileId(pub u32);

/// Map-wide tile identifier with the flip flags stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GlobalTileId(pub u32);

/// Unique per-object identifier within a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniqueId(pub u32);

/// Flip flags applied to a single tile placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
    pub diagonal: bool,
}

/// Raw 32-bit tile identifier exactly as stored in layer data and object
/// `gid` attributes: flip flags plus unflipped identifier in one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlippedGlobalId(pub u32);

const FLIP_HORIZONTAL: u32 = 1 << 31;
const FLIP_VERTICAL: u32 = 1 << 30;
const FLIP_DIAGONAL: u32 = 1 << 29;
const ID_MASK: u32 = FLIP_DIAGONAL - 1;

impl FlippedGlobalId {
    /// Splits the wire value into flip flags and the unflipped identifier.
    ///
    /// Pure bit masking; always succeeds.
    #[must_use]
    pub fn decode(self) -> (Flip, GlobalTileId) {
        let flip = Flip {
            horizontal: self.0 & FLIP_HORIZONTAL != 0,
            vertical: self.0 & FLIP_VERTICAL != 0,
            diagonal: self.0 & FLIP_DIAGONAL != 0,
        };
        (flip, GlobalTileId(self.0 & ID_MASK))
    }

    /// Packs flip flags and an unflipped identifier back into a wire value.
    ///
    /// # Errors
    /// [`Error::IdentifierOverflow`] if `id` does not fit the 29 non-flag
    /// bits.
    pub fn encode(flip: Flip, id: GlobalTileId) -> Result<Self> {
        if id.0 & !ID_MASK != 0 {
            return Err(Error::IdentifierOverflow(id.0));
        }

        let mut value = id.0;
        if flip.horizontal {
            value |= FLIP_HORIZONTAL;
        }
        if flip.vertical {
            value |= FLIP_VERTICAL;
        }
        if flip.diagonal {
            value |= FLIP_DIAGONAL;
        }
        Ok(Self(value))
    }
}

impl GlobalTileId {
    /// Converts this identifier to one local to the tile set starting at
    /// `first_id`.
    ///
    /// Returns `None` when the identifier lies below the tile set's first
    /// identifier; callers are expected to have established that the
    /// identifier falls within the owning tile set's range.
    #[must_use]
    pub fn local_id(self, first_id: GlobalTileId) -> Option<LocalTileId> {
        self.0.checked_sub(first_id.0).map(LocalTileId)
    }
}

//! The recursive-descent schema mapper: one reader per element kind,
//! composing bottom-up into the document model.

pub(crate) mod data;
pub(crate) mod helpers;
pub(crate) mod layer;
pub(crate) mod map;
pub(crate) mod names;
pub(crate) mod object;
pub(crate) mod property;
pub(crate) mod tileset;

use std::path::{Path, PathBuf};

use tmx_core::{Error, Result};

/// How many external tile-set references may chain before the parse is
/// aborted. The format gives no acyclicity guarantee, so a bound keeps a
/// cyclic reference chain from recursing forever.
pub(crate) const EXTERNAL_DEPTH_LIMIT: u32 = 8;

/// Resolution context threaded through the readers: where external
/// references are resolved from, and how many have been followed so far.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    base_dir: PathBuf,
    depth: u32,
}

impl Context {
    pub(crate) fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            depth: 0,
        }
    }

    /// Enters one more level of external resolution, enforcing the depth
    /// bound.
    pub(crate) fn descend(&self, source: &Path) -> Result<Self> {
        if self.depth >= EXTERNAL_DEPTH_LIMIT {
            return Err(Error::ExternalDepthExceeded {
                source_path: source.display().to_string(),
            });
        }
        Ok(Self {
            base_dir: self.base_dir.clone(),
            depth: self.depth + 1,
        })
    }

    /// Resolves a source reference relative to the containing document.
    pub(crate) fn resolve(&self, source: &Path) -> PathBuf {
        self.base_dir.join(source)
    }

    /// Re-anchors resolution at the directory of `document_path`, keeping
    /// the depth already spent.
    pub(crate) fn rebase(&self, document_path: &Path) -> Self {
        Self {
            base_dir: document_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
            depth: self.depth,
        }
    }
}

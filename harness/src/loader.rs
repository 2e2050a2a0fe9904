//! World loading: read a world file from disk, digest it, parse it.
//!
//! The digest is computed over the raw file bytes before parsing, so two
//! files that parse to the same world but differ byte-wise (line endings,
//! trailing lines) get different digests.

use std::path::{Path, PathBuf};

use dustpan_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use dustpan_kernel::world::error::WorldParseError;
use dustpan_kernel::world::parse::{parse_world, ParsedWorld};
use log::debug;

/// A parsed world plus the provenance of its source.
#[derive(Debug, Clone)]
pub struct LoadedWorld {
    pub world: ParsedWorld,
    /// `canonical_hash(WorldFile, raw bytes)`.
    pub digest: ContentHash,
    /// Where the world came from (a file path or a fixture name).
    pub source: PathBuf,
}

/// Error loading a world file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, detail: String },
    /// The file was read but is not a valid world.
    Parse(WorldParseError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => {
                write!(f, "cannot read world file {}: {detail}", path.display())
            }
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<WorldParseError> for LoadError {
    fn from(e: WorldParseError) -> Self {
        Self::Parse(e)
    }
}

/// Read, digest and parse the world file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if it is not valid UTF-8 or not a valid world.
pub fn load_world_file(path: &Path) -> Result<LoadedWorld, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    load_world_bytes(&bytes, path)
}

/// Digest and parse in-memory world bytes attributed to `source`.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the bytes are not valid UTF-8 or not a
/// valid world.
pub fn load_world_bytes(bytes: &[u8], source: impl AsRef<Path>) -> Result<LoadedWorld, LoadError> {
    let digest = canonical_hash(HashDomain::WorldFile, bytes);
    let text = std::str::from_utf8(bytes).map_err(|e| {
        LoadError::Parse(WorldParseError::MalformedWorld {
            detail: format!("world file is not valid UTF-8: {e}"),
        })
    })?;
    let world = parse_world(text)?;
    debug!(
        "loaded world {}: {}x{} grid, robot at {}, {} dirty cells, digest {digest}",
        source.as_ref().display(),
        world.grid.rows(),
        world.grid.cols(),
        world.start.position(),
        world.start.dirty().len()
    );
    Ok(LoadedWorld {
        world,
        digest,
        source: source.as_ref().to_path_buf(),
    })
}

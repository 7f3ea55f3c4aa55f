//! Decoded source maps for the script/source mapping core.
//!
//! Parsing the textual source map format happens elsewhere. This crate defines
//! the queries the mapping core needs from an already-decoded map
//! ([`SourceMapLookup`]) and provides an in-memory table implementing them
//! ([`SourceMap`]).

mod builder;

pub use builder::{Mapping, Original, SourceMap, SourceMapBuilder};

use rustc_hash::FxHashMap;
use script_locations::{LoadedSource, LocationInLoadedSource, Position, Range};

/// The result of resolving a script position to its authored position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthoredPosition {
    /// The map has a token covering the position.
    Found(LocationInLoadedSource),
    /// The map has no authored position for it.
    NotFound,
}

impl AuthoredPosition {
    /// Returns the authored location, if one was found.
    pub fn found(self) -> Option<LocationInLoadedSource> {
        match self {
            AuthoredPosition::Found(location) => Some(location),
            AuthoredPosition::NotFound => None,
        }
    }
}

/// Read-only queries over a decoded source map.
///
/// All positions on the generated side are relative to the start of the
/// script's own text, not to any document embedding it. Implementations are
/// shared by mappers across threads.
pub trait SourceMapLookup: Send + Sync {
    /// For each source the map covers, the range of authored positions that
    /// could have a generated counterpart.
    fn ranges_in_sources(&self) -> FxHashMap<LoadedSource, Range>;

    /// Resolves a script position to the authored location it was compiled from.
    fn authored_position(&self, position: Position) -> AuthoredPosition;

    /// Every script position the given authored location was emitted at.
    ///
    /// One authored line may be emitted several times (inlined or duplicated
    /// code), so this can return zero, one or many positions.
    fn all_generated_positions_for(&self, location: &LocationInLoadedSource) -> Vec<Position>;

    /// The sources this map covers.
    fn mapped_sources(&self) -> &[LoadedSource];
}

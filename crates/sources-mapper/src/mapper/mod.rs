//! Mappers between script locations and authored source locations.
//!
//! Which mapper a script gets depends on what is known about it:
//! - [`MappedSourcesMapper`] when the script has a source map,
//! - [`NoMappedSourcesMapper`] when it has none and is reported as itself,
//! - [`UnmappedSourceMapper`] when the caller already knows the script
//!   corresponds 1:1 to one source.
//!
//! Callers talk to all of them through [`SourceMapper`], or hold a
//! [`ScriptMapper`] when they want a single concrete type.

mod mapped;
mod no_mapped;
mod unmapped;

pub use mapped::MappedSourcesMapper;
pub use no_mapped::NoMappedSourcesMapper;
pub use unmapped::UnmappedSourceMapper;

use crate::{MappedTokensInScript, Result};
use script_locations::{LoadedSource, LocationInLoadedSource, LocationInScript};
use source_map::{SourceMap, SourceMapLookup};
use std::fmt;

/// Maps locations between a script and the sources it corresponds to.
pub trait SourceMapper: fmt::Display + Send + Sync {
    /// Maps an authored location to the tokens it corresponds to in the script.
    ///
    /// Returned ranges are relative to the document embedding the script.
    fn position_in_script(&self, location: &LocationInLoadedSource)
        -> Result<MappedTokensInScript>;

    /// Maps a location in the script, relative to its embedding document, to
    /// the authored location it came from.
    fn position_in_source(&self, location: &LocationInScript) -> LocationInLoadedSource;
}

/// A mapper that can list the sources its script was compiled from.
pub trait SourcesProvider: SourceMapper {
    /// The sources this mapper maps into.
    fn sources(&self) -> Vec<LoadedSource>;
}

/// One of the mapper variants, selected by the caller for a script.
#[derive(Debug)]
pub enum ScriptMapper<M = SourceMap> {
    /// The script has a source map.
    Mapped(MappedSourcesMapper<M>),
    /// The script has no source map.
    NoMapped(NoMappedSourcesMapper),
    /// The script corresponds 1:1 to a known source.
    Unmapped(UnmappedSourceMapper),
}

impl<M: SourceMapLookup> SourceMapper for ScriptMapper<M> {
    fn position_in_script(
        &self,
        location: &LocationInLoadedSource,
    ) -> Result<MappedTokensInScript> {
        match self {
            ScriptMapper::Mapped(mapper) => mapper.position_in_script(location),
            ScriptMapper::NoMapped(mapper) => mapper.position_in_script(location),
            ScriptMapper::Unmapped(mapper) => mapper.position_in_script(location),
        }
    }

    fn position_in_source(&self, location: &LocationInScript) -> LocationInLoadedSource {
        match self {
            ScriptMapper::Mapped(mapper) => mapper.position_in_source(location),
            ScriptMapper::NoMapped(mapper) => mapper.position_in_source(location),
            ScriptMapper::Unmapped(mapper) => mapper.position_in_source(location),
        }
    }
}

impl<M: SourceMapLookup> SourcesProvider for ScriptMapper<M> {
    fn sources(&self) -> Vec<LoadedSource> {
        match self {
            ScriptMapper::Mapped(mapper) => mapper.sources(),
            ScriptMapper::NoMapped(mapper) => mapper.sources(),
            ScriptMapper::Unmapped(_) => Vec::new(),
        }
    }
}

impl<M> fmt::Display for ScriptMapper<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptMapper::Mapped(mapper) => fmt::Display::fmt(mapper, f),
            ScriptMapper::NoMapped(mapper) => fmt::Display::fmt(mapper, f),
            ScriptMapper::Unmapped(mapper) => fmt::Display::fmt(mapper, f),
        }
    }
}

impl<M> From<MappedSourcesMapper<M>> for ScriptMapper<M> {
    fn from(mapper: MappedSourcesMapper<M>) -> Self {
        ScriptMapper::Mapped(mapper)
    }
}

impl<M> From<NoMappedSourcesMapper> for ScriptMapper<M> {
    fn from(mapper: NoMappedSourcesMapper) -> Self {
        ScriptMapper::NoMapped(mapper)
    }
}

impl<M> From<UnmappedSourceMapper> for ScriptMapper<M> {
    fn from(mapper: UnmappedSourceMapper) -> Self {
        ScriptMapper::Unmapped(mapper)
    }
}

//! Mapper for scripts that were not compiled from other sources.

use super::{SourceMapper, SourcesProvider};
use crate::{MappedTokensInScript, MapperError, Result};
use script_locations::{LoadedSource, LocationInLoadedSource, LocationInScript, Script};
use std::fmt;

/// Identity mapper for a script without a source map.
///
/// It only accepts locations in the script's development or runtime source.
#[derive(Debug, Clone)]
pub struct NoMappedSourcesMapper {
    script: Script,
}

impl NoMappedSourcesMapper {
    /// Creates a mapper for `script`.
    pub fn new(script: Script) -> Self {
        Self { script }
    }

    /// The script this mapper was built for.
    pub fn script(&self) -> &Script {
        &self.script
    }
}

impl SourceMapper for NoMappedSourcesMapper {
    fn position_in_script(
        &self,
        location: &LocationInLoadedSource,
    ) -> Result<MappedTokensInScript> {
        if &location.source == self.script.development_source()
            || &location.source == self.script.runtime_source()
        {
            return Ok(MappedTokensInScript::character_at(LocationInScript::new(
                self.script.clone(),
                location.position,
            )));
        }

        tracing::warn!(
            target: "sources_mapper",
            script = %self.script,
            location = %location,
            "asked to map a location from a source this mapper has no authority over"
        );
        Err(MapperError::ForeignSource {
            location: location.to_string(),
            mapper: self.to_string(),
        })
    }

    fn position_in_source(&self, location: &LocationInScript) -> LocationInLoadedSource {
        LocationInLoadedSource::new(self.script.development_source().clone(), location.position)
    }
}

impl SourcesProvider for NoMappedSourcesMapper {
    fn sources(&self) -> Vec<LoadedSource> {
        Vec::new()
    }
}

impl fmt::Display for NoMappedSourcesMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No sources mapper of {}", self.script)
    }
}

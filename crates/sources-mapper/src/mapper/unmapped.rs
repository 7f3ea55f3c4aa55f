//! Identity mapper between a script and one fixed source.

use super::SourceMapper;
use crate::{MappedTokensInScript, Result};
use script_locations::{LoadedSource, LocationInLoadedSource, LocationInScript, Script};
use std::fmt;

/// Maps a script to a single source, position for position.
#[derive(Debug, Clone)]
pub struct UnmappedSourceMapper {
    script: Script,
    source: LoadedSource,
}

impl UnmappedSourceMapper {
    /// Creates a mapper between `script` and `source`.
    pub fn new(script: Script, source: LoadedSource) -> Self {
        Self { script, source }
    }
}

impl SourceMapper for UnmappedSourceMapper {
    fn position_in_script(
        &self,
        location: &LocationInLoadedSource,
    ) -> Result<MappedTokensInScript> {
        Ok(MappedTokensInScript::character_at(LocationInScript::new(
            self.script.clone(),
            location.position,
        )))
    }

    fn position_in_source(&self, location: &LocationInScript) -> LocationInLoadedSource {
        LocationInLoadedSource::new(self.source.clone(), location.position)
    }
}

impl fmt::Display for UnmappedSourceMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unmapped sources mapper of {}", self.script)
    }
}

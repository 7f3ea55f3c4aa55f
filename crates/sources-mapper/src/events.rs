//! Structured events emitted at mapping decision points.

use script_locations::{LocationInLoadedSource, Position, Script};
use std::fmt;

/// A decision taken while mapping a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingEvent {
    /// The authored location is outside every range the script's map covers.
    OutsideMappedRange {
        /// The script being mapped into.
        script: Script,
        /// The authored location that was rejected.
        location: LocationInLoadedSource,
    },
    /// The source map had no authored position, so the development source was used.
    FallbackToDevelopmentSource {
        /// The script being mapped from.
        script: Script,
        /// The document-relative position that was reported unchanged.
        position: Position,
    },
    /// The source map was searched for generated tokens.
    MappedTokens {
        /// The script being mapped into.
        script: Script,
        /// The authored location that was looked up.
        location: LocationInLoadedSource,
        /// How many tokens were found. May be zero.
        token_count: usize,
    },
}

impl MappingEvent {
    /// Records the event as a `tracing` event with structured fields.
    pub(crate) fn trace(&self) {
        match self {
            MappingEvent::OutsideMappedRange { script, location } => tracing::debug!(
                target: "sources_mapper",
                script = %script,
                location = %location,
                "location is outside the range of the script, so it doesn't map anywhere"
            ),
            MappingEvent::FallbackToDevelopmentSource { script, position } => tracing::debug!(
                target: "sources_mapper",
                script = %script,
                position = %position,
                "no authored position, falling back to the development source"
            ),
            MappingEvent::MappedTokens {
                script,
                location,
                token_count,
            } => tracing::debug!(
                target: "sources_mapper",
                script = %script,
                location = %location,
                token_count,
                "mapped location to script tokens"
            ),
        }
    }
}

impl fmt::Display for MappingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingEvent::OutsideMappedRange { script, location } => {
                write!(f, "{location} is outside the range of {script}")
            }
            MappingEvent::FallbackToDevelopmentSource { script, position } => {
                write!(f, "{script}:{position} has no authored position")
            }
            MappingEvent::MappedTokens {
                script,
                location,
                token_count,
            } => write!(f, "{location} mapped to {token_count} token(s) in {script}"),
        }
    }
}

/// Receives [`MappingEvent`]s from a mapper.
pub trait MappingObserver: Send + Sync {
    /// Called once per decision, after it is taken.
    fn on_event(&self, event: &MappingEvent);
}

impl<F> MappingObserver for F
where
    F: Fn(&MappingEvent) + Send + Sync,
{
    fn on_event(&self, event: &MappingEvent) {
        self(event)
    }
}

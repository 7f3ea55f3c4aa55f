//! Scripts, loaded sources and the locations inside them.

use crate::{Position, Range};
use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

/// A source file known to the debugger, identified by its URL or path.
///
/// Two loaded sources are the same source when their identifiers match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadedSource {
    identifier: SmolStr,
}

impl LoadedSource {
    /// Creates a loaded source with the given identifier.
    pub fn new(identifier: impl Into<SmolStr>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// The URL or path identifying this source.
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for LoadedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

#[derive(Debug)]
struct ScriptData {
    runtime_source: LoadedSource,
    development_source: LoadedSource,
    range_in_source: Option<Range>,
    mapped_sources: Vec<LoadedSource>,
}

/// A script parsed by the runtime.
///
/// `Script` is a cheap handle: clones share the same script, and two handles
/// compare equal only when they refer to the same script.
#[derive(Debug, Clone)]
pub struct Script {
    data: Arc<ScriptData>,
}

impl Script {
    /// Starts building a script whose executed text lives in `runtime_source`.
    pub fn builder(runtime_source: LoadedSource) -> ScriptBuilder {
        ScriptBuilder {
            runtime_source,
            development_source: None,
            range_in_source: None,
            mapped_sources: Vec::new(),
        }
    }

    /// A standalone script whose runtime and development sources are the same file.
    pub fn standalone(source: LoadedSource) -> Self {
        Self::builder(source).build()
    }

    /// The source holding the bytes the runtime executes.
    #[inline]
    pub fn runtime_source(&self) -> &LoadedSource {
        &self.data.runtime_source
    }

    /// The source to report for this script when no mapped source applies.
    #[inline]
    pub fn development_source(&self) -> &LoadedSource {
        &self.data.development_source
    }

    /// The range this script's text occupies inside its embedding document, if
    /// the script is inline.
    #[inline]
    pub fn range_in_source(&self) -> Option<Range> {
        self.data.range_in_source
    }

    /// Where this script's text begins inside its embedding document.
    ///
    /// An inline script whose text starts on line 20, column 5 of an `.html` file
    /// reports `20:5`. A standalone script reports `0:0`.
    #[inline]
    pub fn start_in_source(&self) -> Position {
        self.data
            .range_in_source
            .map_or(Position::ZERO, |range| range.start)
    }

    /// The sources this script's source map claims to be compiled from.
    #[inline]
    pub fn mapped_sources(&self) -> &[LoadedSource] {
        &self.data.mapped_sources
    }
}

impl PartialEq for Script {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Script {}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.range_in_source {
            Some(range) if range.start != Position::ZERO => {
                write!(f, "{} (at {})", self.data.runtime_source, range.start)
            }
            _ => write!(f, "{}", self.data.runtime_source),
        }
    }
}

/// Builder for [`Script`].
#[derive(Debug)]
pub struct ScriptBuilder {
    runtime_source: LoadedSource,
    development_source: Option<LoadedSource>,
    range_in_source: Option<Range>,
    mapped_sources: Vec<LoadedSource>,
}

impl ScriptBuilder {
    /// Sets the source to report when no mapping exists. Defaults to the runtime source.
    pub fn development_source(mut self, source: LoadedSource) -> Self {
        self.development_source = Some(source);
        self
    }

    /// Marks the script as inline, occupying `range` of its embedding document.
    pub fn range_in_source(mut self, range: Range) -> Self {
        self.range_in_source = Some(range);
        self
    }

    /// Sets the sources the script's source map covers.
    pub fn mapped_sources(mut self, sources: impl IntoIterator<Item = LoadedSource>) -> Self {
        self.mapped_sources = sources.into_iter().collect();
        self
    }

    /// Builds the script.
    pub fn build(self) -> Script {
        let development_source = self
            .development_source
            .unwrap_or_else(|| self.runtime_source.clone());
        Script {
            data: Arc::new(ScriptData {
                runtime_source: self.runtime_source,
                development_source,
                range_in_source: self.range_in_source,
                mapped_sources: self.mapped_sources,
            }),
        }
    }
}

/// A position relative to the start of a script's own text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInScript {
    /// The script.
    pub script: Script,
    /// The position inside it.
    pub position: Position,
}

impl LocationInScript {
    /// Creates a new location.
    #[inline]
    pub fn new(script: Script, position: Position) -> Self {
        Self { script, position }
    }
}

impl fmt::Display for LocationInScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.script, self.position)
    }
}

/// A position relative to the start of an authored source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationInLoadedSource {
    /// The source file.
    pub source: LoadedSource,
    /// The position inside it.
    pub position: Position,
}

impl LocationInLoadedSource {
    /// Creates a new location.
    #[inline]
    pub fn new(source: LoadedSource, position: Position) -> Self {
        Self { source, position }
    }
}

impl fmt::Display for LocationInLoadedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standalone_script_starts_at_zero() {
        let script = Script::standalone(LoadedSource::new("app.js"));
        assert_eq!(script.start_in_source(), Position::ZERO);
        assert_eq!(script.development_source(), script.runtime_source());
        assert!(script.mapped_sources().is_empty());
    }

    #[test]
    fn test_inline_script_start() {
        let script = Script::builder(LoadedSource::new("index.html"))
            .range_in_source(Range::new(Position::new(20, 5), Position::new(31, 0)))
            .build();
        assert_eq!(script.start_in_source(), Position::new(20, 5));
        insta::assert_snapshot!(script.to_string(), @"index.html (at 20:5)");
    }

    #[test]
    fn test_script_identity() {
        let source = LoadedSource::new("app.js");
        let a = Script::standalone(source.clone());
        let b = Script::standalone(source);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_development_source_override() {
        let script = Script::builder(LoadedSource::new("http://localhost/app.js"))
            .development_source(LoadedSource::new("/work/app.js"))
            .build();
        assert_eq!(script.development_source().identifier(), "/work/app.js");
        assert_eq!(
            script.runtime_source().identifier(),
            "http://localhost/app.js"
        );
    }

    #[test]
    fn test_location_display() {
        let location =
            LocationInLoadedSource::new(LoadedSource::new("src/main.ts"), Position::new(3, 4));
        insta::assert_snapshot!(location.to_string(), @"src/main.ts:3:4");
    }
}

//! Mapper for scripts compiled from other sources.

use super::{SourceMapper, SourcesProvider};
use crate::translator::{HtmlToScriptPositionTranslator, ScriptToHtmlPositionTranslator};
use crate::{
    MappedTokensInScript, MapperOptions, MappingEvent, MappingObserver, Result, TokenOrder,
};
use rustc_hash::FxHashMap;
use script_locations::{
    LoadedSource, LocationInLoadedSource, LocationInScript, Position, Range, Script,
};
use source_map::{SourceMap, SourceMapLookup};
use std::fmt;
use std::sync::Arc;

/// Maps locations from a script into the sources it was compiled from, and back.
///
/// The per-source ranges of the source map are computed once, at construction.
/// Build a new mapper when the script's source map changes.
pub struct MappedSourcesMapper<M = SourceMap> {
    script: Script,
    source_map: Arc<M>,
    ranges_in_sources: FxHashMap<LoadedSource, Range>,
    options: MapperOptions,
    observer: Option<Arc<dyn MappingObserver>>,
}

impl<M: SourceMapLookup> MappedSourcesMapper<M> {
    /// Creates a mapper for `script` using its decoded source map.
    pub fn new(script: Script, source_map: Arc<M>) -> Self {
        let ranges_in_sources = source_map.ranges_in_sources();
        Self {
            script,
            source_map,
            ranges_in_sources,
            options: MapperOptions::default(),
            observer: None,
        }
    }

    /// Sets the mapper options.
    pub fn with_options(mut self, options: MapperOptions) -> Self {
        self.options = options;
        self
    }

    /// Delivers every mapping decision to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn MappingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The script this mapper was built for.
    pub fn script(&self) -> &Script {
        &self.script
    }

    fn emit(&self, event: MappingEvent) {
        event.trace();
        if let Some(observer) = &self.observer {
            observer.on_event(&event);
        }
    }

    /// Whether the source map could have any token for `location`. Tokens are
    /// only indexed within the authored range each source occupies.
    fn can_position_potentially_have_mappings(&self, location: &LocationInLoadedSource) -> bool {
        self.ranges_in_sources
            .get(&location.source)
            .is_some_and(|range| range.contains(location.position))
    }

    /// `20:5` for an inline script starting on line 20, column 5 of an `.html`
    /// file; `0:0` for a standalone script.
    fn where_script_starts_in_html(&self) -> Position {
        self.script.start_in_source()
    }
}

impl<M: SourceMapLookup> SourceMapper for MappedSourcesMapper<M> {
    fn position_in_script(
        &self,
        location: &LocationInLoadedSource,
    ) -> Result<MappedTokensInScript> {
        if !self.can_position_potentially_have_mappings(location) {
            self.emit(MappingEvent::OutsideMappedRange {
                script: self.script.clone(),
                location: location.clone(),
            });
            return Ok(MappedTokensInScript::no_mapping(self.script.clone()));
        }

        let positions_in_script = self.source_map.all_generated_positions_for(location);
        let mut ranges = ScriptToHtmlPositionTranslator::new(self.where_script_starts_in_html())
            .to_many_ranges_relative_to_html(positions_in_script);
        if self.options.token_order == TokenOrder::Sorted {
            ranges.sort_by_key(|range| range.start);
        }

        self.emit(MappingEvent::MappedTokens {
            script: self.script.clone(),
            location: location.clone(),
            token_count: ranges.len(),
        });
        Ok(MappedTokensInScript::mapped(self.script.clone(), ranges))
    }

    fn position_in_source(&self, location: &LocationInScript) -> LocationInLoadedSource {
        // A position before the script start cannot be in the script.
        let authored = HtmlToScriptPositionTranslator::new(self.where_script_starts_in_html())
            .to_position_relative_to_script(location.position)
            .and_then(|position_in_script| {
                self.source_map.authored_position(position_in_script).found()
            });

        match authored {
            Some(authored) => authored,
            None => {
                self.emit(MappingEvent::FallbackToDevelopmentSource {
                    script: location.script.clone(),
                    position: location.position,
                });
                LocationInLoadedSource::new(
                    location.script.development_source().clone(),
                    location.position,
                )
            }
        }
    }
}

impl<M: SourceMapLookup> SourcesProvider for MappedSourcesMapper<M> {
    fn sources(&self) -> Vec<LoadedSource> {
        self.source_map.mapped_sources().to_vec()
    }
}

impl<M> fmt::Display for MappedSourcesMapper<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mapped sources mapper of {} into [", self.script)?;
        for (i, source) in self.script.mapped_sources().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{source}")?;
        }
        f.write_str("]")
    }
}

impl<M> fmt::Debug for MappedSourcesMapper<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedSourcesMapper")
            .field("script", &self.script)
            .field("ranges_in_sources", &self.ranges_in_sources)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn source(name: &str) -> LoadedSource {
        LoadedSource::new(name)
    }

    /// `bundle.js` compiled from `a.ts`; line 3 of `a.ts` was inlined at two places.
    fn mapper_for(script: Script) -> MappedSourcesMapper {
        let a = source("a.ts");
        let mut builder = SourceMap::builder();
        builder.add_mapping(Position::new(0, 0), &a, Position::new(1, 0));
        builder.add_mapping(Position::new(0, 12), &a, Position::new(2, 2));
        builder.add_unmapped(Position::new(0, 30));
        builder.add_mapping(Position::new(4, 6), &a, Position::new(3, 0));
        builder.add_mapping(Position::new(2, 8), &a, Position::new(3, 0));
        MappedSourcesMapper::new(script, Arc::new(builder.build()))
    }

    fn bundle() -> Script {
        Script::builder(source("bundle.js"))
            .mapped_sources([source("a.ts")])
            .build()
    }

    #[test]
    fn test_position_in_source_found() {
        let script = bundle();
        let mapper = mapper_for(script.clone());
        let location =
            mapper.position_in_source(&LocationInScript::new(script, Position::new(0, 14)));
        assert_eq!(
            location,
            LocationInLoadedSource::new(source("a.ts"), Position::new(2, 2))
        );
    }

    #[test]
    fn test_position_in_source_falls_back_to_development_source() {
        let script = Script::builder(source("http://localhost/bundle.js"))
            .development_source(source("/work/bundle.js"))
            .build();
        let mapper = mapper_for(script.clone());

        let location =
            mapper.position_in_source(&LocationInScript::new(script, Position::new(0, 31)));
        assert_eq!(
            location,
            LocationInLoadedSource::new(source("/work/bundle.js"), Position::new(0, 31))
        );
    }

    /// `index.html` with the script body starting at `20:5`; the first script
    /// character maps to `a.ts:7:0`.
    fn inline_mapper() -> (Script, MappedSourcesMapper) {
        let script = Script::builder(source("index.html"))
            .development_source(source("/site/index.html"))
            .range_in_source(Range::new(Position::new(20, 5), Position::new(30, 0)))
            .build();
        let mut builder = SourceMap::builder();
        builder.add_mapping(Position::new(0, 0), &source("a.ts"), Position::new(7, 0));
        let mapper = MappedSourcesMapper::new(script.clone(), Arc::new(builder.build()));
        (script, mapper)
    }

    #[test]
    fn test_position_in_source_inline_script() {
        let (script, mapper) = inline_mapper();
        let location =
            mapper.position_in_source(&LocationInScript::new(script, Position::new(20, 5)));
        assert_eq!(
            location,
            LocationInLoadedSource::new(source("a.ts"), Position::new(7, 0))
        );
    }

    #[test]
    fn test_position_on_line_before_script_falls_back() {
        let (script, mapper) = inline_mapper();
        let location =
            mapper.position_in_source(&LocationInScript::new(script, Position::new(2, 3)));
        assert_eq!(
            location,
            LocationInLoadedSource::new(source("/site/index.html"), Position::new(2, 3))
        );
    }

    #[test]
    fn test_position_before_script_on_opening_line_falls_back() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let (script, mapper) = inline_mapper();
        let mapper = mapper.with_observer(Arc::new(move |event: &MappingEvent| {
            sink.lock().unwrap().push(event.clone())
        }));

        let location =
            mapper.position_in_source(&LocationInScript::new(script.clone(), Position::new(20, 2)));
        assert_eq!(
            location,
            LocationInLoadedSource::new(source("/site/index.html"), Position::new(20, 2))
        );
        assert_eq!(
            *events.lock().unwrap(),
            vec![MappingEvent::FallbackToDevelopmentSource {
                script,
                position: Position::new(20, 2),
            }]
        );
    }

    #[test]
    fn test_position_in_script_reports_every_token() {
        let mapper = mapper_for(bundle());
        let tokens = mapper
            .position_in_script(&LocationInLoadedSource::new(
                source("a.ts"),
                Position::new(3, 0),
            ))
            .unwrap();
        // Generated order, since the builder sorts tokens by generated position.
        assert_eq!(
            tokens.ranges(),
            &[Range::at(Position::new(2, 8)), Range::at(Position::new(4, 6))]
        );
    }

    #[test]
    fn test_position_in_script_outside_range() {
        let mapper = mapper_for(bundle());
        let tokens = mapper
            .position_in_script(&LocationInLoadedSource::new(
                source("a.ts"),
                Position::new(9, 0),
            ))
            .unwrap();
        assert_eq!(
            tokens,
            MappedTokensInScript::no_mapping(mapper.script().clone())
        );
    }

    #[test]
    fn test_position_in_script_unknown_source() {
        let mapper = mapper_for(bundle());
        let tokens = mapper
            .position_in_script(&LocationInLoadedSource::new(
                source("b.ts"),
                Position::new(1, 0),
            ))
            .unwrap();
        assert!(!tokens.is_mapped());
    }

    #[test]
    fn test_in_range_without_token_is_empty_mapping() {
        let mapper = mapper_for(bundle());
        let tokens = mapper
            .position_in_script(&LocationInLoadedSource::new(
                source("a.ts"),
                Position::new(2, 5),
            ))
            .unwrap();
        assert!(tokens.is_mapped());
        assert!(tokens.ranges().is_empty());
    }

    #[test]
    fn test_sources() {
        let mapper = mapper_for(bundle());
        assert_eq!(mapper.sources(), vec![source("a.ts")]);
    }

    #[test]
    fn test_observer_receives_decisions() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let script = bundle();
        let mapper = mapper_for(script.clone()).with_observer(Arc::new(move |event: &MappingEvent| {
            sink.lock().unwrap().push(event.clone())
        }));

        let outside = LocationInLoadedSource::new(source("a.ts"), Position::new(9, 0));
        mapper.position_in_script(&outside).unwrap();
        mapper.position_in_source(&LocationInScript::new(
            script.clone(),
            Position::new(0, 31),
        ));

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                MappingEvent::OutsideMappedRange {
                    script: script.clone(),
                    location: outside,
                },
                MappingEvent::FallbackToDevelopmentSource {
                    script,
                    position: Position::new(0, 31),
                },
            ]
        );
    }

    #[test]
    fn test_display() {
        let mapper = mapper_for(bundle());
        insta::assert_snapshot!(
            mapper.to_string(),
            @"Mapped sources mapper of bundle.js into [a.ts]"
        );
    }
}

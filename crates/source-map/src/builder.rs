//! In-memory decoded source map and its builder.

use crate::{AuthoredPosition, SourceMapLookup};
use rustc_hash::FxHashMap;
use script_locations::{LoadedSource, LocationInLoadedSource, Position, Range};

/// The authored side of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Original {
    /// Index into [`SourceMap::sources`].
    pub source: usize,
    /// The authored position.
    pub position: Position,
}

/// A single token: a generated position and where it came from, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    /// The position in the generated script.
    pub generated: Position,
    /// The authored position, or `None` for a segment with no origin.
    pub original: Option<Original>,
}

/// A decoded source map from a generated script to its authored sources.
#[derive(Debug, Clone, Default)]
pub struct SourceMap {
    sources: Vec<LoadedSource>,
    source_indices: FxHashMap<LoadedSource, usize>,
    /// Sorted by generated position.
    mappings: Vec<Mapping>,
    /// Mapped tokens as `(original, generated)`, sorted by source and authored
    /// position, then by generated position.
    by_original: Vec<(Original, Position)>,
    ranges_in_sources: FxHashMap<LoadedSource, Range>,
}

impl SourceMap {
    /// Creates a new empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source map builder.
    pub fn builder() -> SourceMapBuilder {
        SourceMapBuilder::new()
    }

    /// Returns the number of mappings in this source map.
    #[inline]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if this source map has no mappings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Returns an iterator over all mappings, in generated order.
    pub fn mappings(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.iter()
    }

    /// The sources referenced by this map, in order of first appearance.
    pub fn sources(&self) -> &[LoadedSource] {
        &self.sources
    }

    /// Finds the mapping with the greatest generated position at or before
    /// `position` on the same line.
    fn find_mapping_for_generated(&self, position: Position) -> Option<&Mapping> {
        let idx = self.mappings.partition_point(|m| m.generated <= position);
        self.mappings[..idx]
            .last()
            .filter(|m| m.generated.line == position.line)
    }
}

impl SourceMapLookup for SourceMap {
    fn ranges_in_sources(&self) -> FxHashMap<LoadedSource, Range> {
        self.ranges_in_sources.clone()
    }

    fn authored_position(&self, position: Position) -> AuthoredPosition {
        let original = self
            .find_mapping_for_generated(position)
            .and_then(|m| m.original);

        match original {
            Some(original) => AuthoredPosition::Found(LocationInLoadedSource::new(
                self.sources[original.source].clone(),
                original.position,
            )),
            None => AuthoredPosition::NotFound,
        }
    }

    fn all_generated_positions_for(&self, location: &LocationInLoadedSource) -> Vec<Position> {
        let Some(&source) = self.source_indices.get(&location.source) else {
            return Vec::new();
        };

        let wanted = location.position;
        let start = self.by_original.partition_point(|(original, _)| {
            (original.source, original.position) < (source, wanted)
        });

        // The closest authored column at or after the requested one, on the same line.
        let Some(&(target, _)) = self
            .by_original
            .get(start)
            .filter(|(original, _)| {
                original.source == source && original.position.line == wanted.line
            })
        else {
            return Vec::new();
        };

        self.by_original[start..]
            .iter()
            .take_while(|(original, _)| *original == target)
            .map(|&(_, generated)| generated)
            .collect()
    }

    fn mapped_sources(&self) -> &[LoadedSource] {
        &self.sources
    }
}

/// A builder for constructing decoded source maps.
#[derive(Debug, Default)]
pub struct SourceMapBuilder {
    sources: Vec<LoadedSource>,
    source_indices: FxHashMap<LoadedSource, usize>,
    mappings: Vec<Mapping>,
}

impl SourceMapBuilder {
    /// Creates a new source map builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the script text at `generated` was compiled from `original` in `source`.
    pub fn add_mapping(&mut self, generated: Position, source: &LoadedSource, original: Position) {
        let source = self.intern(source);
        self.mappings.push(Mapping {
            generated,
            original: Some(Original {
                source,
                position: original,
            }),
        });
    }

    /// Records a generated segment that has no authored origin.
    pub fn add_unmapped(&mut self, generated: Position) {
        self.mappings.push(Mapping {
            generated,
            original: None,
        });
    }

    fn intern(&mut self, source: &LoadedSource) -> usize {
        if let Some(&idx) = self.source_indices.get(source) {
            return idx;
        }
        let idx = self.sources.len();
        self.sources.push(source.clone());
        self.source_indices.insert(source.clone(), idx);
        idx
    }

    /// Builds the final source map.
    pub fn build(mut self) -> SourceMap {
        // Stable, so tokens sharing a generated position keep insertion order.
        self.mappings.sort_by_key(|m| m.generated);

        // Stable again, so each run of equal authored positions stays in generated order.
        let mut by_original: Vec<(Original, Position)> = self
            .mappings
            .iter()
            .filter_map(|m| m.original.map(|original| (original, m.generated)))
            .collect();
        by_original.sort_by_key(|(original, _)| (original.source, original.position));

        let mut lines: FxHashMap<usize, (u32, u32)> = FxHashMap::default();
        for original in self.mappings.iter().filter_map(|m| m.original) {
            let line = original.position.line;
            lines
                .entry(original.source)
                .and_modify(|(min, max)| {
                    *min = (*min).min(line);
                    *max = (*max).max(line);
                })
                .or_insert((line, line));
        }

        let ranges_in_sources = lines
            .into_iter()
            .map(|(source, (min, max))| {
                (
                    self.sources[source].clone(),
                    Range::new(Position::new(min, 0), Position::new(max + 1, 0)),
                )
            })
            .collect();

        SourceMap {
            sources: self.sources,
            source_indices: self.source_indices,
            mappings: self.mappings,
            by_original,
            ranges_in_sources,
        }
    }
}

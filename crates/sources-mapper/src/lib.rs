//! Location mapping between runtime scripts and authored sources.
//!
//! A debugger attached to a JavaScript runtime sees positions in the scripts the
//! runtime executes, but wants to show them in the files the developer wrote.
//! This crate translates between the two using a decoded source map, taking
//! care of scripts inlined in `.html` documents at a non-zero offset.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use script_locations::{LoadedSource, LocationInLoadedSource, Position, Range, Script};
//! use source_map::SourceMap;
//! use sources_mapper::{MappedSourcesMapper, SourceMapper};
//!
//! let authored = LoadedSource::new("src/app.ts");
//! let mut builder = SourceMap::builder();
//! builder.add_mapping(Position::new(0, 4), &authored, Position::new(2, 0));
//!
//! // The script body starts on line 20, column 5 of index.html.
//! let script = Script::builder(LoadedSource::new("index.html"))
//!     .range_in_source(Range::new(Position::new(20, 5), Position::new(40, 0)))
//!     .build();
//! let mapper = MappedSourcesMapper::new(script, Arc::new(builder.build()));
//!
//! let tokens = mapper
//!     .position_in_script(&LocationInLoadedSource::new(authored, Position::new(2, 0)))
//!     .unwrap();
//! assert_eq!(tokens.ranges(), &[Range::at(Position::new(20, 9))]);
//! ```

mod error;
mod events;
mod mapped_tokens;
mod mapper;
mod options;
pub mod translator;

pub use error::{MapperError, Result};
pub use events::{MappingEvent, MappingObserver};
pub use mapped_tokens::MappedTokensInScript;
pub use mapper::{
    MappedSourcesMapper, NoMappedSourcesMapper, ScriptMapper, SourceMapper, SourcesProvider,
    UnmappedSourceMapper,
};
pub use options::{MapperOptions, TokenOrder};
pub use translator::{HtmlToScriptPositionTranslator, ScriptToHtmlPositionTranslator};

//! Coordinate primitives for the script/source mapping core.
//!
//! A debugger sees three coordinate spaces: positions inside a runtime script,
//! positions inside the document that embeds the script (an `.html` file with an
//! inline `<script>` block), and positions inside the authored source files a
//! source map points at. This crate provides the value types shared by all of
//! them. Lines and columns are zero-based and columns count UTF-16 code units,
//! matching the string indexing of the JavaScript runtime.

mod line_index;
mod location;
mod position;

pub use line_index::LineIndex;
pub use location::{LoadedSource, LocationInLoadedSource, LocationInScript, Script, ScriptBuilder};
pub use position::{Position, Range};

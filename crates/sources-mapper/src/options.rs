//! Options for mappers backed by a source map.

use serde::{Deserialize, Serialize};

/// How the generated tokens of one authored location are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenOrder {
    /// Keep the order the source map reported.
    #[default]
    AsReported,
    /// Sort ascending by document position.
    Sorted,
}

/// Options for a [`MappedSourcesMapper`](crate::MappedSourcesMapper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MapperOptions {
    /// Order of the ranges in a mapped result.
    pub token_order: TokenOrder,
}

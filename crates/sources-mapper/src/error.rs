//! Mapper error types.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for mapper operations.
pub type Result<T, E = MapperError> = std::result::Result<T, E>;

/// An error raised when a mapper is used for a location it has no authority over.
///
/// Lookups that simply find nothing are not errors: they produce
/// [`MappedTokensInScript::NoMapping`](crate::MappedTokensInScript::NoMapping)
/// or fall back to the development source.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum MapperError {
    /// The location belongs to a source the mapper cannot map.
    #[error("{mapper} can only map locations from its runtime or development source, yet the location provided was {location}")]
    #[diagnostic(
        code(sources_mapper::foreign_source),
        help("select the mapper built for the script that owns this source")
    )]
    ForeignSource {
        /// The offending location.
        location: String,
        /// Description of the mapper that rejected it.
        mapper: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MapperError::ForeignSource {
            location: "other.js:1:0".to_string(),
            mapper: "No sources mapper of app.js".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No sources mapper of app.js can only map locations from its runtime or development source, yet the location provided was other.js:1:0"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let error = MapperError::ForeignSource {
            location: String::new(),
            mapper: String::new(),
        };
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("sources_mapper::foreign_source"));
    }
}

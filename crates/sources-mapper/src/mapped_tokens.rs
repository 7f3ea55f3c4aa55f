//! Results of mapping an authored location into a script.

use script_locations::{LocationInScript, Range, Script};
use std::fmt;

/// The generated tokens an authored location corresponds to.
///
/// `Mapped` with no ranges means the location is inside the range the script's
/// source map covers but no token starts there. `NoMapping` means the location
/// is definitely outside anything the script could map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedTokensInScript {
    /// The location cannot map into this script.
    NoMapping {
        /// The script that was asked.
        script: Script,
    },
    /// The location maps to these ranges, relative to the embedding document.
    Mapped {
        /// The script holding the tokens.
        script: Script,
        /// One range per generated token, in the order the source map reported them.
        ranges: Vec<Range>,
    },
}

impl MappedTokensInScript {
    /// A result for a location that does not map into `script`.
    pub fn no_mapping(script: Script) -> Self {
        MappedTokensInScript::NoMapping { script }
    }

    /// A result holding the given document-relative token ranges.
    pub fn mapped(script: Script, ranges: Vec<Range>) -> Self {
        MappedTokensInScript::Mapped { script, ranges }
    }

    /// A single zero-width token at `location`.
    pub fn character_at(location: LocationInScript) -> Self {
        MappedTokensInScript::Mapped {
            ranges: vec![Range::at(location.position)],
            script: location.script,
        }
    }

    /// The script this result refers to.
    pub fn script(&self) -> &Script {
        match self {
            MappedTokensInScript::NoMapping { script }
            | MappedTokensInScript::Mapped { script, .. } => script,
        }
    }

    /// The token ranges. Empty for `NoMapping`.
    pub fn ranges(&self) -> &[Range] {
        match self {
            MappedTokensInScript::NoMapping { .. } => &[],
            MappedTokensInScript::Mapped { ranges, .. } => ranges,
        }
    }

    /// Returns true unless this is `NoMapping`.
    pub fn is_mapped(&self) -> bool {
        matches!(self, MappedTokensInScript::Mapped { .. })
    }

}

impl fmt::Display for MappedTokensInScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappedTokensInScript::NoMapping { script } => write!(f, "no mapped tokens in {script}"),
            MappedTokensInScript::Mapped { script, ranges } => {
                write!(f, "tokens in {script}: [")?;
                for (i, range) in ranges.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{range}")?;
                }
                f.write_str("]")
            }
        }
    }
}

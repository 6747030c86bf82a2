use std::fmt;

/// Errors produced by the outline-to-path pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A drawing or close command appeared before any `moveTo`.
    ///
    /// The stream index and operator name identify the offender so the
    /// caller can report which glyph was malformed.
    CommandBeforeMove {
        index: usize,
        operator: &'static str,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandBeforeMove { index, operator } => write!(
                f,
                "malformed outline: {operator} at command {index} precedes any moveTo"
            ),
        }
    }
}

impl std::error::Error for PathError {}

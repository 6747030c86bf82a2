//! Font loading and parsing errors.

use std::fmt;

/// Errors that can occur when loading or querying fonts.
#[derive(Debug)]
pub enum FontError {
    /// The font data could not be parsed.
    Parse(String),
    /// The font declares unusable global metrics.
    BadMetrics { units_per_em: u16 },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "font parse error: {msg}"),
            Self::BadMetrics { units_per_em } => {
                write!(f, "font declares invalid units per em: {units_per_em}")
            }
        }
    }
}

impl std::error::Error for FontError {}

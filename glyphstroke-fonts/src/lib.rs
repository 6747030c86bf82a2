//! Font loading, metrics, and glyph outline recording for glyphstroke.
//!
//! This crate wraps `ttf-parser` to provide OpenType font support. It
//! bridges font data to the core pipeline's types: outlines come out as
//! `glyphstroke_core::Command` streams in design units, and metrics
//! come out as plain integer values with the documented fallback policy
//! already applied.

pub mod data;
pub mod error;
pub mod metrics;
pub mod outline;

pub use data::FontData;
pub use error::FontError;
pub use metrics::FontMetrics;
pub use outline::OutlineRecorder;

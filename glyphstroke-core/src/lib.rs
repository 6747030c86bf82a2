//! Outline-to-centerline geometry pipeline for stroke-rendered glyphs.
//!
//! The fonts this crate targets fake hand-drawn strokes with filled
//! outlines: each contour traces forward along one edge of a stroke and
//! then doubles back over the same geometry. To render such a glyph as
//! an actual line drawing, each contour is cut down to its forward half,
//! reversed into conventional drawing order, and re-emitted as SVG path
//! data in a Y-down coordinate space.
//!
//! The pipeline is strictly sequential per glyph:
//!
//! 1. [`contour::segment`] cuts the raw command stream into contours;
//! 2. [`split::split_at_midpoint`] keeps each contour's forward half;
//! 3. [`reverse::reverse_contour`] flips the traversal direction;
//! 4. [`emit::Emitter`] applies `(x, y) → (x, ascent − y)` and
//!    serializes the result.
//!
//! [`render_path`] runs all four stages. It is pure: deterministic, no
//! I/O, no state shared between calls. Each glyph is independent, so
//! callers are free to process distinct glyphs concurrently.

pub mod command;
pub mod contour;
pub mod emit;
pub mod error;
pub mod reverse;
pub mod split;

pub use command::{points_close, Command, POINT_TOLERANCE};
pub use contour::Contour;
pub use error::PathError;

use emit::Emitter;

/// Run the full pipeline over one glyph's raw outline commands.
///
/// Returns the SVG path-data string for the glyph's centerline strokes,
/// or an empty string when the outline has no geometry at all (callers
/// should skip such glyphs entirely).
///
/// # Errors
///
/// Returns [`PathError`] when the stream is structurally malformed
/// (a drawing command precedes any `moveTo`). Failures are local to the
/// glyph; no state carries over to other glyphs.
pub fn render_path(commands: Vec<Command>, ascent: f64) -> Result<String, PathError> {
    let mut emitter = Emitter::new(ascent);
    for contour in contour::segment(commands)? {
        let contour = reverse::reverse_contour(split::split_at_midpoint(contour));
        for command in &contour.commands {
            emitter.step(command);
        }
    }
    Ok(emitter.finish())
}

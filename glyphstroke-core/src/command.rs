//! Drawing commands for glyph outlines.
//!
//! A glyph outline arrives as an ordered stream of [`Command`]s in font
//! design units (Y-up, origin at the baseline). The stream is the exact
//! sequence recorded from the font's outline tables; no normalization
//! happens before the pipeline stages consume it.

use kurbo::Point;

/// Tolerance, in font design units, for deciding that two points
/// coincide. Outline coordinates are nominally integral, so half a unit
/// absorbs any rounding introduced along the way.
pub const POINT_TOLERANCE: f64 = 0.5;

/// Whether two points are within [`POINT_TOLERANCE`] on both axes.
///
/// Exact float equality is never used for point identity.
#[inline]
#[must_use]
pub fn points_close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= POINT_TOLERANCE && (a.y - b.y).abs() <= POINT_TOLERANCE
}

/// One drawing command in a glyph outline.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a new contour at the point.
    MoveTo(Point),
    /// Straight segment to the point.
    LineTo(Point),
    /// Cubic Bezier segment: control 1, control 2, endpoint.
    CurveTo(Point, Point, Point),
    /// Quadratic Bezier run (TrueType-style): one or more control
    /// points, possibly spanning several segments with implied on-curve
    /// midpoints between consecutive controls.
    ///
    /// `on_curve` is the final on-curve point. `None` means the run
    /// closes implicitly back onto the contour's starting point.
    QCurveTo {
        points: Vec<Point>,
        on_curve: Option<Point>,
    },
    /// Close the contour back to its starting point.
    ClosePath,
    /// Finish an open contour without closing it.
    EndPath,
    /// An operator the pipeline does not interpret: an opaque serializer
    /// verb plus its operand points. Carried through the transform and
    /// serializer verbatim.
    Other { op: char, points: Vec<Point> },
}

impl Command {
    /// The terminal on-curve point of this command, if it has one.
    ///
    /// For a quadratic run whose final on-curve point is implicit, this
    /// is the last control point (the last non-absent operand); callers
    /// that need the true landing point must resolve the implicit close
    /// against the contour start themselves.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::CurveTo(_, _, p) => Some(*p),
            Self::QCurveTo { points, on_curve } => on_curve.or_else(|| points.last().copied()),
            Self::ClosePath | Self::EndPath => None,
            Self::Other { points, .. } => points.last().copied(),
        }
    }

    /// Whether this command draws geometry (anything that is not a
    /// move or a close/end marker).
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        !matches!(self, Self::MoveTo(_) | Self::ClosePath | Self::EndPath)
    }

    /// Short operator name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MoveTo(_) => "moveTo",
            Self::LineTo(_) => "lineTo",
            Self::CurveTo(..) => "curveTo",
            Self::QCurveTo { .. } => "qCurveTo",
            Self::ClosePath => "closePath",
            Self::EndPath => "endPath",
            Self::Other { .. } => "unrecognized",
        }
    }
}

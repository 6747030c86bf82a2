//! Path emitter.
//!
//! Replays a processed command list through the font-to-output
//! coordinate transform and serializes it as SVG path data.
//!
//! The transform is `(x, y) → (x, ascent − y)`: font space is Y-up with
//! the origin on the baseline, output space is Y-down with the origin at
//! the top of the ascent.
//!
//! Close handling is deliberate: after the midpoint split most contours
//! are intentionally open, and a naive `Z` would add a spurious segment
//! back to the start. A `closePath` is serialized only when the current
//! point is within tolerance of the contour start, or when the previous
//! command was a quadratic run that already landed on the start
//! implicitly. `endPath` never closes; it only resets tracking state.

use std::fmt::Write;

use kurbo::Point;

use crate::command::{points_close, Command};

/// Decimal places written per coordinate before trailing-zero trimming.
const PRECISION: usize = 4;

/// Per-contour tracking state.
///
/// `contour_start == None` means the emitter is outside any contour;
/// a `moveTo` enters one, and close/end markers leave it.
#[derive(Debug, Clone, Copy, Default)]
struct Track {
    contour_start: Option<Point>,
    last_point: Option<Point>,
    /// Whether the previous command was a quadratic run with an absent
    /// final operand, i.e. an implicit close onto the contour start.
    implicit_close: bool,
}

/// Serializes processed commands into an SVG path-data string.
#[derive(Debug)]
pub struct Emitter {
    ascent: f64,
    d: String,
    track: Track,
}

impl Emitter {
    #[must_use]
    pub fn new(ascent: f64) -> Self {
        Self {
            ascent,
            d: String::new(),
            track: Track::default(),
        }
    }

    /// Apply the vertical flip: `(x, y) → (x, ascent − y)`.
    fn project(&self, p: Point) -> Point {
        Point::new(p.x, self.ascent - p.y)
    }

    /// Feed one command through the transform and serializer.
    pub fn step(&mut self, command: &Command) {
        match command {
            Command::MoveTo(p) => {
                self.track = Track {
                    contour_start: Some(*p),
                    last_point: Some(*p),
                    implicit_close: false,
                };
                self.write_verb('M', &[*p]);
            }
            Command::LineTo(p) => {
                self.write_verb('L', &[*p]);
                self.track.last_point = Some(*p);
                self.track.implicit_close = false;
            }
            Command::CurveTo(c1, c2, p) => {
                self.write_verb('C', &[*c1, *c2, *p]);
                self.track.last_point = Some(*p);
                self.track.implicit_close = false;
            }
            Command::QCurveTo { points, on_curve } => {
                self.write_quadratic(points, *on_curve);
                if on_curve.is_none() && self.track.contour_start.is_some() {
                    self.track.last_point = self.track.contour_start;
                    self.track.implicit_close = true;
                } else {
                    if let Some(p) = command.last_point() {
                        self.track.last_point = Some(p);
                    }
                    self.track.implicit_close = false;
                }
            }
            Command::ClosePath => {
                if let (Some(start), Some(last)) =
                    (self.track.contour_start, self.track.last_point)
                {
                    if points_close(last, start) || self.track.implicit_close {
                        self.d.push('Z');
                    }
                }
                self.track = Track::default();
            }
            Command::EndPath => {
                self.track = Track::default();
            }
            Command::Other { op, points } => {
                self.write_verb(*op, points);
                if let Some(p) = points.last() {
                    self.track.last_point = Some(*p);
                }
                self.track.implicit_close = false;
            }
        }
    }

    /// The accumulated path-data string. Empty if nothing was emitted.
    #[must_use]
    pub fn finish(self) -> String {
        self.d
    }

    /// Serialize a quadratic run, splitting multi-control runs into
    /// single-control `Q` segments at the implied on-curve midpoints
    /// between consecutive controls. An absent final operand lands on
    /// the contour start.
    fn write_quadratic(&mut self, controls: &[Point], on_curve: Option<Point>) {
        let Some(landing) = on_curve.or(self.track.contour_start) else {
            // No contour start to close onto; the segmenter never lets
            // a quadratic precede a moveTo, so nothing sensible exists
            // to draw.
            return;
        };

        match controls {
            [] => self.write_verb('L', &[landing]),
            [.., last] => {
                for pair in controls.windows(2) {
                    let implied = pair[0].midpoint(pair[1]);
                    self.write_verb('Q', &[pair[0], implied]);
                }
                self.write_verb('Q', &[*last, landing]);
            }
        }
    }

    fn write_verb(&mut self, verb: char, points: &[Point]) {
        self.d.push(verb);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.d.push(' ');
            }
            let p = self.project(*p);
            write_point(&mut self.d, p.x, p.y);
        }
    }
}

/// Write "x,y" with trailing zeros trimmed. Negative zero is normalized.
fn write_point(d: &mut String, x: f64, y: f64) {
    write_scalar(d, x);
    d.push(',');
    write_scalar(d, y);
}

fn write_scalar(d: &mut String, v: f64) {
    let v = if v == 0.0 { 0.0 } else { v };
    let s = format!("{:.1$}", v, PRECISION);
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        &s
    };
    let _ = write!(d, "{trimmed}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn emit(ascent: f64, commands: &[Command]) -> String {
        let mut emitter = Emitter::new(ascent);
        for command in commands {
            emitter.step(command);
        }
        emitter.finish()
    }

    #[test]
    fn test_coordinate_flip() {
        // ascent 750: (200, 300) → (200, 450).
        let d = emit(750.0, &[Command::MoveTo(pt(200.0, 300.0))]);
        assert_eq!(d, "M200,450");
    }

    #[test]
    fn test_line_and_cubic_serialization() {
        let d = emit(
            100.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::LineTo(pt(10.0, 0.0)),
                Command::CurveTo(pt(20.0, 10.0), pt(30.0, 10.0), pt(40.0, 0.0)),
            ],
        );
        assert_eq!(d, "M0,100L10,100C20,90 30,90 40,100");
    }

    #[test]
    fn test_close_suppressed_when_far_from_start() {
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::LineTo(pt(100.0, 100.0)),
                Command::ClosePath,
            ],
        );
        assert!(!d.contains('Z'), "unexpected close in {d}");
    }

    #[test]
    fn test_close_emitted_when_within_tolerance() {
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::LineTo(pt(100.0, 100.0)),
                Command::LineTo(pt(0.4, 0.3)),
                Command::ClosePath,
            ],
        );
        assert!(d.ends_with('Z'), "expected close in {d}");
    }

    #[test]
    fn test_close_emitted_after_implicit_quadratic_close() {
        // The run ends far from the start point-wise, but its absent
        // final operand means it already landed on the start.
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::LineTo(pt(50.0, 50.0)),
                Command::QCurveTo {
                    points: vec![pt(80.0, 80.0)],
                    on_curve: None,
                },
                Command::ClosePath,
            ],
        );
        assert!(d.ends_with('Z'), "expected close in {d}");
    }

    #[test]
    fn test_end_path_never_closes() {
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::LineTo(pt(0.1, 0.1)),
                Command::EndPath,
            ],
        );
        assert!(!d.contains('Z'), "endPath must not close: {d}");
    }

    #[test]
    fn test_state_resets_between_contours() {
        // The second contour's close must compare against the second
        // start, not the first.
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::LineTo(pt(100.0, 0.0)),
                Command::ClosePath,
                Command::MoveTo(pt(200.0, 0.0)),
                Command::LineTo(pt(200.2, 0.0)),
                Command::ClosePath,
            ],
        );
        assert_eq!(d.matches('Z').count(), 1, "one close expected: {d}");
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn test_quadratic_single_control() {
        let d = emit(
            10.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::QCurveTo {
                    points: vec![pt(5.0, 10.0)],
                    on_curve: Some(pt(10.0, 0.0)),
                },
            ],
        );
        assert_eq!(d, "M0,10Q5,0 10,10");
    }

    #[test]
    fn test_quadratic_multi_control_splits_at_midpoints() {
        // Controls (2,4) and (6,4): implied on-curve point at (4,4).
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::QCurveTo {
                    points: vec![pt(2.0, 4.0), pt(6.0, 4.0)],
                    on_curve: Some(pt(8.0, 0.0)),
                },
            ],
        );
        assert_eq!(d, "M0,0Q2,-4 4,-4Q6,-4 8,0");
    }

    #[test]
    fn test_quadratic_without_controls_degrades_to_line() {
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::QCurveTo {
                    points: vec![],
                    on_curve: Some(pt(10.0, 0.0)),
                },
            ],
        );
        assert_eq!(d, "M0,0L10,0");
    }

    #[test]
    fn test_implicit_close_lands_on_contour_start() {
        let d = emit(
            0.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::QCurveTo {
                    points: vec![pt(10.0, 10.0)],
                    on_curve: None,
                },
            ],
        );
        assert_eq!(d, "M0,0Q10,-10 0,0");
    }

    #[test]
    fn test_unrecognized_command_passes_through() {
        let d = emit(
            100.0,
            &[
                Command::MoveTo(pt(0.0, 0.0)),
                Command::Other {
                    op: 'T',
                    points: vec![pt(10.0, 20.0)],
                },
                Command::LineTo(pt(20.0, 0.0)),
            ],
        );
        assert_eq!(d, "M0,100T10,80L20,100");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(emit(500.0, &[]), "");
    }

    #[test]
    fn test_trailing_zero_trimming() {
        let d = emit(0.0, &[Command::MoveTo(pt(1.25, -1.5))]);
        assert_eq!(d, "M1.25,1.5");
    }

    #[test]
    fn test_negative_zero_normalized() {
        let d = emit(0.0, &[Command::MoveTo(pt(-0.0, 0.0))]);
        assert_eq!(d, "M0,0");
    }
}

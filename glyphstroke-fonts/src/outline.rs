//! Outline recording.
//!
//! [`OutlineRecorder`] adapts `ttf_parser`'s outline callbacks into the
//! core pipeline's [`Command`] stream. Coordinates stay in font design
//! units; the pipeline's emitter owns the output-space transform.

use glyphstroke_core::Command;
use kurbo::Point;

/// Records a glyph's outline callbacks as an ordered command stream.
#[derive(Debug, Default)]
pub struct OutlineRecorder {
    commands: Vec<Command>,
}

impl OutlineRecorder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// The recorded command stream, in callback order.
    #[must_use]
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}

impl ttf_parser::OutlineBuilder for OutlineRecorder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands
            .push(Command::MoveTo(Point::new(f64::from(x), f64::from(y))));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands
            .push(Command::LineTo(Point::new(f64::from(x), f64::from(y))));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(Command::QCurveTo {
            points: vec![Point::new(f64::from(x1), f64::from(y1))],
            on_curve: Some(Point::new(f64::from(x), f64::from(y))),
        });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(Command::CurveTo(
            Point::new(f64::from(x1), f64::from(y1)),
            Point::new(f64::from(x2), f64::from(y2)),
            Point::new(f64::from(x), f64::from(y)),
        ));
    }

    fn close(&mut self) {
        self.commands.push(Command::ClosePath);
    }
}

//! Midpoint splitter.
//!
//! The fonts this pipeline targets encode each stroke as a closed
//! outline that traces forward along one edge and then doubles back
//! over the same geometry. For centerline stroking only the forward
//! half is wanted; the splitter keeps the leading half of a contour's
//! drawing commands and drops the rest, including the trailing close.
//!
//! The split point is `floor(n / 2)` over the drawing-command count.
//! This is a length heuristic, not a geometric detection of the
//! turnaround: it assumes the outline was built with a symmetric
//! forward/backward command count. Asymmetric contours are mis-split.

use crate::command::Command;
use crate::contour::Contour;

/// Keep only the forward half of a doubled-back outline contour.
///
/// The result is deliberately an open path: the trailing
/// `closePath`/`endPath` is dropped because the retained half is one
/// edge of the original stroke, not a closed shape. Contours with fewer
/// than three commands, or with no drawing commands at all, are
/// returned unchanged.
#[must_use]
pub fn split_at_midpoint(contour: Contour) -> Contour {
    if contour.len() < 3 {
        return contour;
    }

    let mut move_to = None;
    let mut drawing = Vec::with_capacity(contour.len());
    for command in &contour.commands {
        match command {
            Command::MoveTo(_) => move_to = Some(command.clone()),
            Command::ClosePath | Command::EndPath => {}
            _ => drawing.push(command.clone()),
        }
    }

    if drawing.is_empty() {
        return contour;
    }

    let midpoint = drawing.len() / 2;
    drawing.truncate(midpoint);

    let mut commands = Vec::with_capacity(midpoint + 1);
    if let Some(move_to) = move_to {
        commands.push(move_to);
    }
    commands.extend(drawing);
    Contour::new(commands)
}

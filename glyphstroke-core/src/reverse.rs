//! Contour reverser.
//!
//! After the midpoint split a contour holds the forward half of the
//! original outline, traced in the outline's own direction. Reversing
//! it yields the conventional drawing direction while preserving each
//! segment's shape:
//!
//! - a line keeps its shape by construction;
//! - a cubic is reversed by swapping its two control points along with
//!   its endpoints;
//! - a quadratic run is reversed by reversing its operand list
//!   (excluding an absent implicit on-curve marker) and appending the
//!   preceding on-curve point as the new landing point.
//!
//! The reversed contour visits the same on-curve points as the input,
//! in exactly reverse order.

use kurbo::Point;

use crate::command::Command;
use crate::contour::Contour;

/// Reverse the traversal direction of a contour.
///
/// The contour must be non-empty and begin with `moveTo`; anything else
/// is returned unchanged, as is a contour with no drawing commands. A
/// trailing `closePath`/`endPath` is stripped before reversal (normally
/// already absent after the midpoint split).
#[must_use]
pub fn reverse_contour(contour: Contour) -> Contour {
    if contour.len() < 2 {
        return contour;
    }
    let Some(&Command::MoveTo(start)) = contour.commands.first() else {
        return contour;
    };

    let mut ops = &contour.commands[1..];
    if matches!(ops.last(), Some(Command::ClosePath | Command::EndPath)) {
        ops = &ops[..ops.len() - 1];
    }
    if ops.is_empty() {
        return contour;
    }

    // Terminal on-curve point contributed by each drawing command. For
    // an implicitly closed quadratic run this is its last control point,
    // the last non-absent operand.
    let terminals: Vec<Option<Point>> = ops.iter().map(Command::last_point).collect();

    // On-curve point immediately preceding command `i` in the original
    // traversal order.
    let preceding =
        |i: usize| -> Point { terminals[..i].iter().rev().find_map(|t| *t).unwrap_or(start) };

    let new_start = terminals.iter().rev().find_map(|t| *t).unwrap_or(start);
    let mut commands = Vec::with_capacity(ops.len() + 1);
    commands.push(Command::MoveTo(new_start));

    for (i, op) in ops.iter().enumerate().rev() {
        let prev = preceding(i);
        match op {
            Command::LineTo(_) => commands.push(Command::LineTo(prev)),
            Command::CurveTo(c1, c2, _) => commands.push(Command::CurveTo(*c2, *c1, prev)),
            Command::QCurveTo { points, on_curve } => {
                let mut operands = points.clone();
                operands.extend(on_curve.iter().copied());
                operands.reverse();
                commands.push(Command::QCurveTo {
                    points: operands,
                    on_curve: Some(prev),
                });
            }
            // Uninterpreted commands keep their operands; only their
            // position in the traversal is reversed.
            Command::Other { .. } => commands.push(op.clone()),
            // Interior move/close markers cannot be reversed
            // meaningfully and do not survive.
            Command::MoveTo(_) | Command::ClosePath | Command::EndPath => {}
        }
    }

    Contour::new(commands)
}

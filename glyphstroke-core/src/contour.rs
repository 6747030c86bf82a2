//! Contours and the contour segmenter.
//!
//! A contour is one sub-path of a glyph outline: exactly one leading
//! `moveTo`, the drawing commands that follow it, and optionally a
//! trailing close/end marker. The segmenter cuts the raw command stream
//! into contours at `moveTo` boundaries, preserving command order.

use crate::command::Command;
use crate::error::PathError;

/// One sub-path of a glyph outline.
///
/// Invariant (established by [`segment`]): `commands` is non-empty and
/// starts with [`Command::MoveTo`]. A contour whose `moveTo` is followed
/// by nothing is degenerate but valid, and later stages pass it through
/// untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    pub commands: Vec<Command>,
}

impl Contour {
    #[must_use]
    pub const fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Number of commands, including the leading `moveTo`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Split a raw command stream into contours at `moveTo` boundaries.
///
/// Concatenating the returned contours in order reproduces the input
/// stream exactly; nothing is reordered, dropped, or synthesized.
///
/// # Errors
///
/// Returns [`PathError::CommandBeforeMove`] if any command precedes the
/// first `moveTo`, so the caller can skip that glyph and keep exporting
/// the rest of the font.
pub fn segment(commands: Vec<Command>) -> Result<Vec<Contour>, PathError> {
    let mut contours = Vec::new();
    let mut current: Vec<Command> = Vec::new();

    for (index, command) in commands.into_iter().enumerate() {
        match command {
            Command::MoveTo(_) => {
                if !current.is_empty() {
                    contours.push(Contour::new(std::mem::take(&mut current)));
                }
                current.push(command);
            }
            _ if current.is_empty() => {
                return Err(PathError::CommandBeforeMove {
                    index,
                    operator: command.name(),
                });
            }
            _ => current.push(command),
        }
    }

    if !current.is_empty() {
        contours.push(Contour::new(current));
    }

    Ok(contours)
}

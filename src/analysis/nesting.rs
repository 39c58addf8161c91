//! Loop nesting depth estimation.
//!
//! Nesting is approximated from the line stream rather than from real block
//! scopes: every loop-start line opens a level, and a blank line or a line
//! back at column zero closes one. Code that dedents without a blank line
//! (for example a second loop body at the same indentation inside a
//! function) is therefore over-counted. This is a known limitation of the
//! heuristic and intentionally left as is.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Shape of a line as seen by the nesting counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineShape {
    /// Opens a loop clause
    LoopStart,
    /// Whitespace only
    Blank,
    /// Non-blank line starting at column zero
    Unindented,
    /// Any other non-blank line
    Indented,
}

/// Maximum loop nesting depth observed over `lines`.
///
/// The running counter never goes below zero.
#[must_use]
pub fn max_loop_nesting<I>(lines: I) -> u32
where
    I: IntoIterator<Item = LineShape>,
{
    let mut depth: u32 = 0;
    let mut max_depth: u32 = 0;

    for (idx, shape) in lines.into_iter().enumerate() {
        match shape {
            LineShape::LoopStart => {
                depth += 1;
                max_depth = max_depth.max(depth);
                trace!(line = idx + 1, depth, "loop start");
            }
            LineShape::Blank | LineShape::Unindented if depth > 0 => {
                depth -= 1;
            }
            _ => {}
        }
    }

    max_depth
}

//! Containment clamping - position-only correction against the canvas bounds.

use crate::types::{Rect, Size};

/// Move `rect` the shortest distance that puts it inside `boundary`, without
/// changing its size.
///
/// When the element is larger than the canvas the valid interval for an axis
/// is empty; the left/top edge wins and the element overflows right/bottom.
/// Idempotent: clamping an already-clamped rectangle is a no-op.
pub fn clamp_to_boundary(rect: Rect, boundary: Size) -> Rect {
    Rect {
        left: (boundary.width - rect.width).min(rect.left).max(0.0),
        top: (boundary.height - rect.height).min(rect.top).max(0.0),
        ..rect
    }
}

//! Wheel-resize solving - center-anchored scaling under growth, aspect, and
//! containment constraints.

use crate::constants::{MAX_GROWTH, MIN_ELEMENT_SIZE, RESIZE_STEP};
use crate::types::{Rect, Size};

/// Direction of a wheel tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Grow,
    Shrink,
}

impl WheelDirection {
    /// Map a raw wheel delta to a direction. A zero delta carries no intent.
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            0 => None,
            d if d > 0 => Some(Self::Grow),
            _ => Some(Self::Shrink),
        }
    }

    fn signed_step(self, step: f32) -> f32 {
        match self {
            Self::Grow => step,
            Self::Shrink => -step,
        }
    }
}

/// Numeric limits applied by the solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeLimits {
    /// Size change per wheel tick, on each affected axis
    pub step: f32,
    /// Maximum growth of a side beyond the element's original size
    pub max_growth: f32,
    /// Hard floor for both sides of the output
    pub min_size: f32,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            step: RESIZE_STEP,
            max_growth: MAX_GROWTH,
            min_size: MIN_ELEMENT_SIZE,
        }
    }
}

/// Compute the rectangle after one wheel tick on `current`.
///
/// The element scales around its center. When the result collides with the
/// boundary the solver shrinks before it repositions: the candidate side is
/// reduced to the largest center-preserving size on each axis, floored at
/// `min_size`, and only then are left/top clamped back into range (left/top
/// edges win when the floor leaves a residual overflow).
///
/// With `maintain_square` the two axes stay equal throughout; width is the
/// reference side for both the step and the growth cap, and the smaller
/// axis budget decides the shrink. `boundary` is `None` when the canvas
/// does not clip its elements.
pub fn resize(
    current: Rect,
    original: Size,
    direction: WheelDirection,
    boundary: Option<Size>,
    maintain_square: bool,
    limits: ResizeLimits,
) -> Rect {
    let center = current.center();
    let step = direction.signed_step(limits.step);

    let (mut width, mut height) = if maintain_square {
        let side = capped(current.width + step, original.width, limits);
        (side, side)
    } else {
        (
            capped(current.width + step, original.width, limits),
            capped(current.height + step, original.height, limits),
        )
    };

    if let Some(bounds) = boundary {
        let budget_x = axis_budget(center.x, bounds.width);
        let budget_y = axis_budget(center.y, bounds.height);
        if maintain_square {
            let side = width.min(budget_x).min(budget_y).max(limits.min_size);
            width = side;
            height = side;
        } else {
            width = width.min(budget_x).max(limits.min_size);
            height = height.min(budget_y).max(limits.min_size);
        }
    }

    let mut left = center.x - width / 2.0;
    let mut top = center.y - height / 2.0;

    if let Some(bounds) = boundary {
        left = (bounds.width - width).min(left).max(0.0);
        top = (bounds.height - height).min(top).max(0.0);
    }

    Rect {
        left,
        top,
        width,
        height,
    }
}

/// Candidate side after one step: clamped to `[min_size, original + growth]`.
fn capped(candidate: f32, original_side: f32, limits: ResizeLimits) -> f32 {
    let cap = (original_side + limits.max_growth).max(limits.min_size);
    candidate.clamp(limits.min_size, cap)
}

/// Largest center-preserving size on one axis: the element may extend at
/// most `center` toward the origin and `bound - center` away from it.
/// Negative when the center lies outside the boundary; the min-size floor
/// takes over in that case.
fn axis_budget(center: f32, bound: f32) -> f32 {
    2.0 * center.min(bound - center)
}

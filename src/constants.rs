//! Engine-wide policy constants.
//!
//! Centralizes magic numbers so the clamping and resize policies are
//! self-documenting and adjustable in one place.

// ============================================================================
// Size Policy
// ============================================================================

/// Hard floor for element width and height after any engine operation
pub const MIN_ELEMENT_SIZE: f32 = 10.0;

/// Size change per wheel tick, applied to each affected axis
pub const RESIZE_STEP: f32 = 10.0;

/// Maximum growth of a side beyond the element's registered original size
pub const MAX_GROWTH: f32 = 100.0;

// ============================================================================
// Canvas Defaults
// ============================================================================

/// Default canvas width in length units
pub const DEFAULT_CANVAS_WIDTH: f32 = 1024.0;

/// Default canvas height in length units
pub const DEFAULT_CANVAS_HEIGHT: f32 = 768.0;

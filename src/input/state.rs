//! Drag session state machine.
//!
//! A single explicit enum tracks the in-progress drag, replacing scattered
//! `is_dragging`/`dragged_element` flags and making impossible states
//! unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (pointer down on a registered element)
//! Dragging -> Dragging   (pointer move - anchor advances to the raw point)
//! Dragging -> Idle       (pointer up, or cancel on host capture loss)
//! ```
//!
//! A second pointer-down while already dragging is ignored; move/up events
//! while idle are no-ops. Out-of-order event delivery never faults.

use crate::types::{ElementId, Point};

/// The at-most-one drag in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No active drag
    #[default]
    Idle,

    /// A drag is in progress
    Dragging {
        /// Element being dragged
        element: ElementId,
        /// Pointer position of the previous sample. Deltas are measured
        /// against it, and it always advances to the raw pointer point
        /// rather than the clamped element position.
        anchor: Point,
    },
}

impl DragState {
    /// Returns true if no drag is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the element being dragged, if any
    pub fn dragged_element(&self) -> Option<ElementId> {
        match self {
            Self::Dragging { element, .. } => Some(*element),
            _ => None,
        }
    }

    /// Get the dragged element and current anchor point, if dragging
    pub fn session(&self) -> Option<(ElementId, Point)> {
        match self {
            Self::Dragging { element, anchor } => Some((*element, *anchor)),
            _ => None,
        }
    }

    /// Begin a drag. Ignored while another drag is active.
    pub fn begin(&mut self, element: ElementId, anchor: Point) {
        if self.is_idle() {
            *self = Self::Dragging { element, anchor };
        }
    }

    /// Advance the anchor to the latest raw pointer point.
    pub fn advance(&mut self, point: Point) {
        if let Self::Dragging { anchor, .. } = self {
            *anchor = point;
        }
    }

    /// End the drag normally (pointer up).
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    /// Abandon the drag unconditionally (host lost pointer capture).
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

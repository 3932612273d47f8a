//! Notification events emitted by the canvas.
//!
//! Events are pure data, fired synchronously as the return value of the
//! facade call that produced them. The host applies the carried rectangle
//! data to its visual tree and reacts however it likes (status text, etc.).

use crate::types::{ElementId, Point, Vector};
use serde::{Deserialize, Serialize};

/// A successful geometry update.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// An element arrived on the canvas from an external drop.
    ElementDropped { element: ElementId, position: Point },

    /// The dragged element moved. `position` is the clamped top-left corner;
    /// `delta` is the raw pointer displacement for this sample, which may
    /// exceed the applied movement while the element is pinned at an edge.
    ElementDragged {
        element: ElementId,
        position: Point,
        delta: Vector,
    },

    /// The hovered element was resized by a wheel tick.
    ElementResized {
        element: ElementId,
        width: f32,
        height: f32,
        position: Point,
    },
}

impl CanvasEvent {
    /// The element this event concerns.
    pub fn element(&self) -> ElementId {
        match self {
            Self::ElementDropped { element, .. }
            | Self::ElementDragged { element, .. }
            | Self::ElementResized { element, .. } => *element,
        }
    }
}

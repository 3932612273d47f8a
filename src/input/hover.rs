//! Hover tracking - the single element currently under the pointer.

use crate::types::ElementId;

/// Tracks the wheel-resize target.
///
/// Last-entered wins: overlapping or nested regions are not disambiguated
/// beyond real pointer semantics. A leave event for a non-current element
/// is a stale notification and is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    current: Option<ElementId>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently hovered element, if any
    pub fn current(&self) -> Option<ElementId> {
        self.current
    }

    /// Pointer entered `element`; it becomes the hover target unconditionally.
    pub fn enter(&mut self, element: ElementId) {
        self.current = Some(element);
    }

    /// Pointer left `element`; clears the hover only if it is still current.
    pub fn leave(&mut self, element: ElementId) {
        if self.current == Some(element) {
            self.current = None;
        }
    }

    /// Drop any hover target.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

//! Element registry - owns per-element registration state.

use crate::types::{ElementId, ElementKind, Rect, Size};
use std::collections::HashMap;
use tracing::debug;

/// A registered canvas element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegisteredElement {
    /// Capability tag supplied at registration
    pub kind: ElementKind,
    /// Current rectangle, updated by drag and resize
    pub rect: Rect,
    /// Size at first registration. Immutable; anchors the resize growth cap
    /// no matter how many resize operations follow.
    pub original: Size,
}

/// Owns the element-id to registration mapping.
///
/// First registration wins: the original size is captured exactly once per
/// id, and re-registering an existing id is a no-op. Preserving the true
/// original size across unregister/register cycles is explicitly not
/// guaranteed - a re-added element starts a fresh registration.
#[derive(Debug, Default)]
pub struct CanvasRegistry {
    elements: HashMap<ElementId, RegisteredElement>,
}

impl CanvasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element. Returns false if the id was already present
    /// (the stored entry is left untouched).
    pub fn register(&mut self, id: ElementId, kind: ElementKind, rect: Rect) -> bool {
        if self.elements.contains_key(&id) {
            return false;
        }
        self.elements.insert(
            id,
            RegisteredElement {
                kind,
                rect,
                original: rect.size(),
            },
        );
        debug!(id, ?kind, "registered canvas element");
        true
    }

    /// Drop an element's registration. Returns false if it was not present.
    pub fn unregister(&mut self, id: ElementId) -> bool {
        let removed = self.elements.remove(&id).is_some();
        if removed {
            debug!(id, "unregistered canvas element");
        }
        removed
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&RegisteredElement> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut RegisteredElement> {
        self.elements.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

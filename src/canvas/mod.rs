//! The draggable canvas facade.
//!
//! [`DraggableCanvas`] is the engine's entry point. The host feeds it raw
//! pointer and wheel events plus registration calls; the engine keeps the
//! authoritative rectangle for every element and hands corrected geometry
//! back through [`CanvasEvent`] return values.
//!
//! All calls are synchronous transformations of `(state, event)` into
//! `(state', output)`; the host guarantees serialized event delivery (true
//! of standard desktop event loops), so no locking is involved.
//!
//! ## Event protocol
//!
//! Per element, events are assumed ordered `enter -> move* -> leave` and
//! `down -> move* -> up`. Violations (a move while idle, a stale leave) are
//! treated as no-ops, never faults.

mod registry;

pub use registry::{CanvasRegistry, RegisteredElement};

use crate::events::CanvasEvent;
use crate::geometry::{ResizeLimits, WheelDirection, clamp_to_boundary, resize};
use crate::input::{DragState, HoverState};
use crate::settings::CanvasSettings;
use crate::types::{ElementId, ElementKind, Point, Rect, Size, Vector};
use tracing::{debug, trace};

/// A bounded 2D canvas with drag-to-move and wheel-to-resize elements.
#[derive(Debug, Default)]
pub struct DraggableCanvas {
    settings: CanvasSettings,
    registry: CanvasRegistry,
    drag: DragState,
    hover: HoverState,
}

impl DraggableCanvas {
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            settings,
            registry: CanvasRegistry::new(),
            drag: DragState::Idle,
            hover: HoverState::new(),
        }
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    /// Mutable access for the host; settings changes take effect on the
    /// next event.
    pub fn settings_mut(&mut self) -> &mut CanvasSettings {
        &mut self.settings
    }

    // ========================================================================
    // Registration & removal
    // ========================================================================

    /// Admission check for drag-over feedback: may `kind` land here at all?
    pub fn can_accept(&self, kind: ElementKind) -> bool {
        self.settings.is_allowed(kind)
    }

    /// Register an element with its initial rectangle, making it draggable
    /// and resizable. The rectangle's size at this moment becomes the
    /// element's original size, anchoring the resize growth cap.
    ///
    /// Returns true when the element is registered after the call;
    /// re-registering an existing id is a no-op that keeps the stored entry.
    /// Returns false when the kind fails the admission check.
    pub fn add_element(&mut self, id: ElementId, kind: ElementKind, rect: Rect) -> bool {
        if !self.can_accept(kind) {
            debug!(id, ?kind, "element kind not admitted");
            return false;
        }
        self.registry.register(id, kind, rect);
        true
    }

    /// External drop: register the element at the drop position and report
    /// it. Returns `None` when the kind is not admitted or the id is
    /// already registered.
    pub fn drop_element(
        &mut self,
        id: ElementId,
        kind: ElementKind,
        position: Point,
        size: Size,
    ) -> Option<CanvasEvent> {
        if !self.can_accept(kind) {
            debug!(id, ?kind, "dropped element kind not admitted");
            return None;
        }
        if !self.registry.register(id, kind, Rect::from_point_size(position, size)) {
            return None;
        }
        Some(CanvasEvent::ElementDropped {
            element: id,
            position,
        })
    }

    /// Drop an element's registration. A stale drag or hover referencing it
    /// is forced back to idle/empty.
    pub fn remove_element(&mut self, id: ElementId) {
        if self.registry.unregister(id) {
            if self.drag.dragged_element() == Some(id) {
                self.drag.cancel();
            }
            self.hover.leave(id);
        }
    }

    /// Remove every element and reset both trackers.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.drag.cancel();
        self.hover.clear();
    }

    // ========================================================================
    // Pointer events
    // ========================================================================

    /// Pointer pressed over `id`. Returns true when a drag began and the
    /// host should capture the pointer for the element. A press over an
    /// unregistered id, or while another drag is active, is ignored.
    pub fn pointer_down(&mut self, id: ElementId, point: Point) -> bool {
        if !self.drag.is_idle() || !self.registry.contains(id) {
            return false;
        }
        self.drag.begin(id, point);
        debug!(id, x = point.x, y = point.y, "drag started");
        true
    }

    /// Pointer moved. While a drag is active the element follows the raw
    /// pointer path, clamped into the canvas when clipping is enabled.
    ///
    /// The anchor tracks the raw pointer rather than the clamped element
    /// position, so a pointer that left the valid region pins the element
    /// at the edge and the element catches up smoothly on the way back.
    /// The emitted delta is the raw pointer displacement for this sample.
    pub fn pointer_move(&mut self, point: Point) -> Option<CanvasEvent> {
        let (id, anchor) = self.drag.session()?;
        let delta = Vector::between(anchor, point);
        self.drag.advance(point);

        let boundary = self.clip_boundary();
        let element = self.registry.get_mut(id)?;
        let mut rect = element.rect.translated(delta);
        if let Some(bounds) = boundary {
            rect = clamp_to_boundary(rect, bounds);
        }
        element.rect = rect;
        trace!(id, left = rect.left, top = rect.top, "element dragged");

        Some(CanvasEvent::ElementDragged {
            element: id,
            position: rect.origin(),
            delta,
        })
    }

    /// Pointer released. Returns true when a drag ended and the host should
    /// release pointer capture.
    pub fn pointer_up(&mut self) -> bool {
        let Some(id) = self.drag.dragged_element() else {
            return false;
        };
        self.drag.finish();
        debug!(id, "drag finished");
        true
    }

    /// Host lost pointer capture; abandon any drag in progress.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Pointer entered `id`; it becomes the wheel-resize target. Enter
    /// events are only meaningful for registered elements.
    pub fn pointer_enter(&mut self, id: ElementId) {
        if self.registry.contains(id) {
            self.hover.enter(id);
        }
    }

    /// Pointer left `id`. Stale leaves for a non-current element are
    /// ignored.
    pub fn pointer_leave(&mut self, id: ElementId) {
        self.hover.leave(id);
    }

    // ========================================================================
    // Wheel resize
    // ========================================================================

    /// Wheel tick over the canvas, routed to the hovered element. One step
    /// per call: the sign of `delta` picks grow or shrink, the magnitude is
    /// ignored. No hovered element, or a zero delta, is a no-op.
    pub fn wheel(&mut self, delta: i32) -> Option<CanvasEvent> {
        let direction = WheelDirection::from_delta(delta)?;
        let id = self.hover.current()?;
        let boundary = self.clip_boundary();
        let maintain_square = self.settings.maintain_square_aspect_ratio;

        let element = self.registry.get_mut(id)?;
        let rect = resize(
            element.rect,
            element.original,
            direction,
            boundary,
            maintain_square,
            ResizeLimits::default(),
        );
        element.rect = rect;
        trace!(id, width = rect.width, height = rect.height, "element resized");

        Some(CanvasEvent::ElementResized {
            element: id,
            width: rect.width,
            height: rect.height,
            position: rect.origin(),
        })
    }

    // ========================================================================
    // Read-back surface
    // ========================================================================

    /// Current rectangle of a registered element.
    pub fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.registry.get(id).map(|e| e.rect)
    }

    /// Full registration entry, including the immutable original size.
    pub fn element(&self, id: ElementId) -> Option<&RegisteredElement> {
        self.registry.get(id)
    }

    pub fn hovered_element(&self) -> Option<ElementId> {
        self.hover.current()
    }

    pub fn dragged_element(&self) -> Option<ElementId> {
        self.drag.dragged_element()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The boundary to constrain against, or `None` when clipping is off.
    fn clip_boundary(&self) -> Option<Size> {
        self.settings
            .clip_elements_to_canvas
            .then(|| self.settings.boundary())
    }
}

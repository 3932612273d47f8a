//! Core types for the clipcanvas geometry engine.
//!
//! Plain-old-data geometry primitives plus the element identifier and
//! capability tag the host attaches at registration time.

use serde::{Deserialize, Serialize};

/// Identifier for a canvas element.
///
/// Opaque to the engine: it is carried as a correlation token in events and
/// registry keys, never dereferenced. The host owns the mapping from ids to
/// actual visuals.
pub type ElementId = u64;

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A position in canvas coordinates. The canvas origin is fixed at (0, 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A displacement between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `from` to `to`.
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            x: to.x - from.x,
            y: to.y - from.y,
        }
    }
}

/// A width/height pair. Also used for the canvas boundary extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: position of the top-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_point_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Visual center; resize operations scale around it.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// The rectangle moved by `delta`, size unchanged.
    pub fn translated(&self, delta: Vector) -> Self {
        Self {
            left: self.left + delta.x,
            top: self.top + delta.y,
            ..*self
        }
    }
}

// ============================================================================
// Element Capability
// ============================================================================

/// Capability tag attached to an element at registration time.
///
/// Admission onto the canvas is decided against the configured allow-list
/// before any geometry runs; the engine never inspects the tag afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Text,
    Button,
    Image,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Rectangle,
        ElementKind::Ellipse,
        ElementKind::Text,
        ElementKind::Button,
        ElementKind::Image,
    ];
}

//! Boundary-constrained drag/resize geometry for 2D canvases.
//!
//! The host owns rendering, hit testing, and the event loop; clipcanvas owns
//! the geometry. Feed [`DraggableCanvas`] raw pointer and wheel events and it
//! returns corrected rectangles through [`CanvasEvent`] notifications:
//!
//! - dragging keeps elements inside the canvas without changing their size
//! - wheel resizing scales around the element center, capped at a fixed
//!   growth above the registered original size and floored at a minimum side
//! - when a resize collides with the boundary the element shrinks before it
//!   repositions
//!
//! Degenerate geometry (an element larger than the canvas, a canvas smaller
//! than the minimum element size) resolves by clamping policy; the engine
//! never panics on well-formed numeric input.

pub mod canvas;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod input;
pub mod settings;
pub mod types;

pub use canvas::DraggableCanvas;
pub use events::CanvasEvent;
pub use settings::CanvasSettings;

//! Pointer interaction state for the canvas.
//!
//! Both trackers are plain value objects owned by the canvas facade, never
//! process-wide singletons. They hold non-owning element handles valid only
//! until the next pointer-up/leave or unregistration.
//!
//! ## Modules
//!
//! - `state` - drag session state machine
//! - `hover` - hovered-element tracking for wheel resize

mod hover;
mod state;

pub use hover::HoverState;
pub use state::DragState;

//! Pointer input handling for the rectangle selection tool.
//!
//! ## Architecture
//!
//! The tool is a table-driven state machine (see [`crate::fsm`]). The host
//! feeds it raw [`PointerEvent`]s; the tool maps them to [`SelectState`]
//! events and dispatches. Stray events for the current state are ignored.
//!
//! ## Modules
//!
//! - `coords` - pixel points and normalized rectangles
//! - `state` - selection states, pointer events and the drag record
//! - `rect_select` - the tool, its transition table and lifecycle handlers
//! - `mouse_down` - press handling (drag start)
//! - `drag` - move handling and overlay drawing
//! - `mouse_up` - release/leave handling (selection finalization)

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod rect_select;
mod state;

pub use coords::{PixelPoint, PixelRect};
pub use rect_select::{RectSelect, SelectContext, SelectParams};
pub use state::{PointerEvent, SelectState, SelectionDrag};

//! Rectangle selection states and the transient drag record.
//!
//! ## State Transitions
//!
//! ```text
//! Off       -> Start                          (tool activated)
//! Start     -> MouseDown | MouseUp | MouseOut | Off
//! MouseDown -> MouseMove | Off
//! MouseMove -> Draw | MouseUp | MouseOut | Off
//! Draw      -> MouseMove | MouseUp | MouseOut | Off
//! MouseOut  -> Off | MouseDown
//! MouseUp   -> Off
//! ```
//!
//! Each state is also the name of the event that leads into it.

use super::coords::{PixelPoint, PixelRect};
use std::fmt;
use std::str::FromStr;

/// States (and events) of the rectangle selection tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectState {
    /// Tool inactive
    #[default]
    Off,
    /// Tool armed, waiting for a press
    Start,
    /// Pointer pressed, drag origin recorded
    MouseDown,
    /// Pointer moved while pressed
    MouseMove,
    /// Overlay repaint of the in-progress rectangle
    Draw,
    /// Pointer left the surface
    MouseOut,
    /// Pointer released, selection finalized
    MouseUp,
}

impl SelectState {
    pub const ALL: [SelectState; 7] = [
        SelectState::Off,
        SelectState::Start,
        SelectState::MouseDown,
        SelectState::MouseMove,
        SelectState::Draw,
        SelectState::MouseOut,
        SelectState::MouseUp,
    ];

    /// Event name as used by hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectState::Off => "off",
            SelectState::Start => "start",
            SelectState::MouseDown => "mousedown",
            SelectState::MouseMove => "mousemove",
            SelectState::Draw => "draw",
            SelectState::MouseOut => "mouseout",
            SelectState::MouseUp => "mouseup",
        }
    }

    /// Returns true while a press-drag gesture can still be completed
    pub fn is_dragging(self) -> bool {
        matches!(
            self,
            SelectState::MouseDown | SelectState::MouseMove | SelectState::Draw
        )
    }
}

impl fmt::Display for SelectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("unknown selection event: {s}"))
    }
}

/// Raw pointer input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PixelPoint),
    Move(PixelPoint),
    Up(PixelPoint),
    /// Pointer left the surface; the position is optional since not every
    /// host reports one on leave
    Leave(Option<PixelPoint>),
}

impl PointerEvent {
    /// Event the tool dispatches for this input.
    pub fn select_event(&self) -> SelectState {
        match self {
            PointerEvent::Down(_) => SelectState::MouseDown,
            PointerEvent::Move(_) => SelectState::MouseMove,
            PointerEvent::Up(_) => SelectState::MouseUp,
            PointerEvent::Leave(_) => SelectState::MouseOut,
        }
    }

    pub fn position(&self) -> Option<PixelPoint> {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => Some(p),
            PointerEvent::Leave(p) => p,
        }
    }
}

/// In-progress drag: where the press happened and where the pointer is now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionDrag {
    pub start: PixelPoint,
    pub current: PixelPoint,
}

impl SelectionDrag {
    pub fn new(start: PixelPoint) -> Self {
        Self {
            start,
            current: start,
        }
    }

    /// Update current pointer position
    pub fn set_current(&mut self, current: PixelPoint) {
        self.current = current;
    }

    /// Normalized rectangle between start and current.
    pub fn rect(&self) -> PixelRect {
        PixelRect::from_corners(self.start, self.current)
    }
}

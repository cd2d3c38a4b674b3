//! Rectangle selection tool.
//!
//! Wires the selection states into a [`StateMachine`] and exposes the
//! operations a host needs: arm the tool, feed it pointer events, let it
//! paint during the host's draw cycle, and turn it off.

use super::drag::{draw, mouse_move};
use super::mouse_down::mouse_down;
use super::mouse_up::{mouse_out, mouse_up};
use super::state::{PointerEvent, SelectState, SelectionDrag};
use super::coords::PixelPoint;
use crate::fsm::StateMachine;
use crate::host::{CursorStyle, InteractionMode, SkyHost};
use crate::selection::{CompletionCallback, SelectionListeners, SelectionResult};
use crate::style::SelectStyle;

/// Parameters carried by a selection event.
pub struct SelectParams<O> {
    /// Pointer position, for pointer events
    pub coo: Option<PixelPoint>,
    /// Completion callback, for `start`
    pub callback: Option<CompletionCallback<O>>,
}

impl<O> Default for SelectParams<O> {
    fn default() -> Self {
        Self {
            coo: None,
            callback: None,
        }
    }
}

impl<O> SelectParams<O> {
    pub fn at(coo: PixelPoint) -> Self {
        Self {
            coo: Some(coo),
            callback: None,
        }
    }

    pub fn with_callback(callback: CompletionCallback<O>) -> Self {
        Self {
            coo: None,
            callback: Some(callback),
        }
    }
}

/// Tool state lent to the transition handlers.
pub struct SelectContext<H: SkyHost> {
    pub(crate) host: H,
    pub(crate) style: SelectStyle,
    pub(crate) drag: Option<SelectionDrag>,
    pub(crate) callback: Option<CompletionCallback<H::Object>>,
    pub(crate) listeners: SelectionListeners<H::Object>,
    pub(crate) last_selection: Option<SelectionResult>,
}

type SelectMachine<H> =
    StateMachine<SelectState, SelectContext<H>, SelectParams<<H as crate::host::ObjectLookup>::Object>>;

/// Rectangular region selection driven by pointer events.
///
/// # Example
/// ```ignore
/// let mut tool = RectSelect::new(host, SelectStyle::default());
/// tool.start(|selection, objects| println!("{selection:?}: {}", objects.len()));
/// tool.handle_pointer(PointerEvent::Down(PixelPoint::new(10.0, 10.0)));
/// tool.handle_pointer(PointerEvent::Move(PixelPoint::new(50.0, 40.0)));
/// tool.handle_pointer(PointerEvent::Up(PixelPoint::new(50.0, 40.0)));
/// ```
pub struct RectSelect<H: SkyHost + 'static> {
    fsm: SelectMachine<H>,
    ctx: SelectContext<H>,
}

impl<H: SkyHost + 'static> RectSelect<H> {
    pub fn new(host: H, style: SelectStyle) -> Self {
        use SelectState::*;

        let fsm = StateMachine::builder(Off)
            .on(Off, Start, start::<H>)
            .on(Start, MouseDown, mouse_down::<H>)
            .on(Start, MouseUp, mouse_up::<H>)
            .on(Start, MouseOut, mouse_out::<H>)
            .on(Start, Off, off::<H>)
            .on(MouseDown, MouseMove, mouse_move::<H>)
            .on(MouseDown, Off, off::<H>)
            .on(MouseMove, Draw, draw::<H>)
            .on(MouseMove, MouseUp, mouse_up::<H>)
            .on(MouseMove, MouseOut, mouse_out::<H>)
            .on(MouseMove, Off, off::<H>)
            .on(Draw, MouseMove, mouse_move::<H>)
            .on(Draw, MouseUp, mouse_up::<H>)
            .on(Draw, MouseOut, mouse_out::<H>)
            .on(Draw, Off, off::<H>)
            .on(MouseOut, Off, off::<H>)
            .on(MouseOut, MouseDown, mouse_down::<H>)
            .on(MouseUp, Off, off::<H>)
            .build();

        Self {
            fsm,
            ctx: SelectContext {
                host,
                style,
                drag: None,
                callback: None,
                listeners: SelectionListeners::new(),
                last_selection: None,
            },
        }
    }

    #[inline]
    pub fn state(&self) -> SelectState {
        self.fsm.state()
    }

    /// Returns true unless the tool is `Off`
    pub fn is_active(&self) -> bool {
        self.state() != SelectState::Off
    }

    /// Whether `event` would be accepted in the current state.
    pub fn accepts(&self, event: SelectState) -> bool {
        self.fsm.accepts(event)
    }

    pub fn drag(&self) -> Option<&SelectionDrag> {
        self.ctx.drag.as_ref()
    }

    /// Most recent finalized selection, if any.
    pub fn last_selection(&self) -> Option<&SelectionResult> {
        self.ctx.last_selection.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.ctx.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.ctx.host
    }

    pub fn style(&self) -> &SelectStyle {
        &self.ctx.style
    }

    pub fn set_style(&mut self, style: SelectStyle) {
        self.ctx.style = style;
    }

    pub fn listeners_mut(&mut self) -> &mut SelectionListeners<H::Object> {
        &mut self.ctx.listeners
    }

    /// Dispatch a raw event. Returns whether the current state accepted it.
    pub fn dispatch(&mut self, event: SelectState, params: SelectParams<H::Object>) -> bool {
        self.fsm.dispatch(&mut self.ctx, event, params)
    }

    /// Arm the tool; `callback` receives every completed selection.
    pub fn start(&mut self, callback: impl FnMut(&SelectionResult, &[H::Object]) + 'static) -> bool {
        self.dispatch(
            SelectState::Start,
            SelectParams::with_callback(Box::new(callback)),
        )
    }

    /// Arm the tool without a completion callback; listeners still fire.
    pub fn activate(&mut self) -> bool {
        self.dispatch(SelectState::Start, SelectParams::default())
    }

    /// Map a host pointer event to its selection event and dispatch it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let params = SelectParams {
            coo: event.position(),
            callback: None,
        };
        self.dispatch(event.select_event(), params)
    }

    /// Called from the host's paint cycle.
    pub fn draw(&mut self) -> bool {
        self.dispatch(SelectState::Draw, SelectParams::default())
    }

    /// Cancel and return to idle.
    pub fn off(&mut self) -> bool {
        self.dispatch(SelectState::Off, SelectParams::default())
    }
}

fn start<H: SkyHost>(
    ctx: &mut SelectContext<H>,
    params: SelectParams<H::Object>,
) -> Option<SelectState> {
    ctx.callback = params.callback;
    ctx.drag = None;
    ctx.host.set_interaction_mode(InteractionMode::Select);
    ctx.host.set_cursor(CursorStyle::Crosshair);
    None
}

/// Restore the viewer and erase the in-progress rectangle.
fn off<H: SkyHost>(
    ctx: &mut SelectContext<H>,
    _params: SelectParams<H::Object>,
) -> Option<SelectState> {
    ctx.host.set_reticle_visible(true);
    ctx.host.set_interaction_mode(InteractionMode::Pan);
    ctx.host.set_cursor(CursorStyle::Default);
    ctx.host.request_redraw();
    None
}

//! Drag updates and overlay drawing.
//!
//! ## Performance Notes
//!
//! Moves arrive at pointer rate while draws arrive at paint rate. A move
//! only records the position and asks for a repaint; all painting happens
//! in `draw`, once per host frame.

use super::rect_select::{SelectContext, SelectParams};
use super::state::SelectState;
use crate::host::SkyHost;
use tracing::trace;

pub(super) fn mouse_move<H: SkyHost>(
    ctx: &mut SelectContext<H>,
    params: SelectParams<H::Object>,
) -> Option<SelectState> {
    if let (Some(drag), Some(coo)) = (ctx.drag.as_mut(), params.coo) {
        drag.set_current(coo);
    }
    ctx.host.request_redraw();
    None
}

/// Paint the in-progress rectangle. Touches nothing but the overlay.
pub(super) fn draw<H: SkyHost>(
    ctx: &mut SelectContext<H>,
    _params: SelectParams<H::Object>,
) -> Option<SelectState> {
    let drag = ctx.drag?;

    let style = ctx.style.rect_style(drag.start, drag.current);
    let rect = drag.rect();
    trace!(x = rect.x, y = rect.y, w = rect.w, h = rect.h, "Drawing selection");

    let overlay = ctx.host.overlay();
    overlay.fill_rect(rect, style.fill);
    overlay.stroke_rect(rect, style.stroke, style.line_width);
    None
}

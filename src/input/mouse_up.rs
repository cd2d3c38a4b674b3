//! Mouse up / mouse out handling - finalize the selection.

use super::coords::PixelPoint;
use super::rect_select::{SelectContext, SelectParams};
use super::state::SelectState;
use crate::host::{CursorStyle, SkyHost};
use crate::selection::{RegionSelection, SelectionResult};
use tracing::{debug, info, warn};

pub(super) fn mouse_up<H: SkyHost>(
    ctx: &mut SelectContext<H>,
    params: SelectParams<H::Object>,
) -> Option<SelectState> {
    finalize(ctx, params.coo);
    Some(SelectState::Off)
}

/// Leaving the surface mid-drag completes the selection instead of
/// abandoning it. Without a drag the tool just waits in `MouseOut`.
pub(super) fn mouse_out<H: SkyHost>(
    ctx: &mut SelectContext<H>,
    params: SelectParams<H::Object>,
) -> Option<SelectState> {
    if ctx.drag.is_none() {
        return None;
    }
    finalize(ctx, params.coo);
    Some(SelectState::Off)
}

/// Consume the drag record and notify everyone interested.
///
/// `coo` is the release position; when absent (a leave without position)
/// the last move position is used.
fn finalize<H: SkyHost>(ctx: &mut SelectContext<H>, coo: Option<PixelPoint>) {
    let Some(mut drag) = ctx.drag.take() else {
        debug!("Pointer released without a drag, nothing selected");
        return;
    };
    if let Some(coo) = coo {
        drag.set_current(coo);
    }

    let selection = SelectionResult::from_rect(drag.rect());
    let objects = ctx.host.objects_in_region(&selection);

    if let Some(callback) = ctx.callback.as_mut() {
        callback(&selection, &objects);
    }

    ctx.host.set_reticle_visible(true);
    ctx.host.set_cursor(CursorStyle::Default);

    if ctx.listeners.has_objects_listener() {
        ctx.host.select_objects(&objects);
        ctx.listeners.notify_objects(&objects);
    }

    if ctx.listeners.has_region_listener() {
        match RegionSelection::project(&selection, &ctx.host) {
            Some(region) => {
                ctx.listeners.notify_region(&region);
            }
            None => warn!("Selection region could not be projected, regionSelected skipped"),
        }
    }

    info!(
        x = selection.x(),
        y = selection.y(),
        w = selection.w(),
        h = selection.h(),
        objects = objects.len(),
        "Selection finalized"
    );
    ctx.last_selection = Some(selection);
}

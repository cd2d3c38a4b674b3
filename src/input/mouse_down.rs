//! Mouse down event handling - drag start.

use super::rect_select::{SelectContext, SelectParams};
use super::state::{SelectState, SelectionDrag};
use crate::host::SkyHost;
use tracing::{debug, warn};

/// Record where the drag begins. The switch to `MouseDown` has already
/// happened by the time this runs.
pub(super) fn mouse_down<H: SkyHost>(
    ctx: &mut SelectContext<H>,
    params: SelectParams<H::Object>,
) -> Option<SelectState> {
    let Some(coo) = params.coo else {
        warn!("Mouse down without a position, no drag started");
        return None;
    };

    debug!(x = coo.x, y = coo.y, "Selection drag started");
    ctx.drag = Some(SelectionDrag::new(coo));
    None
}

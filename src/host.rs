//! Interfaces to the embedding viewer.
//!
//! The selection tool never renders, projects or hit-tests by itself. It
//! talks to the host through these traits: a viewer for mode, cursor and
//! repaint requests, an overlay to paint the drag rectangle on, a projection
//! from pixels to the sky, and an object lookup for catalog sources inside
//! the selected region.

use crate::frame::{CooSystem, SkyCoord};
use crate::input::PixelRect;
use crate::selection::SelectionResult;
use crate::style::Color;

/// High-level input mode of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Dragging pans the view
    #[default]
    Pan,
    /// Dragging draws a selection
    Select,
}

/// Cursor shapes the tool asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
}

/// Drawing surface layered over the sky view.
pub trait Overlay {
    fn fill_rect(&mut self, rect: PixelRect, color: Color);
    fn stroke_rect(&mut self, rect: PixelRect, color: Color, line_width: f32);
}

/// Viewer state the tool is allowed to touch.
pub trait Viewer {
    fn set_interaction_mode(&mut self, mode: InteractionMode);
    fn set_cursor(&mut self, cursor: CursorStyle);
    fn set_reticle_visible(&mut self, visible: bool);
    /// Ask for a repaint. The host decides when it happens and calls back
    /// into the tool's `draw` from its paint cycle.
    fn request_redraw(&mut self);
    fn overlay(&mut self) -> &mut dyn Overlay;
}

/// Pixel to sky mapping of the current view.
pub trait Projection {
    /// Sky position under pixel `(x, y)`, or `None` when the pixel is off
    /// the projected sphere.
    fn pixel_to_sky(&self, x: f64, y: f64) -> Option<SkyCoord>;

    /// System of the coordinates returned by [`Projection::pixel_to_sky`].
    fn frame(&self) -> CooSystem {
        CooSystem::Icrs
    }
}

/// Catalog sources lookup for a finished selection.
pub trait ObjectLookup {
    type Object: Clone + 'static;

    fn objects_in_region(&self, region: &SelectionResult) -> Vec<Self::Object>;

    /// Mark `objects` as selected in the view. No-op by default.
    fn select_objects(&mut self, _objects: &[Self::Object]) {}
}

/// Everything a selection tool needs from its host.
pub trait SkyHost: Viewer + Projection + ObjectLookup {}

impl<T: Viewer + Projection + ObjectLookup> SkyHost for T {}

//! Finished selections and the listeners that receive them.
//!
//! ## Payloads
//!
//! - [`SelectionResult`] - normalized pixel rectangle handed to the
//!   completion callback together with the objects inside it
//! - [`RegionSelection`] - the same rectangle as four ICRS corners, for
//!   `regionSelected` listeners
//!
//! ## Listener Names
//!
//! Hosts that wire listeners by name use `"objectsSelected"` or `"select"`
//! for object lists (`objectsSelected` wins when both are set) and
//! `"regionSelected"` for the sky region.

use crate::constants::RECT_LABEL;
use crate::frame::{convert, CooSystem};
use crate::host::Projection;
use crate::input::{PixelPoint, PixelRect};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Immutable description of a finalized rectangular selection.
///
/// Width and height are never negative, whatever the drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionResult {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    label: &'static str,
}

impl SelectionResult {
    pub fn from_rect(rect: PixelRect) -> Self {
        let rect = PixelRect::from_corners(
            PixelPoint::new(rect.x, rect.y),
            PixelPoint::new(rect.x + rect.w, rect.y + rect.h),
        );
        Self {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            label: RECT_LABEL,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether `p` lies inside the selection, borders included.
    pub fn contains(&self, p: PixelPoint) -> bool {
        self.bbox().contains(p)
    }

    pub fn bbox(&self) -> PixelRect {
        PixelRect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Rect,
}

/// One region corner in ICRS degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SkyCorner {
    pub ra: f64,
    pub dec: f64,
}

/// Sky footprint of a selection, sent to `regionSelected` listeners.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSelection {
    #[serde(rename = "type")]
    pub kind: RegionKind,
    /// (min-x,min-y), (max-x,min-y), (max-x,max-y), (min-x,max-y)
    pub corners: [SkyCorner; 4],
}

impl RegionSelection {
    /// Project the corners of `selection` to the sky.
    ///
    /// Returns `None` if any corner falls off the projected sphere: a region
    /// always has exactly four corners.
    pub fn project<P: Projection + ?Sized>(
        selection: &SelectionResult,
        projection: &P,
    ) -> Option<Self> {
        let mut corners = [SkyCorner::default(); 4];
        let source_frame = projection.frame();

        for (slot, pixel) in corners.iter_mut().zip(selection.bbox().corners()) {
            let Some(sky) = projection.pixel_to_sky(pixel.x, pixel.y) else {
                warn!(x = pixel.x, y = pixel.y, "Selection corner is off the sky");
                return None;
            };
            let icrs = convert(sky, source_frame, CooSystem::Icrs);
            *slot = SkyCorner {
                ra: icrs.lon,
                dec: icrs.lat,
            };
        }

        Some(Self {
            kind: RegionKind::Rect,
            corners,
        })
    }
}

// ============================================================================
// Listeners
// ============================================================================

/// Called with the selection and the objects inside it.
pub type CompletionCallback<O> = Box<dyn FnMut(&SelectionResult, &[O])>;

/// Called with the objects inside a finished selection.
pub type ObjectsCallback<O> = Box<dyn FnMut(&[O])>;

/// Called with the sky footprint of a finished selection.
pub type RegionCallback = Box<dyn FnMut(&RegionSelection)>;

/// Errors from registering a listener by name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    #[error("Unknown selection event: {0}")]
    UnknownEvent(String),

    #[error("Event {name} does not take {expected}")]
    Mismatch { name: String, expected: &'static str },
}

/// Named selection events hosts can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    ObjectsSelected,
    Select,
    RegionSelected,
}

impl ListenerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListenerKind::ObjectsSelected => "objectsSelected",
            ListenerKind::Select => "select",
            ListenerKind::RegionSelected => "regionSelected",
        }
    }
}

impl FromStr for ListenerKind {
    type Err = ListenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "objectsSelected" => Ok(ListenerKind::ObjectsSelected),
            "select" => Ok(ListenerKind::Select),
            "regionSelected" => Ok(ListenerKind::RegionSelected),
            other => Err(ListenerError::UnknownEvent(other.to_string())),
        }
    }
}

/// Optional listeners notified when a selection completes.
pub struct SelectionListeners<O> {
    objects_selected: Option<ObjectsCallback<O>>,
    select: Option<ObjectsCallback<O>>,
    region_selected: Option<RegionCallback>,
}

impl<O> Default for SelectionListeners<O> {
    fn default() -> Self {
        Self {
            objects_selected: None,
            select: None,
            region_selected: None,
        }
    }
}

impl<O> SelectionListeners<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_objects_selected(&mut self, callback: impl FnMut(&[O]) + 'static) {
        self.objects_selected = Some(Box::new(callback));
    }

    pub fn on_select(&mut self, callback: impl FnMut(&[O]) + 'static) {
        self.select = Some(Box::new(callback));
    }

    pub fn on_region_selected(&mut self, callback: impl FnMut(&RegionSelection) + 'static) {
        self.region_selected = Some(Box::new(callback));
    }

    /// Register an object-list listener by event name.
    pub fn register_objects(
        &mut self,
        name: &str,
        callback: impl FnMut(&[O]) + 'static,
    ) -> Result<(), ListenerError> {
        match name.parse::<ListenerKind>()? {
            ListenerKind::ObjectsSelected => self.on_objects_selected(callback),
            ListenerKind::Select => self.on_select(callback),
            ListenerKind::RegionSelected => {
                return Err(ListenerError::Mismatch {
                    name: name.to_string(),
                    expected: "an object list",
                });
            }
        }
        Ok(())
    }

    /// Register a region listener by event name.
    pub fn register_region(
        &mut self,
        name: &str,
        callback: impl FnMut(&RegionSelection) + 'static,
    ) -> Result<(), ListenerError> {
        match name.parse::<ListenerKind>()? {
            ListenerKind::RegionSelected => {
                self.on_region_selected(callback);
                Ok(())
            }
            _ => Err(ListenerError::Mismatch {
                name: name.to_string(),
                expected: "a region",
            }),
        }
    }

    pub fn remove(&mut self, kind: ListenerKind) {
        match kind {
            ListenerKind::ObjectsSelected => self.objects_selected = None,
            ListenerKind::Select => self.select = None,
            ListenerKind::RegionSelected => self.region_selected = None,
        }
    }

    pub fn has_objects_listener(&self) -> bool {
        self.objects_selected.is_some() || self.select.is_some()
    }

    pub fn has_region_listener(&self) -> bool {
        self.region_selected.is_some()
    }

    /// Call `objectsSelected`, or `select` when the former is unset.
    pub fn notify_objects(&mut self, objects: &[O]) -> bool {
        match self.objects_selected.as_mut().or(self.select.as_mut()) {
            Some(callback) => {
                callback(objects);
                true
            }
            None => false,
        }
    }

    pub fn notify_region(&mut self, region: &RegionSelection) -> bool {
        match self.region_selected.as_mut() {
            Some(callback) => {
                callback(region);
                true
            }
            None => false,
        }
    }
}

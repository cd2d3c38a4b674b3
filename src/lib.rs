//! Interactive region selection for sky-map viewers.
//!
//! - [`fsm`] - small table-driven state machine
//! - [`input`] - the rectangle selection tool built on it
//! - [`frame`] - ICRS/Galactic conversion and the frame registry
//! - [`selection`] - selection payloads and listeners
//! - [`host`] - traits the embedding viewer implements
//! - [`spatial_index`] - R-tree object lookup for catalog sources
//! - [`settings`] - persisted style settings

pub mod constants;
pub mod frame;
pub mod fsm;
pub mod host;
pub mod input;
pub mod logging;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod style;

pub use frame::{CooSystem, FrameDescriptor, SkyCoord};
pub use fsm::{StateMachine, StateMachineBuilder};
pub use host::{ObjectLookup, Overlay, Projection, SkyHost, Viewer};
pub use input::{PixelPoint, PixelRect, PointerEvent, RectSelect, SelectState};
pub use selection::{RegionSelection, SelectionListeners, SelectionResult};
pub use style::{Color, SelectStyle};

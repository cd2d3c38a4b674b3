//! Crate-wide constants.
//!
//! Centralizes tolerances and default values so the interaction and frame
//! code share one source of truth.

// ============================================================================
// Frame Conversion
// ============================================================================

/// Below this value of `cos(lat)` a converted position is treated as sitting
/// on the pole and its longitude is pinned to zero (about 0.02 arcsec).
pub const POLE_EPSILON: f64 = 1e-7;

/// Rotated vectors shorter than this are considered degenerate.
pub const MIN_VECTOR_NORM: f64 = 1e-12;

/// Tolerance used when checking that a rotation matrix is orthonormal
pub const ORTHONORMAL_TOLERANCE: f64 = 1e-12;

// ============================================================================
// Selection Style
// ============================================================================

/// Default stroke color of the selection rectangle
pub const DEFAULT_SELECT_COLOR: &str = "#00ff00";

/// Default stroke width of the selection rectangle in pixels
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Alpha applied to the selection color for the rectangle fill
pub const FILL_ALPHA: u8 = 0x7f;

/// Upper bound accepted for the configured line width
pub const MAX_LINE_WIDTH: f32 = 50.0;

/// Label attached to rectangular selections
pub const RECT_LABEL: &str = "rect";

// ============================================================================
// State Machine
// ============================================================================

/// Maximum number of follow-up transitions a single dispatch may chain.
/// Guards against tables whose handlers bounce between states forever.
pub const MAX_CHAINED_DISPATCHES: usize = 16;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "skyselect";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default reference frame for coordinates reported to the host
pub const DEFAULT_FRAME: &str = "ICRS";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "skyselect=info";

//! Celestial reference frames.
//!
//! - `conversion` - rotation matrices and ICRS/Galactic transforms
//! - `registry` - frame descriptors and alias resolution
//! - `error` - strict frame parsing errors

mod conversion;
mod error;
mod registry;

pub use conversion::*;
pub use error::*;
pub use registry::*;

use serde::{Deserialize, Serialize};

/// Coordinate system underlying a frame descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CooSystem {
    #[serde(rename = "ICRS")]
    Icrs,
    #[serde(rename = "GAL")]
    Gal,
}

impl CooSystem {
    /// Rotation taking vectors expressed in `self` into `target`.
    #[inline]
    pub fn to(self, target: CooSystem) -> &'static RotationMatrix {
        match (self, target) {
            (CooSystem::Gal, CooSystem::Icrs) => &GALACTIC_TO_ICRS,
            (CooSystem::Icrs, CooSystem::Gal) => &ICRS_TO_GALACTIC,
            _ => &RotationMatrix::IDENTITY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CooSystem::Icrs => "ICRS",
            CooSystem::Gal => "GAL",
        }
    }
}

impl std::fmt::Display for CooSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Rotation between the ICRS and Galactic celestial frames.
//!
//! Positions are turned into unit vectors, rotated by a fixed orthogonal
//! matrix and turned back into longitude/latitude. All functions here are
//! pure: they take a [`SkyCoord`] by value and return a new one.
//!
//! ## Degenerate Cases
//!
//! - A rotated vector whose norm is zero or non-finite (only reachable with
//!   non-finite input) maps to the origin `(0, 0)`.
//! - A result sitting on a pole has no meaningful longitude; it is pinned
//!   to `0` instead of letting `atan2` produce whatever the rounding noise
//!   dictates.

use crate::constants::{MIN_VECTOR_NORM, ORTHONORMAL_TOLERANCE, POLE_EPSILON};
use serde::{Deserialize, Serialize};
use std::ops::Mul;
use tracing::warn;

use super::CooSystem;

/// A position on the sky in degrees.
///
/// Carries no frame identity: the frame is implied by whichever conversion
/// produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkyCoord {
    /// Longitude (right ascension for ICRS), in `[0, 360)` once normalized
    pub lon: f64,
    /// Latitude (declination for ICRS), in `[-90, 90]`
    pub lat: f64,
}

impl SkyCoord {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Cartesian unit vector pointing at this position.
    pub fn to_unit_vector(self) -> [f64; 3] {
        let (lon, lat) = (self.lon.to_radians(), self.lat.to_radians());
        let cos_lat = lat.cos();
        [cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin()]
    }

    /// Position pointed at by `v`, which need not be normalized.
    pub fn from_unit_vector(v: [f64; 3]) -> Self {
        let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if !r.is_finite() || r < MIN_VECTOR_NORM {
            warn!(norm = r, "Degenerate direction vector, using origin");
            return Self::default();
        }

        let lat = (v[2] / r).clamp(-1.0, 1.0).asin();
        let cos_lat = lat.cos();

        let lon = if cos_lat < POLE_EPSILON {
            0.0
        } else {
            let cos_lon = (v[0] / r) / cos_lat;
            let sin_lon = (v[1] / r) / cos_lat;
            wrap_degrees(sin_lon.atan2(cos_lon).to_degrees())
        };

        Self {
            lon,
            lat: lat.to_degrees().clamp(-90.0, 90.0),
        }
    }

    /// Same position with longitude wrapped into `[0, 360)`.
    pub fn normalized(self) -> Self {
        let mut lon = self.lon.rem_euclid(360.0);
        if lon >= 360.0 {
            lon = 0.0;
        }
        Self { lon, lat: self.lat }
    }

    /// Great-circle distance to `other` in degrees (haversine form).
    pub fn separation_deg(self, other: SkyCoord) -> f64 {
        let (lon1, lat1) = (self.lon.to_radians(), self.lat.to_radians());
        let (lon2, lat2) = (other.lon.to_radians(), other.lat.to_radians());

        let half_dlat = (lat2 - lat1) / 2.0;
        let half_dlon = (lon2 - lon1) / 2.0;
        let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);

        (2.0 * a.sqrt().clamp(0.0, 1.0).asin()).to_degrees()
    }
}

impl From<(f64, f64)> for SkyCoord {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

/// Wrap an `atan2` result in degrees into `[0, 360)`.
fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = if angle < 0.0 { angle + 360.0 } else { angle };
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Orthogonal 3x3 change of basis, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix(pub [f64; 9]);

impl RotationMatrix {
    pub const IDENTITY: RotationMatrix =
        RotationMatrix([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row * 3 + col]
    }

    /// Matrix times column vector.
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            v[0] * m[0] + v[1] * m[1] + v[2] * m[2],
            v[0] * m[3] + v[1] * m[4] + v[2] * m[5],
            v[0] * m[6] + v[1] * m[7] + v[2] * m[8],
        ]
    }

    pub fn transpose(&self) -> RotationMatrix {
        let m = &self.0;
        RotationMatrix([m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]])
    }

    /// Whether `M · Mᵀ` is the identity within tolerance.
    pub fn is_orthonormal(&self) -> bool {
        let product = *self * self.transpose();
        product
            .0
            .iter()
            .zip(Self::IDENTITY.0.iter())
            .all(|(a, b)| (a - b).abs() < ORTHONORMAL_TOLERANCE)
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = (0..3).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
            }
        }
        RotationMatrix(out)
    }
}

/// Galactic to ICRS rotation (IAU 1958 pole, Hipparcos-consistent values).
#[rustfmt::skip]
pub const GALACTIC_TO_ICRS: RotationMatrix = RotationMatrix([
    -0.05487565771261968232908806948676,  0.49410943719710765017955928850141, -0.86766613755716255824577781583414,
    -0.87343705195577915249273984034980, -0.44482972122205372312012370920248, -0.19807633727507056817237662907031,
    -0.48383507361641838378786914298189,  0.74698218398450941835110635824212,  0.45598381369115237931077906137440,
]);

/// ICRS to Galactic rotation, the transpose of [`GALACTIC_TO_ICRS`].
#[rustfmt::skip]
pub const ICRS_TO_GALACTIC: RotationMatrix = RotationMatrix([
    -0.05487565771261968232908806948676, -0.87343705195577915249273984034980, -0.48383507361641838378786914298189,
     0.49410943719710765017955928850141, -0.44482972122205372312012370920248,  0.74698218398450941835110635824212,
    -0.86766613755716255824577781583414, -0.19807633727507056817237662907031,  0.45598381369115237931077906137440,
]);

/// Rotate `coord` by `matrix`. Degrees in, degrees out.
pub fn transform(coord: SkyCoord, matrix: &RotationMatrix) -> SkyCoord {
    SkyCoord::from_unit_vector(matrix.apply(coord.to_unit_vector()))
}

pub fn galactic_to_icrs(coord: SkyCoord) -> SkyCoord {
    transform(coord, &GALACTIC_TO_ICRS)
}

pub fn icrs_to_galactic(coord: SkyCoord) -> SkyCoord {
    transform(coord, &ICRS_TO_GALACTIC)
}

/// Convert `coord` from one frame's system to another's.
pub fn convert(coord: SkyCoord, from: CooSystem, to: CooSystem) -> SkyCoord {
    if from == to {
        return coord.normalized();
    }
    transform(coord, from.to(to))
}

//! Frame descriptors and alias resolution.
//!
//! Hosts pass frame names around as free-form strings (`"J2000"`,
//! `"galactic"`, `" ICRSd "`). [`resolve`] turns them into one of the static
//! descriptors, falling back silently; parsing via `str::parse` is the strict
//! variant used for configuration.

use serde::Serialize;
use std::str::FromStr;

use super::{CooSystem, FrameError, FrameResult};

/// Immutable description of a supported frame.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FrameDescriptor {
    pub label: &'static str,
    pub system: CooSystem,
    pub explain: &'static str,
}

pub static ICRS: FrameDescriptor = FrameDescriptor {
    label: "ICRS",
    system: CooSystem::Icrs,
    explain: "International Celestial Reference System",
};

pub static ICRSD: FrameDescriptor = FrameDescriptor {
    label: "ICRSd",
    system: CooSystem::Icrs,
    explain: "International Celestial Reference System in decimals",
};

pub static GAL: FrameDescriptor = FrameDescriptor {
    label: "GAL",
    system: CooSystem::Gal,
    explain: "Galactic",
};

/// Every known descriptor, in declaration order.
pub static FRAMES: [&FrameDescriptor; 3] = [&ICRS, &ICRSD, &GAL];

/// Prefix table, checked in order. The decimal variants must come before
/// their plain prefixes.
static ALIASES: [(&str, &FrameDescriptor); 5] = [
    ("j2000d", &ICRSD),
    ("icrsd", &ICRSD),
    ("j2000", &ICRS),
    ("icrs", &ICRS),
    ("gal", &GAL),
];

fn match_alias(name: &str) -> Option<&'static FrameDescriptor> {
    let name = name.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .map(|(_, frame)| *frame)
}

/// Resolve a frame name or alias, returning `fallback` when nothing matches.
///
/// Matching is a case-insensitive prefix match on the trimmed input, so
/// `"galactic"` and `"GAL2"` both resolve to [`GAL`].
pub fn resolve(
    name: &str,
    fallback: Option<&'static FrameDescriptor>,
) -> Option<&'static FrameDescriptor> {
    if name.is_empty() {
        return fallback;
    }
    match_alias(name).or(fallback)
}

impl FrameDescriptor {
    /// Whether positions in this frame are shown as decimal degrees.
    pub fn is_decimal(&self) -> bool {
        self.label.ends_with('d')
    }
}

impl FromStr for &'static FrameDescriptor {
    type Err = FrameError;

    fn from_str(s: &str) -> FrameResult<Self> {
        if s.trim().is_empty() {
            return Err(FrameError::Empty);
        }
        match_alias(s).ok_or_else(|| FrameError::Unknown(s.trim().to_string()))
    }
}

impl std::fmt::Display for FrameDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

//! Colors and stroke settings for the selection overlay.

use crate::constants::{DEFAULT_LINE_WIDTH, FILL_ALPHA};
use crate::input::PixelPoint;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Errors from parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color: {0:?} (expected #rgb, #rrggbb or #rrggbbaa)")]
    Invalid(String),
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::Invalid(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        // Single digit channels expand as 0xf -> 0xff
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 0x11)
                .map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?).with_alpha(byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Selection color as a function of the drag's start and current position.
///
/// A fixed color is just a function that ignores its arguments.
#[derive(Clone)]
pub struct ColorSource(Arc<dyn Fn(PixelPoint, PixelPoint) -> Color + Send + Sync>);

impl ColorSource {
    pub fn constant(color: Color) -> Self {
        Self(Arc::new(move |_, _| color))
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(PixelPoint, PixelPoint) -> Color + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn resolve(&self, start: PixelPoint, current: PixelPoint) -> Color {
        (self.0)(start, current)
    }
}

impl fmt::Debug for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColorSource(..)")
    }
}

impl From<Color> for ColorSource {
    fn from(color: Color) -> Self {
        Self::constant(color)
    }
}

/// How the in-progress selection rectangle is painted.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    pub color: ColorSource,
    pub line_width: f32,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            color: ColorSource::constant(Color::GREEN),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl SelectStyle {
    /// Concrete fill/stroke for a drag from `start` to `current`.
    pub fn rect_style(&self, start: PixelPoint, current: PixelPoint) -> RectStyle {
        let color = self.color.resolve(start, current);
        RectStyle {
            fill: color.with_alpha(FILL_ALPHA),
            stroke: color,
            line_width: self.line_width,
        }
    }
}

/// Resolved paint for one overlay frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
}

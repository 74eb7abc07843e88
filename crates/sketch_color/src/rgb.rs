//! RGB colors and hex codes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// Opaque color with 8-bit channels (0-255)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from float channels on the 0-255 scale.
    ///
    /// Each channel is rounded and clamped into range, so interpolated or
    /// over-lightened values map onto the nearest representable color.
    pub fn from_channels([r, g, b]: [f32; 3]) -> Self {
        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as floats, still on the 0-255 scale
    pub fn to_vec3(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Attach an alpha value (0.0 to 1.0)
    pub const fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba::new(self.r, self.g, self.b, alpha)
    }
}

#[inline]
fn to_channel(value: f32) -> u8 {
    // NaN saturates to 0 in the cast
    value.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex2rgb(s)
    }
}

/// RGB color with an alpha component, used for fill and stroke styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity from 0.0 (transparent) to 1.0 (opaque)
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Set alpha and return new color
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Drop the alpha component
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// CSS color function form, e.g. `rgba(255, 0, 0, 0.5)`
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(1.0)
    }
}

/// Parse a hex color code such as `#ff8800` or `FF8800`
pub fn hex2rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        tracing::trace!("Rejected hex color {:?}", hex);
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format as a lowercase `#rrggbb` code
pub fn rgb2hex(rgb: Rgb) -> String {
    rgb.to_string()
}

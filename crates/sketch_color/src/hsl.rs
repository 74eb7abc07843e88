//! HSL conversion and lightness adjustment
//!
//! Saturation is measured against the channel sum, `(max - min) / (max + min)`,
//! for every lightness, and reconstruction uses `q = l * (1 + s)`. The two
//! halves are exact inverses of each other, so `hsl2rgb(rgb2hsl(c))` only
//! differs from `c` by float rounding, and scaling lightness scales every
//! channel by the same factor.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rgb::{hex2rgb, rgb2hex, Rgb};

/// Hue, saturation and lightness, each normalized to 0.0..=1.0
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl2rgb(self)
    }

    /// Raise lightness by `amount * l`
    pub fn lighten(self, amount: f32) -> Self {
        lighten_hsl(amount, self)
    }

    /// Lower lightness by `amount * l`
    pub fn darken(self, amount: f32) -> Self {
        darken_hsl(amount, self)
    }
}

impl Rgb {
    pub fn to_hsl(self) -> Hsl {
        rgb2hsl(self)
    }

    pub fn lighten(self, amount: f32) -> Self {
        lighten_rgb(amount, self)
    }

    pub fn darken(self, amount: f32) -> Self {
        darken_rgb(amount, self)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb2hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl2rgb(hsl)
    }
}

pub fn rgb2hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_vec3().map(|c| c / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = d / (max + min);
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

pub fn hsl2rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        return Rgb::from_channels([l * 255.0; 3]);
    }

    let q = l * (1.0 + s);
    let p = 2.0 * l - q;
    Rgb::from_channels(
        [h + 1.0 / 3.0, h, h - 1.0 / 3.0].map(|t| hue_to_channel(p, q, t) * 255.0),
    )
}

/// Piecewise-linear channel ramp between `p` (min) and `q` (max)
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hex2hsl(hex: &str) -> Result<Hsl> {
    hex2rgb(hex).map(rgb2hsl)
}

pub fn hsl2hex(hsl: Hsl) -> String {
    rgb2hex(hsl2rgb(hsl))
}

// === Lightness ===

pub fn lighten_hsl(amount: f32, hsl: Hsl) -> Hsl {
    Hsl {
        l: (hsl.l + amount * hsl.l).clamp(0.0, 1.0),
        ..hsl
    }
}

pub fn darken_hsl(amount: f32, hsl: Hsl) -> Hsl {
    Hsl {
        l: (hsl.l - amount * hsl.l).clamp(0.0, 1.0),
        ..hsl
    }
}

pub fn lighten_rgb(amount: f32, rgb: Rgb) -> Rgb {
    hsl2rgb(lighten_hsl(amount, rgb2hsl(rgb)))
}

pub fn darken_rgb(amount: f32, rgb: Rgb) -> Rgb {
    hsl2rgb(darken_hsl(amount, rgb2hsl(rgb)))
}

pub fn lighten_hex(amount: f32, hex: &str) -> Result<String> {
    Ok(rgb2hex(lighten_rgb(amount, hex2rgb(hex)?)))
}

pub fn darken_hex(amount: f32, hex: &str) -> Result<String> {
    Ok(rgb2hex(darken_rgb(amount, hex2rgb(hex)?)))
}

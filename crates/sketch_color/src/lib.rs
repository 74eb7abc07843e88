//! Sketch Color
//!
//! Closed-form color helpers for 2D drawing.
//!
//! # Features
//!
//! - Hex code parsing and formatting (`#rrggbb`, `#` optional on input)
//! - RGB ↔ HSL conversion
//! - Lighten/darken in RGB, HSL or hex form
//! - Linear and eased gradients between two colors
//!
//! ```rust
//! use sketch_color::{darken_hex, lighten_hex, linear_gradient};
//!
//! assert_eq!(lighten_hex(0.2, "#6699CC").unwrap(), "#7ab8f5");
//! assert_eq!(darken_hex(0.2, "#6699CC").unwrap(), "#527aa3");
//!
//! let steps = linear_gradient(3, [0.0; 3], [255.0; 3]);
//! assert_eq!(steps[1], [127.5; 3]);
//! ```

pub mod easing;
pub mod error;
pub mod gradient;
pub mod hsl;
pub mod rgb;

pub use easing::Easing;
pub use error::{ColorError, Result};
pub use gradient::{gradient, lerp3, linear_gradient, rgb_gradient, Vec3};
pub use hsl::{
    darken_hex, darken_hsl, darken_rgb, hex2hsl, hsl2hex, hsl2rgb, lighten_hex, lighten_hsl,
    lighten_rgb, rgb2hsl, Hsl,
};
pub use rgb::{hex2rgb, rgb2hex, Rgb, Rgba};

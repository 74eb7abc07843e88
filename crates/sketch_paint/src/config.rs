//! Canvas configuration (TOML)
//!
//! ```toml
//! width = 1024
//! height = 768
//! text_size = 16
//! font_family = "Georgia"
//! font_modifier = "italic"
//! stroke_weight = 2
//! stroke = "#333333"
//! fill = "#6699cc"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sketch_color::hex2rgb;

use crate::canvas::{DashPattern, Font, StyleFrame};
use crate::error::Result;

/// Initial canvas size and style
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_text_size")]
    pub text_size: f32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_modifier: Option<String>,
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: f32,
    /// Stroke color as a hex code
    #[serde(default = "default_color")]
    pub stroke: String,
    /// Fill color as a hex code
    #[serde(default = "default_color")]
    pub fill: String,
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

fn default_text_size() -> f32 {
    14.0
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_stroke_weight() -> f32 {
    1.0
}

fn default_color() -> String {
    "#000000".to_string()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            text_size: default_text_size(),
            font_family: default_font_family(),
            font_modifier: None,
            stroke_weight: default_stroke_weight(),
            stroke: default_color(),
            fill: default_color(),
        }
    }
}

impl CanvasConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded canvas config from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Style frame described by this config; fails on malformed hex colors
    pub fn initial_style(&self) -> Result<StyleFrame> {
        let mut font = Font::new(self.text_size, self.font_family.clone());
        font.modifier = self.font_modifier.clone().filter(|m| !m.is_empty());

        Ok(StyleFrame {
            font,
            stroke: hex2rgb(&self.stroke)?.into(),
            fill: hex2rgb(&self.fill)?.into(),
            dash: DashPattern::new(),
            stroke_weight: self.stroke_weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;
    use sketch_color::Rgba;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CanvasConfig::from_toml_str("").unwrap();
        assert_eq!(config, CanvasConfig::default());
        assert_eq!(config.initial_style().unwrap(), StyleFrame::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CanvasConfig::from_toml_str(
            r##"
            width = 1024
            font_modifier = "bold"
            fill = "#6699CC"
            "##,
        )
        .unwrap();

        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, 600.0);

        let style = config.initial_style().unwrap();
        assert_eq!(style.fill, Rgba::new(0x66, 0x99, 0xcc, 1.0));
        assert_eq!(style.stroke, Rgba::BLACK);
        assert_eq!(style.font.to_css(), "bold 14px sans-serif");
    }

    #[test]
    fn test_bad_color_in_config() {
        let config = CanvasConfig {
            stroke: "#12".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.initial_style(), Err(PaintError::Color(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            CanvasConfig::from_toml_str("width = \"wide\""),
            Err(PaintError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CanvasConfig {
            font_modifier: Some("italic".to_string()),
            stroke_weight: 2.5,
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(CanvasConfig::from_toml_str(&text).unwrap(), config);
    }
}

//! Drawing surface contract
//!
//! [`Surface`] mirrors the immediate-mode calls of an HTML-canvas-style 2D
//! context. The rendering backend lives outside this crate; [`RecordingSurface`]
//! is a backend-free implementation that records every call as a
//! [`SurfaceCommand`] for later replay or inspection.

use sketch_color::Rgba;

use crate::point::{Point, Vector};

/// An imperative 2D drawing target
pub trait Surface {
    // === Style ===

    fn set_fill_style(&mut self, color: Rgba);
    fn set_stroke_style(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f32);
    /// Alternating dash and gap lengths; empty means solid
    fn set_line_dash(&mut self, pattern: &[f32]);
    /// CSS font shorthand, e.g. `bold 14px serif`
    fn set_font(&mut self, font: &str);
    fn set_canvas_size(&mut self, width: f32, height: f32);

    // === Paths ===

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    );
    fn ellipse(
        &mut self,
        center: Point,
        radius: Vector,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    );
    fn stroke(&mut self);
    fn fill(&mut self);

    // === Immediate drawing ===

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_text(&mut self, text: &str, position: Point);
    fn stroke_text(&mut self, text: &str, position: Point);
    /// Advance width of `text` in the current font
    fn measure_text(&self, text: &str) -> f32;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_fill_style(&mut self, color: Rgba) {
        (**self).set_fill_style(color)
    }
    fn set_stroke_style(&mut self, color: Rgba) {
        (**self).set_stroke_style(color)
    }
    fn set_line_width(&mut self, width: f32) {
        (**self).set_line_width(width)
    }
    fn set_line_dash(&mut self, pattern: &[f32]) {
        (**self).set_line_dash(pattern)
    }
    fn set_font(&mut self, font: &str) {
        (**self).set_font(font)
    }
    fn set_canvas_size(&mut self, width: f32, height: f32) {
        (**self).set_canvas_size(width, height)
    }
    fn begin_path(&mut self) {
        (**self).begin_path()
    }
    fn close_path(&mut self) {
        (**self).close_path()
    }
    fn move_to(&mut self, point: Point) {
        (**self).move_to(point)
    }
    fn line_to(&mut self, point: Point) {
        (**self).line_to(point)
    }
    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        (**self).arc(center, radius, start_angle, end_angle, counterclockwise)
    }
    fn ellipse(
        &mut self,
        center: Point,
        radius: Vector,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        (**self).ellipse(
            center,
            radius,
            rotation,
            start_angle,
            end_angle,
            counterclockwise,
        )
    }
    fn stroke(&mut self) {
        (**self).stroke()
    }
    fn fill(&mut self) {
        (**self).fill()
    }
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        (**self).fill_rect(x, y, width, height)
    }
    fn fill_text(&mut self, text: &str, position: Point) {
        (**self).fill_text(text, position)
    }
    fn stroke_text(&mut self, text: &str, position: Point) {
        (**self).stroke_text(text, position)
    }
    fn measure_text(&self, text: &str) -> f32 {
        (**self).measure_text(text)
    }
}

/// A recorded surface call
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    SetFillStyle(Rgba),
    SetStrokeStyle(Rgba),
    SetLineWidth(f32),
    SetLineDash(Vec<f32>),
    SetFont(String),
    SetCanvasSize {
        width: f32,
        height: f32,
    },
    BeginPath,
    ClosePath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    },
    Ellipse {
        center: Point,
        radius: Vector,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    },
    Stroke,
    Fill,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillText {
        text: String,
        position: Point,
    },
    StrokeText {
        text: String,
        position: Point,
    },
}

/// Canvas default font size in px, before any `set_font`
const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Surface that records calls instead of rasterizing.
///
/// Text is measured with a fixed advance per character, expressed as a
/// fraction of the current font size.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    font_size: f32,
    char_advance: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            font_size: DEFAULT_FONT_SIZE,
            char_advance: 0.5,
        }
    }

    /// Set the per-character advance as a fraction of the font size
    pub fn with_char_advance(mut self, advance: f32) -> Self {
        self.char_advance = advance;
        self
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Font size parsed from the last `set_font` call
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    fn record(&mut self, command: SurfaceCommand) {
        self.commands.push(command);
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the `<n>px` size token out of a CSS font shorthand
fn parse_font_size(font: &str) -> Option<f32> {
    font.split_whitespace()
        .find_map(|token| token.strip_suffix("px")?.parse().ok())
}

impl Surface for RecordingSurface {
    fn set_fill_style(&mut self, color: Rgba) {
        self.record(SurfaceCommand::SetFillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.record(SurfaceCommand::SetStrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.record(SurfaceCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        self.record(SurfaceCommand::SetLineDash(pattern.to_vec()));
    }

    fn set_font(&mut self, font: &str) {
        match parse_font_size(font) {
            Some(size) => self.font_size = size,
            None => tracing::warn!("Font {:?} has no px size, keeping {}px", font, self.font_size),
        }
        self.record(SurfaceCommand::SetFont(font.to_string()));
    }

    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.record(SurfaceCommand::SetCanvasSize { width, height });
    }

    fn begin_path(&mut self) {
        self.record(SurfaceCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.record(SurfaceCommand::ClosePath);
    }

    fn move_to(&mut self, point: Point) {
        self.record(SurfaceCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.record(SurfaceCommand::LineTo(point));
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        self.record(SurfaceCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn ellipse(
        &mut self,
        center: Point,
        radius: Vector,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        self.record(SurfaceCommand::Ellipse {
            center,
            radius,
            rotation,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn stroke(&mut self) {
        self.record(SurfaceCommand::Stroke);
    }

    fn fill(&mut self) {
        self.record(SurfaceCommand::Fill);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.record(SurfaceCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        self.record(SurfaceCommand::FillText {
            text: text.to_string(),
            position,
        });
    }

    fn stroke_text(&mut self, text: &str, position: Point) {
        self.record(SurfaceCommand::StrokeText {
            text: text.to_string(),
            position,
        });
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_advance * self.font_size
    }
}

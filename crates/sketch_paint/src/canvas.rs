//! Canvas - the style-stacked drawing API
//!
//! [`Canvas`] owns a [`Surface`], the canvas size and the current
//! [`StyleFrame`]. Style setters update the frame and forward to the surface;
//! [`Canvas::push`] and [`Canvas::pop`] save and restore the frame as a unit.
//!
//! A canvas is single-owner state: every mutation goes through `&mut self` and
//! there is no internal locking.

use smallvec::SmallVec;

use sketch_color::Rgba;

use crate::config::CanvasConfig;
use crate::error::{PaintError, Result};
use crate::point::Point;
use crate::shape::{Ellipse, Polygon, Shape};
use crate::surface::Surface;

/// Dash and gap lengths; empty means a solid line
pub type DashPattern = SmallVec<[f32; 4]>;

/// Font settings
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Size in px
    pub size: f32,
    pub family: String,
    /// Style prefix such as `bold` or `italic`
    pub modifier: Option<String>,
}

impl Font {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Self {
            size,
            family: family.into(),
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    /// CSS font shorthand, e.g. `bold 14px serif`
    pub fn to_css(&self) -> String {
        match &self.modifier {
            Some(modifier) => format!("{} {}px {}", modifier, self.size, self.family),
            None => format!("{}px {}", self.size, self.family),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(14.0, "sans-serif")
    }
}

/// Snapshot of every style attribute saved by [`Canvas::push`]
#[derive(Clone, Debug, PartialEq)]
pub struct StyleFrame {
    pub font: Font,
    pub stroke: Rgba,
    pub fill: Rgba,
    pub dash: DashPattern,
    pub stroke_weight: f32,
}

impl Default for StyleFrame {
    fn default() -> Self {
        Self {
            font: Font::default(),
            stroke: Rgba::BLACK,
            fill: Rgba::BLACK,
            dash: DashPattern::new(),
            stroke_weight: 1.0,
        }
    }
}

/// Stateful drawing wrapper around a [`Surface`]
pub struct Canvas<S: Surface> {
    surface: S,
    width: f32,
    height: f32,
    style: StyleFrame,
    stack: Vec<StyleFrame>,
}

impl<S: Surface> Canvas<S> {
    /// Wrap `surface`, sizing it to `[width, height]` with the default style
    pub fn new(surface: S, size: [f32; 2]) -> Self {
        Self::with_style(surface, size, StyleFrame::default())
    }

    pub fn with_style(surface: S, [width, height]: [f32; 2], style: StyleFrame) -> Self {
        let mut canvas = Self {
            surface,
            width,
            height,
            style,
            stack: Vec::new(),
        };
        canvas.surface.set_canvas_size(width, height);
        canvas.apply_style();
        canvas
    }

    /// Build from a loaded [`CanvasConfig`]
    pub fn with_config(surface: S, config: &CanvasConfig) -> Result<Self> {
        let style = config.initial_style()?;
        Ok(Self::with_style(
            surface,
            [config.width, config.height],
            style,
        ))
    }

    /// Push the whole current frame to the surface
    fn apply_style(&mut self) {
        let style = &self.style;
        self.surface.set_fill_style(style.fill);
        self.surface.set_stroke_style(style.stroke);
        self.surface.set_line_width(style.stroke_weight);
        self.surface.set_line_dash(&style.dash);
        self.surface.set_font(&style.font.to_css());
    }

    // === Accessors ===

    pub fn style(&self) -> &StyleFrame {
        &self.style
    }

    pub fn text_size(&self) -> f32 {
        self.style.font.size
    }

    pub fn stroke_color(&self) -> Rgba {
        self.style.stroke
    }

    pub fn fill_color(&self) -> Rgba {
        self.style.fill
    }

    pub fn dash_pattern(&self) -> &[f32] {
        &self.style.dash
    }

    pub fn line_weight(&self) -> f32 {
        self.style.stroke_weight
    }

    /// Number of saved frames
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // === Target ===

    pub fn set_width_height(&mut self, [width, height]: [f32; 2]) {
        tracing::debug!("Canvas resized: {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.surface.set_canvas_size(width, height);
    }

    /// Swap the drawing target, returning the previous one.
    ///
    /// The current style is applied to the new surface; its size is left as is.
    pub fn set_surface(&mut self, surface: S) -> S {
        tracing::debug!("Canvas surface replaced");
        let previous = std::mem::replace(&mut self.surface, surface);
        self.apply_style();
        previous
    }

    // === Style ===

    pub fn fill(&mut self, color: Rgba) {
        self.style.fill = color;
        self.surface.set_fill_style(color);
    }

    pub fn stroke(&mut self, color: Rgba) {
        self.style.stroke = color;
        self.surface.set_stroke_style(color);
    }

    pub fn no_fill(&mut self) {
        self.fill(Rgba::TRANSPARENT);
    }

    pub fn no_stroke(&mut self) {
        self.stroke(Rgba::TRANSPARENT);
    }

    pub fn dash(&mut self, pattern: &[f32]) {
        self.style.dash = DashPattern::from_slice(pattern);
        self.surface.set_line_dash(pattern);
    }

    pub fn no_dash(&mut self) {
        self.dash(&[]);
    }

    pub fn stroke_weight(&mut self, weight: f32) {
        self.style.stroke_weight = weight;
        self.surface.set_line_width(weight);
    }

    /// Set font size, family and an optional style prefix (`bold`, `italic`, ...)
    pub fn set_font(&mut self, size: f32, family: &str, modifier: Option<&str>) {
        let mut font = Font::new(size, family);
        font.modifier = modifier.filter(|m| !m.is_empty()).map(str::to_string);
        self.surface.set_font(&font.to_css());
        self.style.font = font;
    }

    /// Save the current style frame
    pub fn push(&mut self) {
        self.stack.push(self.style.clone());
        tracing::trace!("Style pushed, depth {}", self.stack.len());
    }

    /// Restore the most recently pushed frame
    pub fn pop(&mut self) -> Result<()> {
        let Some(frame) = self.stack.pop() else {
            tracing::warn!("Style pop with no pushed frame");
            return Err(PaintError::EmptyStack);
        };
        self.style = frame;
        self.apply_style();
        tracing::trace!("Style popped, depth {}", self.stack.len());
        Ok(())
    }

    // === Drawing ===

    /// Fill the whole canvas; the fill style is restored afterwards
    pub fn background(&mut self, color: Rgba) {
        self.surface.set_fill_style(color);
        self.surface.fill_rect(0.0, 0.0, self.width, self.height);
        self.surface.set_fill_style(self.style.fill);
    }

    pub fn text(&mut self, text: &str, position: Point) {
        self.surface.fill_text(text, position);
        self.surface.stroke_text(text, position);
    }

    /// Draw text horizontally centered on `position`, nudged down by a
    /// quarter of the text size so it sits roughly on the vertical center
    pub fn centered_text(&mut self, text: &str, position: Point) {
        let width = self.surface.measure_text(text);
        let at = Point::new(
            position.x - width / 2.0,
            position.y + self.style.font.size / 4.0,
        );
        self.surface.fill_text(text, at);
        self.surface.stroke_text(text, at);
    }

    /// Stroke then fill a shape with the current style
    pub fn draw_shape(&mut self, shape: &Shape) -> Result<()> {
        match shape {
            Shape::Polygon(polygon) => self.draw_polygon(polygon),
            Shape::Ellipse(ellipse) => {
                self.draw_ellipse(ellipse);
                Ok(())
            }
        }
    }

    /// Trace the vertices and close back to the first one
    pub fn draw_polygon(&mut self, polygon: &Polygon) -> Result<()> {
        let (first, rest) = polygon
            .points
            .split_first()
            .ok_or(PaintError::EmptyPolygon)?;

        self.surface.begin_path();
        self.surface.move_to(*first);
        for &point in rest {
            self.surface.line_to(point);
        }
        self.surface.line_to(*first);
        self.surface.close_path();
        self.surface.stroke();
        self.surface.fill();
        Ok(())
    }

    pub fn draw_ellipse(&mut self, ellipse: &Ellipse) {
        self.surface.begin_path();
        self.surface.ellipse(
            ellipse.position,
            ellipse.radius,
            ellipse.rotation,
            ellipse.angle.start,
            ellipse.angle.end,
            false,
        );
        self.surface.stroke();
        self.surface.fill();
        self.surface.close_path();
    }

    /// Draw as a circular arc using the x radius; rotation is ignored
    pub fn draw_arc(&mut self, ellipse: &Ellipse) {
        self.surface.begin_path();
        self.surface.arc(
            ellipse.position,
            ellipse.radius.x,
            ellipse.angle.start,
            ellipse.angle.end,
            false,
        );
        self.surface.stroke();
        self.surface.fill();
        self.surface.close_path();
    }

    /// Stroke the segment between the first two vertices; nothing is filled
    pub fn draw_line(&mut self, shape: &Shape) -> Result<()> {
        let (p1, p2) = match shape {
            Shape::Polygon(polygon) => match polygon.points.as_slice() {
                [p1, p2, ..] => (*p1, *p2),
                _ => {
                    return Err(PaintError::InvalidArgument(format!(
                        "a line needs two vertices, got {}",
                        polygon.points.len()
                    )))
                }
            },
            Shape::Ellipse(_) => {
                return Err(PaintError::InvalidArgument(
                    "an ellipse cannot be drawn as a line".to_string(),
                ))
            }
        };

        self.surface.begin_path();
        self.surface.move_to(p1);
        self.surface.line_to(p2);
        self.surface.stroke();
        self.surface.close_path();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{arc, circle, line, polygon, rect, AngleRange};
    use crate::surface::{RecordingSurface, SurfaceCommand};
    use crate::Vector;

    fn canvas() -> Canvas<RecordingSurface> {
        let mut canvas = Canvas::new(RecordingSurface::new(), [200.0, 100.0]);
        canvas.surface_mut().clear();
        canvas
    }

    #[test]
    fn test_new_applies_size_and_style() {
        let canvas = Canvas::new(RecordingSurface::new(), [200.0, 100.0]);
        assert_eq!(
            canvas.surface().commands(),
            &[
                SurfaceCommand::SetCanvasSize {
                    width: 200.0,
                    height: 100.0
                },
                SurfaceCommand::SetFillStyle(Rgba::BLACK),
                SurfaceCommand::SetStrokeStyle(Rgba::BLACK),
                SurfaceCommand::SetLineWidth(1.0),
                SurfaceCommand::SetLineDash(vec![]),
                SurfaceCommand::SetFont("14px sans-serif".to_string()),
            ]
        );
        assert_eq!(canvas.text_size(), 14.0);
        assert_eq!(canvas.stack_depth(), 0);
    }

    #[test]
    fn test_setters_update_state() {
        let mut canvas = canvas();
        let red = Rgba::new(255, 0, 0, 1.0);
        canvas.fill(red);
        canvas.stroke(red.with_alpha(0.5));
        canvas.dash(&[4.0, 2.0]);
        canvas.stroke_weight(3.0);

        assert_eq!(canvas.fill_color(), red);
        assert_eq!(canvas.stroke_color(), red.with_alpha(0.5));
        assert_eq!(canvas.dash_pattern(), &[4.0, 2.0]);
        assert_eq!(canvas.line_weight(), 3.0);

        canvas.no_fill();
        canvas.no_stroke();
        canvas.no_dash();
        assert_eq!(canvas.fill_color(), Rgba::TRANSPARENT);
        assert_eq!(canvas.stroke_color(), Rgba::TRANSPARENT);
        assert!(canvas.dash_pattern().is_empty());
        assert_eq!(
            canvas.surface().commands().last(),
            Some(&SurfaceCommand::SetLineDash(vec![]))
        );
    }

    #[test]
    fn test_set_font() {
        let mut canvas = canvas();
        canvas.set_font(20.0, "Georgia", Some("bold"));
        assert_eq!(canvas.text_size(), 20.0);
        assert_eq!(
            canvas.surface().commands(),
            &[SurfaceCommand::SetFont("bold 20px Georgia".to_string())]
        );

        canvas.set_font(12.0, "serif", Some(""));
        assert_eq!(canvas.style().font.to_css(), "12px serif");
    }

    #[test]
    fn test_pop_reapplies_frame() {
        let mut canvas = canvas();
        canvas.push();
        canvas.fill(Rgba::WHITE);
        canvas.stroke_weight(5.0);
        canvas.surface_mut().clear();

        canvas.pop().unwrap();
        assert_eq!(canvas.fill_color(), Rgba::BLACK);
        assert_eq!(canvas.line_weight(), 1.0);
        let commands = canvas.surface().commands();
        assert!(commands.contains(&SurfaceCommand::SetFillStyle(Rgba::BLACK)));
        assert!(commands.contains(&SurfaceCommand::SetLineWidth(1.0)));
    }

    #[test]
    fn test_pop_empty_stack() {
        let mut canvas = canvas();
        assert!(matches!(canvas.pop(), Err(PaintError::EmptyStack)));

        canvas.push();
        assert!(canvas.pop().is_ok());
        assert!(matches!(canvas.pop(), Err(PaintError::EmptyStack)));
    }

    #[test]
    fn test_background_restores_fill() {
        let mut canvas = canvas();
        let blue = Rgba::new(0, 0, 255, 1.0);
        canvas.background(blue);

        assert_eq!(
            canvas.surface().commands(),
            &[
                SurfaceCommand::SetFillStyle(blue),
                SurfaceCommand::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 200.0,
                    height: 100.0
                },
                SurfaceCommand::SetFillStyle(Rgba::BLACK),
            ]
        );
        assert_eq!(canvas.fill_color(), Rgba::BLACK);
    }

    #[test]
    fn test_text_fills_then_strokes() {
        let mut canvas = canvas();
        canvas.text("hi", Point::new(3.0, 4.0));
        assert_eq!(
            canvas.surface().commands(),
            &[
                SurfaceCommand::FillText {
                    text: "hi".to_string(),
                    position: Point::new(3.0, 4.0)
                },
                SurfaceCommand::StrokeText {
                    text: "hi".to_string(),
                    position: Point::new(3.0, 4.0)
                },
            ]
        );
    }

    #[test]
    fn test_centered_text_offsets() {
        let mut canvas = canvas();
        canvas.set_font(20.0, "serif", None);
        canvas.surface_mut().clear();

        // 4 chars * 0.5 advance * 20px = 40px wide
        canvas.centered_text("abcd", Point::new(100.0, 50.0));
        let expected = Point::new(80.0, 55.0);
        assert_eq!(
            canvas.surface().commands()[0],
            SurfaceCommand::FillText {
                text: "abcd".to_string(),
                position: expected
            }
        );
        assert_eq!(
            canvas.surface().commands()[1],
            SurfaceCommand::StrokeText {
                text: "abcd".to_string(),
                position: expected
            }
        );
    }

    #[test]
    fn test_draw_polygon_closes_path() {
        let mut canvas = canvas();
        let shape = rect([2.0, 2.0], Point::ZERO);
        canvas.draw_shape(&shape).unwrap();

        assert_eq!(
            canvas.surface().commands(),
            &[
                SurfaceCommand::BeginPath,
                SurfaceCommand::MoveTo(Point::new(-1.0, -1.0)),
                SurfaceCommand::LineTo(Point::new(1.0, -1.0)),
                SurfaceCommand::LineTo(Point::new(1.0, 1.0)),
                SurfaceCommand::LineTo(Point::new(-1.0, 1.0)),
                SurfaceCommand::LineTo(Point::new(-1.0, -1.0)),
                SurfaceCommand::ClosePath,
                SurfaceCommand::Stroke,
                SurfaceCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_draw_empty_polygon() {
        let mut canvas = canvas();
        let empty = polygon([]);
        assert!(matches!(
            canvas.draw_shape(&empty),
            Err(PaintError::EmptyPolygon)
        ));
        assert!(canvas.surface().commands().is_empty());
    }

    #[test]
    fn test_draw_ellipse() {
        let mut canvas = canvas();
        canvas.draw_shape(&circle(5.0, Point::new(1.0, 2.0))).unwrap();

        assert_eq!(
            canvas.surface().commands(),
            &[
                SurfaceCommand::BeginPath,
                SurfaceCommand::Ellipse {
                    center: Point::new(1.0, 2.0),
                    radius: Vector::new(5.0, 5.0),
                    rotation: 0.0,
                    start_angle: 0.0,
                    end_angle: std::f32::consts::TAU,
                    counterclockwise: false,
                },
                SurfaceCommand::Stroke,
                SurfaceCommand::Fill,
                SurfaceCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_draw_arc_uses_x_radius() {
        let mut canvas = canvas();
        let shape = arc(7.0, AngleRange::new(0.0, 1.0), Point::ZERO);
        canvas.draw_arc(shape.as_ellipse().unwrap());

        assert_eq!(
            canvas.surface().commands()[1],
            SurfaceCommand::Arc {
                center: Point::ZERO,
                radius: 7.0,
                start_angle: 0.0,
                end_angle: 1.0,
                counterclockwise: false,
            }
        );
    }

    #[test]
    fn test_draw_line_strokes_only() {
        let mut canvas = canvas();
        canvas
            .draw_line(&line(Point::ZERO, Point::new(10.0, 0.0)))
            .unwrap();

        assert_eq!(
            canvas.surface().commands(),
            &[
                SurfaceCommand::BeginPath,
                SurfaceCommand::MoveTo(Point::ZERO),
                SurfaceCommand::LineTo(Point::new(10.0, 0.0)),
                SurfaceCommand::Stroke,
                SurfaceCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_draw_line_rejects_non_lines() {
        let mut canvas = canvas();
        assert!(matches!(
            canvas.draw_line(&polygon([Point::ZERO])),
            Err(PaintError::InvalidArgument(_))
        ));
        assert!(matches!(
            canvas.draw_line(&circle(1.0, Point::ZERO)),
            Err(PaintError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_width_height() {
        let mut canvas = canvas();
        canvas.set_width_height([640.0, 480.0]);
        assert_eq!(canvas.size(), [640.0, 480.0]);

        canvas.background(Rgba::WHITE);
        assert!(canvas
            .surface()
            .commands()
            .contains(&SurfaceCommand::FillRect {
                x: 0.0,
                y: 0.0,
                width: 640.0,
                height: 480.0
            }));
    }

    #[test]
    fn test_set_surface_applies_style() {
        let mut canvas = canvas();
        canvas.fill(Rgba::WHITE);

        let previous = canvas.set_surface(RecordingSurface::new());
        assert!(previous
            .commands()
            .contains(&SurfaceCommand::SetFillStyle(Rgba::WHITE)));
        assert_eq!(
            canvas.surface().commands()[0],
            SurfaceCommand::SetFillStyle(Rgba::WHITE)
        );
        assert!(!canvas
            .surface()
            .commands()
            .iter()
            .any(|c| matches!(c, SurfaceCommand::SetCanvasSize { .. })));
    }
}

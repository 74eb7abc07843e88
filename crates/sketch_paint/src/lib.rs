//! Sketch Paint API
//!
//! Declarative shapes drawn through a stateful wrapper over an imperative 2D
//! surface, in the style of HTML Canvas.
//!
//! # Features
//!
//! - Shape descriptors: polygons, regular polygons, rects, lines, ellipses, arcs
//! - Mapping combinators that rebuild shapes field by field
//! - A style stack (fill, stroke, dash, line weight, font) with push/pop
//! - A [`Surface`] trait for the rendering backend, plus a recording surface
//!
//! ```rust
//! use sketch_paint::shape::{circle, regular_polygon};
//! use sketch_paint::{Canvas, Point, RecordingSurface, Rgba};
//!
//! let mut canvas = Canvas::new(RecordingSurface::new(), [320.0, 240.0]);
//! canvas.background(Rgba::WHITE);
//!
//! canvas.push();
//! canvas.fill(Rgba::new(102, 153, 204, 1.0));
//! canvas.draw_shape(&regular_polygon(5, 40.0, Point::new(160.0, 120.0)).unwrap()).unwrap();
//! canvas.pop().unwrap();
//!
//! canvas.no_fill();
//! canvas.draw_shape(&circle(60.0, Point::new(160.0, 120.0))).unwrap();
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod point;
pub mod shape;
pub mod surface;

pub use canvas::{Canvas, DashPattern, Font, StyleFrame};
pub use config::CanvasConfig;
pub use error::{PaintError, Result};
pub use point::{Point, Vector};
pub use shape::{AngleRange, Ellipse, Polygon, Shape};
pub use surface::{RecordingSurface, Surface, SurfaceCommand};

pub use sketch_color::Rgba;

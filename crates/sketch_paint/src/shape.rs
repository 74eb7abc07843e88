//! Shape descriptors
//!
//! Shapes are plain values: polygons are ordered vertex lists and ellipses are
//! rotation/radius/angle/center parameter sets. Builders are pure functions;
//! nothing here touches a drawing surface.
//!
//! ```rust
//! use sketch_paint::shape::{circle, map_position, regular_polygon};
//! use sketch_paint::Point;
//!
//! let hexagon = regular_polygon(6, 20.0, Point::new(50.0, 50.0)).unwrap();
//! assert_eq!(hexagon.as_polygon().unwrap().points.len(), 6);
//!
//! let moved = map_position(|e| e.position + Point::new(5.0, 0.0), circle(3.0, Point::ZERO));
//! assert_eq!(moved.as_ellipse().unwrap().position, Point::new(5.0, 0.0));
//! ```

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PaintError, Result};
use crate::point::{Point, Vector};

/// Vertex storage; most shapes fit inline
pub type Vertices = SmallVec<[Point; 8]>;

/// A closed polygon (or a 2-vertex line)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vertices,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Apply `f` to every vertex
    pub fn map_vertices(&self, f: impl FnMut(Point) -> Point) -> Self {
        Self {
            points: self.points.iter().copied().map(f).collect(),
        }
    }
}

/// Start and end angle in radians
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub start: f32,
    pub end: f32,
}

impl AngleRange {
    pub const FULL: AngleRange = AngleRange {
        start: 0.0,
        end: TAU,
    };

    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

impl Default for AngleRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<[f32; 2]> for AngleRange {
    fn from([start, end]: [f32; 2]) -> Self {
        Self::new(start, end)
    }
}

/// An ellipse, or an elliptic arc when `angle` is not a full turn
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub rotation: f32,
    pub radius: Vector,
    pub angle: AngleRange,
    pub position: Point,
}

impl Ellipse {
    pub const fn new(rotation: f32, radius: Vector, angle: AngleRange, position: Point) -> Self {
        Self {
            rotation,
            radius,
            angle,
            position,
        }
    }

    pub fn map_position(&self, f: impl FnOnce(&Ellipse) -> Point) -> Self {
        Self {
            position: f(self),
            ..*self
        }
    }

    pub fn map_rotation(&self, f: impl FnOnce(&Ellipse) -> f32) -> Self {
        Self {
            rotation: f(self),
            ..*self
        }
    }

    pub fn map_angle(&self, f: impl FnOnce(&Ellipse) -> AngleRange) -> Self {
        Self {
            angle: f(self),
            ..*self
        }
    }

    pub fn map_radius(&self, f: impl FnOnce(&Ellipse) -> Vector) -> Self {
        Self {
            radius: f(self),
            ..*self
        }
    }
}

/// A drawable shape descriptor.
///
/// Serializes as an internally tagged object, e.g.
/// `{"type": "ellipse", "rotation": 0.0, ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Polygon(Polygon),
    Ellipse(Ellipse),
}

impl Shape {
    /// Descriptor tag used in the serialized form
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "polygon",
            Shape::Ellipse(_) => "ellipse",
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            Shape::Ellipse(_) => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Shape::Ellipse(ellipse) => Some(ellipse),
            Shape::Polygon(_) => None,
        }
    }

    /// Decode a descriptor produced by [`Shape::to_json`] or a host application.
    ///
    /// The `type` tag is checked before the body so that descriptors for
    /// shapes this crate cannot draw fail with
    /// [`PaintError::UnsupportedShapeType`] rather than a generic decode error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some("polygon") | Some("ellipse") | None => Ok(serde_json::from_value(value)?),
            Some(other) => {
                tracing::warn!("Rejected shape descriptor with type {:?}", other);
                Err(PaintError::UnsupportedShapeType(other.to_string()))
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

// === Polygons ===

pub fn polygon(points: impl IntoIterator<Item = Point>) -> Shape {
    Shape::Polygon(Polygon::new(points))
}

/// `n` vertices evenly spaced on a circle, the first at angle 0
pub fn regular_polygon(n: usize, radius: f32, center: Point) -> Result<Shape> {
    vertices_on_circle(n, radius, center, 0.0)
}

/// Regular polygon rotated into a canonical orientation.
///
/// Even vertex counts are turned back by half a step (`-τ/2n`), odd counts
/// forward by `π/2n`; squares and triangles end up resting on a flat edge.
pub fn aligned_regular_polygon(n: usize, radius: f32, center: Point) -> Result<Shape> {
    let sides = n as f32;
    let offset = if n % 2 == 0 {
        -TAU / (sides * 2.0)
    } else {
        PI / (sides * 2.0)
    };
    vertices_on_circle(n, radius, center, offset)
}

fn vertices_on_circle(n: usize, radius: f32, center: Point, offset: f32) -> Result<Shape> {
    if n == 0 {
        return Err(PaintError::InvalidArgument(
            "a regular polygon needs at least one vertex".to_string(),
        ));
    }
    let step = TAU / n as f32;
    Ok(polygon(
        (0..n).map(|i| center.polar_offset(offset + step * i as f32, radius)),
    ))
}

/// Axis-aligned rectangle centered on `center`.
///
/// Corners run top-left, top-right, bottom-right, bottom-left (y down).
pub fn rect([width, height]: [f32; 2], center: Point) -> Shape {
    let w2 = width / 2.0;
    let h2 = height / 2.0;
    polygon([
        Point::new(center.x - w2, center.y - h2),
        Point::new(center.x + w2, center.y - h2),
        Point::new(center.x + w2, center.y + h2),
        Point::new(center.x - w2, center.y + h2),
    ])
}

pub fn square(side: f32, center: Point) -> Shape {
    rect([side, side], center)
}

pub fn line(p1: Point, p2: Point) -> Shape {
    polygon([p1, p2])
}

// === Ellipses ===

pub fn full_ellipse(rotation: f32, radius: Vector, angle: AngleRange, position: Point) -> Shape {
    Shape::Ellipse(Ellipse::new(rotation, radius, angle, position))
}

pub fn ellipse(rotation: f32, radius: Vector, position: Point) -> Shape {
    full_ellipse(rotation, radius, AngleRange::FULL, position)
}

pub fn circle(radius: f32, position: Point) -> Shape {
    full_ellipse(0.0, Vector::new(radius, radius), AngleRange::FULL, position)
}

pub fn arc(radius: f32, angle: AngleRange, position: Point) -> Shape {
    full_ellipse(0.0, Vector::new(radius, radius), angle, position)
}

// === Maps ===
//
// Each combinator returns a new shape; a shape of the other kind passes
// through unchanged.

pub fn map_polygon(f: impl FnMut(Point) -> Point, shape: Shape) -> Shape {
    match shape {
        Shape::Polygon(polygon) => Shape::Polygon(polygon.map_vertices(f)),
        other => other,
    }
}

pub fn map_position(f: impl FnOnce(&Ellipse) -> Point, shape: Shape) -> Shape {
    map_ellipse(shape, |e| e.map_position(f))
}

pub fn map_rotation(f: impl FnOnce(&Ellipse) -> f32, shape: Shape) -> Shape {
    map_ellipse(shape, |e| e.map_rotation(f))
}

pub fn map_angle(f: impl FnOnce(&Ellipse) -> AngleRange, shape: Shape) -> Shape {
    map_ellipse(shape, |e| e.map_angle(f))
}

pub fn map_radius(f: impl FnOnce(&Ellipse) -> Vector, shape: Shape) -> Shape {
    map_ellipse(shape, |e| e.map_radius(f))
}

fn map_ellipse(shape: Shape, f: impl FnOnce(&Ellipse) -> Ellipse) -> Shape {
    match shape {
        Shape::Ellipse(ellipse) => Shape::Ellipse(f(&ellipse)),
        other => other,
    }
}

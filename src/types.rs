//! Core value types: points, faces, and integration points

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the 2D plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Subtract another point, yielding the difference vector
    pub fn sub(&self, other: &Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// z-component of the 2D cross product with another vector
    pub fn cross_z(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// A closed boundary loop; first and last point need not coincide
pub type Path = Vec<Point>;

/// One outer boundary loop plus optional hole loops
pub type Paths = Vec<Path>;

/// A mesh face: an ordered sequence of 3 (triangle) or 4 (quadrilateral)
/// vertices forming a simple convex polygon.
///
/// Vertex order is consistent per face as produced by the assembler. Any
/// other vertex count is rejected when the face reaches the geometric
/// mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    vertices: Vec<Point>,
}

impl Face {
    /// Create a face from an arbitrary vertex sequence
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Create a triangular face
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: vec![a, b, c],
        }
    }

    /// Create a quadrilateral face
    pub fn quad(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self {
            vertices: vec![a, b, c, d],
        }
    }

    /// Vertices in face order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
}

/// An unordered collection of faces, the output of mesh assembly
pub type Faces = Vec<Face>;

/// A physical integration point.
///
/// The weight already incorporates the reference rule's weight and the local
/// Jacobian determinant; no further transformation applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationPoint {
    pub location: Point,
    pub weight: f64,
}

impl IntegrationPoint {
    pub fn new(location: Point, weight: f64) -> Self {
        Self { location, weight }
    }
}

/// Integration points spanning one or more faces
pub type IntegrationPoints = Vec<IntegrationPoint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_sub_and_cross() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);

        let d = b.sub(&a);
        assert_eq!(d, Point::new(3.0, 4.0));

        // Right-handed turn gives positive z-component
        let ex = Point::new(1.0, 0.0);
        let ey = Point::new(0.0, 1.0);
        assert_eq!(ex.cross_z(&ey), 1.0);
        assert_eq!(ey.cross_z(&ex), -1.0);
    }

    #[test]
    fn test_face_constructors() {
        let t = Face::triangle(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        );
        assert_eq!(t.num_vertices(), 3);

        let q = Face::quad(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        );
        assert_eq!(q.num_vertices(), 4);
        assert_eq!(q.vertices()[2], Point::new(1.0, 1.0));
    }
}

//! Numerical quadrature over 2D polygonal domains
//!
//! This library integrates scalar, vector, or matrix valued functions over
//! regions bounded by arbitrary simple polygons, possibly non-convex or with
//! holes. The boundary is decomposed by an external tessellation service into
//! triangle primitives; this crate assembles those primitives into a mesh of
//! triangles and convex quadrilaterals, maps reference quadrature rules onto
//! each face, and accumulates the weighted sum.
//!
//! # Example
//! ```
//! use math_polygon_quadrature::{integrate_over_faces, Face, Point};
//!
//! let square = Face::quad(
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! );
//!
//! // Integrating f(x, y) = 1 yields the area of the domain.
//! let area: f64 = integrate_over_faces(|_, _| 1.0, &[square], 3).unwrap();
//! assert!((area - 1.0).abs() < 1e-12);
//! ```

mod assembler;
mod engine;
mod mapping;
mod rules;
mod types;

pub use assembler::{MeshAssembler, PrimitiveKind, TessellationSink};
pub use engine::{integrate, integrate_over_faces};
pub use mapping::{points_over_faces, points_over_quad, points_over_triangle};
pub use rules::{interval_rule, triangle_rule};
pub use types::{Face, Faces, IntegrationPoint, IntegrationPoints, Path, Paths, Point};

/// Error types for quadrature operations
#[derive(Debug, thiserror::Error)]
pub enum QuadratureError {
    #[error("Quadrature degree {0} is not supported (valid degrees are 1..=12)")]
    UnsupportedDegree(usize),

    #[error("Unsupported tessellation primitive (code {0})")]
    UnsupportedPrimitive(u32),

    #[error("Invalid face with {0} vertices (expected 3 or 4)")]
    InvalidFace(usize),

    #[error("Cannot integrate over an empty set of integration points")]
    EmptyDomain,
}

pub type Result<T> = std::result::Result<T, QuadratureError>;

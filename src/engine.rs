//! Generic weighted-sum integration engine
//!
//! Accumulates `f(x, y) * weight` over a set of integration points. The
//! result type only needs scaling by a weight and accumulation, so scalars
//! (`f64`) and ndarray vectors/matrices all work through the same function.

use std::ops::{Add, Mul};

use crate::mapping;
use crate::types::{Face, IntegrationPoint};
use crate::{QuadratureError, Result};

/// Integrate a function over a set of integration points.
///
/// The accumulator is seeded from the first point, so the result type needs
/// no constructible zero value; an empty point set is an error. Points are
/// consumed in input order, which affects floating-point rounding only.
pub fn integrate<R, F>(integrand: F, points: &[IntegrationPoint]) -> Result<R>
where
    F: Fn(f64, f64) -> R,
    R: Add<Output = R> + Mul<f64, Output = R>,
{
    let mut iter = points.iter();
    let first = iter.next().ok_or(QuadratureError::EmptyDomain)?;

    let mut result = integrand(first.location.x, first.location.y) * first.weight;

    for point in iter {
        result = result + integrand(point.location.x, point.location.y) * point.weight;
    }

    Ok(result)
}

/// Integrate a function over a collection of faces at the given quadrature
/// degree.
///
/// Derives the integration points per face (triangle rules for triangles,
/// tensor-product interval rules for quads) and delegates to
/// [`integrate`].
pub fn integrate_over_faces<R, F>(integrand: F, faces: &[Face], degree: usize) -> Result<R>
where
    F: Fn(f64, f64) -> R,
    R: Add<Output = R> + Mul<f64, Output = R>,
{
    let points = mapping::points_over_faces(faces, degree)?;

    integrate(integrand, &points)
}

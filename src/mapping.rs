//! Isoparametric mapping of reference rules onto physical faces
//!
//! Transforms a reference-element quadrature rule into physical integration
//! points and Jacobian-scaled weights over an arbitrary triangle or
//! quadrilateral. The Jacobian determinant captures the area-scaling
//! distortion of the reference-to-physical map, so the physical weights of a
//! face sum to its area regardless of element shape.
//!
//! Degenerate or inverted faces produce near-zero or negative Jacobian
//! determinants; these are not validated and silently contribute near-zero
//! or negative weights.

use crate::rules;
use crate::types::{Face, IntegrationPoint, IntegrationPoints, Point};
use crate::{QuadratureError, Result};

/// Integration points for a physical triangle.
///
/// The triangle map is affine, so a single Jacobian determinant applies to
/// every point. Physical weight = 0.5 * J * reference weight, where the 0.5
/// is the reference triangle's area.
pub fn points_over_triangle(
    a: Point,
    b: Point,
    c: Point,
    degree: usize,
) -> Result<IntegrationPoints> {
    let rule = rules::triangle_rule(degree)?;

    // J = dN/d(u,v) * [a; b; c] with dN rows (-1, 1, 0) and (-1, 0, 1)
    let j00 = b.x - a.x;
    let j01 = b.y - a.y;
    let j10 = c.x - a.x;
    let j11 = c.y - a.y;
    let jacobian_det = j00 * j11 - j01 * j10;

    let points = rule
        .iter()
        .map(|&(u, v, weight)| {
            let n = [1.0 - u - v, u, v];
            let location = Point::new(
                n[0] * a.x + n[1] * b.x + n[2] * c.x,
                n[0] * a.y + n[1] * b.y + n[2] * c.y,
            );
            IntegrationPoint::new(location, 0.5 * jacobian_det * weight)
        })
        .collect();

    Ok(points)
}

/// Integration points for a physical quadrilateral.
///
/// Uses the tensor product of two interval rules and the standard 4-node
/// bilinear shape functions. The bilinear map is not affine in general, so
/// the Jacobian determinant is evaluated at every (u, v).
pub fn points_over_quad(
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    degree_u: usize,
    degree_v: usize,
) -> Result<IntegrationPoints> {
    let rule_u = rules::interval_rule(degree_u)?;
    let rule_v = rules::interval_rule(degree_v)?;

    let vertices = [a, b, c, d];
    let mut points = Vec::with_capacity(rule_u.len() * rule_v.len());

    for &(u, weight_u) in rule_u {
        for &(v, weight_v) in rule_v {
            let n = [
                0.25 * (1.0 - u) * (1.0 - v),
                0.25 * (1.0 + u) * (1.0 - v),
                0.25 * (1.0 + u) * (1.0 + v),
                0.25 * (1.0 - u) * (1.0 + v),
            ];
            let dn_du = [
                0.25 * (v - 1.0),
                0.25 * (1.0 - v),
                0.25 * (1.0 + v),
                0.25 * (-1.0 - v),
            ];
            let dn_dv = [
                0.25 * (u - 1.0),
                0.25 * (-1.0 - u),
                0.25 * (1.0 + u),
                0.25 * (1.0 - u),
            ];

            let mut location = Point::new(0.0, 0.0);
            let mut j = [[0.0; 2]; 2];
            for (i, vertex) in vertices.iter().enumerate() {
                location.x += n[i] * vertex.x;
                location.y += n[i] * vertex.y;
                j[0][0] += dn_du[i] * vertex.x;
                j[0][1] += dn_du[i] * vertex.y;
                j[1][0] += dn_dv[i] * vertex.x;
                j[1][1] += dn_dv[i] * vertex.y;
            }
            let jacobian_det = j[0][0] * j[1][1] - j[0][1] * j[1][0];

            points.push(IntegrationPoint::new(
                location,
                jacobian_det * weight_u * weight_v,
            ));
        }
    }

    Ok(points)
}

/// Integration points for a collection of faces.
///
/// Triangle faces use the triangle rule of `degree`; quad faces use the
/// interval rule of `degree` in both parametric directions. A face with a
/// vertex count other than 3 or 4 aborts the whole call.
pub fn points_over_faces(faces: &[Face], degree: usize) -> Result<IntegrationPoints> {
    let mut points = IntegrationPoints::new();

    for face in faces {
        let v = face.vertices();
        match v.len() {
            3 => points.extend(points_over_triangle(v[0], v[1], v[2], degree)?),
            4 => points.extend(points_over_quad(v[0], v[1], v[2], v[3], degree, degree)?),
            n => return Err(QuadratureError::InvalidFace(n)),
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> (Point, Point, Point) {
        (
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        )
    }

    fn unit_square() -> (Point, Point, Point, Point) {
        (
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        )
    }

    #[test]
    fn test_unit_triangle_degree_1_centroid() {
        let (a, b, c) = unit_triangle();
        let points = points_over_triangle(a, b, c, 1).unwrap();

        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].location.x, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].location.y, 1.0 / 3.0, epsilon = 1e-12);
        // Single weight carries the full triangle area.
        assert_relative_eq!(points[0].weight, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_square_degree_1_midpoint() {
        let (a, b, c, d) = unit_square();
        let points = points_over_quad(a, b, c, d, 1, 1).unwrap();

        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].location.x, 0.5, epsilon = 1e-14);
        assert_relative_eq!(points[0].location.y, 0.5, epsilon = 1e-14);
        assert_relative_eq!(points[0].weight, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_triangle_point_count_matches_rule() {
        let (a, b, c) = unit_triangle();
        for degree in 1..=12 {
            let rule = crate::rules::triangle_rule(degree).unwrap();
            let points = points_over_triangle(a, b, c, degree).unwrap();
            assert_eq!(points.len(), rule.len());
        }
    }

    #[test]
    fn test_quad_point_count_is_tensor_product() {
        let (a, b, c, d) = unit_square();
        let points = points_over_quad(a, b, c, d, 3, 5).unwrap();
        assert_eq!(points.len(), 3 * 5);
    }

    #[test]
    fn test_triangle_weights_sum_to_area() {
        // Scaled and translated triangle with area 6
        let a = Point::new(1.0, 1.0);
        let b = Point::new(5.0, 1.0);
        let c = Point::new(1.0, 4.0);
        for degree in 1..=12 {
            let points = points_over_triangle(a, b, c, degree).unwrap();
            let area: f64 = points.iter().map(|p| p.weight).sum();
            assert_relative_eq!(area, 6.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_skewed_quad_weights_sum_to_area() {
        // Trapezoid with parallel sides 3 and 1, height 1: area 2
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 0.0);
        let c = Point::new(2.0, 1.0);
        let d = Point::new(1.0, 1.0);
        for degree in 1..=12 {
            let points = points_over_quad(a, b, c, d, degree, degree).unwrap();
            let area: f64 = points.iter().map(|p| p.weight).sum();
            assert_relative_eq!(area, 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_clockwise_triangle_yields_negative_weights() {
        // Reversed orientation flips the Jacobian sign; this is inherited
        // behavior, not validated.
        let (a, b, c) = unit_triangle();
        let points = points_over_triangle(a, c, b, 1).unwrap();
        assert_relative_eq!(points[0].weight, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_points_over_faces_mixed_mesh() {
        let (a, b, c) = unit_triangle();
        let (qa, qb, qc, qd) = unit_square();
        let faces = vec![Face::triangle(a, b, c), Face::quad(qa, qb, qc, qd)];

        let points = points_over_faces(&faces, 2).unwrap();
        let tri_rule_len = crate::rules::triangle_rule(2).unwrap().len();
        assert_eq!(points.len(), tri_rule_len + 2 * 2);

        let total: f64 = points.iter().map(|p| p.weight).sum();
        assert_relative_eq!(total, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_points_over_faces_rejects_bad_vertex_count() {
        let p = Point::new(0.0, 0.0);
        let faces = vec![Face::new(vec![p; 5])];
        assert!(matches!(
            points_over_faces(&faces, 2),
            Err(QuadratureError::InvalidFace(5))
        ));
    }

    #[test]
    fn test_unsupported_degree_propagates() {
        let (a, b, c) = unit_triangle();
        assert!(matches!(
            points_over_triangle(a, b, c, 13),
            Err(QuadratureError::UnsupportedDegree(13))
        ));
        let (qa, qb, qc, qd) = unit_square();
        assert!(matches!(
            points_over_quad(qa, qb, qc, qd, 1, 0),
            Err(QuadratureError::UnsupportedDegree(0))
        ));
    }
}

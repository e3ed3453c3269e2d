//! Mesh assembly from a tessellator's primitive stream
//!
//! An external planar tessellation service decomposes a polygon into batches
//! of triangle primitives and reports them through begin/vertex/end
//! callbacks. The [`MeshAssembler`] consumes that stream and greedily merges
//! adjacent triangles into convex quadrilaterals, falling back to plain
//! triangles where the merge test fails.

use serde::{Deserialize, Serialize};

use crate::types::{Face, Faces, Point};
use crate::{QuadratureError, Result};

/// Primitive batch kinds reported by the tessellation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Independent triangles: vertices 0-1-2, 3-4-5, ...
    TriangleList,
    /// Each vertex after the second forms a triangle with its two predecessors
    TriangleStrip,
    /// Each vertex after the first forms a triangle with the pivot (vertex 0)
    /// and its predecessor
    TriangleFan,
}

impl PrimitiveKind {
    /// Map a GLU-style primitive code to a kind.
    ///
    /// GLU tessellators report GL_TRIANGLES (4), GL_TRIANGLE_STRIP (5) or
    /// GL_TRIANGLE_FAN (6); any other code is rejected.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            4 => Ok(PrimitiveKind::TriangleList),
            5 => Ok(PrimitiveKind::TriangleStrip),
            6 => Ok(PrimitiveKind::TriangleFan),
            other => Err(QuadratureError::UnsupportedPrimitive(other)),
        }
    }
}

/// Receiver for a tessellator's callback-driven session.
///
/// The host's tessellation service drives one strictly sequential session
/// per polygon: `begin(kind)`, then `vertex(point)` per vertex, then
/// `end()`, repeated per primitive batch. Implementing this trait decouples
/// consumers from any specific tessellation implementation.
pub trait TessellationSink {
    fn begin(&mut self, kind: PrimitiveKind);
    fn vertex(&mut self, point: Point);
    fn end(&mut self);
}

/// Assembles tessellation primitives into triangle and quad faces.
///
/// One assembler instance owns one session's buffer; concurrent sessions
/// need independent instances.
#[derive(Debug, Default)]
pub struct MeshAssembler {
    buffer: Vec<Point>,
    kind: Option<PrimitiveKind>,
    faces: Faces,
}

impl MeshAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new primitive batch with a fresh vertex buffer
    pub fn begin(&mut self, kind: PrimitiveKind) {
        self.buffer.clear();
        self.kind = Some(kind);
    }

    /// Buffer a vertex, dropping it if it exactly coincides with the
    /// previous one (degenerate-edge suppression; the comparison is exact,
    /// not epsilon-based)
    pub fn vertex(&mut self, point: Point) {
        if self.buffer.last() == Some(&point) {
            return;
        }

        self.buffer.push(point);
    }

    /// Close the current batch, decomposing the buffered vertices into faces
    pub fn end(&mut self) {
        match self.kind.take() {
            Some(PrimitiveKind::TriangleList) => self.add_triangle_list(),
            Some(PrimitiveKind::TriangleStrip) => self.add_triangle_strip(),
            Some(PrimitiveKind::TriangleFan) => self.add_triangle_fan(),
            None => {}
        }

        self.buffer.clear();
    }

    /// Faces assembled so far
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Consume the assembler, returning the assembled faces
    pub fn into_faces(self) -> Faces {
        self.faces
    }

    fn add_triangle(&mut self, ia: usize, ib: usize, ic: usize) {
        self.faces.push(Face::triangle(
            self.buffer[ia],
            self.buffer[ib],
            self.buffer[ic],
        ));
    }

    /// Append the quad (a, b, c, d) if it is convex.
    ///
    /// The quad is accepted only if all four pairwise products of adjacent
    /// edge cross-products are non-negative, i.e. all four turn directions
    /// agree in sign. This handles both winding orders. Near-degenerate
    /// quads are not screened beyond the sign check.
    fn try_add_quad(&mut self, ia: usize, ib: usize, ic: usize, id: usize) -> bool {
        let a = self.buffer[ia];
        let b = self.buffer[ib];
        let c = self.buffer[ic];
        let d = self.buffer[id];

        let ab = b.sub(&a);
        let bc = c.sub(&b);
        let cd = d.sub(&c);
        let da = a.sub(&d);

        let abc = ab.cross_z(&bc);
        let bcd = bc.cross_z(&cd);
        let cda = cd.cross_z(&da);
        let dab = da.cross_z(&ab);

        if abc * bcd < 0.0 || bcd * cda < 0.0 || cda * dab < 0.0 || dab * abc < 0.0 {
            return false;
        }

        self.faces.push(Face::quad(a, b, c, d));

        true
    }

    fn add_triangle_list(&mut self) {
        let n = self.buffer.len();
        if n % 3 != 0 {
            log::debug!("triangle list: dropping {} trailing vertices", n % 3);
        }

        let mut i = 2;
        while i < n {
            self.add_triangle(i - 2, i - 1, i);
            i += 3;
        }
    }

    fn add_triangle_fan(&mut self) {
        // Vertex 0 is the pivot. Greedily merge (pivot, i, i+1, i+2) into a
        // quad, advancing by 2; on failure emit (pivot, i, i+1) and advance
        // by 1.
        let mut i = 1;
        loop {
            if i + 2 < self.buffer.len() && self.try_add_quad(0, i, i + 1, i + 2) {
                i += 2;
                continue;
            }

            if i + 1 < self.buffer.len() {
                self.add_triangle(0, i, i + 1);
                i += 1;
                continue;
            }

            break;
        }
    }

    fn add_triangle_strip(&mut self) {
        // The crossed index order (i, i+1, i+3, i+2) matches strip winding.
        let mut i = 0;
        loop {
            if i + 3 < self.buffer.len() && self.try_add_quad(i, i + 1, i + 3, i + 2) {
                i += 2;
                continue;
            }

            if i + 2 < self.buffer.len() {
                self.add_triangle(i, i + 1, i + 2);
                i += 1;
                continue;
            }

            break;
        }
    }
}

impl TessellationSink for MeshAssembler {
    fn begin(&mut self, kind: PrimitiveKind) {
        MeshAssembler::begin(self, kind);
    }

    fn vertex(&mut self, point: Point) {
        MeshAssembler::vertex(self, point);
    }

    fn end(&mut self) {
        MeshAssembler::end(self);
    }
}

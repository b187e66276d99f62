//! Object space to raster space mapping
use crate::geometry::Vertex;

/// Maps object-space coordinates in roughly `[-1, 1]` onto a square canvas.
///
/// Raster space has its origin in the top-left corner with Y growing
/// downwards. Nothing is clipped; points outside `[-1, 1]` land outside the
/// canvas and it is up to the surface what happens to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterProjection {
    width: f32,
}

impl RasterProjection {
    pub fn new(width: u32) -> Self {
        Self {
            width: width as f32,
        }
    }

    /// Project a vertex to raster space; z is carried through unchanged
    pub fn to_raster(&self, v: &Vertex) -> Vertex {
        let half = self.width / 2.0;
        let p = v.position;
        Vertex::new((p.x + 1.0) * half, (-p.y + 1.0) * half, p.z)
    }

    /// Whether a raster-space point lies on the canvas `[0, W] x [0, W]`
    pub fn contains(&self, v: &Vertex) -> bool {
        let range = 0.0..=self.width;
        range.contains(&v.x()) && range.contains(&v.y())
    }
}

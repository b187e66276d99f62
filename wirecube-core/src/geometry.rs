//! Geometry primitives for the wireframe pipeline
use nalgebra::Point3;

/// A 3D vertex in object or raster space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn z(&self) -> f32 {
        self.position.z
    }
}

/// An unordered pair of indices into a scene's vertex list.
///
/// The indices are only checked against a vertex count when the edge is
/// handed to [`Scene::new`](crate::scene::Scene::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Whether both endpoints index into a list of `vertex_count` vertices
    pub fn fits(&self, vertex_count: usize) -> bool {
        self.a < vertex_count && self.b < vertex_count
    }
}

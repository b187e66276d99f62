//! The static object drawn every frame
use thiserror::Error;

use crate::color::Color;
use crate::geometry::{Edge, Vertex};

/// Largest absolute object-space coordinate a scene vertex may have
pub const OBJECT_EXTENT: f32 = 0.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Scene has no vertices")]
    EmptyScene,
    #[error("Scene palette is empty")]
    EmptyPalette,
    #[error("Edge {index} ({a}, {b}) references a vertex outside 0..{vertex_count}")]
    InvalidEdge {
        index: usize,
        a: usize,
        b: usize,
        vertex_count: usize,
    },
    #[error("Vertex {index} at ({x}, {y}, {z}) lies outside [-0.5, 0.5]")]
    VertexOutOfRange { index: usize, x: f32, y: f32, z: f32 },
}

/// Vertices, edges and palette of a wireframe object.
///
/// Built once and never mutated afterwards; the frame pipeline only borrows it.
#[derive(Debug, Clone)]
pub struct Scene {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    palette: Vec<Color>,
}

impl Scene {
    pub fn new(
        vertices: Vec<Vertex>,
        edges: Vec<Edge>,
        palette: Vec<Color>,
    ) -> Result<Self, SceneError> {
        if vertices.is_empty() {
            return Err(SceneError::EmptyScene);
        }
        if palette.is_empty() {
            return Err(SceneError::EmptyPalette);
        }

        for (index, v) in vertices.iter().enumerate() {
            let p = v.position;
            let inside = |c: f32| (-OBJECT_EXTENT..=OBJECT_EXTENT).contains(&c);
            if !(inside(p.x) && inside(p.y) && inside(p.z)) {
                return Err(SceneError::VertexOutOfRange {
                    index,
                    x: p.x,
                    y: p.y,
                    z: p.z,
                });
            }
        }

        if let Some((index, edge)) = edges
            .iter()
            .enumerate()
            .find(|(_, edge)| !edge.fits(vertices.len()))
        {
            let (a, b) = edge.endpoints();
            return Err(SceneError::InvalidEdge {
                index,
                a,
                b,
                vertex_count: vertices.len(),
            });
        }

        log::debug!(
            "Scene built with {} vertices, {} edges, {} colors",
            vertices.len(),
            edges.len(),
            palette.len()
        );

        Ok(Self {
            vertices,
            edges,
            palette,
        })
    }

    /// The unit wireframe cube, half-extent 0.25, with its twelve-colour palette
    pub fn cube() -> Result<Self, SceneError> {
        let h = 0.25;
        let vertices = vec![
            // Front face
            Vertex::new(h, h, h),
            Vertex::new(h, -h, h),
            Vertex::new(-h, -h, h),
            Vertex::new(-h, h, h),
            // Back face
            Vertex::new(h, h, -h),
            Vertex::new(h, -h, -h),
            Vertex::new(-h, -h, -h),
            Vertex::new(-h, h, -h),
        ];

        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ]
        .into_iter()
        .map(|(a, b)| Edge::new(a, b))
        .collect();

        let palette = [
            0x8478eaff, 0xada5f1ff, 0xedc967ff, 0xdba830ff, 0x00b8d4ff, 0x34ebaeff, 0xffffffff,
            0xed66d2ff, 0xed66d2ff, 0xed00d2ff, 0xff66e3ff, 0x0033f0ff,
        ]
        .into_iter()
        .map(Color)
        .collect();

        Self::new(vertices, edges, palette)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn vertex_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// Colour of the edge at `index` in the edge list, cycling through the palette
    pub fn edge_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = Scene::cube().unwrap();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
        assert_eq!(cube.palette().len(), 12);
        assert_eq!(cube.vertex_color(0), Color(0x8478eaff));
    }

    #[test]
    fn test_cube_edges_are_distinct() {
        let cube = Scene::cube().unwrap();
        let mut pairs: Vec<_> = cube
            .edges()
            .iter()
            .map(|edge| {
                let (a, b) = edge.endpoints();
                (a.min(b), a.max(b))
            })
            .collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 12);
    }

    #[test]
    fn test_edge_colors_cycle() {
        let vertices = vec![Vertex::new(0.0, 0.0, 0.0), Vertex::new(0.1, 0.0, 0.0)];
        let edges = vec![Edge::new(0, 1); 5];
        let palette = vec![Color(0xff0000ff), Color(0x00ff00ff), Color(0x0000ffff)];
        let scene = Scene::new(vertices, edges, palette).unwrap();

        assert_eq!(scene.edge_color(3), scene.edge_color(0));
        assert_eq!(scene.edge_color(4), scene.edge_color(1));
        assert_ne!(scene.edge_color(2), scene.edge_color(0));
    }

    #[test]
    fn test_rejects_invalid_edge() {
        let vertices = vec![Vertex::new(0.0, 0.0, 0.0), Vertex::new(0.1, 0.0, 0.0)];
        let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
        let result = Scene::new(vertices, edges, vec![Color(0xffffffff)]);
        assert_eq!(
            result.unwrap_err(),
            SceneError::InvalidEdge {
                index: 1,
                a: 1,
                b: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_vertex() {
        let vertices = vec![Vertex::new(0.0, 0.6, 0.0)];
        let result = Scene::new(vertices, Vec::new(), vec![Color(0xffffffff)]);
        assert!(matches!(result, Err(SceneError::VertexOutOfRange { index: 0, .. })));
    }

    #[test]
    fn test_rejects_empty_inputs() {
        let result = Scene::new(Vec::new(), Vec::new(), vec![Color(0xffffffff)]);
        assert_eq!(result.unwrap_err(), SceneError::EmptyScene);

        let result = Scene::new(vec![Vertex::new(0.0, 0.0, 0.0)], Vec::new(), Vec::new());
        assert_eq!(result.unwrap_err(), SceneError::EmptyPalette);
    }
}

//! Wireframe meshes: vertices plus the unique edges between them.

use std::collections::BTreeSet;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::math::vec3::Vec3;

/// Corners of the unit cube.
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const CUBE_EDGES: [(usize, usize); 12] = [
    // Bottom face (z = -1)
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // Top face (z = 1)
    (7, 6),
    (6, 4),
    (4, 5),
    (5, 7),
    // Uprights
    (0, 7),
    (1, 6),
    (2, 4),
    (3, 5),
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
}

impl Mesh {
    /// Builds a mesh, dropping duplicate and out-of-range edges.
    pub fn new(vertices: Vec<Vec3>, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let n = vertices.len();
        let unique: BTreeSet<(usize, usize)> = edges
            .into_iter()
            .filter(|&(a, b)| a != b && a < n && b < n)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        Self {
            vertices,
            edges: unique.into_iter().collect(),
        }
    }

    /// Axis-aligned cube centred on the origin.
    pub fn cube(half_extent: f32) -> Self {
        Self::new(
            CUBE_VERTICES.iter().map(|&v| v * half_extent).collect(),
            CUBE_EDGES,
        )
    }

    /// Loads every object in an OBJ file into one mesh. Faces are
    /// triangulated and each triangle contributes its three edges.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path, &options)?;

        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        for model in &models {
            let offset = vertices.len();
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            for tri in model.mesh.indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize + offset);
                edges.extend([(a, b), (b, c), (c, a)]);
            }
        }

        let mesh = Self::new(vertices, edges);
        info!(
            "Loaded {:?}: {} objects, {} vertices, {} edges",
            path,
            models.len(),
            mesh.vertices.len(),
            mesh.edges.len()
        );
        Ok(mesh)
    }

    /// Recentres on the vertex centroid and scales so the farthest vertex
    /// sits at distance 1.
    pub fn normalized(mut self) -> Self {
        if self.vertices.is_empty() {
            return self;
        }
        let centroid = self
            .vertices
            .iter()
            .fold(Vec3::ZERO, |acc, &v| acc + v)
            / self.vertices.len() as f32;
        let radius = self
            .vertices
            .iter()
            .map(|&v| (v - centroid).magnitude())
            .fold(0.0f32, f32::max);
        let scale = if radius > 0.0 { 1.0 / radius } else { 1.0 };
        for v in &mut self.vertices {
            *v = (*v - centroid) * scale;
        }
        self
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Edges as `(lower, higher)` vertex index pairs, sorted.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn cube_has_twelve_unit_edges() {
        let cube = Mesh::cube(0.5);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
        for &(a, b) in cube.edges() {
            let length = (cube.vertices()[a] - cube.vertices()[b]).magnitude();
            assert_relative_eq!(length, 1.0);
        }
    }

    #[test]
    fn duplicate_and_invalid_edges_are_dropped() {
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y],
            [(0, 1), (1, 0), (2, 2), (1, 7), (2, 1)],
        );
        assert_eq!(mesh.edges(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn normalized_fits_in_unit_sphere() {
        let mesh = Mesh::cube(3.0).normalized();
        let farthest = mesh
            .vertices()
            .iter()
            .map(|v| v.magnitude())
            .fold(0.0f32, f32::max);
        assert_relative_eq!(farthest, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn loads_quad_from_obj() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "o quad\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4"
        )
        .unwrap();

        let mesh = Mesh::from_obj(file.path()).unwrap();
        assert_eq!(mesh.vertices().len(), 4);
        // Four sides plus the triangulation diagonal.
        assert_eq!(mesh.edges().len(), 5);
    }

    #[test]
    fn missing_obj_is_a_load_error() {
        let err = Mesh::from_obj("/nonexistent/model.obj").unwrap_err();
        assert!(matches!(err, Error::ModelLoad(_)));
    }
}

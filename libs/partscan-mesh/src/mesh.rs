//! # Triangle Mesh Data Structure
//!
//! Triangle-soup mesh representation: flat position and normal buffers
//! with no shared-vertex indexing.

use glam::DVec3;

/// A triangulated surface mesh stored as a triangle soup.
///
/// Every three consecutive positions form one triangle. Normals, when
/// present, parallel the position buffer one-to-one (the loader repeats
/// each facet normal once per vertex). All geometry calculations use f64
/// internally; STL stores f32, widened on parse.
///
/// A mesh lives for the duration of one pipeline run and is never
/// mutated after loading.
///
/// # Example
///
/// ```rust
/// use partscan_mesh::TriangleMesh;
/// use glam::DVec3;
///
/// let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
/// let mesh = TriangleMesh::new(positions);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// Vertex positions, three per triangle (f64 for precision)
    positions: Vec<DVec3>,
    /// Optional per-vertex normals, parallel to `positions`
    normals: Option<Vec<DVec3>>,
}

impl TriangleMesh {
    /// Creates a mesh from a position buffer with no normals.
    pub fn new(positions: Vec<DVec3>) -> Self {
        Self {
            positions,
            normals: None,
        }
    }

    /// Creates a mesh from parallel position and normal buffers.
    ///
    /// The buffers must have the same length; analysis stages index them
    /// in lockstep.
    pub fn with_normals(positions: Vec<DVec3>, normals: Vec<DVec3>) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        Self {
            positions,
            normals: Some(normals),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles (vertex count / 3).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns a reference to the position buffer.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the per-vertex normals, if the source format carried them.
    #[inline]
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners. A degenerate mesh with zero triangles
    /// yields a zero-size box at the origin.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Returns the bounding-box size (`max - min` per axis).
    pub fn bounding_size(&self) -> DVec3 {
        let (min, max) = self.bounding_box();
        max - min
    }
}

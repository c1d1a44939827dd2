//! Mesh source and sink abstractions.
//!
//! The half-edge builder consumes a [`MeshSource`]; finished meshes are
//! emitted through a [`MeshSink`]. Concrete file formats (such as the
//! Wavefront OBJ reader/writer) live outside the kernel and plug into
//! these two traits.

use meshprep_geometry::Point3;

/// A polygonal mesh supplier.
///
/// A source exposes vertices, faces as vertex-index lists (degree >= 3),
/// an optional patch per face, and patch names. The builder pre-sizes its
/// arrays from the counts, so `face_edge_count` must equal the sum of all
/// face degrees.
pub trait MeshSource {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of faces.
    fn face_count(&self) -> usize;

    /// Total number of face edges (the sum of all face degrees).
    fn face_edge_count(&self) -> usize;

    /// Number of patches.
    fn patch_count(&self) -> usize;

    /// Get a vertex position by index.
    fn vertex(&self, index: usize) -> Point3<f64>;

    /// Get the vertex indices of a face, in winding order.
    fn face(&self, index: usize) -> &[usize];

    /// Get the patch assigned to a face, if any.
    fn face_patch(&self, index: usize) -> Option<usize>;

    /// Get a patch name by index.
    fn patch(&self, index: usize) -> &str;
}

/// A polygonal mesh consumer.
///
/// A sink accepts the complete mesh in one call; implementations decide
/// how to persist it (file, buffer, network).
pub trait MeshSink {
    /// Error type produced by the sink.
    type Error;

    /// Write out a full mesh.
    ///
    /// `faces` holds vertex-index lists in winding order, `face_patches`
    /// the per-face patch assignment (parallel to `faces`), and `patches`
    /// the patch names.
    ///
    /// # Errors
    ///
    /// Propagates whatever failure the concrete sink encounters.
    fn write_mesh(
        &mut self,
        vertices: &[Point3<f64>],
        faces: &[Vec<usize>],
        face_patches: &[Option<usize>],
        patches: &[String],
    ) -> Result<(), Self::Error>;
}

/// A plain in-memory mesh, the simplest possible [`MeshSource`].
///
/// Useful for building half-edge meshes programmatically and as a staging
/// buffer between a parser and the kernel.
///
/// # Example
///
/// ```
/// use meshprep_geometry::Point3;
/// use meshprep_halfedge::{MeshBuffer, MeshSource};
///
/// let mut buffer = MeshBuffer::new();
/// buffer.push_vertex(Point3::new(0.0, 0.0, 0.0));
/// buffer.push_vertex(Point3::new(1.0, 0.0, 0.0));
/// buffer.push_vertex(Point3::new(0.0, 1.0, 0.0));
/// buffer.push_face(vec![0, 1, 2], None);
///
/// assert_eq!(buffer.face_count(), 1);
/// assert_eq!(buffer.face_edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Vec<usize>>,
    face_patches: Vec<Option<usize>>,
    patches: Vec<String>,
}

impl MeshBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, point: Point3<f64>) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Append a face given its vertex indices and optional patch.
    pub fn push_face(&mut self, vertices: Vec<usize>, patch: Option<usize>) -> usize {
        self.faces.push(vertices);
        self.face_patches.push(patch);
        self.faces.len() - 1
    }

    /// Append a patch name, returning its index.
    pub fn push_patch(&mut self, name: impl Into<String>) -> usize {
        self.patches.push(name.into());
        self.patches.len() - 1
    }
}

impl MeshSource for MeshBuffer {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face_edge_count(&self) -> usize {
        self.faces.iter().map(Vec::len).sum()
    }

    fn patch_count(&self) -> usize {
        self.patches.len()
    }

    fn vertex(&self, index: usize) -> Point3<f64> {
        self.vertices[index]
    }

    fn face(&self, index: usize) -> &[usize] {
        &self.faces[index]
    }

    fn face_patch(&self, index: usize) -> Option<usize> {
        self.face_patches[index]
    }

    fn patch(&self, index: usize) -> &str {
        &self.patches[index]
    }
}

impl MeshSink for MeshBuffer {
    type Error = std::convert::Infallible;

    fn write_mesh(
        &mut self,
        vertices: &[Point3<f64>],
        faces: &[Vec<usize>],
        face_patches: &[Option<usize>],
        patches: &[String],
    ) -> Result<(), Self::Error> {
        self.vertices = vertices.to_vec();
        self.faces = faces.to_vec();
        self.face_patches = face_patches.to_vec();
        self.patches = patches.to_vec();
        Ok(())
    }
}

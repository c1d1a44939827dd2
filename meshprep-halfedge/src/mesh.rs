//! The half-edge mesh structure, its builder, and read-only queries.

use std::collections::VecDeque;

use hashbrown::HashMap;
use meshprep_geometry::{Aabb, Point3, Triangle, Vector3};

use crate::elements::{Face, HalfEdge, Patch, Vertex};
use crate::error::TopologyError;
use crate::source::{MeshSink, MeshSource};

/// Index-based half-edge mesh for manifold polygonal surfaces.
///
/// All entities live in dense arrays and reference each other by index,
/// which keeps twin/next/prev lookups O(1) and allows in-place mutation
/// during orientation. `Option<usize>` marks absent references (a boundary
/// twin, an unanchored vertex, an unassigned patch).
///
/// # Example
///
/// ```
/// use meshprep_geometry::Point3;
/// use meshprep_halfedge::{HalfEdgeMesh, MeshBuffer};
///
/// let mut buffer = MeshBuffer::new();
/// for point in [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ] {
///     buffer.push_vertex(point);
/// }
/// buffer.push_face(vec![0, 2, 1], None);
/// buffer.push_face(vec![0, 1, 3], None);
/// buffer.push_face(vec![1, 2, 3], None);
/// buffer.push_face(vec![0, 3, 2], None);
///
/// let mesh = HalfEdgeMesh::from_source(&buffer).unwrap();
/// assert_eq!(mesh.face_count(), 4);
/// assert!(mesh.is_closed());
/// assert!(mesh.is_consistent());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HalfEdgeMesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) faces: Vec<Face>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) patches: Vec<Patch>,
}

impl HalfEdgeMesh {
    /// Build a half-edge mesh from a [`MeshSource`].
    ///
    /// Runs in time linear in the total number of face edges. Twin
    /// half-edges are paired through a transient map keyed by the
    /// undirected edge; every edge of the source must be shared by exactly
    /// two faces.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NonManifold`] if any half-edge is left
    /// without a twin once all faces are swept, i.e. the source describes
    /// a surface that is open or has over-shared edges.
    pub fn from_source<S: MeshSource>(source: &S) -> Result<Self, TopologyError> {
        let mut mesh = Self {
            vertices: Vec::with_capacity(source.vertex_count()),
            faces: Vec::with_capacity(source.face_count()),
            half_edges: Vec::with_capacity(source.face_edge_count()),
            patches: Vec::with_capacity(source.patch_count()),
        };

        for i in 0..source.patch_count() {
            mesh.patches.push(Patch::new(source.patch(i)));
        }

        for i in 0..source.vertex_count() {
            mesh.vertices.push(Vertex::new(source.vertex(i)));
        }

        // Sweep the faces, emitting one half-edge per face edge. The
        // pairing map holds the first half-edge seen for each undirected
        // edge until its twin arrives.
        let mut pairing: HashMap<(usize, usize), usize> =
            HashMap::with_capacity(source.face_edge_count() / 2);
        let mut cursor = 0;

        for i in 0..source.face_count() {
            let face = source.face(i);
            let degree = face.len();

            mesh.faces.push(Face::new(cursor, source.face_patch(i)));

            for (j, &origin) in face.iter().enumerate() {
                let id = cursor + j;
                let to = face[(j + 1) % degree];

                mesh.half_edges.push(HalfEdge {
                    origin,
                    face: i,
                    next: cursor + (j + 1) % degree,
                    prev: cursor + (j + degree - 1) % degree,
                    twin: None,
                    is_feature: false,
                });
                mesh.vertices[origin].half_edge = Some(id);

                let key = (origin.min(to), origin.max(to));

                if let Some(twin) = pairing.remove(&key) {
                    mesh.half_edges[id].twin = Some(twin);
                    mesh.half_edges[twin].twin = Some(id);
                } else {
                    pairing.insert(key, id);
                }
            }

            cursor += degree;
        }

        if !pairing.is_empty() {
            return Err(TopologyError::NonManifold {
                unpaired: pairing.len(),
            });
        }

        Ok(mesh)
    }

    /// Emit the mesh through a [`MeshSink`].
    ///
    /// # Errors
    ///
    /// Propagates the sink's own error.
    pub fn write_to<S: MeshSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let vertices: Vec<Point3<f64>> = self.vertices.iter().map(|v| v.point).collect();
        let faces: Vec<Vec<usize>> = (0..self.faces.len()).map(|i| self.face_vertices(i)).collect();
        let face_patches: Vec<Option<usize>> = self.faces.iter().map(|f| f.patch).collect();
        let patches: Vec<String> = self.patches.iter().map(|p| p.name.clone()).collect();

        sink.write_mesh(&vertices, &faces, &face_patches, &patches)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of half-edges.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of patches.
    #[must_use]
    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    /// Get a vertex by index.
    #[must_use]
    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// Get a face by index.
    #[must_use]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    /// Get a half-edge by index.
    #[must_use]
    pub fn half_edge(&self, index: usize) -> &HalfEdge {
        &self.half_edges[index]
    }

    /// Get a patch by index.
    #[must_use]
    pub fn patch(&self, index: usize) -> &Patch {
        &self.patches[index]
    }

    /// All vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All faces.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// All half-edges.
    #[must_use]
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    /// All patches.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// The ordered half-edges bounding a face.
    ///
    /// Walks `next` from the face's anchor half-edge until the cycle
    /// closes; the result length is the face degree.
    #[must_use]
    pub fn face_half_edges(&self, index: usize) -> Vec<usize> {
        let start = self.faces[index].half_edge;
        let mut half_edges = Vec::with_capacity(3);
        let mut current = start;

        loop {
            half_edges.push(current);
            current = self.half_edges[current].next;

            if current == start {
                break;
            }
        }

        half_edges
    }

    /// The vertices of a face, in winding order.
    #[must_use]
    pub fn face_vertices(&self, index: usize) -> Vec<usize> {
        self.face_half_edges(index)
            .iter()
            .map(|&id| self.half_edges[id].origin)
            .collect()
    }

    /// The faces sharing an edge with a face.
    ///
    /// Boundary half-edges contribute no neighbor, so the result length is
    /// at most the face degree.
    #[must_use]
    pub fn face_neighbors(&self, index: usize) -> Vec<usize> {
        self.face_half_edges(index)
            .iter()
            .filter_map(|&id| self.half_edges[id].twin)
            .map(|twin| self.half_edges[twin].face)
            .collect()
    }

    /// The area-weighted normal of a face.
    ///
    /// Sums the unit normals of the fan triangles `(v0, vi, vi+1)` weighted
    /// by their areas and divides by the total area. Well-defined for
    /// convex and mildly non-convex planar polygons; for a planar face the
    /// result has unit length.
    #[must_use]
    pub fn face_normal(&self, index: usize) -> Vector3<f64> {
        let vertices = self.face_vertices(index);
        let anchor = self.vertices[vertices[0]].point;

        let mut normal = Vector3::zeros();
        let mut total_area = 0.0;

        for window in vertices[1..].windows(2) {
            let triangle = Triangle::new(
                anchor,
                self.vertices[window[0]].point,
                self.vertices[window[1]].point,
            );
            let area = triangle.area();

            normal += triangle.unit_normal() * area;
            total_area += area;
        }

        normal / total_area
    }

    /// The area-weighted normals of all faces.
    #[must_use]
    pub fn face_normals(&self) -> Vec<Vector3<f64>> {
        (0..self.faces.len()).map(|i| self.face_normal(i)).collect()
    }

    /// The faces assigned to a patch.
    #[must_use]
    pub fn patch_faces(&self, patch: usize) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| face.patch == Some(patch))
            .map(|(i, _)| i)
            .collect()
    }

    /// The axis-aligned bounding box of the vertices.
    ///
    /// Returns `None` for a mesh without vertices.
    #[must_use]
    pub fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| &v.point))
    }

    /// Return true if no half-edge lies on the boundary.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.half_edges.iter().all(|h| !h.is_boundary())
    }

    /// Return true if all neighboring faces share the same orientation.
    ///
    /// Equivalent: every interior edge is traversed in opposite directions
    /// by its two half-edges.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.half_edges.iter().all(|half_edge| {
            half_edge
                .twin
                .map_or(true, |twin| self.half_edges[twin].origin != half_edge.origin)
        })
    }

    /// Check a pair of edge-adjacent faces for consistent orientation.
    ///
    /// Returns false if the faces do not share an edge.
    #[must_use]
    pub fn is_consistent_faces(&self, source: usize, target: usize) -> bool {
        for id in self.face_half_edges(source) {
            let half_edge = &self.half_edges[id];

            if let Some(twin) = half_edge.twin {
                let twin = &self.half_edges[twin];

                if twin.face == target {
                    return twin.origin != half_edge.origin;
                }
            }
        }

        false
    }

    /// Partition the faces into edge-connected components.
    ///
    /// Each component is discovered by a breadth-first sweep over face
    /// adjacency, in input iteration order.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components = Vec::new();
        let mut visited = vec![false; self.faces.len()];

        for seed in 0..self.faces.len() {
            if visited[seed] {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::from([seed]);

            while let Some(current) = queue.pop_front() {
                if visited[current] {
                    continue;
                }

                visited[current] = true;
                component.push(current);

                for neighbor in self.face_neighbors(current) {
                    if !visited[neighbor] {
                        queue.push_back(neighbor);
                    }
                }
            }

            components.push(component);
        }

        components
    }

    /// The outgoing half-edges around a vertex, in fan order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IsolatedVertex`] if the vertex has no
    /// incident half-edge and [`TopologyError::BoundaryVertex`] if the fan
    /// crosses an open boundary; fans are only defined on closed meshes.
    pub fn vertex_outgoing_half_edges(&self, index: usize) -> Result<Vec<usize>, TopologyError> {
        let start = self.vertices[index]
            .half_edge
            .ok_or(TopologyError::IsolatedVertex { vertex: index })?;

        let mut half_edges = Vec::new();
        let mut current = start;

        loop {
            half_edges.push(current);

            let prev = self.half_edges[current].prev;
            current = self.half_edges[prev]
                .twin
                .ok_or(TopologyError::BoundaryVertex { vertex: index })?;

            if current == start {
                break;
            }
        }

        Ok(half_edges)
    }

    /// The incoming half-edges around a vertex, in fan order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::vertex_outgoing_half_edges`].
    pub fn vertex_incoming_half_edges(&self, index: usize) -> Result<Vec<usize>, TopologyError> {
        Ok(self
            .vertex_outgoing_half_edges(index)?
            .iter()
            .map(|&id| self.half_edges[id].prev)
            .collect())
    }

    /// The faces sharing a vertex, in fan order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::vertex_outgoing_half_edges`].
    pub fn vertex_faces(&self, index: usize) -> Result<Vec<usize>, TopologyError> {
        Ok(self
            .vertex_outgoing_half_edges(index)?
            .iter()
            .map(|&id| self.half_edges[id].face)
            .collect())
    }
}

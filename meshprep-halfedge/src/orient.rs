//! Orientation repair: make each component's face windings consistent.

use tracing::debug;

use crate::mesh::HalfEdgeMesh;

impl HalfEdgeMesh {
    /// Orient the mesh so the faces of each component are consistent.
    ///
    /// Faces are visited depth-first per component; whenever a neighbor
    /// traverses a shared edge in the same direction as the current face
    /// it is flipped in place. Which faces end up flipped depends on the
    /// sweep order; the guarantee is only that every component leaves
    /// consistent. Components are not oriented relative to each other.
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
    /// buffer.push_face(vec![2, 1, 3], None); // reversed winding
    /// buffer.push_face(vec![0, 3, 2], None);
    ///
    /// let mut mesh = HalfEdgeMesh::from_source(&buffer).unwrap();
    /// assert!(!mesh.is_consistent());
    ///
    /// mesh.orient();
    /// assert!(mesh.is_consistent());
    /// ```
    pub fn orient(&mut self) {
        if self.is_consistent() {
            return;
        }

        let mut visited = vec![false; self.face_count()];
        let mut flipped = 0_usize;

        for seed in 0..self.face_count() {
            if visited[seed] {
                continue;
            }

            let mut stack = vec![seed];

            while let Some(current) = stack.pop() {
                if visited[current] {
                    continue;
                }

                visited[current] = true;

                for neighbor in self.face_neighbors(current) {
                    if self.is_consistent_faces(current, neighbor) {
                        stack.push(neighbor);
                    } else {
                        self.flip_face(neighbor);
                        flipped += 1;
                    }
                }
            }
        }

        debug!(flipped, "oriented mesh components");
    }

    /// Reverse the winding of a face.
    ///
    /// Every half-edge in the face cycle takes the origin of its successor
    /// and swaps its `next`/`prev` references; twins and the face
    /// assignment are untouched, so adjacency survives the flip.
    pub fn flip_face(&mut self, index: usize) {
        let cycle = self.face_half_edges(index);

        let origins: Vec<usize> = cycle
            .iter()
            .map(|&id| self.half_edges[self.half_edges[id].next].origin)
            .collect();

        for (&id, &origin) in cycle.iter().zip(&origins) {
            let half_edge = &mut self.half_edges[id];
            half_edge.origin = origin;
            std::mem::swap(&mut half_edge.next, &mut half_edge.prev);
            self.vertices[origin].half_edge = Some(id);
        }
    }
}

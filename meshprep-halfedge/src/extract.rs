//! Submesh extraction, merge, and rigid translation.

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use meshprep_geometry::Vector3;

use crate::elements::{Face, HalfEdge, Vertex};
use crate::mesh::HalfEdgeMesh;

impl HalfEdgeMesh {
    /// Copy the listed faces into a new mesh.
    ///
    /// Vertices, half-edges, and patches are remapped to dense indices in
    /// order of first encounter, and every reference is rewritten. A
    /// half-edge whose twin is not part of the selection becomes a
    /// boundary, so extracting an open patch from a closed mesh yields an
    /// open mesh. Faces without a patch stay without one.
    #[must_use]
    pub fn extract(&self, faces: &[usize]) -> Self {
        let mut mesh = Self::default();
        let mut vertex_map: HashMap<usize, usize> = HashMap::new();
        let mut patch_map: HashMap<usize, usize> = HashMap::new();
        let mut half_edge_map: HashMap<usize, usize> =
            HashMap::with_capacity(faces.len() * 3);

        for (new_face, &old_face) in faces.iter().enumerate() {
            let cycle = self.face_half_edges(old_face);
            let degree = cycle.len();
            let base = mesh.half_edges.len();

            let patch = match self.faces[old_face].patch {
                Some(old) => match patch_map.get(&old) {
                    Some(&new) => Some(new),
                    None => {
                        let new = mesh.patches.len();
                        mesh.patches.push(self.patches[old].clone());
                        patch_map.insert(old, new);
                        Some(new)
                    }
                },
                None => None,
            };
            mesh.faces.push(Face::new(base, patch));

            for (j, &old_id) in cycle.iter().enumerate() {
                let old = &self.half_edges[old_id];

                let origin = match vertex_map.get(&old.origin) {
                    Some(&new) => new,
                    None => {
                        let new = mesh.vertices.len();
                        mesh.vertices.push(Vertex::new(self.vertices[old.origin].point));
                        vertex_map.insert(old.origin, new);
                        new
                    }
                };

                let id = base + j;
                half_edge_map.insert(old_id, id);
                mesh.half_edges.push(HalfEdge {
                    origin,
                    face: new_face,
                    next: base + (j + 1) % degree,
                    prev: base + (j + degree - 1) % degree,
                    twin: None,
                    is_feature: old.is_feature,
                });
                mesh.vertices[origin].half_edge = Some(id);
            }
        }

        // Reconnect the twins that survived the selection; the rest stay
        // boundary.
        for (&old_id, &new_id) in &half_edge_map {
            if let Some(old_twin) = self.half_edges[old_id].twin {
                if let Some(&new_twin) = half_edge_map.get(&old_twin) {
                    mesh.half_edges[new_id].twin = Some(new_twin);
                }
            }
        }

        debug!(
            faces = mesh.faces.len(),
            vertices = mesh.vertices.len(),
            "extracted submesh"
        );

        mesh
    }

    /// Copy the faces of the named patches into a new mesh.
    #[must_use]
    pub fn extract_patches<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let selected: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();

        let keep: Vec<bool> = self
            .patches
            .iter()
            .map(|patch| selected.contains(patch.name.as_str()))
            .collect();

        let faces: Vec<usize> = self
            .faces
            .iter()
            .enumerate()
            .filter(|(_, face)| face.patch.is_some_and(|p| keep[p]))
            .map(|(i, _)| i)
            .collect();

        self.extract(&faces)
    }

    /// Append another mesh, consuming it.
    ///
    /// All of `other`'s indices are shifted by the receiver's current
    /// sizes; the topology inside each original mesh is untouched and no
    /// coincident vertices are welded. Patches are appended as-is, so
    /// duplicated names can be collapsed afterwards with
    /// [`Self::remove_duplicate_patches`].
    pub fn merge(&mut self, other: Self) {
        let vertex_offset = self.vertices.len();
        let face_offset = self.faces.len();
        let half_edge_offset = self.half_edges.len();
        let patch_offset = self.patches.len();

        for mut vertex in other.vertices {
            vertex.half_edge = vertex.half_edge.map(|id| id + half_edge_offset);
            self.vertices.push(vertex);
        }

        for mut face in other.faces {
            face.half_edge += half_edge_offset;
            face.patch = face.patch.map(|patch| patch + patch_offset);
            self.faces.push(face);
        }

        for mut half_edge in other.half_edges {
            half_edge.origin += vertex_offset;
            half_edge.face += face_offset;
            half_edge.next += half_edge_offset;
            half_edge.prev += half_edge_offset;
            half_edge.twin = half_edge.twin.map(|twin| twin + half_edge_offset);
            self.half_edges.push(half_edge);
        }

        self.patches.extend(other.patches);
    }

    /// Translate every vertex by `offset`. Topology is unchanged.
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.point += *offset;
        }
    }

    /// Collapse patches that share a name onto the first occurrence.
    ///
    /// Face assignments are rewritten accordingly. Useful after merging
    /// meshes that carry the same patch layout.
    pub fn remove_duplicate_patches(&mut self) {
        let mut keep = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut remap = Vec::with_capacity(self.patches.len());

        for patch in &self.patches {
            let id = match index.get(patch.name.as_str()) {
                Some(&id) => id,
                None => {
                    let id = keep.len();
                    keep.push(patch.clone());
                    index.insert(patch.name.clone(), id);
                    id
                }
            };
            remap.push(id);
        }

        for face in &mut self.faces {
            face.patch = face.patch.map(|patch| remap[patch]);
        }

        self.patches = keep;
    }
}

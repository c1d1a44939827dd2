//! Feature (crease) edge detection and bookkeeping.

use std::collections::VecDeque;

use tracing::debug;

use crate::mesh::HalfEdgeMesh;

impl HalfEdgeMesh {
    /// Mark the half-edges whose dihedral angle exceeds `threshold`.
    ///
    /// For every interior half-edge not already marked, the angle between
    /// its face normal and its twin's face normal is compared against the
    /// threshold (in radians); above it, both half-edges of the edge are
    /// flagged. Existing flags are preserved, so repeated calls with
    /// decreasing thresholds accumulate.
    pub fn compute_feature_edges(&mut self, threshold: f64) {
        let normals = self.face_normals();
        let mut marked = 0_usize;

        for id in 0..self.half_edges.len() {
            let half_edge = &self.half_edges[id];

            if half_edge.is_feature {
                continue;
            }

            let Some(twin) = half_edge.twin else {
                continue;
            };

            let angle = normals[half_edge.face].angle(&normals[self.half_edges[twin].face]);

            if angle > threshold {
                self.half_edges[id].is_feature = true;
                self.half_edges[twin].is_feature = true;
                marked += 1;
            }
        }

        debug!(marked, threshold, "marked feature edge pairs");
    }

    /// Manually set or clear the feature flag of one half-edge.
    ///
    /// The twin is left untouched; mirror the flag explicitly when the
    /// edge as a whole should change.
    pub fn set_feature_edge(&mut self, index: usize, is_feature: bool) {
        self.half_edges[index].is_feature = is_feature;
    }

    /// Clear every feature flag.
    pub fn clear_feature_edges(&mut self) {
        for half_edge in &mut self.half_edges {
            half_edge.is_feature = false;
        }
    }

    /// The indices of all flagged half-edges.
    ///
    /// Both half-edges of a feature pair are reported.
    #[must_use]
    pub fn feature_edges(&self) -> Vec<usize> {
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(_, half_edge)| half_edge.is_feature)
            .map(|(id, _)| id)
            .collect()
    }

    /// Partition the faces into regions bounded by feature angles.
    ///
    /// Like [`Self::components`], but the breadth-first sweep refuses to
    /// cross an edge whose adjacent face normals differ by `threshold` or
    /// more. A cube splits into its six sides; a smooth sphere stays one
    /// region.
    #[must_use]
    pub fn split_by_features(&self, threshold: f64) -> Vec<Vec<usize>> {
        let normals = self.face_normals();
        let mut regions = Vec::new();
        let mut visited = vec![false; self.faces.len()];

        for seed in 0..self.faces.len() {
            if visited[seed] {
                continue;
            }

            let mut region = Vec::new();
            let mut queue = VecDeque::from([seed]);

            while let Some(current) = queue.pop_front() {
                if visited[current] {
                    continue;
                }

                visited[current] = true;
                region.push(current);

                for neighbor in self.face_neighbors(current) {
                    if !visited[neighbor] && normals[current].angle(&normals[neighbor]) < threshold
                    {
                        queue.push_back(neighbor);
                    }
                }
            }

            regions.push(region);
        }

        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MeshBuffer;
    use meshprep_geometry::Point3;

    fn cube_mesh() -> HalfEdgeMesh {
        let mut buffer = MeshBuffer::new();

        for point in [
            Point3::new(-0.5, -0.5, -0.5),
            Point3::new(0.5, -0.5, -0.5),
            Point3::new(0.5, 0.5, -0.5),
            Point3::new(-0.5, 0.5, -0.5),
            Point3::new(-0.5, -0.5, 0.5),
            Point3::new(0.5, -0.5, 0.5),
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(-0.5, 0.5, 0.5),
        ] {
            buffer.push_vertex(point);
        }

        for face in [
            [0, 1, 2],
            [0, 2, 3],
            [4, 6, 5],
            [4, 7, 6],
            [0, 4, 5],
            [0, 5, 1],
            [2, 6, 7],
            [2, 7, 3],
            [0, 3, 7],
            [0, 7, 4],
            [1, 5, 6],
            [1, 6, 2],
        ] {
            buffer.push_face(face.to_vec(), None);
        }

        HalfEdgeMesh::from_source(&buffer).unwrap()
    }

    #[test]
    fn cube_has_twelve_feature_edges() {
        let mut mesh = cube_mesh();
        let threshold = 30.0_f64.to_radians();

        mesh.compute_feature_edges(threshold);

        // Each of the cube's 12 geometric edges is covered by a pair of
        // half-edges; the 12 face-diagonal pairs are coplanar.
        assert_eq!(mesh.feature_edges().len(), 24);
    }

    #[test]
    fn feature_flags_mirror_twins() {
        let mut mesh = cube_mesh();
        mesh.compute_feature_edges(30.0_f64.to_radians());

        for &id in &mesh.feature_edges() {
            let twin = mesh.half_edge(id).twin.unwrap();
            assert!(mesh.half_edge(twin).is_feature);
        }
    }

    #[test]
    fn existing_flags_are_preserved() {
        let mut mesh = cube_mesh();

        // A coplanar diagonal would never qualify by angle.
        let diagonal = mesh
            .face_half_edges(0)
            .into_iter()
            .find(|&id| {
                let twin = mesh.half_edge(id).twin.unwrap();
                mesh.half_edge(twin).face == 1
            })
            .unwrap();
        mesh.set_feature_edge(diagonal, true);

        mesh.compute_feature_edges(30.0_f64.to_radians());

        assert!(mesh.half_edge(diagonal).is_feature);
        assert_eq!(mesh.feature_edges().len(), 25);
    }

    #[test]
    fn high_threshold_marks_nothing() {
        let mut mesh = cube_mesh();
        mesh.compute_feature_edges(std::f64::consts::PI);

        assert!(mesh.feature_edges().is_empty());
    }

    #[test]
    fn clear_feature_edges_resets() {
        let mut mesh = cube_mesh();
        mesh.compute_feature_edges(30.0_f64.to_radians());
        assert!(!mesh.feature_edges().is_empty());

        mesh.clear_feature_edges();
        assert!(mesh.feature_edges().is_empty());
    }

    #[test]
    fn set_feature_edge_is_one_sided() {
        let mut mesh = cube_mesh();
        mesh.set_feature_edge(0, true);

        let twin = mesh.half_edge(0).twin.unwrap();
        assert!(mesh.half_edge(0).is_feature);
        assert!(!mesh.half_edge(twin).is_feature);

        mesh.set_feature_edge(0, false);
        assert!(mesh.feature_edges().is_empty());
    }

    #[test]
    fn split_cube_into_sides() {
        let mesh = cube_mesh();
        let regions = mesh.split_by_features(30.0_f64.to_radians());

        assert_eq!(regions.len(), 6);
        for region in &regions {
            assert_eq!(region.len(), 2);
        }
    }

    #[test]
    fn split_with_wide_threshold_keeps_one_region() {
        let mesh = cube_mesh();
        let regions = mesh.split_by_features(std::f64::consts::PI);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 12);
    }
}

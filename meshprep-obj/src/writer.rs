//! Wavefront OBJ emission.

use std::io::{BufWriter, Write};

use meshprep_geometry::Point3;
use meshprep_halfedge::MeshSink;

use crate::error::ObjError;

/// A [`MeshSink`] that emits Wavefront OBJ.
///
/// Vertices are written first, then the faces without a patch, then each
/// patch as a `g` record followed by its faces. Face indices are 1-based
/// as the format requires.
///
/// # Example
///
/// ```
/// use meshprep_geometry::Point3;
/// use meshprep_halfedge::MeshSink;
/// use meshprep_obj::ObjWriter;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2]];
///
/// let mut writer = ObjWriter::new(Vec::new());
/// writer.write_mesh(&vertices, &faces, &[None], &[]).unwrap();
///
/// let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
/// assert_eq!(text, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
/// ```
#[derive(Debug)]
pub struct ObjWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> ObjWriter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Flush and hand back the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while flushing buffered output.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|error| error.into_error())
    }

    fn write_face(&mut self, face: &[usize]) -> std::io::Result<()> {
        self.writer.write_all(b"f")?;

        for &vertex in face {
            write!(self.writer, " {}", vertex + 1)?;
        }

        self.writer.write_all(b"\n")
    }
}

impl<W: Write> MeshSink for ObjWriter<W> {
    type Error = ObjError;

    fn write_mesh(
        &mut self,
        vertices: &[Point3<f64>],
        faces: &[Vec<usize>],
        face_patches: &[Option<usize>],
        patches: &[String],
    ) -> Result<(), Self::Error> {
        for vertex in vertices {
            writeln!(self.writer, "v {} {} {}", vertex.x, vertex.y, vertex.z)?;
        }

        // Group the faces by patch, keeping input order within each group.
        let mut patch_faces: Vec<Vec<usize>> = vec![Vec::new(); patches.len()];
        let mut unpatched = Vec::new();

        for (face, patch) in face_patches.iter().enumerate() {
            match patch {
                Some(patch) => patch_faces[*patch].push(face),
                None => unpatched.push(face),
            }
        }

        for face in unpatched {
            self.write_face(&faces[face])?;
        }

        for (patch, name) in patches.iter().enumerate() {
            writeln!(self.writer, "g {name}")?;

            for &face in &patch_faces[patch] {
                self.write_face(&faces[face])?;
            }
        }

        self.writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_to_string(
        vertices: &[Point3<f64>],
        faces: &[Vec<usize>],
        face_patches: &[Option<usize>],
        patches: &[String],
    ) -> String {
        let mut writer = ObjWriter::new(Vec::new());
        writer
            .write_mesh(vertices, faces, face_patches, patches)
            .unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn writes_faces_one_based() {
        let text = write_to_string(
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            &[vec![0, 1, 2]],
            &[None],
            &[],
        );

        assert_eq!(text, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    }

    #[test]
    fn groups_faces_under_their_patch() {
        let text = write_to_string(
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            &[vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3]],
            &[Some(1), None, Some(0)],
            &["bottom".to_string(), "lid".to_string()],
        );

        assert_eq!(
            text,
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\n\
             f 1 2 4\n\
             g bottom\nf 1 3 4\n\
             g lid\nf 1 2 3\n"
        );
    }

    #[test]
    fn empty_patches_still_emit_group_records() {
        let text = write_to_string(
            &[],
            &[],
            &[],
            &["inlet".to_string(), "outlet".to_string()],
        );

        assert_eq!(text, "g inlet\ng outlet\n");
    }

    #[test]
    fn fractional_coordinates_round_trip() {
        let text = write_to_string(
            &[Point3::new(-0.5, 0.25, 1e-7)],
            &[],
            &[],
            &[],
        );

        assert_eq!(text, "v -0.5 0.25 0.0000001\n");
    }
}

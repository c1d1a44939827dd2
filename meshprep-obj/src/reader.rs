//! Wavefront OBJ parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use meshprep_geometry::Point3;
use meshprep_halfedge::MeshSource;

use crate::error::{ObjError, ObjResult};
use crate::is_gzip_path;

/// A parsed OBJ file, usable as a [`MeshSource`].
///
/// Only the records relevant to surface meshes are interpreted: `v`
/// (vertex position), `f` (face), and `g` (patch name). Texture and
/// normal indices in face fields (`1/2/3`) are ignored; everything else
/// is skipped. Faces are stored flat with per-face offsets, so face
/// lookup hands out slices without allocation.
///
/// # Example
///
/// ```
/// use meshprep_halfedge::MeshSource;
/// use meshprep_obj::ObjReader;
///
/// let data = "\
/// v 0.0 0.0 0.0
/// v 1.0 0.0 0.0
/// v 0.0 1.0 0.0
/// g floor
/// f 1 2 3
/// ";
///
/// let source = ObjReader::read(data.as_bytes()).unwrap();
/// assert_eq!(source.vertex_count(), 3);
/// assert_eq!(source.face_count(), 1);
/// assert_eq!(source.face(0), &[0, 1, 2]);
/// assert_eq!(source.patch(0), "floor");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjReader {
    vertices: Vec<Point3<f64>>,
    faces: Vec<usize>,
    face_offsets: Vec<usize>,
    face_patches: Vec<Option<usize>>,
    patches: Vec<String>,
}

impl ObjReader {
    /// Parse an OBJ document from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`ObjError::InvalidVertex`] or [`ObjError::InvalidFace`]
    /// with the 1-based line number on malformed records, and
    /// [`ObjError::Io`] if the stream fails.
    pub fn read<R: BufRead>(reader: R) -> ObjResult<Self> {
        let mut parsed = Self::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let record = line.trim();
            let number = index + 1;

            let (prefix, rest) = match record.split_once(char::is_whitespace) {
                Some((prefix, rest)) => (prefix, rest),
                None => (record, ""),
            };

            match prefix {
                "v" => parsed.parse_vertex(rest, number)?,
                "f" => parsed.parse_face(rest, number)?,
                "g" => parsed.parse_group(rest),
                _ => {}
            }
        }

        Ok(parsed)
    }

    /// Parse an OBJ file from a path, transparently decompressing `.gz`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::read`], plus file-open failures.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ObjResult<Self> {
        let file = File::open(path.as_ref())?;

        if is_gzip_path(path.as_ref()) {
            Self::read(BufReader::new(GzDecoder::new(file)))
        } else {
            Self::read(BufReader::new(file))
        }
    }

    fn parse_vertex(&mut self, rest: &str, line: usize) -> ObjResult<()> {
        let mut values = [0.0; 3];
        let mut count = 0;

        for field in rest.split_whitespace() {
            if count == 3 {
                return Err(ObjError::InvalidVertex { line });
            }

            values[count] = field
                .parse()
                .map_err(|_| ObjError::InvalidVertex { line })?;
            count += 1;
        }

        if count != 3 {
            return Err(ObjError::InvalidVertex { line });
        }

        self.vertices
            .push(Point3::new(values[0], values[1], values[2]));

        Ok(())
    }

    fn parse_face(&mut self, rest: &str, line: usize) -> ObjResult<()> {
        let offset = self.faces.len();
        let mut degree = 0;

        for field in rest.split_whitespace() {
            // OBJ faces may carry `vertex/texture/normal` triplets; only
            // the vertex index matters here.
            let field = field.split('/').next().unwrap_or(field);

            let index: usize = field
                .parse()
                .map_err(|_| ObjError::InvalidFace { line })?;

            if index == 0 {
                return Err(ObjError::InvalidFace { line });
            }

            self.faces.push(index - 1);
            degree += 1;
        }

        if degree < 3 {
            self.faces.truncate(offset);
            return Err(ObjError::InvalidFace { line });
        }

        self.face_offsets.push(offset);
        self.face_patches
            .push(self.patches.len().checked_sub(1));

        Ok(())
    }

    fn parse_group(&mut self, rest: &str) {
        self.patches.push(rest.trim().to_string());
    }
}

impl MeshSource for ObjReader {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.face_offsets.len()
    }

    fn face_edge_count(&self) -> usize {
        self.faces.len()
    }

    fn patch_count(&self) -> usize {
        self.patches.len()
    }

    fn vertex(&self, index: usize) -> Point3<f64> {
        self.vertices[index]
    }

    fn face(&self, index: usize) -> &[usize] {
        let start = self.face_offsets[index];

        match self.face_offsets.get(index + 1) {
            Some(&end) => &self.faces[start..end],
            None => &self.faces[start..],
        }
    }

    fn face_patch(&self, index: usize) -> Option<usize> {
        self.face_patches[index]
    }

    fn patch(&self, index: usize) -> &str {
        &self.patches[index]
    }
}

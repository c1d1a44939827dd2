//! Wavefront OBJ I/O for meshprep.
//!
//! This crate connects the half-edge kernel's source/sink contract to the
//! OBJ file format:
//!
//! - [`ObjReader`] - parses `v`/`f`/`g` records into a
//!   [`meshprep_halfedge::MeshSource`]
//! - [`ObjWriter`] - a [`meshprep_halfedge::MeshSink`] emitting OBJ
//! - [`load_obj`] / [`save_obj`] - path-based conveniences with
//!   transparent gzip (`.obj.gz`) handling
//!
//! # Example
//!
//! ```no_run
//! use meshprep_halfedge::HalfEdgeMesh;
//! use meshprep_obj::{load_obj, save_obj};
//!
//! let source = load_obj("car.obj.gz").unwrap();
//! let mut mesh = HalfEdgeMesh::from_source(&source).unwrap();
//!
//! mesh.orient();
//! save_obj(&mesh, "car_oriented.obj").unwrap();
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod reader;
mod writer;

pub use error::{ObjError, ObjResult};
pub use reader::ObjReader;
pub use writer::ObjWriter;

use std::fs::File;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use meshprep_halfedge::HalfEdgeMesh;

/// Whether a path names a gzip-compressed file.
fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("gz"))
}

/// Parse an OBJ file from a path, transparently decompressing `.gz`.
///
/// # Errors
///
/// Returns an [`ObjError`] if the file cannot be opened or parsed.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<ObjReader> {
    ObjReader::from_path(path)
}

/// Write a half-edge mesh to an OBJ file, gzip-compressing when the path
/// ends in `.gz`.
///
/// # Errors
///
/// Returns an [`ObjError`] if the file cannot be created or written.
pub fn save_obj<P: AsRef<Path>>(mesh: &HalfEdgeMesh, path: P) -> ObjResult<()> {
    let file = File::create(path.as_ref())?;

    if is_gzip_path(path.as_ref()) {
        let mut writer = ObjWriter::new(GzEncoder::new(file, Compression::default()));
        mesh.write_to(&mut writer)?;
        writer.into_inner()?.finish()?;
    } else {
        let mut writer = ObjWriter::new(file);
        mesh.write_to(&mut writer)?;
        writer.into_inner()?;
    }

    Ok(())
}

//! # Partscan Mesh
//!
//! Triangle-soup mesh loading for the partscan analysis pipeline.
//! Parses uploaded STL bytes into flat position/normal buffers.
//!
//! ## Architecture
//!
//! ```text
//! upload bytes + file name → partscan-mesh (TriangleMesh) → partscan-analysis
//! ```
//!
//! The loader is the only fallible stage of the pipeline: it either
//! returns a fully populated [`TriangleMesh`] or signals a [`MeshError`].
//! Degenerate meshes (zero triangles) load successfully; downstream
//! stages tolerate them with zero-guards.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use partscan_mesh::load_mesh;
//!
//! let mesh = load_mesh(&bytes, "bracket.stl")?;
//! let (min, max) = mesh.bounding_box();
//! ```

pub mod error;
pub mod mesh;
pub mod stl;

pub use error::MeshError;
pub use mesh::TriangleMesh;

/// Loads an uploaded mesh, selecting a parser by file extension.
///
/// The file name is used only for format dispatch; only `stl`
/// (case-insensitive) is recognized. The bytes are auto-detected as
/// binary or ASCII STL.
///
/// # Errors
///
/// [`MeshError::UnsupportedFormat`] for an unrecognized extension,
/// [`MeshError::ParseFailure`] when the bytes do not conform to the
/// detected layout.
pub fn load_mesh(data: &[u8], file_name: &str) -> Result<TriangleMesh, MeshError> {
    let extension = file_name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    if extension != "stl" {
        return Err(MeshError::unsupported_format(extension));
    }
    stl::parse_stl(data)
}

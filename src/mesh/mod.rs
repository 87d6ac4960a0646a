//! Indexed meshes and the normalization steps applied before decomposition.

pub use self::indexed_mesh::IndexedMesh;
pub use self::orientation::{correct_orientation, signed_volume, Orientation};
pub use self::weld::{approx_eq, weld_vertices, WELD_EPSILON};

mod indexed_mesh;
mod orientation;
mod weld;

mod gmsh;
#[cfg(feature = "serde")]
mod ron;

pub use gmsh::{GmshExport, GmshImport};
#[cfg(feature = "serde")]
pub use ron::{ConvertToSerializable, RONExport, RONImport};

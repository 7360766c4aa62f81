//! Traits

mod io;

#[cfg(feature = "serde")]
pub use io::{ConvertToSerializable, RONExport, RONImport};
pub use io::{GmshExport, GmshImport};

//! Input and output
mod gmsh;
#[cfg(feature = "serde")]
mod ron;

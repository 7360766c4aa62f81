//! Gmsh I/O
use crate::error::Result;
use std::fs;

pub trait GmshExport {
    //! Grid export for Gmsh

    /// Generate the Gmsh string for a grid
    fn to_gmsh_string(&self) -> String;

    /// Export as Gmsh
    fn export_as_gmsh(&self, filename: &str) -> Result<()> {
        let gmsh_s = self.to_gmsh_string();
        fs::write(filename, gmsh_s)?;
        Ok(())
    }
}

pub trait GmshImport: Sized {
    //! Grid import for Gmsh

    /// Create a grid from a Gmsh string
    fn from_gmsh_string(s: &str) -> Result<Self>;

    /// Import from a Gmsh file
    fn import_from_gmsh(filename: &str) -> Result<Self> {
        let content = fs::read_to_string(filename)?;
        Self::from_gmsh_string(&content)
    }
}

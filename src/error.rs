//! Errors

use std::fmt;
use thiserror::Error;

/// The width and height of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Shape {
    /// Create a new shape
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of entries in a matrix of this shape, or `None` if it does not fit in a `usize`
    pub fn size(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Errors raised by matrices, grids and grid I/O
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A coordinate lies outside the matrix.
    #[error("entry ({x}, {y}) is out of range for a matrix with width={width}, height={height}")]
    OutOfRange {
        /// Column that was requested.
        x: usize,
        /// Row that was requested.
        y: usize,
        /// Width of the matrix.
        width: usize,
        /// Height of the matrix.
        height: usize,
    },

    /// The inner dimensions of a product do not agree.
    #[error("cannot multiply a {left} matrix by a {right} matrix")]
    DimensionMismatch {
        /// Shape of the left operand.
        left: Shape,
        /// Shape of the right operand.
        right: Shape,
    },

    /// A triangle refers to a vertex that does not exist.
    #[error(
        "corner {corner} of triangle {triangle} refers to vertex {vertex}, but the grid has {vertex_count} vertices"
    )]
    InvalidMeshReference {
        /// Triangle (column of the triangle matrix).
        triangle: usize,
        /// Corner of the triangle (row of the triangle matrix).
        corner: usize,
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the grid.
        vertex_count: usize,
    },

    /// A grid matrix has the wrong number of rows.
    #[error("{name} matrix must have {expected_height} rows, found a {found} matrix")]
    InvalidMeshShape {
        /// Which matrix is malformed.
        name: &'static str,
        /// Required number of rows.
        expected_height: usize,
        /// Shape that was supplied.
        found: Shape,
    },

    /// The data supplied for a matrix has the wrong length.
    #[error("{len} entries do not fill a {shape} matrix")]
    DataLength {
        /// Requested shape.
        shape: Shape,
        /// Length of the supplied data.
        len: usize,
    },

    /// A square grid needs at least one cell in each direction.
    #[error("square grid resolution must be at least 1, got {0}")]
    InvalidResolution(usize),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A Gmsh file could not be interpreted.
    #[error("invalid gmsh data: {0}")]
    Gmsh(String),

    /// A RON string could not be converted.
    #[error("invalid RON data: {0}")]
    Ron(String),
}

/// Result type used throughout this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::new(3, 2).to_string(), "3 x 2");
        assert_eq!(Shape::new(3, 2).size(), Some(6));
        assert_eq!(Shape::new(usize::MAX, 2).size(), None);
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let e = Error::DimensionMismatch {
            left: Shape::new(3, 2),
            right: Shape::new(2, 2),
        };
        assert_eq!(
            e.to_string(),
            "cannot multiply a 3 x 2 matrix by a 2 x 2 matrix"
        );
    }

    #[test]
    fn test_data_length_message() {
        let e = Error::DataLength {
            shape: Shape::new(2, 2),
            len: 3,
        };
        assert_eq!(e.to_string(), "3 entries do not fill a 2 x 2 matrix");
    }
}

//! Triangle grids
#[cfg(feature = "serde")]
use crate::{matrix::SerializableMatrix, traits::ConvertToSerializable};
use crate::{
    error::{Error, Result},
    matrix::Matrix,
    shapes::unit_square,
    types::RealScalar,
};
use log::{debug, warn};
use num::Float;
use std::fmt;

/// A grid of triangles
///
/// The vertices are stored as a matrix with one column per vertex: row 0 holds the x coordinates
/// and row 1 the y coordinates. The triangles are stored as a matrix with one column per triangle
/// whose three rows are the indices of the triangle's vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: RealScalar = f64> {
    vertices: Matrix<T>,
    triangles: Matrix<usize>,
}

impl<T: RealScalar> Grid<T> {
    /// Create a grid from its vertices and triangles
    ///
    /// Fails if either matrix has the wrong number of rows, or if any triangle refers to a vertex
    /// that is not a column of `vertices`.
    pub fn new(vertices: Matrix<T>, triangles: Matrix<usize>) -> Result<Self> {
        if vertices.height() != 2 {
            warn!("Rejecting vertex matrix of shape {}", vertices.shape());
            return Err(Error::InvalidMeshShape {
                name: "vertex",
                expected_height: 2,
                found: vertices.shape(),
            });
        }
        if triangles.height() != 3 {
            warn!("Rejecting triangle matrix of shape {}", triangles.shape());
            return Err(Error::InvalidMeshShape {
                name: "triangle",
                expected_height: 3,
                found: triangles.shape(),
            });
        }
        for t in 0..triangles.width() {
            for corner in 0..3 {
                let vertex = triangles.get(t, corner)?;
                if vertices.get(vertex, 0).is_err() {
                    warn!("Triangle {t} refers to missing vertex {vertex}");
                    return Err(Error::InvalidMeshReference {
                        triangle: t,
                        corner,
                        vertex,
                        vertex_count: vertices.width(),
                    });
                }
            }
        }
        debug!(
            "Created grid with {} vertices and {} triangles",
            vertices.width(),
            triangles.width()
        );
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.width()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.width()
    }

    /// The vertex coordinates, one column per vertex
    pub fn vertices(&self) -> &Matrix<T> {
        &self.vertices
    }

    /// The vertex indices of each triangle, one column per triangle
    pub fn triangles(&self) -> &Matrix<usize> {
        &self.triangles
    }

    /// The coordinates of a vertex
    pub fn vertex(&self, index: usize) -> Result<[T; 2]> {
        Ok([self.vertices.get(index, 0)?, self.vertices.get(index, 1)?])
    }

    /// The vertex indices of a triangle
    pub fn triangle(&self, index: usize) -> Result<[usize; 3]> {
        Ok([
            self.triangles.get(index, 0)?,
            self.triangles.get(index, 1)?,
            self.triangles.get(index, 2)?,
        ])
    }

    /// Iterate over the vertex indices of every triangle
    pub fn triangle_iter(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let n = self.triangle_count();
        let data = self.triangles.data();
        (0..n).map(move |t| [data[t], data[t + n], data[t + 2 * n]])
    }

    /// The signed area of a triangle
    ///
    /// The area is positive if the vertices are ordered anticlockwise.
    pub fn triangle_area(&self, index: usize) -> Result<T> {
        let [a, b, c] = self.triangle(index)?;
        let [ax, ay] = self.vertex(a)?;
        let [bx, by] = self.vertex(b)?;
        let [cx, cy] = self.vertex(c)?;
        let half = T::one() / (T::one() + T::one());
        Ok(half * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)))
    }

    /// The total area covered by the triangles
    pub fn area(&self) -> Result<T> {
        let mut total = T::zero();
        for t in 0..self.triangle_count() {
            total = total + Float::abs(self.triangle_area(t)?);
        }
        Ok(total)
    }

    /// Split the grid into its vertex and triangle matrices
    pub fn into_parts(self) -> (Matrix<T>, Matrix<usize>) {
        (self.vertices, self.triangles)
    }
}

impl Grid<f64> {
    /// Create a grid of the unit square with `n` cells in each direction
    ///
    /// See [`unit_square`].
    pub fn make_square(n: usize) -> Result<Self> {
        unit_square(n)
    }
}

impl<T: RealScalar + fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertices: {}", self.vertices)?;
        write!(f, "triangles: {}", self.triangles)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, Debug, serde::Deserialize)]
#[serde(bound = "T: serde::Serialize + serde::de::DeserializeOwned")]
/// Serde serializable grid
pub struct SerializableGrid<T: RealScalar> {
    vertices: SerializableMatrix<T>,
    triangles: SerializableMatrix<usize>,
}

#[cfg(feature = "serde")]
impl<T: RealScalar + serde::Serialize + serde::de::DeserializeOwned> ConvertToSerializable
    for Grid<T>
{
    type SerializableType = SerializableGrid<T>;
    fn to_serializable(&self) -> SerializableGrid<T> {
        SerializableGrid {
            vertices: self.vertices.to_serializable(),
            triangles: self.triangles.to_serializable(),
        }
    }
    fn from_serializable(s: SerializableGrid<T>) -> Result<Self> {
        Self::new(
            Matrix::from_serializable(s.vertices)?,
            Matrix::from_serializable(s.triangles)?,
        )
    }
}

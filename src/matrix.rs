//! Dense matrices

use crate::{
    error::{Error, Result, Shape},
    types::Scalar,
};
use itertools::Itertools;
use std::{fmt, ops::Mul};

/// A dense matrix
///
/// Entries are addressed by column `x` and row `y`, and stored contiguously one row after
/// another, so the entry `(x, y)` lives at position `x + y * width` of the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a new matrix filled with zeros
    ///
    /// A width or height of zero gives an empty matrix: it is valid, but every call to
    /// [`Matrix::get`] or [`Matrix::set`] on it fails.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows a `usize` or the buffer cannot be allocated.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::zero(); width * height],
        }
    }

    /// Create the `n` by `n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.data[i + i * n] = T::one();
        }
        m
    }

    /// Create a matrix from its entries, given row by row
    ///
    /// Fails if `data` does not hold exactly `width * height` entries, including when that
    /// product overflows.
    pub fn from_data(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        let shape = Shape::new(width, height);
        if shape.size() != Some(data.len()) {
            return Err(Error::DataLength {
                shape,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// The shape of this matrix
    pub fn shape(&self) -> Shape {
        Shape::new(self.width, self.height)
    }

    /// The entries of this matrix, row by row
    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }

    /// Get the entry in column `x` and row `y`
    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        Ok(self.data[self.offset(x, y)?])
    }

    /// Set the entry in column `x` and row `y`
    pub fn set(&mut self, x: usize, y: usize, val: T) -> Result<()> {
        let i = self.offset(x, y)?;
        self.data[i] = val;
        Ok(())
    }

    /// The entries of column `x`, from the first row to the last
    pub fn column(&self, x: usize) -> Result<Vec<T>> {
        (0..self.height).map(|y| self.get(x, y)).collect()
    }

    /// The entries of row `y`
    ///
    /// If `y` is out of range, the [`Error::OutOfRange`] returned reports column 0.
    pub fn row(&self, y: usize) -> Result<&[T]> {
        if y >= self.height {
            return Err(Error::OutOfRange {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&self.data[y * self.width..(y + 1) * self.width])
    }

    /// Compute the product `self * other`
    ///
    /// The width of `self` must equal the height of `other`. The result has the width of
    /// `other` and the height of `self`. Each entry is accumulated in increasing order of the
    /// inner index.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.width != other.height {
            return Err(Error::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut product = Matrix::new(other.width, self.height);
        for y in 0..self.height {
            for x in 0..other.width {
                let mut sum = T::zero();
                for z in 0..self.width {
                    sum = sum + self.data[z + y * self.width] * other.data[x + z * other.width];
                }
                product.data[x + y * other.width] = sum;
            }
        }
        Ok(product)
    }
}

impl<'a, T: Scalar> Mul<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &'a Matrix<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.shape())?;
        if self.width == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.width) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(bound = "T: serde::Serialize + serde::de::DeserializeOwned")]
/// Serde serializable matrix
pub struct SerializableMatrix<T: Scalar> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize + serde::de::DeserializeOwned> crate::traits::ConvertToSerializable
    for Matrix<T>
{
    type SerializableType = SerializableMatrix<T>;
    fn to_serializable(&self) -> SerializableMatrix<T> {
        SerializableMatrix {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }
    fn from_serializable(s: SerializableMatrix<T>) -> Result<Self> {
        Self::from_data(s.width, s.height, s.data)
    }
}

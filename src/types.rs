//! Types

use num::{Float, Num};
use std::fmt::Debug;

/// A numeric type that can be stored in a matrix
///
/// Any type with a zero, addition and multiplication qualifies; this covers both the floating
/// point coordinates and the integer vertex indices of a grid.
pub trait Scalar: Num + Copy + Debug {}

impl<T: Num + Copy + Debug> Scalar for T {}

/// A real scalar that can be used for grid coordinates
pub trait RealScalar: Scalar + Float {}

impl<T: Scalar + Float> RealScalar for T {}

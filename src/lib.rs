//! Generic dense matrices and regular triangle grids of the unit square
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod error;
pub mod grid;
mod io;
pub mod matrix;
pub mod shapes;
pub mod traits;
pub mod types;

pub use error::{Error, Result, Shape};
pub use grid::Grid;
pub use matrix::Matrix;

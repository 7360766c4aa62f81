//! Functions to create simple example grids

mod square;

pub use square::unit_square;

//! Unit square grids

use crate::{
    error::{Error, Result},
    grid::Grid,
    matrix::Matrix,
    types::RealScalar,
};
use log::debug;

/// Create a grid of the unit square
///
/// The unit square is the square with corners at (0,0), (1,0), (0,1) and (1,1). It is covered by
/// an `(n + 1)` by `(n + 1)` lattice of vertices: the point `(i / n, j / n)` is vertex
/// `i + j * (n + 1)`. Each of the `n * n` cells is split into two triangles along the diagonal
/// from its bottom left to its top right corner. Cell `(i, j)` gives triangle `2 * (i + j * n)`,
/// made of its bottom left, top left and top right corners, and triangle `2 * (i + j * n) + 1`,
/// made of its bottom left, bottom right and top right corners.
///
/// `n` must be at least 1.
pub fn unit_square<T: RealScalar>(n: usize) -> Result<Grid<T>> {
    if n == 0 {
        return Err(Error::InvalidResolution(n));
    }
    let dy = n + 1;
    let nf = T::from(n).ok_or(Error::InvalidResolution(n))?;

    let mut vertices = Matrix::new(dy * dy, 2);
    for j in 0..n + 1 {
        for i in 0..n + 1 {
            let index = i + j * dy;
            vertices.set(index, 0, lattice_coordinate(i, nf)?)?;
            vertices.set(index, 1, lattice_coordinate(j, nf)?)?;
        }
    }

    let mut triangles = Matrix::new(2 * n * n, 3);
    for j in 0..n {
        for i in 0..n {
            let origin = j * dy + i;
            let bottom_right = origin + 1;
            let top_left = origin + dy;
            let top_right = origin + dy + 1;
            let cell = 2 * (i + j * n);
            for (corner, v) in [origin, top_left, top_right].into_iter().enumerate() {
                triangles.set(cell, corner, v)?;
            }
            for (corner, v) in [origin, bottom_right, top_right].into_iter().enumerate() {
                triangles.set(cell + 1, corner, v)?;
            }
        }
    }
    debug!("Generated unit square lattice with {n} cells in each direction");

    Grid::new(vertices, triangles)
}

fn lattice_coordinate<T: RealScalar>(i: usize, n: T) -> Result<T> {
    Ok(T::from(i).ok_or(Error::InvalidResolution(i))? / n)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_square() {
        let _g = unit_square::<f64>(1).unwrap();
        let _g = unit_square::<f64>(2).unwrap();
        let _g = unit_square::<f32>(4).unwrap();
        let _g = unit_square::<f64>(7).unwrap();
    }

    #[test]
    fn test_zero_cells() {
        assert!(matches!(
            unit_square::<f64>(0),
            Err(Error::InvalidResolution(0))
        ));
    }

    #[test]
    fn test_single_cell() {
        let g = unit_square::<f64>(1).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.triangle_count(), 2);
        for (v, coords) in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
            .iter()
            .enumerate()
        {
            assert_eq!(&g.vertex(v).unwrap(), coords);
        }
        assert_eq!(g.triangle(0).unwrap(), [0, 2, 3]);
        assert_eq!(g.triangle(1).unwrap(), [0, 1, 3]);
    }

    #[test]
    fn test_counts() {
        for n in 1..8 {
            let g = unit_square::<f64>(n).unwrap();
            assert_eq!(g.vertex_count(), (n + 1) * (n + 1));
            assert_eq!(g.triangle_count(), 2 * n * n);
        }
    }

    #[test]
    fn test_vertex_positions() {
        let n = 3;
        let g = unit_square::<f64>(n).unwrap();
        for j in 0..n + 1 {
            for i in 0..n + 1 {
                let [x, y] = g.vertex(i + j * (n + 1)).unwrap();
                assert_relative_eq!(x, i as f64 / n as f64);
                assert_relative_eq!(y, j as f64 / n as f64);
            }
        }
    }

    #[test]
    fn test_cell_layout() {
        let n = 3;
        let g = unit_square::<f64>(n).unwrap();
        // Cell (1, 2)
        let origin = 2 * (n + 1) + 1;
        assert_eq!(
            g.triangle(2 * (1 + 2 * n)).unwrap(),
            [origin, origin + n + 1, origin + n + 2]
        );
        assert_eq!(
            g.triangle(2 * (1 + 2 * n) + 1).unwrap(),
            [origin, origin + 1, origin + n + 2]
        );
    }

    #[test]
    fn test_indices_in_range() {
        for n in 1..10 {
            let g = unit_square::<f64>(n).unwrap();
            for t in g.triangle_iter() {
                for v in t {
                    assert!(v < (n + 1) * (n + 1));
                }
            }
        }
    }

    #[test]
    fn test_area() {
        for n in 1..10 {
            let g = unit_square::<f64>(n).unwrap();
            assert_relative_eq!(g.area().unwrap(), 1.0, epsilon = 1e-12);
            for t in 0..g.triangle_count() {
                assert_relative_eq!(
                    g.triangle_area(t).unwrap().abs(),
                    0.5 / (n * n) as f64,
                    epsilon = 1e-12
                );
            }
        }
    }
}

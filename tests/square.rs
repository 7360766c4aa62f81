//! Test square grids built through the public API
use approx::assert_relative_eq;
use squaregrid::{shapes::unit_square, Error, Grid, Matrix};

#[test]
fn test_make_square_single_cell() {
    let g = Grid::make_square(1).unwrap();
    assert_eq!(
        g.to_string(),
        "vertices: 4 x 2\n0 1 0 1\n0 0 1 1\ntriangles: 2 x 3\n0 0\n2 1\n3 3\n"
    );
}

#[test]
fn test_make_square_coverage() {
    for n in [1, 2, 5, 16] {
        let g = Grid::make_square(n).unwrap();
        assert_eq!(g.vertex_count(), (n + 1) * (n + 1));
        assert_eq!(g.triangle_count(), 2 * n * n);
        assert_relative_eq!(g.area().unwrap(), 1.0, epsilon = 1e-10);
    }
}

#[test]
fn test_make_square_orientation() {
    // The first triangle of each cell is clockwise and the second anticlockwise
    let g = Grid::make_square(3).unwrap();
    for t in 0..g.triangle_count() {
        let area = g.triangle_area(t).unwrap();
        if t % 2 == 0 {
            assert!(area < 0.0);
        } else {
            assert!(area > 0.0);
        }
    }
}

#[test]
fn test_make_square_zero() {
    assert!(matches!(
        Grid::make_square(0),
        Err(Error::InvalidResolution(0))
    ));
}

#[test]
fn test_single_precision() {
    let g = unit_square::<f32>(3).unwrap();
    assert_relative_eq!(g.area().unwrap(), 1.0, epsilon = 1e-5);
}

#[test]
fn test_rebuild_from_parts() {
    let (vertices, triangles) = Grid::make_square(2).unwrap().into_parts();
    let g = Grid::new(vertices, triangles).unwrap();
    assert_eq!(g.triangle_count(), 8);
}

#[test]
fn test_transform_vertices() {
    // Scale the mesh by 2 in x and 3 in y
    let g = Grid::make_square(2).unwrap();
    let scale = Matrix::from_data(2, 2, vec![2.0, 0.0, 0.0, 3.0]).unwrap();
    let vertices = scale.multiply(g.vertices()).unwrap();
    let (_, triangles) = g.into_parts();
    let g = Grid::new(vertices, triangles).unwrap();
    assert_relative_eq!(g.area().unwrap(), 6.0, epsilon = 1e-10);
}

#[test]
fn test_reference_to_missing_vertex() {
    let vertices = Matrix::<f64>::new(1, 2);
    let triangles = Matrix::from_data(1, 3, vec![0, 0, 5]).unwrap();
    assert!(matches!(
        Grid::new(vertices, triangles),
        Err(Error::InvalidMeshReference { vertex: 5, .. })
    ));
}

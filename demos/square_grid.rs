use squaregrid::{traits::GmshExport, Grid, Matrix};

/// Matrices and square grids
///
/// Multiplies a scaling matrix by the identity in both orders, then meshes the unit square with
/// the number of cells per side given as the first argument (default 2) and prints the grid.
/// Set `RUST_LOG=debug` to see what the grid constructor checks.
fn main() -> squaregrid::Result<()> {
    env_logger::init();

    // Matrices are created full of zeros and filled one entry at a time
    let mut identity = Matrix::<f64>::new(2, 2);
    identity.set(0, 0, 1.0)?;
    identity.set(1, 1, 1.0)?;
    print!("identity: {identity}");

    let mut scale = Matrix::<f64>::new(2, 2);
    scale.set(0, 0, 2.0)?;
    scale.set(1, 1, 2.0)?;
    print!("scale: {scale}");

    print!("identity * scale: {}", identity.multiply(&scale)?);
    print!("scale * identity: {}", (&scale * &identity)?);

    // Shapes that do not fit together are reported rather than multiplied
    if let Err(e) = Matrix::<f64>::new(3, 2).multiply(&scale) {
        println!("3 x 2 times 2 x 2: {e}");
    }

    let n = std::env::args()
        .nth(1)
        .and_then(|a| a.parse::<usize>().ok())
        .unwrap_or(2);
    let grid = Grid::make_square(n)?;
    print!("{grid}");
    println!("total area: {}", grid.area()?);

    grid.export_as_gmsh("_square_grid.msh")?;
    Ok(())
}

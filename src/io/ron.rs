//! RON I/O
use crate::{
    error::{Error, Result},
    traits::{ConvertToSerializable, RONExport, RONImport},
};

impl<G: ConvertToSerializable> RONExport for G {
    fn to_ron_string(&self) -> Result<String> {
        ron::to_string(&self.to_serializable()).map_err(|e| Error::Ron(e.to_string()))
    }
}

impl<G: ConvertToSerializable> RONImport for G {
    fn from_ron_string(s: &str) -> Result<Self> {
        let data = ron::from_str(s).map_err(|e| Error::Ron(e.to_string()))?;
        Self::from_serializable(data)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{grid::Grid, matrix::Matrix, shapes::unit_square};

    #[test]
    fn test_ron_export_and_import() {
        let g = unit_square::<f64>(3).unwrap();
        g.export_as_ron("_test_export.ron").unwrap();

        let g2 = Grid::<f64>::import_from_ron("_test_export.ron").unwrap();

        assert_eq!(g2, g);
    }

    #[test]
    fn test_matrix_ron_string() {
        let m = Matrix::from_data(2, 1, vec![3, 4]).unwrap();
        let s = m.to_ron_string().unwrap();
        assert_eq!(Matrix::<i32>::from_ron_string(&s).unwrap(), m);
    }

    #[test]
    fn test_import_revalidates() {
        let s = "(vertices: (width: 1, height: 2, data: [0.0, 0.0]), triangles: (width: 1, height: 3, data: [0, 0, 5]))";
        assert!(matches!(
            Grid::<f64>::from_ron_string(s),
            Err(Error::InvalidMeshReference { vertex: 5, .. })
        ));
    }

    #[test]
    fn test_import_wrong_length() {
        let s = "(width: 2, height: 2, data: [1.0])";
        assert!(matches!(
            Matrix::<f64>::from_ron_string(s),
            Err(Error::DataLength { len: 1, .. })
        ));
    }

    #[test]
    fn test_import_overflowing_shape() {
        let s = "(width: 9223372036854775808, height: 2, data: [])";
        assert!(matches!(
            Matrix::<f64>::from_ron_string(s),
            Err(Error::DataLength { len: 0, .. })
        ));
    }

    #[test]
    fn test_import_garbage() {
        assert!(matches!(
            Grid::<f64>::from_ron_string("not ron"),
            Err(Error::Ron(_))
        ));
    }
}

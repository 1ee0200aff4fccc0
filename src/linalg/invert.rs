/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Result, Matrix, MatrixLike, RowReducer};
use crate::ensure_square;

impl RowReducer {
    /// Inverse of a square matrix, or `None` if it is singular.
    ///
    /// The aggregated row operations that bring an invertible matrix to the
    /// identity are its inverse.
    pub fn inverse(&self, matrix: &dyn MatrixLike) -> Result<Option<Matrix>> {
        ensure_square(matrix)?;
        let reduction = self.reduce(matrix)?;
        if !reduction.reduced().is_identity(self.tol) {
            debug!("{0}x{0} matrix is singular (rank {1})", matrix.num_rows(), reduction.rank());
            return Ok(None);
        }
        Ok(Some(reduction.transform()))
    }

    /// Determinant of a square matrix, read off of the row operations.
    ///
    /// Swaps contribute a factor of `-1` and row scalings by `s` a factor of
    /// `1/s`; row subtractions leave it alone.
    pub fn determinant(&self, matrix: &dyn MatrixLike) -> Result<f64> {
        ensure_square(matrix)?;
        let reduction = self.reduce(matrix)?;
        if !reduction.reduced().is_identity(self.tol) {
            return Ok(0.0);
        }
        let transform_det: f64 = reduction.operations().iter().map(|op| op.determinant()).product();
        Ok(transform_det.recip())
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use crate::{Error, Matrix, MatrixLike, RowReducer, Tol};
    use crate::test_util::{self, random_matrix};

    #[test]
    fn two_by_two() {
        let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let inv = RowReducer::new().inverse(&m).unwrap().unwrap();
        assert_close!(inv, Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]).unwrap());
        assert_close!(RowReducer::new().determinant(&m).unwrap(), 10.0);
    }

    #[test]
    fn inverse_is_two_sided() {
        let reducer = RowReducer::new();
        let tol = Tol::new(1e-8).unwrap();
        for n in 1..7 {
            let m = test_util::invertible(n);
            let inv = reducer.inverse(&m).unwrap().unwrap();
            assert!(m.matmul(&inv).unwrap().is_identity(tol));
            assert!(inv.matmul(&m).unwrap().is_identity(tol));
        }
    }

    #[test]
    fn identity_inverts_to_itself() {
        let eye = Matrix::eye(5).unwrap();
        assert_eq!(RowReducer::new().inverse(&eye).unwrap(), Some(eye.clone()));
        assert_eq!(RowReducer::new().determinant(&eye).unwrap(), 1.0);
    }

    #[test]
    fn singular() {
        let reducer = RowReducer::new();
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(reducer.inverse(&m).unwrap(), None);
        assert_eq!(reducer.determinant(&m).unwrap(), 0.0);

        for n in 2..6 {
            let m = test_util::non_invertible(n);
            assert_eq!(reducer.inverse(&m).unwrap(), None);
            assert_eq!(reducer.determinant(&m).unwrap(), 0.0);
        }
    }

    #[test]
    fn non_square() {
        let m = random_matrix((2, 3));
        match RowReducer::new().inverse(&m) {
            Err(Error::NonSquare { rows: 2, cols: 3 }) => {},
            r => panic!("{:?}", r),
        }
        assert!(matches!(RowReducer::new().determinant(&m), Err(Error::NonSquare { .. })));
    }

    #[test]
    fn determinant_of_triangular() {
        let m = Matrix::from_rows(&[
            [2.0, 1.0, -3.0],
            [0.0, -4.0, 5.0],
            [0.0, 0.0, 0.5],
        ]).unwrap();
        assert_close!(RowReducer::new().determinant(&m).unwrap(), -4.0);
        assert_close!(RowReducer::new().determinant(&m.transpose()).unwrap(), -4.0);
    }

    #[test]
    fn determinant_is_multiplicative() {
        let reducer = RowReducer::new();
        for _ in 0..10 {
            let a = random_matrix((4, 4));
            let b = random_matrix((4, 4));
            let ab = a.matmul(&b).unwrap();
            let expected = reducer.determinant(&a).unwrap() * reducer.determinant(&b).unwrap();
            assert_close!(rel=1e-8, abs=1e-9, reducer.determinant(&ab).unwrap(), expected);
        }
    }

    #[test]
    fn inverse_through_a_view() {
        let m = test_util::invertible(4);
        let inv_of_t = RowReducer::new().inverse(&m.transpose()).unwrap().unwrap();
        let t_of_inv = RowReducer::new().inverse(&m).unwrap().unwrap().to_transpose().unwrap();
        assert_close!(abs=1e-9, inv_of_t, t_of_inv);
        assert_eq!(m.transpose().num_rows(), 4);
    }
}

/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, Matrix, MatrixLike, MatrixLikeMut, Vector};
use crate::{check_index, check_same_len};

/// The single row operation that an elementary matrix performs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RowOp {
    /// Exchange two rows.
    Swap(usize, usize),
    /// `row *= factor`.
    Scale { row: usize, factor: f64 },
    /// `target -= factor * source`.
    SubtractScaled { target: usize, source: usize, factor: f64 },
}

/// An `n x n` elementary matrix.
///
/// This is the identity with exactly one row operation applied to it, optionally
/// multiplied through by an overall coefficient (see `MatrixLikeMut::scale`).
/// Left-multiplying a matrix by it performs the row operation on that matrix.
///
/// These are only meant to be composed and applied, so element-wise access,
/// `add`, `subtract`, and `to_transpose` all report `Error::Unsupported`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementaryOperation {
    dim: usize,
    op: RowOp,
    // multiplies the whole matrix; 1 unless someone called `scale`
    coefficient: f64,
}

impl ElementaryOperation {
    pub fn swap(dim: usize, a: usize, b: usize) -> Result<Self> {
        check_rows(dim, &[a, b])?;
        if a == b {
            throw!(Error::InvalidIndex(format!("cannot swap row {} with itself", a)));
        }
        Ok(ElementaryOperation::from_op(dim, RowOp::Swap(a, b)))
    }

    pub fn scale_row(dim: usize, row: usize, factor: f64) -> Result<Self> {
        check_rows(dim, &[row])?;
        if factor == 0.0 || !factor.is_finite() {
            throw!(Error::ArithmeticDegenerate("row scale factor must be finite and nonzero"));
        }
        Ok(ElementaryOperation::from_op(dim, RowOp::Scale { row, factor }))
    }

    /// `target -= source`
    pub fn subtract_row(dim: usize, target: usize, source: usize) -> Result<Self> {
        ElementaryOperation::subtract_scaled_row(dim, target, source, 1.0)
    }

    /// `target -= factor * source`
    pub fn subtract_scaled_row(dim: usize, target: usize, source: usize, factor: f64) -> Result<Self> {
        check_rows(dim, &[target, source])?;
        if target == source {
            throw!(Error::InvalidIndex(format!("cannot subtract row {} from itself", target)));
        }
        Ok(ElementaryOperation::from_op(dim, RowOp::SubtractScaled { target, source, factor }))
    }

    fn from_op(dim: usize, op: RowOp) -> Self {
        ElementaryOperation { dim, op, coefficient: 1.0 }
    }

    pub fn dim(&self) -> usize { self.dim }
    pub fn op(&self) -> RowOp { self.op }
    pub fn coefficient(&self) -> f64 { self.coefficient }
}

fn check_rows(dim: usize, rows: &[usize]) -> Result<()> {
    if dim == 0 {
        throw!(Error::InvalidIndex("elementary operations need at least one row".to_string()));
    }
    for &row in rows {
        check_index("row", row, dim)?;
    }
    Ok(())
}

impl ElementaryOperation {
    /// Left-multiply the matrix whose rows are `rows` by this operation, in place.
    pub fn apply(&self, rows: &mut [Vector]) -> Result<()> {
        check_same_len("rows of operand", rows.len(), self.dim)?;
        if let Some(first) = rows.first() {
            for row in &rows[1..] {
                check_same_len("operand row lengths", row.len(), first.len())?;
            }
        }
        self.apply_unchecked(rows);
        Ok(())
    }

    // requires rows.len() == dim, with all rows the same length
    pub(crate) fn apply_unchecked(&self, rows: &mut [Vector]) {
        match self.op {
            RowOp::Swap(a, b) => rows.swap(a, b),
            RowOp::Scale { row, factor } => rows[row].scale(factor),
            RowOp::SubtractScaled { target, source, factor } => {
                for k in 0..rows[target].len() {
                    let x = rows[source][k];
                    rows[target][k] -= factor * x;
                }
            },
        }
        if self.coefficient != 1.0 {
            for row in rows {
                row.scale(self.coefficient);
            }
        }
    }

    /// Left-multiply a column vector, in place.
    pub fn apply_to_vector(&self, vector: &mut Vector) -> Result<()> {
        check_same_len("vector operand", vector.len(), self.dim)?;
        let v = vector.as_mut_slice();
        match self.op {
            RowOp::Swap(a, b) => v.swap(a, b),
            RowOp::Scale { row, factor } => v[row] *= factor,
            RowOp::SubtractScaled { target, source, factor } => v[target] -= factor * v[source],
        }
        if self.coefficient != 1.0 {
            vector.scale(self.coefficient);
        }
        Ok(())
    }

    pub fn determinant(&self) -> f64 {
        let op_det = match self.op {
            RowOp::Swap(_, _) => -1.0,
            RowOp::Scale { factor, .. } => factor,
            RowOp::SubtractScaled { .. } => 1.0,
        };
        op_det * self.coefficient.powi(self.dim as i32)
    }
}

pub(crate) fn identity_rows(n: usize) -> Vec<Vector> {
    (0..n).map(|i| {
        let mut row = Vector::zeros(n);
        row[i] = 1.0;
        row
    }).collect()
}

impl MatrixLike for ElementaryOperation {
    fn dims(&self) -> (usize, usize) { (self.dim, self.dim) }

    fn get(&self, _: usize, _: usize) -> Result<f64> {
        throw!(Error::Unsupported("element access on an elementary operation"));
    }

    fn row_vector(&self, row: usize) -> Result<Vector> {
        check_index("row", row, self.dim)?;
        Ok(self.row_vectors().swap_remove(row))
    }

    fn column_vector(&self, col: usize) -> Result<Vector> {
        check_index("column", col, self.dim)?;
        Ok(self.column_vectors().swap_remove(col))
    }

    fn row_vectors(&self) -> Vec<Vector> {
        let mut rows = identity_rows(self.dim);
        self.apply_unchecked(&mut rows);
        rows
    }

    fn column_vectors(&self) -> Vec<Vector> {
        let rows = self.row_vectors();
        (0..self.dim).map(|c| rows.iter().map(|row| row[c]).collect()).collect()
    }

    fn to_transpose(&self) -> Result<Matrix> {
        throw!(Error::Unsupported("transpose of an elementary operation"));
    }
}

impl MatrixLikeMut for ElementaryOperation {
    fn set(&mut self, _: usize, _: usize, _: f64) -> Result<()> {
        throw!(Error::Unsupported("element access on an elementary operation"));
    }

    fn scale(&mut self, c: f64) { self.coefficient *= c; }

    fn add(&mut self, _: &dyn MatrixLike) -> Result<()> {
        throw!(Error::Unsupported("addition of elementary operations"));
    }

    fn subtract(&mut self, _: &dyn MatrixLike) -> Result<()> {
        throw!(Error::Unsupported("subtraction of elementary operations"));
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::matmul;
    use crate::test_util::random_matrix;

    fn dense(rows: &[[f64; 3]]) -> Matrix { Matrix::from_rows(rows).unwrap() }

    #[test]
    fn dense_forms() {
        let swap = ElementaryOperation::swap(3, 0, 2).unwrap();
        assert_eq!(swap.to_matrix(), dense(&[[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]));

        let scale = ElementaryOperation::scale_row(3, 1, 4.0).unwrap();
        assert_eq!(scale.to_matrix(), dense(&[[1.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 1.0]]));

        let sub = ElementaryOperation::subtract_scaled_row(3, 2, 0, 2.5).unwrap();
        assert_eq!(sub.to_matrix(), dense(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-2.5, 0.0, 1.0]]));
        assert_eq!(sub.column_vector(0).unwrap(), Vector::new(vec![1.0, 0.0, -2.5]));
        assert_eq!(sub.row_vector(2).unwrap(), Vector::new(vec![-2.5, 0.0, 1.0]));

        let plain = ElementaryOperation::subtract_row(3, 1, 0).unwrap();
        assert_eq!(plain.op(), RowOp::SubtractScaled { target: 1, source: 0, factor: 1.0 });
    }

    #[test]
    fn apply_is_left_multiplication() {
        let ops = vec![
            ElementaryOperation::swap(3, 0, 1).unwrap(),
            ElementaryOperation::scale_row(3, 2, -0.5).unwrap(),
            ElementaryOperation::subtract_scaled_row(3, 0, 2, 3.0).unwrap(),
        ];
        for op in &ops {
            let m = random_matrix((3, 4));
            let mut rows = m.row_vectors();
            op.apply(&mut rows).unwrap();
            let expected = matmul(op, &m).unwrap();
            assert_close!(Matrix::from_row_vectors(&rows).unwrap(), expected);

            let v = m.column_vector(1).unwrap();
            let mut w = v.clone();
            op.apply_to_vector(&mut w).unwrap();
            assert_close!(w, op.multiply(&v).unwrap());
        }
    }

    #[test]
    fn overall_coefficient() {
        let mut op = ElementaryOperation::swap(2, 0, 1).unwrap();
        op.scale(3.0);
        assert_eq!(op.coefficient(), 3.0);
        assert_eq!(op.to_matrix(), Matrix::from_rows(&[[0.0, 3.0], [3.0, 0.0]]).unwrap());
        assert_close!(op.determinant(), -9.0);

        let mut v = Vector::new(vec![1.0, 2.0]);
        op.apply_to_vector(&mut v).unwrap();
        assert_eq!(v, Vector::new(vec![6.0, 3.0]));
    }

    #[test]
    fn determinants() {
        for op in &[
            ElementaryOperation::swap(4, 1, 3).unwrap(),
            ElementaryOperation::scale_row(4, 0, 0.25).unwrap(),
            ElementaryOperation::subtract_scaled_row(4, 3, 1, -7.0).unwrap(),
        ] {
            let expected = match op.op() {
                RowOp::Swap(..) => -1.0,
                RowOp::Scale { factor, .. } => factor,
                RowOp::SubtractScaled { .. } => 1.0,
            };
            assert_eq!(op.determinant(), expected);
        }
    }

    #[test]
    fn bad_construction() {
        assert!(matches!(ElementaryOperation::swap(3, 1, 1), Err(Error::InvalidIndex(_))));
        assert!(matches!(ElementaryOperation::swap(3, 0, 3), Err(Error::InvalidIndex(_))));
        assert!(matches!(ElementaryOperation::swap(0, 0, 0), Err(Error::InvalidIndex(_))));
        assert!(matches!(ElementaryOperation::subtract_row(2, 0, 0), Err(Error::InvalidIndex(_))));
        assert!(matches!(ElementaryOperation::subtract_row(2, 2, 0), Err(Error::InvalidIndex(_))));
        assert!(matches!(ElementaryOperation::scale_row(2, 5, 1.0), Err(Error::InvalidIndex(_))));
        assert!(matches!(ElementaryOperation::scale_row(2, 0, 0.0), Err(Error::ArithmeticDegenerate(_))));
        assert!(matches!(
            ElementaryOperation::scale_row(2, 0, ::std::f64::INFINITY),
            Err(Error::ArithmeticDegenerate(_)),
        ));
    }

    #[test]
    fn shape_checks() {
        let op = ElementaryOperation::swap(3, 0, 1).unwrap();
        let mut rows = vec![Vector::zeros(2); 2];
        assert!(matches!(op.apply(&mut rows), Err(Error::DimensionMismatch(_))));
        let mut ragged = vec![Vector::zeros(2), Vector::zeros(3), Vector::zeros(2)];
        assert!(matches!(op.apply(&mut ragged), Err(Error::DimensionMismatch(_))));
        assert!(matches!(op.apply_to_vector(&mut Vector::zeros(4)), Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn unsupported() {
        let mut op = ElementaryOperation::scale_row(2, 0, 2.0).unwrap();
        let other = Matrix::eye(2).unwrap();
        assert!(matches!(op.get(0, 0), Err(Error::Unsupported(_))));
        assert!(matches!(op.set(0, 0, 1.0), Err(Error::Unsupported(_))));
        assert!(matches!(op.add(&other), Err(Error::Unsupported(_))));
        assert!(matches!(op.subtract(&other), Err(Error::Unsupported(_))));
        assert!(matches!(op.to_transpose(), Err(Error::Unsupported(_))));
    }
}

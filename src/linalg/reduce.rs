/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Gauss-Jordan elimination that keeps its receipts.

use crate::{Error, Result, Tol, Matrix, MatrixLike, Vector, ElementaryOperation};
use crate::check_same_len;
use crate::elementary::identity_rows;

/// Output of `RowReducer::reduce`.
#[derive(Debug, Clone)]
pub struct ReductionResult {
    reduced: Matrix,
    // in the order they were applied
    operations: Vec<ElementaryOperation>,
    // (row, col) of each leading 1, left to right
    pivots: Vec<(usize, usize)>,
}

impl ReductionResult {
    /// The matrix in reduced row-echelon form.
    pub fn reduced(&self) -> &Matrix { &self.reduced }

    /// Every row operation performed, in the order performed.
    pub fn operations(&self) -> &[ElementaryOperation] { &self.operations }

    /// `(row, col)` of each pivot.
    pub fn pivots(&self) -> &[(usize, usize)] { &self.pivots }

    pub fn rank(&self) -> usize { self.pivots.len() }

    /// The single matrix `T = E_k ... E_1` such that `T * original == reduced`.
    ///
    /// Unlike `aggregate_operations`, this produces the identity when no
    /// operations were needed.
    pub fn transform(&self) -> Matrix {
        let mut rows = identity_rows(self.reduced.num_rows());
        for op in &self.operations {
            op.apply_unchecked(&mut rows);
        }
        Matrix::from_row_vectors_unchecked(rows)
    }

    /// Compute `T * vector` by replaying the operations, without forming `T`.
    pub fn transform_vector(&self, vector: &Vector) -> Result<Vector> {
        check_same_len("transformed vector", vector.len(), self.reduced.num_rows())?;
        let mut out = vector.clone();
        for op in &self.operations {
            op.apply_to_vector(&mut out)?;
        }
        Ok(out)
    }

    /// Columns that have no pivot.
    pub fn free_columns(&self) -> Vec<usize> {
        (0..self.reduced.num_cols())
            .filter(|c| !self.pivots.iter().any(|&(_, pc)| pc == *c))
            .collect()
    }

    pub fn into_parts(self) -> (Matrix, Vec<ElementaryOperation>, Vec<(usize, usize)>) {
        (self.reduced, self.operations, self.pivots)
    }
}

/// Brings matrices to reduced row-echelon form.
#[derive(Debug, Copy, Clone, Default)]
pub struct RowReducer {
    pub(crate) tol: Tol,
}

impl RowReducer {
    pub fn new() -> Self { Default::default() }

    pub fn with_tolerance(tol: Tol) -> Self { RowReducer { tol } }

    pub fn tolerance(&self) -> Tol { self.tol }

    /// Reduce a matrix, recording each row operation.
    ///
    /// Columns are visited left to right. Within a column, the pivot is taken
    /// from the *last* not-yet-pivoted row whose entry exceeds the tolerance;
    /// columns without one are skipped. The input is never modified.
    ///
    /// Input that is already the identity (within tolerance) comes back
    /// unchanged with no operations.
    pub fn reduce(&self, matrix: &dyn MatrixLike) -> Result<ReductionResult> {
        let (height, width) = matrix.dims();
        if matrix.is_identity(self.tol) {
            trace!("{}x{} input is already the identity", height, width);
            return Ok(ReductionResult {
                reduced: matrix.to_matrix(),
                operations: vec![],
                pivots: (0..height).map(|i| (i, i)).collect(),
            });
        }

        let tol = self.tol;
        let mut rows = matrix.row_vectors();
        let mut operations = vec![];
        let mut pivots = vec![];

        // row that receives the next pivot
        let mut p = 0;
        for c in 0..width {
            if p == height {
                break;
            }

            let pivot_row = match (p..height).rev().find(|&r| !tol.is_zero(rows[r][c])) {
                Some(r) => r,
                None => {
                    trace!("column {}: no pivot", c);
                    continue;
                },
            };

            if pivot_row != p {
                let op = ElementaryOperation::swap(height, pivot_row, p)?;
                record(&mut rows, &mut operations, op);
            }

            let op = ElementaryOperation::scale_row(height, p, rows[p][c].recip())?;
            record(&mut rows, &mut operations, op);
            rows[p][c] = 1.0;

            for i in 0..height {
                let entry = rows[i][c];
                if i == p || tol.is_zero(entry) {
                    continue;
                }
                let op = ElementaryOperation::subtract_scaled_row(height, i, p, entry)?;
                record(&mut rows, &mut operations, op);
                rows[i][c] = 0.0;
            }

            trace!("column {}: pivot at row {} (taken from row {})", c, p, pivot_row);
            pivots.push((p, c));
            p += 1;
        }

        debug!(
            "reduced {}x{} matrix: rank {}, {} operations",
            height, width, pivots.len(), operations.len(),
        );
        Ok(ReductionResult {
            reduced: Matrix::from_row_vectors_unchecked(rows),
            operations,
            pivots,
        })
    }

    /// See the free function `aggregate_operations`.
    pub fn aggregate_operations(&self, operations: &[ElementaryOperation]) -> Result<Matrix> {
        aggregate_operations(operations)
    }
}

fn record(rows: &mut [Vector], operations: &mut Vec<ElementaryOperation>, op: ElementaryOperation) {
    op.apply_unchecked(rows);
    operations.push(op);
}

/// Compose operations, given in the order they were applied, into one matrix.
///
/// The first operation applied is the rightmost factor: `E_k ... E_2 E_1`.
pub fn aggregate_operations(operations: &[ElementaryOperation]) -> Result<Matrix> {
    let dim = match operations.first() {
        Some(op) => op.dim(),
        None => throw!(Error::EmptyOperations),
    };
    let mut rows = identity_rows(dim);
    for op in operations {
        op.apply(&mut rows)?;
    }
    Ok(Matrix::from_row_vectors_unchecked(rows))
}

/// Apply operations, in order, to a copy of `original`.
pub fn replay(operations: &[ElementaryOperation], original: &dyn MatrixLike) -> Result<Matrix> {
    let mut rows = original.row_vectors();
    for op in operations {
        op.apply(&mut rows)?;
    }
    Ok(Matrix::from_row_vectors_unchecked(rows))
}

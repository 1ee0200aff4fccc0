/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, Tol, Matrix, MatrixLike, Vector, RowReducer, VectorSpace};

/// Solves `A x = b` for one particular `x`.
#[derive(Debug, Copy, Clone, Default)]
pub struct LinearSystemSolver {
    reducer: RowReducer,
}

impl LinearSystemSolver {
    pub fn new() -> Self { Default::default() }

    pub fn with_tolerance(tol: Tol) -> Self {
        LinearSystemSolver { reducer: RowReducer::with_tolerance(tol) }
    }

    pub fn tolerance(&self) -> Tol { self.reducer.tolerance() }

    /// Find some `x` with `matrix * x == rhs`, or `None` if the system is inconsistent.
    ///
    /// Square systems are solved through the inverse when there is one. Otherwise
    /// the free variables are set to zero.
    pub fn solve(&self, matrix: &dyn MatrixLike, rhs: &Vector) -> Result<Option<Vector>> {
        check_rhs(matrix, rhs)?;

        if matrix.is_square() {
            if let Some(inverse) = self.reducer.inverse(matrix)? {
                return inverse.multiply(rhs).map(Some);
            }
            warn!("singular {0}x{0} system; looking for a particular solution instead", matrix.num_rows());
        }

        let reduction = self.reducer.reduce(matrix)?;
        let transformed = reduction.transform_vector(rhs)?;
        if !is_consistent(reduction.reduced(), &transformed, self.tolerance()) {
            debug!("inconsistent {}x{} system", matrix.num_rows(), matrix.num_cols());
            return Ok(None);
        }

        let mut solution = Vector::zeros(matrix.num_cols());
        for &(row, col) in reduction.pivots() {
            solution[col] = transformed[row];
        }
        Ok(Some(solution))
    }

    /// Whether `rhs` is in the column space of `matrix`.
    pub fn is_solvable(&self, matrix: &dyn MatrixLike, rhs: &Vector) -> Result<bool> {
        check_rhs(matrix, rhs)?;
        // an empty column space contains nothing, but x = 0 always solves A x = 0
        if rhs.is_zero(self.tolerance()) {
            return Ok(true);
        }
        VectorSpace::column_space(matrix, self.tolerance())?.contains(rhs)
    }
}

fn check_rhs(matrix: &dyn MatrixLike, rhs: &Vector) -> Result<()> {
    if rhs.len() != matrix.num_rows() {
        throw!(Error::DimensionMismatch(format!(
            "right hand side of length {} for a system with {} equations",
            rhs.len(), matrix.num_rows(),
        )));
    }
    Ok(())
}

/// `false` if some row of `reduced` vanishes while the matching entry of
/// `transformed` does not.
pub(crate) fn is_consistent(reduced: &Matrix, transformed: &Vector, tol: Tol) -> bool {
    izip!(reduced.row_vectors(), transformed)
        .all(|(row, &rhs)| !row.is_zero(tol) || tol.is_zero(rhs))
}

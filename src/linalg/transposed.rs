/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, MatrixLike, MatrixLikeMut, Result, Vector};
use crate::check_index;

use ::std::ops::{Deref, DerefMut};

/// A transposed view of a borrowed matrix.
///
/// No data is copied; `get(r, c)` reads `(c, r)` of the owner. With a
/// `&mut Matrix` inside, writes go straight into the owner.
///
/// Transposing the view again hands back the borrow it was made from.
#[derive(Debug)]
pub struct Transposed<M> {
    owner: M,
}

pub type TransposedRef<'a> = Transposed<&'a Matrix>;
pub type TransposedMut<'a> = Transposed<&'a mut Matrix>;

impl<M> Transposed<M> {
    pub(crate) fn new(owner: M) -> Self { Transposed { owner } }

    /// Undo the transposition, recovering the original reference.
    pub fn transpose(self) -> M { self.owner }
}

impl<M: Deref<Target = Matrix>> MatrixLike for Transposed<M> {
    fn dims(&self) -> (usize, usize) {
        let (rows, cols) = self.owner.dims();
        (cols, rows)
    }

    fn get(&self, row: usize, col: usize) -> Result<f64> {
        let (rows, cols) = self.dims();
        check_index("row", row, rows)?;
        check_index("column", col, cols)?;
        self.owner.get(col, row)
    }

    fn row_vector(&self, row: usize) -> Result<Vector> {
        check_index("row", row, self.num_rows())?;
        self.owner.column_vector(row)
    }

    fn column_vector(&self, col: usize) -> Result<Vector> {
        check_index("column", col, self.num_cols())?;
        self.owner.row_vector(col)
    }

    fn row_vectors(&self) -> Vec<Vector> { self.owner.column_vectors() }
    fn column_vectors(&self) -> Vec<Vector> { self.owner.row_vectors() }

    fn to_transpose(&self) -> Result<Matrix> { Ok(self.owner.to_matrix()) }
}

impl<M: DerefMut<Target = Matrix>> MatrixLikeMut for Transposed<M> {
    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let (rows, cols) = self.dims();
        check_index("row", row, rows)?;
        check_index("column", col, cols)?;
        self.owner.set(col, row, value)
    }

    fn scale(&mut self, c: f64) { self.owner.scale(c) }
}

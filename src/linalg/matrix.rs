/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, Tol, Vector};
use crate::{check_index, check_same_len};
use crate::transposed::{Transposed, TransposedRef, TransposedMut};

use ::linspan_assert_close::{CheckClose, CheckCloseError, Tolerances};
use ::slice_of_array::prelude::*;
use ::slice_of_array::IsSliceomorphic;
use ::std::convert::TryFrom;
use ::std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use ::serde::{Serialize, Deserialize};

/// Owned matrix type with C layout.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: rows * cols == data.len()
    // invariant: rows > 0 && cols > 0
    rows: usize,
    cols: usize,
}

/// Read access shared by every matrix representation.
///
/// Owned matrices, transposed views, and elementary operations all implement
/// this, so that algorithms can be written once against `&dyn MatrixLike`.
pub trait MatrixLike {
    /// `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    fn num_rows(&self) -> usize { self.dims().0 }
    fn num_cols(&self) -> usize { self.dims().1 }
    fn is_square(&self) -> bool { self.num_rows() == self.num_cols() }

    fn get(&self, row: usize, col: usize) -> Result<f64>;

    /// An independent copy of one row.
    fn row_vector(&self, row: usize) -> Result<Vector>;
    /// An independent copy of one column.
    fn column_vector(&self, col: usize) -> Result<Vector>;

    fn row_vectors(&self) -> Vec<Vector>;
    fn column_vectors(&self) -> Vec<Vector>;

    /// Matrix-vector product.
    fn multiply(&self, vector: &Vector) -> Result<Vector> {
        if vector.len() != self.num_cols() {
            throw!(Error::DimensionMismatch(format!(
                "cannot multiply a {}x{} matrix by a vector of length {}",
                self.num_rows(), self.num_cols(), vector.len(),
            )));
        }
        self.row_vectors().iter().map(|row| row.dot(vector)).collect()
    }

    /// Dense copy of whatever this represents.
    fn to_matrix(&self) -> Matrix {
        let (rows, cols) = self.dims();
        let data = self.row_vectors().into_iter().flat_map(Vector::into_inner).collect();
        Matrix { data, rows, cols }
    }

    /// Owned transpose.
    fn to_transpose(&self) -> Result<Matrix> {
        let (rows, cols) = self.dims();
        let data = self.column_vectors().into_iter().flat_map(Vector::into_inner).collect();
        Ok(Matrix { data, rows: cols, cols: rows })
    }

    /// Non-square matrices are never the identity.
    fn is_identity(&self, tol: Tol) -> bool {
        if !self.is_square() {
            return false;
        }
        self.row_vectors().iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, &x)| match r == c {
                true => tol.is_one(x),
                false => tol.is_zero(x),
            })
        })
    }
}

/// In-place modification.
pub trait MatrixLikeMut: MatrixLike {
    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()>;

    /// Multiply every element by `c`.
    fn scale(&mut self, c: f64);

    fn add(&mut self, other: &dyn MatrixLike) -> Result<()> {
        add_scaled_elementwise(self, 1.0, other)
    }

    fn subtract(&mut self, other: &dyn MatrixLike) -> Result<()> {
        add_scaled_elementwise(self, -1.0, other)
    }
}

fn check_same_dims(what: &str, a: (usize, usize), b: (usize, usize)) -> Result<()> {
    if a != b {
        throw!(Error::DimensionMismatch(format!(
            "{}: {}x{} vs {}x{}", what, a.0, a.1, b.0, b.1,
        )));
    }
    Ok(())
}

// element by element through get/set, for representations with no storage of their own
fn add_scaled_elementwise<M>(target: &mut M, c: f64, other: &dyn MatrixLike) -> Result<()>
where M: MatrixLikeMut + ?Sized,
{
    check_same_dims("matrix arithmetic", target.dims(), other.dims())?;
    for (r, row) in other.row_vectors().into_iter().enumerate() {
        for (col, x) in row.iter().enumerate() {
            let old = target.get(r, col)?;
            target.set(r, col, old + c * x)?;
        }
    }
    Ok(())
}

fn check_shape(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        throw!(Error::DimensionMismatch(format!("cannot make a {}x{} matrix", rows, cols)));
    }
    Ok(())
}

/// Constructors.
impl Matrix {
    pub fn zeros((rows, cols): (usize, usize)) -> Result<Self> {
        check_shape(rows, cols)?;
        Ok(Matrix { data: vec![0.0; rows * cols], rows, cols })
    }

    /// The `n x n` identity.
    pub fn eye(n: usize) -> Result<Self> {
        let mut out = Matrix::zeros((n, n))?;
        for i in 0..n {
            out[(i, i)] = 1.0;
        }
        Ok(out)
    }

    pub fn diagonal(diag: &[f64]) -> Result<Self> {
        let mut out = Matrix::zeros((diag.len(), diag.len()))?;
        for (i, &x) in diag.iter().enumerate() {
            out[(i, i)] = x;
        }
        Ok(out)
    }

    pub fn from_row_major_data((rows, cols): (usize, usize), data: Vec<f64>) -> Result<Self> {
        check_shape(rows, cols)?;
        check_same_len("row-major data", data.len(), rows * cols)?;
        Ok(Matrix { data, rows, cols })
    }

    /// Build from rows of fixed-size arrays, e.g. `&[[1.0, 2.0], [3.0, 4.0]]`.
    pub fn from_rows<V>(rows: &[V]) -> Result<Self>
    where V: IsSliceomorphic<Element = f64>,
    {
        Matrix::from_row_major_data((rows.len(), V::LEN), rows.flat().to_vec())
    }

    pub fn from_row_vectors(rows: &[Vector]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vector::len);
        check_shape(rows.len(), cols)?;

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            check_same_len("row vectors", row.len(), cols)?;
            data.extend_from_slice(row.as_slice());
        }
        Ok(Matrix { data, rows: rows.len(), cols })
    }

    /// The vectors become the columns of the matrix.
    pub fn from_column_vectors(cols: &[Vector]) -> Result<Self> {
        let rows = cols.first().map_or(0, Vector::len);
        check_shape(rows, cols.len())?;
        for col in cols {
            check_same_len("column vectors", col.len(), rows)?;
        }

        let mut data = Vec::with_capacity(rows * cols.len());
        for r in 0..rows {
            data.extend(cols.iter().map(|col| col[r]));
        }
        Ok(Matrix { data, rows, cols: cols.len() })
    }
}

impl Matrix {
    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn into_row_major_data(self) -> Vec<f64> { self.data }

    /// Read-only transposed view sharing this matrix's storage.
    pub fn transpose(&self) -> TransposedRef<'_> { Transposed::new(self) }

    /// Mutable transposed view; writes through it land in `self`.
    pub fn transpose_mut(&mut self) -> TransposedMut<'_> { Transposed::new(self) }

    /// Matrix-matrix product.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        check_matmul_dims(self, other)?;
        let (n, k, m) = (self.rows, self.cols, other.cols);

        let mut data = vec![0.0; n * m];
        for r in 0..n {
            let out_row = &mut data[r * m..(r + 1) * m];
            for i in 0..k {
                let a = self.data[r * k + i];
                let other_row = &other.data[i * m..(i + 1) * m];
                for (out, b) in izip!(&mut out_row[..], other_row) {
                    *out += a * b;
                }
            }
        }
        Ok(Matrix { data, rows: n, cols: m })
    }

    // for rows produced internally, which are known to be non-empty and rectangular
    pub(crate) fn from_row_vectors_unchecked(rows: Vec<Vector>) -> Matrix {
        let cols = rows.first().map_or(0, Vector::len);
        debug_assert!(!rows.is_empty() && cols > 0);
        debug_assert!(rows.iter().all(|row| row.len() == cols));
        let data: Vec<f64> = rows.iter().flat_map(|row| row.iter().cloned()).collect();
        Matrix { rows: rows.len(), cols, data }
    }

    fn row_slice(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

fn check_matmul_dims(a: &dyn MatrixLike, b: &dyn MatrixLike) -> Result<()> {
    if a.num_cols() != b.num_rows() {
        throw!(Error::DimensionMismatch(format!(
            "cannot multiply {}x{} by {}x{}",
            a.num_rows(), a.num_cols(), b.num_rows(), b.num_cols(),
        )));
    }
    Ok(())
}

/// Product of any two matrix representations.
pub fn matmul(a: &dyn MatrixLike, b: &dyn MatrixLike) -> Result<Matrix> {
    check_matmul_dims(a, b)?;
    let rows = a.row_vectors();
    let cols = b.column_vectors();

    let mut data = Vec::with_capacity(rows.len() * cols.len());
    for row in &rows {
        for col in &cols {
            data.push(row.dot(col)?);
        }
    }
    Ok(Matrix { data, rows: rows.len(), cols: cols.len() })
}

impl MatrixLike for Matrix {
    fn dims(&self) -> (usize, usize) { (self.rows, self.cols) }

    fn get(&self, row: usize, col: usize) -> Result<f64> {
        check_index("row", row, self.rows)?;
        check_index("column", col, self.cols)?;
        Ok(self[(row, col)])
    }

    fn row_vector(&self, row: usize) -> Result<Vector> {
        check_index("row", row, self.rows)?;
        Ok(Vector::from(self.row_slice(row)))
    }

    fn column_vector(&self, col: usize) -> Result<Vector> {
        check_index("column", col, self.cols)?;
        Ok((0..self.rows).map(|r| self[(r, col)]).collect())
    }

    fn row_vectors(&self) -> Vec<Vector> {
        self.data.chunks(self.cols).map(Vector::from).collect()
    }

    fn column_vectors(&self) -> Vec<Vector> {
        (0..self.cols).map(|c| (0..self.rows).map(|r| self[(r, c)]).collect()).collect()
    }

    fn multiply(&self, vector: &Vector) -> Result<Vector> {
        if vector.len() != self.cols {
            throw!(Error::DimensionMismatch(format!(
                "cannot multiply a {}x{} matrix by a vector of length {}",
                self.rows, self.cols, vector.len(),
            )));
        }
        Ok(self.data.chunks(self.cols).map(|row| {
            izip!(row, vector).map(|(a, b)| a * b).sum::<f64>()
        }).collect())
    }

    fn to_matrix(&self) -> Matrix { self.clone() }
}

impl MatrixLikeMut for Matrix {
    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        check_index("row", row, self.rows)?;
        check_index("column", col, self.cols)?;
        self[(row, col)] = value;
        Ok(())
    }

    fn scale(&mut self, c: f64) {
        for x in &mut self.data {
            *x *= c;
        }
    }

    fn add(&mut self, other: &dyn MatrixLike) -> Result<()> {
        self.add_scaled_rows(1.0, other)
    }

    fn subtract(&mut self, other: &dyn MatrixLike) -> Result<()> {
        self.add_scaled_rows(-1.0, other)
    }
}

impl Matrix {
    fn add_scaled_rows(&mut self, c: f64, other: &dyn MatrixLike) -> Result<()> {
        check_same_dims("matrix arithmetic", self.dims(), other.dims())?;
        let cols = self.cols;
        for (dest, src) in izip!(self.data.chunks_mut(cols), other.row_vectors()) {
            for (a, b) in izip!(dest, &src) {
                *a += c * b;
            }
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(c < self.cols, "column {} out of range for {} columns", c, self.cols);
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        assert!(c < self.cols, "column {} out of range for {} columns", c, self.cols);
        &mut self.data[r * self.cols + c]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows: Vec<Vector> = rows.into_iter().map(Vector::from).collect();
        Matrix::from_row_vectors(&rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data.chunks(m.cols).map(|row| row.to_vec()).collect()
    }
}

impl CheckClose for Matrix {
    fn check_close(&self, other: &Matrix, tol: Tolerances) -> ::std::result::Result<(), CheckCloseError> {
        assert_eq!(self.dims(), other.dims(), "shape mismatch in check_close");
        self.data[..].check_close(&other.data[..], tol)
    }
}

/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, Tol, Matrix, MatrixLike, Vector, RowReducer};
use crate::solve::is_consistent;

/// The span of a growing list of vectors.
///
/// The basis is kept in insertion order, and a vector only joins it if it is
/// not already in the span, so the basis stays linearly independent.
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    basis: Vec<Vector>,
    // fixed by the first vector added, or up front by the matrix constructors
    dimension_of_vectors: Option<usize>,
    reducer: RowReducer,
}

impl VectorSpace {
    /// The empty span, whose vector dimension is not known yet.
    pub fn new() -> Self { Default::default() }

    pub fn with_tolerance(tol: Tol) -> Self {
        VectorSpace {
            basis: vec![],
            dimension_of_vectors: None,
            reducer: RowReducer::with_tolerance(tol),
        }
    }

    /// The zero subspace of `R^dimension`.
    pub fn trivial(dimension: usize, tol: Tol) -> Self {
        VectorSpace {
            dimension_of_vectors: Some(dimension),
            ..VectorSpace::with_tolerance(tol)
        }
    }

    /// Span of some vectors.
    ///
    /// Vectors within tolerance of zero are skipped. The vectors must all
    /// have the same length.
    pub fn from_vectors(vectors: &[Vector], tol: Tol) -> Result<Self> {
        let mut space = match vectors.first() {
            Some(first) => VectorSpace::trivial(first.len(), tol),
            None => VectorSpace::with_tolerance(tol),
        };
        for vector in vectors {
            if vector.is_zero(tol) {
                if vector.len() != space.dimension_of_vectors.unwrap_or(0) {
                    throw!(mismatch(vector.len(), space.dimension_of_vectors));
                }
                trace!("skipping zero vector");
                continue;
            }
            space.add(vector)?;
        }
        Ok(space)
    }

    /// Span of the columns of a matrix.
    pub fn column_space(matrix: &dyn MatrixLike, tol: Tol) -> Result<Self> {
        VectorSpace::from_vectors(&matrix.column_vectors(), tol)
    }

    /// Span of the rows of a matrix.
    pub fn row_space(matrix: &dyn MatrixLike, tol: Tol) -> Result<Self> {
        VectorSpace::from_vectors(&matrix.row_vectors(), tol)
    }

    /// All `x` with `matrix * x == 0`.
    ///
    /// The basis has one vector per free column of the reduced matrix.
    pub fn kernel(matrix: &dyn MatrixLike, tol: Tol) -> Result<Self> {
        let reduction = RowReducer::with_tolerance(tol).reduce(matrix)?;
        let reduced = reduction.reduced();

        let mut space = VectorSpace::trivial(matrix.num_cols(), tol);
        for free in reduction.free_columns() {
            let mut vector = Vector::zeros(matrix.num_cols());
            vector[free] = 1.0;
            for &(row, col) in reduction.pivots() {
                vector[col] = -reduced[(row, free)];
            }
            space.add(&vector)?;
        }
        debug!("kernel of {}x{} matrix has dimension {}", matrix.num_rows(), matrix.num_cols(), space.dimension());
        Ok(space)
    }

    /// All `y` with `y^T * matrix == 0` (the kernel of the transpose).
    pub fn cokernel(matrix: &dyn MatrixLike, tol: Tol) -> Result<Self> {
        VectorSpace::kernel(&matrix.to_transpose()?, tol)
    }
}

fn mismatch(len: usize, expected: Option<usize>) -> Error {
    Error::DimensionMismatch(format!(
        "vector of length {} in a space of {}-vectors", len, expected.unwrap_or(0),
    ))
}

impl VectorSpace {
    pub fn basis(&self) -> &[Vector] { &self.basis }

    /// Number of basis vectors.
    pub fn dimension(&self) -> usize { self.basis.len() }

    /// Length of the vectors in the space, once known.
    pub fn dimension_of_vectors(&self) -> Option<usize> { self.dimension_of_vectors }

    pub fn is_empty(&self) -> bool { self.basis.is_empty() }

    pub fn tolerance(&self) -> Tol { self.reducer.tolerance() }

    /// Grow the span by `vector`.
    ///
    /// Returns `false` (leaving the space alone) if the vector was already in the
    /// span. A space with an empty basis takes whatever it is given.
    pub fn add(&mut self, vector: &Vector) -> Result<bool> {
        if vector.is_empty() {
            throw!(Error::DimensionMismatch("cannot add a zero-length vector".to_string()));
        }
        match self.dimension_of_vectors {
            None => self.dimension_of_vectors = Some(vector.len()),
            Some(n) if n != vector.len() => throw!(mismatch(vector.len(), Some(n))),
            Some(_) => {},
        }
        if self.contains(vector)? {
            trace!("vector already in span (dimension {})", self.dimension());
            return Ok(false);
        }
        self.basis.push(vector.clone());
        Ok(true)
    }

    /// Whether `vector` is a linear combination of the basis.
    ///
    /// Nothing is in an empty space, not even zero.
    pub fn contains(&self, vector: &Vector) -> Result<bool> {
        if let Some(n) = self.dimension_of_vectors {
            if n != vector.len() {
                throw!(mismatch(vector.len(), Some(n)));
            }
        }
        if self.basis.is_empty() {
            return Ok(false);
        }

        let as_columns = Matrix::from_column_vectors(&self.basis)?;
        let reduction = self.reducer.reduce(&as_columns)?;
        let transformed = reduction.transform_vector(vector)?;
        Ok(is_consistent(reduction.reduced(), &transformed, self.tolerance()))
    }
}

/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense linear algebra built around Gauss-Jordan elimination.
//!
//! The central piece is [`RowReducer`], which brings a matrix to reduced
//! row-echelon form while recording every elementary row operation it
//! performs. Inversion, linear solving, and span membership are all built on
//! top of the recorded operations.
//!
//! [`RowReducer`]: struct.RowReducer.html

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate itertools;
extern crate slice_of_array;
#[cfg_attr(test, macro_use)]
extern crate linspan_assert_close;
#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate env_logger;

// `failure` 1.0 was going to ship this; it never did.
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e))
    }
}

pub use crate::tol::{Tol, DEFAULT_TOLERANCE};
pub use crate::vector::Vector;
pub use crate::matrix::{Matrix, MatrixLike, MatrixLikeMut, matmul};
pub use crate::transposed::{Transposed, TransposedRef, TransposedMut};
pub use crate::elementary::{ElementaryOperation, RowOp};
pub use crate::reduce::{RowReducer, ReductionResult, aggregate_operations, replay};
pub use crate::solve::LinearSystemSolver;
pub use crate::space::VectorSpace;
pub use crate::project::Orthogonalizer;

/// The matrix traits, which most of the API lives on.
pub mod prelude {
    pub use crate::matrix::MatrixLike;
    pub use crate::matrix::MatrixLikeMut;
}

mod tol;
mod vector;
mod matrix;
mod transposed;
mod elementary;
mod reduce;
mod invert;
mod solve;
mod space;
mod project;

#[cfg(test)]
mod test_util;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Everything that can go wrong in this crate.
///
/// These are all caller errors. Outcomes that are merely mathematically
/// unfortunate (a singular matrix, an inconsistent system, a vector outside
/// of a span) are reported through `Option` or `bool` instead.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum Error {
    #[fail(display = "dimension mismatch: {}", _0)]
    DimensionMismatch(String),

    #[fail(display = "expected a square matrix, got {}x{}", rows, cols)]
    NonSquare { rows: usize, cols: usize },

    #[fail(display = "invalid index: {}", _0)]
    InvalidIndex(String),

    #[fail(display = "unsupported operation: {}", _0)]
    Unsupported(&'static str),

    #[fail(display = "degenerate arithmetic: {}", _0)]
    ArithmeticDegenerate(&'static str),

    #[fail(display = "cannot aggregate an empty list of elementary operations")]
    EmptyOperations,

    #[fail(display = "tolerance must be positive and finite (got {})", _0)]
    InvalidTolerance(f64),
}

pub(crate) fn check_index(what: &str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        throw!(Error::InvalidIndex(format!("{} index {} out of range for length {}", what, index, len)));
    }
    Ok(())
}

pub(crate) fn check_same_len(what: &str, a: usize, b: usize) -> Result<()> {
    if a != b {
        throw!(Error::DimensionMismatch(format!("{}: {} vs {}", what, a, b)));
    }
    Ok(())
}

pub(crate) fn ensure_square(matrix: &dyn MatrixLike) -> Result<()> {
    let (rows, cols) = matrix.dims();
    if rows != cols {
        throw!(Error::NonSquare { rows, cols });
    }
    Ok(())
}

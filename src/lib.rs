/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense linear algebra built around row reduction.
//!
//! The numerical work lives in `linspan-linalg`, re-exported here in full.
//! This crate adds the pieces an application wants around it: a
//! deserializable [`Settings`] object, and [`GlobalLogger`] for seeing what
//! the reducer is up to.
//!
//! [`Settings`]: struct.Settings.html
//! [`GlobalLogger`]: struct.GlobalLogger.html

#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate failure;
extern crate fern;
extern crate ansi_term;
extern crate log;

pub extern crate linspan_linalg as linalg;

pub use crate::linalg::{
    Error, Result, Tol, DEFAULT_TOLERANCE,
    Vector, Matrix, MatrixLike, MatrixLikeMut, matmul,
    Transposed, TransposedRef, TransposedMut,
    ElementaryOperation, RowOp,
    RowReducer, ReductionResult, aggregate_operations, replay,
    LinearSystemSolver, VectorSpace, Orthogonalizer,
};
pub use crate::linalg::prelude;

pub use crate::settings::Settings;
pub use crate::logging::{GlobalLogger, ColorizedLevel};

mod settings;
mod logging;

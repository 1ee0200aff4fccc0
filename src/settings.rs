/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Tol, DEFAULT_TOLERANCE};
use crate::{RowReducer, LinearSystemSolver, Orthogonalizer, VectorSpace};
use crate::GlobalLogger;

/// Root settings object.
///
/// Every field has a default, so `{}` is a valid (if boring) config.
///
/// ```yaml
/// zero-tolerance: 1e-10
/// verbosity: 0
/// ```
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Absolute threshold below which a value is treated as zero.
    ///
    /// This governs pivot selection, rank, span membership, and the dropping of
    /// dependent vectors during Gram-Schmidt. Must be positive and finite.
    #[serde(default = "default_zero_tolerance")]
    pub zero_tolerance: f64,

    /// Positive values turn on trace-level logging for the linspan crates.
    #[serde(default)]
    pub verbosity: i32,
}
fn default_zero_tolerance() -> f64 { DEFAULT_TOLERANCE }

impl Default for Settings {
    fn default() -> Self {
        Settings {
            zero_tolerance: default_zero_tolerance(),
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Validated form of `zero_tolerance`.
    pub fn tol(&self) -> crate::Result<Tol> { Tol::new(self.zero_tolerance) }

    pub fn row_reducer(&self) -> crate::Result<RowReducer> {
        Ok(RowReducer::with_tolerance(self.tol()?))
    }

    pub fn solver(&self) -> crate::Result<LinearSystemSolver> {
        Ok(LinearSystemSolver::with_tolerance(self.tol()?))
    }

    pub fn orthogonalizer(&self) -> crate::Result<Orthogonalizer> {
        Ok(Orthogonalizer::with_tolerance(self.tol()?))
    }

    /// An empty vector space.
    pub fn vector_space(&self) -> crate::Result<VectorSpace> {
        Ok(VectorSpace::with_tolerance(self.tol()?))
    }

    /// A logger configured with this verbosity. Call `apply` on it to install it.
    pub fn logger(&self) -> GlobalLogger {
        let mut logger = GlobalLogger::default();
        logger.verbosity(self.verbosity);
        logger
    }
}

/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result};

/// Absolute tolerance used by default for every comparison against zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// An absolute tolerance for deciding when a float "is" zero.
///
/// Everything in this crate that makes a zero/nonzero decision (pivot
/// selection, rank, span membership, linear dependence) takes its epsilon
/// from one of these, so that a single setting controls all of them.
// a silly little newtype so that functions never take two bare f64s
// that could be swapped
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tol(f64);

impl Tol {
    /// `eps` must be positive and finite.
    pub fn new(eps: f64) -> Result<Tol> {
        if !(eps > 0.0 && eps.is_finite()) {
            throw!(Error::InvalidTolerance(eps));
        }
        Ok(Tol(eps))
    }

    #[inline]
    pub fn eps(&self) -> f64 { self.0 }

    /// `|x| <= eps`.
    ///
    /// A value "exceeds the tolerance" exactly when this is false.
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool { x.abs() <= self.0 }

    #[inline]
    pub fn is_one(&self, x: f64) -> bool { self.is_zero(x - 1.0) }
}

impl Default for Tol {
    fn default() -> Self { Tol(DEFAULT_TOLERANCE) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_eps() {
        for &eps in &[0.0, -1e-3, ::std::f64::NAN, ::std::f64::INFINITY] {
            match Tol::new(eps) {
                Err(Error::InvalidTolerance(_)) => {},
                r => panic!("expected InvalidTolerance for {}, got {:?}", eps, r),
            }
        }
    }

    #[test]
    fn predicates() {
        let tol = Tol::new(1e-5).unwrap();
        assert!(tol.is_zero(0.0));
        assert!(tol.is_zero(-1e-6));
        assert!(tol.is_zero(1e-5));
        assert!(!tol.is_zero(2e-5));
        assert!(tol.is_one(1.0 + 1e-7));
        assert!(!tol.is_one(1.001));

        assert_eq!(Tol::default().eps(), DEFAULT_TOLERANCE);
        assert!(!Tol::default().is_zero(1e-8));
    }
}

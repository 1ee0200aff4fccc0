/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for floating point data.
//!
//! ```text
//! assert_close!(a, b);                     // abs = DEFAULT_ABS_TOL
//! assert_close!(abs=1e-8, a, b);
//! assert_close!(rel=1e-12, abs=1e-8, a, b, "context: {}", x);
//! ```
//!
//! Two scalars are close when they are within *either* tolerance.

#[macro_use]
extern crate failure;

use ::std::fmt;

/// Absolute tolerance used when a test names neither `abs` nor `rel`.
pub const DEFAULT_ABS_TOL: f64 = 1e-10;

#[macro_export]
macro_rules! assert_close {
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[$abs, $rel] $($rest)+}
    };
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[$abs, $rel] $($rest)+}
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[$abs, 0.0] $($rest)+}
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!{[0.0, $rel] $($rest)+}
    };
    ($($rest:tt)+) => {
        $crate::__assert_close_impl!{[$crate::DEFAULT_ABS_TOL, 0.0] $($rest)+}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_impl {
    ([$abs:expr, $rel:expr] $a:expr, $b:expr $(,)*) => {
        $crate::__assert_close_impl!{[$abs, $rel] $a, $b, "not nearly equal!"}
    };
    ([$abs:expr, $rel:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let (a, b) = (&$a, &$b);
        let tol = $crate::Tolerances { abs: $abs, rel: $rel };
        if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
            panic!(
                "{} (tolerances: abs={}, rel={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.abs, tol.rel, a, b, e,
            );
        }
    }};
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// Scalar comparison.
    ///
    /// NaN is never close to anything. Infinities are only close to themselves.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        assert!(self.abs >= 0.0 && self.rel >= 0.0, "negative tolerance: {:?}", self);
        if a == b {
            return true;
        }
        if !(a.is_finite() && b.is_finite()) {
            return false;
        }
        let scale = f64::max(a.abs(), b.abs());
        (a - b).abs() <= f64::max(self.abs, self.rel * scale)
    }
}

/// The first element that failed a comparison.
#[derive(Debug, Fail)]
pub struct CheckCloseError {
    /// Flat index of the failing element, if the data had more than one.
    pub index: Option<usize>,
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (left, right) = self.values;
        if let Some(index) = self.index {
            write!(f, "first failure at element {}:\n", index)?;
        }
        write!(f, "  left: {:?}\n right: {:?}\n  diff: {:?}", left, right, (left - right).abs())
    }
}

impl CheckCloseError {
    fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of `self` and `other` are close.
    ///
    /// Shape mismatches are test bugs, and panic.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match tol.is_close(*self, *other) {
            true => Ok(()),
            false => Err(CheckCloseError { index: None, values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        CheckClose::check_close(*self, *other, tol)
    }
}

impl CheckClose for [f64] {
    fn check_close(&self, other: &[f64], tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at(i))?;
        }
        Ok(())
    }
}

impl CheckClose for Vec<f64> {
    fn check_close(&self, other: &Vec<f64>, tol: Tolerances) -> Result<(), CheckCloseError> {
        self[..].check_close(&other[..], tol)
    }
}

impl CheckClose<[f64]> for Vec<f64> {
    fn check_close(&self, other: &[f64], tol: Tolerances) -> Result<(), CheckCloseError> {
        self[..].check_close(other, tol)
    }
}

macro_rules! gen_array_impls {
    ($($n:tt)*) => {$(
        impl CheckClose for [f64; $n] {
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
                self[..].check_close(&other[..], tol)
            }
        }
    )*};
}

gen_array_impls! {
    1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
}

/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, Tol};
use crate::{check_index, check_same_len};

use ::linspan_assert_close::{CheckClose, CheckCloseError, Tolerances};
use ::std::cmp::Ordering;
use ::std::iter::FromIterator;
use ::std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use ::serde::{Serialize, Deserialize};

/// Dense vector of fixed length.
///
/// The elements may be modified in place, but the length is fixed
/// at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self { Vector { data } }

    pub fn zeros(len: usize) -> Self { Vector { data: vec![0.0; len] } }

    /// The `index`th standard basis vector of length `len`.
    pub fn unit(len: usize, index: usize) -> Result<Self> {
        check_index("unit vector", index, len)?;
        let mut out = Vector::zeros(len);
        out.data[index] = 1.0;
        Ok(out)
    }

    #[inline]
    pub fn len(&self) -> usize { self.data.len() }
    #[inline]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn as_slice(&self) -> &[f64] { &self.data }
    pub fn as_mut_slice(&mut self) -> &mut [f64] { &mut self.data }
    pub fn into_inner(self) -> Vec<f64> { self.data }
    pub fn iter(&self) -> ::std::slice::Iter<f64> { self.data.iter() }

    pub fn get(&self, index: usize) -> Result<f64> {
        check_index("vector", index, self.len())?;
        Ok(self.data[index])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        check_index("vector", index, self.len())?;
        self.data[index] = value;
        Ok(())
    }
}

/// Arithmetic.
impl Vector {
    pub fn scale(&mut self, c: f64) {
        for x in &mut self.data {
            *x *= c;
        }
    }

    pub fn scaled(&self, c: f64) -> Vector {
        let mut out = self.clone();
        out.scale(c);
        out
    }

    pub fn add(&mut self, other: &Vector) -> Result<()> { self.add_scaled(1.0, other) }

    pub fn subtract(&mut self, other: &Vector) -> Result<()> { self.add_scaled(-1.0, other) }

    /// `self += c * other`, without a temporary.
    pub fn add_scaled(&mut self, c: f64, other: &Vector) -> Result<()> {
        check_same_len("vector arithmetic", self.len(), other.len())?;
        for (a, b) in izip!(&mut self.data, &other.data) {
            *a += c * b;
        }
        Ok(())
    }

    /// Inner product.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        check_same_len("inner product", self.len(), other.len())?;
        Ok(izip!(&self.data, &other.data).map(|(a, b)| a * b).sum())
    }

    pub fn sqnorm(&self) -> f64 { self.data.iter().map(|x| x * x).sum() }

    /// Euclidean length.
    pub fn norm(&self) -> f64 { self.sqnorm().sqrt() }

    /// Scale to unit length.
    ///
    /// Only an exactly-zero vector is refused; callers that care about
    /// nearly-zero vectors should test `is_zero` first.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm == 0.0 {
            throw!(Error::ArithmeticDegenerate("cannot normalize the zero vector"));
        }
        self.scale(norm.recip());
        Ok(())
    }

    pub fn normalized(&self) -> Result<Vector> {
        let mut out = self.clone();
        out.normalize()?;
        Ok(out)
    }

    /// Whether the length is within tolerance of zero.
    pub fn is_zero(&self, tol: Tol) -> bool { tol.is_zero(self.norm()) }
}

/// Geometry.
impl Vector {
    /// Angle in radians, in `[0, pi]`.
    ///
    /// A shorter vector is treated as though it were padded with trailing zeros
    /// to the length of the longer one.
    pub fn angle_between(&self, other: &Vector) -> Result<f64> {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            throw!(Error::ArithmeticDegenerate("angle with a zero vector is undefined"));
        }
        // zip stops at the shorter one, which is exactly the zero padding
        let dot: f64 = izip!(&self.data, &other.data).map(|(a, b)| a * b).sum();
        // roundoff can push the cosine slightly past +-1
        let cos = f64::max(-1.0, f64::min(1.0, dot / denom));
        Ok(cos.acos())
    }

    /// Cross product of two 3-vectors.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.len() != 3 || other.len() != 3 {
            throw!(Error::DimensionMismatch(format!(
                "cross product needs two 3-vectors (got lengths {} and {})",
                self.len(), other.len(),
            )));
        }
        let (u, v) = (&self.data, &other.data);
        Ok(Vector::new(vec![
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }
}

impl Vector {
    /// Orders vectors by where their exact nonzero entries are.
    ///
    /// Shorter vectors come first. Otherwise the first position where one vector
    /// has a nonzero and the other doesn't decides, and the one with the nonzero
    /// comes first; sorting rows by this floats rows with early leading entries
    /// to the top. Values are otherwise ignored.
    pub fn cmp_support(&self, other: &Vector) -> Ordering {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => {},
            ord => return ord,
        }
        for (&a, &b) in izip!(&self.data, &other.data) {
            match (a != 0.0, b != 0.0) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {},
            }
        }
        Ordering::Equal
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self { Vector::new(data) }
}

impl<'a> From<&'a [f64]> for Vector {
    fn from(data: &'a [f64]) -> Self { Vector::new(data.to_vec()) }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = ::std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter { self.data.iter() }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, index: usize) -> &f64 { &self.data[index] }
}

impl IndexMut<usize> for Vector {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut f64 { &mut self.data[index] }
}

impl CheckClose for Vector {
    fn check_close(&self, other: &Vector, tol: Tolerances) -> ::std::result::Result<(), CheckCloseError> {
        self.as_slice().check_close(other.as_slice(), tol)
    }
}

/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Matrices with known properties.

use ::linspan::{Matrix, Vector};
use ::linspan::prelude::*;

fn from_fn((rows, cols): (usize, usize), f: impl Fn(usize, usize) -> f64) -> Matrix {
    let data = (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))).map(|(r, c)| f(r, c)).collect();
    Matrix::from_row_major_data((rows, cols), data).unwrap()
}

pub fn ones(dims: (usize, usize)) -> Matrix { from_fn(dims, |_, _| 1.0) }

/// `i + j + 1`, with `n` added along the diagonal.
pub fn invertible(n: usize) -> Matrix {
    from_fn((n, n), |r, c| {
        let diag = if r == c { n as f64 } else { 0.0 };
        (r + c) as f64 + 1.0 + diag
    })
}

/// `10 i + j`, except that the last row is `2 * row_0 + row_1`.
pub fn non_invertible(n: usize) -> Matrix {
    // (for n = 2 the "last row" would be row 1 itself)
    assert!(n >= 3);
    from_fn((n, n), |r, c| {
        let entry = |r: usize| (10 * r + c) as f64;
        match r == n - 1 {
            true => 2.0 * entry(0) + entry(1),
            false => entry(r),
        }
    })
}

pub fn symmetric(n: usize) -> Matrix {
    from_fn((n, n), |r, c| {
        let (lo, hi) = (usize::min(r, c), usize::max(r, c));
        (10 * lo + hi + 1) as f64
    })
}

/// `10 i + j + 1`
pub fn rectangular(dims: (usize, usize)) -> Matrix {
    from_fn(dims, |r, c| (10 * r + c + 1) as f64)
}

/// `n x n`, of exact rank `rank`: the first `rank` rows are independent, and
/// each later row is a sum of two of them.
pub fn with_rank(n: usize, rank: usize) -> Matrix {
    assert!(rank >= 1 && rank <= n);
    let base = invertible(n);
    let mut rows = base.row_vectors();
    for r in rank..n {
        let mut row = rows[r % rank].clone();
        row.add(&rows[(r + 1) % rank]).unwrap();
        rows[r] = row;
    }
    Matrix::from_row_vectors(&rows).unwrap()
}

pub fn random_vector(n: usize) -> Vector {
    (0..n).map(|_| (::rand::random::<f64>() - 0.5) * 2.0).collect()
}

pub fn random_matrix((rows, cols): (usize, usize)) -> Matrix {
    from_fn((rows, cols), |_, _| (::rand::random::<f64>() - 0.5) * 2.0)
}

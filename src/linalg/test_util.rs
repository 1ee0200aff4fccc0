/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Random test inputs.

use crate::{Matrix, Vector};
use ::rand::Rng;

/// Uniform in `[-1, 1)`.
fn random_f64() -> f64 { (::rand::random::<f64>() - 0.5) * 2.0 }

pub fn random_vector(n: usize) -> Vector {
    (0..n).map(|_| random_f64()).collect()
}

pub fn random_vectors(count: usize, n: usize) -> Vec<Vector> {
    (0..count).map(|_| random_vector(n)).collect()
}

pub fn random_matrix((rows, cols): (usize, usize)) -> Matrix {
    let data = (0..rows * cols).map(|_| random_f64()).collect();
    Matrix::from_row_major_data((rows, cols), data).unwrap()
}

/// Strictly diagonally dominant, hence invertible and well-conditioned.
pub fn invertible(n: usize) -> Matrix {
    let mut m = random_matrix((n, n));
    for i in 0..n {
        let sign = if ::rand::thread_rng().gen() { 1.0 } else { -1.0 };
        m[(i, i)] = sign * (n as f64 + 1.0);
    }
    m
}

/// Integer entries, with the last row a sum of two others.
pub fn non_invertible(n: usize) -> Matrix {
    assert!(n >= 2);
    let mut rng = ::rand::thread_rng();
    let mut m = Matrix::zeros((n, n)).unwrap();
    for r in 0..n - 1 {
        for c in 0..n {
            m[(r, c)] = rng.gen_range(-5, 6) as f64;
        }
    }
    for c in 0..n {
        m[(n - 1, c)] = m[(0, c)] + m[(n - 2, c)];
    }
    m
}

/// A random `rows x cols` matrix of rank `rank`.
pub fn with_rank((rows, cols): (usize, usize), rank: usize) -> Matrix {
    assert!(rank >= 1 && rank <= usize::min(rows, cols));
    let left = random_matrix((rows, rank));
    let right = random_matrix((rank, cols));
    left.matmul(&right).unwrap()
}

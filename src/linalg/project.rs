/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, Tol, Matrix, MatrixLike, Vector, VectorSpace};
use crate::{check_same_len, matmul};

/// Gram-Schmidt and orthogonal projections.
#[derive(Debug, Copy, Clone, Default)]
pub struct Orthogonalizer {
    tol: Tol,
}

impl Orthogonalizer {
    pub fn new() -> Self { Default::default() }

    pub fn with_tolerance(tol: Tol) -> Self { Orthogonalizer { tol } }

    pub fn tolerance(&self) -> Tol { self.tol }

    /// Projection of `vector` onto the line through `base`.
    ///
    /// Projecting onto a (nearly) zero vector gives zero.
    pub fn project_onto(&self, vector: &Vector, base: &Vector) -> Result<Vector> {
        check_same_len("projection", vector.len(), base.len())?;
        if base.is_zero(self.tol) {
            return Ok(Vector::zeros(vector.len()));
        }
        Ok(base.scaled(vector.dot(base)? / base.sqnorm()))
    }

    /// Mutually orthogonal vectors with the same span as `vectors`.
    ///
    /// Each vector has its projections onto the previously accepted ones
    /// removed; whatever is left within tolerance of zero is dropped.
    pub fn orthogonal_basis_of(&self, vectors: &[Vector]) -> Result<Vec<Vector>> {
        let mut accepted: Vec<Vector> = vec![];
        for vector in vectors {
            let mut residual = vector.clone();
            for prev in &accepted {
                let projection = self.project_onto(&residual, prev)?;
                residual.subtract(&projection)?;
            }
            if residual.is_zero(self.tol) {
                trace!("dropping linearly dependent vector");
                continue;
            }
            accepted.push(residual);
        }
        Ok(accepted)
    }

    /// Like `orthogonal_basis_of`, with every vector normalized.
    pub fn orthonormal_basis_of(&self, vectors: &[Vector]) -> Result<Vec<Vector>> {
        self.orthogonal_basis_of(vectors)?
            .into_iter()
            .map(|v| v.normalized())
            .collect()
    }

    pub fn orthogonal_basis_of_space(&self, space: &VectorSpace) -> Result<Vec<Vector>> {
        self.orthogonal_basis_of(space.basis())
    }

    pub fn orthonormal_basis_of_space(&self, space: &VectorSpace) -> Result<Vec<Vector>> {
        self.orthonormal_basis_of(space.basis())
    }

    /// The matrix `P = Q Q^T` of orthogonal projection onto `space`.
    ///
    /// The columns of `Q` are an orthonormal basis. A space with no basis
    /// vectors projects everything to zero.
    pub fn projection_matrix(&self, space: &VectorSpace) -> Result<Matrix> {
        let n = vector_dimension(space)?;
        let orthonormal = self.orthonormal_basis_of_space(space)?;
        if orthonormal.is_empty() {
            return Matrix::zeros((n, n));
        }
        let q = Matrix::from_column_vectors(&orthonormal)?;
        matmul(&q, &q.transpose())
    }

    /// Orthogonal projection of `vector` onto `space`, as a sum of projections
    /// onto an orthogonal basis.
    pub fn project_onto_space(&self, vector: &Vector, space: &VectorSpace) -> Result<Vector> {
        check_same_len("projection onto space", vector.len(), vector_dimension(space)?)?;
        let mut out = Vector::zeros(vector.len());
        for base in self.orthogonal_basis_of_space(space)? {
            out.add(&self.project_onto(vector, &base)?)?;
        }
        Ok(out)
    }

    /// Same as `project_onto_space`, computed through `projection_matrix`.
    pub fn project_with_matrix(&self, vector: &Vector, space: &VectorSpace) -> Result<Vector> {
        check_same_len("projection onto space", vector.len(), vector_dimension(space)?)?;
        self.projection_matrix(space)?.multiply(vector)
    }
}

fn vector_dimension(space: &VectorSpace) -> Result<usize> {
    match space.dimension_of_vectors() {
        Some(n) => Ok(n),
        None => throw!(Error::DimensionMismatch("space has no vectors, so no dimension".to_string())),
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::test_util::{random_vector, random_vectors};

    fn v(data: &[f64]) -> Vector { Vector::from(data) }

    fn assert_orthogonal(vectors: &[Vector]) {
        for (i, a) in vectors.iter().enumerate() {
            for b in &vectors[i + 1..] {
                assert_close!(abs=1e-9, a.dot(b).unwrap(), 0.0);
            }
        }
    }

    fn plane() -> VectorSpace {
        VectorSpace::from_vectors(&[v(&[1.0, 0.0, 0.0]), v(&[0.0, 1.0, 0.0])], Tol::default()).unwrap()
    }

    #[test]
    fn onto_vector() {
        let o = Orthogonalizer::new();
        let p = o.project_onto(&v(&[2.0, 3.0]), &v(&[4.0, 0.0])).unwrap();
        assert_close!(p, v(&[2.0, 0.0]));
        assert_eq!(o.project_onto(&v(&[2.0, 3.0]), &Vector::zeros(2)).unwrap(), Vector::zeros(2));
        assert!(matches!(o.project_onto(&v(&[2.0]), &v(&[1.0, 1.0])), Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn gram_schmidt() {
        let o = Orthogonalizer::new();
        let input = vec![v(&[1.0, 1.0, 0.0]), v(&[1.0, 0.0, 1.0])];

        let orthogonal = o.orthogonal_basis_of(&input).unwrap();
        assert_eq!(orthogonal.len(), 2);
        assert_eq!(orthogonal[0], input[0]);
        assert_orthogonal(&orthogonal);

        let orthonormal = o.orthonormal_basis_of(&input).unwrap();
        assert_eq!(orthonormal.len(), 2);
        assert_orthogonal(&orthonormal);
        for u in &orthonormal {
            assert_close!(u.norm(), 1.0);
        }
    }

    #[test]
    fn gram_schmidt_drops_dependent() {
        let o = Orthogonalizer::new();
        let input = vec![
            Vector::zeros(3),
            v(&[1.0, 2.0, 0.0]),
            v(&[2.0, 4.0, 0.0]),
            v(&[0.0, 1.0, 0.0]),
            v(&[5.0, 5.0, 0.0]),
        ];
        let basis = o.orthogonal_basis_of(&input).unwrap();
        assert_eq!(basis.len(), 2);
        assert_orthogonal(&basis);
        assert!(o.orthogonal_basis_of(&[]).unwrap().is_empty());
    }

    #[test]
    fn random_gram_schmidt() {
        let o = Orthogonalizer::new();
        for &(count, len) in &[(3, 5), (5, 5), (6, 4)] {
            let input = random_vectors(count, len);
            let basis = o.orthonormal_basis_of(&input).unwrap();
            assert_eq!(basis.len(), usize::min(count, len));
            assert_orthogonal(&basis);

            // same span
            let space = VectorSpace::from_vectors(&basis, Tol::new(1e-8).unwrap()).unwrap();
            for x in &input {
                assert!(space.contains(x).unwrap());
            }
        }
    }

    #[test]
    fn projection_matrices() {
        let o = Orthogonalizer::new();
        let full = VectorSpace::from_vectors(&[
            v(&[1.0, 0.0, 0.0]),
            v(&[0.0, 1.0, 0.0]),
            v(&[0.0, 0.0, 1.0]),
        ], Tol::default()).unwrap();
        assert_close!(o.projection_matrix(&full).unwrap(), Matrix::eye(3).unwrap());
        assert_close!(o.projection_matrix(&plane()).unwrap(), Matrix::diagonal(&[1.0, 1.0, 0.0]).unwrap());

        let trivial = VectorSpace::trivial(2, Tol::default());
        assert_eq!(o.projection_matrix(&trivial).unwrap(), Matrix::zeros((2, 2)).unwrap());
        assert!(matches!(o.projection_matrix(&VectorSpace::new()), Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn projection_is_idempotent() {
        let o = Orthogonalizer::new();
        let space = VectorSpace::from_vectors(&random_vectors(2, 4), Tol::default()).unwrap();
        let p = o.projection_matrix(&space).unwrap();
        assert_close!(abs=1e-9, p.matmul(&p).unwrap(), p.clone());
        assert_close!(abs=1e-9, p.to_transpose().unwrap(), p.clone());
    }

    #[test]
    fn onto_space() {
        let o = Orthogonalizer::new();
        let x = v(&[3.0, -4.0, 5.0]);
        assert_close!(o.project_onto_space(&x, &plane()).unwrap(), v(&[3.0, -4.0, 0.0]));
        assert_close!(o.project_with_matrix(&x, &plane()).unwrap(), v(&[3.0, -4.0, 0.0]));

        for _ in 0..5 {
            let space = VectorSpace::from_vectors(&random_vectors(3, 5), Tol::default()).unwrap();
            let x = random_vector(5);
            let by_sum = o.project_onto_space(&x, &space).unwrap();
            let by_matrix = o.project_with_matrix(&x, &space).unwrap();
            assert_close!(abs=1e-9, by_sum, by_matrix);

            // the residual is orthogonal to the space
            let mut residual = x.clone();
            residual.subtract(&by_sum).unwrap();
            for b in space.basis() {
                assert_close!(abs=1e-9, residual.dot(b).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn onto_space_dimension_checks() {
        let o = Orthogonalizer::new();
        let x = v(&[1.0, 2.0]);
        assert!(matches!(o.project_onto_space(&x, &plane()), Err(Error::DimensionMismatch(_))));
        assert!(matches!(o.project_with_matrix(&x, &plane()), Err(Error::DimensionMismatch(_))));
        assert!(matches!(o.project_onto_space(&x, &VectorSpace::new()), Err(Error::DimensionMismatch(_))));
        assert_eq!(
            o.project_onto_space(&x, &VectorSpace::trivial(2, Tol::default())).unwrap(),
            Vector::zeros(2),
        );
    }
}

//! Lattice basis representation
//!
//! A basis is an ordered sequence of row vectors of equal dimension. Order
//! matters: index position is used by the reduction algorithms and by
//! size-reduction lookups.

use std::fmt;

use rand::Rng;

use crate::error::{ReduceError, Result};
use crate::vector;

/// A lattice basis represented as a matrix of row vectors
///
/// Each row b_i is a basis vector in R^m. The lattice is the set of integer
/// combinations L(B) = {Σ x_i b_i : x_i ∈ Z}. Rank `n` may be smaller than
/// the ambient dimension `m`.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    /// Basis vectors as rows (n vectors of dimension m)
    vectors: Vec<Vec<f64>>,
    /// Number of basis vectors (rank)
    n: usize,
    /// Dimension of the ambient space
    m: usize,
}

impl Basis {
    /// Create a new basis from row vectors
    ///
    /// Fails with `DimensionMismatch` if the rows do not all share the first
    /// row's length, or if the basis is empty.
    pub fn new(vectors: Vec<Vec<f64>>) -> Result<Self> {
        if vectors.is_empty() {
            return Err(ReduceError::DimensionMismatch { left: 0, right: 0 });
        }
        let m = vectors[0].len();
        for v in &vectors {
            if v.len() != m {
                return Err(ReduceError::DimensionMismatch {
                    left: m,
                    right: v.len(),
                });
            }
        }
        let n = vectors.len();
        Ok(Self { vectors, n, m })
    }

    /// Create a basis from integer rows (convenient in tests and the CLI)
    pub fn from_rows<T: Into<f64> + Copy>(rows: &[Vec<T>]) -> Result<Self> {
        let vectors = rows
            .iter()
            .map(|row| row.iter().map(|&x| x.into()).collect())
            .collect();
        Self::new(vectors)
    }

    /// Create a random basis with integer entries in [-max_abs, max_abs]
    ///
    /// Intended for tests and benchmarks. Entries are drawn uniformly; the
    /// result is linearly independent with overwhelming probability for the
    /// sizes used in practice.
    pub fn random<R: Rng>(n: usize, m: usize, max_abs: i64, rng: &mut R) -> Self {
        let vectors = (0..n)
            .map(|_| {
                (0..m)
                    .map(|_| rng.gen_range(-max_abs..=max_abs) as f64)
                    .collect()
            })
            .collect();
        Self { vectors, n, m }
    }

    /// Subset-sum (knapsack) lattice for weights `a` and target `s`
    ///
    /// Rows 0..a.len() carry 2 on the diagonal and a_i in the last column;
    /// the final row is all ones with s in the last column. A subset of `a`
    /// summing to `s` shows up as a short vector with ±1 entries and a zero
    /// last coordinate.
    pub fn knapsack(a: &[i64], s: i64) -> Self {
        let n = a.len() + 1;
        let m = a.len() + 1;

        let mut vectors = vec![vec![0.0; m]; n];
        for (i, &weight) in a.iter().enumerate() {
            vectors[i][i] = 2.0;
            vectors[i][m - 1] = weight as f64;
        }
        for j in 0..a.len() {
            vectors[n - 1][j] = 1.0;
        }
        vectors[n - 1][m - 1] = s as f64;

        Self { vectors, n, m }
    }

    /// Number of basis vectors (rank)
    pub fn rank(&self) -> usize {
        self.n
    }

    /// Dimension of the ambient space
    pub fn dimension(&self) -> usize {
        self.m
    }

    /// Vector at index i
    pub fn get(&self, i: usize) -> &[f64] {
        &self.vectors[i]
    }

    /// All vectors as rows
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// Swap two basis vectors
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.vectors.swap(i, j);
    }

    /// Inner product ⟨b_i, b_j⟩
    pub fn inner_product(&self, i: usize, j: usize) -> f64 {
        // rows share a dimension by construction
        debug_assert_eq!(self.vectors[i].len(), self.vectors[j].len());
        vector::dot(&self.vectors[i], &self.vectors[j]).unwrap_or(0.0)
    }

    /// Squared norm ‖b_i‖²
    pub fn norm_squared(&self, i: usize) -> f64 {
        self.inner_product(i, i)
    }

    /// Size-reduction step: b_i -= q * b_j
    pub(crate) fn reduce_vector(&mut self, i: usize, j: usize, q: f64) {
        for k in 0..self.m {
            self.vectors[i][k] -= q * self.vectors[j][k];
        }
    }

    /// Determinant of the Gram matrix G[i][j] = ⟨b_i, b_j⟩
    ///
    /// Invariant under the unimodular transformations LLL applies, so equal
    /// (up to floating-point error) before and after reduction. Computed by
    /// Gaussian elimination with partial pivoting; a (near-)singular Gram
    /// matrix indicates linear dependence.
    pub fn gram_determinant(&self) -> f64 {
        let n = self.n;
        let mut g: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| self.inner_product(i, j)).collect())
            .collect();

        let mut det = 1.0;
        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&a, &b| g[a][col].abs().total_cmp(&g[b][col].abs()))
                .unwrap_or(col);
            if g[pivot_row][col] == 0.0 {
                return 0.0;
            }
            if pivot_row != col {
                g.swap(pivot_row, col);
                det = -det;
            }
            det *= g[col][col];
            for row in col + 1..n {
                let factor = g[row][col] / g[col][col];
                for k in col..n {
                    g[row][k] -= factor * g[col][k];
                }
            }
        }
        det
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Basis ({}×{}):", self.n, self.m)?;
        for (i, v) in self.vectors.iter().enumerate() {
            write!(f, "  b_{}: [", i)?;
            for (j, x) in v.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_basis_creation() {
        let basis = Basis::from_rows(&[vec![1i32, 0, 3], vec![0, 1, 5], vec![0, 0, 7]]).unwrap();
        assert_eq!(basis.rank(), 3);
        assert_eq!(basis.dimension(), 3);
    }

    #[test]
    fn test_basis_rejects_ragged_rows() {
        let err = Basis::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, ReduceError::DimensionMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_basis_rejects_empty() {
        assert!(Basis::new(vec![]).is_err());
    }

    #[test]
    fn test_inner_product() {
        let basis = Basis::from_rows(&[vec![1i32, 2, 3], vec![4, 5, 6]]).unwrap();
        // ⟨b_0, b_0⟩ = 1 + 4 + 9 = 14
        assert_eq!(basis.norm_squared(0), 14.0);
        // ⟨b_0, b_1⟩ = 4 + 10 + 18 = 32
        assert_eq!(basis.inner_product(0, 1), 32.0);
    }

    #[test]
    fn test_reduce_vector() {
        let mut basis = Basis::from_rows(&[vec![1i32, 0], vec![3, 1]]).unwrap();
        basis.reduce_vector(1, 0, 3.0);
        assert_eq!(basis.get(1), &[0.0, 1.0]);
    }

    #[test]
    fn test_gram_determinant_identity() {
        let basis =
            Basis::from_rows(&[vec![1i32, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
        assert!((basis.gram_determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_gram_determinant_dependent_rows() {
        let basis = Basis::from_rows(&[vec![1i32, 0], vec![2, 0]]).unwrap();
        assert!(basis.gram_determinant().abs() < 1e-9);
    }

    #[test]
    fn test_random_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let basis = Basis::random(4, 6, 10, &mut rng);
        assert_eq!(basis.rank(), 4);
        assert_eq!(basis.dimension(), 6);
        for i in 0..4 {
            assert!(basis.get(i).iter().all(|x| x.abs() <= 10.0));
        }
    }

    #[test]
    fn test_knapsack_shape() {
        let basis = Basis::knapsack(&[3, 5, 7], 12);
        assert_eq!(basis.rank(), 4);
        assert_eq!(basis.dimension(), 4);
        assert_eq!(basis.get(0), &[2.0, 0.0, 0.0, 3.0]);
        assert_eq!(basis.get(1), &[0.0, 2.0, 0.0, 5.0]);
        assert_eq!(basis.get(3), &[1.0, 1.0, 1.0, 12.0]);
    }
}

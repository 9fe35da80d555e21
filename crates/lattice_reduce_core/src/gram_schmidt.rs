//! Gram-Schmidt orthogonalization
//!
//! Given a basis B = [b_0, ..., b_{n-1}], computes orthogonal vectors b*_i
//! and projection coefficients μ_ij:
//!
//! ```text
//! b*_0 = b_0
//! b*_i = b_i - Σ_{j<i} μ_ij b*_j
//! μ_ij = ⟨b_i, b*_j⟩ / ⟨b*_j, b*_j⟩
//! ```
//!
//! The μ coefficients are stored in an explicit strictly lower-triangular
//! matrix indexed by (i, j), ragged so that row i has exactly i entries.
//!
//! # Normalization
//!
//! `compute_normalized` divides each output vector by its own norm, producing
//! an orthonormal basis. Normalization is applied only after the full pass
//! completes: the μ matrix and the squared norms always refer to the
//! unnormalized orthogonal system, in either mode. LLL relies on that and
//! always uses the unnormalized `compute`.

use crate::basis::Basis;
use crate::error::{ReduceError, Result};
use crate::vector::{axpy, dot};

/// Squared-norm threshold below which an orthogonal vector counts as zero
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;

/// Gram-Schmidt orthogonalization of a basis
///
/// Transient derived data: recomputed from scratch every time LLL mutates the
/// basis, never persisted alongside it.
#[derive(Debug, Clone)]
pub struct GramSchmidt {
    /// Orthogonal vectors b*_i, parallel index-for-index to the input basis
    pub orthogonal: Vec<Vec<f64>>,
    /// Strictly lower-triangular μ matrix: mu[i] has length i
    mu: Vec<Vec<f64>>,
    /// Squared norms ‖b*_i‖² of the unnormalized orthogonal vectors
    pub b_star_norms_sq: Vec<f64>,
    /// Number of vectors
    n: usize,
}

impl GramSchmidt {
    /// Orthogonalize a basis (no normalization)
    ///
    /// Fails with `DegenerateBasis` naming the first vector whose orthogonal
    /// component is (near-)zero, which signals a zero vector or linear
    /// dependence in the input. Never returns NaN/Inf components.
    pub fn compute(basis: &Basis) -> Result<Self> {
        Self::compute_with(basis, false)
    }

    /// Orthogonalize and normalize each output vector to unit length
    ///
    /// μ and the squared norms still describe the unnormalized system; only
    /// the `orthogonal` vectors are rescaled.
    pub fn compute_normalized(basis: &Basis) -> Result<Self> {
        Self::compute_with(basis, true)
    }

    fn compute_with(basis: &Basis, normalize: bool) -> Result<Self> {
        let n = basis.rank();

        let mut orthogonal: Vec<Vec<f64>> = Vec::with_capacity(n);
        let mut mu: Vec<Vec<f64>> = Vec::with_capacity(n);
        let mut b_star_norms_sq: Vec<f64> = Vec::with_capacity(n);

        for i in 0..n {
            let mut b_star = basis.get(i).to_vec();
            let mut mu_row = Vec::with_capacity(i);

            for j in 0..i {
                // ⟨b_i, b*_j⟩ / ‖b*_j‖²; the denominator was already checked
                // against DEGENERATE_EPS when vector j was processed
                let mu_ij = dot(basis.get(i), &orthogonal[j])? / b_star_norms_sq[j];
                axpy(&mut b_star, &orthogonal[j], -mu_ij);
                mu_row.push(mu_ij);
            }

            let norm_sq = dot(&b_star, &b_star)?;
            if norm_sq <= DEGENERATE_EPS {
                return Err(ReduceError::DegenerateBasis { index: i });
            }

            mu.push(mu_row);
            b_star_norms_sq.push(norm_sq);
            orthogonal.push(b_star);
        }

        if normalize {
            for (v, &norm_sq) in orthogonal.iter_mut().zip(b_star_norms_sq.iter()) {
                let inv = 1.0 / norm_sq.sqrt();
                for x in v.iter_mut() {
                    *x *= inv;
                }
            }
        }

        Ok(Self {
            orthogonal,
            mu,
            b_star_norms_sq,
            n,
        })
    }

    /// Number of vectors
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Projection coefficient μ_kj
    ///
    /// # Panics
    /// μ_kj is only defined for j < k.
    pub fn mu(&self, k: usize, j: usize) -> f64 {
        assert!(j < k, "mu[{}][{}]: only defined for j < k", k, j);
        self.mu[k][j]
    }

    /// Verify pairwise orthogonality of the output vectors (diagnostic)
    pub fn check_orthogonality(&self, tolerance: f64) -> bool {
        for i in 0..self.n {
            for j in 0..i {
                let d = dot(&self.orthogonal[i], &self.orthogonal[j]).unwrap_or(f64::INFINITY);
                if d.abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

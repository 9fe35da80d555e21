//! Two-generator ("Gaussian") lattice reduction
//!
//! Reduces a rank-2 lattice basis by repeated integer-multiple subtraction,
//! the vector generalization of the Euclidean algorithm. The loop terminates
//! because ‖v2‖ strictly decreases on every iteration with q ≠ 0.

use crate::error::{ReduceError, Result};
use crate::gram_schmidt::DEGENERATE_EPS;
use crate::vector::{axpy, dot, norm};

/// Reduce a pair of generators of a rank-2 lattice
///
/// Returns the reduced pair ordered shortest-first. The output spans the same
/// lattice as the input. Fails with `DimensionMismatch` if the vectors differ
/// in length, and with `DegenerateBasis` if the shorter generator is the zero
/// vector.
pub fn reduce_pair(v1: &[f64], v2: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut v1 = v1.to_vec();
    let mut v2 = v2.to_vec();

    loop {
        // keep v1 the (weakly) shorter generator
        if norm(&v1) > norm(&v2) {
            std::mem::swap(&mut v1, &mut v2);
        }

        let denom = dot(&v1, &v1)?;
        if denom <= DEGENERATE_EPS {
            return Err(ReduceError::DegenerateBasis { index: 0 });
        }

        let q = (dot(&v2, &v1)? / denom).round();
        if q == 0.0 {
            return Ok((v1, v2));
        }

        // candidate v2 - q * v1; accept only a strict decrease in ‖v2‖,
        // otherwise μ sits exactly on the ±1/2 boundary and the pair is
        // already reduced (accepting would oscillate forever)
        let mut candidate = v2.clone();
        axpy(&mut candidate, &v1, -q);
        if norm(&candidate) >= norm(&v2) {
            return Ok((v1, v2));
        }
        v2 = candidate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_pair_norms_never_increase() {
        let (r1, r2) = reduce_pair(&[4.0, 2.0], &[2.0, -2.0]).unwrap();

        // norms never increase
        let in_norms = [norm(&[4.0, 2.0]), norm(&[2.0, -2.0])];
        let max_in = in_norms[0].max(in_norms[1]);
        assert!(norm(&r1) <= max_in);
        assert!(norm(&r2) <= max_in);
        assert!(norm(&r1) <= norm(&r2));

        // fixed point: reducing the output returns it unchanged
        let (s1, s2) = reduce_pair(&r1, &r2).unwrap();
        assert_eq!(s1, r1);
        assert_eq!(s2, r2);
    }

    #[test]
    fn test_reduce_pair_already_reduced() {
        let (r1, r2) = reduce_pair(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert_eq!(r1, vec![1.0, 0.0]);
        assert_eq!(r2, vec![0.0, 1.0]);
    }

    #[test]
    fn test_reduce_pair_orders_by_norm() {
        let (r1, r2) = reduce_pair(&[0.0, 5.0], &[1.0, 0.0]).unwrap();
        assert!(norm(&r1) <= norm(&r2));
        assert_eq!(r1, vec![1.0, 0.0]);
    }

    #[test]
    fn test_reduce_pair_collinear_is_degenerate() {
        // collinear generators cancel down to the zero vector, which is a
        // rank deficiency, not a valid rank-2 basis
        let err = reduce_pair(&[6.0, 0.0], &[4.0, 0.0]).unwrap_err();
        assert_eq!(err, ReduceError::DegenerateBasis { index: 0 });
    }

    #[test]
    fn test_reduce_pair_zero_vector() {
        let err = reduce_pair(&[0.0, 0.0], &[0.0, 0.0]).unwrap_err();
        assert_eq!(err, ReduceError::DegenerateBasis { index: 0 });
    }

    #[test]
    fn test_reduce_pair_dimension_mismatch() {
        let err = reduce_pair(&[1.0, 0.0], &[1.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ReduceError::DimensionMismatch { .. }));
    }
}

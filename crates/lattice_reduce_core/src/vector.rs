//! Vector primitives: compensated dot product, Euclidean norm, AXPY
//!
//! All routines operate on `&[f64]` slices. The dot product checks dimensions
//! and uses Kahan summation to limit error accumulation during the repeated
//! Gram-Schmidt recomputations that LLL performs.

use crate::error::{ReduceError, Result};

/// Inner product ⟨u, v⟩ with Kahan-compensated summation
///
/// Fails with `DimensionMismatch` when the slices differ in length; never
/// silently truncates.
pub fn dot(u: &[f64], v: &[f64]) -> Result<f64> {
    if u.len() != v.len() {
        return Err(ReduceError::DimensionMismatch {
            left: u.len(),
            right: v.len(),
        });
    }

    let mut sum = 0.0;
    let mut c = 0.0; // compensation term
    for (&ui, &vi) in u.iter().zip(v.iter()) {
        let prod = ui * vi;
        let y = prod - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }
    Ok(sum)
}

/// Euclidean norm sqrt(Σ v_i²)
///
/// Never fails; the zero vector has norm 0.
pub fn norm(v: &[f64]) -> f64 {
    // dot of a slice with itself cannot dimension-mismatch
    dot(v, v).unwrap_or(0.0).sqrt()
}

/// AXPY update: y += alpha * x
///
/// Callers guarantee equal lengths.
pub(crate) fn axpy(y: &mut [f64], x: &[f64], alpha: f64) {
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi += alpha * xi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_basic() {
        let u = vec![1.0, 2.0, 3.0];
        let v = vec![4.0, 5.0, 6.0];
        assert_eq!(dot(&u, &v).unwrap(), 32.0);
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        let u = vec![1.0, 2.0];
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(
            dot(&u, &v),
            Err(ReduceError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_kahan_compensation() {
        // Naive summation loses the small terms here
        let u = vec![1e10, 1.0, 1.0, -1e10];
        let v = vec![1.0, 1.0, 1.0, 1.0];
        let result = dot(&u, &v).unwrap();
        assert!(result.is_finite());
        assert!((result - 2.0).abs() < 1.0);
    }

    #[test]
    fn test_norm() {
        assert_eq!(norm(&[3.0, 4.0]), 5.0);
        assert_eq!(norm(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(norm(&[]), 0.0);
    }

    #[test]
    fn test_axpy() {
        let mut y = vec![1.0, 2.0];
        axpy(&mut y, &[10.0, 20.0], 0.5);
        assert_eq!(y, vec![6.0, 12.0]);
    }
}

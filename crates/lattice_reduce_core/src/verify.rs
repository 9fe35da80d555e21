//! Reduction verifier
//!
//! Checks that a candidate basis satisfies the size-reduction and Lovász
//! conditions for a given factor, independently of how the basis was produced.
//! Used by tests to confirm LLL output and usable on externally supplied
//! bases.

use crate::basis::Basis;
use crate::error::Result;
use crate::gram_schmidt::GramSchmidt;
use crate::lll::LLLConfig;

/// Tolerance on both inequalities so that verification of just-reduced
/// floating-point output is stable under Gram-Schmidt recomputation
const VERIFY_EPS: f64 = 1e-9;

/// Which size-reduction coefficients to check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMode {
    /// Only |μ_{k,k-1}| ≤ 1/2: the weaker adjacent-pair condition, a
    /// commonly used necessary condition
    Adjacent,
    /// |μ_{k,j}| ≤ 1/2 for all j < k: full size reduction
    Full,
}

/// Check the adjacent-pair reduction conditions for factor `delta`
///
/// Returns `Ok(false)` as soon as any check fails; fails with
/// `InvalidParameter` for δ outside (0.25, 1) and propagates
/// `DegenerateBasis` if Gram-Schmidt fails on the candidate.
pub fn is_reduced(basis: &Basis, delta: f64) -> Result<bool> {
    is_reduced_with(basis, delta, VerifyMode::Adjacent)
}

/// Check the reduction conditions with an explicit size-reduction mode
pub fn is_reduced_with(basis: &Basis, delta: f64, mode: VerifyMode) -> Result<bool> {
    LLLConfig {
        delta,
        ..Default::default()
    }
    .validate()?;

    let gs = GramSchmidt::compute(basis)?;
    let n = basis.rank();

    for k in 1..n {
        let size_reduced = match mode {
            VerifyMode::Adjacent => gs.mu(k, k - 1).abs() <= 0.5 + VERIFY_EPS,
            VerifyMode::Full => (0..k).all(|j| gs.mu(k, j).abs() <= 0.5 + VERIFY_EPS),
        };
        if !size_reduced {
            return Ok(false);
        }

        let mu_sq = gs.mu(k, k - 1) * gs.mu(k, k - 1);
        let lhs = (delta - mu_sq) * gs.b_star_norms_sq[k - 1];
        let rhs = gs.b_star_norms_sq[k];
        if lhs > rhs + VERIFY_EPS * rhs.abs().max(1.0) {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReduceError;

    #[test]
    fn test_identity_is_reduced() {
        let basis =
            Basis::from_rows(&[vec![1i32, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
        assert!(is_reduced(&basis, 0.75).unwrap());
        assert!(is_reduced_with(&basis, 0.75, VerifyMode::Full).unwrap());
    }

    #[test]
    fn test_unreduced_basis_fails_size_condition() {
        // μ_{1,0} = 10 for this pair
        let basis = Basis::from_rows(&[vec![1i32, 0], vec![10, 1]]).unwrap();
        assert!(!is_reduced(&basis, 0.75).unwrap());
    }

    #[test]
    fn test_lovasz_violation_detected() {
        // size-reduced (μ = 0) but badly ordered: second orthogonal vector
        // is far shorter than the first
        let basis = Basis::from_rows(&[vec![10i32, 0], vec![0, 1]]).unwrap();
        assert!(!is_reduced(&basis, 0.75).unwrap());
    }

    #[test]
    fn test_full_mode_is_stricter() {
        // adjacent μ_{2,1} small, but μ_{2,0} large
        let basis =
            Basis::from_rows(&[vec![1i32, 0, 0], vec![0, 1, 0], vec![10, 0, 11]]).unwrap();
        assert!(is_reduced_with(&basis, 0.75, VerifyMode::Adjacent).unwrap());
        assert!(!is_reduced_with(&basis, 0.75, VerifyMode::Full).unwrap());
    }

    #[test]
    fn test_invalid_delta_rejected() {
        let basis = Basis::from_rows(&[vec![1i32, 0], vec![0, 1]]).unwrap();
        assert_eq!(
            is_reduced(&basis, 1.0).unwrap_err(),
            ReduceError::InvalidParameter { value: 1.0 }
        );
    }

    #[test]
    fn test_degenerate_basis_propagates() {
        let basis = Basis::from_rows(&[vec![1i32, 0], vec![2, 0]]).unwrap();
        assert_eq!(
            is_reduced(&basis, 0.75).unwrap_err(),
            ReduceError::DegenerateBasis { index: 1 }
        );
    }
}

//! LLL (Lenstra-Lenstra-Lovász) lattice reduction
//!
//! Produces a δ-reduced basis satisfying, for all 1 ≤ k < n:
//! 1. **Size reduction**: |μ_{k,k-1}| ≤ 1/2
//! 2. **Lovász condition**: (δ − μ²_{k,k-1})·‖b*_{k-1}‖² ≤ ‖b*_k‖²
//!
//! # Termination
//!
//! For δ < 1 the algorithm terminates by the classical potential-function
//! argument: the product of partial Gram-Schmidt norms Π_i ‖b*_i‖^{2(n-i)}
//! shrinks by at least a factor δ on every Lovász swap, and size reduction
//! leaves it unchanged, so only finitely many swaps can occur. δ = 1 carries
//! no such guarantee in floating point, hence the open interval (0.25, 1)
//! enforced on the parameter.
//!
//! # Numerical limitation
//!
//! All arithmetic is double precision. Near-dependent input bases can lose
//! their remaining independence to round-off during the repeated Gram-Schmidt
//! recomputation; that surfaces as `DegenerateBasis` rather than a silently
//! corrupted result.

use crate::basis::Basis;
use crate::error::{ReduceError, Result};
use crate::gram_schmidt::GramSchmidt;
use crate::vector::norm;

/// LLL configuration parameters
#[derive(Debug, Clone)]
pub struct LLLConfig {
    /// Lovász parameter δ, must lie in (0.25, 1). Higher values give better
    /// reduction but more swaps.
    pub delta: f64,
    /// Iteration cap: the loop stops here and returns the current basis,
    /// for callers that need a bounded-time guarantee
    pub max_iterations: usize,
    /// Verbosity level (0 = silent, 1 = summary, 2 = per-1000-iteration progress)
    pub verbose: u32,
}

impl Default for LLLConfig {
    fn default() -> Self {
        Self {
            delta: 0.75,
            max_iterations: 1_000_000,
            verbose: 0,
        }
    }
}

impl LLLConfig {
    /// δ = 0.99: strong reduction
    pub fn strong() -> Self {
        Self {
            delta: 0.99,
            ..Default::default()
        }
    }

    /// δ = 0.5: fast but weaker reduction
    pub fn fast() -> Self {
        Self {
            delta: 0.5,
            ..Default::default()
        }
    }

    /// Check that δ lies in the canonical safe range (0.25, 1)
    pub fn validate(&self) -> Result<()> {
        if self.delta <= 0.25 || self.delta >= 1.0 {
            return Err(ReduceError::InvalidParameter { value: self.delta });
        }
        Ok(())
    }
}

/// Statistics from an LLL run
#[derive(Debug, Clone, Default)]
pub struct LLLStats {
    /// Number of size-reduction subtractions performed
    pub size_reductions: usize,
    /// Number of basis vector swaps
    pub swaps: usize,
    /// Number of Gram-Schmidt recomputations
    pub gso_updates: usize,
    /// Main-loop iterations (swap-loop steps)
    pub iterations: usize,
}

/// LLL lattice reduction
pub struct LLL;

impl LLL {
    /// Reduce a lattice basis
    ///
    /// The input is not mutated; a fresh reduced basis spanning the same
    /// lattice is returned together with run statistics.
    ///
    /// Fails with `InvalidParameter` for δ outside (0.25, 1) and propagates
    /// `DegenerateBasis` from Gram-Schmidt unchanged.
    pub fn reduce(basis: &Basis, config: &LLLConfig) -> Result<(Basis, LLLStats)> {
        config.validate()?;

        let mut stats = LLLStats::default();
        let mut b = basis.clone();
        let n = b.rank();

        if n <= 1 {
            // still reject a degenerate single vector
            GramSchmidt::compute(&b)?;
            return Ok((b, stats));
        }

        let mut gs = GramSchmidt::compute(&b)?;
        stats.gso_updates += 1;

        let mut k = 1usize;
        while k < n && stats.iterations < config.max_iterations {
            stats.iterations += 1;

            // Size reduce b_k against b_{k-1}, ..., b_0. The basis changes
            // under us, so the Gram-Schmidt result is recomputed after every
            // subtraction; one subtraction per j (scanning downward) settles
            // the row.
            for j in (0..k).rev() {
                let mu_kj = gs.mu(k, j);
                if mu_kj.abs() > 0.5 {
                    b.reduce_vector(k, j, mu_kj.round());
                    gs = GramSchmidt::compute(&b)?;
                    stats.size_reductions += 1;
                    stats.gso_updates += 1;
                }
            }

            // Lovász condition on the adjacent pair
            let mu_sq = gs.mu(k, k - 1) * gs.mu(k, k - 1);
            if (config.delta - mu_sq) * gs.b_star_norms_sq[k - 1] <= gs.b_star_norms_sq[k] {
                k += 1;
            } else {
                b.swap(k, k - 1);
                gs = GramSchmidt::compute(&b)?;
                stats.swaps += 1;
                stats.gso_updates += 1;
                k = k.saturating_sub(1).max(1);
            }

            if config.verbose >= 2 && stats.iterations % 1000 == 0 {
                eprintln!(
                    "LLL iteration {}: k={}, swaps={}, reductions={}",
                    stats.iterations, k, stats.swaps, stats.size_reductions
                );
            }
        }

        if config.verbose >= 1 {
            eprintln!(
                "LLL completed: {} iterations, {} swaps, {} reductions",
                stats.iterations, stats.swaps, stats.size_reductions
            );
        }

        Ok((b, stats))
    }
}

/// Convenience wrapper: reduce with factor `delta` and default limits
pub fn lll_reduce(basis: &Basis, delta: f64) -> Result<Basis> {
    let config = LLLConfig {
        delta,
        ..Default::default()
    };
    LLL::reduce(basis, &config).map(|(b, _)| b)
}

/// Hermite factor ‖b_0‖ / det(L)^{1/n}
///
/// Reduction-quality measure; the determinant is the product of the
/// Gram-Schmidt norms. Lower is better, 1.0 is optimal.
pub fn hermite_factor(basis: &Basis) -> Result<f64> {
    let gs = GramSchmidt::compute(basis)?;
    let det: f64 = gs.b_star_norms_sq.iter().map(|x| x.sqrt()).product();
    Ok(norm(basis.get(0)) / det.powf(1.0 / basis.rank() as f64))
}

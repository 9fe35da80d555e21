//! LLL reduction benchmark over seeded random lattices
//!
//! Reduces random integer bases across a dimension grid and reports timing,
//! swap counts, and verification status in a table.

use std::time::Instant;

use lattice_reduce_core::{
    hermite_factor, is_reduced_with, Basis, LLLConfig, ReduceError, VerifyMode, LLL,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Results from a single benchmark run
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub n: usize,
    pub entry_bound: i64,
    pub elapsed_ms: f64,
    pub swaps: usize,
    pub iterations: usize,
    pub hermite: f64,
    pub verified: bool,
}

/// Run the reduction benchmark up to `max_dim`
pub fn run_bench(max_dim: usize, delta: f64, seed: u64) {
    let config = LLLConfig {
        delta,
        ..Default::default()
    };
    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        std::process::exit(2);
    }

    println!("LLL reduction benchmark (delta = {}, seed = {})", delta, seed);
    println!();

    let grid: Vec<(usize, i64)> = vec![
        (2, 16),
        (3, 16),
        (4, 16),
        (5, 64),
        (6, 64),
        (8, 256),
        (10, 256),
        (12, 1024),
        (16, 1024),
        (20, 4096),
    ]
    .into_iter()
    .filter(|&(n, _)| n <= max_dim)
    .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut results = Vec::new();

    println!("┌──────┬─────────┬────────────┬────────┬────────────┬──────────┬──────────┐");
    println!("│  n   │  bound  │  time (ms) │ swaps  │ iterations │ hermite  │ verified │");
    println!("├──────┼─────────┼────────────┼────────┼────────────┼──────────┼──────────┤");

    for (n, bound) in grid {
        let basis = Basis::random(n, n, bound, &mut rng);
        match benchmark_one(&basis, &config, bound) {
            Ok(result) => {
                println!(
                    "│ {:>4} │ {:>7} │ {:>10.2} │ {:>6} │ {:>10} │ {:>8.4} │    {}     │",
                    result.n,
                    result.entry_bound,
                    result.elapsed_ms,
                    result.swaps,
                    result.iterations,
                    result.hermite,
                    if result.verified { "✓" } else { "✗" },
                );
                results.push(result);
            }
            Err(ReduceError::DegenerateBasis { index }) => {
                println!(
                    "│ {:>4} │ {:>7} │ {:>10} │ {:>6} │ {:>10} │ {:>8} │    -     │",
                    n, bound, "-", "-", "-", "-",
                );
                eprintln!("  skipped: random draw degenerate at vector {}", index);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("└──────┴─────────┴────────────┴────────┴────────────┴──────────┴──────────┘");

    if let Some(last) = results.last() {
        println!();
        println!("Summary for n={}:", last.n);
        println!("  time:       {:>10.2} ms", last.elapsed_ms);
        println!("  swaps:      {:>10}", last.swaps);
        println!("  iterations: {:>10}", last.iterations);
        println!("  hermite:    {:>10.4}", last.hermite);
    }
}

fn benchmark_one(
    basis: &Basis,
    config: &LLLConfig,
    entry_bound: i64,
) -> Result<BenchResult, ReduceError> {
    let start = Instant::now();
    let (reduced, stats) = LLL::reduce(basis, config)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let verified = is_reduced_with(&reduced, config.delta, VerifyMode::Adjacent)?;
    let hermite = hermite_factor(&reduced)?;

    Ok(BenchResult {
        n: basis.rank(),
        entry_bound,
        elapsed_ms,
        swaps: stats.swaps,
        iterations: stats.iterations,
        hermite,
        verified,
    })
}

//! Lattice Reduce CLI
//!
//! Thin embedding application over `lattice_reduce_core`: a basis of real
//! vectors and a reduction factor in, a reduced basis (or a typed error) out.
//!
//! # Usage
//! ```bash
//! # reduce an inline basis (one --row per basis vector)
//! lattice-reduce reduce --row 1,1,1 --row -1,0,2 --row 3,5,6 --delta 0.75
//!
//! # benchmark over seeded random lattices
//! lattice-reduce bench --max-dim 12 --delta 0.99 --seed 7
//! ```

mod bench;

use clap::{Parser, Subcommand};
use lattice_reduce_core::{hermite_factor, is_reduced, lll_reduce, Basis};

#[derive(Parser)]
#[command(name = "lattice-reduce")]
#[command(about = "LLL lattice basis reduction")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a basis given inline as comma-separated rows
    Reduce {
        /// Basis vector as comma-separated reals; repeat once per vector
        #[arg(long = "row", required = true, allow_hyphen_values = true)]
        rows: Vec<String>,

        /// Reduction factor, in (0.25, 1)
        #[arg(long, default_value = "0.75")]
        delta: f64,
    },

    /// Benchmark reduction over seeded random lattices
    Bench {
        /// Largest lattice rank to benchmark
        #[arg(long, default_value = "12")]
        max_dim: usize,

        /// Reduction factor, in (0.25, 1)
        #[arg(long, default_value = "0.75")]
        delta: f64,

        /// RNG seed for reproducible bases
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reduce { rows, delta } => run_reduce(&rows, delta),
        Commands::Bench {
            max_dim,
            delta,
            seed,
        } => bench::run_bench(max_dim, delta, seed),
    }
}

fn run_reduce(rows: &[String], delta: f64) {
    let parsed: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| {
            row.split(',')
                .map(|tok| {
                    tok.trim().parse::<f64>().unwrap_or_else(|_| {
                        eprintln!("error: '{}' is not a real number", tok.trim());
                        std::process::exit(2);
                    })
                })
                .collect()
        })
        .collect();

    let basis = match Basis::new(parsed) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    match lll_reduce(&basis, delta) {
        Ok(reduced) => {
            print!("{}", reduced);
            if let (Ok(ok), Ok(hf)) = (is_reduced(&reduced, delta), hermite_factor(&reduced)) {
                println!("reduced: {}, hermite factor: {:.4}", ok, hf);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

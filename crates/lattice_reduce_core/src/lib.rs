//! Lattice basis reduction engine
//!
//! Takes a finite set of linearly independent vectors (a lattice basis) and
//! transforms it into a basis whose vectors are shorter and closer to
//! pairwise orthogonal, while spanning the same lattice.
//!
//! # Key Components
//!
//! - [`vector`] - inner product and Euclidean norm primitives
//! - [`Basis`] - lattice basis representation (rank n, dimension m)
//! - [`GramSchmidt`] - orthogonalization with explicit triangular μ matrix
//! - [`reduce_pair`] - two-generator ("Gaussian") reduction
//! - [`LLL`] - the n-dimensional LLL reduction algorithm
//! - [`is_reduced`] - reduction verifier (adjacent-pair and full modes)
//!
//! # Example
//!
//! ```
//! use lattice_reduce_core::{Basis, LLL, LLLConfig, is_reduced};
//!
//! let basis = Basis::from_rows(&[
//!     vec![1i32, 1, 1],
//!     vec![-1, 0, 2],
//!     vec![3, 5, 6],
//! ]).unwrap();
//!
//! let (reduced, stats) = LLL::reduce(&basis, &LLLConfig::default()).unwrap();
//! assert!(is_reduced(&reduced, 0.75).unwrap());
//! assert!(stats.swaps > 0);
//! ```
//!
//! All arithmetic is double precision, adequate for the moderate dimensions
//! this crate targets; cryptographically-sized lattices need high-precision
//! backends, which are out of scope here.

pub mod basis;
pub mod error;
pub mod gram_schmidt;
pub mod lll;
pub mod pair;
pub mod vector;
pub mod verify;

pub use basis::Basis;
pub use error::{ReduceError, Result};
pub use gram_schmidt::GramSchmidt;
pub use lll::{hermite_factor, lll_reduce, LLLConfig, LLLStats, LLL};
pub use pair::reduce_pair;
pub use vector::{dot, norm};
pub use verify::{is_reduced, is_reduced_with, VerifyMode};

//! # qmc-rs: Quine–McCluskey logic minimization in Rust
//!
//! **`qmc-rs`** computes a minimal sum-of-products (disjunctive normal form) expression
//! for a Boolean function given by its truth table.
//!
//! ## How it works
//!
//! 1. The inputs where the function is 1 become **minterms**: fully specified [`Term`][crate::term::Term]s.
//! 2. The [`merge`] engine repeatedly combines terms that differ in exactly one position,
//!    until no more merges are possible. The survivors are the **prime implicants**.
//! 3. A [`CoverageTable`][crate::table::CoverageTable] records which prime implicant covers which minterm.
//!    A minterm covered by a single implicant makes that implicant **essential**.
//! 4. The [`cover`] search enumerates every subset of the non-essential implicants and keeps
//!    the cheapest one that, together with the essential ones, covers all minterms.
//!
//! The search is exhaustive and exponential in the number of non-essential prime implicants,
//! so it is meant for functions of a handful of variables.
//! Every stage iterates in a fixed order, so results are reproducible.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::minimize::minimize;
//! use qmc_rs::truth_table::TruthTable;
//!
//! // 1. Describe the function: f(x1, x0) = 1 for inputs 00 only
//! let tt: TruthTable = "1000".parse().unwrap();
//!
//! // 2. Minimize it
//! let result = minimize(&tt);
//!
//! // 3. Inspect the result
//! assert_eq!(result.terms().len(), 1);
//! assert_eq!(result.sop().to_string(), "!x1!x0");
//! ```
//!
//! ## Core Components
//!
//! - **[`term`]**: Three-valued product terms and their textual forms.
//! - **[`merge`]**: Prime implicant generation.
//! - **[`table`]**: The coverage table and essential implicants; [`dump`] renders it as text.
//! - **[`cover`]**: Minimal cover search and cost metrics.
//! - **[`minimize`]**: The whole pipeline.

pub mod bitset;
pub mod cover;
pub mod dump;
pub mod error;
pub mod merge;
pub mod minimize;
pub mod table;
pub mod term;
pub mod truth_table;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

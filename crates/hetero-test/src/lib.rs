//! Shared test fixtures for hetero crates.
//!
//! This crate provides data types with hand-written concept instances and
//! generic law checkers.
//!
//! - [`numeric`] - A runtime number that is Comparable, Orderable and Logical
//! - [`injection`] - Pairwise-distinct types `X<N>` for heterogeneous tests
//! - [`pair`] - A two-slot Functor built on the transform MCD
//! - [`laws`] - Assertions for the concept laws and proptest strategies
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! hetero-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use hetero_test::injection::x;
//! use hetero_test::numeric::Numeric;
//!
//! assert!(Numeric(1) < Numeric(2));
//! assert!(x::<1>() != x::<2>());
//! ```

pub mod injection;
pub mod laws;
pub mod numeric;
pub mod pair;

pub use injection::{x, Ordinal, X, XTag};
pub use numeric::{Numeric, NumericTag};
pub use pair::{Pair, PairTag};

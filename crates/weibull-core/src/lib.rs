//! Shared foundations for the wind-weibull crates
//!
//! This crate holds the unified error type and the fixed-point iteration
//! helper used by the iterative shape estimators. It has no domain types of
//! its own; those live in `weibull-histogram` and `weibull-fit`.

pub mod error;
pub mod iterate;

pub use error::{Error, Result};
pub use iterate::{fixed_point, K_TOLERANCE, MAX_ITERATIONS};

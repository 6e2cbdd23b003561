//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for fixed-point arithmetic
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`FixedPointError`] from `error`

pub mod error;

pub use error::FixedPointError;

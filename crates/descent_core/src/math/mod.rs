//! Fixed-point arithmetic.
//!
//! This module provides:
//! - [`Fixed`]: Signed 18-decimal fixed-point scalar over `i128`
//! - Natural logarithm and exponential on [`Fixed`] (`transcendental`)
//! - [`MAX_NATURAL_EXPONENT`] / [`MIN_NATURAL_EXPONENT`]: Domain bounds of `exp`

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned intermediate for the widening fixed-point multiply.
    pub(crate) struct U256(4);
}

pub mod fixed;
pub mod transcendental;

pub use fixed::Fixed;
pub use transcendental::{MAX_NATURAL_EXPONENT, MIN_NATURAL_EXPONENT};

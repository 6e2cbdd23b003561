//! Fixed-point arithmetic error types.

use crate::math::Fixed;
use thiserror::Error;

/// Fixed-point operation errors.
///
/// Provides structured error handling for the arithmetic and transcendental
/// operations on [`Fixed`] with descriptive context for each failure mode.
///
/// # Variants
///
/// - `Overflow`: Result magnitude left the representable range
/// - `LogNonPositive`: Logarithm of a non-positive value
/// - `ExpOverflow`: Exponential argument above the representable range
///
/// # Examples
///
/// ```
/// use descent_core::math::Fixed;
/// use descent_core::types::FixedPointError;
///
/// let err = FixedPointError::LogNonPositive { x: Fixed::ZERO };
/// assert!(format!("{}", err).contains("0.000000000000000000"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedPointError {
    /// Arithmetic result outside the representable range.
    #[error("Fixed-point overflow")]
    Overflow,

    /// Logarithm domain violation (argument must be strictly positive).
    #[error("Invalid log argument: x = {x}")]
    LogNonPositive {
        /// The non-positive argument
        x: Fixed,
    },

    /// Exponential argument too large for the representable range.
    #[error("Exp argument out of range: x = {x}")]
    ExpOverflow {
        /// The out-of-range argument
        x: Fixed,
    },
}

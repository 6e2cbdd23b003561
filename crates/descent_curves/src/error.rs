//! Curve pricing error types.
//!
//! This module provides structured error handling for curve construction and
//! price queries. Every error is a deterministic function of the inputs, so
//! there is no retry path anywhere: a caller receiving an error must treat
//! the curve/argument combination as unusable for that input.

use descent_core::math::Fixed;
use descent_core::types::FixedPointError;
use thiserror::Error;

/// Curve construction and pricing errors.
///
/// # Variants
///
/// - `InvalidParameter`: Construction-time decay-rate invariant violated
/// - `Underflow`: Computed price is negative and cannot be returned
/// - `DivideByZero`: Time quantisation with a zero step size
/// - `Math`: Wrapped fixed-point arithmetic failure
///
/// # Examples
///
/// ```
/// use descent_core::math::Fixed;
/// use descent_curves::curves::LinearCurve;
/// use descent_curves::error::CurveError;
///
/// // A non-negative decay rate never produces a curve.
/// let err = LinearCurve::new(Fixed::from_int(10), Fixed::ZERO).unwrap_err();
/// assert!(matches!(err, CurveError::InvalidParameter { .. }));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Decay-rate negativity invariant violated at construction.
    ///
    /// Carries the offending derived decay rate, or the raw percentage input
    /// when the derivation itself is undefined. Fatal: no curve instance is
    /// produced.
    #[error("Invalid parameter: decay rate must be strictly negative, got {value}")]
    InvalidParameter {
        /// The offending value
        value: Fixed,
    },

    /// The computed price is negative and cannot be represented as an
    /// unsigned quantity. Surfaced to the caller, never clamped.
    #[error("Invalid result: computed price is negative: {price}")]
    Underflow {
        /// The negative computed price
        price: Fixed,
    },

    /// Time quantisation was requested with a zero step size.
    #[error("Divide by zero: step size is zero")]
    DivideByZero,

    /// Fixed-point arithmetic failure, always propagated unchanged.
    #[error("Fixed-point error: {0}")]
    Math(#[from] FixedPointError),
}

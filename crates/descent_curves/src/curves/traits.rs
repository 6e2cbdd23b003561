//! Price curve trait definition.

use crate::error::CurveError;
use descent_core::math::Fixed;

/// Generic price curve trait for time-based sale price calculations.
///
/// A price curve maps elapsed time since the start of a sale to the current
/// unit price of the asset. Both quantities are signed 18-decimal fixed-point
/// values ([`Fixed`]); a returned price is always non-negative.
///
/// # Contract
///
/// - `price_at(t)` returns the price after `t` units of elapsed time
/// - `initial_price()` returns the price parameter fixed at construction;
///   it is stored verbatim, with no range check of its own
///
/// # Invariants
///
/// - Every query is a pure function of the construction parameters and the
///   argument: no internal auction progress is tracked, and the caller is
///   solely responsible for supplying the correct elapsed time on each call
/// - An `Ok` price is never negative; a computation that would produce a
///   negative price fails with [`CurveError::Underflow`] instead of clamping
/// - `t` may be negative, zero, or positive
///
/// # Example
///
/// ```
/// use descent_core::math::Fixed;
/// use descent_curves::curves::{LinearCurve, PriceCurve};
///
/// let curve = LinearCurve::new(Fixed::from_int(10), Fixed::from_int(-1)).unwrap();
///
/// assert_eq!(curve.price_at(Fixed::ZERO).unwrap(), Fixed::from_int(10));
/// assert_eq!(curve.price_at(Fixed::from_int(2)).unwrap(), Fixed::from_int(12));
/// ```
pub trait PriceCurve {
    /// Return the initial price parameter.
    ///
    /// For a linear curve this is the price at `t = 0`; for an exponential
    /// curve it is the scale factor the decay multiplies.
    fn initial_price(&self) -> Fixed;

    /// Return the price after `time_since_start` units of elapsed time.
    ///
    /// # Arguments
    ///
    /// * `time_since_start` - Signed elapsed time in the same 18-decimal
    ///   scale as prices
    ///
    /// # Returns
    ///
    /// * `Ok(price)` - Non-negative price at the given time
    /// * `Err(CurveError::Underflow)` - The law produced a negative price
    /// * `Err(CurveError::Math)` - Fixed-point arithmetic failed; the error
    ///   is deterministic for these inputs, so retrying cannot succeed
    fn price_at(&self, time_since_start: Fixed) -> Result<Fixed, CurveError>;
}

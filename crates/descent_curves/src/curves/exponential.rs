//! Exponential decay price law.

use super::PriceCurve;
use crate::error::CurveError;
use descent_core::math::Fixed;
use descent_core::types::FixedPointError;

/// Price curve that decays exponentially with elapsed time.
///
/// The price after `t` units of time is
///
/// ```text
/// price(t) = initial_price * exp(decay_rate * t)
/// ```
///
/// where `decay_rate = ln(1 - decay_percent)` is derived once at
/// construction from the per-unit-time decay percentage. With
/// `0 < decay_percent < 1` the derived rate is strictly negative, so for
/// `t >= 0` the price strictly decreases toward zero as `t` grows, and
/// increases for `t < 0`.
///
/// # Example
///
/// ```
/// use descent_core::math::Fixed;
/// use descent_curves::curves::{ExponentialCurve, PriceCurve};
///
/// // Halve the price every unit of time, starting at 8.0.
/// let half = Fixed::from_raw(500_000_000_000_000_000);
/// let curve = ExponentialCurve::new(Fixed::from_int(8), half).unwrap();
///
/// let p2 = curve.price_at(Fixed::from_int(2)).unwrap();
/// // 8.0 * 0.5^2 = 2.0, up to fixed-point rounding
/// assert!((p2.raw() - 2 * Fixed::SCALE).abs() < 1_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialCurve {
    /// Scale factor the decay multiplies; the price at `t = 0`
    initial_price: Fixed,
    /// Derived rate `ln(1 - decay_percent)`, strictly negative
    decay_rate: Fixed,
}

impl ExponentialCurve {
    /// Construct an exponential curve from a decay percentage.
    ///
    /// # Arguments
    ///
    /// * `initial_price` - The price at `t = 0`, stored verbatim
    /// * `decay_percent` - Fraction of the price lost per unit of time;
    ///   must be strictly between 0 and 1
    ///
    /// # Returns
    ///
    /// * `Ok(curve)` - On valid parameters
    /// * `Err(CurveError::InvalidParameter)` - If `decay_percent` is outside
    ///   `(0, 1)`: at or below zero the derived rate is non-negative, and at
    ///   or above one the logarithm is undefined. The error carries the
    ///   derived rate when it exists, the raw percentage otherwise.
    pub fn new(initial_price: Fixed, decay_percent: Fixed) -> Result<Self, CurveError> {
        let remaining = Fixed::ONE
            .checked_sub(decay_percent)
            .ok_or(CurveError::InvalidParameter {
                value: decay_percent,
            })?;
        let decay_rate = remaining
            .ln()
            .map_err(|_| CurveError::InvalidParameter {
                value: decay_percent,
            })?;
        if !decay_rate.is_negative() {
            return Err(CurveError::InvalidParameter { value: decay_rate });
        }
        Ok(Self {
            initial_price,
            decay_rate,
        })
    }

    /// Return the derived decay rate `ln(1 - decay_percent)`.
    #[inline]
    pub fn decay_rate(&self) -> Fixed {
        self.decay_rate
    }
}

impl PriceCurve for ExponentialCurve {
    #[inline]
    fn initial_price(&self) -> Fixed {
        self.initial_price
    }

    /// Return `initial_price * exp(decay_rate * t)`.
    ///
    /// An exponential-range failure for very large `|decay_rate * t|` is
    /// propagated unchanged as `CurveError::Math`. A negative product (from
    /// a negative initial price) is `CurveError::Underflow`.
    fn price_at(&self, time_since_start: Fixed) -> Result<Fixed, CurveError> {
        let exponent = self
            .decay_rate
            .checked_mul(time_since_start)
            .ok_or(CurveError::Math(FixedPointError::Overflow))?;
        let factor = exponent.exp()?;
        let price = self
            .initial_price
            .checked_mul(factor)
            .ok_or(CurveError::Math(FixedPointError::Overflow))?;
        if price.is_negative() {
            return Err(CurveError::Underflow { price });
        }
        Ok(price)
    }
}

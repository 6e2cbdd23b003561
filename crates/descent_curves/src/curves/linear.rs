//! Linear (affine) price law.

use super::PriceCurve;
use crate::error::CurveError;
use descent_core::math::Fixed;
use descent_core::types::FixedPointError;

/// Price curve that varies affinely with elapsed time.
///
/// The price after `t` units of time is
///
/// ```text
/// price(t) = initial_price - decay_rate * t
/// ```
///
/// with `decay_rate` required to be strictly negative at construction.
///
/// Note the sign convention this parameterisation produces: because
/// `decay_rate < 0`, the product `decay_rate * t` is negative for positive
/// `t`, so the subtraction ADDS to the price - under this law the price
/// rises as time passes, and falls for negative `t`. Callers wanting a
/// falling schedule over positive time should use [`ExponentialCurve`]
/// instead.
///
/// [`ExponentialCurve`]: super::ExponentialCurve
///
/// # Example
///
/// ```
/// use descent_core::math::Fixed;
/// use descent_curves::curves::{LinearCurve, PriceCurve};
///
/// // 10.0 at t = 0, moving by 1.0 per unit of time.
/// let curve = LinearCurve::new(Fixed::from_int(10), Fixed::from_int(-1)).unwrap();
/// assert_eq!(curve.price_at(Fixed::from_int(2)).unwrap(), Fixed::from_int(12));
/// assert_eq!(curve.price_at(Fixed::from_int(-2)).unwrap(), Fixed::from_int(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearCurve {
    /// Price at `t = 0`
    initial_price: Fixed,
    /// Per-unit-time price delta, strictly negative
    decay_rate: Fixed,
}

impl LinearCurve {
    /// Construct a linear curve.
    ///
    /// # Arguments
    ///
    /// * `initial_price` - The price at `t = 0`, stored verbatim
    /// * `decay_rate` - The per-unit-time price delta; must be strictly
    ///   negative
    ///
    /// # Returns
    ///
    /// * `Ok(curve)` - On valid parameters
    /// * `Err(CurveError::InvalidParameter)` - If `decay_rate >= 0`
    pub fn new(initial_price: Fixed, decay_rate: Fixed) -> Result<Self, CurveError> {
        if !decay_rate.is_negative() {
            return Err(CurveError::InvalidParameter { value: decay_rate });
        }
        Ok(Self {
            initial_price,
            decay_rate,
        })
    }

    /// Return the decay rate.
    #[inline]
    pub fn decay_rate(&self) -> Fixed {
        self.decay_rate
    }
}

impl PriceCurve for LinearCurve {
    #[inline]
    fn initial_price(&self) -> Fixed {
        self.initial_price
    }

    /// Return `initial_price - decay_rate * t`.
    ///
    /// The decay term is a checked fixed-point multiply and the subtraction
    /// is checked as well, so intermediate overflow surfaces as
    /// `CurveError::Math` rather than wrapping. A negative final price is
    /// `CurveError::Underflow`.
    fn price_at(&self, time_since_start: Fixed) -> Result<Fixed, CurveError> {
        let decay = self
            .decay_rate
            .checked_mul(time_since_start)
            .ok_or(CurveError::Math(FixedPointError::Overflow))?;
        let price = self
            .initial_price
            .checked_sub(decay)
            .ok_or(CurveError::Math(FixedPointError::Overflow))?;
        if price.is_negative() {
            return Err(CurveError::Underflow { price });
        }
        Ok(price)
    }
}

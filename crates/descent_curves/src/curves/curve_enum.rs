//! Static dispatch over the closed set of price laws.

use super::{ExponentialCurve, LinearCurve, PriceCurve};
use crate::error::CurveError;
use descent_core::math::Fixed;

/// Static dispatch enum wrapping the concrete price laws.
///
/// This enum provides efficient static dispatch for price queries, avoiding
/// trait objects when the set of laws is known and closed. It composes with
/// [`DiscretizedCurve`], which accepts any [`PriceCurve`] implementor -
/// including this enum.
///
/// # Variants
///
/// - `Linear`: Affine price law
/// - `Exponential`: Exponential decay price law
///
/// # Example
///
/// ```
/// use descent_core::math::Fixed;
/// use descent_curves::curves::{CurveEnum, PriceCurve};
///
/// let curve = CurveEnum::linear(Fixed::from_int(10), Fixed::from_int(-1)).unwrap();
/// assert_eq!(curve.price_at(Fixed::from_int(2)).unwrap(), Fixed::from_int(12));
/// ```
///
/// [`DiscretizedCurve`]: super::DiscretizedCurve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveEnum {
    /// Affine price law
    Linear(LinearCurve),
    /// Exponential decay price law
    Exponential(ExponentialCurve),
}

impl CurveEnum {
    /// Create a linear variant, forwarding parameter validation.
    ///
    /// # Arguments
    ///
    /// * `initial_price` - The price at `t = 0`
    /// * `decay_rate` - Per-unit-time price delta, strictly negative
    pub fn linear(initial_price: Fixed, decay_rate: Fixed) -> Result<Self, CurveError> {
        Ok(CurveEnum::Linear(LinearCurve::new(
            initial_price,
            decay_rate,
        )?))
    }

    /// Create an exponential variant, forwarding parameter validation.
    ///
    /// # Arguments
    ///
    /// * `initial_price` - The price at `t = 0`
    /// * `decay_percent` - Fraction lost per unit of time, in `(0, 1)`
    pub fn exponential(initial_price: Fixed, decay_percent: Fixed) -> Result<Self, CurveError> {
        Ok(CurveEnum::Exponential(ExponentialCurve::new(
            initial_price,
            decay_percent,
        )?))
    }
}

impl PriceCurve for CurveEnum {
    /// Delegates to the underlying law.
    fn initial_price(&self) -> Fixed {
        match self {
            CurveEnum::Linear(curve) => curve.initial_price(),
            CurveEnum::Exponential(curve) => curve.initial_price(),
        }
    }

    /// Delegates to the underlying law.
    fn price_at(&self, time_since_start: Fixed) -> Result<Fixed, CurveError> {
        match self {
            CurveEnum::Linear(curve) => curve.price_at(time_since_start),
            CurveEnum::Exponential(curve) => curve.price_at(time_since_start),
        }
    }
}

impl From<LinearCurve> for CurveEnum {
    fn from(curve: LinearCurve) -> Self {
        CurveEnum::Linear(curve)
    }
}

impl From<ExponentialCurve> for CurveEnum {
    fn from(curve: ExponentialCurve) -> Self {
        CurveEnum::Exponential(curve)
    }
}

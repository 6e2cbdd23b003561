//! Time-quantising wrapper over any price curve.

use super::PriceCurve;
use crate::error::CurveError;
use descent_core::math::Fixed;
use descent_core::types::FixedPointError;

/// Price curve decorator that snaps elapsed time to a fixed grid.
///
/// Before delegating to the wrapped curve, the elapsed time is replaced by
/// the nearest multiple of `step_size` toward zero:
///
/// ```text
/// t' = trunc(t / step_size) * step_size
/// ```
///
/// The result is a step function: the price holds constant for the duration
/// of each `step_size` interval instead of drifting every instant, which is
/// the behaviour wanted when price updates are quantised to discrete ticks
/// (per block, per minute, ...).
///
/// The division truncates TOWARD ZERO, not toward negative infinity: with
/// `step_size = 10`, a time of `-1` snaps to `0`, not to `-10`. A negative
/// `step_size` is accepted and quantises identically to its absolute value,
/// since `trunc(t / s) * s` is unchanged under `s -> -s`.
///
/// # Example
///
/// ```
/// use descent_core::math::Fixed;
/// use descent_curves::curves::{DiscretizedCurve, LinearCurve, PriceCurve};
///
/// let inner = LinearCurve::new(Fixed::from_int(10), Fixed::from_int(-1)).unwrap();
/// let curve = DiscretizedCurve::new(Fixed::from_int(5), inner);
///
/// // 7.0 truncates to 5.0: price is 10 - (-1 * 5) = 15.
/// assert_eq!(curve.price_at(Fixed::from_int(7)).unwrap(), Fixed::from_int(15));
/// assert_eq!(
///     curve.price_at(Fixed::from_int(7)).unwrap(),
///     curve.price_at(Fixed::from_int(5)).unwrap(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscretizedCurve<C> {
    /// Granularity of the time grid
    step_size: Fixed,
    /// The wrapped curve
    inner: C,
}

impl<C> DiscretizedCurve<C> {
    /// Construct a discretized wrapper around `inner`.
    ///
    /// The step size is NOT validated here: a zero step is reported as
    /// [`CurveError::DivideByZero`] by every subsequent price query instead.
    pub fn new(step_size: Fixed, inner: C) -> Self {
        Self { step_size, inner }
    }

    /// Return the step size.
    #[inline]
    pub fn step_size(&self) -> Fixed {
        self.step_size
    }

    /// Return a reference to the wrapped curve.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consume the wrapper and return the wrapped curve.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: PriceCurve> PriceCurve for DiscretizedCurve<C> {
    #[inline]
    fn initial_price(&self) -> Fixed {
        self.inner.initial_price()
    }

    /// Quantise the time argument, then delegate to the wrapped curve.
    ///
    /// All failure modes of the wrapped curve pass through unchanged.
    ///
    /// # Returns
    ///
    /// * `Err(CurveError::DivideByZero)` - If `step_size == 0`, for any `t`
    /// * `Err(CurveError::Math)` - On the one unrepresentable quotient
    ///   (`t` of `i128::MIN` raw with a step of `-1` raw)
    fn price_at(&self, time_since_start: Fixed) -> Result<Fixed, CurveError> {
        if self.step_size == Fixed::ZERO {
            return Err(CurveError::DivideByZero);
        }
        let steps = time_since_start
            .raw()
            .checked_div(self.step_size.raw())
            .ok_or(CurveError::Math(FixedPointError::Overflow))?;
        // |steps * step_size| <= |t|, so the product cannot overflow.
        let snapped = Fixed::from_raw(steps * self.step_size.raw());
        self.inner.price_at(snapped)
    }
}

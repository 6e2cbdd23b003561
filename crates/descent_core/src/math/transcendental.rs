//! Natural logarithm and exponential on [`Fixed`].
//!
//! Both functions are pure integer computations. `ln` normalises its argument
//! to `m * 2^k` with `m` in `[1, 2)` and sums the odd artanh series of
//! `(m - 1) / (m + 1)`; `exp` reduces its argument to `k * ln2 + r` with `r`
//! in `[0, ln2)` and sums the Taylor series of `r`, then rescales by `2^k`.
//! Every intermediate fits in `u128`, so no wide-integer machinery is needed
//! here. Results are accurate to a few units in the 18th decimal place.

use super::fixed::Fixed;
use crate::types::error::FixedPointError;

/// `ln(2)` scaled by 10^18, truncated.
const LN2: i128 = 693_147_180_559_945_309;

/// Largest argument accepted by [`Fixed::exp`]: 46.0.
///
/// `exp(46) * 10^18` is just inside the signed 128-bit raw domain;
/// `exp(47)` is not.
pub const MAX_NATURAL_EXPONENT: Fixed = Fixed::from_raw(46 * Fixed::SCALE);

/// Smallest argument for which [`Fixed::exp`] computes a result: -42.0.
///
/// Below this, the true value is under one unit in the 18th decimal place,
/// and `exp` saturates to exactly zero.
pub const MIN_NATURAL_EXPONENT: Fixed = Fixed::from_raw(-42 * Fixed::SCALE);

impl Fixed {
    /// Natural logarithm.
    ///
    /// Domain is `x > 0`.
    ///
    /// # Returns
    ///
    /// * `Ok(ln(x))` - accurate to a few units in the last decimal place;
    ///   `ln(1) == 0` exactly
    /// * `Err(FixedPointError::LogNonPositive)` - if `x <= 0`
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::Fixed;
    ///
    /// assert_eq!(Fixed::ONE.ln().unwrap(), Fixed::ZERO);
    /// // ln(2) = 0.693147180559945309...
    /// assert_eq!(
    ///     Fixed::from_int(2).ln().unwrap(),
    ///     Fixed::from_raw(693_147_180_559_945_309)
    /// );
    /// assert!(Fixed::ZERO.ln().is_err());
    /// ```
    pub fn ln(self) -> Result<Fixed, FixedPointError> {
        if self.raw() <= 0 {
            return Err(FixedPointError::LogNonPositive { x: self });
        }
        let one = Self::SCALE as u128;

        // Normalise to m * 2^k with m in [1, 2).
        let mut m = self.raw() as u128;
        let mut k: i128 = 0;
        while m >= 2 * one {
            m >>= 1;
            k += 1;
        }
        while m < one {
            m <<= 1;
            k -= 1;
        }

        // ln(m) = 2 * artanh(s) with s = (m - 1) / (m + 1) in [0, 1/3):
        // artanh(s) = s + s^3/3 + s^5/5 + ...
        let s = (m - one) * one / (m + one);
        let z = s * s / one;
        let mut term = s;
        let mut sum = 0u128;
        let mut n = 1u128;
        while term != 0 && n < 80 {
            sum += term / n;
            term = term * z / one;
            n += 2;
        }

        Ok(Fixed::from_raw(k * LN2 + (2 * sum) as i128))
    }

    /// Natural exponential.
    ///
    /// # Returns
    ///
    /// * `Ok(exp(x))` - accurate to a few units in the last decimal place
    ///   relative to the result's magnitude; `exp(0) == 1` exactly
    /// * `Ok(0)` - if `x < MIN_NATURAL_EXPONENT` (the true value is below
    ///   the smallest representable positive number)
    /// * `Err(FixedPointError::ExpOverflow)` - if `x > MAX_NATURAL_EXPONENT`
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::{Fixed, MAX_NATURAL_EXPONENT};
    ///
    /// assert_eq!(Fixed::ZERO.exp().unwrap(), Fixed::ONE);
    /// // exp(1) = 2.718281828459045235...
    /// let e = Fixed::ONE.exp().unwrap();
    /// assert!((e.raw() - 2_718_281_828_459_045_235).abs() < 1_000_000_000);
    /// assert!(Fixed::from_int(47).exp().is_err());
    /// ```
    pub fn exp(self) -> Result<Fixed, FixedPointError> {
        if self > MAX_NATURAL_EXPONENT {
            return Err(FixedPointError::ExpOverflow { x: self });
        }
        if self < MIN_NATURAL_EXPONENT {
            return Ok(Fixed::ZERO);
        }
        let one = Self::SCALE as u128;

        // Reduce to x = k*ln2 + r with r in [0, ln2); k is in [-61, 66] here.
        let k = self.raw().div_euclid(LN2);
        let r = self.raw().rem_euclid(LN2) as u128;

        // exp(r) = sum r^n / n!
        let mut term = one;
        let mut sum = one;
        let mut n = 1u128;
        while term != 0 && n < 64 {
            term = term * r / (one * n);
            sum += term;
            n += 1;
        }

        // Scale back: exp(x) = exp(r) * 2^k.
        let scaled = if k >= 0 {
            sum.checked_mul(1u128 << k)
                .ok_or(FixedPointError::ExpOverflow { x: self })?
        } else {
            sum >> (-k) as u32
        };
        let raw =
            i128::try_from(scaled).map_err(|_| FixedPointError::ExpOverflow { x: self })?;
        Ok(Fixed::from_raw(raw))
    }
}

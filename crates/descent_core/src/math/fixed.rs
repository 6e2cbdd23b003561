//! Signed 18-decimal fixed-point scalar.

use super::U256;
use num_traits::{CheckedAdd, CheckedNeg, CheckedSub, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Signed fixed-point number with 18 decimal places of precision.
///
/// The value is stored as a raw `i128` scaled by [`Fixed::SCALE`] (10^18).
/// That is, the raw integer is interpreted as `raw / 10^18` to recover its
/// real-world value:
///
/// ```text
/// raw =  1_000_000_000_000_000_000  ->  1.0
/// raw =    500_000_000_000_000_000  ->  0.5
/// raw = -2_000_000_000_000_000_000  -> -2.0
/// ```
///
/// # Contract
///
/// - All fallible arithmetic is checked: `checked_*` methods return `None`
///   when the mathematical result leaves the representable range. Nothing
///   wraps silently.
/// - [`checked_mul`](Fixed::checked_mul) rounds toward zero; the intermediate
///   product is computed in 256 bits, so it cannot lose precision before the
///   final rescale.
/// - The `Add`/`Sub`/`Neg` operator impls delegate to the underlying `i128`
///   operators and share their overflow semantics; fallible computation paths
///   must use the checked API.
///
/// # Example
///
/// ```
/// use descent_core::math::Fixed;
///
/// let half = Fixed::from_raw(500_000_000_000_000_000);
/// let six = Fixed::from_int(6);
/// assert_eq!(half.checked_mul(six), Some(Fixed::from_int(3)));
/// assert_eq!(format!("{}", half), "0.500000000000000000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed(i128);

impl Fixed {
    /// The scale factor: 10^18 represents 1.0.
    pub const SCALE: i128 = 1_000_000_000_000_000_000;

    /// The value 0.0.
    pub const ZERO: Fixed = Fixed(0);

    /// The value 1.0.
    pub const ONE: Fixed = Fixed(Self::SCALE);

    /// Construct from a raw integer that is already scaled by 10^18.
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::Fixed;
    ///
    /// let two = Fixed::from_raw(2_000_000_000_000_000_000);
    /// assert_eq!(two, Fixed::from_int(2));
    /// ```
    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Fixed(raw)
    }

    /// Construct from a plain integer by scaling it by 10^18.
    ///
    /// This conversion is lossless and total: `|i64::MIN| * 10^18` is well
    /// inside the `i128` range.
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::Fixed;
    ///
    /// assert_eq!(Fixed::from_int(-3).raw(), -3_000_000_000_000_000_000);
    /// ```
    #[inline]
    pub const fn from_int(value: i64) -> Self {
        Fixed(value as i128 * Self::SCALE)
    }

    /// Return the raw scaled integer.
    #[inline]
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Return `true` if the value is strictly negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition. `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Fixed) -> Option<Fixed> {
        self.0.checked_add(rhs.0).map(Fixed)
    }

    /// Checked subtraction. `None` on overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Fixed) -> Option<Fixed> {
        self.0.checked_sub(rhs.0).map(Fixed)
    }

    /// Checked negation. `None` for the single unrepresentable case
    /// (`i128::MIN` raw).
    #[inline]
    pub fn checked_neg(self) -> Option<Fixed> {
        self.0.checked_neg().map(Fixed)
    }

    /// Checked absolute value. `None` for `i128::MIN` raw.
    #[inline]
    pub fn checked_abs(self) -> Option<Fixed> {
        self.0.checked_abs().map(Fixed)
    }

    /// Checked fixed-point multiplication, rounding toward zero.
    ///
    /// The magnitudes are widened to 256 bits, multiplied, divided by
    /// 10^18 (truncating), and the sign is reapplied. Returns `None` when
    /// the result magnitude exceeds `i128::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use descent_core::math::Fixed;
    ///
    /// let a = Fixed::from_int(-2);
    /// let b = Fixed::from_raw(1_500_000_000_000_000_000); // 1.5
    /// assert_eq!(a.checked_mul(b), Some(Fixed::from_int(-3)));
    ///
    /// // Truncation is toward zero for either sign:
    /// let tiny = Fixed::from_raw(1); // 1e-18
    /// assert_eq!(tiny.checked_mul(tiny), Some(Fixed::ZERO));
    /// assert_eq!(tiny.checked_neg().unwrap().checked_mul(tiny), Some(Fixed::ZERO));
    /// ```
    pub fn checked_mul(self, rhs: Fixed) -> Option<Fixed> {
        let negative = (self.0 < 0) != (rhs.0 < 0);
        let product = U256::from(self.0.unsigned_abs()) * U256::from(rhs.0.unsigned_abs());
        let scaled = product / U256::from(Self::SCALE as u128);
        if scaled > U256::from(i128::MAX as u128) {
            return None;
        }
        let magnitude = scaled.as_u128() as i128;
        Some(Fixed(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for Fixed {
    /// Render as a signed decimal with all 18 fractional digits, e.g.
    /// `"-0.500000000000000000"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / Self::SCALE as u128;
        let frac = magnitude % Self::SCALE as u128;
        write!(f, "{}{}.{:018}", sign, whole, frac)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl Zero for Fixed {
    #[inline]
    fn zero() -> Self {
        Fixed::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl CheckedAdd for Fixed {
    #[inline]
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Fixed::checked_add(*self, *v)
    }
}

impl CheckedSub for Fixed {
    #[inline]
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Fixed::checked_sub(*self, *v)
    }
}

impl CheckedNeg for Fixed {
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        Fixed::checked_neg(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_from_int() {
        assert_eq!(Fixed::from_int(0), Fixed::ZERO);
        assert_eq!(Fixed::from_int(1), Fixed::ONE);
        assert_eq!(Fixed::from_int(7).raw(), 7_000_000_000_000_000_000);
        assert_eq!(Fixed::from_int(-7).raw(), -7_000_000_000_000_000_000);
    }

    #[test]
    fn test_from_int_extremes() {
        // Lossless across the whole i64 domain.
        let max = Fixed::from_int(i64::MAX);
        assert_eq!(max.raw(), i64::MAX as i128 * Fixed::SCALE);
        let min = Fixed::from_int(i64::MIN);
        assert_eq!(min.raw(), i64::MIN as i128 * Fixed::SCALE);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let x = Fixed::from_raw(123_456_789);
        assert_eq!(x.raw(), 123_456_789);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Fixed::default(), Fixed::ZERO);
    }

    // ========================================
    // Ordering and Sign Tests
    // ========================================

    #[test]
    fn test_ordering() {
        assert!(Fixed::from_int(-1) < Fixed::ZERO);
        assert!(Fixed::ZERO < Fixed::ONE);
        assert!(Fixed::from_raw(1) > Fixed::ZERO);
    }

    #[test]
    fn test_is_negative() {
        assert!(Fixed::from_int(-1).is_negative());
        assert!(!Fixed::ZERO.is_negative());
        assert!(!Fixed::ONE.is_negative());
    }

    // ========================================
    // Checked Arithmetic Tests
    // ========================================

    #[test]
    fn test_checked_add_sub() {
        let a = Fixed::from_int(3);
        let b = Fixed::from_int(5);
        assert_eq!(a.checked_add(b), Some(Fixed::from_int(8)));
        assert_eq!(a.checked_sub(b), Some(Fixed::from_int(-2)));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Fixed::from_raw(i128::MAX);
        assert_eq!(max.checked_add(Fixed::from_raw(1)), None);
    }

    #[test]
    fn test_checked_sub_overflow() {
        let min = Fixed::from_raw(i128::MIN);
        assert_eq!(min.checked_sub(Fixed::from_raw(1)), None);
    }

    #[test]
    fn test_checked_neg() {
        assert_eq!(Fixed::from_int(4).checked_neg(), Some(Fixed::from_int(-4)));
        assert_eq!(Fixed::from_raw(i128::MIN).checked_neg(), None);
    }

    #[test]
    fn test_checked_abs() {
        assert_eq!(Fixed::from_int(-4).checked_abs(), Some(Fixed::from_int(4)));
        assert_eq!(Fixed::from_int(4).checked_abs(), Some(Fixed::from_int(4)));
        assert_eq!(Fixed::from_raw(i128::MIN).checked_abs(), None);
    }

    // ========================================
    // Multiplication Tests
    // ========================================

    #[test]
    fn test_mul_integers() {
        let a = Fixed::from_int(6);
        let b = Fixed::from_int(7);
        assert_eq!(a.checked_mul(b), Some(Fixed::from_int(42)));
    }

    #[test]
    fn test_mul_identity() {
        let x = Fixed::from_raw(123_456_789_123_456_789);
        assert_eq!(x.checked_mul(Fixed::ONE), Some(x));
        assert_eq!(Fixed::ONE.checked_mul(x), Some(x));
    }

    #[test]
    fn test_mul_by_zero() {
        let x = Fixed::from_int(123);
        assert_eq!(x.checked_mul(Fixed::ZERO), Some(Fixed::ZERO));
    }

    #[test]
    fn test_mul_signs() {
        let two = Fixed::from_int(2);
        let three = Fixed::from_int(3);
        assert_eq!(
            two.checked_neg().unwrap().checked_mul(three),
            Some(Fixed::from_int(-6))
        );
        assert_eq!(
            two.checked_mul(three.checked_neg().unwrap()),
            Some(Fixed::from_int(-6))
        );
        assert_eq!(
            two.checked_neg().unwrap().checked_mul(three.checked_neg().unwrap()),
            Some(Fixed::from_int(6))
        );
    }

    #[test]
    fn test_mul_fractional() {
        // 0.5 * 0.5 == 0.25
        let half = Fixed::from_raw(Fixed::SCALE / 2);
        assert_eq!(
            half.checked_mul(half),
            Some(Fixed::from_raw(Fixed::SCALE / 4))
        );
    }

    #[test]
    fn test_mul_truncates_toward_zero() {
        // (1e-18) * (1e-18) is 1e-36, which truncates to zero for either sign.
        let tiny = Fixed::from_raw(1);
        assert_eq!(tiny.checked_mul(tiny), Some(Fixed::ZERO));
        let neg_tiny = Fixed::from_raw(-1);
        assert_eq!(neg_tiny.checked_mul(tiny), Some(Fixed::ZERO));

        // 1.5 * (-1/3e18-ish): check a truncating case keeps magnitude semantics.
        // 7 * 1e-18 / 2 -> 3.5e-18 truncates to 3e-18 on magnitude, both signs.
        let seven_atto = Fixed::from_raw(7);
        let half = Fixed::from_raw(Fixed::SCALE / 2);
        assert_eq!(seven_atto.checked_mul(half), Some(Fixed::from_raw(3)));
        assert_eq!(
            seven_atto.checked_neg().unwrap().checked_mul(half),
            Some(Fixed::from_raw(-3))
        );
    }

    #[test]
    fn test_mul_overflow() {
        let big = Fixed::from_raw(i128::MAX);
        let two = Fixed::from_int(2);
        assert_eq!(big.checked_mul(two), None);
    }

    #[test]
    fn test_mul_large_in_range() {
        // 1e9 * 1e9 = 1e18, well inside the representable range but the raw
        // product needs more than 128 bits.
        let billion = Fixed::from_int(1_000_000_000);
        let expected = Fixed::from_raw(Fixed::SCALE * 1_000_000_000_000_000_000);
        assert_eq!(billion.checked_mul(billion), Some(expected));
    }

    // ========================================
    // Display Tests
    // ========================================

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Fixed::ZERO), "0.000000000000000000");
        assert_eq!(format!("{}", Fixed::ONE), "1.000000000000000000");
        assert_eq!(
            format!("{}", Fixed::from_raw(-500_000_000_000_000_000)),
            "-0.500000000000000000"
        );
        assert_eq!(
            format!("{}", Fixed::from_raw(3_141_500_000_000_000_000)),
            "3.141500000000000000"
        );
    }

    // ========================================
    // Trait Impl Tests
    // ========================================

    #[test]
    fn test_operator_impls() {
        assert_eq!(Fixed::from_int(2) + Fixed::from_int(3), Fixed::from_int(5));
        assert_eq!(Fixed::from_int(2) - Fixed::from_int(3), Fixed::from_int(-1));
        assert_eq!(-Fixed::from_int(2), Fixed::from_int(-2));
    }

    #[test]
    fn test_num_traits_impls() {
        use num_traits::{CheckedAdd, CheckedNeg, CheckedSub, Zero};
        assert!(Fixed::zero().is_zero());
        let a = Fixed::from_int(1);
        assert_eq!(CheckedAdd::checked_add(&a, &a), Some(Fixed::from_int(2)));
        assert_eq!(CheckedSub::checked_sub(&a, &a), Some(Fixed::ZERO));
        assert_eq!(CheckedNeg::checked_neg(&a), Some(Fixed::from_int(-1)));
    }

    #[test]
    fn test_serde_round_trip() {
        let x = Fixed::from_raw(-42_000_000_000_000_000_007);
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "-42000000000000000007");
        let back: Fixed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }

    // ========================================
    // Property Tests
    // ========================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Values up to |1e6| in real terms keep every product representable.
        fn bounded_raw() -> impl Strategy<Value = i128> {
            -1_000_000_000_000_000_000_000_000_i128..=1_000_000_000_000_000_000_000_000_i128
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(512))]

            #[test]
            fn mul_commutes(a in bounded_raw(), b in bounded_raw()) {
                let x = Fixed::from_raw(a);
                let y = Fixed::from_raw(b);
                prop_assert_eq!(x.checked_mul(y), y.checked_mul(x));
            }

            #[test]
            fn mul_sign_rule(a in bounded_raw(), b in bounded_raw()) {
                let x = Fixed::from_raw(a);
                let y = Fixed::from_raw(b);
                let product = x.checked_mul(y).unwrap();
                let negated = x.checked_neg().unwrap().checked_mul(y).unwrap();
                prop_assert_eq!(product.checked_neg().unwrap(), negated);
            }

            #[test]
            fn mul_one_is_identity(a in bounded_raw()) {
                let x = Fixed::from_raw(a);
                prop_assert_eq!(x.checked_mul(Fixed::ONE), Some(x));
            }
        }
    }
}

//! `num-traits` integration so `Fix64` works in code generic over numbers.
//!
//! The trait names carry the overflow policy: `Wrapping*` forwards to the
//! operators, `Saturating*` to the clamping methods, `Checked*` to the
//! `Option` forms.

use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, One, SaturatingAdd,
    SaturatingSub, ToPrimitive, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero,
};

use crate::fix64::Fix64;

impl Zero for Fix64 {
    fn zero() -> Self {
        Fix64::ZERO
    }

    fn is_zero(&self) -> bool {
        Fix64::is_zero(*self)
    }
}

impl One for Fix64 {
    fn one() -> Self {
        Fix64::ONE
    }
}

impl Bounded for Fix64 {
    fn min_value() -> Self {
        Fix64::MIN
    }

    fn max_value() -> Self {
        Fix64::MAX
    }
}

impl WrappingAdd for Fix64 {
    fn wrapping_add(&self, v: &Self) -> Self {
        Fix64::wrapping_add(*self, *v)
    }
}

impl WrappingSub for Fix64 {
    fn wrapping_sub(&self, v: &Self) -> Self {
        Fix64::wrapping_sub(*self, *v)
    }
}

impl WrappingMul for Fix64 {
    fn wrapping_mul(&self, v: &Self) -> Self {
        Fix64::wrapping_mul(*self, *v)
    }
}

impl WrappingNeg for Fix64 {
    fn wrapping_neg(&self) -> Self {
        Fix64::wrapping_neg(*self)
    }
}

impl SaturatingAdd for Fix64 {
    fn saturating_add(&self, v: &Self) -> Self {
        Fix64::saturating_add(*self, *v)
    }
}

impl SaturatingSub for Fix64 {
    fn saturating_sub(&self, v: &Self) -> Self {
        Fix64::saturating_sub(*self, *v)
    }
}

impl CheckedAdd for Fix64 {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Fix64::checked_add(*self, *v)
    }
}

impl CheckedSub for Fix64 {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Fix64::checked_sub(*self, *v)
    }
}

impl CheckedMul for Fix64 {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Fix64::checked_mul(*self, *v)
    }
}

impl CheckedDiv for Fix64 {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Fix64::checked_div(*self, *v)
    }
}

impl ToPrimitive for Fix64 {
    /// Nearest integer, ties away from zero.
    fn to_i64(&self) -> Option<i64> {
        Some(self.to_int())
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.to_int()).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fix64::to_f64(*self))
    }
}

impl FromPrimitive for Fix64 {
    /// `None` when `n * 2^24` leaves the raw range.
    fn from_i64(n: i64) -> Option<Self> {
        n.checked_mul(Fix64::ONE_RAW).map(Fix64::from_raw)
    }

    fn from_u64(n: u64) -> Option<Self> {
        i64::try_from(n).ok().and_then(Self::from_i64)
    }

    /// `None` for NaN and values outside the representable range.
    fn from_f64(n: f64) -> Option<Self> {
        let scaled = (n * Fix64::ONE_RAW as f64).round();
        if scaled.is_nan() || scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return None;
        }
        Some(Fix64::from_raw(scaled as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_generic<T: Zero + Copy + WrappingAdd>(values: &[T]) -> T {
        values
            .iter()
            .fold(T::zero(), |acc, v| WrappingAdd::wrapping_add(&acc, v))
    }

    #[test]
    fn identities() {
        assert_eq!(<Fix64 as Zero>::zero(), Fix64::ZERO);
        assert_eq!(<Fix64 as One>::one(), Fix64::ONE);
        assert!(Zero::is_zero(&Fix64::ZERO));
        assert_eq!(<Fix64 as Bounded>::max_value(), Fix64::MAX);
        assert_eq!(<Fix64 as Bounded>::min_value(), Fix64::MIN);
    }

    #[test]
    fn generic_code_uses_wrapping_policy() {
        let values = [Fix64::ONE, Fix64::HALF, Fix64::from_int(2)];
        assert_eq!(sum_generic(&values), Fix64::from_raw(3 * Fix64::ONE_RAW + Fix64::HALF_RAW));
        assert_eq!(sum_generic(&[Fix64::MAX, Fix64::EPSILON]), Fix64::MIN);
    }

    #[test]
    fn trait_policies_forward() {
        assert_eq!(SaturatingAdd::saturating_add(&Fix64::MAX, &Fix64::ONE), Fix64::MAX);
        assert_eq!(SaturatingSub::saturating_sub(&Fix64::MIN, &Fix64::ONE), Fix64::MIN);
        assert_eq!(WrappingNeg::wrapping_neg(&Fix64::MIN), Fix64::MIN);
        assert_eq!(CheckedDiv::checked_div(&Fix64::ONE, &Fix64::ZERO), None);
        assert_eq!(CheckedAdd::checked_add(&Fix64::MAX, &Fix64::EPSILON), None);
        assert_eq!(
            CheckedMul::checked_mul(&Fix64::from_int(6), &Fix64::HALF),
            Some(Fix64::from_int(3))
        );
    }

    #[test]
    fn primitive_conversions() {
        assert_eq!(Fix64::from_f64(2.5).to_i64(), Some(3));
        assert_eq!(Fix64::NEG_ONE.to_u64(), None);
        assert_eq!(<Fix64 as FromPrimitive>::from_i64(5), Some(Fix64::from_int(5)));
        assert_eq!(<Fix64 as FromPrimitive>::from_i64(1 << 40), None);
        assert_eq!(<Fix64 as FromPrimitive>::from_u64(u64::MAX), None);
        assert_eq!(<Fix64 as FromPrimitive>::from_f64(f64::NAN), None);
        assert_eq!(<Fix64 as FromPrimitive>::from_f64(1e20), None);
        assert_eq!(<Fix64 as FromPrimitive>::from_f64(0.5), Some(Fix64::HALF));
        assert_eq!(ToPrimitive::to_f64(&Fix64::HALF), Some(0.5));
    }
}

use crate::fix64::Fix64;

impl Fix64 {
    /// `-1`, `0` or `1`.
    #[inline]
    pub const fn sign(self) -> i32 {
        self.raw().signum() as i32
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.raw() < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.raw() > 0
    }

    /// Absolute value; `abs(MIN)` saturates to `MAX`.
    #[inline]
    pub const fn abs(self) -> Self {
        if self.raw() == Self::MIN_RAW {
            return Self::MAX;
        }
        self.fast_abs()
    }

    /// Branch-free absolute value; `fast_abs(MIN)` wraps back to `MIN`.
    #[inline]
    pub const fn fast_abs(self) -> Self {
        let raw = self.raw();
        let mask = raw >> 63;
        Self::from_raw(raw.wrapping_add(mask) ^ mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_values() {
        assert_eq!(Fix64::from_int(3).sign(), 1);
        assert_eq!(Fix64::EPSILON.sign(), 1);
        assert_eq!(Fix64::ZERO.sign(), 0);
        assert_eq!(Fix64::from_raw(-1).sign(), -1);
        assert_eq!(Fix64::MIN.sign(), -1);
        assert_eq!(Fix64::MAX.sign(), 1);
    }

    #[test]
    fn sign_is_odd() {
        for raw in [1, -1, 17, -17, i64::MAX, i64::MIN + 1] {
            let x = Fix64::from_raw(raw);
            assert_eq!((-x).sign(), -x.sign());
        }
    }

    #[test]
    fn abs_saturates_at_min() {
        assert_eq!(Fix64::MIN.abs(), Fix64::MAX);
        assert_eq!(Fix64::MIN.fast_abs(), Fix64::MIN);
    }

    #[test]
    fn abs_variants_agree_elsewhere() {
        for raw in [0, 1, -1, 123_456, -123_456, i64::MAX, i64::MIN + 1] {
            let x = Fix64::from_raw(raw);
            assert_eq!(x.abs().raw(), raw.abs());
            assert_eq!(x.fast_abs(), x.abs());
        }
    }

    #[test]
    fn sign_predicates() {
        assert!(Fix64::NEG_ONE.is_negative());
        assert!(!Fix64::ZERO.is_negative());
        assert!(!Fix64::ZERO.is_positive());
        assert!(Fix64::HALF.is_positive());
    }
}

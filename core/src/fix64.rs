use serde::{Deserialize, Serialize};

/// Fix64(Q40.24): value = raw / 2^24
///
/// The raw `i64` is the only state. Every `i64` is a valid raw, so no
/// instance can be out of range; overflow only exists as a policy on the
/// operations that produce new values.
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fix64 {
    raw: i64,
}

impl Fix64 {
    /// Bits of the integer part, sign included.
    pub const INTEGER_BITS: u32 = 40;
    pub const FRAC_BITS: u32 = 64 - Self::INTEGER_BITS;

    pub const ONE_RAW: i64 = 1i64 << Self::FRAC_BITS;
    pub const HALF_RAW: i64 = 1i64 << (Self::FRAC_BITS - 1);
    pub const MAX_RAW: i64 = i64::MAX;
    pub const MIN_RAW: i64 = i64::MIN;
    /// Smallest positive raw, one unit of resolution.
    pub const POS_MIN_RAW: i64 = 1;

    pub const ZERO: Fix64 = Fix64 { raw: 0 };
    pub const ONE: Fix64 = Fix64 { raw: Self::ONE_RAW };
    pub const NEG_ONE: Fix64 = Fix64 { raw: -Self::ONE_RAW };
    pub const HALF: Fix64 = Fix64 { raw: Self::HALF_RAW };
    pub const MAX: Fix64 = Fix64 { raw: Self::MAX_RAW };
    pub const MIN: Fix64 = Fix64 { raw: Self::MIN_RAW };
    pub const EPSILON: Fix64 = Fix64 { raw: Self::POS_MIN_RAW };

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.raw
    }

    #[inline]
    pub const fn to_raw(self) -> i64 {
        self.raw
    }

    /// Integer part rounded toward negative infinity.
    #[inline]
    pub const fn int_part(self) -> i64 {
        self.raw >> Self::FRAC_BITS
    }

    /// Low `FRAC_BITS` bits of the raw value, always non-negative.
    #[inline]
    pub const fn frac_part(self) -> i64 {
        self.raw & (Self::ONE_RAW - 1)
    }
}

#[inline]
pub(crate) fn clamp_i128_to_i64(x: i128) -> i64 {
    if x > (i64::MAX as i128) {
        i64::MAX
    } else if x < (i64::MIN as i128) {
        i64::MIN
    } else {
        x as i64
    }
}

#[inline]
pub(crate) fn fits_i64(x: i128) -> bool {
    x >= i64::MIN as i128 && x <= i64::MAX as i128
}

//! Lossy mappings between `Fix64` and native integers and floats.
//!
//! This is the only layer where rounding is observable. Integer and float
//! inputs round half away from zero; float outputs are plain `raw / 2^24`
//! views and are not authoritative.

use crate::fix64::Fix64;

impl Fix64 {
    /// Resolution as a float, `1 / 2^24`.
    pub const DELTA: f64 = 1.0 / Self::ONE_RAW as f64;

    const SCALE_F64: f64 = Self::ONE_RAW as f64;
    const SCALE_F32: f32 = Self::ONE_RAW as f32;

    /// `n * 2^24`. Out-of-range integers wrap, the same way `+` does.
    #[inline]
    pub const fn from_int(value: i64) -> Self {
        Self::from_raw(value.wrapping_mul(Self::ONE_RAW))
    }

    /// `round(x * 2^24)`, half away from zero.
    ///
    /// The product is formed in `f64`, which is exact for every `f32` input
    /// because the scale is a power of two.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(value as f64)
    }

    /// `round(x * 2^24)`, half away from zero.
    ///
    /// Values beyond the representable range saturate to `MIN`/`MAX` and NaN
    /// maps to zero.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::from_raw((value * Self::SCALE_F64).round() as i64)
    }

    /// Nearest integer, ties away from zero (`3.5 -> 4`, `-3.5 -> -4`).
    pub fn to_int(self) -> i64 {
        let raw = self.raw() as i128;
        let half = Self::HALF_RAW as i128;
        let rounded = if raw >= 0 {
            (raw + half) >> Self::FRAC_BITS
        } else {
            -((-raw + half) >> Self::FRAC_BITS)
        };
        rounded as i64
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.raw() as f32 / Self::SCALE_F32
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw() as f64 / Self::SCALE_F64
    }

    /// `Fix64(<raw>, <value>)`, for logs and debugging output.
    pub fn describe(self) -> String {
        format!("Fix64({}, {})", self.raw(), self.to_f64())
    }
}

impl From<i32> for Fix64 {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_int(value as i64)
    }
}

impl From<i64> for Fix64 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl From<Fix64> for f64 {
    #[inline]
    fn from(value: Fix64) -> Self {
        value.to_f64()
    }
}

impl From<Fix64> for f32 {
    #[inline]
    fn from(value: Fix64) -> Self {
        value.to_f32()
    }
}

//! Equality and ordering are derived on the raw field, so `Fix64` orders
//! exactly like signed `i64`. This module adds truthiness.

use crate::fix64::Fix64;

impl Fix64 {
    /// Zero, and only zero, is falsy.
    #[inline]
    pub const fn is_truthy(self) -> bool {
        self.raw() != 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw() == 0
    }
}

impl From<Fix64> for bool {
    #[inline]
    fn from(value: Fix64) -> Self {
        value.is_truthy()
    }
}

/// `!x` is true iff `x` is zero.
impl core::ops::Not for Fix64 {
    type Output = bool;
    #[inline]
    fn not(self) -> bool {
        !self.is_truthy()
    }
}

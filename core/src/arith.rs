//! Arithmetic on the raw representation.
//!
//! Two overflow policies live side by side as separately named operations:
//! the operators (`+ - * /`, unary `-`) wrap like native `i64`, the
//! `saturating_*` methods clamp to `[MIN, MAX]`. Products and quotients are
//! formed in `i128` so no intermediate bits are lost.

use crate::fix64::{clamp_i128_to_i64, fits_i64, Fix64};
use crate::signals::{ArithmeticFaultKind, FaultContext, Signal, SignalSink};

/// `(a * b) >> FRAC_BITS`, floor rounding of the discarded bits.
#[inline]
fn mul_wide(a: i64, b: i64) -> i128 {
    ((a as i128) * (b as i128)) >> Fix64::FRAC_BITS
}

/// `(a << FRAC_BITS) / b`, quotient truncated toward zero. `b` must be nonzero.
#[inline]
fn div_wide(a: i64, b: i64) -> i128 {
    ((a as i128) << Fix64::FRAC_BITS) / (b as i128)
}

impl Fix64 {
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().wrapping_add(rhs.raw()))
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().wrapping_sub(rhs.raw()))
    }

    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_raw(mul_wide(self.raw(), rhs.raw()) as i64)
    }

    /// Panics if `rhs` is zero.
    #[inline]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        if rhs.raw() == 0 {
            panic!("Fix64 division by zero");
        }
        Self::from_raw(div_wide(self.raw(), rhs.raw()) as i64)
    }

    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self::from_raw(self.raw().wrapping_neg())
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().saturating_add(rhs.raw()))
    }

    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().saturating_sub(rhs.raw()))
    }

    /// Same as [`Fix64::saturating_add`].
    #[inline]
    pub const fn safe_add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    /// Same as [`Fix64::saturating_sub`].
    #[inline]
    pub const fn safe_sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    #[inline]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        Self::from_raw(clamp_i128_to_i64(mul_wide(self.raw(), rhs.raw())))
    }

    /// Clamps an out-of-range quotient; a zero divisor is still an error.
    #[inline]
    pub fn saturating_div(self, rhs: Self) -> Result<Self, ArithmeticFaultKind> {
        if rhs.raw() == 0 {
            return Err(ArithmeticFaultKind::DivByZero);
        }
        Ok(Self::from_raw(clamp_i128_to_i64(div_wide(
            self.raw(),
            rhs.raw(),
        ))))
    }

    /// `-MIN` saturates to `MAX`.
    #[inline]
    pub const fn saturating_neg(self) -> Self {
        Self::from_raw(self.raw().saturating_neg())
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.raw().checked_add(rhs.raw()).map(Self::from_raw)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.raw().checked_sub(rhs.raw()).map(Self::from_raw)
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let wide = mul_wide(self.raw(), rhs.raw());
        fits_i64(wide).then(|| Self::from_raw(wide as i64))
    }

    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.try_div(rhs).ok()
    }

    /// Division with an explicit fault instead of a panic or a wrapped result.
    #[inline]
    pub fn try_div(self, rhs: Self) -> Result<Self, ArithmeticFaultKind> {
        if rhs.raw() == 0 {
            return Err(ArithmeticFaultKind::DivByZero);
        }
        let q = div_wide(self.raw(), rhs.raw());
        if !fits_i64(q) {
            return Err(ArithmeticFaultKind::Overflow);
        }
        Ok(Self::from_raw(q as i64))
    }

    /// `self /= rhs` for replay-critical code.
    ///
    /// On a zero divisor the assignment is void: `self` keeps its value and
    /// an arithmetic fault is emitted to `sink`. An out-of-range quotient is
    /// clamped.
    pub fn div_assign_det(&mut self, rhs: Self, ctx: FaultContext, sink: &mut dyn SignalSink) {
        match self.saturating_div(rhs) {
            Ok(q) => *self = q,
            Err(kind) => sink.emit(Signal::ArithmeticFault { ctx, kind }),
        }
    }
}

// ---- operators: wrapping, like native fixed-width integers ----

impl core::ops::Add for Fix64 {
    type Output = Fix64;
    #[inline]
    fn add(self, rhs: Fix64) -> Fix64 {
        self.wrapping_add(rhs)
    }
}

impl core::ops::Sub for Fix64 {
    type Output = Fix64;
    #[inline]
    fn sub(self, rhs: Fix64) -> Fix64 {
        self.wrapping_sub(rhs)
    }
}

impl core::ops::Mul for Fix64 {
    type Output = Fix64;
    #[inline]
    fn mul(self, rhs: Fix64) -> Fix64 {
        self.wrapping_mul(rhs)
    }
}

impl core::ops::Div for Fix64 {
    type Output = Fix64;
    #[inline]
    fn div(self, rhs: Fix64) -> Fix64 {
        self.wrapping_div(rhs)
    }
}

impl core::ops::Neg for Fix64 {
    type Output = Fix64;
    #[inline]
    fn neg(self) -> Fix64 {
        self.wrapping_neg()
    }
}

//! Exact decimal text for `Fix64`.
//!
//! Every raw value has a terminating decimal expansion (the scale is a power
//! of two), so `Display` prints it exactly and parsing is exact up to the
//! final truncation to the resolution.

use std::fmt;
use std::str::FromStr;

use crate::fix64::{clamp_i128_to_i64, Fix64};

/// Fractional digits kept while parsing. Any `k / 2^24` ends within 24
/// digits, so cutting later digits never changes the truncated result.
const MAX_PARSE_FRAC_DIGITS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseFix64Error {
    Empty,
    InvalidDigit,
    MissingDigits,
}

impl fmt::Display for ParseFix64Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFix64Error::Empty => write!(f, "empty Fix64 literal"),
            ParseFix64Error::InvalidDigit => write!(f, "invalid digit in Fix64 literal"),
            ParseFix64Error::MissingDigits => write!(f, "Fix64 literal is missing digits"),
        }
    }
}

impl std::error::Error for ParseFix64Error {}

impl fmt::Display for Fix64 {
    /// `{:.N}` truncates to `N` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.raw() as i128;
        let abs = raw.abs();
        let frac_mask = (Fix64::ONE_RAW as i128) - 1;

        let int_part = abs >> Fix64::FRAC_BITS;
        let mut frac = abs & frac_mask;

        let mut digits = String::new();
        let limit = f.precision().unwrap_or(usize::MAX);
        while frac != 0 && digits.len() < limit {
            frac *= 10;
            digits.push((b'0' + (frac >> Fix64::FRAC_BITS) as u8) as char);
            frac &= frac_mask;
        }
        if f.precision().is_some() {
            while digits.len() < limit {
                digits.push('0');
            }
        }

        let mut out = String::new();
        if raw < 0 {
            out.push('-');
        }
        out.push_str(&int_part.to_string());
        if !digits.is_empty() {
            out.push('.');
            out.push_str(&digits);
        }
        f.write_str(&out)
    }
}

impl FromStr for Fix64 {
    type Err = ParseFix64Error;

    /// `[+-]digits[.digits]`, truncated toward zero to the resolution.
    /// Integer parts beyond the range saturate.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseFix64Error::Empty);
        }

        let (negative, body) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
            None => (body, None),
        };
        if int_digits.is_empty() || frac_digits.is_some_and(str::is_empty) {
            return Err(ParseFix64Error::MissingDigits);
        }

        let mut int_value: i128 = 0;
        for ch in int_digits.bytes() {
            if !ch.is_ascii_digit() {
                return Err(ParseFix64Error::InvalidDigit);
            }
            int_value = int_value
                .saturating_mul(10)
                .saturating_add((ch - b'0') as i128);
        }
        let mut raw = int_value.saturating_mul(Fix64::ONE_RAW as i128);

        if let Some(frac_digits) = frac_digits {
            let mut frac_value: i128 = 0;
            let mut denom: i128 = 1;
            for (idx, ch) in frac_digits.bytes().enumerate() {
                if !ch.is_ascii_digit() {
                    return Err(ParseFix64Error::InvalidDigit);
                }
                if idx < MAX_PARSE_FRAC_DIGITS {
                    frac_value = frac_value * 10 + (ch - b'0') as i128;
                    denom *= 10;
                }
            }
            raw = raw.saturating_add((frac_value << Fix64::FRAC_BITS) / denom);
        }

        let signed = if negative { -raw } else { raw };
        Ok(Fix64::from_raw(clamp_i128_to_i64(signed)))
    }
}

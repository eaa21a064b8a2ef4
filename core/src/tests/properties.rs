use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Fix64;

const SEED: u64 = 0x5eed_f1c5_0064;
const PAIRS: usize = 1000;
const BOUND: i64 = 10_000;

fn pairs(seed: u64) -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..PAIRS)
        .map(|_| (rng.random_range(-BOUND..=BOUND), rng.random_range(-BOUND..=BOUND)))
        .collect()
}

#[test]
fn raw_add_matches_integer_add_and_safe_add() {
    for (a, b) in pairs(SEED) {
        let fa = Fix64::from_raw(a);
        let fb = Fix64::from_raw(b);
        let expected = Fix64::from_raw(a + b);
        assert_eq!(fa + fb, expected, "{a} + {b}");
        assert_eq!(fa.safe_add(fb), expected, "{a} safe+ {b}");
    }
}

#[test]
fn raw_sub_matches_integer_sub_and_safe_sub() {
    for (a, b) in pairs(SEED + 1) {
        let fa = Fix64::from_raw(a);
        let fb = Fix64::from_raw(b);
        let expected = Fix64::from_raw(a - b);
        assert_eq!(fa - fb, expected, "{a} - {b}");
        assert_eq!(fa.safe_sub(fb), expected, "{a} safe- {b}");
    }
}

#[test]
fn integer_mul_is_exact() {
    for (a, b) in pairs(SEED + 2) {
        assert_eq!(
            Fix64::from_int(a) * Fix64::from_int(b),
            Fix64::from_int(a * b),
            "{a} * {b}"
        );
    }
}

#[test]
fn integer_div_is_within_one_unit_of_float_quotient() {
    for (a, b) in pairs(SEED + 3) {
        if b == 0 {
            continue;
        }
        let q = Fix64::from_int(a) / Fix64::from_int(b);
        let reference = Fix64::from_f64(a as f64 / b as f64);
        let diff = (q.raw() - reference.raw()).abs();
        assert!(diff <= 1, "{a} / {b}: {} vs {}", q.describe(), reference.describe());
    }
}

#[test]
fn integer_round_trip() {
    for (a, _) in pairs(SEED + 4) {
        let n = a * 1_000_003;
        assert_eq!(Fix64::from_int(n).to_int(), n);
    }
}

#[test]
fn ordering_is_consistent_with_raw() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    for _ in 0..PAIRS {
        let a: i64 = rng.random();
        let b: i64 = rng.random();
        assert_eq!(Fix64::from_raw(a).cmp(&Fix64::from_raw(b)), a.cmp(&b));
    }
}

#[test]
fn sign_is_odd_for_random_values() {
    let mut rng = StdRng::seed_from_u64(SEED + 6);
    for _ in 0..PAIRS {
        let raw: i64 = rng.random_range(i64::MIN + 1..=i64::MAX);
        if raw == 0 {
            continue;
        }
        let x = Fix64::from_raw(raw);
        assert_eq!((-x).sign(), -x.sign());
        assert_eq!(x.abs(), x.fast_abs());
    }
}

#[test]
fn saturating_equals_wrapping_when_in_range() {
    let mut rng = StdRng::seed_from_u64(SEED + 7);
    for _ in 0..PAIRS {
        let a: i64 = rng.random_range(i64::MIN / 2..=i64::MAX / 2);
        let b: i64 = rng.random_range(i64::MIN / 2..=i64::MAX / 2);
        let fa = Fix64::from_raw(a);
        let fb = Fix64::from_raw(b);
        assert_eq!(fa.saturating_add(fb), fa + fb);
        assert_eq!(fa.saturating_sub(fb), fa - fb);
    }
}

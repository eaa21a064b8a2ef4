use crate::fix64::Fix64;

impl Fix64 {
    /// Reference raw values for [`Fix64::determinism_vector_v1`].
    pub const DETERMINISM_VECTOR_V1_EXPECTED: [i64; 15] = [
        0x0000_0000_0180_0000,  // 1 + 0.5
        0x0000_0000_0080_0000,  // 1 - 0.5
        -0x0000_0000_0080_0000, // 0.5 - 1
        0x0000_0000_0080_0000,  // 1 * 0.5
        0x0000_0000_0200_0000,  // 1 / 0.5
        0x0000_0000_0080_0000,  // 0.5 / 1
        0x0000_0000_0000_0000,  // -1 + 1
        i64::MIN,               // MAX + eps, wraps
        i64::MAX,               // MAX + eps, saturates
        i64::MAX,               // abs(MIN)
        i64::MIN,               // fast_abs(MIN)
        0x0000_0000_0055_5555,  // 1 / 3
        0x0000_0000_00FF_FFFF,  // (1 / 3) * 3
        -0x0000_0000_0000_0001, // -eps * 0.5, floor
        -0x0000_0000_0280_0000, // from -2.5
    ];

    /// Raw results of a fixed set of operations, for cross-platform
    /// comparison (v1).
    pub fn determinism_vector_v1() -> [i64; 15] {
        let a = Fix64::from_raw(0x0000_0000_0100_0000); // 1.0
        let b = Fix64::from_raw(0x0000_0000_0080_0000); // 0.5
        let c = Fix64::NEG_ONE;
        let three = Fix64::from_int(3);
        let third = a / three;
        [
            (a + b).raw(),
            (a - b).raw(),
            (b - a).raw(),
            (a * b).raw(),
            (a / b).raw(),
            (b / a).raw(),
            (c + a).raw(),
            (Fix64::MAX + Fix64::EPSILON).raw(),
            Fix64::MAX.saturating_add(Fix64::EPSILON).raw(),
            Fix64::MIN.abs().raw(),
            Fix64::MIN.fast_abs().raw(),
            third.raw(),
            (third * three).raw(),
            (-Fix64::EPSILON * b).raw(),
            Fix64::from_f64(-2.5).raw(),
        ]
    }

    /// blake3 over the little-endian bytes of the computed vector.
    pub fn determinism_digest() -> String {
        let mut hasher = blake3::Hasher::new();
        for value in Self::determinism_vector_v1() {
            hasher.update(&value.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

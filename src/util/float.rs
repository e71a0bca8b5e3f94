//! Approximate floating-point equality measured in units in the last place.
//!
//! Two doubles of the same sign are ordered the same way as their bit patterns
//! read as signed 64-bit integers, so the integer gap between the patterns
//! counts how many representable values lie between them.

/// Tolerance, in ULPs, used by [`is_zero`].
pub const ZERO_TOLERANCE_ULPS: u64 = 10;

/// Check whether two doubles are within `units_of_precision` ULPs of each other.
///
/// Values of opposite sign are only equal when they compare equal with `==`,
/// which covers `0.0` against `-0.0`. A NaN operand always yields `false`.
/// Infinities follow the bit-pattern rule: `+inf` is near `+inf` and to
/// `f64::MAX` within a single unit, but never near `-inf`.
pub fn is_nearly_equal(a: f64, b: f64, units_of_precision: u64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let bits_a = a.to_bits() as i64;
    let bits_b = b.to_bits() as i64;

    if (bits_a < 0) != (bits_b < 0) {
        return a == b;
    }

    bits_a.abs_diff(bits_b) <= units_of_precision
}

/// Check whether a double is zero within [`ZERO_TOLERANCE_ULPS`].
///
/// Only non-negative subnormals this close to `0.0` qualify; negative values
/// other than `-0.0` have the opposite sign bit and are rejected.
pub fn is_zero(value: f64) -> bool {
    is_nearly_equal(value, 0.0, ZERO_TOLERANCE_ULPS)
}

//! Integer math helpers.

/// Raise `base` to `exponent` by repeated squaring.
///
/// Returns `None` when an intermediate product overflows `i64`.
pub fn power(base: i64, exponent: u32) -> Option<i64> {
    if exponent == 0 {
        return Some(1);
    }

    if exponent % 2 == 0 {
        let half = power(base, exponent / 2)?;
        half.checked_mul(half)
    } else {
        base.checked_mul(power(base, exponent - 1)?)
    }
}

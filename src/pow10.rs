use crate::{Result, ScaleError};

/// Largest exponent `pow10` can answer: 10^19 fits in a u64, 10^20 does not.
pub const MAX_POW10_EXPONENT: u32 = 19;

/// Powers of ten, indexed by exponent.
///
/// Strictly increasing; the last entry is 10^19, the largest power of ten
/// representable in a u64.
const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Returns 10^`exponent` as an exact u64.
///
/// Direct table lookup, no computation. Fails with
/// [`ScaleError::ExponentOutOfRange`] for exponents above
/// [`MAX_POW10_EXPONENT`].
#[inline(always)]
#[must_use = "this returns the result of the lookup, it has no side effects"]
pub const fn pow10(exponent: u32) -> Result<u64> {
    if exponent > MAX_POW10_EXPONENT {
        return Err(ScaleError::ExponentOutOfRange);
    }
    Ok(POW10[exponent as usize])
}

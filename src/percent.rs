use crate::pow10::pow10;
use crate::{Result, ScaleError, MAX_DECIMALS};

/// Percent divisors for output precisions 0..=9: `(100 * 10^d, 50 * 10^d)`.
///
/// The divisor folds the percent-to-fraction division (by 100) together with
/// the output precision; the half-divisor is added before dividing to round
/// half-up. 100 is even, so the half is exact for every entry.
const PERCENT_DIVISORS: [(u64, u64); 10] = [
    (100, 50),
    (1_000, 500),
    (10_000, 5_000),
    (100_000, 50_000),
    (1_000_000, 500_000),
    (10_000_000, 5_000_000),
    (100_000_000, 50_000_000),
    (1_000_000_000, 500_000_000),
    (10_000_000_000, 5_000_000_000),
    (100_000_000_000, 50_000_000_000),
];

/// Returns `(100 * 10^decimals, 50 * 10^decimals)` for percentage math.
///
/// Decimals 0..=9 come straight from the table; 10..=18 are computed from
/// the power table behind an overflow guard. Fails with
/// [`ScaleError::DecimalsOutOfRange`] for 19 and above (checked before the
/// power lookup: 10^19 itself fits in a u64, but multiplying it by 100 never
/// does), and with [`ScaleError::DivisorOverflow`] when `100 * 10^decimals`
/// does not fit — which happens at decimals = 18.
#[inline]
#[must_use = "this returns the result of the lookup, it has no side effects"]
pub const fn percent_divisor(decimals: u32) -> Result<(u64, u64)> {
    if decimals < PERCENT_DIVISORS.len() as u32 {
        let (divisor, half_divisor) = PERCENT_DIVISORS[decimals as usize];
        return Ok((divisor, half_divisor));
    }
    if decimals > MAX_DECIMALS {
        return Err(ScaleError::DecimalsOutOfRange);
    }
    let power = match pow10(decimals) {
        Ok(power) => power,
        Err(e) => return Err(e),
    };
    if power > u64::MAX / 100 {
        return Err(ScaleError::DivisorOverflow);
    }
    Ok((100 * power, 50 * power))
}

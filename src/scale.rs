use crate::pow10::pow10;
use crate::{Result, ScaleError, MAX_DECIMALS};

/// Scale factors for precision deltas 0..=9: `(10^e, 10^e / 2)`.
///
/// The half-factor is what gets added before a scale-down division to round
/// half-up. For e = 0 the factor is 1 and no rounding is needed, so the
/// half-factor is 0.
const SCALE_FACTORS: [(u64, u64); 10] = [
    (1, 0),
    (10, 5),
    (100, 50),
    (1_000, 500),
    (10_000, 5_000),
    (100_000, 50_000),
    (1_000_000, 500_000),
    (10_000_000, 5_000_000),
    (100_000_000, 50_000_000),
    (1_000_000_000, 500_000_000),
];

/// Returns `(10^delta, 10^delta / 2)` for a precision delta.
///
/// Deltas 0..=9 come straight from the table; 10..=18 are computed from the
/// power table. A delta of 19 or more is rejected with
/// [`ScaleError::DeltaOutOfRange`]: scaling any nonzero amount up by 10^19
/// always overflows, so the engine caps the delta below that.
#[inline]
#[must_use = "this returns the result of the lookup, it has no side effects"]
pub const fn scale_factors(delta: u32) -> Result<(u64, u64)> {
    if delta < SCALE_FACTORS.len() as u32 {
        let (factor, half_factor) = SCALE_FACTORS[delta as usize];
        return Ok((factor, half_factor));
    }
    if delta > MAX_DECIMALS {
        return Err(ScaleError::DeltaOutOfRange);
    }
    let factor = match pow10(delta) {
        Ok(power) => power,
        Err(e) => return Err(e),
    };
    Ok((factor, factor / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_path_entries() {
        assert_eq!(scale_factors(0), Ok((1, 0)));
        assert_eq!(scale_factors(1), Ok((10, 5)));
        assert_eq!(scale_factors(3), Ok((1_000, 500)));
        assert_eq!(scale_factors(9), Ok((1_000_000_000, 500_000_000)));
    }

    #[test]
    fn test_slow_path_entries() {
        assert_eq!(scale_factors(10), Ok((10_000_000_000, 5_000_000_000)));
        assert_eq!(
            scale_factors(18),
            Ok((1_000_000_000_000_000_000, 500_000_000_000_000_000))
        );
    }

    #[test]
    fn test_delta_out_of_range() {
        assert_eq!(scale_factors(19), Err(ScaleError::DeltaOutOfRange));
        assert_eq!(scale_factors(20), Err(ScaleError::DeltaOutOfRange));
        assert_eq!(scale_factors(u32::MAX), Err(ScaleError::DeltaOutOfRange));
    }

    #[test]
    fn test_pairs_consistent_with_pow10() {
        for delta in 0..=18u32 {
            let (factor, half_factor) = scale_factors(delta).unwrap();
            assert_eq!(factor, pow10(delta).unwrap());
            assert_eq!(half_factor, factor / 2);
        }
    }
}

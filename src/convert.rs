use crate::percent::percent_divisor;
use crate::scale::scale_factors;
use crate::{Result, ScaleError};

// ============================================================================
// Precision conversion
// ============================================================================

/// Converts `amount` from `original_decimals` to `target_decimals`.
///
/// Scaling up multiplies by a power of ten and is exact; the multiplication
/// is guarded and fails with [`ScaleError::ScaleOverflow`] rather than
/// wrapping. Scaling down divides by a power of ten with round-half-up:
/// half the factor is added before the integer division, so a remainder at
/// or above the midpoint rounds away from zero.
///
/// Returns `amount` unchanged when the precisions are equal or the amount is
/// zero. Fails with [`ScaleError::DeltaOutOfRange`] when the precisions
/// differ by 19 or more.
///
/// # Example
///
/// ```rust
/// use fixscale::convert_precision;
///
/// assert_eq!(convert_precision(1_000_000, 6, 9), Ok(1_000_000_000));
/// assert_eq!(convert_precision(1_500, 9, 6), Ok(2)); // midpoint rounds up
/// ```
#[inline]
#[must_use = "this returns the converted amount, it has no side effects"]
pub const fn convert_precision(
    amount: u64,
    original_decimals: u32,
    target_decimals: u32,
) -> Result<u64> {
    if original_decimals == target_decimals || amount == 0 {
        return Ok(amount);
    }

    let delta = original_decimals.abs_diff(target_decimals);
    let (factor, half_factor) = match scale_factors(delta) {
        Ok(pair) => pair,
        Err(e) => return Err(e),
    };

    if target_decimals > original_decimals {
        // Scale up: exact, guard the multiplication.
        if amount > u64::MAX / factor {
            return Err(ScaleError::ScaleOverflow);
        }
        Ok(amount * factor)
    } else {
        // Scale down: round half-up. The rounding addition itself can leave
        // the u64 range for amounts near the top; that is a guard violation
        // like any other, not a wrap.
        match amount.checked_add(half_factor) {
            Some(biased) => Ok(biased / factor),
            None => Err(ScaleError::ScaleOverflow),
        }
    }
}

// ============================================================================
// Percentage calculation
// ============================================================================

/// Computes `fee_percent` hundredths of a percent of `amount`, rounded
/// half-up at `decimals` output precision.
///
/// The formula is `(amount * fee_percent) / (100 * 10^decimals)` with half
/// the divisor added before the division. The product is guarded and fails
/// with [`ScaleError::MultiplicationOverflow`] rather than wrapping; the
/// divisor itself fails with [`ScaleError::DivisorOverflow`] at
/// decimals = 18 and [`ScaleError::DecimalsOutOfRange`] at 19 and above.
///
/// Returns 0 when either `amount` or `fee_percent` is zero, without touching
/// the divisor.
///
/// # Example
///
/// ```rust
/// use fixscale::percent_amount;
///
/// // 0.5% of 1.0 (6-decimals amount), result at 2 extra decimals
/// assert_eq!(percent_amount(1_000_000, 50, 2), Ok(5_000));
/// ```
#[inline]
#[must_use = "this returns the percentage amount, it has no side effects"]
pub const fn percent_amount(amount: u64, fee_percent: u64, decimals: u32) -> Result<u64> {
    if amount == 0 || fee_percent == 0 {
        return Ok(0);
    }

    let (divisor, half_divisor) = match percent_divisor(decimals) {
        Ok(pair) => pair,
        Err(e) => return Err(e),
    };

    if amount > u64::MAX / fee_percent {
        return Err(ScaleError::MultiplicationOverflow);
    }
    let product = amount * fee_percent;

    match product.checked_add(half_divisor) {
        Some(biased) => Ok(biased / divisor),
        None => Err(ScaleError::MultiplicationOverflow),
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_identity_same_decimals() {
        assert_eq!(convert_precision(123_456, 6, 6), Ok(123_456));
        assert_eq!(convert_precision(u64::MAX, 18, 18), Ok(u64::MAX));
        // Equal precisions short-circuit before any range validation.
        assert_eq!(convert_precision(7, 40, 40), Ok(7));
    }

    #[test]
    fn test_zero_absorption() {
        assert_eq!(convert_precision(0, 0, 18), Ok(0));
        assert_eq!(convert_precision(0, 18, 0), Ok(0));
        assert_eq!(convert_precision(0, 3, 9), Ok(0));
    }

    #[test]
    fn test_scale_up_basic() {
        assert_eq!(convert_precision(1_000_000, 6, 9), Ok(1_000_000_000));
        assert_eq!(convert_precision(1, 0, 18), Ok(1_000_000_000_000_000_000));
        assert_eq!(convert_precision(42, 2, 4), Ok(4_200));
    }

    #[test]
    fn test_scale_up_is_exact() {
        // No rounding in the scale-up direction: result / factor recovers
        // the input for every delta.
        let amount = 987_654_321u64;
        for delta in 1..=10u32 {
            let result = convert_precision(amount, 0, delta).unwrap();
            assert_eq!(result % amount, 0);
            assert_eq!(result / 10u64.pow(delta), amount);
        }
    }

    #[test]
    fn test_scale_down_basic() {
        assert_eq!(convert_precision(1_500_000_000, 9, 6), Ok(1_500_000));
        assert_eq!(convert_precision(1_234_567, 6, 3), Ok(1_235));
        assert_eq!(convert_precision(1_000_000_000_000_000_000, 18, 0), Ok(1));
    }

    #[test]
    fn test_scale_down_slow_path() {
        // delta = 12 goes through the computed fallback, not the table
        assert_eq!(convert_precision(5_000_000_000_000, 12, 0), Ok(5));
        assert_eq!(convert_precision(1_500_000_000_000, 12, 0), Ok(2));
    }

    #[test]
    fn test_scale_up_slow_path() {
        assert_eq!(convert_precision(5, 0, 12), Ok(5_000_000_000_000));
    }

    #[test]
    fn test_round_trip_up_then_down() {
        let amount = 123_456_789u64;
        let up = convert_precision(amount, 6, 15).unwrap();
        assert_eq!(convert_precision(up, 15, 6), Ok(amount));
    }
}

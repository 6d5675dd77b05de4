//! Overflow-safe decimal rescaling and percentage math for `u64` amounts
//!
//! This library provides deterministic fixed-point arithmetic for hosts that
//! only have unsigned 64-bit integers (no floating point): token runtimes,
//! contract VMs, embedded targets. It answers two questions correctly instead
//! of approximately:
//!
//! - **Rescaling**: convert an amount expressed with one decimal precision
//!   into another precision, rounding half-up when scaling down and refusing
//!   to overflow when scaling up.
//! - **Percentage**: take a percentage of an amount at a chosen output
//!   precision with round-half-up, instead of silently truncating.
//!
//! ## Features
//!
//! - **Exact integer math**: no floating-point rounding errors
//! - **Guarded arithmetic**: every step that could overflow is checked first;
//!   a guard violation returns an error, never a wrapped value
//! - **Constant lookup tables**: powers of ten and divisors for the common
//!   precisions (0..=9) are table lookups, not computed
//! - **`const fn` throughout**: results fold at compile time for constant
//!   inputs
//! - **no_std compatible**: works in embedded and WebAssembly environments
//!
//! ## Example
//!
//! ```rust
//! use fixscale::{convert_precision, percent_amount};
//!
//! // 1.0 at 6 decimals -> 1.0 at 9 decimals
//! assert_eq!(convert_precision(1_000_000, 6, 9), Ok(1_000_000_000));
//!
//! // 1.5 at 9 decimals -> 1.5 at 6 decimals (no precision lost)
//! assert_eq!(convert_precision(1_500_000_000, 9, 6), Ok(1_500_000));
//!
//! // 0.5% (50 hundredths of a percent) of 1.0, at 2 extra decimals
//! assert_eq!(percent_amount(1_000_000, 50, 2), Ok(5_000));
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod convert;
mod percent;
mod pow10;
mod scale;

pub use convert::{convert_precision, percent_amount};
pub use percent::percent_divisor;
pub use pow10::{pow10, MAX_POW10_EXPONENT};
pub use scale::scale_factors;

use thiserror::Error;

/// Largest decimal precision usable by the composed operations.
///
/// `pow10` itself accepts exponents up to 19, but both public operations
/// multiply the looked-up power afterwards (by an amount, or by 100), so they
/// cap their precision parameters at 18 to leave headroom.
pub const MAX_DECIMALS: u32 = 18;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    #[error("exponent out of range: 10^20 and above do not fit in u64")]
    ExponentOutOfRange,

    #[error("precision delta out of range: must be below 19")]
    DeltaOutOfRange,

    #[error("decimals out of range: must be below 19")]
    DecimalsOutOfRange,

    #[error("overflow: scaling up exceeds the u64 range")]
    ScaleOverflow,

    #[error("overflow: amount times percent exceeds the u64 range")]
    MultiplicationOverflow,

    #[error("overflow: percent divisor exceeds the u64 range")]
    DivisorOverflow,
}

pub type Result<T> = core::result::Result<T, ScaleError>;

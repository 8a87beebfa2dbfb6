//! Rounding helpers shared by the calculation steps.
//!
//! Every intermediate amount of a settlement is rounded to whole units at
//! the step that produces it, half away from zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole unit, halves away from zero.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::round_whole;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_whole(Decimal::from_str("1646048.61").unwrap()), Decimal::from(1_646_049));
/// assert_eq!(round_whole(Decimal::from_str("0.5").unwrap()), Decimal::ONE);
/// assert_eq!(round_whole(Decimal::from_str("2.49").unwrap()), Decimal::from(2));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `amount * factor / divisor` without panicking.
///
/// Overflow saturates at [`Decimal::MAX`]; a zero divisor yields zero.
pub fn prorate(amount: Decimal, factor: Decimal, divisor: Decimal) -> Decimal {
    if divisor.is_zero() {
        return Decimal::ZERO;
    }
    amount
        .saturating_mul(factor)
        .checked_div(divisor)
        .unwrap_or(Decimal::MAX)
}

/// Rounds a day count to a whole number of days.
///
/// Negative values clamp to zero and values beyond `u32` saturate.
pub fn round_days(value: Decimal) -> u32 {
    let rounded = round_whole(value);
    if rounded <= Decimal::ZERO {
        return 0;
    }
    rounded.to_u32().unwrap_or(u32::MAX)
}

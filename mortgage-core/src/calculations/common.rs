//! Common utility functions for readiness calculations.
//!
//! This module provides shared functionality used by the readiness
//! worksheet, including rounding and the annuity present-value factor.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Present value of an annuity of 1 per period, paid for `periods` periods
/// at a per-period interest rate of `rate`.
///
/// Evaluates `(1 - (1 + rate)^-periods) / rate` as
/// `((1 + rate)^periods - 1) / (rate * (1 + rate)^periods)`, building the
/// compounding factor by repeated multiplication so the computation never
/// leaves `Decimal`. A zero rate degenerates to `periods`.
pub fn annuity_factor(
    rate: Decimal,
    periods: u32,
) -> Decimal {
    if rate.is_zero() {
        return Decimal::from(periods);
    }

    let growth = Decimal::ONE + rate;
    let mut compound = Decimal::ONE;
    for _ in 0..periods {
        compound *= growth;
    }

    (compound - Decimal::ONE) / (rate * compound)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(123.45));

        assert_eq!(result, dec!(123.45));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(100.00), dec!(200.00));

        assert_eq!(result, dec!(200.00));
    }

    #[test]
    fn max_handles_negative_values() {
        let result = max(dec!(-100.00), dec!(-200.00));

        assert_eq!(result, dec!(-100.00));
    }

    // =========================================================================
    // annuity_factor tests
    // =========================================================================

    #[test]
    fn annuity_factor_matches_30_year_reference_value() {
        // 7% annual over 360 monthly payments; reference value computed
        // at 50-digit precision: 150.30756794782111...
        let rate = dec!(7) / dec!(100) / dec!(12);

        let factor = annuity_factor(rate, 360);

        assert_eq!(round_half_up(factor), dec!(150.31));
        assert!((factor - dec!(150.3075679478)).abs() < dec!(0.0000001));
    }

    #[test]
    fn annuity_factor_zero_rate_degenerates_to_period_count() {
        let factor = annuity_factor(Decimal::ZERO, 360);

        assert_eq!(factor, dec!(360));
    }

    #[test]
    fn annuity_factor_single_period_discounts_once() {
        // One payment of 1 discounted one period: 1 / 1.1
        let factor = annuity_factor(dec!(0.1), 1);

        assert!((factor - dec!(0.9090909090909090909090909091)).abs() < dec!(0.000000001));
    }
}

//! Common utility functions for payroll calculations.

use rust_decimal::Decimal;

/// Rounds a decimal amount to the nearest whole currency unit (FCFA),
/// half-up.
///
/// Statutory amounts are rounded to the franc, away from zero at the
/// midpoint. Rounding is applied per deduction line and per tax tranche,
/// never once on a raw total.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paie_core::calculations::common::round_to_franc;
///
/// assert_eq!(round_to_franc(dec!(15180.12)), dec!(15180));
/// assert_eq!(round_to_franc(dec!(14286.48)), dec!(14286));
/// assert_eq!(round_to_franc(dec!(2500.5)), dec!(2501));
/// ```
pub fn round_to_franc(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_to_franc_rounds_down_below_midpoint() {
        assert_eq!(round_to_franc(dec!(123.4)), dec!(123));
    }

    #[test]
    fn round_to_franc_rounds_up_at_midpoint() {
        assert_eq!(round_to_franc(dec!(123.5)), dec!(124));
    }

    #[test]
    fn round_to_franc_rounds_up_above_midpoint() {
        assert_eq!(round_to_franc(dec!(123.6)), dec!(124));
    }

    #[test]
    fn round_to_franc_preserves_whole_amounts() {
        assert_eq!(round_to_franc(dec!(60000)), dec!(60000));
    }

    #[test]
    fn round_to_franc_rounds_negative_away_from_zero() {
        assert_eq!(round_to_franc(dec!(-123.5)), dec!(-124));
    }
}

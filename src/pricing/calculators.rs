//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no catalog access, no I/O.
//! `PricingEngine` chains them in a fixed order; each step takes the running
//! total produced by the previous one.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::DiscountTier;

/// Smallest group that earns the group discount
pub const GROUP_DISCOUNT_MIN_MEMBERS: i32 = 2;
pub const GROUP_DISCOUNT_FACTOR: Decimal = dec!(0.9);

pub const LARGE_TIER_THRESHOLD: Decimal = dec!(400);
pub const LARGE_TIER_DISCOUNT: Decimal = dec!(50);
pub const STANDARD_TIER_THRESHOLD: Decimal = dec!(200);
pub const STANDARD_TIER_DISCOUNT: Decimal = dec!(20);

pub const PREMIUM_SURCHARGE_FACTOR: Decimal = dec!(1.15);

/// Round up to the specified decimal places (ceiling).
///
/// Any fractional remainder is charged as a full unit, so a price never
/// lands below the computed total.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use gym_membership::pricing::round_up;
///
/// assert_eq!(round_up(dec!(195.5), 0), dec!(196));
/// assert_eq!(round_up(dec!(196.4), 0), dec!(197));
/// assert_eq!(round_up(dec!(196), 0), dec!(196));
/// ```
pub fn round_up(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::ToPositiveInfinity)
}

/// Sum a list of prices (zero when empty)
pub fn sum_prices<I>(prices: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    prices.into_iter().fold(Decimal::ZERO, |acc, p| acc + p)
}

/// 10% off when two or more members sign up together.
///
/// Returns the new total and whether the discount fired.
pub fn apply_group_discount(total: Decimal, member_count: i32) -> (Decimal, bool) {
    if member_count >= GROUP_DISCOUNT_MIN_MEMBERS {
        (total * GROUP_DISCOUNT_FACTOR, true)
    } else {
        (total, false)
    }
}

/// Flat special discount by bracket. Only one bracket fires and both
/// thresholds are strict: exactly 400 or 200 falls to the lower bracket.
pub fn apply_tier_discount(total: Decimal) -> (Decimal, Option<DiscountTier>) {
    let tier = if total > LARGE_TIER_THRESHOLD {
        Some(DiscountTier::Large)
    } else if total > STANDARD_TIER_THRESHOLD {
        Some(DiscountTier::Standard)
    } else {
        None
    };

    match tier {
        Some(t) => (total - tier_amount(t), tier),
        None => (total, None),
    }
}

/// Dollar amount taken off by a discount tier
pub fn tier_amount(tier: DiscountTier) -> Decimal {
    match tier {
        DiscountTier::Large => LARGE_TIER_DISCOUNT,
        DiscountTier::Standard => STANDARD_TIER_DISCOUNT,
    }
}

/// 15% surcharge when any premium feature is selected.
///
/// Must run after the tier discount: the surcharge is computed on the
/// already-discounted total.
pub fn apply_premium_surcharge(total: Decimal, has_premium: bool) -> (Decimal, bool) {
    if has_premium {
        (total * PREMIUM_SURCHARGE_FACTOR, true)
    } else {
        (total, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== round_up tests ====================

    #[test]
    fn test_round_up_fractional_goes_to_next_whole() {
        assert_eq!(round_up(dec!(195.5), 0), dec!(196));
        assert_eq!(round_up(dec!(196.4), 0), dec!(197));
        assert_eq!(round_up(dec!(196.01), 0), dec!(197));
        assert_eq!(round_up(dec!(0.001), 0), dec!(1));
    }

    #[test]
    fn test_round_up_whole_values_unchanged() {
        assert_eq!(round_up(dec!(196), 0), dec!(196));
        assert_eq!(round_up(dec!(162.0), 0), dec!(162));
        assert_eq!(round_up(dec!(0), 0), dec!(0));
    }

    #[test]
    fn test_round_up_is_not_bankers_rounding() {
        // Banker's rounding would give 2 and 4
        assert_eq!(round_up(dec!(2.5), 0), dec!(3));
        assert_eq!(round_up(dec!(4.5), 0), dec!(5));
    }

    #[test]
    fn test_round_up_decimal_places() {
        assert_eq!(round_up(dec!(1.231), 2), dec!(1.24));
        assert_eq!(round_up(dec!(1.23), 2), dec!(1.23));
    }

    // ==================== sum_prices tests ====================

    #[test]
    fn test_sum_prices() {
        assert_eq!(sum_prices(vec![]), Decimal::ZERO);
        assert_eq!(sum_prices(vec![dec!(20), dec!(40)]), dec!(60));
        assert_eq!(sum_prices(vec![dec!(20), dec!(20)]), dec!(40));
    }

    // ==================== group discount tests ====================

    #[test]
    fn test_group_discount_boundary() {
        assert_eq!(apply_group_discount(dec!(180), 1), (dec!(180), false));
        assert_eq!(apply_group_discount(dec!(180), 2), (dec!(162), true));
        assert_eq!(apply_group_discount(dec!(100), 10), (dec!(90), true));
    }

    #[test]
    fn test_group_discount_ignores_non_positive_counts() {
        assert_eq!(apply_group_discount(dec!(100), 0), (dec!(100), false));
        assert_eq!(apply_group_discount(dec!(100), -3), (dec!(100), false));
    }

    // ==================== tier discount tests ====================

    #[test]
    fn test_tier_discount_brackets() {
        assert_eq!(apply_tier_discount(dec!(160)), (dec!(160), None));
        assert_eq!(
            apply_tier_discount(dec!(216)),
            (dec!(196), Some(DiscountTier::Standard))
        );
        assert_eq!(
            apply_tier_discount(dec!(450)),
            (dec!(400), Some(DiscountTier::Large))
        );
    }

    #[test]
    fn test_tier_discount_thresholds_are_strict() {
        assert_eq!(apply_tier_discount(dec!(200)), (dec!(200), None));
        assert_eq!(
            apply_tier_discount(dec!(200.01)),
            (dec!(180.01), Some(DiscountTier::Standard))
        );
        assert_eq!(
            apply_tier_discount(dec!(400)),
            (dec!(380), Some(DiscountTier::Standard))
        );
        assert_eq!(
            apply_tier_discount(dec!(400.5)),
            (dec!(350.5), Some(DiscountTier::Large))
        );
    }

    // ==================== surcharge tests ====================

    #[test]
    fn test_premium_surcharge() {
        assert_eq!(apply_premium_surcharge(dec!(170), true), (dec!(195.5), true));
        assert_eq!(apply_premium_surcharge(dec!(170), false), (dec!(170), false));
    }

    #[test]
    fn test_surcharge_after_discount_differs_from_before() {
        // 240 total: discount then surcharge vs surcharge then discount
        let (discounted, _) = apply_tier_discount(dec!(240));
        let (after, _) = apply_premium_surcharge(discounted, true);
        assert_eq!(after, dec!(253));

        let (surcharged, _) = apply_premium_surcharge(dec!(240), true);
        let (swapped, _) = apply_tier_discount(surcharged);
        assert_eq!(swapped, dec!(256));
        assert_ne!(after, swapped);
    }
}

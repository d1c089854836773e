//! Tiered per-liter delivery rate table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rate for volumes above one liter: charged once for the first liter.
const OVERSIZE_FIRST_LITER: Decimal = dec!(46);
/// Rate per liter beyond the first for oversize parcels.
const OVERSIZE_EXTRA_PER_LITER: Decimal = dec!(14);

/// Base delivery cost for a parcel volume, before the warehouse coefficient.
///
/// Tier upper bounds are inclusive: a volume exactly on a boundary is priced
/// at the lower tier's rate. Volumes at or below zero are priced as exactly
/// one liter (policy default for missing dimensions, not an error), so this
/// is a total function with no failure mode.
#[must_use]
pub fn tier_cost(volume_liters: Decimal) -> Decimal {
    let volume = if volume_liters <= Decimal::ZERO {
        Decimal::ONE
    } else {
        volume_liters
    };

    if volume <= dec!(0.200) {
        volume * dec!(23)
    } else if volume <= dec!(0.400) {
        volume * dec!(26)
    } else if volume <= dec!(0.600) {
        volume * dec!(29)
    } else if volume <= dec!(0.800) {
        volume * dec!(30)
    } else if volume <= dec!(1.000) {
        volume * dec!(32)
    } else {
        OVERSIZE_FIRST_LITER + (volume - Decimal::ONE) * OVERSIZE_EXTRA_PER_LITER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_small_parcel() {
        // 0.15 L * 23 = 3.45
        assert_eq!(tier_cost(dec!(0.15)), dec!(3.45));
    }

    #[test]
    fn test_oversize_parcel() {
        // 46 for the first liter + 0.5 * 14
        assert_eq!(tier_cost(dec!(1.5)), dec!(53));
    }

    #[test_case(dec!(0.200), dec!(23) ; "boundary stays on first tier")]
    #[test_case(dec!(0.400), dec!(26) ; "boundary stays on second tier")]
    #[test_case(dec!(0.600), dec!(29) ; "boundary stays on third tier")]
    #[test_case(dec!(0.800), dec!(30) ; "boundary stays on fourth tier")]
    #[test_case(dec!(1.000), dec!(32) ; "one liter stays on fifth tier")]
    fn test_tier_boundary_uses_lower_rate(volume: Decimal, rate: Decimal) {
        assert_eq!(tier_cost(volume), volume * rate);
    }

    #[test]
    fn test_zero_volume_priced_as_one_liter() {
        assert_eq!(tier_cost(Decimal::ZERO), dec!(32));
        assert_eq!(tier_cost(dec!(-3)), dec!(32));
    }

    #[test]
    fn test_cost_increases_across_boundaries() {
        // Stepping just past each boundary must not make delivery cheaper.
        let boundaries = [dec!(0.200), dec!(0.400), dec!(0.600), dec!(0.800), dec!(1.000)];
        for b in boundaries {
            assert!(tier_cost(b + dec!(0.001)) > tier_cost(b));
        }
    }
}

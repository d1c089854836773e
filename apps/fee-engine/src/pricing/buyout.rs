//! Buyout-adjusted per-order logistics.
//!
//! Only a fraction of shipped units is kept by the buyer; the rest travel
//! back, and a fraction of those are ordered again. The blended cost of all
//! those legs, spread over the orders that actually stick, is what feeds
//! the price solver's `logistics_per_order`.

use rust_decimal::Decimal;

use super::error::PricingError;

/// Blended logistics cost per successful order under a buyout rate.
///
/// For a unit batch of orders: `returns = 1 - buyout`, `reorders =
/// returns x buyout`, `final_returns = returns - reorders`. Every shipped or
/// returned leg is costed, and the total is divided by the kept orders plus
/// the reorders. The formula is scale-free, so a batch of one order suffices.
///
/// # Errors
///
/// [`PricingError::InvalidBuyoutRate`] when `buyout_rate` is outside (0, 1];
/// a rate of zero would leave no successful orders to spread the cost over.
pub fn per_order_logistics(
    ship_cost: Decimal,
    return_cost: Decimal,
    buyout_rate: Decimal,
) -> Result<Decimal, PricingError> {
    if buyout_rate <= Decimal::ZERO || buyout_rate > Decimal::ONE {
        return Err(PricingError::InvalidBuyoutRate { rate: buyout_rate });
    }

    let orders = Decimal::ONE;
    let returns = orders * (Decimal::ONE - buyout_rate);
    let reorders = returns * buyout_rate;
    let final_returns = returns - reorders;
    let successful = orders * buyout_rate;

    let total = orders * ship_cost
        + returns * return_cost
        + reorders * ship_cost
        + final_returns * return_cost;

    Ok(total / (successful + reorders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_buyout_is_plain_ship_cost() {
        let cost = per_order_logistics(dec!(60), dec!(50), Decimal::ONE).unwrap();
        assert_eq!(cost, dec!(60));
    }

    #[test]
    fn test_half_buyout() {
        // returns = 0.5, reorders = 0.25, final returns = 0.25
        // total = 60 + 0.5*50 + 0.25*60 + 0.25*50 = 112.5
        // denominator = 0.5 + 0.25 = 0.75
        let cost = per_order_logistics(dec!(60), dec!(50), dec!(0.5)).unwrap();
        assert_eq!(cost, dec!(150));
    }

    #[test]
    fn test_lower_buyout_costs_more_per_kept_order() {
        let high = per_order_logistics(dec!(60), dec!(50), dec!(0.9)).unwrap();
        let low = per_order_logistics(dec!(60), dec!(50), dec!(0.4)).unwrap();

        assert!(low > high);
        assert!(high > dec!(60));
    }

    #[test]
    fn test_out_of_range_rates_rejected() {
        for rate in [dec!(0), dec!(-0.2), dec!(1.5)] {
            let err = per_order_logistics(dec!(60), dec!(50), rate).unwrap_err();
            assert!(matches!(err, PricingError::InvalidBuyoutRate { .. }));
        }
    }
}

//! Bounded search for the target-margin price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, trace};

use super::error::PricingError;
use super::types::{PriceBreakdown, PriceInput, PriceSolution};

/// Convergence tolerance on the margin, in percentage points.
pub const MARGIN_TOLERANCE_PCT: Decimal = dec!(0.1);

/// Safety cap on solver iterations.
pub const MAX_ITERATIONS: u32 = 100;

/// Recommended prices are rounded up to this currency step.
const PRICE_STEP: Decimal = dec!(10);

/// Solve for the minimum sale price that achieves the target net margin.
///
/// Margin is strictly increasing in price (the fixed costs are spread over
/// a larger base), so the solver is a bounded binary search: the lower
/// bound is cost plus logistics (margin there is always negative), the
/// upper bound is seeded from the algebraic estimate
/// `price = (cost + logistics) / (1 - sum of fractional rates)` and doubled
/// until the target is bracketed. Iterations stop once the evaluated margin
/// is within [`MARGIN_TOLERANCE_PCT`] of the target or [`MAX_ITERATIONS`]
/// is reached; hitting the cap returns the last price with
/// `converged = false` rather than failing, since the approximation is
/// still usable.
///
/// The converged price is then rounded up to the nearest 10 currency units
/// and the returned breakdown recomputed there; by monotonicity the rounded
/// price meets or exceeds the target margin.
///
/// # Errors
///
/// [`PricingError::RatesExceedPrice`] when the fractional rates (including
/// the target margin) sum to 1 or more — no positive price satisfies the
/// constraint — and [`PricingError::InvalidInput`] for non-positive cost
/// price or negative rates. Both are rejected before iterating.
pub fn solve(input: &PriceInput) -> Result<PriceSolution, PricingError> {
    validate(input)?;

    let commission_rate = input.commission_rate_pct / Decimal::ONE_HUNDRED;
    let tax_rate = input.tax_rate_pct / Decimal::ONE_HUNDRED;
    let margin_rate = input.target_margin_pct / Decimal::ONE_HUNDRED;

    let rate_sum =
        commission_rate + input.storage_rate + input.acceptance_rate + tax_rate + margin_rate;
    let denominator = Decimal::ONE - rate_sum;
    if denominator <= Decimal::ZERO {
        return Err(PricingError::RatesExceedPrice { total: rate_sum });
    }

    let estimate = (input.cost_price + input.logistics_per_order) / denominator;
    let mut iterations = 0;
    let mut converged = false;

    // The caller's current price, else the algebraic estimate, is the first
    // candidate; a guess already on target ends the search immediately.
    let mut price = input
        .initial_price
        .filter(|p| *p > Decimal::ZERO)
        .unwrap_or(estimate);

    // Margin below the target everywhere at or under cost + logistics.
    let mut low = input.cost_price + input.logistics_per_order;
    let mut high = estimate.max(price).max(low * dec!(2));

    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let margin = breakdown_at(price, input).margin_pct;
        trace!(iteration = iterations, price = %price, margin = %margin, "solver step");

        if (margin - input.target_margin_pct).abs() < MARGIN_TOLERANCE_PCT {
            converged = true;
            break;
        }

        if margin < input.target_margin_pct {
            low = price.max(low);
            // Keep the bracket valid: grow the ceiling until the target
            // margin lies inside it.
            while breakdown_at(high, input).margin_pct < input.target_margin_pct
                && iterations < MAX_ITERATIONS
            {
                iterations += 1;
                high *= dec!(2);
            }
        } else {
            high = price.min(high);
        }

        price = (low + high) / dec!(2);
    }

    let margin_at_raw_pct = breakdown_at(price, input).margin_pct;
    let recommended_price = round_up_to_step(price);
    let breakdown = breakdown_at(recommended_price, input);

    debug!(
        raw_price = %price,
        recommended_price = %recommended_price,
        margin = %breakdown.margin_pct,
        iterations,
        converged,
        "price solved"
    );

    Ok(PriceSolution {
        recommended_price,
        raw_price: price,
        breakdown,
        margin_at_raw_pct,
        converged,
        iterations,
    })
}

fn validate(input: &PriceInput) -> Result<(), PricingError> {
    if input.cost_price <= Decimal::ZERO {
        return Err(PricingError::InvalidInput(format!(
            "cost price must be positive, got {}",
            input.cost_price
        )));
    }
    if input.logistics_per_order < Decimal::ZERO {
        return Err(PricingError::InvalidInput(format!(
            "logistics per order cannot be negative, got {}",
            input.logistics_per_order
        )));
    }
    let rates = [
        ("commission rate", input.commission_rate_pct),
        ("tax rate", input.tax_rate_pct),
        ("target margin", input.target_margin_pct),
        ("storage rate", input.storage_rate),
        ("acceptance rate", input.acceptance_rate),
    ];
    for (name, rate) in rates {
        if rate < Decimal::ZERO {
            return Err(PricingError::InvalidInput(format!(
                "{name} cannot be negative, got {rate}"
            )));
        }
    }
    Ok(())
}

/// Full cost breakdown at a candidate price.
fn breakdown_at(price: Decimal, input: &PriceInput) -> PriceBreakdown {
    let commission = price * input.commission_rate_pct / Decimal::ONE_HUNDRED;
    let storage = price * input.storage_rate;
    let acceptance = price * input.acceptance_rate;
    let net_revenue_before_tax =
        price - commission - storage - acceptance - input.logistics_per_order;
    let tax = net_revenue_before_tax * input.tax_rate_pct / Decimal::ONE_HUNDRED;
    let net_profit = net_revenue_before_tax - tax - input.cost_price;
    let margin_pct = if price > Decimal::ZERO {
        net_profit / price * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    PriceBreakdown {
        price,
        commission,
        storage,
        acceptance,
        logistics: input.logistics_per_order,
        net_revenue_before_tax,
        tax,
        net_profit,
        margin_pct,
    }
}

fn round_up_to_step(price: Decimal) -> Decimal {
    (price / PRICE_STEP).ceil() * PRICE_STEP
}

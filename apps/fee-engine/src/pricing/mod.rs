//! Net-margin price solver and buyout-adjusted logistics.
//!
//! # Example
//!
//! ```rust,ignore
//! use fee_engine::pricing::{PriceInput, solve};
//! use rust_decimal_macros::dec;
//!
//! let input = PriceInput {
//!     cost_price: dec!(200),
//!     commission_rate_pct: dec!(15),
//!     tax_rate_pct: dec!(6),
//!     logistics_per_order: dec!(60),
//!     target_margin_pct: dec!(30),
//!     ..Default::default()
//! };
//!
//! let solution = solve(&input)?;
//! assert!(solution.converged);
//! assert_eq!(solution.recommended_price % dec!(10), dec!(0));
//! ```

mod buyout;
mod error;
mod optimizer;
mod types;

pub use buyout::per_order_logistics;
pub use error::PricingError;
pub use optimizer::{MARGIN_TOLERANCE_PCT, MAX_ITERATIONS, solve};
pub use types::{PriceBreakdown, PriceInput, PriceSolution};

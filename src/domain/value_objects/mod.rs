//! Value Objects for the catalog

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Fractional digits used when amounts are rendered into reports.
pub const REPORT_SCALE: usize = 6;

/// Percentage discount. Values outside 0..=100 are accepted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discount(Decimal);

impl Discount {
    pub fn new(percent: Decimal) -> Self { Self(percent) }
    pub fn percent(&self) -> Decimal { self.0 }
    pub fn factor(&self) -> Decimal { Decimal::ONE - self.0 / Decimal::ONE_HUNDRED }
    pub fn apply(&self, price: Decimal) -> Decimal { price * self.factor() }
}

impl From<Decimal> for Discount {
    fn from(percent: Decimal) -> Self { Self(percent) }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}%", Amount(self.0)) }
}

/// Report rendering of a decimal amount, rounded half away from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Amount(pub Decimal);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp_with_strategy(REPORT_SCALE as u32, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.*}", REPORT_SCALE, rounded)
    }
}

/// `price * quantity` as used for cart totals. Saturates at `Decimal::MAX`/`Decimal::MIN`.
pub fn line_total(price: Decimal, quantity: i32) -> Decimal { price.saturating_mul(Decimal::from(quantity)) }

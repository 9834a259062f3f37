use rust_decimal::{Decimal, RoundingStrategy};

/// Currency code shown next to every amount.
pub const CURRENCY: &str = "AED";

/// Render an amount with exactly two decimal places, e.g. `AED 58.50`.
///
/// Amounts are kept exact everywhere else; this is the only place rounding
/// happens, and only for display.
pub fn format_price(amount: Decimal) -> String {
    let mut shown = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    shown.rescale(2);
    format!("{CURRENCY} {shown}")
}

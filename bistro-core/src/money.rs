//! Money rounding and display
use crate::catalog::Price;

pub const CURRENCY_SYMBOL: &str = "$";
pub const MARKET_PRICE_LABEL: &str = "Market price";

/// Round to two decimals, halves away from zero.
#[must_use]
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[must_use]
pub fn format_amount(amount: f64) -> String {
    let rounded = round_money(amount);
    if rounded < 0.0 {
        format!("-{CURRENCY_SYMBOL}{:.2}", -rounded)
    } else {
        format!("{CURRENCY_SYMBOL}{rounded:.2}")
    }
}

#[must_use]
pub fn format_price(price: Price) -> String {
    match price {
        Price::Fixed(amount) => format_amount(amount),
        Price::Market => MARKET_PRICE_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert!((round_money(1.005_1) - 1.01).abs() < f64::EPSILON);
        assert!((round_money(0.1 + 0.2) - 0.3).abs() < f64::EPSILON);
        assert!((round_money(12.344) - 12.34).abs() < f64::EPSILON);
    }

    #[test]
    fn formats_fixed_and_market_prices() {
        assert_eq!(format_price(Price::Fixed(12.5)), "$12.50");
        assert_eq!(format_price(Price::Market), "Market price");
        assert_eq!(format_amount(-2.5), "-$2.50");
    }
}

//! Pricing

use rusty_money::iso::Currency;

use crate::{cart::CartLine, prices::Price};

/// Delivery fee charged on every order. Delivery is free nationwide.
pub const DELIVERY_FEE: Price = Price::ZERO;

/// Order totals derived from cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of every line total.
    pub subtotal: Price,

    /// Delivery fee.
    pub delivery: Price,

    /// Amount payable on delivery.
    pub total: Price,
}

impl Totals {
    /// Calculate totals for a set of lines.
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let subtotal = subtotal(lines);

        Self {
            subtotal,
            delivery: DELIVERY_FEE,
            total: subtotal.saturating_add(DELIVERY_FEE),
        }
    }
}

/// Price of `quantity` units at `price` each.
pub fn line_total(price: Price, quantity: u32) -> Price {
    price.times(quantity)
}

/// Calculates the subtotal of a list of lines
pub fn subtotal(lines: &[CartLine]) -> Price {
    lines.iter().map(CartLine::line_total).sum()
}

/// Render a price as a plain grouped amount, e.g. `6,100` or `12.5`.
///
/// Trailing fractional zeros are dropped, so whole amounts carry no decimals.
/// Rendering works on the minor units directly, so every `u64` price prints
/// exactly.
pub fn format_amount(price: Price, currency: &'static Currency) -> String {
    let exponent = currency.exponent as usize;
    let digits = format!("{:0>width$}", price.minor_units(), width = exponent + 1);
    let (whole, fraction) = digits.split_at(digits.len() - exponent);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        group_thousands(whole)
    } else {
        format!("{}.{fraction}", group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use crate::{cart::to_cart_line, products::Product};

    use super::*;

    fn lines() -> Vec<CartLine> {
        let a = Product::new("a", "Premium Velvet Shanel", "Velvet Shanel", Price::new(2500));
        let b = Product::new("b", "Classic Kadar", "Kadar", Price::new(1800));

        let mut b_line = to_cart_line(&b);
        b_line.increment();

        vec![to_cart_line(&a), b_line]
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(subtotal(&lines()), Price::new(6100));
    }

    #[test]
    fn test_subtotal_empty() {
        assert_eq!(subtotal(&[]), Price::ZERO);
    }

    #[test]
    fn totals_have_free_delivery() {
        let totals = Totals::from_lines(&lines());

        assert_eq!(totals.subtotal, Price::new(6100));
        assert_eq!(totals.delivery, Price::ZERO);
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn line_total_multiplies() {
        assert_eq!(line_total(Price::new(1800), 3), Price::new(5400));
    }

    #[test]
    fn format_amount_groups_whole_amounts() {
        assert_eq!(format_amount(Price::new(6100_00), iso::PKR), "6,100");
        assert_eq!(format_amount(Price::new(1_234_567_00), iso::PKR), "1,234,567");
        assert_eq!(format_amount(Price::new(999_00), iso::PKR), "999");
    }

    #[test]
    fn format_amount_keeps_significant_fractions() {
        assert_eq!(format_amount(Price::new(12_50), iso::GBP), "12.5");
        assert_eq!(format_amount(Price::new(1_000_05), iso::GBP), "1,000.05");
    }

    #[test]
    fn format_amount_renders_the_largest_price_exactly() {
        assert_eq!(
            format_amount(Price::new(u64::MAX), iso::PKR),
            "184,467,440,737,095,516.15"
        );
    }

    #[test]
    fn saturated_totals_render_as_computed() {
        let mut line = to_cart_line(&Product::new("x", "Bridal Set", "Kadar", Price::new(u64::MAX)));
        line.increment();

        let totals = Totals::from_lines(&[line]);

        assert_eq!(totals.total, Price::new(u64::MAX));
        assert_eq!(
            format_amount(totals.total, iso::PKR),
            "184,467,440,737,095,516.15"
        );
    }

    #[test]
    fn format_amount_handles_currencies_without_minor_units() {
        assert_eq!(format_amount(Price::new(1_500), iso::JPY), "1,500");
    }

    #[test]
    fn format_amount_zero() {
        assert_eq!(format_amount(Price::ZERO, iso::PKR), "0");
    }
}

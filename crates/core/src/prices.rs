//! Prices

use std::{iter::Sum, ops::Deref};

use serde::{Deserialize, Serialize};

/// Represents a non-negative price in minor currency units (paisa, pence, cents).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A price of nothing.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new Price
    pub fn new(value: u64) -> Self {
        Price { value }
    }

    /// Returns the amount in minor units.
    pub fn minor_units(self) -> u64 {
        self.value
    }

    /// Multiplies the price by a quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }

    /// Adds two prices, saturating at `u64::MAX`.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Price::new(self.value.saturating_add(other.value))
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(1000);

        assert_eq!(price.value, 1000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Price::new(1800).times(2), Price::new(3600));
        assert_eq!(Price::new(1800).times(0), Price::ZERO);
    }

    #[test]
    fn times_saturates_instead_of_overflowing() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
    }

    #[test]
    fn prices_sum() {
        let total: Price = [Price::new(2500), Price::new(3600)].into_iter().sum();

        assert_eq!(total, Price::new(6100));
    }

    #[test]
    fn serializes_as_bare_number() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Price::new(2500))?, "2500");
        assert_eq!(serde_json::from_str::<Price>("1800")?, Price::new(1800));

        Ok(())
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }
}

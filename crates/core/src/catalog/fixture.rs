//! Fixture Catalog
//!
//! A catalog loaded from YAML, e.g.
//!
//! ```yaml
//! currency: PKR
//! categories: [Kadar, Velvet Shanel]
//! products:
//!   - id: "2"
//!     name: Classic Kadar
//!     category: Kadar
//!     price: 1800 PKR
//!     in_stock: true
//! ```

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashSet;
use rusty_money::{iso, iso::Currency};
use serde::Deserialize;
use tracing::debug;

use crate::{
    catalog::{CatalogError, CatalogProvider, CategoryFilter},
    prices::Price,
    products::{Category, Product, ProductId},
};

/// Wrapper for a catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// ISO currency code every price must use
    pub currency: String,

    /// Declared categories, in display order
    pub categories: Vec<String>,

    /// Products, in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Product name in the secondary language
    #[serde(default)]
    pub secondary_name: Option<String>,

    /// Product category
    pub category: String,

    /// Product price (e.g., "2500 PKR")
    pub price: String,

    /// Stock flag
    #[serde(default = "in_stock_by_default")]
    pub in_stock: bool,

    /// Image URL
    #[serde(default)]
    pub image_url: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Description in the secondary language
    #[serde(default)]
    pub secondary_description: Option<String>,
}

fn in_stock_by_default() -> bool {
    true
}

/// Catalog held in memory after loading a YAML fixture.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    currency: &'static Currency,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl FixtureCatalog {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path.as_ref())?;

        Self::from_yaml(&contents)
    }

    /// Load a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error when parsing fails, a price is invalid, a product is
    /// priced in another currency, or a product uses an undeclared category.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        let currency = iso::find(&fixture.currency)
            .ok_or_else(|| CatalogError::UnknownCurrency(fixture.currency.clone()))?;

        let categories: Vec<Category> = fixture.categories.into_iter().map(Category::new).collect();

        let mut products = Vec::with_capacity(fixture.products.len());
        let mut seen = FxHashSet::default();

        for product_fixture in fixture.products {
            let id = ProductId::new(product_fixture.id);

            if id.is_blank() {
                return Err(CatalogError::BlankProductId);
            }

            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateProductId(id));
            }

            let (price, product_currency) = parse_price(&product_fixture.price)?;

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    currency.iso_alpha_code.to_string(),
                    product_currency.iso_alpha_code.to_string(),
                ));
            }

            let category = Category::new(product_fixture.category);

            if !categories.contains(&category) {
                return Err(CatalogError::UnknownCategory(id, category));
            }

            products.push(Product {
                id,
                name: product_fixture.name,
                secondary_name: product_fixture.secondary_name,
                category,
                price,
                in_stock: product_fixture.in_stock,
                image_url: product_fixture.image_url,
                description: product_fixture.description,
                secondary_description: product_fixture.secondary_description,
            });
        }

        debug!(
            products = products.len(),
            categories = categories.len(),
            currency = currency.iso_alpha_code,
            "loaded catalog fixture"
        );

        Ok(Self {
            currency,
            categories,
            products,
        })
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl CatalogProvider for FixtureCatalog {
    fn list_available_products(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .find(|product| &product.id == id)
            .cloned())
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

/// Parse price string (e.g., "2500 PKR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Price, &'static Currency), CatalogError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(CatalogError::InvalidPrice(s.to_string()));
    }

    let currency = iso::find(currency_code)
        .ok_or_else(|| CatalogError::UnknownCurrency(currency_code.to_string()))?;

    let minor_units = 10_u64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    Ok((Price::new(minor_units), currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::category_counts;

    use super::*;

    const CATALOG: &str = r"
currency: PKR
categories:
  - Kadar
  - Velvet Shanel
  - Carandi
products:
  - id: '1'
    name: Premium Velvet Shanel
    category: Velvet Shanel
    price: 2500 PKR
    image_url: https://images.example/1.jpg
  - id: '2'
    name: Classic Kadar
    category: Kadar
    price: 1800 PKR
  - id: '6'
    name: Royal Carandi
    category: Carandi
    price: 2800 PKR
    in_stock: false
";

    #[test]
    fn keeps_declared_product_order() -> TestResult {
        let catalog = FixtureCatalog::from_yaml(CATALOG)?;

        let names: Vec<String> = catalog
            .list_available_products(&CategoryFilter::All)?
            .into_iter()
            .map(|product| product.name)
            .collect();

        assert_eq!(
            names,
            ["Premium Velvet Shanel", "Classic Kadar", "Royal Carandi"]
        );
        assert_eq!(catalog.currency(), iso::PKR);

        Ok(())
    }

    #[test]
    fn prices_are_minor_units() -> TestResult {
        let catalog = FixtureCatalog::from_yaml(CATALOG)?;

        let product = catalog.find_product(&ProductId::new("1"))?;

        assert_eq!(product.map(|p| p.price), Some(Price::new(2500_00)));

        Ok(())
    }

    #[test]
    fn out_of_stock_products_are_listed() -> TestResult {
        let catalog = FixtureCatalog::from_yaml(CATALOG)?;

        let carandi = catalog
            .list_available_products(&CategoryFilter::Only(Category::new("Carandi")))?;

        assert_eq!(carandi.len(), 1);
        assert!(carandi.iter().all(|product| !product.in_stock));

        Ok(())
    }

    #[test]
    fn counts_per_category() -> TestResult {
        let catalog = FixtureCatalog::from_yaml(CATALOG)?;

        let counts = category_counts(&catalog)?;

        assert_eq!(counts.all, 3);
        assert_eq!(counts.by_category.get(&Category::new("Kadar")), Some(&1));
        assert_eq!(counts.by_category.get(&Category::new("Carandi")), Some(&1));

        Ok(())
    }

    #[test]
    fn unknown_product_is_none() -> TestResult {
        let catalog = FixtureCatalog::from_yaml(CATALOG)?;

        assert!(catalog.find_product(&ProductId::new("99"))?.is_none());

        Ok(())
    }

    #[test]
    fn rejects_undeclared_category() {
        let yaml = r"
currency: PKR
categories: [Kadar]
products:
  - id: '1'
    name: Lawn Suit
    category: Lawn
    price: 1500 PKR
";

        let result = FixtureCatalog::from_yaml(yaml);

        assert!(matches!(
            result,
            Err(CatalogError::UnknownCategory(id, category))
                if id.as_str() == "1" && category.as_str() == "Lawn"
        ));
    }

    #[test]
    fn rejects_mixed_currencies() {
        let yaml = r"
currency: PKR
categories: [Kadar]
products:
  - id: '1'
    name: Classic Kadar
    category: Kadar
    price: 18 USD
";

        let result = FixtureCatalog::from_yaml(yaml);

        assert!(matches!(
            result,
            Err(CatalogError::CurrencyMismatch(expected, found)) if expected == "PKR" && found == "USD"
        ));
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2500PKR");

        assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-5 PKR");

        assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(CatalogError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_accepts_fractional_amounts() -> Result<(), CatalogError> {
        let (gbp_minor, gbp) = parse_price("2.99 GBP")?;
        let (pkr_minor, pkr) = parse_price("1800 PKR")?;

        assert_eq!(gbp_minor, Price::new(299));
        assert_eq!(gbp, iso::GBP);
        assert_eq!(pkr_minor, Price::new(1800_00));
        assert_eq!(pkr, iso::PKR);

        Ok(())
    }

    #[test]
    fn numeric_ids_keep_declared_order() -> TestResult {
        let yaml = r"
currency: PKR
categories: [Kadar]
products:
  - id: '2'
    name: Classic Kadar
    category: Kadar
    price: 1800 PKR
  - id: '10'
    name: Designer Kadar
    category: Kadar
    price: 3000 PKR
";

        let catalog = FixtureCatalog::from_yaml(yaml)?;

        let ids: Vec<String> = catalog
            .list_available_products(&CategoryFilter::All)?
            .into_iter()
            .map(|product| product.id.to_string())
            .collect();

        assert_eq!(ids, ["2", "10"]);

        Ok(())
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = r"
currency: PKR
categories: [Kadar]
products:
  - id: '2'
    name: Classic Kadar
    category: Kadar
    price: 1800 PKR
  - id: '2'
    name: Designer Kadar
    category: Kadar
    price: 3000 PKR
";

        let result = FixtureCatalog::from_yaml(yaml);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProductId(id)) if id.as_str() == "2"
        ));
    }

    #[test]
    fn parse_price_rejects_amounts_beyond_minor_unit_range() {
        for price in [
            "100000000000000000000 PKR",
            "79228162514264337593543950335 PKR",
        ] {
            assert!(
                matches!(parse_price(price), Err(CatalogError::InvalidPrice(_))),
                "{price} should not load"
            );
        }
    }

    #[test]
    fn parse_price_rounds_sub_minor_digits() -> Result<(), CatalogError> {
        let (rounded_up, _) = parse_price("2.999 GBP")?;
        let (rounded_down, _) = parse_price("2.991 GBP")?;

        assert_eq!(rounded_up, Price::new(300));
        assert_eq!(rounded_down, Price::new(299));

        Ok(())
    }
}

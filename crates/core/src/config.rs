//! Store configuration
//!
//! Fixed business details used when building the order message. Every field
//! has a built-in default, so a YAML file only needs the keys it overrides.

use std::{fs, path::Path};

use rusty_money::{iso, iso::Currency};
use serde::{Deserialize, Deserializer, de::Error as _};
use thiserror::Error;

/// Errors raised while loading a store configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read store config: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error, including unknown currency codes
    #[error("Failed to parse store config: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Business details and checkout wording.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Name in the message header.
    pub business_name: String,

    /// Number the order message is addressed to.
    pub business_phone: String,

    /// Messaging "send" endpoint the deep link points at.
    pub send_url: String,

    /// Currency prices are held in.
    #[serde(deserialize_with = "currency_from_code")]
    pub currency: &'static Currency,

    /// Label printed before amounts, e.g. `Rs.`.
    pub currency_label: String,

    /// Delivery line of the message.
    pub delivery_notice: String,

    /// Payment line of the message.
    pub payment_notice: String,

    /// Key of the persistent slot holding the cart between pages.
    pub cart_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            business_name: "Harram Clothes".to_string(),
            business_phone: "+923179511031".to_string(),
            send_url: "https://api.whatsapp.com/send".to_string(),
            currency: iso::PKR,
            currency_label: "Rs.".to_string(),
            delivery_notice: "FREE (All Pakistan)".to_string(),
            payment_notice: "Cash on Delivery".to_string(),
            cart_key: "cart".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;

        Self::from_yaml(&contents)
    }

    /// Load a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid, has unknown keys, or names an
    /// unknown currency.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(yaml)?)
    }
}

fn currency_from_code<'de, D>(deserializer: D) -> Result<&'static Currency, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;

    iso::find(&code).ok_or_else(|| D::Error::custom(format!("unknown currency code: {code}")))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_describe_the_shop() {
        let config = StoreConfig::default();

        assert_eq!(config.business_name, "Harram Clothes");
        assert_eq!(config.currency, iso::PKR);
        assert_eq!(config.cart_key, "cart");
    }

    #[test]
    fn yaml_overrides_individual_fields() -> TestResult {
        let config = StoreConfig::from_yaml(
            "business_name: Test Boutique\ncurrency: GBP\ncurrency_label: \"£\"\n",
        )?;

        assert_eq!(config.business_name, "Test Boutique");
        assert_eq!(config.currency, iso::GBP);
        assert_eq!(config.currency_label, "£");
        assert_eq!(config.business_phone, "+923179511031");

        Ok(())
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let result = StoreConfig::from_yaml("currency: XYZ\n");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = StoreConfig::from_yaml("business: Typo\n");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}

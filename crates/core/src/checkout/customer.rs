//! Customer details

use crate::checkout::CheckoutError;

/// Contact details typed into the checkout form. Kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Full name
    pub name: String,

    /// Phone number, free-form
    pub phone: String,

    /// Delivery address, free text
    pub address: String,
}

impl CustomerDetails {
    /// Create contact details.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Check that every field is present.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(CheckoutError::MissingField(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_details_are_valid() {
        let customer = CustomerDetails::new("Ayesha", "0300 1234567", "House 1, Street 2, Lahore");

        assert!(customer.validate().is_ok());
    }

    #[test]
    fn first_blank_field_is_reported() {
        let customer = CustomerDetails::new("Ayesha", "   ", "");

        assert!(matches!(
            customer.validate(),
            Err(CheckoutError::MissingField("phone"))
        ));
    }

    #[test]
    fn values_are_not_normalised() {
        let customer = CustomerDetails::new("  Ayesha ", "+92-300", "Lahore\nPunjab");

        assert!(customer.validate().is_ok());
        assert_eq!(customer.name, "  Ayesha ");
    }
}

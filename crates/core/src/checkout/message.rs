//! Order message rendering.
//!
//! Field order and labels are part of what the business reads on the other
//! end, so they are fixed here rather than configurable.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{
    cart::CartLine,
    checkout::OrderSubmission,
    config::StoreConfig,
    prices::Price,
    pricing::format_amount,
};

/// Characters `encodeURIComponent` leaves alone, removed from the escape set.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Render the plain-text order message.
pub fn format_order_message(submission: &OrderSubmission, config: &StoreConfig) -> String {
    let customer = submission.customer();
    let amount = |price: Price| {
        format!(
            "{} {}",
            config.currency_label,
            format_amount(price, config.currency)
        )
    };

    let items = submission
        .lines()
        .iter()
        .map(|line: &CartLine| {
            format!(
                "- {} (x{}) - {}",
                line.name(),
                line.quantity(),
                amount(line.line_total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "*New Order - {business}*\n\
         \n\
         *Customer Details:*\n\
         Name: {name}\n\
         Phone: {phone}\n\
         Address: {address}\n\
         \n\
         *Order Items:*\n\
         {items}\n\
         \n\
         *Total Amount: {total}*\n\
         \n\
         Delivery: {delivery}\n\
         Payment: {payment}",
        business = config.business_name,
        name = customer.name,
        phone = customer.phone,
        address = customer.address,
        total = amount(submission.totals().total),
        delivery = config.delivery_notice,
        payment = config.payment_notice,
    )
}

/// Build the deep link carrying `message` to the business number.
pub fn order_url(message: &str, config: &StoreConfig) -> String {
    format!(
        "{}?phone={}&text={}",
        config.send_url,
        config.business_phone,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{cart::Cart, checkout::CustomerDetails, products::Product};

    use super::*;

    fn submission() -> Result<OrderSubmission, crate::checkout::CheckoutError> {
        let mut cart = Cart::new();
        let velvet = Product::new("1", "Premium Velvet Shanel", "Velvet Shanel", Price::new(2500_00));
        let kadar = Product::new("2", "Classic Kadar", "Kadar", Price::new(1800_00));

        cart.add_item(&velvet);
        cart.add_item(&kadar);
        cart.add_item(&kadar);

        OrderSubmission::new(
            &cart,
            CustomerDetails::new("Ayesha Khan", "0300 1234567", "House 5, Street 9, Lahore"),
        )
    }

    #[test]
    fn message_matches_expected_layout() -> TestResult {
        let message = format_order_message(&submission()?, &StoreConfig::default());

        let expected = "*New Order - Harram Clothes*

*Customer Details:*
Name: Ayesha Khan
Phone: 0300 1234567
Address: House 5, Street 9, Lahore

*Order Items:*
- Premium Velvet Shanel (x1) - Rs. 2,500
- Classic Kadar (x2) - Rs. 3,600

*Total Amount: Rs. 6,100*

Delivery: FREE (All Pakistan)
Payment: Cash on Delivery";

        assert_eq!(message, expected);

        Ok(())
    }

    #[test]
    fn url_encodes_like_uri_component() {
        let url = order_url("*Hi* (x2) - Rs. 1,000\nok!", &StoreConfig::default());

        assert_eq!(
            url,
            "https://api.whatsapp.com/send?phone=+923179511031&text=*Hi*%20(x2)%20-%20Rs.%201%2C000%0Aok!"
        );
    }

    #[test]
    fn url_encodes_non_ascii_as_utf8() {
        let url = order_url("£", &StoreConfig::default());

        assert!(url.ends_with("&text=%C2%A3"), "unexpected url {url}");
    }
}

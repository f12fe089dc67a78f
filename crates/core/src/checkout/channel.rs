//! Order submission channel.

use tracing::info;

use crate::{
    checkout::{OrderSubmission, format_order_message, order_url},
    config::StoreConfig,
};

/// The host environment's way of opening a URL.
///
/// Navigation has no result: once the link is handed over, delivery depends
/// entirely on the messaging application on the other side.
pub trait Navigator {
    /// Open `url`.
    fn navigate(&self, url: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, url: &str) {
        self(url);
    }
}

/// What was handed to the navigator for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDispatch {
    /// Plain-text order message.
    pub message: String,

    /// Deep link carrying the encoded message.
    pub url: String,
}

/// Sends finalised orders to the business as messaging deep links.
#[derive(Debug)]
pub struct OrderChannel<N> {
    config: StoreConfig,
    navigator: N,
}

impl<N: Navigator> OrderChannel<N> {
    /// Create a channel for the given business settings.
    pub fn new(config: StoreConfig, navigator: N) -> Self {
        Self { config, navigator }
    }

    /// Business settings in use.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Format `submission`, build its link and navigate to it.
    ///
    /// Every call produces and opens a fresh link; nothing is remembered
    /// between calls.
    pub fn send(&self, submission: &OrderSubmission) -> OrderDispatch {
        let message = format_order_message(submission, &self.config);
        let url = order_url(&message, &self.config);

        info!(
            lines = submission.lines().len(),
            total = submission.totals().total.minor_units(),
            to = %self.config.business_phone,
            "handing order to messaging link"
        );

        self.navigator.navigate(&url);

        OrderDispatch { message, url }
    }
}

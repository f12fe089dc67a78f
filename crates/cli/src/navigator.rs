//! Terminal navigation.

use std::{cell::RefCell, io::Write};

use storefront::checkout::Navigator;
use tracing::{info, warn};

/// Opens order links by printing them for the shopper to follow.
#[derive(Debug)]
pub(crate) struct PrintNavigator<W> {
    out: RefCell<W>,
}

impl<W: Write> PrintNavigator<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }
}

impl<W: Write> Navigator for PrintNavigator<W> {
    fn navigate(&self, url: &str) {
        info!(url, "opening order link");

        let mut out = self.out.borrow_mut();

        if let Err(error) = writeln!(out, "Open this link to send your order:\n{url}") {
            warn!(%error, "failed to print order link");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_the_link() {
        let mut buffer = Vec::new();

        PrintNavigator::new(&mut buffer).navigate("https://example.test/send?text=hi");

        assert_eq!(
            String::from_utf8_lossy(&buffer),
            "Open this link to send your order:\nhttps://example.test/send?text=hi\n",
            "navigator should print the prompt followed by the url"
        );
    }
}

//! Interactive model of the pricing page.
//!
//! One method per user-visible action, each with its own wait contract.
//! Ordering is not enforced here: calling an operation out of sequence
//! reads whatever the current DOM shows, and sequencing is the scenario's
//! responsibility.

use crate::browser::wait;
use crate::config::Config;
use crate::error::PageError;
use crate::model::{Bounds, Currency, RangeIndicator, ServerKind};
use crate::pages::base::BasePage;
use crate::pages::locators::HostingLocators;
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use std::time::Duration;
use tokio::time::sleep;

pub struct MainPage {
    base: BasePage,
    wait_timeout: Duration,
    poll_interval: Duration,
    cookie_timeout: Duration,
    cookie_settle: Duration,
    validation_settle: Duration,
}

impl MainPage {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            base: BasePage::new(client, config.hosting_url.clone()),
            wait_timeout: config.wait_timeout(),
            poll_interval: config.poll_interval(),
            cookie_timeout: config.cookie_timeout(),
            cookie_settle: config.cookie_settle(),
            validation_settle: config.validation_settle(),
        }
    }

    pub async fn open(&self) -> Result<(), PageError> {
        self.base.open().await
    }

    pub fn client(&self) -> &Client {
        self.base.client()
    }

    pub fn url(&self) -> &str {
        self.base.url()
    }

    /// Polls for the configurator widget to become visible.
    ///
    /// Returns `false` when the budget expires; never errors. A missing
    /// configurator is a test signal (page did not load), not a fault.
    pub async fn check_connection(&self, timeout: Duration) -> bool {
        match wait::visible(
            self.client(),
            HostingLocators::CONFIGURATOR,
            "server configurator",
            timeout,
            self.poll_interval,
        )
        .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("⚠️ configurator not visible: {}", e);
                false
            }
        }
    }

    /// Dismisses the cookie banner.
    ///
    /// The banner slides in after an async transition, so a fixed settle
    /// delay precedes the bounded poll. Swallows every error: an absent
    /// banner just means there is nothing to accept.
    pub async fn accept_cookies(&self) -> bool {
        sleep(self.cookie_settle).await;

        let banner = match wait::present(
            self.client(),
            HostingLocators::ACCEPT_COOKIES,
            "cookie banner",
            self.cookie_timeout,
            self.poll_interval,
        )
        .await
        {
            Ok(elem) => elem,
            Err(e) => {
                tracing::warn!("⚠️ cookie banner not found: {}", e);
                return false;
            }
        };

        if let Err(e) = banner.click().await {
            tracing::warn!("⚠️ cookie banner click failed: {}", e);
            return false;
        }

        // Accepting can leave the viewport scrolled down to the banner.
        if let Err(e) = self.client().execute("window.scrollTo(0, 0);", vec![]).await {
            tracing::debug!("scroll to top failed: {}", e);
        }

        tracing::info!("✅ cookies accepted");
        true
    }

    /// Reads the default bounds from the input placeholders.
    ///
    /// No wait: callers must have confirmed page readiness first, and a
    /// missing input here is a markup regression that should fail loudly.
    pub async fn save_default_values(&self) -> Result<Bounds, PageError> {
        let min = self
            .read_placeholder(HostingLocators::MIN_INPUT_FIELD, "min placeholder")
            .await?;
        let max = self
            .read_placeholder(HostingLocators::MAX_INPUT_FIELD, "max placeholder")
            .await?;
        Ok(Bounds { min, max })
    }

    /// Reads the current bound values as typed into the inputs, falling
    /// back to the placeholder where a field is untouched.
    pub async fn read_current_bounds(&self) -> Result<Bounds, PageError> {
        let min = self
            .read_value(HostingLocators::MIN_INPUT_FIELD, "min value")
            .await?;
        let max = self
            .read_value(HostingLocators::MAX_INPUT_FIELD, "max value")
            .await?;
        Ok(Bounds { min, max })
    }

    /// Clicks the server-type tab for `kind`.
    pub async fn switch_to_servers(&self, kind: ServerKind) -> Result<(), PageError> {
        let buttons = self
            .client()
            .find_all(HostingLocators::SERVER_SWITCHER)
            .await?;
        let index = kind.button_index();
        let button = buttons.get(index).ok_or_else(|| {
            PageError::ElementMissing(format!(
                "server switcher button #{} ({} of {} buttons on page)",
                index,
                kind,
                buttons.len()
            ))
        })?;
        button.click().await?;
        Ok(())
    }

    /// Clicks the currency switcher and returns the display symbol the
    /// price cards are expected to carry afterwards. A switcher that never
    /// becomes visible is a timeout and propagates.
    pub async fn switch_to_currency(&self, currency: Currency) -> Result<&'static str, PageError> {
        let locator = match currency {
            Currency::Eur => HostingLocators::EUR_SWITCHER,
            Currency::Usd => HostingLocators::USD_SWITCHER,
        };
        let switcher = wait::visible(
            self.client(),
            locator,
            "currency switcher",
            self.wait_timeout,
            self.poll_interval,
        )
        .await?;
        switcher.click().await?;
        Ok(currency.symbol())
    }

    pub async fn change_min_value(&self, value: i64) -> Result<(), PageError> {
        self.change_bound(HostingLocators::MIN_INPUT_FIELD, value)
            .await
    }

    pub async fn change_max_value(&self, value: i64) -> Result<(), PageError> {
        self.change_bound(HostingLocators::MAX_INPUT_FIELD, value)
            .await
    }

    /// Expands the card grid by clicking "show more" while its label still
    /// advertises more results, then reads every card's price text.
    ///
    /// Idempotent in card count once the control is exhausted: repeated
    /// calls return the same-length sequence.
    pub async fn watch_cards(&self) -> Result<Vec<String>, PageError> {
        loop {
            let button = wait::clickable(
                self.client(),
                HostingLocators::SHOW_MORE,
                "show more control",
                self.wait_timeout,
                self.poll_interval,
            )
            .await?;
            let label = button.text().await?;
            if label.contains("more") {
                button.click().await?;
            } else {
                break;
            }
        }

        let grid = wait::present(
            self.client(),
            HostingLocators::CARD_GRID,
            "results grid",
            self.wait_timeout,
            self.poll_interval,
        )
        .await?;

        let cards = grid.find_all(HostingLocators::PRICE_CARD).await?;
        let mut prices = Vec::with_capacity(cards.len());
        for card in cards {
            let price = card.find(HostingLocators::CARD_PRICE).await?;
            prices.push(price.text().await?);
        }
        Ok(prices)
    }

    /// Probes the "Out of range" validation message after a settle delay.
    ///
    /// The message appears on an async re-render, hence the fixed delay
    /// rather than a poll: polling would read the stale state and return
    /// before the page reacts.
    pub async fn probe_out_of_range(&self) -> RangeIndicator {
        sleep(self.validation_settle).await;

        match self.client().find_all(HostingLocators::OUT_OF_RANGE).await {
            Ok(found) if found.is_empty() => RangeIndicator::InRange,
            Ok(_) => RangeIndicator::OutOfRange,
            Err(e) => RangeIndicator::Unknown(e.to_string()),
        }
    }

    /// Boolean view of [`probe_out_of_range`](Self::probe_out_of_range):
    /// a fault while checking counts as out of range, so a broken page can
    /// never pass for a valid input.
    pub async fn get_out_of_range(&self) -> bool {
        match self.probe_out_of_range().await {
            RangeIndicator::InRange => false,
            RangeIndicator::OutOfRange => true,
            RangeIndicator::Unknown(reason) => {
                tracing::warn!("⚠️ validation state unknown, treating as out of range: {}", reason);
                true
            }
        }
    }

    async fn change_bound(&self, field: Locator<'static>, value: i64) -> Result<(), PageError> {
        let input = self.inner_input(field).await?;
        input.clear().await?;
        input.send_keys(&value.to_string()).await?;
        input.send_keys("\n").await?;
        Ok(())
    }

    async fn inner_input(&self, field: Locator<'static>) -> Result<Element, PageError> {
        let field_elem = self.client().find(field).await?;
        Ok(field_elem.find(HostingLocators::INNER_INPUT).await?)
    }

    async fn read_placeholder(
        &self,
        field: Locator<'static>,
        what: &'static str,
    ) -> Result<i64, PageError> {
        let input = self.inner_input(field).await?;
        let text = input.attr("placeholder").await?.unwrap_or_default();
        parse_bound(&text, what)
    }

    async fn read_value(&self, field: Locator<'static>, what: &'static str) -> Result<i64, PageError> {
        let input = self.inner_input(field).await?;
        let typed = input.prop("value").await?.unwrap_or_default();
        if typed.trim().is_empty() {
            let placeholder = input.attr("placeholder").await?.unwrap_or_default();
            parse_bound(&placeholder, what)
        } else {
            parse_bound(&typed, what)
        }
    }
}

fn parse_bound(text: &str, what: &'static str) -> Result<i64, PageError> {
    text.trim()
        .replace(',', "")
        .parse::<i64>()
        .map_err(|_| PageError::Parse {
            what,
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("100", "min").unwrap(), 100);
        assert_eq!(parse_bound(" 1 ", "min").unwrap(), 1);
        assert_eq!(parse_bound("1,200", "max").unwrap(), 1200);
        assert!(parse_bound("", "min").is_err());
        assert!(parse_bound("n/a", "min").is_err());
    }
}

//! Bounded polling primitives.
//!
//! Every dynamic widget on the pricing page is waited for with one of these
//! poll loops. They either return the element within the budget or fail
//! once with a `Timeout`; there are no retries on top.

use crate::error::PageError;
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Condition an element must satisfy before the wait resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Until {
    Present,
    Visible,
    Clickable,
}

/// Polls until the element exists in the DOM.
pub async fn present(
    client: &Client,
    locator: Locator<'static>,
    what: &'static str,
    timeout: Duration,
    poll: Duration,
) -> Result<Element, PageError> {
    poll_for(client, locator, what, timeout, poll, Until::Present).await
}

/// Polls until the element exists and is displayed.
pub async fn visible(
    client: &Client,
    locator: Locator<'static>,
    what: &'static str,
    timeout: Duration,
    poll: Duration,
) -> Result<Element, PageError> {
    poll_for(client, locator, what, timeout, poll, Until::Visible).await
}

/// Polls until the element is displayed and enabled.
pub async fn clickable(
    client: &Client,
    locator: Locator<'static>,
    what: &'static str,
    timeout: Duration,
    poll: Duration,
) -> Result<Element, PageError> {
    poll_for(client, locator, what, timeout, poll, Until::Clickable).await
}

async fn poll_for(
    client: &Client,
    locator: Locator<'static>,
    what: &'static str,
    timeout: Duration,
    poll: Duration,
    until: Until,
) -> Result<Element, PageError> {
    let deadline = Instant::now() + timeout;

    loop {
        match client.find(locator).await {
            Ok(elem) => {
                // A stale element between find and the state check reads as
                // not-ready and falls through to the next poll.
                if satisfies(&elem, until).await {
                    return Ok(elem);
                }
            }
            Err(e) if e.is_no_such_element() => {}
            Err(e) => return Err(e.into()),
        }

        if Instant::now() >= deadline {
            return Err(PageError::Timeout {
                what,
                waited_ms: timeout.as_millis() as u64,
            });
        }
        sleep(poll).await;
    }
}

async fn satisfies(elem: &Element, until: Until) -> bool {
    match until {
        Until::Present => true,
        Until::Visible => elem.is_displayed().await.unwrap_or(false),
        Until::Clickable => {
            elem.is_displayed().await.unwrap_or(false) && elem.is_enabled().await.unwrap_or(false)
        }
    }
}

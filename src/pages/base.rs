use crate::error::PageError;
use fantoccini::Client;

/// Common ground for page objects: a shared driver handle plus the page's
/// URL, fixed at construction. The driver session outlives every page
/// object; cloning a `Client` clones a handle onto the same session.
pub struct BasePage {
    client: Client,
    url: String,
}

impl BasePage {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Navigates the driver to this page. Driver failures propagate.
    pub async fn open(&self) -> Result<(), PageError> {
        self.client.goto(&self.url).await?;
        Ok(())
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

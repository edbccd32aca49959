//! Locator registry for the hosting pricing page.
//!
//! Semantic name -> selector, in one place. The class and attribute names
//! below are the page's markup contract and the most fragile dependency of
//! the whole suite; nothing outside this module hardcodes a selector.

use fantoccini::Locator;

pub struct HostingLocators;

impl HostingLocators {
    /// Root of the server configurator widget; visible once the page works.
    pub const CONFIGURATOR: Locator<'static> = Locator::Css(".gc-server-configurator-buttons");

    pub const ACCEPT_COOKIES: Locator<'static> =
        Locator::XPath("//button[contains(@class, 'gc-button') and text()='Accept all cookies']");

    pub const OUT_OF_RANGE: Locator<'static> =
        Locator::XPath("//p[@class='gc-input-validation' and contains(text(), 'Out of range')]");

    /// Every button on the page; server tabs are addressed by index.
    pub const SERVER_SWITCHER: Locator<'static> = Locator::Css("button");

    pub const EUR_SWITCHER: Locator<'static> = Locator::Css("label.gc-text[for=\"left\"]");
    pub const USD_SWITCHER: Locator<'static> = Locator::Css("label.gc-text[for=\"right\"]");

    pub const MIN_INPUT_FIELD: Locator<'static> =
        Locator::Css("gcore-input-field[formcontrolname=\"min\"]");
    pub const MAX_INPUT_FIELD: Locator<'static> =
        Locator::Css("gcore-input-field[formcontrolname=\"max\"]");

    /// The native <input> nested inside either bound field.
    pub const INNER_INPUT: Locator<'static> = Locator::Css("input.gc-input");

    pub const SHOW_MORE: Locator<'static> = Locator::Css(".gc-text_16.gc-server-configurator-more");

    pub const CARD_GRID: Locator<'static> = Locator::Css("div.gc-grid.gc-grid_3.gc-m-top_xx-large");

    pub const PRICE_CARD: Locator<'static> = Locator::Css(".price-card");
    pub const CARD_PRICE: Locator<'static> = Locator::Css(".price-card_price");
}

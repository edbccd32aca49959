use crate::error::PageError;
use crate::model::{Bounds, Currency, ServerKind};
use crate::runner::step;
use crate::scenarios::{Scenario, ScenarioContext};
use crate::utils::parse_price_card;
use async_trait::async_trait;
use tokio::time::sleep;

/// One cell of the price-card grid check.
#[derive(Debug, Clone, Copy)]
pub struct PriceCase {
    pub min_delta: i64,
    pub max_delta: i64,
    pub server: ServerKind,
    pub currency: Currency,
}

impl PriceCase {
    pub fn label(&self) -> String {
        format!(
            "{}/{}/({},{})",
            self.server, self.currency, self.min_delta, self.max_delta
        )
    }
}

/// For every (delta, server type, currency) combination: narrow the bounds,
/// expand the card grid and check each card's currency symbol and price
/// range. Deltas narrow from both ends, so `min_delta` is added to the
/// default minimum and `max_delta` subtracted from the default maximum.
pub struct PriceCards {
    cases: Vec<PriceCase>,
}

impl PriceCards {
    pub fn full_grid() -> Self {
        let mut cases = Vec::new();
        for server in [ServerKind::Dedicated, ServerKind::Virtual] {
            for currency in [Currency::Usd, Currency::Eur] {
                for (min_delta, max_delta) in [(0, 0), (5, 5), (10, 10)] {
                    cases.push(PriceCase {
                        min_delta,
                        max_delta,
                        server,
                        currency,
                    });
                }
            }
        }
        Self { cases }
    }

    pub fn with_cases(cases: Vec<PriceCase>) -> Self {
        Self { cases }
    }
}

#[async_trait]
impl Scenario for PriceCards {
    fn name(&self) -> &'static str {
        "price_cards"
    }

    async fn run(&self, ctx: &mut ScenarioContext) -> Result<(), PageError> {
        let page = ctx.main_page();
        let mut stability_checked = false;

        for case in &self.cases {
            tracing::info!("▶ case {}", case.label());

            page.open().await?;
            sleep(ctx.config.page_settle()).await;
            if !ctx.session.cookies_accepted {
                let accepted = page.accept_cookies().await;
                ctx.session.record_cookies(accepted);
            }

            let symbol = step("prepare default values", async {
                page.switch_to_servers(case.server).await?;
                page.switch_to_currency(case.currency).await
            })
            .await?;

            let defaults = page.save_default_values().await?;
            ctx.session.record_defaults(defaults);

            let adjusted = Bounds {
                min: defaults.min + case.min_delta,
                max: defaults.max - case.max_delta,
            };

            let cards = step("check cards", async {
                page.change_min_value(adjusted.min).await?;
                page.change_max_value(adjusted.max).await?;
                page.watch_cards().await
            })
            .await?;

            tracing::info!("{}: {} card(s) in [{}, {}]", case.label(), cards.len(), adjusted.min, adjusted.max);

            if !stability_checked {
                // Once "show more" is exhausted the card count must be stable
                let again = page.watch_cards().await?;
                if again.len() != cards.len() {
                    return Err(PageError::Assertion(format!(
                        "case {}: card count changed between reads ({} then {})",
                        case.label(),
                        cards.len(),
                        again.len()
                    )));
                }
                stability_checked = true;
            }

            for text in &cards {
                check_card(text, symbol, adjusted).map_err(|e| {
                    PageError::Assertion(format!("case {}: {}", case.label(), e))
                })?;
            }
        }

        Ok(())
    }
}

/// Checks one card text against the selected currency and adjusted bounds.
pub fn check_card(text: &str, symbol: &str, bounds: Bounds) -> Result<(), PageError> {
    let card = parse_price_card(text)?;
    if card.symbol != symbol {
        return Err(PageError::Assertion(format!(
            "wrong currency on card '{}': expected '{}'",
            text, symbol
        )));
    }
    if !bounds.contains(card.amount) {
        return Err(PageError::Assertion(format!(
            "price {} on card '{}' outside [{}, {}]",
            card.amount, text, bounds.min, bounds.max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid_has_twelve_cases() {
        assert_eq!(PriceCards::full_grid().cases.len(), 12);
    }

    #[test]
    fn test_check_card_accepts_matching() {
        let bounds = Bounds { min: 11, max: 90 };
        assert!(check_card("$ 45", "$", bounds).is_ok());
        assert!(check_card("$ 11", "$", bounds).is_ok());
        assert!(check_card("$ 90", "$", bounds).is_ok());
    }

    #[test]
    fn test_check_card_rejects_wrong_symbol() {
        let bounds = Bounds { min: 0, max: 1000 };
        let err = check_card("€ 45", "$", bounds).unwrap_err();
        assert!(err.to_string().contains("wrong currency"));
    }

    #[test]
    fn test_check_card_rejects_out_of_range() {
        let bounds = Bounds { min: 11, max: 90 };
        let err = check_card("$ 1,200.50", "$", bounds).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }
}

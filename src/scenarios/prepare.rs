use crate::error::PageError;
use crate::runner::step;
use crate::scenarios::{Scenario, ScenarioContext};
use async_trait::async_trait;

/// Loads the page for the first time, accepts cookies and captures the
/// default bounds into the session context.
pub struct PrepareEnvironment;

#[async_trait]
impl Scenario for PrepareEnvironment {
    fn name(&self) -> &'static str {
        "prepare_environment"
    }

    async fn run(&self, ctx: &mut ScenarioContext) -> Result<(), PageError> {
        let page = ctx.main_page();
        page.open().await?;

        step("connection", async {
            if page.check_connection(ctx.config.connect_timeout()).await {
                Ok(())
            } else {
                Err(PageError::Assertion("page was not loaded".to_string()))
            }
        })
        .await?;

        let accepted = step("cookie acceptance", page.accept_cookies()).await;
        ctx.session.record_cookies(accepted);
        if !accepted {
            return Err(PageError::Assertion(
                "cookie banner was not dismissed".to_string(),
            ));
        }

        let defaults = step("saving default values", page.save_default_values()).await?;
        tracing::info!("default bounds: [{}, {}]", defaults.min, defaults.max);
        ctx.session.record_defaults(defaults);

        Ok(())
    }
}

//! Business scenarios and the seam they plug into the runner through.

mod bounds;
mod prepare;
mod prices;

pub use bounds::InputValidation;
pub use prepare::PrepareEnvironment;
pub use prices::{check_card, PriceCards, PriceCase};

use crate::config::Config;
use crate::error::PageError;
use crate::pages::MainPage;
use crate::session::SessionContext;
use async_trait::async_trait;
use fantoccini::Client;
use std::sync::Arc;

/// Everything a scenario gets to work with: the shared driver session,
/// the suite configuration, and the mutable session state.
pub struct ScenarioContext {
    pub config: Arc<Config>,
    pub client: Client,
    pub session: SessionContext,
}

impl ScenarioContext {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: SessionContext::new(),
        }
    }

    /// Fresh page object over the shared session.
    pub fn main_page(&self) -> MainPage {
        MainPage::new(self.client.clone(), &self.config)
    }
}

#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &mut ScenarioContext) -> Result<(), PageError>;
}

/// All scenarios, in execution order. `prepare_environment` must come
/// first: it resolves the cookie banner and captures the default bounds
/// the later scenarios read from the session context.
pub fn registry() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(PrepareEnvironment),
        Box::new(InputValidation),
        Box::new(PriceCards::full_grid()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let scenarios = registry();
        assert_eq!(scenarios[0].name(), "prepare_environment");
        assert_eq!(scenarios.len(), 3);
    }
}

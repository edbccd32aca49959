//! E2E harness entry point.
//!
//! Runs the business scenarios sequentially against one shared WebDriver
//! session. Run with: `cargo test --test e2e` (needs chromedriver or a
//! Selenium endpoint; without one the suite logs a warning and skips).

use clap::Parser;
use hosting_e2e::browser::create_webdriver_client;
use hosting_e2e::{Config, SuiteRunner};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "hosting-e2e")]
#[command(about = "E2E suite for the hosting pricing configurator")]
struct Args {
    /// WebDriver endpoint (overrides WEBDRIVER_URL)
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Page under test (overrides HOSTING_URL)
    #[arg(long)]
    hosting_url: Option<String>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Output directory for the results file
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,

    /// Fail instead of skipping when no WebDriver endpoint is reachable
    #[arg(long)]
    require_driver: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(url) = args.webdriver_url {
        config.webdriver_url = url;
    }
    if let Some(url) = args.hosting_url {
        config.hosting_url = url;
    }
    if args.headed {
        config.headless = false;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},hosting_e2e=debug", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 hosting configurator suite starting");
    tracing::info!("   Target: {}", config.hosting_url);
    tracing::info!("   WebDriver: {}", config.webdriver_url);
    tracing::info!("   Headless: {}", config.headless);

    // One session for the whole suite: faster, at the cost of scenarios
    // seeing each other's DOM state.
    let client = match create_webdriver_client(&config).await {
        Ok(client) => client,
        Err(e) => {
            if args.require_driver {
                tracing::error!("❌ WebDriver session failed: {}", e);
                std::process::exit(1);
            }
            tracing::warn!(
                "⚠️ no WebDriver endpoint at {}, skipping suite: {}",
                config.webdriver_url,
                e
            );
            return;
        }
    };

    let config = Arc::new(config);
    let runner = SuiteRunner::new(config.clone(), client.clone());
    let result = runner.run_all().await;

    if let Err(e) = runner.write_results(&result, &args.output) {
        tracing::warn!("⚠️ could not write results: {}", e);
    }

    if let Err(e) = client.close().await {
        tracing::warn!("⚠️ session close failed: {}", e);
    }

    if !result.all_passed() {
        std::process::exit(1);
    }
}

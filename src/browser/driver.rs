use crate::config::Config;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;

pub async fn create_webdriver_client(config: &Config) -> Result<Client, fantoccini::error::NewSessionError> {
    let mut caps = serde_json::Map::new();

    // Chrome options
    let mut chrome_opts = serde_json::Map::new();

    let mut args = vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--window-size=1920,1080".to_string(),
        "--ignore-certificate-errors".to_string(),
        "--ignore-ssl-errors=yes".to_string(),
    ];

    if config.headless {
        args.push("--headless".to_string());
        args.push("--disable-software-rasterizer".to_string());
    }

    chrome_opts.insert("args".to_string(), json!(args));
    caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

    // Standard capabilities
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("acceptInsecureCerts".to_string(), json!(true));

    tracing::info!("Connecting to WebDriver: {}", config.webdriver_url);

    let client = ClientBuilder::native()
        .capabilities(caps)
        .connect(&config.webdriver_url)
        .await?;

    tracing::info!("✅ WebDriver session created");

    Ok(client)
}

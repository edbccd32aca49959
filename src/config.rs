use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub hosting_url: String,
    pub log_level: String,

    // Browser
    pub webdriver_url: String,
    pub headless: bool,

    // Wait budgets
    pub connect_timeout_ms: u64,
    pub wait_timeout_ms: u64,
    pub poll_interval_ms: u64,
    pub cookie_timeout_ms: u64,

    // Settle delays for async UI transitions. These widgets re-render after
    // the DOM is already present, so a poll would return too early.
    pub cookie_settle_ms: u64,
    pub validation_settle_ms: u64,
    pub page_settle_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            hosting_url: env::var("HOSTING_URL")
                .unwrap_or_else(|_| "https://gcore.com/hosting".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            webdriver_url: env::var("WEBDRIVER_URL")
                .unwrap_or_else(|_| "http://localhost:9515".to_string()),
            headless: env::var("HEADLESS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),

            connect_timeout_ms: env_ms("CONNECT_TIMEOUT_MS", 20_000),
            wait_timeout_ms: env_ms("WAIT_TIMEOUT_MS", 10_000),
            poll_interval_ms: env_ms("POLL_INTERVAL_MS", 250),
            cookie_timeout_ms: env_ms("COOKIE_TIMEOUT_MS", 15_000),

            cookie_settle_ms: env_ms("COOKIE_SETTLE_MS", 3_000),
            validation_settle_ms: env_ms("VALIDATION_SETTLE_MS", 1_000),
            page_settle_ms: env_ms("PAGE_SETTLE_MS", 3_000),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn cookie_timeout(&self) -> Duration {
        Duration::from_millis(self.cookie_timeout_ms)
    }

    pub fn cookie_settle(&self) -> Duration {
        Duration::from_millis(self.cookie_settle_ms)
    }

    pub fn validation_settle(&self) -> Duration {
        Duration::from_millis(self.validation_settle_ms)
    }

    pub fn page_settle(&self) -> Duration {
        Duration::from_millis(self.page_settle_ms)
    }
}

fn env_ms(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

//! Sequential scenario runner.
//!
//! Scenarios share one WebDriver session and run strictly in registry
//! order. A failing scenario aborts itself only; the session persists for
//! whatever comes after it.

use crate::config::Config;
use crate::scenarios::{self, ScenarioContext};
use fantoccini::Client;
use serde::Serialize;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteResult {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Wraps one named reporting step. Purely observational: the step name
/// shows up in the logs and nothing else changes.
pub async fn step<T, F>(name: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    tracing::info!("▶ {}", name);
    fut.await
}

pub struct SuiteRunner {
    config: Arc<Config>,
    client: Client,
}

impl SuiteRunner {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Runs every registered scenario against the shared session.
    pub async fn run_all(&self) -> SuiteResult {
        let start = Instant::now();
        let mut ctx = ScenarioContext::new(self.config.clone(), self.client.clone());

        let scenarios = scenarios::registry();
        let mut outcomes = Vec::with_capacity(scenarios.len());
        let mut passed = 0;
        let mut failed = 0;

        tracing::info!("Running {} scenario(s)...", scenarios.len());

        for scenario in &scenarios {
            let name = scenario.name();
            let scenario_start = Instant::now();

            let result = scenario.run(&mut ctx).await;
            let duration_ms = scenario_start.elapsed().as_millis() as u64;

            match result {
                Ok(()) => {
                    passed += 1;
                    tracing::info!("✓ {} ({} ms)", name, duration_ms);
                    outcomes.push(ScenarioOutcome {
                        name: name.to_string(),
                        passed: true,
                        duration_ms,
                        error: None,
                    });
                }
                Err(e) => {
                    failed += 1;
                    tracing::error!("✗ {} - {}", name, e);
                    outcomes.push(ScenarioOutcome {
                        name: name.to_string(),
                        passed: false,
                        duration_ms,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!("");
        tracing::info!(
            "Suite result: {} passed, {} failed ({} ms)",
            passed,
            failed,
            duration_ms
        );

        SuiteResult {
            total: scenarios.len(),
            passed,
            failed,
            duration_ms,
            outcomes,
        }
    }

    /// Writes the machine-readable suite result next to the logs.
    pub fn write_results(&self, result: &SuiteResult, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join("suite-results.json");
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(&path, json)?;
        tracing::info!("Results written to: {}", path.display());
        Ok(path)
    }
}

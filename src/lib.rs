//! End-to-end UI tests for the Gcore hosting pricing configurator.
//!
//! The page-object layer (`pages`) wraps every user-visible action on the
//! pricing page behind one named operation with an explicit wait contract;
//! the scenario layer (`scenarios`) sequences those operations into the
//! business checks and the runner executes them against a single shared
//! WebDriver session.
//!
//! Run with a WebDriver endpoint listening (chromedriver or Selenium):
//! `cargo test --test e2e` — the binary skips itself when no endpoint is
//! reachable.

pub mod browser;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod runner;
pub mod scenarios;
pub mod session;
pub mod utils;

pub use config::Config;
pub use error::{PageError, PageResult};
pub use runner::SuiteRunner;

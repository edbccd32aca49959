use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("timed out after {waited_ms}ms waiting for {what}")]
    Timeout { what: &'static str, waited_ms: u64 },

    #[error("element not found: {0}")]
    ElementMissing(String),

    #[error("could not parse {what}: '{text}'")]
    Parse { what: &'static str, text: String },

    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("WebDriver session could not be created: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),
}

pub type PageResult<T> = Result<T, PageError>;

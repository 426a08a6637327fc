use thiserror::Error;

#[derive(Debug, Error)]
pub enum E2eError {
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("WebDriver session could not be created: {0}")]
    Session(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Element not displayed within {timeout_ms} ms: {selector}")]
    NotDisplayed { selector: String, timeout_ms: u64 },

    #[error("Malformed price text: '{0}'")]
    MalformedPrice(String),

    #[error("Sort option not found: {0}")]
    SortOptionNotFound(String),

    #[error("Passenger counter unreadable: {0}")]
    InvalidCounter(String),

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Test data error: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, E2eError>;

impl From<fantoccini::error::CmdError> for E2eError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        E2eError::WebDriver(err.to_string())
    }
}

impl From<fantoccini::error::NewSessionError> for E2eError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        E2eError::Session(err.to_string())
    }
}

impl From<serde_json::Error> for E2eError {
    fn from(err: serde_json::Error) -> Self {
        E2eError::Data(err.to_string())
    }
}

impl From<std::io::Error> for E2eError {
    fn from(err: std::io::Error) -> Self {
        E2eError::Data(err.to_string())
    }
}

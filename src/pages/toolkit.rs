use crate::browser::BrowserActions;
use crate::config::Config;
use crate::error::{E2eError, Result};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const SET_VALUE_SCRIPT: &str = r#"
    const el = document.querySelector(arguments[0]);
    if (!el) {
        return false;
    }
    el.value = `${arguments[1]}`;
    return true;
"#;

/// Shared element interactions, handed to every page object.
#[derive(Clone)]
pub struct Toolkit {
    browser: Arc<dyn BrowserActions>,
    config: Arc<Config>,
}

impl Toolkit {
    pub fn new(browser: Arc<dyn BrowserActions>, config: Arc<Config>) -> Self {
        Self { browser, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn browser(&self) -> &dyn BrowserActions {
        self.browser.as_ref()
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.config.resolve_url(path);
        tracing::info!("🌐 Opening {}", url);
        self.browser.goto(&url).await
    }

    pub async fn maximize(&self) -> Result<()> {
        self.browser.maximize_window().await
    }

    /// Waits up to `timeout` (or the configured default) for the element to be displayed.
    pub async fn wait_element_displayed(&self, selector: &str, timeout: Option<Duration>) -> Result<()> {
        let timeout = timeout.unwrap_or_else(|| self.config.wait_timeout());
        let deadline = Instant::now() + timeout;

        loop {
            if self.browser.is_displayed(selector).await? {
                tracing::debug!("Displayed: {}", selector);
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(E2eError::NotDisplayed {
                    selector: selector.to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(self.config.poll_interval()).await;
        }
    }

    pub async fn click(&self, selector: &str) -> Result<()> {
        tracing::debug!("Click: {}", selector);
        self.browser.click(selector).await
    }

    pub async fn click_nth(&self, selector: &str, index: usize) -> Result<()> {
        tracing::debug!("Click: {} [{}]", selector, index);
        self.browser.click_nth(selector, index).await
    }

    pub async fn input(&self, selector: &str, text: &str) -> Result<()> {
        self.browser.send_keys(selector, text).await
    }

    /// Assigns `value` straight to the element's `value` property, no keystrokes.
    pub async fn set_input_value_by_query_selector(&self, selector: &str, value: &str) -> Result<()> {
        let found = self
            .browser
            .execute(SET_VALUE_SCRIPT, vec![json!(selector), json!(value)])
            .await?;

        if found.as_bool() != Some(true) {
            return Err(E2eError::ElementNotFound(selector.to_string()));
        }

        tracing::debug!("Set {} = {}", selector, value);
        Ok(())
    }

    pub async fn is_present(&self, selector: &str) -> Result<bool> {
        self.browser.is_present(selector).await
    }

    pub async fn text(&self, selector: &str) -> Result<String> {
        self.browser.text(selector).await
    }

    pub async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        self.browser.texts(selector).await
    }

    pub async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        self.browser.attribute(selector, name).await
    }
}

use crate::browser::actions::BrowserActions;
use crate::browser::driver::create_webdriver_client;
use crate::config::Config;
use crate::error::{E2eError, Result};
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, Locator};
use serde_json::Value;

/// `BrowserActions` over a fantoccini WebDriver session.
pub struct WebDriverBrowser {
    client: Client,
}

impl WebDriverBrowser {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(config: &Config) -> Result<Self> {
        let client = create_webdriver_client(config).await?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        tracing::info!("WebDriver session closed");
        Ok(())
    }

    async fn find(&self, selector: &str) -> Result<Element> {
        self.client
            .find(Locator::Css(selector))
            .await
            .map_err(|e| not_found_or(selector, e))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Element>> {
        Ok(self.client.find_all(Locator::Css(selector)).await?)
    }
}

fn not_found_or(selector: &str, err: CmdError) -> E2eError {
    if err.is_no_such_element() {
        E2eError::ElementNotFound(selector.to_string())
    } else {
        E2eError::from(err)
    }
}

#[async_trait]
impl BrowserActions for WebDriverBrowser {
    async fn goto(&self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn maximize_window(&self) -> Result<()> {
        self.client.maximize_window().await?;
        Ok(())
    }

    async fn is_present(&self, selector: &str) -> Result<bool> {
        Ok(!self.find_all(selector).await?.is_empty())
    }

    async fn is_displayed(&self, selector: &str) -> Result<bool> {
        match self.find(selector).await {
            Ok(elem) => Ok(elem.is_displayed().await?),
            Err(E2eError::ElementNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.find(selector).await?.click().await?;
        Ok(())
    }

    async fn click_nth(&self, selector: &str, index: usize) -> Result<()> {
        let elements = self.find_all(selector).await?;
        let elem = elements
            .get(index)
            .ok_or_else(|| E2eError::ElementNotFound(format!("{} [{}]", selector, index)))?;
        elem.click().await?;
        Ok(())
    }

    async fn send_keys(&self, selector: &str, text: &str) -> Result<()> {
        self.find(selector).await?.send_keys(text).await?;
        Ok(())
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        Ok(self.find(selector).await?.attr(name).await?)
    }

    async fn text(&self, selector: &str) -> Result<String> {
        Ok(self.find(selector).await?.text().await?)
    }

    async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let mut texts = Vec::new();
        for elem in self.find_all(selector).await? {
            texts.push(elem.text().await?);
        }
        Ok(texts)
    }

    async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        Ok(self.client.execute(script, args).await?)
    }
}

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// The browser operations the page objects are written against.
///
/// Elements are addressed by CSS selector. Operations on a single element act
/// on the first match; `*_nth` variants address one match of a multi-element
/// selector by position.
#[async_trait]
pub trait BrowserActions: Send + Sync {
    async fn goto(&self, url: &str) -> Result<()>;

    async fn maximize_window(&self) -> Result<()>;

    /// `true` when at least one element matches.
    async fn is_present(&self, selector: &str) -> Result<bool>;

    /// `false` when nothing matches, rather than an error.
    async fn is_displayed(&self, selector: &str) -> Result<bool>;

    async fn click(&self, selector: &str) -> Result<()>;

    async fn click_nth(&self, selector: &str, index: usize) -> Result<()>;

    /// Types into the element with simulated keystrokes.
    async fn send_keys(&self, selector: &str, text: &str) -> Result<()>;

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;

    async fn text(&self, selector: &str) -> Result<String>;

    /// Visible text of every match, in document order.
    async fn texts(&self, selector: &str) -> Result<Vec<String>>;

    async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value>;
}

pub mod actions;
pub mod driver;
pub mod webdriver;

pub use actions::BrowserActions;
pub use driver::create_webdriver_client;
pub use webdriver::WebDriverBrowser;

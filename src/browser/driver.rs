use crate::config::Config;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;

fn chrome_args(config: &Config) -> Vec<String> {
    let mut args = vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--window-size=1920,1080".to_string(),
        format!(
            "--lang={}",
            config.accept_language.split(',').next().unwrap_or("vi-VN")
        ),
        "--disable-infobars".to_string(),
    ];

    if config.headless {
        args.push("--headless=new".to_string());
    }

    args
}

pub fn chrome_capabilities(config: &Config) -> serde_json::Map<String, serde_json::Value> {
    let mut caps = serde_json::Map::new();

    let mut chrome_opts = serde_json::Map::new();
    chrome_opts.insert("args".to_string(), json!(chrome_args(config)));
    chrome_opts.insert("excludeSwitches".to_string(), json!(["enable-automation"]));

    caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("acceptInsecureCerts".to_string(), json!(true));

    caps
}

pub async fn create_webdriver_client(
    config: &Config,
) -> Result<Client, fantoccini::error::NewSessionError> {
    tracing::info!("Connecting to WebDriver: {}", config.webdriver_url);

    let client = ClientBuilder::native()
        .capabilities(chrome_capabilities(config))
        .connect(&config.webdriver_url)
        .await?;

    tracing::info!("✅ WebDriver session created");

    Ok(client)
}

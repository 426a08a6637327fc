use bestprice_e2e::browser::{BrowserActions, WebDriverBrowser};
use bestprice_e2e::pages::Toolkit;
use bestprice_e2e::services::scenario::load_search_data;
use bestprice_e2e::services::{BestPriceSearch, ScenarioOutcome};
use bestprice_e2e::{Config, Result};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn report(name: &str, result: &Result<ScenarioOutcome>) -> bool {
    match result {
        Ok(outcome) => {
            tracing::info!(
                "✅ PASS {} (run_id={}, {} prices)",
                name,
                outcome.run_id,
                outcome.departure_price_count
            );
            true
        }
        Err(e) => {
            tracing::error!("❌ FAIL {}: {}", name, e);
            false
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match dotenvy::dotenv() {
        Ok(path) => eprintln!(".env loaded from: {:?}", path),
        Err(e) => eprintln!(".env not found: {}", e),
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bestprice_e2e=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("✅ Config loaded");
    tracing::info!("   Base URL: {}", config.base_url);
    tracing::info!("   WebDriver URL: {}", config.webdriver_url);
    tracing::info!("   Headless: {}", config.headless);

    let browser = match WebDriverBrowser::connect(&config).await {
        Ok(browser) => Arc::new(browser),
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("Is chromedriver running? chromedriver --port=9515");
            return ExitCode::FAILURE;
        }
    };

    let passed = run_all(browser.clone(), config.clone()).await;

    match Arc::try_unwrap(browser) {
        Ok(browser) => {
            if let Err(e) = browser.close().await {
                tracing::warn!("⚠️ Session close failed: {}", e);
            }
        }
        Err(_) => tracing::warn!("⚠️ Session still shared, not closed"),
    }

    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run_all(browser: Arc<WebDriverBrowser>, config: Arc<Config>) -> bool {
    let actions: Arc<dyn BrowserActions> = browser;
    let search = BestPriceSearch::new(Toolkit::new(actions, config.clone()));

    let mut passed = report("best price search (literal)", &search.run_literal().await);

    let data_driven = match load_search_data(&config.search_data_path) {
        Ok(data) => search.run_with_data(data).await,
        Err(e) => Err(e),
    };
    passed &= report("best price search (data-driven)", &data_driven);

    passed
}

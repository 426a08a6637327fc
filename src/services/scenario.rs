use crate::error::{E2eError, Result};
use crate::models::{SearchCriteria, SearchData};
use crate::pages::{
    AirlineTicketPage, AirlineTicketSelectors, SearchResultPage, SearchResultSelectors, Toolkit,
};
use crate::utils::date_from_today;
use std::path::Path;
use tracing::Instrument;
use uuid::Uuid;

pub const FLIGHT_SEARCH_PATH: &str = "/ve-may-bay";
pub const SORT_CHEAPEST: &str = "Giá rẻ nhất";

#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub run_id: String,
    pub departure_price_count: usize,
}

/// Hanoi to Saigon, one adult, leaving today and back in two days.
pub fn literal_criteria() -> SearchCriteria {
    SearchCriteria {
        departure_point: "Hà Nội (HAN)".to_string(),
        destination: "Hồ Chí Minh (SGN)".to_string(),
        departure_date: date_from_today(0),
        return_date: date_from_today(2),
        adults: 1,
        children: 0,
        infants: 0,
    }
}

pub fn load_search_data(path: impl AsRef<Path>) -> Result<SearchData> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| E2eError::Data(format!("{}: {}", path.display(), e)))?;
    let data: SearchData = serde_json::from_str(&content)?;

    tracing::info!("Test data loaded from {}", path.display());
    Ok(data)
}

/// Search, sort by cheapest, and check the departure prices come out ascending.
pub struct BestPriceSearch {
    toolkit: Toolkit,
    airline_ticket: AirlineTicketPage,
    search_result: SearchResultPage,
}

impl BestPriceSearch {
    pub fn new(toolkit: Toolkit) -> Self {
        Self::with_selectors(
            toolkit,
            AirlineTicketSelectors::default(),
            SearchResultSelectors::default(),
        )
    }

    pub fn with_selectors(
        toolkit: Toolkit,
        airline_ticket: AirlineTicketSelectors,
        search_result: SearchResultSelectors,
    ) -> Self {
        Self {
            airline_ticket: AirlineTicketPage::new(toolkit.clone(), airline_ticket),
            search_result: SearchResultPage::new(toolkit.clone(), search_result),
            toolkit,
        }
    }

    pub fn airline_ticket(&self) -> &AirlineTicketPage {
        &self.airline_ticket
    }

    pub fn search_result(&self) -> &SearchResultPage {
        &self.search_result
    }

    pub async fn run(
        &self,
        path: &str,
        criteria: &SearchCriteria,
        sort_option: &str,
    ) -> Result<ScenarioOutcome> {
        let run_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("best_price_search", run_id = %run_id);

        async move {
            tracing::info!("🚀 Scenario started");

            if let Err(e) = self.toolkit.maximize().await {
                tracing::warn!("⚠️ Window maximize failed: {}", e);
            }

            self.airline_ticket.open(path).await?;
            self.airline_ticket.search_flight(criteria).await?;
            self.search_result.select_sort_option(sort_option).await?;

            let prices = self.search_result.departure_prices().await?;
            if !prices.check_sorted_ascending()? {
                tracing::error!("❌ Departure prices out of order: {:?}", prices.values());
                return Err(E2eError::Assertion(format!(
                    "departure prices not sorted by '{}'",
                    sort_option
                )));
            }

            tracing::info!("✅ {} departure prices in ascending order", prices.len());

            Ok(ScenarioOutcome {
                run_id,
                departure_price_count: prices.len(),
            })
        }
        .instrument(span)
        .await
    }

    /// The hard-coded search from the original suite.
    pub async fn run_literal(&self) -> Result<ScenarioOutcome> {
        self.run(FLIGHT_SEARCH_PATH, &literal_criteria(), SORT_CHEAPEST)
            .await
    }

    /// The same search driven by externally supplied data.
    pub async fn run_with_data(&self, data: SearchData) -> Result<ScenarioOutcome> {
        let url = data.url.clone();
        let criteria = data
            .flight
            .into_criteria(date_from_today(0), date_from_today(2));

        self.run(&url, &criteria, SORT_CHEAPEST).await
    }
}

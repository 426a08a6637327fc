use crate::error::{E2eError, Result};
use crate::pages::selectors::SearchResultSelectors;
use crate::pages::toolkit::Toolkit;
use crate::services::price_order::PriceList;

/// Index of the first option label containing `option_text`.
pub fn find_option(labels: &[String], option_text: &str) -> Option<usize> {
    labels.iter().position(|label| label.contains(option_text))
}

pub struct SearchResultPage {
    toolkit: Toolkit,
    selectors: SearchResultSelectors,
}

impl SearchResultPage {
    pub fn new(toolkit: Toolkit, selectors: SearchResultSelectors) -> Self {
        Self { toolkit, selectors }
    }

    /// Opens the sort dropdown and clicks the first option whose label
    /// contains `option_text`.
    pub async fn select_sort_option(&self, option_text: &str) -> Result<()> {
        self.toolkit
            .wait_element_displayed(self.selectors.sort_dropdown, None)
            .await?;
        self.toolkit.click(self.selectors.sort_dropdown).await?;

        let labels = self.toolkit.texts(self.selectors.sort_options).await?;
        tracing::debug!("Sort options: {:?}", labels);

        let index = find_option(&labels, option_text)
            .ok_or_else(|| E2eError::SortOptionNotFound(option_text.to_string()))?;

        self.toolkit.click_nth(self.selectors.sort_options, index).await?;
        tracing::info!("✅ Sorted by '{}'", labels[index].trim());

        Ok(())
    }

    pub async fn departure_prices(&self) -> Result<PriceList> {
        self.prices(self.selectors.departure_prices).await
    }

    pub async fn return_prices(&self) -> Result<PriceList> {
        self.prices(self.selectors.return_prices).await
    }

    pub async fn are_departure_prices_sorted(&self) -> Result<bool> {
        self.departure_prices().await?.check_sorted_ascending()
    }

    pub async fn are_return_prices_sorted(&self) -> Result<bool> {
        self.return_prices().await?.check_sorted_ascending()
    }

    async fn prices(&self, selector: &str) -> Result<PriceList> {
        let texts = self.toolkit.texts(selector).await?;
        let prices = PriceList::from_texts(texts);
        tracing::info!("📊 {} prices read from {}", prices.len(), selector);
        tracing::debug!("Prices: {:?}", prices.values());
        Ok(prices)
    }
}

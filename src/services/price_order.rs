use crate::error::{E2eError, Result};
use crate::utils::normalize_price;

/// `false` as soon as some price is greater than the one after it.
/// Empty and single-price lists are sorted.
///
/// A `NaN` compares false both ways, so it never counts as an inversion.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_sorted_ascending(prices: &[f64]) -> bool {
    prices.windows(2).all(|pair| !(pair[0] > pair[1]))
}

/// Price texts scraped from a result list, with their numeric values.
#[derive(Debug, Clone, Default)]
pub struct PriceList {
    raw: Vec<String>,
    values: Vec<f64>,
}

impl PriceList {
    pub fn from_texts(raw: Vec<String>) -> Self {
        let values = raw.iter().map(|text| normalize_price(text)).collect();
        Self { raw, values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First text that did not read as a number.
    pub fn first_malformed(&self) -> Option<&str> {
        self.raw
            .iter()
            .zip(&self.values)
            .find(|(_, value)| value.is_nan())
            .map(|(text, _)| text.as_str())
    }

    pub fn is_sorted_ascending(&self) -> bool {
        is_sorted_ascending(&self.values)
    }

    /// Sortedness check that refuses to judge a list with unreadable prices.
    pub fn check_sorted_ascending(&self) -> Result<bool> {
        if let Some(text) = self.first_malformed() {
            return Err(E2eError::MalformedPrice(text.to_string()));
        }
        Ok(self.is_sorted_ascending())
    }
}

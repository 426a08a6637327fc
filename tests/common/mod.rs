//! In-memory stand-in for the bestprice.vn flight pages.
#![allow(dead_code)]

use async_trait::async_trait;
use bestprice_e2e::browser::BrowserActions;
use bestprice_e2e::config::Config;
use bestprice_e2e::error::{E2eError, Result};
use bestprice_e2e::pages::{AirlineTicketSelectors, SearchResultSelectors, Toolkit};
use bestprice_e2e::utils::normalize_price;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const CHEAPEST_LABEL: &str = "Giá rẻ nhất";
pub const EARLIEST_LABEL: &str = "Giờ cất cánh sớm nhất";

struct Counter {
    shown: u32,
    actual: u32,
    min: u32,
    reads_until_shown: u32,
}

#[derive(Default)]
struct SiteState {
    url: Option<String>,
    maximized: bool,
    fields: HashMap<String, String>,
    counters: HashMap<&'static str, Counter>,
    popover_open: bool,
    searched: bool,
    dropdown_open: bool,
    sorted_by: Option<String>,
    clicks: Vec<String>,
}

pub struct FakeBookingSite {
    form: AirlineTicketSelectors,
    results: SearchResultSelectors,
    sort_labels: Vec<String>,
    departure_prices: Vec<String>,
    return_prices: Vec<String>,
    /// Reads of a counter input that still show the old value after a click.
    display_lag: u32,
    search_button_broken: bool,
    state: Mutex<SiteState>,
}

impl FakeBookingSite {
    pub fn new(departure_prices: &[&str]) -> Self {
        let form = AirlineTicketSelectors::default();
        let mut counters = HashMap::new();
        counters.insert(form.adult.value, Counter::new(1, 1));
        counters.insert(form.child.value, Counter::new(0, 0));
        counters.insert(form.infant.value, Counter::new(0, 0));

        Self {
            form,
            results: SearchResultSelectors::default(),
            sort_labels: vec![EARLIEST_LABEL.to_string(), format!(" {} ", CHEAPEST_LABEL)],
            departure_prices: departure_prices.iter().map(|s| s.to_string()).collect(),
            return_prices: vec![],
            display_lag: 0,
            search_button_broken: false,
            state: Mutex::new(SiteState {
                counters,
                ..Default::default()
            }),
        }
    }

    pub fn with_adults(self, adults: u32) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let counter = state.counters.get_mut(self.form.adult.value).unwrap();
            counter.shown = adults;
            counter.actual = adults;
        }
        self
    }

    /// Return leg prices, served in the given order once a search ran.
    pub fn with_return_prices(mut self, prices: &[&str]) -> Self {
        self.return_prices = prices.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_display_lag(mut self, reads: u32) -> Self {
        self.display_lag = reads;
        self
    }

    pub fn with_sort_labels(mut self, labels: &[&str]) -> Self {
        self.sort_labels = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_broken_search_button(mut self) -> Self {
        self.search_button_broken = true;
        self
    }

    pub fn count(&self, value_selector: &str) -> u32 {
        self.state.lock().unwrap().counters[value_selector].actual
    }

    pub fn field(&self, selector: &str) -> Option<String> {
        self.state.lock().unwrap().fields.get(selector).cloned()
    }

    pub fn clicks_on(&self, selector: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .clicks
            .iter()
            .filter(|c| c.as_str() == selector)
            .count()
    }

    pub fn url(&self) -> Option<String> {
        self.state.lock().unwrap().url.clone()
    }

    pub fn maximized(&self) -> bool {
        self.state.lock().unwrap().maximized
    }

    pub fn searched(&self) -> bool {
        self.state.lock().unwrap().searched
    }

    pub fn sorted_by(&self) -> Option<String> {
        self.state.lock().unwrap().sorted_by.clone()
    }

    fn stepper_for(&self, selector: &str) -> Option<(&'static str, i64)> {
        for stepper in [self.form.adult, self.form.child, self.form.infant] {
            if selector == stepper.plus {
                return Some((stepper.value, 1));
            }
            if selector == stepper.minus {
                return Some((stepper.value, -1));
            }
        }
        None
    }

    fn visible_prices(&self, state: &SiteState) -> Vec<String> {
        if !state.searched {
            return vec![];
        }
        let mut prices = self.departure_prices.clone();
        if state
            .sorted_by
            .as_deref()
            .is_some_and(|l| l.contains(CHEAPEST_LABEL))
        {
            prices.sort_by(|a, b| {
                normalize_price(a)
                    .partial_cmp(&normalize_price(b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        prices
    }
}

impl Counter {
    fn new(value: u32, min: u32) -> Self {
        Self {
            shown: value,
            actual: value,
            min,
            reads_until_shown: 0,
        }
    }
}

#[async_trait]
impl BrowserActions for FakeBookingSite {
    async fn goto(&self, url: &str) -> Result<()> {
        self.state.lock().unwrap().url = Some(url.to_string());
        Ok(())
    }

    async fn maximize_window(&self) -> Result<()> {
        self.state.lock().unwrap().maximized = true;
        Ok(())
    }

    async fn is_present(&self, selector: &str) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.counters.contains_key(selector) || selector == self.form.search_button)
    }

    async fn is_displayed(&self, selector: &str) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(selector == self.results.sort_dropdown && state.searched)
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if let Some((value_selector, delta)) = self.stepper_for(selector) {
            if !state.popover_open {
                return Err(E2eError::ElementNotFound(selector.to_string()));
            }
            let lag = self.display_lag;
            let counter = state.counters.get_mut(value_selector).unwrap();
            let next = counter.actual as i64 + delta;
            if next >= counter.min as i64 && next <= 9 {
                counter.actual = next as u32;
                counter.reads_until_shown = lag;
                if lag == 0 {
                    counter.shown = counter.actual;
                }
            }
        } else if selector == self.form.passenger_popover {
            state.popover_open = true;
        } else if selector == self.form.search_button {
            if !self.search_button_broken {
                state.searched = true;
                state.popover_open = false;
            }
        } else if selector == self.results.sort_dropdown {
            if !state.searched {
                return Err(E2eError::ElementNotFound(selector.to_string()));
            }
            state.dropdown_open = true;
        } else {
            return Err(E2eError::ElementNotFound(selector.to_string()));
        }

        state.clicks.push(selector.to_string());
        Ok(())
    }

    async fn click_nth(&self, selector: &str, index: usize) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if selector != self.results.sort_options || !state.dropdown_open {
            return Err(E2eError::ElementNotFound(selector.to_string()));
        }
        let label = self
            .sort_labels
            .get(index)
            .ok_or_else(|| E2eError::ElementNotFound(format!("{} [{}]", selector, index)))?;
        state.sorted_by = Some(label.clone());
        state.dropdown_open = false;
        state.clicks.push(format!("{} [{}]", selector, index));
        Ok(())
    }

    async fn send_keys(&self, selector: &str, text: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state
            .fields
            .entry(selector.to_string())
            .or_default()
            .push_str(text);
        Ok(())
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let mut state = self.state.lock().unwrap();
        if name != "value" {
            return Ok(None);
        }
        if let Some(counter) = state.counters.get_mut(selector) {
            if counter.reads_until_shown > 0 {
                counter.reads_until_shown -= 1;
            } else {
                counter.shown = counter.actual;
            }
            return Ok(Some(counter.shown.to_string()));
        }
        Ok(state.fields.get(selector).cloned())
    }

    async fn text(&self, selector: &str) -> Result<String> {
        self.texts(selector)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| E2eError::ElementNotFound(selector.to_string()))
    }

    async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let state = self.state.lock().unwrap();
        if selector == self.results.sort_options {
            return Ok(if state.dropdown_open {
                self.sort_labels.clone()
            } else {
                vec![]
            });
        }
        if selector == self.results.departure_prices {
            return Ok(self.visible_prices(&state));
        }
        if selector == self.results.return_prices && state.searched {
            return Ok(self.return_prices.clone());
        }
        Ok(vec![])
    }

    async fn execute(&self, _script: &str, args: Vec<Value>) -> Result<Value> {
        let selector = args.first().and_then(Value::as_str).unwrap_or_default();
        let value = args.get(1).and_then(Value::as_str).unwrap_or_default();

        let known = [
            self.form.departure_point,
            self.form.destination,
            self.form.departure_date,
            self.form.return_date,
        ];
        if !known.iter().any(|k| *k == selector) {
            return Ok(Value::Bool(false));
        }

        self.state
            .lock()
            .unwrap()
            .fields
            .insert(selector.to_string(), value.to_string());
        Ok(Value::Bool(true))
    }
}

pub fn toolkit_for(site: Arc<FakeBookingSite>) -> Toolkit {
    let browser: Arc<dyn BrowserActions> = site;
    Toolkit::new(browser, Arc::new(Config::default()))
}

use crate::error::{E2eError, Result};
use crate::models::{PassengerCounter, PassengerKind, SearchCriteria};
use crate::pages::selectors::{AirlineTicketSelectors, StepperSelectors};
use crate::pages::toolkit::Toolkit;
use crate::services::stepper::{adjust_passenger_count, CounterControl};
use async_trait::async_trait;
use tokio::time::Instant;

/// The flight search form at `/ve-may-bay`.
pub struct AirlineTicketPage {
    toolkit: Toolkit,
    selectors: AirlineTicketSelectors,
}

impl AirlineTicketPage {
    pub fn new(toolkit: Toolkit, selectors: AirlineTicketSelectors) -> Self {
        Self { toolkit, selectors }
    }

    pub fn selectors(&self) -> &AirlineTicketSelectors {
        &self.selectors
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        self.toolkit.open(path).await
    }

    /// Value currently held by the passenger popover's numeric input.
    pub async fn passenger_count(&self, kind: PassengerKind) -> Result<u32> {
        read_counter(&self.toolkit, self.selectors.stepper(kind).value).await
    }

    /// Clicks the +/- buttons of one passenger kind until it shows `target`.
    /// The popover must already be open.
    pub async fn adjust_passengers(&self, kind: PassengerKind, target: u32) -> Result<()> {
        let current = self.passenger_count(kind).await?;
        let mut stepper = PassengerStepper::new(&self.toolkit, self.selectors.stepper(kind));

        adjust_passenger_count(&mut stepper, PassengerCounter::new(kind, current, target)).await
    }

    pub async fn search_flight(&self, criteria: &SearchCriteria) -> Result<()> {
        tracing::info!(
            "✈️ Searching {} -> {} ({} - {}), passengers {}/{}/{}",
            criteria.departure_point,
            criteria.destination,
            criteria.departure_date,
            criteria.return_date,
            criteria.adults,
            criteria.children,
            criteria.infants
        );

        let fields = [
            (self.selectors.departure_point, criteria.departure_point.as_str()),
            (self.selectors.destination, criteria.destination.as_str()),
            (self.selectors.departure_date, criteria.departure_date.as_str()),
            (self.selectors.return_date, criteria.return_date.as_str()),
        ];
        for (selector, value) in fields {
            self.toolkit.set_input_value_by_query_selector(selector, value).await?;
        }

        self.toolkit.click(self.selectors.passenger_popover).await?;

        for kind in PassengerKind::ALL {
            self.adjust_passengers(kind, criteria.passengers(kind)).await?;
        }

        self.toolkit.click(self.selectors.search_button).await?;
        tracing::info!("✅ Search submitted");

        Ok(())
    }
}

async fn read_counter(toolkit: &Toolkit, selector: &str) -> Result<u32> {
    let value = toolkit
        .attribute(selector, "value")
        .await?
        .ok_or_else(|| E2eError::InvalidCounter(format!("{} has no value", selector)))?;

    value
        .trim()
        .parse()
        .map_err(|_| E2eError::InvalidCounter(format!("{} = '{}'", selector, value)))
}

/// One passenger stepper in the popover.
///
/// Settling polls the bound input until it shows the expected count, for at
/// most the configured settle delay.
pub struct PassengerStepper<'a> {
    toolkit: &'a Toolkit,
    selectors: StepperSelectors,
}

impl<'a> PassengerStepper<'a> {
    pub fn new(toolkit: &'a Toolkit, selectors: StepperSelectors) -> Self {
        Self { toolkit, selectors }
    }
}

#[async_trait]
impl<'a> CounterControl for PassengerStepper<'a> {
    async fn increment(&mut self) -> Result<()> {
        self.toolkit.click(self.selectors.plus).await
    }

    async fn decrement(&mut self) -> Result<()> {
        self.toolkit.click(self.selectors.minus).await
    }

    async fn settle(&mut self, expected: u32) -> Result<()> {
        let config = self.toolkit.config();
        let deadline = Instant::now() + config.settle_delay();

        loop {
            if read_counter(self.toolkit, self.selectors.value).await? == expected {
                return Ok(());
            }
            if Instant::now() >= deadline {
                tracing::debug!(
                    "{} did not show {} within {} ms, moving on",
                    self.selectors.value,
                    expected,
                    config.settle_delay_ms
                );
                return Ok(());
            }
            tokio::time::sleep(config.poll_interval()).await;
        }
    }
}

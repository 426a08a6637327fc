use crate::error::Result;
use crate::models::PassengerCounter;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// A +/- stepper control with no way to set its value directly.
#[async_trait]
pub trait CounterControl: Send {
    async fn increment(&mut self) -> Result<()>;

    async fn decrement(&mut self) -> Result<()>;

    /// Runs after every click with the value the control should now show.
    async fn settle(&mut self, expected: u32) -> Result<()>;
}

/// Clicks the control from `current` to `target`, one unit at a time.
///
/// Only one direction ever runs. The first failed click or settle is returned
/// as-is and nothing further is clicked.
pub async fn adjust_count<C>(control: &mut C, current: u32, target: u32) -> Result<()>
where
    C: CounterControl + ?Sized,
{
    let mut current = current;

    while current < target {
        control.increment().await?;
        current += 1;
        control.settle(current).await?;
    }

    while current > target {
        control.decrement().await?;
        current -= 1;
        control.settle(current).await?;
    }

    Ok(())
}

pub async fn adjust_passenger_count<C>(control: &mut C, counter: PassengerCounter) -> Result<()>
where
    C: CounterControl + ?Sized,
{
    if counter.is_settled() {
        tracing::debug!("{} count already {}", counter.kind, counter.target);
        return Ok(());
    }

    tracing::info!(
        "Adjusting {} count: {} -> {} ({} clicks)",
        counter.kind,
        counter.current,
        counter.target,
        counter.steps()
    );

    adjust_count(control, counter.current, counter.target).await
}

/// Counter driven by two click callbacks, waiting a fixed delay after each one.
pub struct FixedDelayCounter<I, D> {
    increment: I,
    decrement: D,
    delay: Duration,
}

impl<I, D> FixedDelayCounter<I, D> {
    pub fn new(increment: I, decrement: D, delay: Duration) -> Self {
        Self {
            increment,
            decrement,
            delay,
        }
    }
}

#[async_trait]
impl<I, FI, D, FD> CounterControl for FixedDelayCounter<I, D>
where
    I: FnMut() -> FI + Send,
    FI: Future<Output = Result<()>> + Send,
    D: FnMut() -> FD + Send,
    FD: Future<Output = Result<()>> + Send,
{
    async fn increment(&mut self) -> Result<()> {
        (self.increment)().await
    }

    async fn decrement(&mut self) -> Result<()> {
        (self.decrement)().await
    }

    async fn settle(&mut self, _expected: u32) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

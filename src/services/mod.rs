pub mod price_order;
pub mod scenario;
pub mod stepper;

pub use price_order::{is_sorted_ascending, PriceList};
pub use scenario::{BestPriceSearch, ScenarioOutcome};
pub use stepper::{adjust_count, adjust_passenger_count, CounterControl, FixedDelayCounter};

pub mod airline_ticket;
pub mod search_result;
pub mod selectors;
pub mod toolkit;

pub use airline_ticket::AirlineTicketPage;
pub use search_result::SearchResultPage;
pub use selectors::{AirlineTicketSelectors, SearchResultSelectors};
pub use toolkit::Toolkit;

pub mod date;
pub mod parser;

pub use date::date_from_today;
pub use parser::{normalize_price, parse_price};

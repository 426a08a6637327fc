use chrono::{Duration, Local, NaiveDate};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Today plus `days_to_add`, as dd/mm/yyyy in local time.
pub fn date_from_today(days_to_add: i64) -> String {
    date_from(Local::now().date_naive(), days_to_add)
}

pub fn date_from(base: NaiveDate, days_to_add: i64) -> String {
    (base + Duration::days(days_to_add))
        .format(DATE_FORMAT)
        .to_string()
}

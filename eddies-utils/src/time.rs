use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, NaiveDate};

/// Current unix timestamp in seconds, as the BIGINT the store keeps.
pub fn now_unix_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| {
            i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
        })
}

/// Today's date on the local calendar, the granularity of the daily ledger.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Time-based opaque identifier. When two calls land in the same millisecond
/// the counter advances past the clock, so identifiers stay unique within a
/// process.
pub fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut assigned = now;
    let _ = LAST_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        assigned = if now > last { now } else { last + 1 };
        Some(assigned)
    });
    assigned.to_string()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use folio_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

#[derive(Clone, Copy, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}

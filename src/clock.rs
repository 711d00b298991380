// clock.rs

use chrono::{DateTime, FixedOffset, Utc};

use crate::DeviceError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub trait Clock {
    /// Monotonic milliseconds since boot.
    fn now_ms(&self) -> u64;

    /// Wall clock time, `None` until it has been synchronized.
    fn utc_now(&self) -> Option<DateTime<Utc>>;

    /// One-shot network time sync. Never retried.
    fn sync_time(&mut self) -> Result<(), DeviceError>;
}

pub fn timestamp<C: Clock>(clock: &C) -> Option<String> {
    clock
        .utc_now()
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
}

pub fn local_time(utc: DateTime<Utc>, utc_offset: i32) -> Option<DateTime<FixedOffset>> {
    FixedOffset::east_opt(utc_offset).map(|tz| utc.with_timezone(&tz))
}


// EOF

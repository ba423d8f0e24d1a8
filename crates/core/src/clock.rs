use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};

/// Source of wall-clock time for anything that depends on the time of day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the host clock, either in the host's local zone or a fixed offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { offset: None }
    }

    /// Returns `None` when the offset is outside ±24h.
    pub fn with_utc_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self { offset: Some(offset) })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// A clock pinned to `hour:00` UTC on an arbitrary fixed date.
    ///
    /// Hours past 23 are clamped to 23.
    pub fn at_hour(hour: u32) -> Self {
        let hour = hour.min(23);
        let instant = NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
            .unwrap_or_else(|| DateTime::<Utc>::default().fixed_offset());
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

/// Formats an instant like a US-English `toLocaleString`, e.g. `3/15/2024, 1:05:09 PM`.
pub fn locale_timestamp(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

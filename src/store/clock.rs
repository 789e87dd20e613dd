use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// Time zone used for results timestamps and the "today" bucket.
#[derive(Clone, Copy, Debug, Default)]
pub enum LogClock {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl LogClock {
    /// Falls back to the local zone when the offset is out of range.
    pub fn from_offset_minutes(minutes: Option<i32>) -> Self {
        minutes
            .and_then(|m| m.checked_mul(60))
            .and_then(FixedOffset::east_opt)
            .map(LogClock::Fixed)
            .unwrap_or(LogClock::Local)
    }

    pub fn now(&self) -> NaiveDateTime {
        match self {
            LogClock::Local => Local::now().naive_local(),
            LogClock::Fixed(offset) => Utc::now().with_timezone(offset).naive_local(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

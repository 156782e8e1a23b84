use chrono::{Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date range used to filter records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Builds a range from raw query values. Both bounds have to be present
    /// and valid `YYYY-MM-DD` dates; anything else yields `None` and the
    /// caller shows the full history.
    pub fn from_query(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start = NaiveDate::parse_from_str(start?.trim(), DATE_FORMAT).ok()?;
        let end = NaiveDate::parse_from_str(end?.trim(), DATE_FORMAT).ok()?;
        Some(Self::new(start, end))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The last `days` days up to and including an anchor date.
///
/// The window spans `[anchor - days, anchor]`, so a 7-day window covers
/// eight calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub days: i64,
}

impl TrailingWindow {
    pub fn new(days: i64) -> Self {
        Self { days }
    }

    pub fn ending_on(&self, anchor: NaiveDate) -> DateRange {
        DateRange::new(anchor - Duration::days(self.days), anchor)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

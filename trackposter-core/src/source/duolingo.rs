//! Duolingo: daily XP from the user calendar.

use chrono::{DateTime, FixedOffset};

use crate::{
    foundation::{
        core::YearRange,
        error::{PosterError, PosterResult},
    },
    source::{SourceAdapter, SourceData, collect_daily},
    stats::classify::SpecialNumbers,
    track::model::SourceKind,
};

/// Duolingo options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuolingoConfig {
    /// Offset applied to the calendar's UTC timestamps before taking the day.
    pub utc_offset_minutes: i32,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct Payload {
    #[serde(default)]
    calendar: Vec<CalendarEntry>,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct CalendarEntry {
    /// Milliseconds since the Unix epoch.
    datetime: i64,
    improvement: f64,
}

/// Daily XP from the Duolingo user calendar.
#[derive(Clone, Debug)]
pub struct DuolingoSource {
    offset: FixedOffset,
    calendar: Vec<CalendarEntry>,
}

impl DuolingoSource {
    /// Parse the service's JSON document.
    pub fn from_json(config: DuolingoConfig, payload: &str) -> PosterResult<Self> {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes.saturating_mul(60))
            .ok_or_else(|| {
                PosterError::validation(format!(
                    "duolingo utc offset {} minutes is out of range",
                    config.utc_offset_minutes
                ))
            })?;
        let payload: Payload = serde_json::from_str(payload)?;
        Ok(Self {
            offset,
            calendar: payload.calendar,
        })
    }
}

impl SourceAdapter for DuolingoSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Duolingo
    }

    fn default_special_numbers(&self) -> SpecialNumbers {
        SpecialNumbers::new(50.0, 100.0)
    }

    #[tracing::instrument(skip(self), fields(records = self.calendar.len()))]
    fn get_all_track_data(&self, range: YearRange) -> PosterResult<SourceData> {
        let records = self.calendar.iter().map(|e| {
            let day = DateTime::from_timestamp_millis(e.datetime)
                .map(|dt| dt.with_timezone(&self.offset).date_naive());
            (day, e.improvement)
        });
        Ok(collect_daily(self.kind(), range, records))
    }
}

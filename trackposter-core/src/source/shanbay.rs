//! Shanbay: vocabulary check-in days.

use crate::{
    foundation::{core::YearRange, error::PosterResult},
    source::{SourceAdapter, SourceData, collect_daily, parse_day},
    stats::classify::SpecialNumbers,
    track::model::SourceKind,
};

/// Shanbay needs no options beyond the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShanbayConfig;

#[derive(Clone, Debug, serde::Deserialize)]
struct Payload {
    #[serde(default)]
    logs: Vec<CheckinLog>,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct CheckinLog {
    date: String,
}

/// Check-in days; every check-in counts as one day.
#[derive(Clone, Debug)]
pub struct ShanbaySource {
    logs: Vec<CheckinLog>,
}

impl ShanbaySource {
    /// Parse the service's JSON document.
    pub fn from_json(_config: ShanbayConfig, payload: &str) -> PosterResult<Self> {
        let payload: Payload = serde_json::from_str(payload)?;
        Ok(Self { logs: payload.logs })
    }
}

impl SourceAdapter for ShanbaySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Shanbay
    }

    fn default_special_numbers(&self) -> SpecialNumbers {
        SpecialNumbers::default()
    }

    #[tracing::instrument(skip(self), fields(records = self.logs.len()))]
    fn get_all_track_data(&self, range: YearRange) -> PosterResult<SourceData> {
        // Duplicate check-ins on one day still count once.
        let mut data = collect_daily(
            self.kind(),
            range,
            self.logs.iter().map(|l| (parse_day(&l.date), 1.0)),
        );
        for t in &mut data.tracks {
            t.value = 1.0;
        }
        Ok(data)
    }
}

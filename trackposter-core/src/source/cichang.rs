//! Cichang: words learned per day.

use crate::{
    foundation::{core::YearRange, error::PosterResult},
    source::{SourceAdapter, SourceData, collect_daily, parse_day},
    stats::classify::SpecialNumbers,
    track::model::SourceKind,
};

/// Cichang needs no options beyond the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CichangConfig;

#[derive(Clone, Debug, serde::Deserialize)]
struct Payload {
    #[serde(default)]
    data: Vec<StudyDay>,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct StudyDay {
    date: String,
    words: f64,
}

/// Words learned per day.
#[derive(Clone, Debug)]
pub struct CichangSource {
    days: Vec<StudyDay>,
}

impl CichangSource {
    /// Parse the service's JSON document.
    pub fn from_json(_config: CichangConfig, payload: &str) -> PosterResult<Self> {
        let payload: Payload = serde_json::from_str(payload)?;
        Ok(Self { days: payload.data })
    }
}

impl SourceAdapter for CichangSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Cichang
    }

    fn default_special_numbers(&self) -> SpecialNumbers {
        SpecialNumbers::new(100.0, 200.0)
    }

    #[tracing::instrument(skip(self), fields(records = self.days.len()))]
    fn get_all_track_data(&self, range: YearRange) -> PosterResult<SourceData> {
        let records = self.days.iter().map(|d| (parse_day(&d.date), d.words));
        Ok(collect_daily(self.kind(), range, records))
    }
}

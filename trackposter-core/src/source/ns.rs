//! Nintendo Switch: play minutes per day.

use crate::{
    foundation::{core::YearRange, error::PosterResult},
    source::{SourceAdapter, SourceData, collect_daily, parse_day},
    stats::classify::SpecialNumbers,
    track::model::SourceKind,
};

/// Nintendo Switch needs no options beyond the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NsConfig;

#[derive(Clone, Debug, serde::Deserialize)]
struct Payload {
    #[serde(default)]
    items: Vec<DailySummary>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailySummary {
    date: String,
    /// Seconds.
    playing_time: f64,
}

/// Play minutes per day from the parental-controls daily summaries.
#[derive(Clone, Debug)]
pub struct NsSource {
    items: Vec<DailySummary>,
}

impl NsSource {
    /// Parse the service's JSON document.
    pub fn from_json(_config: NsConfig, payload: &str) -> PosterResult<Self> {
        let payload: Payload = serde_json::from_str(payload)?;
        Ok(Self {
            items: payload.items,
        })
    }
}

impl SourceAdapter for NsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Ns
    }

    fn default_special_numbers(&self) -> SpecialNumbers {
        SpecialNumbers::new(60.0, 120.0)
    }

    #[tracing::instrument(skip(self), fields(records = self.items.len()))]
    fn get_all_track_data(&self, range: YearRange) -> PosterResult<SourceData> {
        let records = self
            .items
            .iter()
            .map(|i| (parse_day(&i.date), i.playing_time / 60.0));
        Ok(collect_daily(self.kind(), range, records))
    }
}

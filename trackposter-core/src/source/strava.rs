//! Strava: daily distance from the activity list.

use crate::{
    foundation::{core::YearRange, error::PosterResult},
    source::{SourceAdapter, SourceData, collect_daily, parse_day},
    stats::classify::SpecialNumbers,
    track::model::SourceKind,
};

/// Strava options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StravaConfig {
    /// Keep only activities of this type (`Run`, `Ride`, ...); case-insensitive.
    pub sport: Option<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct Activity {
    start_date_local: String,
    /// Meters.
    distance: f64,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Daily distance in kilometers from the Strava activity list.
#[derive(Clone, Debug)]
pub struct StravaSource {
    sport: Option<String>,
    activities: Vec<Activity>,
}

impl StravaSource {
    /// Parse the service's JSON document.
    pub fn from_json(config: StravaConfig, payload: &str) -> PosterResult<Self> {
        let activities: Vec<Activity> = serde_json::from_str(payload)?;
        Ok(Self {
            sport: config.sport.filter(|s| !s.trim().is_empty()),
            activities,
        })
    }

    fn matches_sport(&self, a: &Activity) -> bool {
        match (&self.sport, &a.kind) {
            (None, _) => true,
            (Some(want), Some(got)) => want.trim().eq_ignore_ascii_case(got.trim()),
            (Some(_), None) => false,
        }
    }
}

impl SourceAdapter for StravaSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Strava
    }

    fn default_special_numbers(&self) -> SpecialNumbers {
        SpecialNumbers::new(10.0, 20.0)
    }

    #[tracing::instrument(skip(self), fields(records = self.activities.len()))]
    fn get_all_track_data(&self, range: YearRange) -> PosterResult<SourceData> {
        let records = self
            .activities
            .iter()
            .filter(|a| self.matches_sport(a))
            .map(|a| (parse_day(&a.start_date_local), a.distance / 1000.0));
        Ok(collect_daily(self.kind(), range, records))
    }
}

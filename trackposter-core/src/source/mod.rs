//! Source adapters: turn one service's saved payload into [`Track`]s.
//!
//! Fetching the payload (HTTP, auth) happens outside this crate. Each adapter
//! parses the JSON document its service returns, filters by year and supplies
//! its domain defaults for the special numbers.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{
    foundation::{
        core::YearRange,
        error::{PosterError, PosterResult},
    },
    stats::classify::SpecialNumbers,
    track::model::{SourceKind, Track},
};

pub mod cichang;
pub mod duolingo;
pub mod ns;
pub mod shanbay;
pub mod strava;

pub use cichang::{CichangConfig, CichangSource};
pub use duolingo::{DuolingoConfig, DuolingoSource};
pub use ns::{NsConfig, NsSource};
pub use shanbay::{ShanbayConfig, ShanbaySource};
pub use strava::{StravaConfig, StravaSource};

/// Fully materialized adapter output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceData {
    /// One track per active day, inside the requested range.
    pub tracks: Vec<Track>,
    /// Distinct years of `tracks`, ascending.
    pub years: Vec<i32>,
}

/// Contract every activity source fulfils.
pub trait SourceAdapter {
    /// Which source this adapter reads.
    fn kind(&self) -> SourceKind;

    /// Thresholds used when the user does not override them.
    fn default_special_numbers(&self) -> SpecialNumbers;

    /// Tracks and years inside `range`.
    fn get_all_track_data(&self, range: YearRange) -> PosterResult<SourceData>;
}

/// Per-source options, chosen once at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceConfig {
    /// Duolingo options.
    Duolingo(DuolingoConfig),
    /// Shanbay options.
    Shanbay(ShanbayConfig),
    /// Strava options.
    Strava(StravaConfig),
    /// Cichang options.
    Cichang(CichangConfig),
    /// Nintendo Switch options.
    Ns(NsConfig),
}

impl SourceConfig {
    /// Config with default options for `kind`.
    pub fn default_for(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Duolingo => Self::Duolingo(DuolingoConfig::default()),
            SourceKind::Shanbay => Self::Shanbay(ShanbayConfig),
            SourceKind::Strava => Self::Strava(StravaConfig::default()),
            SourceKind::Cichang => Self::Cichang(CichangConfig),
            SourceKind::Ns => Self::Ns(NsConfig),
        }
    }

    /// Source these options belong to.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Duolingo(_) => SourceKind::Duolingo,
            Self::Shanbay(_) => SourceKind::Shanbay,
            Self::Strava(_) => SourceKind::Strava,
            Self::Cichang(_) => SourceKind::Cichang,
            Self::Ns(_) => SourceKind::Ns,
        }
    }
}

/// A parsed source, ready to hand tracks to the poster.
#[derive(Clone, Debug)]
pub enum Source {
    /// Parsed Duolingo calendar.
    Duolingo(DuolingoSource),
    /// Parsed Shanbay check-ins.
    Shanbay(ShanbaySource),
    /// Parsed Strava activities.
    Strava(StravaSource),
    /// Parsed Cichang word counts.
    Cichang(CichangSource),
    /// Parsed Nintendo Switch summaries.
    Ns(NsSource),
}

impl Source {
    /// Parse `payload` (the service's JSON document) with the adapter `config` selects.
    ///
    /// A payload that does not match the service's document shape becomes a
    /// [`PosterError::Payload`] naming the source.
    pub fn from_json(config: SourceConfig, payload: &str) -> PosterResult<Self> {
        let kind = config.kind();
        let parsed = match config {
            SourceConfig::Duolingo(c) => DuolingoSource::from_json(c, payload).map(Self::Duolingo),
            SourceConfig::Shanbay(c) => ShanbaySource::from_json(c, payload).map(Self::Shanbay),
            SourceConfig::Strava(c) => StravaSource::from_json(c, payload).map(Self::Strava),
            SourceConfig::Cichang(c) => CichangSource::from_json(c, payload).map(Self::Cichang),
            SourceConfig::Ns(c) => NsSource::from_json(c, payload).map(Self::Ns),
        };
        parsed.map_err(|err| match err {
            PosterError::Serde(msg) => PosterError::payload(format!("{kind}: {msg}")),
            other => other,
        })
    }

    fn adapter(&self) -> &dyn SourceAdapter {
        match self {
            Self::Duolingo(s) => s,
            Self::Shanbay(s) => s,
            Self::Strava(s) => s,
            Self::Cichang(s) => s,
            Self::Ns(s) => s,
        }
    }
}

impl SourceAdapter for Source {
    fn kind(&self) -> SourceKind {
        self.adapter().kind()
    }

    fn default_special_numbers(&self) -> SpecialNumbers {
        self.adapter().default_special_numbers()
    }

    fn get_all_track_data(&self, range: YearRange) -> PosterResult<SourceData> {
        self.adapter().get_all_track_data(range)
    }
}

/// Parse a `YYYY-MM-DD` prefix; longer timestamps are accepted and truncated.
pub(crate) fn parse_day(s: &str) -> Option<NaiveDate> {
    let day = s.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Sum raw `(date, value)` records per day and keep those inside `range`.
///
/// Records without a usable date or with a negative/non-finite value are skipped.
pub(crate) fn collect_daily(
    kind: SourceKind,
    range: YearRange,
    records: impl IntoIterator<Item = (Option<NaiveDate>, f64)>,
) -> SourceData {
    let mut per_day = BTreeMap::<NaiveDate, f64>::new();
    let mut skipped = 0usize;
    for (date, value) in records {
        let Some(date) = date else {
            skipped += 1;
            continue;
        };
        if !value.is_finite() || value < 0.0 {
            skipped += 1;
            continue;
        }
        if !range.contains(date.year()) {
            continue;
        }
        *per_day.entry(date).or_insert(0.0) += value;
    }
    if skipped > 0 {
        tracing::debug!(source = %kind, skipped, "skipped malformed source records");
    }

    let tracks: Vec<Track> = per_day
        .into_iter()
        .map(|(date, value)| Track::new(date, value, kind))
        .collect();
    let mut years: Vec<i32> = tracks.iter().map(Track::year).collect();
    years.dedup();
    SourceData { tracks, years }
}

#[cfg(test)]
#[path = "../../tests/unit/source/mod.rs"]
mod tests;

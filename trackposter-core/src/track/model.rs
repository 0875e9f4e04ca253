use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::foundation::error::{PosterError, PosterResult};

/// Activity source that produced a track.
///
/// The set is closed: each variant has exactly one adapter in [`crate::source`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Duolingo daily XP.
    Duolingo,
    /// Shanbay vocabulary check-ins.
    Shanbay,
    /// Strava activity distance.
    Strava,
    /// Cichang (Hujiang) words learned.
    Cichang,
    /// Nintendo Switch play time.
    Ns,
}

impl SourceKind {
    /// Every supported source, in CLI listing order.
    pub const ALL: [SourceKind; 5] = [
        Self::Duolingo,
        Self::Shanbay,
        Self::Strava,
        Self::Cichang,
        Self::Ns,
    ];

    /// Stable lowercase name, also used as the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            Self::Duolingo => "duolingo",
            Self::Shanbay => "shanbay",
            Self::Strava => "strava",
            Self::Cichang => "cichang",
            Self::Ns => "ns",
        }
    }

    /// Unit label attached to track values of this source.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Duolingo => "XP",
            Self::Shanbay => "day",
            Self::Strava => "km",
            Self::Cichang => "words",
            Self::Ns => "mins",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names = Self::ALL.map(SourceKind::name).join("\", \"");
                PosterError::validation(format!(
                    "unknown poster type \"{s}\" (available: \"{names}\")"
                ))
            })
    }
}

/// One normalized activity record.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Calendar day the activity happened on.
    pub date: NaiveDate,
    /// Magnitude in the source's unit.
    pub value: f64,
    /// Adapter that produced this track.
    pub source: SourceKind,
}

impl Track {
    /// Track from an already validated date.
    pub fn new(date: NaiveDate, value: f64, source: SourceKind) -> Self {
        Self {
            date,
            value,
            source,
        }
    }

    /// Build from raw `(year, month, day)` parts, rejecting impossible dates.
    pub fn from_ymd(
        year: i32,
        month: u32,
        day: u32,
        value: f64,
        source: SourceKind,
    ) -> PosterResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            PosterError::validation(format!("invalid date {year:04}-{month:02}-{day:02}"))
        })?;
        Ok(Self::new(date, value, source))
    }

    /// Calendar year of `date`.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Finite and non-negative.
    pub fn has_valid_value(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}

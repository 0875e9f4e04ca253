use std::str::FromStr;

use crate::foundation::error::{PosterError, PosterResult};

pub use kurbo::{Point, Rect};

/// Inclusive year bounds handed to a source adapter.
///
/// `None` on either side means unbounded on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct YearRange {
    /// First accepted year.
    pub from: Option<i32>,
    /// Last accepted year.
    pub to: Option<i32>,
}

impl YearRange {
    /// Range accepting every year.
    pub fn all() -> Self {
        Self::default()
    }

    /// Range accepting exactly one year.
    pub fn single(year: i32) -> Self {
        Self {
            from: Some(year),
            to: Some(year),
        }
    }

    /// Inclusive range `from..=to`.
    pub fn new(from: i32, to: i32) -> PosterResult<Self> {
        if from > to {
            return Err(PosterError::validation(format!(
                "year range start {from} must be <= end {to}"
            )));
        }
        Ok(Self {
            from: Some(from),
            to: Some(to),
        })
    }

    /// Whether `year` lies inside both bounds.
    pub fn contains(self, year: i32) -> bool {
        self.from.is_none_or(|f| year >= f) && self.to.is_none_or(|t| year <= t)
    }
}

/// User-facing year filter: `"NUM"`, `"NUM-NUM"` or `"all"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearFilter {
    /// Every year present in the source.
    All,
    /// One calendar year.
    Single(i32),
    /// Inclusive span of years.
    Span(i32, i32),
}

impl YearFilter {
    /// Resolve into the bounds handed to source adapters.
    pub fn range(self) -> YearRange {
        match self {
            Self::All => YearRange::all(),
            Self::Single(y) => YearRange::single(y),
            Self::Span(from, to) => YearRange {
                from: Some(from),
                to: Some(to),
            },
        }
    }
}

impl FromStr for YearFilter {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        fn year(part: &str, whole: &str) -> PosterResult<i32> {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PosterError::validation(format!(
                    "invalid year filter \"{whole}\": expected \"NUM\", \"NUM-NUM\" or \"all\""
                )));
            }
            part.parse::<i32>().map_err(|_| {
                PosterError::validation(format!("year out of range in filter \"{whole}\""))
            })
        }

        match s.split_once('-') {
            None => Ok(Self::Single(year(s, s)?)),
            Some((a, b)) => {
                let from = year(a, s)?;
                let to = year(b, s)?;
                YearRange::new(from, to)?;
                Ok(Self::Span(from, to))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

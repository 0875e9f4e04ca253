use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::{stats::summary::ValueRange, track::model::Track};

/// Normalized track collection plus the years it covers.
///
/// Only tracks that pass validation and fall inside the caller's year set are
/// kept, so `years()` always equals the distinct years of stored tracks.
#[derive(Clone, Debug, Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
    years: BTreeSet<i32>,
}

impl TrackStore {
    /// Store with no tracks and no years.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored tracks and year set.
    ///
    /// Tracks outside `years` or with a negative/non-finite value are dropped.
    /// Empty input leaves an empty store.
    pub fn set_tracks(&mut self, tracks: Vec<Track>, years: &[i32]) {
        let allowed: BTreeSet<i32> = years.iter().copied().collect();
        let mut kept = Vec::with_capacity(tracks.len());
        let mut dropped = 0usize;
        for track in tracks {
            if !track.has_valid_value() || !allowed.contains(&track.year()) {
                dropped += 1;
                continue;
            }
            kept.push(track);
        }
        if dropped > 0 {
            tracing::debug!(dropped, "dropped tracks outside year set or with invalid values");
        }

        self.years = kept.iter().map(Track::year).collect();
        self.tracks = kept;
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    /// Number of distinct years.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// No tracks stored.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Every stored track, in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The year bucket: every stored track dated in `year`.
    pub fn tracks_for_year(&self, year: i32) -> Vec<Track> {
        self.tracks
            .iter()
            .filter(|t| t.year() == year)
            .copied()
            .collect()
    }

    /// Per-day sums for `year`. Several records on one day collapse into one value.
    pub fn daily_values(&self, year: i32) -> BTreeMap<NaiveDate, f64> {
        let mut out = BTreeMap::new();
        for t in self.tracks_for_year(year) {
            *out.entry(t.date).or_insert(0.0) += t.value;
        }
        out
    }

    /// Sum of all values in `year`.
    pub fn total_for_year(&self, year: i32) -> f64 {
        self.tracks_for_year(year).iter().map(|t| t.value).sum()
    }

    /// Min/max of per-day sums across all stored years.
    pub fn value_range(&self) -> Option<ValueRange> {
        let mut range: Option<ValueRange> = None;
        for year in &self.years {
            for v in self.daily_values(*year).into_values() {
                range = Some(match range {
                    None => ValueRange::new(v, v),
                    Some(r) => r.extend(v),
                });
            }
        }
        range
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/store.rs"]
mod tests;

use super::*;
use crate::track::model::SourceKind;

fn track(y: i32, m: u32, d: u32, value: f64) -> Track {
    Track::from_ymd(y, m, d, value, SourceKind::Strava).unwrap()
}

fn sample() -> Vec<Track> {
    vec![
        track(2020, 12, 31, 3.0),
        track(2021, 1, 1, 10.0),
        track(2021, 6, 1, 60.0),
        track(2021, 6, 1, 5.0),
        track(2022, 1, 1, 5.0),
    ]
}

#[test]
fn tracks_for_year_returns_exact_subset() {
    let mut store = TrackStore::new();
    store.set_tracks(sample(), &[2020, 2021, 2022]);

    for year in [2020, 2021, 2022] {
        let got = store.tracks_for_year(year);
        let expected: Vec<Track> = sample().into_iter().filter(|t| t.year() == year).collect();
        assert_eq!(got.len(), expected.len());
        assert!(got.iter().all(|t| t.year() == year));
        for t in &expected {
            assert!(got.contains(t));
        }
    }
    assert!(store.tracks_for_year(2019).is_empty());
}

#[test]
fn out_of_range_tracks_never_enter_store() {
    let mut store = TrackStore::new();
    store.set_tracks(sample(), &[2021]);
    assert_eq!(store.years(), vec![2021]);
    assert_eq!(store.tracks().len(), 3);
    assert!(store.tracks_for_year(2022).is_empty());
}

#[test]
fn years_are_those_present_not_those_requested() {
    let mut store = TrackStore::new();
    store.set_tracks(vec![track(2021, 3, 3, 1.0)], &[2019, 2020, 2021]);
    assert_eq!(store.years(), vec![2021]);
    assert_eq!(store.year_count(), 1);
}

#[test]
fn invalid_values_are_dropped() {
    let mut store = TrackStore::new();
    store.set_tracks(
        vec![
            track(2021, 1, 1, -1.0),
            track(2021, 1, 2, f64::NAN),
            track(2021, 1, 3, f64::INFINITY),
            track(2022, 1, 4, 0.0),
        ],
        &[2021, 2022],
    );
    assert_eq!(store.tracks().len(), 1);
    assert_eq!(store.years(), vec![2022]);
}

#[test]
fn empty_input_gives_zero_years() {
    let mut store = TrackStore::new();
    store.set_tracks(sample(), &[2021]);
    store.set_tracks(Vec::new(), &[]);
    assert!(store.is_empty());
    assert_eq!(store.year_count(), 0);
    assert!(store.value_range().is_none());
}

#[test]
fn daily_values_sum_same_day_records() {
    let mut store = TrackStore::new();
    store.set_tracks(sample(), &[2020, 2021, 2022]);
    let days = store.daily_values(2021);
    assert_eq!(days.len(), 2);
    assert_eq!(days[&NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()], 65.0);
    assert_eq!(store.total_for_year(2021), 75.0);

    let range = store.value_range().unwrap();
    assert_eq!(range.min, 3.0);
    assert_eq!(range.max, 65.0);
}

#[test]
fn daily_values_and_totals_follow_the_year_bucket() {
    let mut store = TrackStore::new();
    store.set_tracks(sample(), &[2020, 2021, 2022]);

    for year in store.years() {
        let bucket: f64 = store.tracks_for_year(year).iter().map(|t| t.value).sum();
        let daily: f64 = store.daily_values(year).values().sum();
        assert_eq!(daily, bucket);
        assert_eq!(store.total_for_year(year), bucket);
    }
    let june = store.daily_values(2021);
    assert_eq!(june.len(), 2);
    assert_eq!(june[&NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()], 65.0);
}

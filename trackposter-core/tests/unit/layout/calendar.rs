use super::*;
use crate::{
    config::poster::PosterConfigBuilder,
    stats::classify::{SpecialNumbers, SpecialOverride},
    track::model::{SourceKind, Track},
};

fn config(special1: f64) -> PosterConfig {
    PosterConfigBuilder::new()
        .special_numbers(SpecialOverride::Value(special1), SpecialOverride::Disabled)
        .build(SourceKind::Strava, SpecialNumbers::default())
        .unwrap()
}

fn store(tracks: &[(i32, u32, u32, f64)]) -> TrackStore {
    let tracks: Vec<Track> = tracks
        .iter()
        .map(|&(y, m, d, v)| Track::from_ymd(y, m, d, v, SourceKind::Strava).unwrap())
        .collect();
    let mut years: Vec<i32> = tracks.iter().map(Track::year).collect();
    years.dedup();
    let mut s = TrackStore::new();
    s.set_tracks(tracks, &years);
    s
}

#[test]
fn height_follows_year_count() {
    assert_eq!(poster_height(0), 55.0);
    assert_eq!(poster_height(1), 98.0);
    assert_eq!(poster_height(5), 270.0);
}

#[test]
fn zero_years_gives_header_only_layout() {
    let layout = layout_poster(&TrackStore::new(), &config(50.0));
    assert!(layout.rows.is_empty());
    assert_eq!(layout.height, BASE_OFFSET);
    assert_eq!(layout.width, POSTER_WIDTH);
}

#[test]
fn rows_are_newest_first_and_spaced_by_row_height() {
    let s = store(&[(2021, 1, 1, 10.0), (2022, 1, 1, 5.0)]);
    let layout = layout_poster(&s, &config(50.0));
    let years: Vec<i32> = layout.rows.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2022, 2021]);
    assert_eq!(layout.rows[0].origin, Point::new(10.0, 30.0));
    assert_eq!(layout.rows[1].origin, Point::new(10.0, 73.0));
    assert_eq!(layout.height, 141.0);
}

#[test]
fn grid_starts_on_monday_and_covers_the_year() {
    // 2021-01-01 is a Friday: four leading days from 2020.
    let s = store(&[(2021, 1, 1, 10.0)]);
    let layout = layout_poster(&s, &config(50.0));
    let row = &layout.rows[0];

    let first = &row.cells[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2020, 12, 28).unwrap());
    assert_eq!(first.mark, CellMark::Empty);
    assert_eq!(first.rect.x0, 10.0);
    assert_eq!(first.rect.y0, 30.0 + 20.0 + 3.5);
    assert!((first.rect.width() - 2.6).abs() < 1e-9);

    assert_eq!(row.cells.len(), 4 + 365);
    let last = row.cells.last().unwrap();
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());

    // Friday is the fifth weekday row of the first column.
    let jan1 = &row.cells[4];
    assert_eq!(jan1.rect.x0, 10.0);
    assert_eq!(jan1.rect.y0, 30.0 + 20.0 + 3.5 * 5.0);
}

#[test]
fn leap_year_starting_monday_has_no_leading_days() {
    // 2024-01-01 is a Monday.
    let s = store(&[(2024, 2, 29, 1.0)]);
    let layout = layout_poster(&s, &config(0.0));
    let row = &layout.rows[0];
    assert_eq!(row.cells[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(row.cells.len(), 366);
    assert_eq!(row.marked().count(), 1);
}

#[test]
fn marks_carry_tier_and_totals_use_unit() {
    let s = store(&[(2021, 1, 1, 10.0), (2021, 6, 1, 60.5), (2021, 6, 1, 0.25)]);
    let row = layout_poster(&s, &config(50.0)).rows.remove(0);
    let marks: Vec<_> = row.marked().map(|c| (c.date, c.mark)).collect();
    assert_eq!(marks.len(), 2);
    assert_eq!(
        marks[1].1,
        CellMark::Track {
            value: 60.75,
            tier: Tier::Special
        }
    );
    assert!(matches!(marks[0].1, CellMark::Track { tier: Tier::Normal, .. }));
    assert_eq!(row.total_label, "70 km");
    assert_eq!(row.total_origin, Point::new(175.0, 32.0));
    assert_eq!(row.month_labels.len(), 12);
    assert_eq!(row.month_labels[11], ("Dec", Point::new(10.0 + 15.5 * 11.0, 44.0)));

    let jun1 = row.marked().nth(1).unwrap();
    assert_eq!(jun1.caption("km"), "2021-06-01 60.8 km");
}

fn store_at(date: NaiveDate) -> TrackStore {
    let mut s = TrackStore::new();
    s.set_tracks(vec![Track::new(date, 3.0, SourceKind::Strava)], &[date.year()]);
    s
}

#[test]
fn last_representable_year_ends_the_grid_without_overflow() {
    let s = store_at(NaiveDate::MAX);
    let layout = layout_poster(&s, &config(0.0));
    let row = &layout.rows[0];
    assert_eq!(row.year, NaiveDate::MAX.year());
    assert_eq!(row.cells.last().unwrap().date, NaiveDate::MAX);
    assert_eq!(row.marked().count(), 1);
}

#[test]
fn first_representable_year_skips_unrepresentable_leading_days() {
    let s = store_at(NaiveDate::MIN);
    let layout = layout_poster(&s, &config(0.0));
    let row = &layout.rows[0];
    let first_marked = row.marked().next().unwrap();
    assert_eq!(first_marked.date, NaiveDate::MIN);
    let lead = f64::from(NaiveDate::MIN.weekday().num_days_from_monday());
    assert_eq!(first_marked.rect.y0, 30.0 + 20.0 + 3.5 * (lead + 1.0));
    assert!(row.cells.iter().all(|c| c.date.year() == NaiveDate::MIN.year()));
}

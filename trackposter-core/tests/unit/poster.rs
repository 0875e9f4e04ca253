use super::*;
use crate::{
    config::poster::PosterConfigBuilder,
    stats::classify::{SpecialNumbers, SpecialOverride},
    track::model::SourceKind,
};

fn config(kind: SourceKind) -> PosterConfig {
    PosterConfigBuilder::new()
        .special_numbers(SpecialOverride::Value(50.0), SpecialOverride::Value(0.0))
        .build(kind, SpecialNumbers::default())
        .unwrap()
}

#[test]
fn end_to_end_three_tracks() {
    let tracks = vec![
        Track::from_ymd(2021, 1, 1, 10.0, SourceKind::Strava).unwrap(),
        Track::from_ymd(2021, 6, 1, 60.0, SourceKind::Strava).unwrap(),
        Track::from_ymd(2022, 1, 1, 5.0, SourceKind::Strava).unwrap(),
    ];
    let mut poster = Poster::new(config(SourceKind::Strava));
    poster.set_tracks(tracks.clone(), &[2021, 2022]);

    assert_eq!(poster.years(), vec![2021, 2022]);
    assert_eq!(poster.classify(&tracks[0]), Tier::Normal);
    assert_eq!(poster.classify(&tracks[1]), Tier::Special);
    assert_eq!(poster.classify(&tracks[2]), Tier::Normal);
    assert_eq!(poster.height(), 141.0);
    assert_eq!(poster.layout().height, 141.0);
}

#[test]
fn zero_tracks_render_background_and_title() {
    let mut poster = Poster::new(config(SourceKind::Ns));
    poster.set_tracks(Vec::new(), &[]);
    assert_eq!(poster.height(), 55.0);

    let svg = poster.render_svg();
    assert_eq!(svg.matches("<rect").count(), 1);
    assert_eq!(svg.matches("<text").count(), 1);
}

#[test]
fn file_name_comes_from_source_kind() {
    let poster = Poster::new(config(SourceKind::Duolingo));
    assert_eq!(poster.file_name(OutputFormat::Svg), "duolingo.svg");
    assert_eq!(poster.file_name(OutputFormat::Png), "duolingo.png");
}

#[test]
fn write_creates_single_svg_artifact() {
    let dir = std::path::PathBuf::from("target").join("poster_write_unit");
    let _ = std::fs::remove_dir_all(&dir);

    let mut poster = Poster::new(config(SourceKind::Strava));
    poster.set_tracks(
        vec![Track::from_ymd(2021, 3, 3, 12.0, SourceKind::Strava).unwrap()],
        &[2021],
    );
    let path = poster.write(&dir, OutputFormat::Svg).unwrap();
    assert_eq!(path, dir.join("strava.svg"));

    let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("<title>2021-03-03 12 km</title>"));
}

#[test]
fn png_of_many_years_fits_the_pixmap_limit() {
    let tracks: Vec<Track> = (2000..2026)
        .map(|y| Track::from_ymd(y, 5, 1, 8.0, SourceKind::Strava).unwrap())
        .collect();
    let years: Vec<i32> = (2000..2026).collect();
    let mut poster = Poster::new(config(SourceKind::Strava));
    poster.set_tracks(tracks, &years);
    assert_eq!(poster.years().len(), 26);

    let png = poster.render(OutputFormat::Png).unwrap();
    let (w, h) = image::ImageReader::new(std::io::Cursor::new(&png))
        .with_guessed_format()
        .unwrap()
        .into_dimensions()
        .unwrap();
    assert!(h <= crate::render::raster::MAX_RASTER_DIM, "{w}x{h}");
    assert!(h > w);
}

#[test]
fn svg_renders_track_in_last_representable_year() {
    let date = chrono::NaiveDate::MAX;
    let mut poster = Poster::new(config(SourceKind::Duolingo));
    poster.set_tracks(
        vec![Track::new(date, 120.0, SourceKind::Duolingo)],
        &[chrono::Datelike::year(&date)],
    );
    let svg = poster.render_svg();
    assert!(svg.contains(&format!("<title>{date} 120 XP</title>")));
}

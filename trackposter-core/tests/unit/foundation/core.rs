use super::*;

#[test]
fn year_filter_parses_all_forms() {
    assert_eq!("all".parse::<YearFilter>().unwrap(), YearFilter::All);
    assert_eq!("2021".parse::<YearFilter>().unwrap(), YearFilter::Single(2021));
    assert_eq!(
        "2019-2021".parse::<YearFilter>().unwrap(),
        YearFilter::Span(2019, 2021)
    );
    assert_eq!(
        " 2019 - 2021 ".parse::<YearFilter>().unwrap(),
        YearFilter::Span(2019, 2021)
    );
}

#[test]
fn year_filter_rejects_malformed_text() {
    for bad in ["", "twenty", "2021-", "-2021", "2021-2022-2023", "20x1", "2022-2021"] {
        let err = bad.parse::<YearFilter>().unwrap_err();
        assert!(matches!(err, PosterError::Validation(_)), "{bad}");
    }
}

#[test]
fn year_range_contains_boundaries() {
    let r = YearFilter::Span(2019, 2021).range();
    assert!(!r.contains(2018));
    assert!(r.contains(2019));
    assert!(r.contains(2021));
    assert!(!r.contains(2022));

    assert!(YearRange::all().contains(1900));
    assert!(YearRange::single(2020).contains(2020));
    assert!(!YearRange::single(2020).contains(2021));
}

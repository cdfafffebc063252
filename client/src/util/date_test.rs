use super::*;

#[test]
fn long_date_formats_rfc3339() {
    assert_eq!(long_date("2025-01-02T03:04:05Z"), "January 2, 2025");
    assert_eq!(long_date("2024-12-31T23:00:00.123456+00:00"), "December 31, 2024");
}

#[test]
fn naive_timestamps_and_plain_dates_parse() {
    assert_eq!(long_date("2025-03-09T10:00:00.5"), "March 9, 2025");
    assert_eq!(short_date("2025-03-09"), "3/9/2025");
}

#[test]
fn offsets_are_normalised_to_utc() {
    assert_eq!(short_date("2025-01-02T01:00:00+02:00"), "1/1/2025");
}

#[test]
fn unparseable_input_is_shown_verbatim() {
    assert_eq!(long_date("yesterday"), "yesterday");
    assert_eq!(short_date(""), "");
}

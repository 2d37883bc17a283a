// tests/timeline_tests.rs
use chrono::NaiveDate;
use drindex::{Error, LabeledArray, parse_date, time_dimension};
use ndarray::{ArrayD, IxDyn};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A bare stack with a `band` acquisition axis of the given length.
fn raw_stack(len: usize) -> LabeledArray {
    let data = ArrayD::<f64>::zeros(IxDyn(&[len, 2, 2]));
    LabeledArray::new(data, ["band", "y", "x"]).unwrap()
}

#[test]
fn test_monthly_stamps_from_default_start() {
    // All defaults: start 2000-02-01, monthly cadence, band -> time.
    let labeled = time_dimension(raw_stack(3), None, None, None, None).unwrap();

    assert_eq!(labeled.dims(), ["time", "y", "x"]);
    assert_eq!(
        labeled.time_coords("time").unwrap(),
        [ymd(2000, 2, 1), ymd(2000, 3, 1), ymd(2000, 4, 1)]
    );
}

#[test]
fn test_daily_stamps_across_leap_day() {
    let labeled =
        time_dimension(raw_stack(3), Some("2000-02-28"), Some("day"), None, None).unwrap();

    assert_eq!(
        labeled.time_coords("time").unwrap(),
        [ymd(2000, 2, 28), ymd(2000, 2, 29), ymd(2000, 3, 1)]
    );
}

#[test]
fn test_yearly_stamps() {
    let labeled =
        time_dimension(raw_stack(3), Some("2000-06-15"), Some("years"), None, None).unwrap();

    assert_eq!(
        labeled.time_coords("time").unwrap(),
        [ymd(2000, 6, 15), ymd(2001, 6, 15), ymd(2002, 6, 15)]
    );
}

#[test]
fn test_monthly_stamps_clamp_month_end() {
    let labeled =
        time_dimension(raw_stack(3), Some("2000-01-31"), Some("m"), None, None).unwrap();

    assert_eq!(
        labeled.time_coords("time").unwrap(),
        [ymd(2000, 1, 31), ymd(2000, 2, 29), ymd(2000, 3, 31)]
    );
}

#[test]
fn test_custom_dims() {
    let data = ArrayD::<f64>::zeros(IxDyn(&[2, 2, 2]));
    let stack = LabeledArray::new(data, ["acquisition", "y", "x"]).unwrap();
    let labeled = time_dimension(
        stack,
        Some("2010-01-01"),
        Some("month"),
        Some("acquisition"),
        Some("date"),
    )
    .unwrap();

    assert_eq!(labeled.dims(), ["date", "y", "x"]);
    assert_eq!(
        labeled.time_coords("date").unwrap(),
        [ymd(2010, 1, 1), ymd(2010, 2, 1)]
    );
}

#[test]
fn test_unknown_input_dim_fails() {
    match time_dimension(raw_stack(2), None, None, Some("layer"), None) {
        Err(Error::UnknownDimension { dim, available }) => {
            assert_eq!(dim, "layer");
            assert_eq!(available, ["band", "y", "x"]);
        }
        other => panic!("expected UnknownDimension, got {other:?}"),
    }
}

#[test]
fn test_unsupported_cadence_fails() {
    assert!(matches!(
        time_dimension(raw_stack(2), None, Some("week"), None, None),
        Err(Error::UnsupportedFrequency { .. })
    ));
}

#[test]
fn test_parse_date_accepts_iso() {
    assert_eq!(parse_date("2000-02-01").unwrap(), ymd(2000, 2, 1));
}

#[test]
fn test_parse_date_normalizes_delimiters() {
    assert_eq!(parse_date("2000.02.01").unwrap(), ymd(2000, 2, 1));
    assert_eq!(parse_date("2000/02/01").unwrap(), ymd(2000, 2, 1));
}

#[test]
fn test_parse_date_rejects_malformed_strings() {
    for bad in ["garbage", "2000-13-01", "01-2000-02", ""] {
        match parse_date(bad) {
            Err(Error::InvalidDate { value, .. }) => assert_eq!(value, bad),
            other => panic!("expected InvalidDate for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_frequency_aliases() {
    for token in ["d", "DAY", "Days", "m", "Month", "MONTHS", "y", "year", "Years"] {
        assert!(token.parse::<drindex::Frequency>().is_ok(), "alias {token}");
    }
    assert!("weekly".parse::<drindex::Frequency>().is_err());
}

#[test]
fn test_relabel_preserves_values() {
    let data = ArrayD::from_shape_vec(IxDyn(&[2, 1, 1]), vec![1.0, 2.0]).unwrap();
    let stack = LabeledArray::new(data.clone(), ["band", "y", "x"]).unwrap();
    let labeled = time_dimension(stack, None, None, None, None).unwrap();

    assert_eq!(labeled.data(), &data);
}

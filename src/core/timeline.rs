//! Time labeler: synthesizes a calendar coordinate for a sequential
//! acquisition axis and renames it to a proper time dimension.
use chrono::{Days, Months, NaiveDate};
use tracing::debug;

use crate::core::array::LabeledArray;
use crate::error::{Error, Result};
use crate::types::Frequency;

const DATE_FMT: &str = "%Y-%m-%d";
const DEFAULT_START: &str = "2000-02-01";
const DEFAULT_INPUT_DIM: &str = "band";
const DEFAULT_OUT_DIM: &str = "time";

/// Attach a calendar time coordinate to a raster stack.
///
/// The axis named `input_dim` (default `"band"`) is taken as the sequential
/// acquisition axis: timestamp `i` is `start_date` stepped forward by `i`
/// units of `freq` (default monthly, from `"2000-02-01"`). The axis is then
/// renamed to `out_dim` (default `"time"`), ready for the index functions.
pub fn time_dimension(
    array: LabeledArray,
    start_date: Option<&str>,
    freq: Option<&str>,
    input_dim: Option<&str>,
    out_dim: Option<&str>,
) -> Result<LabeledArray> {
    let start = parse_date(start_date.unwrap_or(DEFAULT_START))?;
    let freq = Frequency::resolve(freq)?;
    let input_dim = input_dim.unwrap_or(DEFAULT_INPUT_DIM);
    let out_dim = out_dim.unwrap_or(DEFAULT_OUT_DIM);

    let axis = array.axis_of(input_dim).ok_or_else(|| Error::UnknownDimension {
        dim: input_dim.to_string(),
        available: array.dims().to_vec(),
    })?;
    let len = array.shape()[axis];
    let stamps = (0..len)
        .map(|i| {
            step(start, freq, i).ok_or(Error::DateOverflow {
                start,
                freq,
                offset: i,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "Labeled axis {} with {} stamp(s) from {} at {} cadence",
        input_dim, len, start, freq
    );

    let mut array = array.with_time(input_dim, stamps)?;
    array.rename_dim(input_dim, out_dim)?;
    Ok(array)
}

/// Parse a calendar date string.
///
/// `YYYY-MM-DD` is accepted directly. Dot- or slash-delimited variants
/// (`YYYY.MM.DD`, `YYYY/MM/DD`) are normalized by extracting the digit
/// groups and rejoining them with hyphens. Anything else fails with
/// [`Error::InvalidDate`].
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(value, DATE_FMT) {
        Ok(date) => Ok(date),
        Err(_) => NaiveDate::parse_from_str(&normalize_date(value), DATE_FMT).map_err(|source| {
            Error::InvalidDate {
                value: value.to_string(),
                source,
            }
        }),
    }
}

fn normalize_date(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Step `offset` cadence units forward. Month steps clamp the day-of-month
/// the way calendar arithmetic conventionally does (Jan 31 + 1 month =
/// Feb 28/29). Returns `None` on calendar overflow.
fn step(start: NaiveDate, freq: Frequency, offset: usize) -> Option<NaiveDate> {
    match freq {
        Frequency::Day => start.checked_add_days(Days::new(offset as u64)),
        Frequency::Month => start.checked_add_months(Months::new(u32::try_from(offset).ok()?)),
        Frequency::Year => {
            let months = u32::try_from(offset).ok()?.checked_mul(12)?;
            start.checked_add_months(Months::new(months))
        }
    }
}

//! Period-grouping engine behind the condition and anomaly indices.
//!
//! Grouping is an explicit two-pass algorithm: fold one aggregate frame per
//! distinct period key over the time axis, then broadcast the aggregate back
//! over every observation sharing that key.
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{Datelike, NaiveDate};
use ndarray::{ArrayD, Axis};

use crate::types::Frequency;

/// Grouping key for one timestamp under the given granularity. Month and day
/// keys ignore the calendar year, so aggregates span every year in the
/// series (the long-term climatological baseline). Yearly granularity
/// collapses the whole series into a single group: with one year of data the
/// baseline is the series itself.
pub(crate) fn period_key(freq: Frequency, stamp: NaiveDate) -> u32 {
    match freq {
        Frequency::Day => stamp.ordinal(),
        Frequency::Month => stamp.month(),
        Frequency::Year => 0,
    }
}

pub(crate) fn period_keys(freq: Frequency, stamps: &[NaiveDate]) -> Vec<u32> {
    stamps.iter().map(|&s| period_key(freq, s)).collect()
}

/// First pass: fold the frames along `axis` into one aggregate frame per
/// key. The first frame of a group seeds the aggregate; later frames are
/// combined element-wise.
pub(crate) fn fold_by_key(
    data: &ArrayD<f64>,
    axis: Axis,
    keys: &[u32],
    combine: impl Fn(&mut f64, f64),
) -> HashMap<u32, ArrayD<f64>> {
    let mut groups: HashMap<u32, ArrayD<f64>> = HashMap::new();
    for (i, frame) in data.axis_iter(axis).enumerate() {
        match groups.entry(keys[i]) {
            Entry::Vacant(slot) => {
                slot.insert(frame.to_owned());
            }
            Entry::Occupied(mut slot) => {
                for (acc, &v) in slot.get_mut().iter_mut().zip(frame.iter()) {
                    combine(acc, v);
                }
            }
        }
    }
    groups
}

pub(crate) fn group_counts(keys: &[u32]) -> HashMap<u32, usize> {
    let mut counts = HashMap::new();
    for &key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

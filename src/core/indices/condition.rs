//! Condition indices: per-period min-max normalization of a time series
//! against its multi-year baseline.
use ndarray::{ArrayD, Axis, Zip};
use tracing::debug;

use crate::core::array::LabeledArray;
use crate::core::baseline::{fold_by_key, period_keys};
use crate::error::Result;
use crate::types::Frequency;

/// Vegetation Condition Index from time-series NDVI observations.
///
/// Each observation is placed within the historical range of its period
/// group: `(v - min) / (max - min) * 100`. `dim` names the time axis
/// (defaults to the first axis); `freq` is the period granularity (defaults
/// to month). Pixels whose baseline group is flat divide 0 by 0 and come out
/// NaN; callers must tolerate that.
///
/// Reference: <https://doi.org/10.1016/0273-1177(95)00079-T>
pub fn vci(data: &LabeledArray, dim: Option<&str>, freq: Option<&str>) -> Result<LabeledArray> {
    condition_index(data, dim, freq)
}

/// Temperature Condition Index from time-series LST observations.
///
/// Same normalization as [`vci`]. The inverted domain reading (hot means
/// stressed) is the caller's interpretation; the formula is symmetric.
///
/// Reference: <https://doi.org/10.1016/0273-1177(95)00079-T>
pub fn tci(data: &LabeledArray, dim: Option<&str>, freq: Option<&str>) -> Result<LabeledArray> {
    condition_index(data, dim, freq)
}

fn condition_index(
    data: &LabeledArray,
    dim: Option<&str>,
    freq: Option<&str>,
) -> Result<LabeledArray> {
    let freq = Frequency::resolve(freq)?;
    let (axis, stamps) = data.resolve_time_axis(dim)?;
    let keys = period_keys(freq, stamps);

    let mins = fold_by_key(data.data(), Axis(axis), &keys, |acc, v| {
        if v < *acc {
            *acc = v;
        }
    });
    let maxs = fold_by_key(data.data(), Axis(axis), &keys, |acc, v| {
        if v > *acc {
            *acc = v;
        }
    });
    debug!(
        "Condition index baseline: {} observations in {} {} group(s)",
        keys.len(),
        mins.len(),
        freq
    );

    let mut out = ArrayD::<f64>::zeros(data.data().raw_dim());
    for (i, mut slot) in out.axis_iter_mut(Axis(axis)).enumerate() {
        let frame = data.data().index_axis(Axis(axis), i);
        let lo = &mins[&keys[i]];
        let hi = &maxs[&keys[i]];
        Zip::from(&mut slot)
            .and(&frame)
            .and(lo)
            .and(hi)
            .for_each(|o, &v, &lo, &hi| {
                *o = (v - lo) / (hi - lo) * 100.0;
            });
    }
    Ok(data.with_data(out))
}

//! Anomaly index: deviation from the per-period multi-year mean.
use ndarray::{ArrayD, Axis, Zip};
use tracing::debug;

use crate::core::array::LabeledArray;
use crate::core::baseline::{fold_by_key, group_counts, period_keys};
use crate::error::Result;
use crate::types::Frequency;

/// Anomaly Vegetation Index from time-series NDVI observations.
///
/// Each observation is reduced by the mean of its period group:
/// `v - group_mean`. No scaling and no bounding; the result keeps the input
/// units with sign. Defaults match [`crate::vci`]: first axis, monthly
/// grouping.
pub fn avi(data: &LabeledArray, dim: Option<&str>, freq: Option<&str>) -> Result<LabeledArray> {
    let freq = Frequency::resolve(freq)?;
    let (axis, stamps) = data.resolve_time_axis(dim)?;
    let keys = period_keys(freq, stamps);

    let sums = fold_by_key(data.data(), Axis(axis), &keys, |acc, v| *acc += v);
    let counts = group_counts(&keys);
    debug!(
        "Anomaly baseline: {} observations in {} {} group(s)",
        keys.len(),
        sums.len(),
        freq
    );

    let mut out = ArrayD::<f64>::zeros(data.data().raw_dim());
    for (i, mut slot) in out.axis_iter_mut(Axis(axis)).enumerate() {
        let frame = data.data().index_axis(Axis(axis), i);
        let sum = &sums[&keys[i]];
        let n = counts[&keys[i]] as f64;
        Zip::from(&mut slot).and(&frame).and(sum).for_each(|o, &v, &s| {
            *o = v - s / n;
        });
    }
    Ok(data.with_data(out))
}

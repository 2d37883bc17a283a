//! Vegetation Health Index: weighted blend of condition indices.
use crate::core::array::NumericArray;
use crate::error::{Error, Result};

/// Vegetation Health Index from VCI and TCI.
///
/// `scale * vci + (1 - scale) * tci`, element-wise. Works on any
/// [`NumericArray`], so both [`crate::LabeledArray`] outputs and plain
/// `ArrayD<f64>` buffers blend directly. `scale` weights the vegetation term
/// and is mandatory; 0.5 is the conventional choice.
///
/// Reference: <https://doi.org/10.1080/01431169008955102>
pub fn vhi<A: NumericArray>(vci: &A, tci: &A, scale: f64) -> Result<A> {
    if vci.shape() != tci.shape() {
        return Err(Error::ShapeMismatch {
            left: vci.shape().to_vec(),
            right: tci.shape().to_vec(),
        });
    }
    Ok(vci.zip_map(tci, |v, t| scale * v + (1.0 - scale) * t))
}
